//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{ClockTime, DepartureRecord};
use crate::register::BoardStatus;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The departure board: upcoming departures, or the whole day's history.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub title: &'static str,
    pub status: StatusView,
    pub rows: Vec<DepartureRow>,
    /// Whether departed trains are included
    pub history: bool,
}

impl BoardTemplate {
    /// Upcoming departures only.
    pub fn upcoming(status: BoardStatus, records: &[DepartureRecord]) -> Self {
        Self::build("Departures", status, records, false)
    }

    /// Every departure today, departed ones marked.
    pub fn history(status: BoardStatus, records: &[DepartureRecord]) -> Self {
        Self::build("Today's departures", status, records, true)
    }

    fn build(
        title: &'static str,
        status: BoardStatus,
        records: &[DepartureRecord],
        history: bool,
    ) -> Self {
        Self {
            title,
            status: StatusView::from_status(status),
            rows: records
                .iter()
                .map(|r| DepartureRow::from_record(r, status.clock))
                .collect(),
            history,
        }
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Status bar contents.
#[derive(Debug, Clone)]
pub struct StatusView {
    pub clock: String,
    pub departures_today: usize,
}

impl StatusView {
    pub fn from_status(status: BoardStatus) -> Self {
        Self {
            clock: status.clock.to_string(),
            departures_today: status.departures_today,
        }
    }
}

/// One row of the board.
#[derive(Debug, Clone)]
pub struct DepartureRow {
    pub departure_time: String,
    pub real_departure_time: String,
    pub line: String,
    pub train_number: u32,
    pub destination: String,
    pub delay_minutes: u32,
    /// Empty when no track is assigned
    pub track: String,
    pub departed: bool,
}

impl DepartureRow {
    /// Whether the train runs late.
    pub fn is_delayed(&self) -> bool {
        self.delay_minutes > 0
    }

    /// Text for the delay column: "+10 min", or empty when on time.
    pub fn delay_label(&self) -> String {
        if self.is_delayed() {
            format!("+{} min", self.delay_minutes)
        } else {
            String::new()
        }
    }

    /// Text for the remarks column.
    pub fn remark(&self) -> String {
        if self.departed {
            "DEPARTED".to_string()
        } else if self.is_delayed() {
            format!("New time {}", self.real_departure_time)
        } else {
            String::new()
        }
    }

    pub fn from_record(record: &DepartureRecord, clock: ClockTime) -> Self {
        Self {
            departure_time: record.departure_time().to_string(),
            real_departure_time: record.real_departure_time().to_string(),
            line: record.line().to_string(),
            train_number: record.train_number().get(),
            destination: record.destination().to_string(),
            delay_minutes: record.delay_minutes(),
            track: record.track().to_string(),
            departed: record.has_departed(clock),
        }
    }
}
