//! The departure register.
//!
//! Holds the day's departures ordered by departure time, then train number.
//! Every mutation validates fully before touching any state, so a rejected
//! operation leaves the register exactly as it was.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, info, trace};

use super::clock::StationClock;
use super::edit::FieldEdit;
use crate::domain::{
    ClockTime, DepartureRecord, DepartureSpec, Field, RegisterError, TrainNumber,
    normalize_destination,
};

/// Ordering key: departure time, then train number.
type SlotKey = (ClockTime, TrainNumber);

/// Clock reading and number of departures, for a status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardStatus {
    pub clock: ClockTime,
    pub departures_today: usize,
}

/// A single station's departures for the current day.
///
/// Train numbers are unique across the register. Queries return owned
/// snapshots in `(departure time, train number)` order, so callers can keep
/// them while the register changes.
///
/// # Examples
///
/// ```
/// use departure_board::register::DepartureRegister;
///
/// let mut register = DepartureRegister::new();
/// register.set_clock("10:00").unwrap();
///
/// assert!(register.add_departure("11:00", 13, "L2", "Oslo").is_ok());
/// assert!(register.add_departure("09:00", 14, "L3", "Bergen").is_err());
/// assert!(register.add_departure("11:30", 13, "F1", "Voss").is_err());
///
/// assert_eq!(register.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DepartureRegister {
    departures: BTreeMap<SlotKey, DepartureRecord>,
    by_number: HashMap<TrainNumber, ClockTime>,
    clock: StationClock,
}

impl DepartureRegister {
    /// An empty register with the clock at 00:00.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty register with the clock at the given time.
    pub fn with_clock(now: ClockTime) -> Self {
        Self {
            clock: StationClock::starting_at(now),
            ..Self::default()
        }
    }

    /// The station clock's current reading.
    pub fn clock(&self) -> ClockTime {
        self.clock.now()
    }

    /// Number of departures registered today, departed ones included.
    pub fn len(&self) -> usize {
        self.departures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departures.is_empty()
    }

    pub fn status(&self) -> BoardStatus {
        BoardStatus {
            clock: self.clock(),
            departures_today: self.len(),
        }
    }

    /// Register a departure from its "HH:MM" time and required fields.
    ///
    /// Rejected if the time is malformed, the train number is not positive or
    /// already in use, or the time is not after the station clock.
    pub fn add_departure(
        &mut self,
        departure_time: &str,
        train_number: i64,
        line: &str,
        destination: &str,
    ) -> Result<TrainNumber, RegisterError> {
        let departure_time = ClockTime::parse_hhmm(departure_time).inspect_err(|e| {
            debug!(train_number, error = %e, "rejected departure with malformed time");
        })?;
        self.insert(DepartureSpec::new(
            departure_time,
            train_number,
            line,
            destination,
        ))
    }

    /// Register a departure from a spec.
    pub fn insert(&mut self, spec: DepartureSpec) -> Result<TrainNumber, RegisterError> {
        let record = DepartureRecord::new(spec).inspect_err(|e| {
            debug!(error = %e, "rejected departure");
        })?;
        let number = record.train_number();

        if self.by_number.contains_key(&number) {
            debug!(%number, "rejected departure: duplicate train number");
            return Err(RegisterError::DuplicateTrainNumber(number));
        }
        self.check_upcoming(record.departure_time())
            .inspect_err(|e| debug!(%number, error = %e, "rejected departure"))?;

        info!(
            %number,
            time = %record.departure_time(),
            line = record.line(),
            destination = record.destination(),
            "registered departure"
        );
        self.put(record);
        Ok(number)
    }

    /// Remove a departure, returning it if it was registered.
    pub fn remove_departure(&mut self, train_number: i64) -> Option<DepartureRecord> {
        let key = self.key_of(train_number)?;
        self.by_number.remove(&key.1);
        let record = self.departures.remove(&key);
        info!(number = %key.1, "removed departure");
        record
    }

    /// True if no registered departure uses this train number.
    pub fn is_train_number_unique(&self, train_number: i64) -> bool {
        self.key_of(train_number).is_none()
    }

    /// Borrow the departure with this train number.
    pub fn get(&self, train_number: i64) -> Option<&DepartureRecord> {
        self.key_of(train_number).and_then(|key| self.departures.get(&key))
    }

    /// The departure with this train number, as a sequence of zero or one.
    pub fn search_by_train_number(&self, train_number: i64) -> Vec<DepartureRecord> {
        trace!(train_number, "search by train number");
        self.get(train_number).cloned().into_iter().collect()
    }

    /// Departures whose destination matches, ignoring case.
    ///
    /// Matching compares shortened display forms, not full names: the query
    /// is normalized like a stored destination first, so any two names that
    /// shorten to the same text match ("Kristiansand sør" finds a departure
    /// registered as "Kristiansand sentrum").
    pub fn search_by_destination(&self, destination: &str) -> Vec<DepartureRecord> {
        trace!(destination, "search by destination");
        if destination.trim().is_empty() {
            return Vec::new();
        }
        let wanted = normalize_destination(Some(destination)).to_lowercase();
        self.departures
            .values()
            .filter(|record| record.destination().to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    /// Advance the station clock to "HH:MM".
    ///
    /// Rejected if the time is malformed or not after the current reading;
    /// the clock is then unchanged.
    pub fn set_clock(&mut self, time: &str) -> Result<ClockTime, RegisterError> {
        let time = ClockTime::parse_hhmm(time)?;
        self.advance_clock(time)
    }

    /// Advance the station clock to an already parsed time.
    pub fn advance_clock(&mut self, time: ClockTime) -> Result<ClockTime, RegisterError> {
        match self.clock.advance_to(time) {
            Ok(now) => {
                info!(clock = %now, "station clock advanced");
                Ok(now)
            }
            Err(e) => {
                debug!(error = %e, "station clock not moved");
                Err(e)
            }
        }
    }

    /// Start a new day: clock back to 00:00 and every departure removed.
    pub fn reset_day(&mut self) {
        info!(cleared = self.len(), "starting a new day");
        self.departures.clear();
        self.by_number.clear();
        self.clock.reset();
    }

    /// Iterate over every departure in board order, without copying.
    pub fn iter(&self) -> impl Iterator<Item = &DepartureRecord> + '_ {
        self.departures.values()
    }

    /// Every departure today, including those that have left.
    pub fn all_departures(&self) -> Vec<DepartureRecord> {
        self.iter().cloned().collect()
    }

    /// Departures whose real departure time has not yet passed.
    ///
    /// A delayed train stays listed after its scheduled time until the
    /// delayed time has passed.
    pub fn visible_departures(&self) -> Vec<DepartureRecord> {
        let now = self.clock();
        self.iter()
            .filter(|record| !record.has_departed(now))
            .cloned()
            .collect()
    }

    /// Change one field of a departure.
    ///
    /// Returns the updated departure. On error the departure is unchanged.
    pub fn edit(
        &mut self,
        train_number: i64,
        edit: FieldEdit,
    ) -> Result<DepartureRecord, RegisterError> {
        let key = self
            .key_of(train_number)
            .ok_or(RegisterError::RecordNotFound(train_number))
            .inspect_err(|e| debug!(error = %e, "edit rejected"))?;
        let field = edit.field();

        let result = match edit {
            FieldEdit::DepartureTime(time) => self.reschedule(key, &time),
            FieldEdit::TrainNumber(n) => self.renumber(key, n),
            FieldEdit::Line(line) => self.update(key, |r| r.set_line(line.as_deref())),
            FieldEdit::Destination(name) => {
                self.update(key, |r| r.set_destination(name.as_deref()))
            }
            FieldEdit::Delay(minutes) => self.update(key, |r| r.set_delay(minutes)),
            FieldEdit::Track(track) => self.update(key, |r| r.set_track(track)),
        };

        match &result {
            Ok(record) => info!(number = %record.train_number(), %field, "edited departure"),
            Err(e) => debug!(number = %key.1, %field, error = %e, "edit rejected"),
        }
        result
    }

    /// Assign a track to a departure; zero or negative unassigns it.
    pub fn assign_track(
        &mut self,
        train_number: i64,
        track: i64,
    ) -> Result<DepartureRecord, RegisterError> {
        self.edit(train_number, FieldEdit::Track(track))
    }

    fn key_of(&self, train_number: i64) -> Option<SlotKey> {
        let number = TrainNumber::new(train_number)?;
        self.by_number.get(&number).map(|&time| (time, number))
    }

    fn check_upcoming(&self, time: ClockTime) -> Result<(), RegisterError> {
        if self.clock.is_before(time) {
            Ok(())
        } else {
            Err(RegisterError::DepartureAlreadyPassed {
                proposed: time,
                clock: self.clock(),
            })
        }
    }

    fn put(&mut self, record: DepartureRecord) {
        let key = (record.departure_time(), record.train_number());
        self.by_number.insert(key.1, key.0);
        self.departures.insert(key, record);
    }

    /// Take a record out, change it, and put it back under its new key.
    fn rekey(
        &mut self,
        key: SlotKey,
        change: impl FnOnce(&mut DepartureRecord),
    ) -> Result<DepartureRecord, RegisterError> {
        let mut record = self.departures.remove(&key).ok_or_else(|| missing(key))?;
        self.by_number.remove(&key.1);
        change(&mut record);
        let updated = record.clone();
        self.put(record);
        Ok(updated)
    }

    /// Change a field that is not part of the ordering key.
    fn update(
        &mut self,
        key: SlotKey,
        change: impl FnOnce(&mut DepartureRecord),
    ) -> Result<DepartureRecord, RegisterError> {
        let record = self.departures.get_mut(&key).ok_or_else(|| missing(key))?;
        change(record);
        Ok(record.clone())
    }

    fn reschedule(&mut self, key: SlotKey, time: &str) -> Result<DepartureRecord, RegisterError> {
        let time = ClockTime::parse_hhmm(time)?;
        self.check_upcoming(time)?;
        self.rekey(key, |record| record.reschedule(time))
    }

    fn renumber(&mut self, key: SlotKey, n: i64) -> Result<DepartureRecord, RegisterError> {
        let number = TrainNumber::new(n).ok_or(RegisterError::InvalidFieldValue {
            field: Field::TrainNumber,
            value: n,
        })?;
        if number != key.1 && self.by_number.contains_key(&number) {
            return Err(RegisterError::DuplicateTrainNumber(number));
        }
        self.rekey(key, |record| record.renumber(number))
    }
}

/// Index entry with no matching departure.
fn missing(key: SlotKey) -> RegisterError {
    RegisterError::RecordNotFound(i64::from(key.1.get()))
}
