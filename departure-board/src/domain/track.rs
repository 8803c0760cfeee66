//! Track assignment.

use std::fmt;
use std::num::NonZeroU32;

/// The track a departure leaves from, if one has been assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Track {
    #[default]
    Unassigned,
    Assigned(NonZeroU32),
}

impl Track {
    /// Raw value conventionally used for "no track yet".
    pub const UNASSIGNED_RAW: i64 = -1;

    /// Map a raw track number; anything not positive means unassigned.
    ///
    /// # Examples
    ///
    /// ```
    /// use departure_board::domain::Track;
    ///
    /// assert_eq!(Track::from_raw(2).number(), Some(2));
    /// assert_eq!(Track::from_raw(0), Track::Unassigned);
    /// assert_eq!(Track::from_raw(Track::UNASSIGNED_RAW), Track::Unassigned);
    /// ```
    pub fn from_raw(n: i64) -> Self {
        u32::try_from(n)
            .ok()
            .and_then(NonZeroU32::new)
            .map_or(Track::Unassigned, Track::Assigned)
    }

    /// The track number, if assigned.
    pub fn number(&self) -> Option<u32> {
        match self {
            Track::Unassigned => None,
            Track::Assigned(n) => Some(n.get()),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Unassigned => Ok(()),
            Track::Assigned(n) => write!(f, "{n}"),
        }
    }
}
