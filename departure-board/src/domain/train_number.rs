//! Train number type.

use std::fmt;

/// A positive train number.
///
/// Train numbers identify a departure for the day; uniqueness across the
/// register is checked by the register, not here.
///
/// # Examples
///
/// ```
/// use departure_board::domain::TrainNumber;
///
/// let n = TrainNumber::new(601).unwrap();
/// assert_eq!(n.get(), 601);
///
/// assert!(TrainNumber::new(0).is_none());
/// assert!(TrainNumber::new(-4).is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrainNumber(u32);

impl TrainNumber {
    /// Returns `None` unless `n` is positive and fits in a `u32`.
    pub fn new(n: i64) -> Option<Self> {
        if n <= 0 {
            return None;
        }
        u32::try_from(n).ok().map(TrainNumber)
    }

    /// Returns the number.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrainNumber({})", self.0)
    }
}

impl fmt::Display for TrainNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
