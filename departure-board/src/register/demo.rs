//! A small timetable for demonstrations and manual testing.

use tracing::warn;

use super::departures::DepartureRegister;
use crate::domain::{ClockTime, DepartureSpec, Track};

const NO_TRACK: i64 = Track::UNASSIGNED_RAW;

/// (time, number, line, destination, delay minutes, track)
const DEMO_TIMETABLE: [(u32, u32, i64, &str, &str, i32, i64); 4] = [
    (12, 43, 601, "F2", "Bergen", 0, NO_TRACK),
    (12, 45, 63, "L4", "Oslo", 10, NO_TRACK),
    (14, 13, 31, "RE10", "Ås", 0, NO_TRACK),
    (14, 43, 201, "F3", "Voss", 70, 2),
];

/// Register the demonstration departures.
///
/// Departures already behind the clock, or whose numbers are taken, are
/// skipped. Returns how many were added.
pub fn seed_demo_departures(register: &mut DepartureRegister) -> usize {
    let mut added = 0;
    for (hour, minute, number, line, destination, delay, track) in DEMO_TIMETABLE {
        let Some(time) = ClockTime::from_hm(hour, minute) else {
            continue;
        };
        let spec = DepartureSpec {
            delay_minutes: delay,
            track: Track::from_raw(track),
            ..DepartureSpec::new(time, number, line, destination)
        };
        match register.insert(spec) {
            Ok(_) => added += 1,
            Err(e) => warn!(number, error = %e, "skipped demo departure"),
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_all_on_fresh_register() {
        let mut register = DepartureRegister::new();
        assert_eq!(seed_demo_departures(&mut register), 4);

        let numbers: Vec<u32> = register.iter().map(|r| r.train_number().get()).collect();
        assert_eq!(numbers, vec![601, 63, 31, 201]);

        let voss = register.get(201).unwrap();
        assert_eq!(voss.real_departure_time().to_string(), "15:53");
        assert_eq!(voss.track().number(), Some(2));
        assert_eq!(register.get(31).unwrap().destination(), "Ås");
    }

    #[test]
    fn skips_departures_behind_the_clock() {
        let mut register = DepartureRegister::with_clock(ClockTime::from_hm(13, 0).unwrap());
        assert_eq!(seed_demo_departures(&mut register), 2);
        assert!(register.is_train_number_unique(601));
        assert!(!register.is_train_number_unique(201));
    }

    #[test]
    fn seeding_twice_adds_nothing() {
        let mut register = DepartureRegister::new();
        seed_demo_departures(&mut register);
        assert_eq!(seed_demo_departures(&mut register), 0);
        assert_eq!(register.len(), 4);
    }
}
