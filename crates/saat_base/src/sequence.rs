//! Chaldean order and the weekday → 24-hour ruler table.
//!
//! Hour `k` of a day is ruled by the planet `k` steps after the day ruler
//! in the descending Chaldean order, wrapping every 7 hours. Hour 24 thus
//! lands on the next weekday's ruler.

use chrono::Weekday;

use crate::planet::Planet;

/// Number of planetary hours in one sunrise-to-sunrise day.
pub const HOURS_PER_DAY: usize = 24;

/// Classical planets by decreasing orbital period.
pub const CHALDEAN_ORDER: [Planet; 7] = [
    Planet::Saturn,
    Planet::Jupiter,
    Planet::Mars,
    Planet::Sun,
    Planet::Venus,
    Planet::Mercury,
    Planet::Moon,
];

const fn chaldean_position(planet: Planet) -> usize {
    match planet {
        Planet::Saturn => 0,
        Planet::Jupiter => 1,
        Planet::Mars => 2,
        Planet::Sun => 3,
        Planet::Venus => 4,
        Planet::Mercury => 5,
        Planet::Moon => 6,
    }
}

const fn build_sequence(ruler: Planet) -> [Planet; HOURS_PER_DAY] {
    let start = chaldean_position(ruler);
    let mut out = [Planet::Saturn; HOURS_PER_DAY];
    let mut i = 0;
    while i < HOURS_PER_DAY {
        out[i] = CHALDEAN_ORDER[(start + i) % 7];
        i += 1;
    }
    out
}

/// Hour rulers per weekday, indexed by days from Sunday.
pub const WEEKDAY_SEQUENCES: [[Planet; HOURS_PER_DAY]; 7] = [
    build_sequence(Planet::Sun),
    build_sequence(Planet::Moon),
    build_sequence(Planet::Mars),
    build_sequence(Planet::Mercury),
    build_sequence(Planet::Jupiter),
    build_sequence(Planet::Venus),
    build_sequence(Planet::Saturn),
];

/// The 24 hour rulers for a weekday, day hours first.
pub fn planetary_sequence(weekday: Weekday) -> &'static [Planet; HOURS_PER_DAY] {
    &WEEKDAY_SEQUENCES[weekday.num_days_from_sunday() as usize]
}

/// Ruler of hour `hour_index` (0..23, wrapping) of a weekday.
pub fn hour_ruler(weekday: Weekday, hour_index: usize) -> Planet {
    planetary_sequence(weekday)[hour_index % HOURS_PER_DAY]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::day_ruler;

    const WEEK: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    #[test]
    fn first_hour_is_day_ruler() {
        for wd in WEEK {
            assert_eq!(planetary_sequence(wd)[0], day_ruler(wd), "{wd:?}");
        }
    }

    #[test]
    fn sunday_opening_hours() {
        let seq = planetary_sequence(Weekday::Sun);
        assert_eq!(
            &seq[..8],
            &[
                Planet::Sun,
                Planet::Venus,
                Planet::Mercury,
                Planet::Moon,
                Planet::Saturn,
                Planet::Jupiter,
                Planet::Mars,
                Planet::Sun,
            ]
        );
    }

    #[test]
    fn hour_after_last_is_next_day_ruler() {
        for wd in WEEK {
            let last = planetary_sequence(wd)[HOURS_PER_DAY - 1];
            let pos = CHALDEAN_ORDER.iter().position(|p| *p == last).unwrap();
            assert_eq!(CHALDEAN_ORDER[(pos + 1) % 7], day_ruler(wd.succ()), "{wd:?}");
        }
    }

    #[test]
    fn every_planet_rules_at_least_three_hours() {
        for wd in WEEK {
            let seq = planetary_sequence(wd);
            for p in CHALDEAN_ORDER {
                assert!(seq.iter().filter(|x| **x == p).count() >= 3);
            }
        }
    }

    #[test]
    fn hour_ruler_wraps() {
        assert_eq!(hour_ruler(Weekday::Wed, 0), Planet::Mercury);
        assert_eq!(hour_ruler(Weekday::Wed, 24), Planet::Mercury);
        assert_eq!(hour_ruler(Weekday::Wed, 1), Planet::Moon);
    }
}
