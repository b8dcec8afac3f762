use std::fmt;

use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seed derived from the ISO calendar week of a date.
///
/// Every run within the same ISO week uses the same seed and therefore
/// produces the same plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WeeklySeed {
    pub(crate) year: i32,
    pub(crate) week: u32,
}

impl WeeklySeed {
    pub(crate) fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            year: iso.year(),
            week: iso.week(),
        }
    }

    /// Numeric value of the `"{year}{week}"` seed string
    pub(crate) fn value(self) -> u64 {
        let year = u64::from(self.year.unsigned_abs());
        let week = u64::from(self.week);
        let shift = if week < 10 { 10 } else { 100 };
        year * shift + week
    }

    pub(crate) fn rng(self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.value())
    }
}

impl fmt::Display for WeeklySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.year, self.week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seed_string_is_year_then_week() {
        let seed = WeeklySeed::from_date(date(2026, 10, 19));
        assert_eq!(seed, WeeklySeed { year: 2026, week: 43 });
        assert_eq!(seed.to_string(), "202643");
        assert_eq!(seed.value(), 202_643);
    }

    #[test]
    fn single_digit_week_not_padded() {
        let seed = WeeklySeed::from_date(date(2026, 1, 1));
        assert_eq!(seed.to_string(), "20261");
        assert_eq!(seed.value(), 20_261);
    }

    #[test]
    fn iso_year_differs_from_calendar_year() {
        // 2026 has 53 ISO weeks; Jan 1 2027 still belongs to it
        let seed = WeeklySeed::from_date(date(2027, 1, 1));
        assert_eq!(seed.to_string(), "202653");
    }

    #[test]
    fn same_week_same_seed() {
        // Monday through Sunday of one ISO week
        let monday = WeeklySeed::from_date(date(2026, 10, 19));
        let sunday = WeeklySeed::from_date(date(2026, 10, 25));
        assert_eq!(monday, sunday);
        // Sunday before belongs to the previous ISO week
        assert_ne!(monday, WeeklySeed::from_date(date(2026, 10, 18)));
    }

    #[test]
    fn rng_is_reproducible() {
        let seed = WeeklySeed::from_date(date(2026, 10, 19));
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..8 {
            assert_eq!(a.random::<u32>(), b.random::<u32>());
        }
    }
}
