use chrono::{Datelike, NaiveDate};
use serde::Serialize;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month. Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based.
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month));
        YearMonth { year, month }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        YearMonth { year: date.year(), month: date.month() }
    }

    /// Parse an allocation month such as `Sep-24`.
    pub fn parse_allocation(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        NaiveDate::parse_from_str(&format!("01-{raw}"), "%d-%b-%y")
            .ok()
            .map(Self::from_date)
    }

    fn index(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_index(index: i64) -> Self {
        YearMonth {
            year: index.div_euclid(12) as i32,
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// Shift by a signed number of months.
    pub fn offset(&self, months: i64) -> Self {
        Self::from_index(self.index() + months)
    }

    /// `size` consecutive months ending at `self`, oldest first.
    pub fn window_ending(self, size: usize) -> Vec<YearMonth> {
        let size = size as i64;
        (0..size).map(|i| self.offset(i - size + 1)).collect()
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[(self.month as usize - 1) % 12]
    }

    /// e.g. `Sep 2024`
    pub fn label(&self) -> String {
        format!("{} {}", self.name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_allocation_months() {
        assert_eq!(YearMonth::parse_allocation("Sep-24"), Some(YearMonth::new(2024, 9)));
        assert_eq!(YearMonth::parse_allocation(" Jan-25 "), Some(YearMonth::new(2025, 1)));
        assert_eq!(YearMonth::parse_allocation("Foo-24"), None);
        assert_eq!(YearMonth::parse_allocation(""), None);
    }

    #[test]
    fn offset_crosses_year_boundaries() {
        let jan = YearMonth::new(2025, 1);
        assert_eq!(jan.offset(-1), YearMonth::new(2024, 12));
        assert_eq!(jan.offset(-13), YearMonth::new(2023, 12));
        assert_eq!(YearMonth::new(2024, 12).offset(1), jan);
    }

    #[test]
    fn window_is_chronological_and_sized() {
        let w = YearMonth::new(2025, 2).window_ending(3);
        assert_eq!(
            w,
            vec![YearMonth::new(2024, 12), YearMonth::new(2025, 1), YearMonth::new(2025, 2)]
        );
        assert_eq!(YearMonth::new(2025, 2).window_ending(12).len(), 12);
    }

    #[test]
    fn label_uses_short_month_name() {
        assert_eq!(YearMonth::new(2024, 9).label(), "Sep 2024");
    }
}
