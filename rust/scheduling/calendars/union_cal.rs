use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::scheduling::{Cal, DateRoll};

/// A working day calendar which is the union of multiple jurisdiction calendars.
///
/// When the union of working day calendars is observed the following are true:
///
/// - a weekday is such if it is a weekday in all calendars.
/// - a holiday is such if it is a holiday in any calendar.
/// - a working day is such if it is a working day in all calendars.
///
/// Only the calendars in the union participate in working day determination.
/// Jurisdictions shown for information alongside a schedule are carried
/// separately (see [`ScheduleCal`](crate::scheduling::ScheduleCal)) and
/// cannot alter the outcome of [`DateRoll`] methods on the union.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct UnionCal {
    /// A vector of [Cal] whose holidays jointly exclude working days.
    pub calendars: Vec<Arc<Cal>>,
}

impl UnionCal {
    /// Create a new [`UnionCal`].
    pub fn new(calendars: Vec<Arc<Cal>>) -> Self {
        UnionCal { calendars }
    }
}

impl DateRoll for UnionCal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        self.calendars.iter().all(|cal| cal.is_weekday(date))
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.calendars.iter().any(|cal| cal.is_holiday(date))
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::nd;

    fn fixture_hol_cal() -> Cal {
        let hols = vec![
            (nd(2025, 9, 6), "Fixture Day".to_string()),
            (nd(2025, 9, 8), "Fixture Day Two".to_string()),
        ];
        Cal::new(hols, vec![5, 6], "#FF5252")
    }

    fn fixture_hol_cal2() -> Cal {
        let hols = vec![
            (nd(2025, 9, 9), "Other Fixture Day".to_string()),
            (nd(2025, 9, 10), "Other Fixture Day Two".to_string()),
        ];
        Cal::new(hols, vec![5, 6], "#FFD740")
    }

    #[test]
    fn test_union_cal() {
        let ucal = UnionCal::new(vec![
            Arc::new(fixture_hol_cal()),
            Arc::new(fixture_hol_cal2()),
        ]);

        // Mon 8th, Tue 9th and Wed 10th are holidays in one member each.
        assert!(!ucal.is_working_day(&nd(2025, 9, 8)));
        assert!(!ucal.is_working_day(&nd(2025, 9, 9)));
        assert!(!ucal.is_working_day(&nd(2025, 9, 10)));
        assert!(ucal.is_working_day(&nd(2025, 9, 11)));
    }

    #[test]
    fn test_union_nth_working_day_skips_member_holidays() {
        let ucal = UnionCal::new(vec![
            Arc::new(fixture_hol_cal()),
            Arc::new(fixture_hol_cal2()),
        ]);
        // Sept 2025 starts on a Monday. 1st-5th are working; the 8th-10th are
        // holidays across the union so the 6th working day is Thu 11th.
        assert_eq!(ucal.nth_working_day(2025, 9, 6), nd(2025, 9, 11));
    }

    #[test]
    fn test_empty_union_excludes_weekends_only() {
        let ucal = UnionCal::new(vec![Arc::new(Cal::new(vec![], vec![5, 6], ""))]);
        assert_eq!(ucal.nth_working_day(2025, 9, 5), nd(2025, 9, 5));
        assert_eq!(ucal.nth_working_day(2025, 9, 6), nd(2025, 9, 8));
    }
}
