use chrono::prelude::*;
use chrono::Weekday;
use indexmap::map::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::scheduling::DateRoll;

/// A working day calendar for a single jurisdiction.
///
/// A working day calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are not general working days. In Western
///   culture these are typically `[5, 6]` for Saturday and Sunday.
/// - `holidays`: which defines specific dates that are exceptions to the general working week,
///   each carrying the official holiday name for display purposes.
///
/// A `color` hint tags the jurisdiction's holidays in rendered output.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexMap<NaiveDate, String>,
    pub(crate) week_mask: HashSet<Weekday>,
    pub(crate) color: String,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide dates that cannot be working days, each with a display name.
    /// `week_mask` is a vector of days (0=Mon,.., 6=Sun) that are excluded from the working week.
    pub fn new(holidays: Vec<(NaiveDate, String)>, week_mask: Vec<u8>, color: &str) -> Self {
        Cal {
            holidays: IndexMap::from_iter(holidays),
            week_mask: HashSet::from_iter(
                week_mask.into_iter().map(|v| Weekday::try_from(v).unwrap()),
            ),
            color: color.to_string(),
        }
    }

    /// Return the display color hint for this calendar's holidays.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Iterate the named holidays falling in (`year`, `month`), in table order.
    pub fn holidays_in_month(
        &self,
        year: i32,
        month: u32,
    ) -> impl Iterator<Item = (&NaiveDate, &str)> {
        self.holidays
            .iter()
            .filter(move |(d, _)| d.year() == year && d.month() == month)
            .map(|(d, n)| (d, n.as_str()))
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays.contains_key(date)
    }
}
