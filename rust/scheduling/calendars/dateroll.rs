use chrono::prelude::*;
use chrono::Days;

/// Working day determination and ordinal date resolution against a calendar.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDate) -> bool;

    /// Returns whether the date is a working day, i.e. part of the working week and not a holiday.
    fn is_working_day(&self, date: &NaiveDate) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a working day, i.e. either not in the working week or a
    /// specific holiday.
    fn is_non_working_day(&self, date: &NaiveDate) -> bool {
        !self.is_working_day(date)
    }

    /// Return the date of the `offset`-th working day of (`year`, `month`), 1-based.
    ///
    /// Walks forward one calendar day at a time from the 1st of the month, counting working
    /// days until the count reaches `offset`.
    ///
    /// If the month contains fewer than `offset` working days the walk continues into the
    /// following month(s) and the returned date falls outside the originating month. Callers
    /// that need to surface this can compare the returned date's month against `month`.
    fn nth_working_day(&self, year: i32, month: u32, offset: u32) -> NaiveDate {
        let mut date = nd(year, month, 1);
        let mut count: u32 = 0;
        while count < offset {
            if self.is_working_day(&date) {
                count += 1;
            }
            if count < offset {
                date = date + Days::new(1);
            }
        }
        date
    }

    /// Return the count of working days between `start` and `end`, both inclusive.
    fn working_days_between(&self, start: &NaiveDate, end: &NaiveDate) -> u32 {
        let mut count: u32 = 0;
        let mut date = *start;
        while date <= *end {
            if self.is_working_day(&date) {
                count += 1;
            }
            date = date + Days::new(1);
        }
        count
    }

    /// Print a representation of the month of the object.
    fn print_month(&self, year: i32, month: u32) -> String {
        let _map: Vec<String> = vec![
            format!("        January {}\n", year),
            format!("       February {}\n", year),
            format!("          March {}\n", year),
            format!("          April {}\n", year),
            format!("            May {}\n", year),
            format!("           June {}\n", year),
            format!("           July {}\n", year),
            format!("         August {}\n", year),
            format!("      September {}\n", year),
            format!("        October {}\n", year),
            format!("       November {}\n", year),
            format!("       December {}\n", year),
        ];
        let mut output = _map[(month - 1) as usize].clone();
        output += "Su Mo Tu We Th Fr Sa\n";

        let month_obj = Month::try_from(month as u8).unwrap();
        let days: u8 = month_obj.num_days(year).unwrap();
        let weekday = nd(year, month, 1).weekday().num_days_from_monday();
        let idx_start: u32 = (weekday + 1) % 7;

        let mut arr: [String; 42] = std::array::from_fn(|_| String::from("  "));
        for i in 0..days {
            let date = nd(year, month, (i + 1).into());
            let s: String = {
                if self.is_working_day(&date) {
                    format!("{:>2}", i + 1)
                } else if !self.is_weekday(&date) {
                    " .".to_string()
                } else {
                    " *".to_string()
                }
            };
            let index: u32 = i as u32 + idx_start;
            arr[index as usize] = s;
        }

        for row in 0..6 {
            output += &format!(
                "{} {} {} {} {} {} {}\n",
                &arr[row * 7],
                &arr[row * 7 + 1],
                &arr[row * 7 + 2],
                &arr[row * 7 + 3],
                &arr[row * 7 + 4],
                &arr[row * 7 + 5],
                &arr[row * 7 + 6]
            );
        }
        output
    }
}

/// Create a `NaiveDate`.
///
/// Panics if date values are invalid.
pub fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("`year`, `month` `day` are invalid.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::Cal;

    fn fixture_hol_cal() -> Cal {
        // Friday 3rd January is the would-be 3rd working day of the month.
        let hols = vec![(nd(2025, 1, 3), "Fixture Day".to_string())];
        Cal::new(hols, vec![5, 6], "#FF5252")
    }

    #[test]
    fn test_nth_working_day_no_holidays() {
        // January 2025 is a 31-day month starting on a Wednesday.
        let cal = Cal::new(vec![], vec![5, 6], "");
        assert_eq!(cal.nth_working_day(2025, 1, 1), nd(2025, 1, 1));
        // Wed, Thu, Fri, then over the weekend to Mon, Tue.
        assert_eq!(cal.nth_working_day(2025, 1, 5), nd(2025, 1, 7));
    }

    #[test]
    fn test_nth_working_day_holiday_shift() {
        // A holiday on the would-be 3rd working day pushes the resolution
        // forward by exactly one further working day.
        let plain = Cal::new(vec![], vec![5, 6], "");
        let cal = fixture_hol_cal();
        assert_eq!(plain.nth_working_day(2025, 1, 3), nd(2025, 1, 3));
        assert_eq!(cal.nth_working_day(2025, 1, 3), nd(2025, 1, 6));
    }

    #[test]
    fn test_nth_working_day_overflows_month() {
        // February 2026 has 20 working days; the 21st lands in March.
        let cal = Cal::new(vec![], vec![5, 6], "");
        let date = cal.nth_working_day(2026, 2, 21);
        assert_eq!(date, nd(2026, 3, 2));
        assert_ne!(date.month(), 2);
    }

    #[test]
    fn test_nth_working_day_deterministic() {
        let cal = fixture_hol_cal();
        let a = cal.nth_working_day(2025, 1, 17);
        let b = cal.nth_working_day(2025, 1, 17);
        assert_eq!(a, b);
    }

    #[test]
    fn test_working_days_between() {
        let cal = Cal::new(vec![], vec![5, 6], "");
        // Wed 1st Jan 2025 through Tue 7th inclusive: 5 working days.
        assert_eq!(cal.working_days_between(&nd(2025, 1, 1), &nd(2025, 1, 7)), 5);
        // Count up to the resolved nth working day equals the ordinal.
        let cal = fixture_hol_cal();
        for offset in [1, 3, 9, 20] {
            let resolved = cal.nth_working_day(2025, 1, offset);
            assert_eq!(cal.working_days_between(&nd(2025, 1, 1), &resolved), offset);
        }
    }

    #[test]
    fn test_resolved_date_is_working() {
        let cal = fixture_hol_cal();
        for offset in 1..=23 {
            let resolved = cal.nth_working_day(2025, 1, offset);
            assert!(cal.is_working_day(&resolved));
        }
    }

    #[test]
    fn test_print_month() {
        let cal = Cal::new(
            vec![
                (nd(2026, 1, 1), "New Year's Day".to_string()),
                (nd(2026, 1, 19), "Fixture Day".to_string()),
            ],
            vec![5, 6],
            "",
        );
        let result = cal.print_month(2026, 1);
        let raw_output = r#"        January 2026
Su Mo Tu We Th Fr Sa
             *  2  .
 .  5  6  7  8  9  .
 . 12 13 14 15 16  .
 .  * 20 21 22 23  .
 . 26 27 28 29 30  .
$$$$$$$$$$$$$$$$$$$$
"#;
        let expected = raw_output.replace("$", " ");
        assert_eq!(result, expected);
    }
}
