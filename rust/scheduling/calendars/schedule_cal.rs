use chrono::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::errors::Error;
use crate::scheduling::calendars::manager::get_calendar_by_name;
use crate::scheduling::{Cal, DateRoll, Jurisdiction, UnionCal};

/// A schedule calendar specified by a string expression.
///
/// The expression names the jurisdictions whose holidays *drive* date resolution and,
/// optionally, further jurisdictions that are shown alongside results without affecting
/// them. Resolution always sees only the logic union; display-only members are carried
/// purely as presentation data.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "ScheduleCalDataModel")]
pub struct ScheduleCal {
    pub name: String,
    /// The exclusion union of the logic jurisdictions.
    #[serde(skip)]
    pub union_cal: UnionCal,
    /// Every jurisdiction shown in output: logic members first, then display-only ones.
    #[serde(skip)]
    pub display: Vec<(Jurisdiction, Arc<Cal>)>,
}

#[derive(Deserialize)]
struct ScheduleCalDataModel {
    name: String,
}

impl std::convert::From<ScheduleCalDataModel> for ScheduleCal {
    fn from(model: ScheduleCalDataModel) -> Self {
        Self::try_new(&model.name).expect("ScheduleCal data model contains bad data.")
    }
}

impl ScheduleCal {
    /// Create a new [`ScheduleCal`].
    ///
    /// # Notes
    /// `name` must be a string that contains registered jurisdiction codes separated by commas,
    /// additionally separating logic jurisdictions from display-only jurisdictions by a pipe
    /// operator.
    ///
    /// # Examples
    /// ```rust
    /// # use opscal::scheduling::ScheduleCal;
    /// let cal = ScheduleCal::try_new("lux,bel|usa");
    /// # let cal = cal.unwrap();
    /// assert_eq!(cal.union_cal.calendars.len(), 2);
    /// assert_eq!(cal.display.len(), 3);
    /// ```
    pub fn try_new(name: &str) -> Result<Self, Error> {
        let name_ = name.to_lowercase();
        let parts: Vec<&str> = name_.split("|").collect();
        if parts.len() > 2 {
            return Err(Error::BadCalendarString(
                "cannot use more than one pipe ('|') operator in the expression".to_string(),
            ));
        }
        let logic: Vec<(Jurisdiction, Arc<Cal>)> = parse_cals(parts[0])?;
        let display_only: Vec<(Jurisdiction, Arc<Cal>)> = if parts.len() == 2 {
            parse_cals(parts[1])?
        } else {
            Vec::new()
        };

        let union_cal = UnionCal::new(logic.iter().map(|(_, c)| c.clone()).collect());
        let mut display = logic;
        display.extend(display_only);
        Ok(Self {
            name: name_,
            union_cal,
            display,
        })
    }
}

impl DateRoll for ScheduleCal {
    fn is_weekday(&self, date: &NaiveDate) -> bool {
        self.union_cal.is_weekday(date)
    }

    fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.union_cal.is_holiday(date)
    }
}

fn parse_cals(name: &str) -> Result<Vec<(Jurisdiction, Arc<Cal>)>, Error> {
    let mut cals: Vec<(Jurisdiction, Arc<Cal>)> = Vec::new();
    for code in name.split(",") {
        let jurisdiction = Jurisdiction::try_new(code.trim())?;
        let cal = get_calendar_by_name(jurisdiction.code())?;
        cals.push((jurisdiction, cal));
    }
    Ok(cals)
}
