use chrono::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use crate::errors::Error;
use crate::scheduling::calendars::named::{
    get_color_by_name, get_holidays_by_name, get_weekmask_by_name, CODES,
};
use crate::scheduling::Cal;

// A single memory allocated space holding each jurisdiction's Cal behind an Arc,
// built once from the static tables and shared by every caller thereafter.
static NAMED_CALENDARS: LazyLock<RwLock<HashMap<String, Arc<Cal>>>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    for k in CODES.iter() {
        m.insert(
            (*k).to_string(),
            Arc::new(Cal::new(
                get_holidays_by_name(k).unwrap(),
                get_weekmask_by_name(k).unwrap(),
                get_color_by_name(k).unwrap(),
            )),
        );
    }
    RwLock::new(m)
});

/// Return the shared [`Cal`] registered under a jurisdiction code.
///
/// Calendars built from the static tables are constructed once and cached for the process
/// lifetime; repeated calls return handles to the same allocation.
pub fn get_calendar_by_name(name: &str) -> Result<Arc<Cal>, Error> {
    let k = name.to_lowercase();
    let r = NAMED_CALENDARS.read().unwrap();
    match r.get(&k) {
        Some(arc_ref) => Ok(arc_ref.clone()),
        None => Err(Error::UnsupportedJurisdiction(name.to_string())),
    }
}

/// Register an additional jurisdiction calendar under a new code.
///
/// Data will not be overwritten; registering an existing code is an error. Codes cannot
/// contain the comma or pipe characters, which are reserved by the calendar expression
/// syntax (see [`ScheduleCal`](crate::scheduling::ScheduleCal)).
pub fn register_calendar(name: &str, calendar: Cal) -> Result<(), Error> {
    let k = name.to_lowercase();
    if k.chars().any(|c| c == ',' || c == '|') {
        return Err(Error::BadCalendarName(
            "calendar codes cannot contain the comma (',') or pipe ('|') characters".to_string(),
        ));
    }
    let mut w = NAMED_CALENDARS.write().unwrap();
    if w.contains_key(&k) {
        return Err(Error::BadCalendarName(format!(
            "'{}' already exists in calendars and cannot be overwritten",
            k
        )));
    }
    w.insert(k, Arc::new(calendar));
    Ok(())
}

/// Return the list of registered jurisdiction codes.
pub fn calendar_names() -> Vec<String> {
    let r = NAMED_CALENDARS.read().unwrap();
    r.keys().cloned().collect()
}

/// Return every holiday observed in a jurisdiction for the given years, with its name.
///
/// The lookup trusts the registered table as-is: years the table does not cover simply
/// yield no entries.
pub fn holidays(jurisdiction: &str, years: &[i32]) -> Result<Vec<(NaiveDate, String)>, Error> {
    let cal = get_calendar_by_name(jurisdiction)?;
    Ok(cal
        .holidays
        .iter()
        .filter(|(d, _)| years.contains(&d.year()))
        .map(|(d, n)| (*d, n.clone()))
        .collect())
}
