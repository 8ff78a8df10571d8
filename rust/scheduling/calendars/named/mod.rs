//! Static data for pre-existing named holiday calendars.
//!
//! One module per jurisdiction code. Each module defines `WEEKMASK` (days of
//! the week excluded from the working week), `HOLIDAYS` (ISO date, official
//! name) and `COLOR` (the display hint for that jurisdiction's holidays).
//! Table coverage is a data concern: dates outside the covered years simply
//! have no holidays recorded.

pub mod bel;
pub mod lux;
pub mod usa;

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::errors::Error;

pub(crate) const CODES: &[&str] = &["lux", "bel", "usa"];

pub(crate) fn get_weekmask_by_name(name: &str) -> Result<Vec<u8>, Error> {
    let hmap: HashMap<&str, &[u8]> = HashMap::from([
        ("lux", lux::WEEKMASK),
        ("bel", bel::WEEKMASK),
        ("usa", usa::WEEKMASK),
    ]);
    match hmap.get(name) {
        None => Err(Error::UnsupportedJurisdiction(name.to_string())),
        Some(value) => Ok(value.to_vec()),
    }
}

pub(crate) fn get_holidays_by_name(name: &str) -> Result<Vec<(NaiveDate, String)>, Error> {
    let hmap: HashMap<&str, &[(&str, &str)]> = HashMap::from([
        ("lux", lux::HOLIDAYS),
        ("bel", bel::HOLIDAYS),
        ("usa", usa::HOLIDAYS),
    ]);
    match hmap.get(name) {
        None => Err(Error::UnsupportedJurisdiction(name.to_string())),
        Some(value) => Ok(value
            .iter()
            .map(|(d, n)| {
                (
                    NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
                    n.to_string(),
                )
            })
            .collect()),
    }
}

pub(crate) fn get_color_by_name(name: &str) -> Result<&'static str, Error> {
    let hmap: HashMap<&str, &str> = HashMap::from([
        ("lux", lux::COLOR),
        ("bel", bel::COLOR),
        ("usa", usa::COLOR),
    ]);
    match hmap.get(name) {
        None => Err(Error::UnsupportedJurisdiction(name.to_string())),
        Some(value) => Ok(value),
    }
}
