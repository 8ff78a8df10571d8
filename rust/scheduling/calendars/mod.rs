mod cal;
mod dateroll;
mod jurisdiction;
mod manager;
mod named;
mod schedule_cal;
mod union_cal;

pub use crate::scheduling::calendars::{
    cal::Cal,
    dateroll::{nd, DateRoll},
    jurisdiction::Jurisdiction,
    manager::{calendar_names, get_calendar_by_name, holidays, register_calendar},
    schedule_cal::ScheduleCal,
    union_cal::UnionCal,
};
