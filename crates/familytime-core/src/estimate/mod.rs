//! Time-allocation estimate.
//!
//! `child` evaluates one child for one year, `yearly` walks the calendar
//! window and combines siblings into a household total.

mod child;
mod model;
pub mod tables;
mod yearly;

pub use child::{
    estimate_child, passive_hours, weekday_active_hours, weekend_active_hours, ChildHours,
    ChildSituation,
};
pub use model::{
    format_hours, Child, ChildContribution, EstimateWindow, TimeSpent, YearEstimate,
    DAYCARE_DEFAULT_END_AGE, DAYCARE_DEFAULT_START_AGE, PARENTAL_LEAVE_DEFAULT_YEARS,
    YEARS_AFTER_LAST_BIRTH, YEARS_BEFORE_FIRST_BIRTH,
};
pub use yearly::{
    estimate, estimate_detailed, estimate_year, overlap_factor, MIN_OVERLAP_FACTOR,
    WEEKDAY_PASSIVE_WEIGHT, WEEKEND_PASSIVE_WEIGHT,
};
