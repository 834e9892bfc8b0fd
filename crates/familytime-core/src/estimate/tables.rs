//! Fixed hour tables keyed by stage.
//!
//! The main tables match every stage explicitly, so a new stage cannot be
//! added without giving it a value here.

use crate::stage::{ChildAgeGroup, SchoolingStage};

/// Parent time for eating, hygiene and errands on a weekday.
pub const ESSENTIAL_PARENT_HOURS: f64 = 1.5;

/// Parent time for eating, hygiene and errands on a weekend day.
pub const WEEKEND_ESSENTIAL_PARENT_HOURS: f64 = 2.0;

/// Child sleep need by completed year of age, 0 through 18.
const CHILD_SLEEP_HOURS: [f64; 19] = [
    16.0, 14.0, 12.0, 12.0, 12.0, 11.0, 11.0, 10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 9.0, 9.0, 9.0,
    9.0, 9.0, 8.0,
];

/// Hours a child of `age` sleeps per day.
pub fn child_sleep_hours(age: f64) -> f64 {
    // NaN and negatives saturate to index 0
    let index = (age.max(0.0).floor() as usize).min(CHILD_SLEEP_HOURS.len() - 1);
    CHILD_SLEEP_HOURS[index]
}

pub fn child_wake_hours(age: f64) -> f64 {
    crate::parent::HOURS_IN_DAY - child_sleep_hours(age)
}

/// Weekday active hours before any cap.
pub fn weekday_base_hours(group: ChildAgeGroup) -> f64 {
    match group {
        ChildAgeGroup::NotBornYet => 0.0,
        ChildAgeGroup::Infancy => 12.0,
        ChildAgeGroup::Toddler => 11.0,
        ChildAgeGroup::EarlyChildhood => 8.0,
        ChildAgeGroup::MiddleChildhood => 6.0,
        ChildAgeGroup::Adolescence => 4.0,
        ChildAgeGroup::Adulthood => 0.0,
    }
}

/// Weekday hours around daycare drop-off and pick-up for a stay-at-home parent.
pub fn daycare_base_hours(group: ChildAgeGroup) -> f64 {
    match group {
        ChildAgeGroup::NotBornYet => 0.0,
        ChildAgeGroup::Infancy => 6.0,
        ChildAgeGroup::Toddler => 5.5,
        ChildAgeGroup::EarlyChildhood => 5.0,
        ChildAgeGroup::MiddleChildhood => 3.0,
        ChildAgeGroup::Adolescence => 2.0,
        ChildAgeGroup::Adulthood => 0.0,
    }
}

/// Morning plus evening routine for a working parent with a child in daycare.
pub fn working_routine_hours(group: ChildAgeGroup) -> f64 {
    match group {
        ChildAgeGroup::NotBornYet => 0.0,
        ChildAgeGroup::Infancy => 5.0,
        ChildAgeGroup::Toddler => 4.5,
        ChildAgeGroup::EarlyChildhood => 4.0,
        ChildAgeGroup::MiddleChildhood => 0.0,
        ChildAgeGroup::Adolescence => 0.0,
        ChildAgeGroup::Adulthood => 0.0,
    }
}

/// Weekend active hours for children not yet in school.
///
/// Only groups that can be pre-school have a value.
pub fn weekend_preschool_hours(group: ChildAgeGroup) -> f64 {
    match group {
        ChildAgeGroup::Infancy => 14.0,
        ChildAgeGroup::Toddler => 12.0,
        ChildAgeGroup::EarlyChildhood => 10.0,
        ChildAgeGroup::NotBornYet
        | ChildAgeGroup::MiddleChildhood
        | ChildAgeGroup::Adolescence
        | ChildAgeGroup::Adulthood => 0.0,
    }
}

/// Weekend active hours for school-age children.
///
/// `None` for pre-school, which is keyed by age group instead.
pub fn weekend_school_hours(stage: SchoolingStage) -> Option<f64> {
    match stage {
        SchoolingStage::PreSchool => None,
        SchoolingStage::Kindergarten => Some(10.0),
        SchoolingStage::Elementary => Some(8.0),
        SchoolingStage::MiddleSchool => Some(7.0),
        SchoolingStage::HighSchool => Some(6.0),
        SchoolingStage::PostHighSchool => Some(0.0),
    }
}

/// Share of child sleep that still needs the parent, with an upper bound.
pub fn passive_sleep_share(group: ChildAgeGroup) -> Option<(f64, f64)> {
    match group {
        ChildAgeGroup::Infancy => Some((0.3, 6.0)),
        ChildAgeGroup::Toddler => Some((0.2, 3.0)),
        _ => None,
    }
}

/// Flat passive hours for groups past the night-care years.
pub fn passive_flat_hours(group: ChildAgeGroup) -> f64 {
    match group {
        ChildAgeGroup::EarlyChildhood => 1.5,
        ChildAgeGroup::MiddleChildhood => 1.0,
        ChildAgeGroup::Adolescence => 0.5,
        _ => 0.0,
    }
}

/// Per-rank reduction for siblings beyond the first.
pub fn sibling_reduction_factor(group: ChildAgeGroup) -> f64 {
    if group.is_young() {
        0.2
    } else {
        0.3
    }
}

/// Largest weekday base value, used to scale stage intensity.
pub fn max_weekday_base_hours() -> f64 {
    ChildAgeGroup::ALL
        .into_iter()
        .map(weekday_base_hours)
        .fold(0.0, f64::max)
}
