//! Hours estimate for a single child in a single year.

use serde::{Deserialize, Serialize};

use super::tables::{
    child_sleep_hours, child_wake_hours, daycare_base_hours, passive_flat_hours,
    passive_sleep_share, sibling_reduction_factor, weekday_base_hours, weekend_preschool_hours,
    weekend_school_hours, working_routine_hours, ESSENTIAL_PARENT_HOURS,
    WEEKEND_ESSENTIAL_PARENT_HOURS,
};
use crate::parent::{available_hours, parent_sleep_hours, ParentType, HOURS_IN_DAY};
use crate::stage::{ChildAgeGroup, SchoolingStage};

/// Fraction of a stage (or of the leave) over which values blend into the next one.
const TRANSITION_SHARE: f64 = 0.25;

/// Length of the newborn ramp in years.
const NEWBORN_RAMP_YEARS: f64 = 1.0 / 12.0;

/// Share of the leave maximum reached on the day of birth.
const NEWBORN_RAMP_START: f64 = 0.7;

/// Everything the estimator needs to know about one child in one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChildSituation {
    /// Age in years, fractional
    pub age: f64,
    pub parent_type: ParentType,
    /// Parent is on parental leave for this child
    pub on_leave: bool,
    /// Child attends daycare this year
    pub in_daycare: bool,
    /// Position among present siblings, youngest first (0 = primary)
    pub rank: usize,
    /// Age of the youngest child present, drives parent sleep
    pub youngest_age: Option<f64>,
    /// Parental leave length in years
    pub leave_duration: f64,
}

impl ChildSituation {
    /// A sole child, no leave, no daycare.
    pub fn new(age: f64, parent_type: ParentType) -> Self {
        Self {
            age,
            parent_type,
            on_leave: false,
            in_daycare: false,
            rank: 0,
            youngest_age: None,
            leave_duration: 0.0,
        }
    }

    /// Set the leave length; the leave flag follows from the age.
    pub fn with_leave(mut self, leave_duration: f64) -> Self {
        self.leave_duration = leave_duration;
        self.on_leave = self.age >= 0.0 && self.age < leave_duration;
        self
    }

    pub fn with_daycare(mut self, in_daycare: bool) -> Self {
        self.in_daycare = in_daycare;
        self
    }

    pub fn with_rank(mut self, rank: usize) -> Self {
        self.rank = rank;
        self
    }

    pub fn with_youngest_age(mut self, youngest_age: f64) -> Self {
        self.youngest_age = Some(youngest_age);
        self
    }

    pub fn age_group(&self) -> ChildAgeGroup {
        ChildAgeGroup::from_age(self.age)
    }

    /// Youngest child at home, counting this one.
    fn household_youngest(&self) -> f64 {
        self.youngest_age.map_or(self.age, |y| y.min(self.age))
    }

    fn parent_sleep(&self) -> f64 {
        parent_sleep_hours(Some(self.household_youngest()))
    }
}

/// Hours for one child, before passive weighting and sibling overlap.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChildHours {
    pub weekday_active: f64,
    pub weekend_active: f64,
    pub passive: f64,
}

/// Compute all three values for a situation.
pub fn estimate_child(situation: &ChildSituation) -> ChildHours {
    ChildHours {
        weekday_active: weekday_active_hours(situation),
        weekend_active: weekend_active_hours(situation),
        passive: passive_hours(situation.age),
    }
}

/// Attentive hours on a weekday.
pub fn weekday_active_hours(situation: &ChildSituation) -> f64 {
    if situation.age < 0.0 {
        return 0.0;
    }
    let steady = steady_weekday_hours(situation);
    let hours = if situation.on_leave {
        leave_hours(situation, ESSENTIAL_PARENT_HOURS, steady)
    } else {
        steady
    };
    finish(situation, hours)
}

/// Attentive hours on a weekend day. Daycare plays no role here.
pub fn weekend_active_hours(situation: &ChildSituation) -> f64 {
    if situation.age < 0.0 {
        return 0.0;
    }
    let steady = steady_weekend_hours(situation);
    let hours = if situation.on_leave {
        leave_hours(situation, WEEKEND_ESSENTIAL_PARENT_HOURS, steady)
    } else {
        steady
    };
    finish(situation, hours)
}

/// Semi-attentive hours: night wake-ups and incidental supervision.
pub fn passive_hours(age: f64) -> f64 {
    if age < 0.0 {
        return 0.0;
    }
    let group = ChildAgeGroup::from_age(age);
    match passive_sleep_share(group) {
        Some((share, cap)) => (child_sleep_hours(age) * share).min(cap),
        None => passive_flat_hours(group),
    }
}

fn steady_weekday_hours(situation: &ChildSituation) -> f64 {
    let group = situation.age_group();
    let available =
        available_hours(situation.parent_type, Some(situation.household_youngest())) - ESSENTIAL_PARENT_HOURS;

    if situation.in_daycare {
        let hours = if situation.parent_type.is_stay_at_home() {
            daycare_base_hours(group)
        } else {
            working_routine_hours(group)
        };
        return hours.min(available);
    }

    let base = smoothed(situation.age, weekday_base_hours, |_| true);
    if situation.parent_type.is_stay_at_home() {
        base
    } else {
        base.min(available)
    }
}

fn steady_weekend_hours(situation: &ChildSituation) -> f64 {
    let base = match weekend_school_hours(SchoolingStage::from_age(situation.age)) {
        Some(hours) => hours,
        None => smoothed(situation.age, weekend_preschool_hours, ChildAgeGroup::is_young),
    };
    base.min(HOURS_IN_DAY - situation.parent_sleep() - WEEKEND_ESSENTIAL_PARENT_HOURS)
}

/// Leave value: everything the child is awake for, ramped in after birth
/// and blended back into `steady` over the last quarter of the leave.
fn leave_hours(situation: &ChildSituation, essential_hours: f64, steady: f64) -> f64 {
    let leave = situation.leave_duration;
    if leave <= 0.0 {
        return steady;
    }
    let age = situation.age;
    let max_with_parent =
        child_wake_hours(age).min(HOURS_IN_DAY - situation.parent_sleep() - essential_hours);

    let ramp = if age < NEWBORN_RAMP_YEARS {
        NEWBORN_RAMP_START + (1.0 - NEWBORN_RAMP_START) * (age / NEWBORN_RAMP_YEARS)
    } else {
        1.0
    };
    let hours = max_with_parent * ramp;

    let blend_start = leave * (1.0 - TRANSITION_SHARE);
    if age < blend_start {
        return hours;
    }
    let t = ((age - blend_start) / (leave - blend_start)).clamp(0.0, 1.0);
    lerp(hours, steady, t)
}

/// Sibling penalty and final clamp shared by both day types.
fn finish(situation: &ChildSituation, hours: f64) -> f64 {
    let hours = if situation.rank > 0 {
        let factor = sibling_reduction_factor(situation.age_group());
        hours * (1.0 - situation.rank as f64 * factor).max(0.0)
    } else {
        hours
    };
    hours.clamp(0.0, HOURS_IN_DAY - situation.parent_sleep())
}

/// Look up `table` for the age's group, blending the last quarter of a
/// stage toward the next stage's value when `smooth` allows it.
fn smoothed(
    age: f64,
    table: fn(ChildAgeGroup) -> f64,
    smooth: fn(ChildAgeGroup) -> bool,
) -> f64 {
    let group = ChildAgeGroup::from_age(age);
    let value = table(group);
    let Some(next) = group.next() else {
        return value;
    };
    let (start, end) = group.bounds();
    if !smooth(group) || !start.is_finite() {
        return value;
    }
    let blend_start = end - (end - start) * TRANSITION_SHARE;
    if age < blend_start {
        return value;
    }
    lerp(value, table(next), (age - blend_start) / (end - blend_start))
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}
