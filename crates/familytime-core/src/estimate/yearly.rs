//! Year-by-year household estimate.

use tracing::{debug, trace};

use super::child::{estimate_child, ChildSituation};
use super::model::{Child, ChildContribution, EstimateWindow, TimeSpent, YearEstimate};
use crate::parent::ParentType;

/// Weight of passive hours on weekdays; part of the night care falls to the other parent.
pub const WEEKDAY_PASSIVE_WEIGHT: f64 = 0.7;

/// Weight of passive hours on weekends.
pub const WEEKEND_PASSIVE_WEIGHT: f64 = 1.0;

/// Smallest weight a sibling's hours can get when combined.
pub const MIN_OVERLAP_FACTOR: f64 = 0.3;

/// Weight of the sibling at `rank` in the household total.
///
/// Time with several children overlaps, so each additional child adds less.
pub fn overlap_factor(rank: usize) -> f64 {
    if rank == 0 {
        1.0
    } else {
        (1.0 / (rank as f64 + 1.0)).max(MIN_OVERLAP_FACTOR)
    }
}

/// Formatted hours for every year in the window.
///
/// Empty input gives an empty sequence. Years before any birth are kept
/// as zero records so the sequence has no gaps.
pub fn estimate(children: &[Child], parent_type: ParentType, leave_duration: f64) -> Vec<TimeSpent> {
    estimate_detailed(children, parent_type, leave_duration)
        .iter()
        .map(TimeSpent::from)
        .collect()
}

/// Numeric hours with the per-child breakdown for every year in the window.
pub fn estimate_detailed(
    children: &[Child],
    parent_type: ParentType,
    leave_duration: f64,
) -> Vec<YearEstimate> {
    let Some(window) = EstimateWindow::for_children(children) else {
        return Vec::new();
    };
    debug!(
        children = children.len(),
        %parent_type,
        leave_duration,
        start_year = window.start_year,
        end_year = window.end_year,
        "estimating family time"
    );

    window
        .years()
        .map(|year| estimate_year(children, parent_type, leave_duration, year))
        .collect()
}

/// Household estimate for a single year.
pub fn estimate_year(
    children: &[Child],
    parent_type: ParentType,
    leave_duration: f64,
    year: i32,
) -> YearEstimate {
    // (input index, age) of every child born by this year, youngest first
    let mut present: Vec<(usize, f64)> = children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.whole_age(year) >= 0)
        .map(|(index, child)| (index, child.age_at_mid_year(year)))
        .collect();
    if present.is_empty() {
        return YearEstimate::empty(year);
    }
    present.sort_by(|a, b| a.1.total_cmp(&b.1));
    let youngest = present[0].1;

    let mut weekday = 0.0;
    let mut weekend = 0.0;
    let mut contributions = Vec::with_capacity(present.len());

    for (rank, &(index, age)) in present.iter().enumerate() {
        let child = &children[index];
        let situation = ChildSituation::new(age, parent_type)
            .with_leave(leave_duration)
            .with_daycare(child.in_daycare_at(age))
            .with_rank(rank)
            .with_youngest_age(youngest);
        let hours = estimate_child(&situation);

        let factor = overlap_factor(rank);
        let child_weekday = (hours.weekday_active + WEEKDAY_PASSIVE_WEIGHT * hours.passive) * factor;
        let child_weekend = (hours.weekend_active + WEEKEND_PASSIVE_WEIGHT * hours.passive) * factor;
        weekday += child_weekday;
        weekend += child_weekend;

        contributions.push(ChildContribution {
            index,
            age,
            rank,
            age_group: situation.age_group(),
            on_leave: situation.on_leave,
            in_daycare: situation.in_daycare,
            weekday: child_weekday,
            weekend: child_weekend,
        });
    }

    let estimate = YearEstimate {
        year,
        weekday,
        weekend,
        children: contributions,
    };
    trace!(year, weekday = estimate.weekday, weekend = estimate.weekend, "year estimated");
    estimate
}
