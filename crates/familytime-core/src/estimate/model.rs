//! Input and output records of the yearly estimate.

use serde::{Deserialize, Serialize};

use crate::stage::ChildAgeGroup;

pub const DAYCARE_DEFAULT_START_AGE: f64 = 1.0;
pub const DAYCARE_DEFAULT_END_AGE: f64 = 5.0;
pub const PARENTAL_LEAVE_DEFAULT_YEARS: f64 = 1.0;

/// Years shown before the first birth.
pub const YEARS_BEFORE_FIRST_BIRTH: i32 = 2;
/// Years shown after the last birth.
pub const YEARS_AFTER_LAST_BIRTH: i32 = 20;

/// One child of the family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    /// Birth year; the fractional part is the time of year (2020.5 = early July)
    pub birth_year: f64,
    #[serde(default)]
    pub daycare_used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daycare_start_age: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daycare_end_age: Option<f64>,
}

impl Child {
    pub fn new(birth_year: f64) -> Self {
        Self {
            birth_year,
            daycare_used: false,
            daycare_start_age: None,
            daycare_end_age: None,
        }
    }

    /// Child attending daycare over the default age window.
    pub fn with_daycare(mut self) -> Self {
        self.daycare_used = true;
        self
    }

    pub fn with_daycare_window(mut self, start_age: f64, end_age: f64) -> Self {
        self.daycare_used = true;
        self.daycare_start_age = Some(start_age);
        self.daycare_end_age = Some(end_age);
        self
    }

    /// Calendar year of birth.
    pub fn birth_calendar_year(&self) -> i32 {
        self.birth_year.floor() as i32
    }

    /// Age in completed calendar years at `year`; negative before birth.
    pub fn whole_age(&self, year: i32) -> i32 {
        year.saturating_sub(self.birth_calendar_year())
    }

    /// Age at the middle of `year`, never below zero once born.
    pub fn age_at_mid_year(&self, year: i32) -> f64 {
        (year as f64 + 0.5 - self.birth_year).max(0.0)
    }

    pub fn daycare_window(&self) -> (f64, f64) {
        (
            self.daycare_start_age.unwrap_or(DAYCARE_DEFAULT_START_AGE),
            self.daycare_end_age.unwrap_or(DAYCARE_DEFAULT_END_AGE),
        )
    }

    /// Whether the child is in daycare at `age`.
    pub fn in_daycare_at(&self, age: f64) -> bool {
        let (start, end) = self.daycare_window();
        self.daycare_used && age >= start && age < end
    }
}

/// Inclusive range of calendar years covered by an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateWindow {
    pub start_year: i32,
    pub end_year: i32,
}

impl EstimateWindow {
    /// Two years before the first birth through twenty after the last.
    ///
    /// Returns `None` when there are no children.
    pub fn for_children(children: &[Child]) -> Option<Self> {
        let first = children.iter().map(Child::birth_calendar_year).min()?;
        let last = children.iter().map(Child::birth_calendar_year).max()?;
        Some(Self {
            start_year: first.saturating_sub(YEARS_BEFORE_FIRST_BIRTH),
            end_year: last.saturating_add(YEARS_AFTER_LAST_BIRTH),
        })
    }

    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start_year..=self.end_year
    }

    pub fn len(&self) -> usize {
        (i64::from(self.end_year) - i64::from(self.start_year) + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years().contains(&year)
    }
}

/// One child's share of a year's total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildContribution {
    /// Position of the child in the input list
    pub index: usize,
    pub age: f64,
    /// Rank among present siblings, youngest first
    pub rank: usize,
    pub age_group: ChildAgeGroup,
    pub on_leave: bool,
    pub in_daycare: bool,
    /// Weekday hours after overlap discount
    pub weekday: f64,
    /// Weekend hours after overlap discount
    pub weekend: f64,
}

/// Numeric estimate for one calendar year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearEstimate {
    pub year: i32,
    pub weekday: f64,
    pub weekend: f64,
    pub children: Vec<ChildContribution>,
}

impl YearEstimate {
    /// Year with no child born yet.
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            weekday: 0.0,
            weekend: 0.0,
            children: Vec::new(),
        }
    }
}

/// Output record: hours per day, formatted to one decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSpent {
    pub year: i32,
    pub weekday_hours: String,
    pub weekend_hours: String,
}

impl TimeSpent {
    pub fn weekday(&self) -> f64 {
        self.weekday_hours.parse().unwrap_or(0.0)
    }

    pub fn weekend(&self) -> f64 {
        self.weekend_hours.parse().unwrap_or(0.0)
    }
}

impl From<&YearEstimate> for TimeSpent {
    fn from(estimate: &YearEstimate) -> Self {
        if estimate.children.is_empty() {
            return Self {
                year: estimate.year,
                weekday_hours: "0".to_string(),
                weekend_hours: "0".to_string(),
            };
        }
        Self {
            year: estimate.year,
            weekday_hours: format_hours(estimate.weekday),
            weekend_hours: format_hours(estimate.weekend),
        }
    }
}

/// One decimal place, never "-0.0".
pub fn format_hours(hours: f64) -> String {
    let hours = if hours > 0.0 { hours } else { 0.0 };
    format!("{hours:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_spans_births() {
        let children = vec![Child::new(2020.0), Child::new(2016.7)];
        let window = EstimateWindow::for_children(&children).unwrap();
        assert_eq!(window.start_year, 2014);
        assert_eq!(window.end_year, 2040);
        assert_eq!(window.len(), 27);
        assert!(EstimateWindow::for_children(&[]).is_none());
    }

    #[test]
    fn test_window_saturates_on_extreme_births() {
        let late = EstimateWindow::for_children(&[Child::new(1e12)]).unwrap();
        assert_eq!(late.end_year, i32::MAX);
        assert_eq!(late.start_year, i32::MAX - YEARS_BEFORE_FIRST_BIRTH);

        let early = EstimateWindow::for_children(&[Child::new(-1e12)]).unwrap();
        assert_eq!(early.start_year, i32::MIN);
        assert!(!early.is_empty());
        assert_eq!(Child::new(-1e12).whole_age(2020), i32::MAX);
    }

    #[test]
    fn test_ages() {
        let child = Child::new(2020.0);
        assert_eq!(child.whole_age(2019), -1);
        assert_eq!(child.whole_age(2020), 0);
        assert_eq!(child.age_at_mid_year(2020), 0.5);
        assert_eq!(child.age_at_mid_year(2023), 3.5);

        let autumn = Child::new(2020.75);
        assert_eq!(autumn.whole_age(2020), 0);
        assert_eq!(autumn.age_at_mid_year(2020), 0.0);
        assert_eq!(autumn.age_at_mid_year(2021), 0.75);
    }

    #[test]
    fn test_daycare_window_is_half_open() {
        let child = Child::new(2020.0).with_daycare();
        assert!(!child.in_daycare_at(0.5));
        assert!(child.in_daycare_at(1.0));
        assert!(child.in_daycare_at(4.5));
        assert!(!child.in_daycare_at(5.0));
        assert!(!Child::new(2020.0).in_daycare_at(2.0));

        let custom = Child::new(2020.0).with_daycare_window(2.0, 3.0);
        assert!(!custom.in_daycare_at(1.5));
        assert!(custom.in_daycare_at(2.5));
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(11.36), "11.4");
        assert_eq!(format_hours(0.0), "0.0");
        assert_eq!(format_hours(-0.0), "0.0");
        assert_eq!(format_hours(7.0), "7.0");
    }

    #[test]
    fn test_time_spent_json_shape() {
        let record = TimeSpent {
            year: 2020,
            weekday_hours: "4.0".into(),
            weekend_hours: "8.5".into(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["weekdayHours"], "4.0");
        assert_eq!(json["weekendHours"], "8.5");
        assert_eq!(record.weekend(), 8.5);
    }
}
