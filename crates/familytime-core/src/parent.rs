//! Parent work schedules and daily availability.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const HOURS_IN_DAY: f64 = 24.0;

/// Parent sleep once the youngest child sleeps through the night.
pub const PARENT_SLEEP_HOURS: f64 = 8.0;

/// Parent sleep during the newborn phase.
pub const NEWBORN_PARENT_SLEEP_HOURS: f64 = 6.0;

/// Youngest-child age (years) until which parent sleep stays at the newborn level.
pub const NEWBORN_PHASE_END_AGE: f64 = 0.25;

/// Youngest-child age (years) at which parent sleep is fully recovered.
pub const SLEEP_RECOVERED_AGE: f64 = 4.0;

/// Work-schedule variant of the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ParentType {
    StayAtHome,
    #[default]
    FullTimeWork,
    PartTimeWork,
    RemoteFullTime,
    RemotePartTime,
    Flexible,
}

impl ParentType {
    pub const ALL: [ParentType; 6] = [
        ParentType::StayAtHome,
        ParentType::FullTimeWork,
        ParentType::PartTimeWork,
        ParentType::RemoteFullTime,
        ParentType::RemotePartTime,
        ParentType::Flexible,
    ];

    /// Daily work hours, lunch included for full-time office work.
    pub fn work_hours(self) -> f64 {
        match self {
            ParentType::StayAtHome => 0.0,
            ParentType::FullTimeWork => 9.0,
            ParentType::PartTimeWork => 5.0,
            ParentType::RemoteFullTime => 8.0,
            ParentType::RemotePartTime => 4.0,
            ParentType::Flexible => 6.0,
        }
    }

    /// Daily round-trip commute hours.
    pub fn commute_hours(self) -> f64 {
        match self {
            ParentType::StayAtHome => 0.0,
            ParentType::FullTimeWork => 1.5,
            ParentType::PartTimeWork => 1.5,
            ParentType::RemoteFullTime => 0.0,
            ParentType::RemotePartTime => 0.0,
            ParentType::Flexible => 0.5,
        }
    }

    pub fn is_stay_at_home(self) -> bool {
        self == ParentType::StayAtHome
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParentType::StayAtHome => "StayAtHome",
            ParentType::FullTimeWork => "FullTimeWork",
            ParentType::PartTimeWork => "PartTimeWork",
            ParentType::RemoteFullTime => "RemoteFullTime",
            ParentType::RemotePartTime => "RemotePartTime",
            ParentType::Flexible => "Flexible",
        }
    }
}

impl std::fmt::Display for ParentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParentType {
    type Err = ValidationError;

    /// Accepts the variant name or a kebab/snake-case spelling of it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        ParentType::ALL
            .into_iter()
            .find(|p| p.as_str().to_lowercase() == normalized)
            .ok_or_else(|| ValidationError::UnknownParentType(s.to_string()))
    }
}

/// Hours the parent sleeps, given the age of the youngest child at home.
///
/// Stays at the newborn level through the first months, then recovers
/// linearly until the youngest child turns four.
pub fn parent_sleep_hours(youngest_child_age: Option<f64>) -> f64 {
    let Some(age) = youngest_child_age else {
        return PARENT_SLEEP_HOURS;
    };
    if age < NEWBORN_PHASE_END_AGE {
        return NEWBORN_PARENT_SLEEP_HOURS;
    }
    let progress = ((age - NEWBORN_PHASE_END_AGE) / (SLEEP_RECOVERED_AGE - NEWBORN_PHASE_END_AGE))
        .clamp(0.0, 1.0);
    NEWBORN_PARENT_SLEEP_HOURS + (PARENT_SLEEP_HOURS - NEWBORN_PARENT_SLEEP_HOURS) * progress
}

/// Waking hours left after sleep, work and commute. May be negative.
pub fn available_hours(parent_type: ParentType, youngest_child_age: Option<f64>) -> f64 {
    HOURS_IN_DAY
        - parent_sleep_hours(youngest_child_age)
        - parent_type.work_hours()
        - parent_type.commute_hours()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_without_children_is_full() {
        assert_eq!(parent_sleep_hours(None), 8.0);
    }

    #[test]
    fn test_sleep_ramps_from_newborn_to_recovered() {
        assert_eq!(parent_sleep_hours(Some(0.0)), 6.0);
        assert_eq!(parent_sleep_hours(Some(0.2)), 6.0);
        let mid = parent_sleep_hours(Some(2.125));
        assert!((mid - 7.0).abs() < 1e-9);
        assert_eq!(parent_sleep_hours(Some(4.0)), 8.0);
        assert_eq!(parent_sleep_hours(Some(12.0)), 8.0);
    }

    #[test]
    fn test_available_hours_with_grown_children() {
        let youngest = Some(10.0);
        assert_eq!(available_hours(ParentType::StayAtHome, youngest), 16.0);
        assert_eq!(available_hours(ParentType::FullTimeWork, youngest), 5.5);
        assert_eq!(available_hours(ParentType::PartTimeWork, youngest), 9.5);
        assert_eq!(available_hours(ParentType::RemoteFullTime, youngest), 8.0);
        assert_eq!(available_hours(ParentType::RemotePartTime, youngest), 12.0);
        assert_eq!(available_hours(ParentType::Flexible, youngest), 9.5);
    }

    #[test]
    fn test_newborn_gives_more_waking_hours() {
        let newborn = available_hours(ParentType::FullTimeWork, Some(0.0));
        let school_age = available_hours(ParentType::FullTimeWork, Some(8.0));
        assert_eq!(newborn - school_age, 2.0);
    }

    #[test]
    fn test_parent_type_from_str() {
        assert_eq!("FullTimeWork".parse::<ParentType>().unwrap(), ParentType::FullTimeWork);
        assert_eq!("stay-at-home".parse::<ParentType>().unwrap(), ParentType::StayAtHome);
        assert_eq!("remote_part_time".parse::<ParentType>().unwrap(), ParentType::RemotePartTime);
        assert!("Astronaut".parse::<ParentType>().is_err());
    }

    #[test]
    fn test_parent_type_display_round_trips() {
        for parent in ParentType::ALL {
            assert_eq!(parent.to_string().parse::<ParentType>().unwrap(), parent);
        }
    }
}
