//! Family input: the raw form, its validation, and the validated family.
//!
//! The form keeps values exactly as typed. `validate` turns it into a
//! [`Family`] the estimate can consume; children with unusable data are
//! set aside in [`Family::rejected`] rather than failing the whole family.

use std::path::Path;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::estimate::{
    self, Child, EstimateWindow, TimeSpent, YearEstimate, PARENTAL_LEAVE_DEFAULT_YEARS,
};
use crate::parent::ParentType;

/// Birth years must be strictly after this.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// One child as entered by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildForm {
    pub birth_year: String,
    pub daycare_used: bool,
    pub daycare_start_age: Option<String>,
    pub daycare_end_age: Option<String>,
}

impl ChildForm {
    pub fn new(birth_year: impl Into<String>) -> Self {
        Self {
            birth_year: birth_year.into(),
            ..Default::default()
        }
    }
}

/// Family as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyForm {
    pub parent_birth_year: String,
    pub number_of_children: String,
    pub parent_type: ParentType,
    pub leave_duration: String,
    pub children: Vec<ChildForm>,
}

impl Default for FamilyForm {
    fn default() -> Self {
        Self {
            parent_birth_year: String::new(),
            number_of_children: String::new(),
            parent_type: ParentType::FullTimeWork,
            leave_duration: "1".to_string(),
            children: Vec::new(),
        }
    }
}

impl FamilyForm {
    /// Grow or shrink the child list, keeping existing entries.
    pub fn resize_children(&mut self, count: usize) {
        self.children.resize_with(count, ChildForm::default);
        self.number_of_children = count.to_string();
    }
}

/// A child that failed validation, with its position in the form.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedChild {
    pub index: usize,
    pub error: ValidationError,
}

/// Validated family, ready for estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub parent_birth_year: i32,
    #[serde(default)]
    pub parent_type: ParentType,
    #[serde(default = "default_leave_duration")]
    pub leave_duration: f64,
    #[serde(default)]
    pub children: Vec<Child>,
    #[serde(skip)]
    pub rejected: Vec<RejectedChild>,
}

fn default_leave_duration() -> f64 {
    PARENTAL_LEAVE_DEFAULT_YEARS
}

impl Family {
    pub fn new(parent_birth_year: i32, parent_type: ParentType) -> Self {
        Self {
            parent_birth_year,
            parent_type,
            leave_duration: PARENTAL_LEAVE_DEFAULT_YEARS,
            children: Vec::new(),
            rejected: Vec::new(),
        }
    }

    pub fn with_leave(mut self, leave_duration: f64) -> Self {
        self.leave_duration = leave_duration;
        self
    }

    pub fn with_child(mut self, child: Child) -> Self {
        self.children.push(child);
        self
    }

    /// Parse a family file.
    ///
    /// ```toml
    /// parent_birth_year = 1988
    /// parent_type = "RemoteFullTime"
    /// leave_duration = 1.0
    ///
    /// [[children]]
    /// birth_year = 2020
    /// daycare_used = true
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and validate a family file.
    pub fn load(path: &Path, current_year: i32) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?.validated(current_year)?)
    }

    /// Apply the same checks as [`validate`] to an already typed family.
    pub fn validated(mut self, current_year: i32) -> Result<Self, ValidationError> {
        if !self.leave_duration.is_finite() || self.leave_duration < 0.0 {
            return Err(ValidationError::InvalidLeaveDuration(self.leave_duration.to_string()));
        }
        let mut kept = Vec::with_capacity(self.children.len());
        for (index, child) in std::mem::take(&mut self.children).into_iter().enumerate() {
            match check_child(&child, current_year) {
                Ok(()) => kept.push(child),
                Err(error) => self.rejected.push(RejectedChild { index, error }),
            }
        }
        self.children = kept;
        Ok(self)
    }

    pub fn parent_age(&self, year: i32) -> i32 {
        year - self.parent_birth_year
    }

    pub fn window(&self) -> Option<EstimateWindow> {
        EstimateWindow::for_children(&self.children)
    }

    pub fn estimate(&self) -> Vec<TimeSpent> {
        estimate::estimate(&self.children, self.parent_type, self.leave_duration)
    }

    pub fn estimate_detailed(&self) -> Vec<YearEstimate> {
        estimate::estimate_detailed(&self.children, self.parent_type, self.leave_duration)
    }

    /// Back to the raw form, e.g. for a share link.
    pub fn to_form(&self) -> FamilyForm {
        FamilyForm {
            parent_birth_year: self.parent_birth_year.to_string(),
            number_of_children: self.children.len().to_string(),
            parent_type: self.parent_type,
            leave_duration: self.leave_duration.to_string(),
            children: self
                .children
                .iter()
                .map(|child| ChildForm {
                    // forms carry whole years only
                    birth_year: child.birth_calendar_year().to_string(),
                    daycare_used: child.daycare_used,
                    daycare_start_age: child.daycare_start_age.map(|a| a.to_string()),
                    daycare_end_age: child.daycare_end_age.map(|a| a.to_string()),
                })
                .collect(),
        }
    }
}

/// Validate the whole form.
///
/// Fails only on family-level problems; invalid children are dropped and
/// listed in [`Family::rejected`].
pub fn validate(form: &FamilyForm, current_year: i32) -> Result<Family, ValidationError> {
    let parent_birth_year = form.parent_birth_year.trim();
    if parent_birth_year.is_empty() {
        return Err(ValidationError::MissingParentBirthYear);
    }
    let parent_birth_year = parent_birth_year
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidBirthYear(parent_birth_year.to_string()))?;

    let mut family = Family::new(parent_birth_year, form.parent_type)
        .with_leave(parse_leave_duration(&form.leave_duration)?);

    for (index, child_form) in form.children.iter().enumerate() {
        match validate_child(child_form, current_year) {
            Ok(child) => family.children.push(child),
            Err(error) => family.rejected.push(RejectedChild { index, error }),
        }
    }
    Ok(family)
}

/// Validate one child entry.
pub fn validate_child(form: &ChildForm, current_year: i32) -> Result<Child, ValidationError> {
    let raw = form.birth_year.trim();
    let birth_year = raw
        .parse::<i32>()
        .map_err(|_| ValidationError::InvalidBirthYear(raw.to_string()))?;

    let child = Child {
        birth_year: birth_year as f64,
        daycare_used: form.daycare_used,
        daycare_start_age: parse_age("start", form.daycare_start_age.as_deref())?,
        daycare_end_age: parse_age("end", form.daycare_end_age.as_deref())?,
    };
    check_child(&child, current_year)?;
    Ok(child)
}

fn check_child(child: &Child, current_year: i32) -> Result<(), ValidationError> {
    if !child.birth_year.is_finite() {
        return Err(ValidationError::InvalidBirthYear(child.birth_year.to_string()));
    }
    let year = child.birth_calendar_year();
    let max = current_year + 1;
    if year <= MIN_BIRTH_YEAR || year > max {
        return Err(ValidationError::BirthYearOutOfRange {
            year,
            min: MIN_BIRTH_YEAR,
            max,
        });
    }
    for (field, age) in [("start", child.daycare_start_age), ("end", child.daycare_end_age)] {
        if let Some(age) = age {
            if !age.is_finite() || age < 0.0 {
                return Err(ValidationError::InvalidDaycareAge {
                    field,
                    value: age.to_string(),
                });
            }
        }
    }
    let (start, end) = child.daycare_window();
    if child.daycare_used && start >= end {
        return Err(ValidationError::DaycareRangeInverted { start, end });
    }
    Ok(())
}

fn parse_age(field: &'static str, value: Option<&str>) -> Result<Option<f64>, ValidationError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let invalid = || ValidationError::InvalidDaycareAge {
        field,
        value: value.to_string(),
    };
    let age = value.parse::<f64>().map_err(|_| invalid())?;
    if !age.is_finite() || age < 0.0 {
        return Err(invalid());
    }
    Ok(Some(age))
}

/// Empty or unparsable input falls back to the default leave.
fn parse_leave_duration(value: &str) -> Result<f64, ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(years) if years.is_finite() && years >= 0.0 => Ok(years),
        Ok(_) => Err(ValidationError::InvalidLeaveDuration(value.to_string())),
        Err(_) => Ok(PARENTAL_LEAVE_DEFAULT_YEARS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(children: &[&str]) -> FamilyForm {
        FamilyForm {
            parent_birth_year: "1988".into(),
            number_of_children: children.len().to_string(),
            children: children.iter().map(|y| ChildForm::new(*y)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_accepts_typical_family() {
        let family = validate(&form(&["2019", "2022"]), 2025).unwrap();
        assert_eq!(family.parent_birth_year, 1988);
        assert_eq!(family.children.len(), 2);
        assert!(family.rejected.is_empty());
        assert_eq!(family.leave_duration, 1.0);
    }

    #[test]
    fn test_validate_requires_parent_birth_year() {
        let mut f = form(&["2019"]);
        f.parent_birth_year = "  ".into();
        assert_eq!(validate(&f, 2025), Err(ValidationError::MissingParentBirthYear));
        f.parent_birth_year = "nineteen".into();
        assert!(matches!(validate(&f, 2025), Err(ValidationError::InvalidBirthYear(_))));
    }

    #[test]
    fn test_invalid_children_are_set_aside() {
        let family = validate(&form(&["2019", "abc", "1899", "2027", "2026"]), 2025).unwrap();
        assert_eq!(family.children.len(), 2);
        let indices: Vec<_> = family.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert!(matches!(family.rejected[0].error, ValidationError::InvalidBirthYear(_)));
        assert_eq!(
            family.rejected[2].error,
            ValidationError::BirthYearOutOfRange { year: 2027, min: 1900, max: 2026 }
        );
    }

    #[test]
    fn test_birth_year_1900_is_rejected() {
        assert!(validate_child(&ChildForm::new("1900"), 2025).is_err());
        assert!(validate_child(&ChildForm::new("1901"), 2025).is_ok());
    }

    #[test]
    fn test_daycare_ages() {
        let mut child = ChildForm::new("2020");
        child.daycare_used = true;
        child.daycare_start_age = Some("2".into());
        child.daycare_end_age = Some("".into());
        let parsed = validate_child(&child, 2025).unwrap();
        assert_eq!(parsed.daycare_start_age, Some(2.0));
        assert_eq!(parsed.daycare_end_age, None);

        child.daycare_end_age = Some("1.5".into());
        assert_eq!(
            validate_child(&child, 2025),
            Err(ValidationError::DaycareRangeInverted { start: 2.0, end: 1.5 })
        );

        child.daycare_start_age = Some("-1".into());
        assert!(matches!(
            validate_child(&child, 2025),
            Err(ValidationError::InvalidDaycareAge { field: "start", .. })
        ));
    }

    #[test]
    fn test_leave_duration_parsing() {
        let mut f = form(&["2020"]);
        f.leave_duration = "".into();
        assert_eq!(validate(&f, 2025).unwrap().leave_duration, 1.0);
        f.leave_duration = "0.5".into();
        assert_eq!(validate(&f, 2025).unwrap().leave_duration, 0.5);
        f.leave_duration = "-2".into();
        assert!(matches!(validate(&f, 2025), Err(ValidationError::InvalidLeaveDuration(_))));
    }

    #[test]
    fn test_family_from_toml() {
        let family = Family::from_toml_str(
            r#"
parent_birth_year = 1985
parent_type = "RemotePartTime"

[[children]]
birth_year = 2016

[[children]]
birth_year = 2019.5
daycare_used = true
daycare_end_age = 4.0
"#,
        )
        .unwrap()
        .validated(2025)
        .unwrap();
        assert_eq!(family.parent_type, ParentType::RemotePartTime);
        assert_eq!(family.leave_duration, 1.0);
        assert_eq!(family.children.len(), 2);
        assert_eq!(family.children[1].birth_year, 2019.5);
        assert_eq!(family.children[1].daycare_window(), (1.0, 4.0));
    }

    #[test]
    fn test_validated_drops_out_of_range_children() {
        let family = Family::new(1980, ParentType::Flexible)
            .with_child(Child::new(2010.0))
            .with_child(Child::new(1850.0))
            .validated(2025)
            .unwrap();
        assert_eq!(family.children.len(), 1);
        assert_eq!(family.rejected[0].index, 1);
    }

    #[test]
    fn test_to_form_validates_back() {
        let family = Family::new(1990, ParentType::StayAtHome)
            .with_leave(1.5)
            .with_child(Child::new(2021.0).with_daycare_window(1.0, 4.0));
        let again = validate(&family.to_form(), 2025).unwrap();
        assert_eq!(again, family);
    }

    #[test]
    fn test_resize_children() {
        let mut f = form(&["2019"]);
        f.resize_children(3);
        assert_eq!(f.children.len(), 3);
        assert_eq!(f.children[0].birth_year, "2019");
        assert_eq!(f.number_of_children, "3");
    }
}
