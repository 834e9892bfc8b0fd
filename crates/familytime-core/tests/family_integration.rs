//! Integration tests for family input.
//!
//! Form validation, family files and share links all feed the same
//! estimate, so each path is checked end to end.

use familytime_core::error::CoreError;
use familytime_core::{
    decode_fragment, encode_fragment, validate, ChildForm, Family, FamilyForm, ParentType,
    ValidationError,
};

fn two_child_form() -> FamilyForm {
    let mut form = FamilyForm {
        parent_birth_year: "1987".into(),
        parent_type: ParentType::PartTimeWork,
        leave_duration: "1".into(),
        ..Default::default()
    };
    form.resize_children(2);
    form.children[0] = ChildForm {
        birth_year: "2016".into(),
        daycare_used: true,
        daycare_start_age: Some("1".into()),
        daycare_end_age: Some("4".into()),
    };
    form.children[1] = ChildForm {
        daycare_start_age: Some("1".into()),
        daycare_end_age: Some("5".into()),
        ..ChildForm::new("2020")
    };
    form
}

#[test]
fn test_form_to_estimate() {
    let family = validate(&two_child_form(), 2025).unwrap();
    assert!(family.rejected.is_empty());
    assert_eq!(family.children.len(), 2);

    let records = family.estimate();
    assert_eq!(records.first().unwrap().year, 2014);
    assert_eq!(records.last().unwrap().year, 2040);
    assert_eq!(family.parent_age(2016), 29);
}

#[test]
fn test_invalid_child_is_dropped_not_fatal() {
    let mut form = two_child_form();
    form.resize_children(3);
    form.children[2] = ChildForm::new("20x0");

    let family = validate(&form, 2025).unwrap();
    assert_eq!(family.children.len(), 2);
    assert_eq!(family.rejected.len(), 1);
    assert_eq!(family.rejected[0].index, 2);
    assert_eq!(
        family.rejected[0].error,
        ValidationError::InvalidBirthYear("20x0".into())
    );
}

#[test]
fn test_child_from_the_future_is_rejected() {
    let mut form = two_child_form();
    form.children[1] = ChildForm::new("2031");
    let family = validate(&form, 2025).unwrap();
    assert_eq!(family.children.len(), 1);
    assert!(matches!(
        family.rejected[0].error,
        ValidationError::BirthYearOutOfRange { year: 2031, .. }
    ));
}

#[test]
fn test_missing_parent_year_fails() {
    let mut form = two_child_form();
    form.parent_birth_year = "  ".into();
    assert_eq!(validate(&form, 2025), Err(ValidationError::MissingParentBirthYear));
}

#[test]
fn test_share_link_reproduces_estimate() {
    let form = two_child_form();
    let fragment = encode_fragment(&form);
    let decoded = decode_fragment(&fragment).unwrap();
    assert_eq!(decoded, form);

    let original = validate(&form, 2025).unwrap();
    let shared = validate(&decoded, 2025).unwrap();
    assert_eq!(original.estimate(), shared.estimate());
}

#[test]
fn test_family_link_round_trip() {
    let family = validate(&two_child_form(), 2025).unwrap();
    let decoded = decode_fragment(&encode_fragment(&family.to_form())).unwrap();
    let restored = validate(&decoded, 2025).unwrap();
    assert_eq!(restored.estimate(), family.estimate());
    assert_eq!(restored.parent_type, ParentType::PartTimeWork);
}

#[test]
fn test_family_file_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family.toml");
    std::fs::write(
        &path,
        r#"
parent_birth_year = 1990
parent_type = "StayAtHome"

[[children]]
birth_year = 2021

[[children]]
birth_year = 1800
"#,
    )
    .unwrap();

    let family = Family::load(&path, 2025).unwrap();
    assert_eq!(family.parent_type, ParentType::StayAtHome);
    assert_eq!(family.leave_duration, 1.0);
    assert_eq!(family.children.len(), 1);
    assert_eq!(family.rejected.len(), 1);
    assert!(!family.estimate().is_empty());
}

#[test]
fn test_family_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(Family::load(&missing, 2025), Err(CoreError::Io(_))));

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "parent_birth_year = \"soon\"").unwrap();
    assert!(matches!(Family::load(&broken, 2025), Err(CoreError::Toml(_))));

    let negative = dir.path().join("negative.toml");
    std::fs::write(&negative, "parent_birth_year = 1990\nleave_duration = -1.0").unwrap();
    assert!(matches!(
        Family::load(&negative, 2025),
        Err(CoreError::Validation(ValidationError::InvalidLeaveDuration(_)))
    ));
}
