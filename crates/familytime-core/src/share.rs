//! Shareable links: the raw family form as a URL fragment.
//!
//! Format: `#parentBirthYear=1988&numberOfChildren=2&parentType=FullTimeWork&
//! paternalLeaveDuration=1&child0BirthYear=2019&child0Daycare=true&...`

use std::collections::HashMap;

use url::form_urlencoded;

use crate::error::ValidationError;
use crate::family::{ChildForm, FamilyForm};
use crate::parent::ParentType;

/// Upper bound on children read from a link.
pub const MAX_SHARED_CHILDREN: usize = 20;

const DEFAULT_LEAVE: &str = "1";
const DEFAULT_DAYCARE_START: &str = "1";
const DEFAULT_DAYCARE_END: &str = "5";

/// Encode a form as a `#`-prefixed fragment. Empty fields are left out.
pub fn encode_fragment(form: &FamilyForm) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    let mut set = |key: &str, value: &str| {
        if !value.is_empty() {
            params.append_pair(key, value);
        }
    };

    set("parentBirthYear", &form.parent_birth_year);
    set("numberOfChildren", &form.number_of_children);
    set("parentType", form.parent_type.as_str());
    set("paternalLeaveDuration", &form.leave_duration);

    for (i, child) in form.children.iter().enumerate() {
        set(&format!("child{i}BirthYear"), &child.birth_year);
        set(&format!("child{i}Daycare"), if child.daycare_used { "true" } else { "false" });
        if let Some(start) = &child.daycare_start_age {
            set(&format!("child{i}DaycareStart"), start);
        }
        if let Some(end) = &child.daycare_end_age {
            set(&format!("child{i}DaycareEnd"), end);
        }
    }

    format!("#{}", params.finish())
}

/// Decode a fragment (with or without the leading `#`).
///
/// Missing values fall back to the form defaults; only an unknown parent
/// type is an error.
pub fn decode_fragment(fragment: &str) -> Result<FamilyForm, ValidationError> {
    let query = fragment.strip_prefix('#').unwrap_or(fragment);
    let params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");

    let parent_type = match get("parentType") {
        "" => ParentType::FullTimeWork,
        raw => raw.parse()?,
    };
    let leave_duration = match get("paternalLeaveDuration") {
        "" => DEFAULT_LEAVE,
        raw => raw,
    };

    let number_of_children = get("numberOfChildren").to_string();
    let count = number_of_children
        .trim()
        .parse::<usize>()
        .unwrap_or(0)
        .min(MAX_SHARED_CHILDREN);

    let children = (0..count)
        .map(|i| {
            let or_default = |key: String, default: &str| match get(&key) {
                "" => default.to_string(),
                raw => raw.to_string(),
            };
            ChildForm {
                birth_year: get(&format!("child{i}BirthYear")).to_string(),
                daycare_used: get(&format!("child{i}Daycare")) == "true",
                daycare_start_age: Some(or_default(format!("child{i}DaycareStart"), DEFAULT_DAYCARE_START)),
                daycare_end_age: Some(or_default(format!("child{i}DaycareEnd"), DEFAULT_DAYCARE_END)),
            }
        })
        .collect();

    Ok(FamilyForm {
        parent_birth_year: get("parentBirthYear").to_string(),
        number_of_children,
        parent_type,
        leave_duration: leave_duration.to_string(),
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_form() -> FamilyForm {
        FamilyForm {
            parent_birth_year: "1988".into(),
            number_of_children: "2".into(),
            parent_type: ParentType::RemotePartTime,
            leave_duration: "1.5".into(),
            children: vec![
                ChildForm {
                    birth_year: "2019".into(),
                    daycare_used: true,
                    daycare_start_age: Some("2".into()),
                    daycare_end_age: Some("5".into()),
                },
                ChildForm {
                    birth_year: "2022".into(),
                    daycare_used: false,
                    daycare_start_age: Some("1".into()),
                    daycare_end_age: Some("5".into()),
                },
            ],
        }
    }

    #[test]
    fn encode_uses_camel_case_keys() {
        let fragment = encode_fragment(&sample_form());
        assert!(fragment.starts_with("#parentBirthYear=1988&numberOfChildren=2"));
        assert!(fragment.contains("parentType=RemotePartTime"));
        assert!(fragment.contains("paternalLeaveDuration=1.5"));
        assert!(fragment.contains("child0Daycare=true"));
        assert!(fragment.contains("child1Daycare=false"));
        assert!(fragment.contains("child0DaycareStart=2"));
    }

    #[test]
    fn decode_reverses_encode() {
        let form = sample_form();
        assert_eq!(decode_fragment(&encode_fragment(&form)).unwrap(), form);
    }

    #[test]
    fn decode_applies_defaults() {
        let form = decode_fragment("numberOfChildren=1&child0BirthYear=2020").unwrap();
        assert_eq!(form.parent_type, ParentType::FullTimeWork);
        assert_eq!(form.leave_duration, "1");
        assert_eq!(form.parent_birth_year, "");
        assert_eq!(form.children.len(), 1);
        assert!(!form.children[0].daycare_used);
        assert_eq!(form.children[0].daycare_start_age.as_deref(), Some("1"));
        assert_eq!(form.children[0].daycare_end_age.as_deref(), Some("5"));
    }

    #[test]
    fn decode_ignores_children_beyond_count() {
        let form = decode_fragment("#numberOfChildren=1&child0BirthYear=2020&child1BirthYear=2022").unwrap();
        assert_eq!(form.children.len(), 1);
        let none = decode_fragment("#child0BirthYear=2020").unwrap();
        assert!(none.children.is_empty());
    }

    #[test]
    fn decode_caps_child_count() {
        let form = decode_fragment("#numberOfChildren=100000").unwrap();
        assert_eq!(form.children.len(), MAX_SHARED_CHILDREN);
    }

    #[test]
    fn decode_rejects_unknown_parent_type() {
        assert_eq!(
            decode_fragment("#parentType=Astronaut"),
            Err(ValidationError::UnknownParentType("Astronaut".into()))
        );
    }

    #[test]
    fn empty_fragment_gives_default_form() {
        assert_eq!(decode_fragment("#").unwrap(), FamilyForm::default());
    }
}
