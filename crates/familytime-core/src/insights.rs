//! Plain-language insights for a family.

use crate::family::Family;
use crate::parent::ParentType;
use crate::stage::ChildAgeGroup;

/// Insight sentences for `family` as of `current_year`.
///
/// Empty when the family has no children.
pub fn generate_insights(family: &Family, current_year: i32) -> Vec<String> {
    if family.children.is_empty() {
        return Vec::new();
    }

    let mut insights = Vec::new();
    insights.push(parent_type_insight(family.parent_type).to_string());

    if family.leave_duration > 1.0 {
        insights.push(format!(
            "Your extended parental leave of {} years provides crucial bonding time during the early developmental stages.",
            family.leave_duration
        ));
    } else if family.leave_duration < 1.0 {
        insights.push(
            "Consider ways to maximize bonding time during your shorter parental leave period."
                .to_string(),
        );
    }

    for (index, child) in family.children.iter().enumerate() {
        let n = index + 1;
        let age = child.whole_age(current_year) as f64;
        match ChildAgeGroup::from_age(age) {
            ChildAgeGroup::Infancy => {
                insights.push(format!(
                    "Child {n} is in infancy - this is a critical period for attachment and development."
                ));
                if !child.daycare_used {
                    insights.push(format!(
                        "Consider introducing structured activities for Child {n} to support social development."
                    ));
                }
            }
            ChildAgeGroup::Toddler => {
                if child.daycare_used {
                    insights.push(format!(
                        "Daycare provides important socialization for Child {n} during the toddler years."
                    ));
                }
            }
            ChildAgeGroup::EarlyChildhood => insights.push(format!(
                "Focus on educational activities and skill development for Child {n} during these formative years."
            )),
            ChildAgeGroup::MiddleChildhood => insights.push(format!(
                "Balance academic support with extracurricular activities for Child {n}."
            )),
            ChildAgeGroup::Adolescence => insights.push(format!(
                "Maintain open communication and support independence for Child {n} during teenage years."
            )),
            ChildAgeGroup::NotBornYet | ChildAgeGroup::Adulthood => {}
        }
    }

    if family.children.len() > 1 {
        insights.push(
            "With multiple children, consider scheduling one-on-one time with each child to maintain individual connections."
                .to_string(),
        );
        insights.push(
            "Look for activities that can engage children of different ages together.".to_string(),
        );
    }

    insights
}

fn parent_type_insight(parent_type: ParentType) -> &'static str {
    match parent_type {
        ParentType::StayAtHome => "As a stay-at-home parent, you'll have the most flexibility to maximize quality time with your children, especially during their early years.",
        ParentType::FullTimeWork => "Working full-time means being strategic about quality time. Consider establishing strong morning and evening routines to maximize engagement.",
        ParentType::PartTimeWork => "Part-time work leaves room for school pick-ups and afternoons together. Protect those hours from errands where you can.",
        ParentType::RemoteFullTime => "Remote work offers unique opportunities to blend work and family time. You can save commute time and be more present for key moments.",
        ParentType::RemotePartTime => "Your part-time remote schedule provides a good balance of focused work time and family engagement.",
        ParentType::Flexible => "A flexible schedule allows you to adapt to your children's changing needs and important milestones.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::Child;

    #[test]
    fn test_no_children_no_insights() {
        let family = Family::new(1990, ParentType::StayAtHome);
        assert!(generate_insights(&family, 2025).is_empty());
    }

    #[test]
    fn test_infant_without_daycare() {
        let family = Family::new(1990, ParentType::RemoteFullTime).with_child(Child::new(2025.0));
        let insights = generate_insights(&family, 2025);
        assert_eq!(insights.len(), 3);
        assert!(insights[0].starts_with("Remote work"));
        assert!(insights[1].contains("Child 1 is in infancy"));
        assert!(insights[2].contains("structured activities"));
    }

    #[test]
    fn test_leave_and_siblings() {
        let family = Family::new(1985, ParentType::FullTimeWork)
            .with_leave(1.5)
            .with_child(Child::new(2015.0))
            .with_child(Child::new(2023.0).with_daycare());
        let insights = generate_insights(&family, 2025);
        assert!(insights.iter().any(|i| i.contains("1.5 years")));
        assert!(insights.iter().any(|i| i.contains("Child 1.")));
        assert!(insights.iter().any(|i| i.contains("socialization for Child 2")));
        assert!(insights.iter().any(|i| i.contains("one-on-one time")));
    }

    #[test]
    fn test_short_leave() {
        let family = Family::new(1985, ParentType::Flexible)
            .with_leave(0.25)
            .with_child(Child::new(2000.0));
        let insights = generate_insights(&family, 2025);
        assert_eq!(insights.len(), 2);
        assert!(insights[1].contains("shorter parental leave"));
    }
}
