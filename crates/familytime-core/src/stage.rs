//! Life-stage and schooling-stage classification.
//!
//! Both partitions are half-open: an age equal to a boundary belongs to the
//! older category. Every real age, including negatives and NaN, maps to
//! exactly one category.

use serde::{Deserialize, Serialize};

/// Developmental stage of a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChildAgeGroup {
    NotBornYet,
    Infancy,
    Toddler,
    EarlyChildhood,
    MiddleChildhood,
    Adolescence,
    Adulthood,
}

impl ChildAgeGroup {
    /// All groups in age order.
    pub const ALL: [ChildAgeGroup; 7] = [
        ChildAgeGroup::NotBornYet,
        ChildAgeGroup::Infancy,
        ChildAgeGroup::Toddler,
        ChildAgeGroup::EarlyChildhood,
        ChildAgeGroup::MiddleChildhood,
        ChildAgeGroup::Adolescence,
        ChildAgeGroup::Adulthood,
    ];

    /// Classify an age in years.
    pub fn from_age(age: f64) -> Self {
        if age < 0.0 {
            ChildAgeGroup::NotBornYet
        } else if age < 1.0 {
            ChildAgeGroup::Infancy
        } else if age < 3.0 {
            ChildAgeGroup::Toddler
        } else if age < 6.0 {
            ChildAgeGroup::EarlyChildhood
        } else if age < 12.0 {
            ChildAgeGroup::MiddleChildhood
        } else if age < 18.0 {
            ChildAgeGroup::Adolescence
        } else {
            ChildAgeGroup::Adulthood
        }
    }

    /// Age range `[start, end)` covered by this group.
    ///
    /// Open ends are reported as infinities.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            ChildAgeGroup::NotBornYet => (f64::NEG_INFINITY, 0.0),
            ChildAgeGroup::Infancy => (0.0, 1.0),
            ChildAgeGroup::Toddler => (1.0, 3.0),
            ChildAgeGroup::EarlyChildhood => (3.0, 6.0),
            ChildAgeGroup::MiddleChildhood => (6.0, 12.0),
            ChildAgeGroup::Adolescence => (12.0, 18.0),
            ChildAgeGroup::Adulthood => (18.0, f64::INFINITY),
        }
    }

    /// The stage that follows this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            ChildAgeGroup::NotBornYet => Some(ChildAgeGroup::Infancy),
            ChildAgeGroup::Infancy => Some(ChildAgeGroup::Toddler),
            ChildAgeGroup::Toddler => Some(ChildAgeGroup::EarlyChildhood),
            ChildAgeGroup::EarlyChildhood => Some(ChildAgeGroup::MiddleChildhood),
            ChildAgeGroup::MiddleChildhood => Some(ChildAgeGroup::Adolescence),
            ChildAgeGroup::Adolescence => Some(ChildAgeGroup::Adulthood),
            ChildAgeGroup::Adulthood => None,
        }
    }

    /// Whether the child still needs near-constant supervision.
    pub fn is_young(self) -> bool {
        matches!(self, ChildAgeGroup::Infancy | ChildAgeGroup::Toddler)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChildAgeGroup::NotBornYet => "not born yet",
            ChildAgeGroup::Infancy => "infancy",
            ChildAgeGroup::Toddler => "toddler",
            ChildAgeGroup::EarlyChildhood => "early childhood",
            ChildAgeGroup::MiddleChildhood => "middle childhood",
            ChildAgeGroup::Adolescence => "adolescence",
            ChildAgeGroup::Adulthood => "adulthood",
        }
    }
}

impl std::fmt::Display for ChildAgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schooling stage of a child, used by the weekend tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchoolingStage {
    PreSchool,
    Kindergarten,
    Elementary,
    MiddleSchool,
    HighSchool,
    PostHighSchool,
}

impl SchoolingStage {
    /// Classify an age in years. Negative ages count as pre-school.
    pub fn from_age(age: f64) -> Self {
        if age < 4.0 {
            SchoolingStage::PreSchool
        } else if age < 6.0 {
            SchoolingStage::Kindergarten
        } else if age < 12.0 {
            SchoolingStage::Elementary
        } else if age < 15.0 {
            SchoolingStage::MiddleSchool
        } else if age < 18.0 {
            SchoolingStage::HighSchool
        } else {
            SchoolingStage::PostHighSchool
        }
    }
}
