//! # Family Time Core Library
//!
//! Estimates how many hours per day a parent spends with their children,
//! year by year, from the children's birth years, the parent's work
//! arrangement, parental leave and daycare use. The `familytime` CLI is a
//! thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Estimate**: per-child hours from age-group tables, combined into a
//!   household total with a sibling overlap discount
//! - **Family**: raw form input, validation and TOML family files
//! - **Timeline / Insights**: life-stage segments and plain-language notes
//! - **Share**: URL-fragment encoding of the family form
//! - **Storage**: TOML-based user configuration
//!
//! ## Key Components
//!
//! - [`estimate()`]: The yearly estimate
//! - [`Family`]: Validated family input
//! - [`Config`]: User defaults and output preferences

pub mod error;
pub mod estimate;
pub mod family;
pub mod insights;
pub mod parent;
pub mod share;
pub mod stage;
pub mod storage;
pub mod timeline;

pub use error::{ConfigError, CoreError, ValidationError};
pub use estimate::{estimate, estimate_detailed, Child, EstimateWindow, TimeSpent, YearEstimate};
pub use family::{validate, ChildForm, Family, FamilyForm, RejectedChild};
pub use insights::generate_insights;
pub use parent::ParentType;
pub use share::{decode_fragment, encode_fragment};
pub use stage::{ChildAgeGroup, SchoolingStage};
pub use storage::Config;
pub use timeline::{timeline, ChildTimeline, StageSegment};
