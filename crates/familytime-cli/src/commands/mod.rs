pub mod config;
pub mod estimate;
pub mod insights;
pub mod share;
pub mod timeline;

use std::path::PathBuf;

use clap::Args;
use familytime_core::family::{current_year, validate_child};
use familytime_core::{validate, ChildForm, Config, Family, FamilyForm, ParentType, RejectedChild};
use tracing::warn;

/// Family input shared by every command that estimates.
#[derive(Args, Debug, Clone, Default)]
pub struct FamilyArgs {
    /// Family file (TOML); other flags override or extend it
    #[arg(long, value_name = "FILE")]
    pub family: Option<PathBuf>,

    /// Parent's birth year
    #[arg(long, value_name = "YEAR")]
    pub parent_birth_year: Option<String>,

    /// stay-at-home, full-time-work, part-time-work, remote-full-time, remote-part-time, flexible
    #[arg(long, value_name = "TYPE")]
    pub parent_type: Option<ParentType>,

    /// Parental leave in years
    #[arg(long, value_name = "YEARS")]
    pub leave: Option<String>,

    /// Child as YEAR[,daycare[=START-END]], repeatable
    #[arg(long = "child", value_name = "SPEC")]
    pub children: Vec<String>,
}

impl FamilyArgs {
    /// Build and validate the family, reporting skipped children on stderr.
    pub fn resolve(&self, config: &Config) -> Result<Family, Box<dyn std::error::Error>> {
        let year = current_year();
        let family = match &self.family {
            Some(path) => self.extend_file(Family::load(path, year)?, config, year)?,
            None => validate(&self.to_form(config)?, year)?,
        };

        for rejected in &family.rejected {
            warn!(index = rejected.index, error = %rejected.error, "child skipped");
            eprintln!("warning: child {} skipped: {}", rejected.index + 1, rejected.error);
        }
        if family.children.is_empty() {
            eprintln!("warning: no children given");
        }
        Ok(family)
    }

    /// Raw form from the flags alone, with config defaults filled in.
    pub fn to_form(&self, config: &Config) -> Result<FamilyForm, Box<dyn std::error::Error>> {
        let children = self
            .children
            .iter()
            .map(|spec| parse_child_spec(spec, config))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FamilyForm {
            parent_birth_year: self.parent_birth_year.clone().unwrap_or_default(),
            number_of_children: children.len().to_string(),
            parent_type: self.parent_type.unwrap_or(config.defaults.parent_type),
            leave_duration: self
                .leave
                .clone()
                .unwrap_or_else(|| config.defaults.leave_duration.to_string()),
            children,
        })
    }

    fn extend_file(
        &self,
        mut family: Family,
        config: &Config,
        year: i32,
    ) -> Result<Family, Box<dyn std::error::Error>> {
        if self.parent_birth_year.is_some() || self.leave.is_some() {
            let mut header = family.to_form();
            header.children.clear();
            if let Some(parent) = &self.parent_birth_year {
                header.parent_birth_year = parent.clone();
            }
            if let Some(leave) = &self.leave {
                header.leave_duration = leave.clone();
            }
            let parsed = validate(&header, year)?;
            family.parent_birth_year = parsed.parent_birth_year;
            family.leave_duration = parsed.leave_duration;
        }

        // flag children are numbered after the file's
        let offset = family.children.len() + family.rejected.len();
        for (i, form) in self.to_form(config)?.children.iter().enumerate() {
            match validate_child(form, year) {
                Ok(child) => family.children.push(child),
                Err(error) => family.rejected.push(RejectedChild {
                    index: offset + i,
                    error,
                }),
            }
        }

        if let Some(parent_type) = self.parent_type {
            family.parent_type = parent_type;
        }
        Ok(family)
    }
}

/// Parse `YEAR[,daycare[=START-END]]`.
pub fn parse_child_spec(spec: &str, config: &Config) -> Result<ChildForm, String> {
    let mut parts = spec.split(',').map(str::trim);
    let birth_year = parts.next().unwrap_or_default();
    if birth_year.is_empty() {
        return Err(format!("invalid child '{spec}': missing birth year"));
    }

    let mut child = ChildForm::new(birth_year);
    for part in parts {
        let (name, range) = match part.split_once('=') {
            Some((name, range)) => (name.trim(), Some(range.trim())),
            None => (part, None),
        };
        if name != "daycare" {
            return Err(format!("invalid child '{spec}': unknown option '{name}'"));
        }
        child.daycare_used = true;
        let (start, end) = match range {
            Some(range) => range
                .split_once('-')
                .map(|(s, e)| (s.trim().to_string(), e.trim().to_string()))
                .ok_or_else(|| format!("invalid child '{spec}': daycare range must be START-END"))?,
            None => (
                config.defaults.daycare_start_age.to_string(),
                config.defaults.daycare_end_age.to_string(),
            ),
        };
        child.daycare_start_age = Some(start);
        child.daycare_end_age = Some(end);
    }
    Ok(child)
}
