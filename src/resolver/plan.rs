// src/resolver/plan.rs

//! Resolution plan data structures

use crate::platform::Platform;
use crate::rules::{ImportRule, RequirementRule};
use std::fmt;

/// The platform-specific result of resolving a rule store
///
/// Owned by the caller; the store it was resolved from is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPlan {
    /// Platform the plan was resolved for
    pub platform: Platform,
    /// Active requirements, in declaration order
    pub requirements: Vec<RequirementRule>,
    /// Active imports, in declaration order
    pub imports: Vec<ImportRule>,
}

impl ResolvedPlan {
    /// True when no rules apply on this platform
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty() && self.imports.is_empty()
    }
}

impl fmt::Display for ResolvedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "plan for {}:", self.platform)?;
        writeln!(f, "  requirements ({}):", self.requirements.len())?;
        for rule in &self.requirements {
            writeln!(f, "    {}", rule)?;
        }
        writeln!(f, "  imports ({}):", self.imports.len())?;
        for rule in &self.imports {
            if rule.folder {
                writeln!(f, "    {} (folder)", rule)?;
            } else {
                writeln!(f, "    {}", rule)?;
            }
        }
        Ok(())
    }
}
