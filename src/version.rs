// src/version.rs

//! Version handling and constraint satisfaction for recipe requirements
//!
//! Recipe versions are dot-separated alphanumeric components ("0.5.4",
//! "2.2.0", "1.11.0b"). Constraints are either an exact version or a
//! `~`-prefixed compatible range ("~0.11.3": same leading components, final
//! component at or above the floor).

use crate::error::{Error, Result};
use semver::Version;
use std::cmp::Ordering;
use std::fmt;

/// A parsed recipe version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecipeVersion {
    raw: String,
    components: Vec<String>,
}

impl RecipeVersion {
    /// Parse a recipe version string
    ///
    /// Format: dot-separated components, each non-empty and ASCII
    /// alphanumeric, with a numeric leading component.
    /// Examples:
    /// - "0.5.4" → ["0", "5", "4"]
    /// - "1.11" → ["1", "11"]
    /// - "2.2.0b1" → ["2", "2", "0b1"]
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::ConfigInvalid("empty version string".to_string()));
        }

        let components: Vec<String> = s.split('.').map(|c| c.to_string()).collect();
        for component in &components {
            if component.is_empty() || !component.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(Error::ConfigInvalid(format!(
                    "malformed version '{}': component '{}' is not alphanumeric",
                    s, component
                )));
            }
        }
        if components[0].parse::<u64>().is_err() {
            return Err(Error::ConfigInvalid(format!(
                "malformed version '{}': leading component must be numeric",
                s
            )));
        }

        Ok(Self {
            raw: s.to_string(),
            components,
        })
    }

    /// The version as written in the recipe
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Convert to a semver::Version for comparison
    ///
    /// Recipe versions may not be semver-compliant (two components, letter
    /// suffixes), so this only succeeds for clean major.minor.patch input;
    /// callers fall back to componentwise comparison otherwise.
    fn to_semver(&self) -> Option<Version> {
        Version::parse(&self.raw).ok()
    }

    /// Compare two recipe versions
    ///
    /// Componentwise: numeric comparison when both components are numeric,
    /// lexicographic otherwise. A version with more components sorts after
    /// its prefix ("1.2.0" > "1.2").
    pub fn compare(&self, other: &RecipeVersion) -> Ordering {
        if let (Some(a), Some(b)) = (self.to_semver(), other.to_semver()) {
            return a.cmp(&b);
        }

        let pairs = self.components.iter().zip(other.components.iter());
        for (a, b) in pairs {
            let ord = match (a.parse::<u64>(), b.parse::<u64>()) {
                (Ok(na), Ok(nb)) => na.cmp(&nb),
                _ => a.cmp(b),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.components.len().cmp(&other.components.len())
    }

    fn components(&self) -> &[String] {
        &self.components
    }
}

impl fmt::Display for RecipeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Ord for RecipeVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for RecipeVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A version constraint from a recipe requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Exact version match
    Exact(RecipeVersion),
    /// Compatible range: same leading components, final component at or
    /// above the floor ("~0.11.3" admits 0.11.3, 0.11.7, not 0.12.0)
    Compatible(RecipeVersion),
}

impl Constraint {
    /// Parse a constraint string
    ///
    /// Grammar: an exact version ("0.5.4") or a `~`-prefixed compatible
    /// range ("~0.11.3"). Anything else is `Error::ConfigInvalid`.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix('~') {
            Ok(Constraint::Compatible(RecipeVersion::parse(rest)?))
        } else {
            Ok(Constraint::Exact(RecipeVersion::parse(s)?))
        }
    }

    /// Check if a version satisfies this constraint
    pub fn satisfies(&self, version: &RecipeVersion) -> bool {
        match self {
            Constraint::Exact(v) => version == v,
            Constraint::Compatible(floor) => {
                let floor_parts = floor.components();
                let parts = version.components();
                if parts.len() != floor_parts.len() {
                    return false;
                }
                let (last, prefix) = match floor_parts.split_last() {
                    Some(split) => split,
                    None => return false,
                };
                if parts[..prefix.len()] != *prefix {
                    return false;
                }
                match (parts[prefix.len()].parse::<u64>(), last.parse::<u64>()) {
                    (Ok(a), Ok(b)) => a >= b,
                    _ => parts[prefix.len()] >= *last,
                }
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Exact(v) => write!(f, "{}", v),
            Constraint::Compatible(v) => write!(f, "~{}", v),
        }
    }
}
