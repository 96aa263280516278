// src/rules.rs

//! The descriptor store: an immutable, ordered rule table
//!
//! A [`RuleStore`] is built once from a parsed recipe file and never mutated
//! afterwards. Each recipe file (including each revision of the same recipe)
//! becomes its own store snapshot; snapshots are never merged, and duplicate
//! package declarations within one snapshot are retained in order and
//! surfaced through [`RuleStore::duplicate_packages`] for manual review.

use crate::error::Result;
use crate::platform::Platform;
use crate::recipe::RecipeFile;
use crate::version::Constraint;
use std::collections::HashSet;
use std::fmt;

/// A declarative statement that a package must be present on some platforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementRule {
    /// Package name
    pub package: String,
    /// Version constraint
    pub constraint: Constraint,
    /// Platforms this rule applies to; empty means all
    pub applies_to: Vec<Platform>,
}

impl RequirementRule {
    /// Check whether this rule applies on the given platform
    pub fn applies_on(&self, platform: Platform) -> bool {
        self.applies_to.is_empty() || self.applies_to.contains(&platform)
    }
}

impl fmt::Display for RequirementRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.constraint)
    }
}

/// A declarative statement that files matching a pattern are copied to a
/// destination after dependency resolution, on some platforms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRule {
    /// Glob pattern selecting files to copy
    pub pattern: String,
    /// Destination directory
    pub dest: String,
    /// Preserve the source folder structure under the destination
    pub folder: bool,
    /// Platforms this rule applies to; empty means all
    pub applies_to: Vec<Platform>,
}

impl ImportRule {
    /// Check whether this rule applies on the given platform
    pub fn applies_on(&self, platform: Platform) -> bool {
        self.applies_to.is_empty() || self.applies_to.contains(&platform)
    }
}

impl fmt::Display for ImportRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.pattern, self.dest)
    }
}

/// An immutable snapshot of one recipe's rule tables
#[derive(Debug, Clone)]
pub struct RuleStore {
    name: String,
    revision: Option<String>,
    requirements: Vec<RequirementRule>,
    imports: Vec<ImportRule>,
}

impl RuleStore {
    /// Build a store from a parsed recipe file
    ///
    /// Fails with `ConfigInvalid` if any declared version constraint is
    /// outside the recognized grammar. Declaration order is preserved.
    pub fn from_recipe(recipe: &RecipeFile) -> Result<Self> {
        let mut requirements = Vec::with_capacity(recipe.requires.len());
        for decl in &recipe.requires {
            requirements.push(RequirementRule {
                package: decl.package.clone(),
                constraint: Constraint::parse(&decl.version)?,
                applies_to: decl.platforms.clone(),
            });
        }

        let imports = recipe
            .imports
            .iter()
            .map(|decl| ImportRule {
                pattern: decl.pattern.clone(),
                dest: decl.dest.clone(),
                folder: decl.folder,
                applies_to: decl.platforms.clone(),
            })
            .collect();

        Ok(Self {
            name: recipe.recipe.name.clone(),
            revision: recipe.recipe.revision.clone(),
            requirements,
            imports,
        })
    }

    /// Recipe name this snapshot was loaded from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot revision label, if the recipe declared one
    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// All requirement rules, in declaration order
    pub fn requirement_rules(&self) -> &[RequirementRule] {
        &self.requirements
    }

    /// All import rules, in declaration order
    pub fn import_rules(&self) -> &[ImportRule] {
        &self.imports
    }

    /// Packages declared by more than one requirement rule
    ///
    /// Duplicates are kept in the store (they may be deliberate overrides
    /// carried across recipe revisions); this lists them for review.
    pub fn duplicate_packages(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut dupes = Vec::new();
        for rule in &self.requirements {
            if !seen.insert(rule.package.as_str()) && !dupes.contains(&rule.package.as_str()) {
                dupes.push(rule.package.as_str());
            }
        }
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::parse_recipe;

    fn store(content: &str) -> RuleStore {
        RuleStore::from_recipe(&parse_recipe(content).unwrap()).unwrap()
    }

    #[test]
    fn test_store_preserves_declaration_order() {
        let s = store(
            r#"
[recipe]
name = "ffmpeg"

[[requires]]
package = "videoai"
version = "0.5.4"

[[requires]]
package = "openh264"
version = "2.2.0"
platforms = ["macos"]

[[requires]]
package = "libvpx"
version = "1.11.0"
platforms = ["macos"]
"#,
        );
        let names: Vec<&str> = s
            .requirement_rules()
            .iter()
            .map(|r| r.package.as_str())
            .collect();
        assert_eq!(names, vec!["videoai", "openh264", "libvpx"]);
    }

    #[test]
    fn test_store_rejects_malformed_constraint() {
        let recipe = parse_recipe(
            r#"
[recipe]
name = "ffmpeg"

[[requires]]
package = "videoai"
version = "[invalid"
"#,
        )
        .unwrap();
        assert!(matches!(
            RuleStore::from_recipe(&recipe),
            Err(crate::Error::ConfigInvalid(_))
        ));
    }

    #[test]
    fn test_duplicate_packages_surfaced_not_merged() {
        let s = store(
            r#"
[recipe]
name = "ffmpeg"

[[requires]]
package = "videoai"
version = "0.3.0"

[[requires]]
package = "videoai"
version = "0.5.4"
"#,
        );
        assert_eq!(s.requirement_rules().len(), 2);
        assert_eq!(s.duplicate_packages(), vec!["videoai"]);
    }

    #[test]
    fn test_snapshot_metadata() {
        let s = store(
            r#"
[recipe]
name = "ffmpeg"
revision = "2022.04"
"#,
        );
        assert_eq!(s.name(), "ffmpeg");
        assert_eq!(s.revision(), Some("2022.04"));
    }

    #[test]
    fn test_universal_rule_applies_everywhere() {
        let rule = RequirementRule {
            package: "videoai".to_string(),
            constraint: Constraint::parse("0.5.4").unwrap(),
            applies_to: vec![],
        };
        assert!(rule.applies_on(Platform::Windows));
        assert!(rule.applies_on(Platform::Macos));
        assert!(rule.applies_on(Platform::Linux));
        assert!(rule.applies_on(Platform::Other));
    }
}
