// src/lib.rs

//! Buildplan
//!
//! Evaluator for declarative build recipes: platform-conditional package
//! requirements and post-install file-import rules, resolved into a
//! platform-specific plan.
//!
//! # Architecture
//!
//! - Recipes are TOML files parsed once into an immutable [`RuleStore`]
//! - Each recipe file is its own store snapshot; snapshots are never merged
//! - [`resolver::resolve`] is a pure function of the store and a platform tag
//! - The plan is an ordered filter of the declared rules: no deduplication,
//!   no conflict resolution, declaration order preserved

mod error;
pub mod platform;
pub mod recipe;
pub mod resolver;
pub mod rules;
pub mod version;

pub use error::{Error, Result};
pub use platform::Platform;
pub use recipe::{RecipeFile, parse_recipe, parse_recipe_file, validate_recipe};
pub use resolver::{ResolvedPlan, resolve, resolve_tag};
pub use rules::{ImportRule, RequirementRule, RuleStore};
pub use version::{Constraint, RecipeVersion};
