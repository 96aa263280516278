// src/recipe/format.rs

//! Recipe file format definitions
//!
//! Recipes are TOML files declaring platform-conditional requirement and
//! import rules. The declarations here are the raw serde shapes; constraint
//! validation happens when the file is turned into a
//! [`crate::rules::RuleStore`].

use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// A complete parsed recipe file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeFile {
    /// Recipe metadata
    pub recipe: RecipeSection,

    /// Requirement declarations, in file order
    #[serde(default)]
    pub requires: Vec<RequireDecl>,

    /// Import declarations, in file order
    #[serde(default)]
    pub imports: Vec<ImportDecl>,
}

/// Recipe metadata section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSection {
    /// Recipe name
    pub name: String,

    /// Optional snapshot label, distinguishing revisions of the same recipe
    #[serde(default)]
    pub revision: Option<String>,
}

/// A declared package requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequireDecl {
    /// Package name
    pub package: String,

    /// Version constraint string (exact version or `~`-prefixed range)
    pub version: String,

    /// Platforms this requirement applies to; empty means all
    #[serde(default)]
    pub platforms: Vec<Platform>,
}

/// A declared post-install file import
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportDecl {
    /// Glob pattern selecting files to copy
    pub pattern: String,

    /// Destination directory, relative to the build root
    pub dest: String,

    /// Preserve the source folder structure under the destination
    #[serde(default)]
    pub folder: bool,

    /// Platforms this import applies to; empty means all
    #[serde(default)]
    pub platforms: Vec<Platform>,
}
