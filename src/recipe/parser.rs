// src/recipe/parser.rs

//! Recipe file parsing and validation

use crate::error::{Error, Result};
use crate::recipe::format::RecipeFile;
use crate::version::Constraint;
use std::collections::HashSet;
use std::path::Path;

/// Parse a recipe from a TOML string
pub fn parse_recipe(content: &str) -> Result<RecipeFile> {
    toml::from_str(content).map_err(|e| Error::ConfigInvalid(format!("invalid recipe: {}", e)))
}

/// Parse a recipe from a file
pub fn parse_recipe_file(path: &Path) -> Result<RecipeFile> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::ConfigInvalid(format!("failed to read recipe file {}: {}", path.display(), e))
    })?;

    parse_recipe(&content)
}

/// Validate a recipe for completeness and correctness
///
/// Returns non-fatal warnings (duplicate package declarations, empty rule
/// tables). Malformed names and version constraints are fatal.
pub fn validate_recipe(recipe: &RecipeFile) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    if recipe.recipe.name.is_empty() {
        return Err(Error::ConfigInvalid("recipe name cannot be empty".to_string()));
    }

    for decl in &recipe.requires {
        if decl.package.is_empty() {
            return Err(Error::ConfigInvalid("requirement package name cannot be empty".to_string()));
        }
        Constraint::parse(&decl.version).map_err(|e| {
            Error::ConfigInvalid(format!("requirement '{}': {}", decl.package, e))
        })?;
    }

    for decl in &recipe.imports {
        if decl.pattern.is_empty() {
            return Err(Error::ConfigInvalid("import pattern cannot be empty".to_string()));
        }
        if decl.dest.is_empty() {
            return Err(Error::ConfigInvalid(format!(
                "import '{}' has an empty destination",
                decl.pattern
            )));
        }
    }

    // Duplicate declarations are retained (later revisions may override
    // earlier ones on purpose), but surfaced for manual review
    let mut seen = HashSet::new();
    for decl in &recipe.requires {
        if !seen.insert(decl.package.as_str()) {
            warnings.push(format!(
                "package '{}' is declared more than once",
                decl.package
            ));
        }
    }

    if recipe.requires.is_empty() && recipe.imports.is_empty() {
        warnings.push("recipe declares no rules".to_string());
    }

    Ok(warnings)
}
