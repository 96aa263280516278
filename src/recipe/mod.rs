// src/recipe/mod.rs

//! Recipe files: declarative requirement and import rules
//!
//! A recipe is a TOML file naming a project and declaring two rule tables:
//!
//! ```toml
//! [recipe]
//! name = "ffmpeg"
//! revision = "2022.04"
//!
//! [[requires]]
//! package = "videoai"
//! version = "0.5.4"
//!
//! [[requires]]
//! package = "openh264"
//! version = "2.2.0"
//! platforms = ["macos"]
//!
//! [[imports]]
//! pattern = "*"
//! dest = "lib3rdparty"
//! folder = true
//! platforms = ["windows"]
//! ```
//!
//! An omitted or empty `platforms` list means the rule applies everywhere.
//! Declaration order is significant and is preserved through resolution.

mod format;
pub mod parser;

pub use format::{ImportDecl, RecipeFile, RecipeSection, RequireDecl};
pub use parser::{parse_recipe, parse_recipe_file, validate_recipe};
