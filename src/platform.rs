// src/platform.rs

//! Platform tag enumeration and parsing
//!
//! Rules are filtered against one of four tags. `Other` exists so that a
//! recipe can still resolve on an unanticipated host: universal rules apply
//! there, platform-scoped rules do not.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// Operating-system tag used to filter recipe rules
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Platform {
    Windows,
    Macos,
    Linux,
    Other,
}

impl Platform {
    /// Parse a platform tag string
    ///
    /// Accepted tags are `windows`, `macos`, `linux`, and `other`
    /// (case-insensitive). Anything else is `Error::UnknownPlatform`.
    pub fn parse(tag: &str) -> Result<Self> {
        Self::from_str(tag.trim()).map_err(|_| Error::UnknownPlatform(tag.to_string()))
    }

    /// Tag for the host this process is running on
    pub fn current() -> Self {
        match std::env::consts::OS {
            "windows" => Self::Windows,
            "macos" => Self::Macos,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }
}
