//! Catalog entry identifier

use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque, stable key for one catalog entry (MAL numeric id on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimeId(u32);

impl AnimeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for AnimeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AnimeId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: u32 = s
            .parse()
            .map_err(|_| AppError::ValidationError(format!("Invalid anime id: {}", s)))?;
        Ok(Self(id))
    }
}

impl From<u32> for AnimeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
