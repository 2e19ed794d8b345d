//! Map display region
//!
//! Holds exactly one thing at a time: nothing yet, a map, or a short
//! user-facing message that replaced the map after a failure.

use crate::map::Map;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MapRegion {
    #[default]
    Empty,
    Map { map: Map },
    Message { text: String },
}

impl MapRegion {
    /// Drop whatever was shown and install `map`
    pub fn reset_with(&mut self, map: Map) {
        *self = Self::Map { map };
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        *self = Self::Message { text: text.into() };
    }

    pub fn map(&self) -> Option<&Map> {
        match self {
            Self::Map { map } => Some(map),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Message { text } => Some(text),
            _ => None,
        }
    }
}
