//! Prototype: deep copy by round-tripping through serde.

use crate::config::PatternsConfig;
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Deep copy of anything serde can round-trip, with no per-type code.
pub trait SerdeCopy: Serialize + DeserializeOwned {
    fn deep_copy_binary(&self) -> Result<Self> {
        let bytes = bincode::serialize(self)?;
        Ok(bincode::deserialize(&bytes)?)
    }

    fn deep_copy_json(&self) -> Result<Self> {
        let text = serde_json::to_string(self)?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl<T: Serialize + DeserializeOwned> SerdeCopy for T {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub weight: u32,
    pub tags: Vec<String>,
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Weight: {}", self.name, self.weight)
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let elephant = Animal {
        name: "Topcho".to_string(),
        weight: 25,
        tags: vec!["grey".to_string()],
    };

    let binary_copy = elephant.deep_copy_binary()?;
    let mut json_copy = elephant.deep_copy_json()?;
    json_copy.name = "Topcho2".to_string();

    writeln!(out, "{elephant}")?;
    writeln!(out, "{binary_copy}")?;
    writeln!(out, "{json_copy}")?;
    Ok(())
}
