//! Page fixtures: a TOML description of a form (elements, bindings) plus an
//! event script that can be replayed against it.
//!
//! ```toml
//! [[element]]
//! id = "name"
//! tag = "input"
//!
//! [[element]]
//! id = "slug"
//! tag = "input"
//!
//! [[slug_sync]]
//! source = "#name"
//! destination = "#slug"
//!
//! [[step]]
//! type = "input"
//! target = "#name"
//! value = "My Title"
//! ```

mod error;
mod replay;

pub use error::FixtureError;
pub use replay::{build_page, replay, ElementState, ReplayReport, StepOutcome};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementSpec {
    pub tag: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub value: String,
    /// Id of an element declared earlier in the fixture.
    #[serde(default)]
    pub parent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlugSyncSpec {
    pub source: String,
    pub destination: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepperSpec {
    pub controls: String,
}

/// One scripted event. A target selector applies to every element it matches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step {
    /// Replace the value, then release a key.
    Input { target: String, value: String },
    /// Release a key without changing the value.
    KeyUp { target: String },
    Click { target: String },
}

impl Step {
    pub fn target(&self) -> &str {
        match self {
            Step::Input { target, .. } | Step::KeyUp { target } | Step::Click { target } => target,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fixture {
    #[serde(default, rename = "element")]
    pub elements: Vec<ElementSpec>,
    #[serde(default)]
    pub slug_sync: Vec<SlugSyncSpec>,
    #[serde(default)]
    pub stepper: Vec<StepperSpec>,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Fixture {
    pub fn from_toml_str(data: &str) -> Result<Self, FixtureError> {
        Ok(toml::from_str(data)?)
    }
}

/// Read and parse a fixture file.
pub fn load_fixture(path: &Path) -> Result<Fixture, FixtureError> {
    let data = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Fixture::from_toml_str(&data)
}
