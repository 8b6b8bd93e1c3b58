use std::path::PathBuf;

use crate::dom::SelectorError;

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("failed to read fixture {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Selector(#[from] SelectorError),
    #[error("element {element} names unknown parent {parent:?} (parents must be declared first)")]
    UnknownParent { element: usize, parent: String },
    #[error("duplicate element id {0:?}")]
    DuplicateId(String),
    #[error("step {step}: selector {selector:?} matches no element")]
    NoMatch { step: usize, selector: String },
}
