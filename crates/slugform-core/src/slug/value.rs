use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::slugify;

/// Why a string is not a slug.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlugError {
    #[error("slug is empty")]
    Empty,
    #[error("invalid character {ch:?} at byte {index}; slugs use lowercase a-z, 0-9 and '-'")]
    InvalidChar { ch: char, index: usize },
    #[error("slug must not start or end with '-'")]
    EdgeHyphen,
    #[error("slug must not contain consecutive hyphens")]
    DoubleHyphen,
}

/// A validated slug: non-empty, `[a-z0-9-]`, no edge or doubled hyphens.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    pub fn parse(value: &str) -> Result<Self, SlugError> {
        check(value)?;
        Ok(Self(value.to_string()))
    }

    /// Slugifies `text`; `None` when nothing sluggable is left.
    pub fn from_text(text: &str) -> Option<Self> {
        let derived = slugify(text);
        if derived.is_empty() {
            None
        } else {
            Some(Self(derived))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Return `true` when `value` is already a slug.
pub fn is_valid_slug(value: &str) -> bool {
    check(value).is_ok()
}

fn check(value: &str) -> Result<(), SlugError> {
    if value.is_empty() {
        return Err(SlugError::Empty);
    }
    if let Some((index, ch)) = value
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(SlugError::InvalidChar { ch, index });
    }
    if value.starts_with('-') || value.ends_with('-') {
        return Err(SlugError::EdgeHyphen);
    }
    if value.contains("--") {
        return Err(SlugError::DoubleHyphen);
    }
    Ok(())
}

impl FromStr for Slug {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Slug {
    type Error = SlugError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        check(&value)?;
        Ok(Self(value))
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
