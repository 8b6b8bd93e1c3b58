//! Slug derivation and validation.
//!
//! Two slugifiers live here:
//! - [`slugify`]: the form-side pipeline run on every keystroke, ASCII word
//!   characters and hyphens only.
//! - [`slugify_ascii`]: transliterating variant used when a record is created
//!   without an explicit slug; words are joined with a caller-chosen delimiter.
//!
//! [`Slug`] is the validated value type for anything that must already be a
//! slug (e.g. a user-typed slug field).

mod ascii;
mod browser;
mod value;

pub use ascii::slugify_ascii;
pub use browser::slugify;
pub use value::{is_valid_slug, Slug, SlugError};
