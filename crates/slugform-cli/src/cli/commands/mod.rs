//! CLI command handlers, one file per command.

mod check;
mod completions;
mod replay;
mod slug;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use replay::run_replay;
pub use slug::{run_slug, SlugArgs};
