//! UI binding abstraction: components react to input and click events on a
//! [`Page`], which owns the element tree.
//!
//! Dispatch is single-threaded and run-to-completion: each handler gets
//! exclusive access to the tree and returns before the next handler runs.

mod page;

pub use page::Page;

use crate::dom::{Dom, ElementId};

/// Whether the element's default action (link navigation, form submit)
/// should still happen after a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultAction {
    #[default]
    Allow,
    Prevent,
}

impl DefaultAction {
    pub fn is_prevented(self) -> bool {
        self == DefaultAction::Prevent
    }
}

/// Behavior mounted on a [`Page`].
///
/// Every mounted component sees every event; it decides from `target`
/// whether the event concerns it.
pub trait Component {
    /// A key was released in `target` (its value may have changed).
    fn on_input(&mut self, _dom: &mut Dom, _target: ElementId) {}

    /// `target` was clicked.
    fn on_click(&mut self, _dom: &mut Dom, _target: ElementId) -> DefaultAction {
        DefaultAction::Allow
    }
}
