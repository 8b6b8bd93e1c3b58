pub mod config;
pub mod logging;

pub mod dom;
pub mod fixture;
pub mod form_sync;
pub mod slug;
pub mod stepper;
pub mod ui;
