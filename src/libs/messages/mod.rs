//! User-facing text and the macros that print it.
//!
//! Every string shown to the user is a [`Message`] variant; its `Display`
//! implementation lives in [`display`] and the routing macros in [`macros`].

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
