//! Error types and error handling for the tree builder.
//!
//! Every error carries the source line it was raised on. All of them are
//! fatal: the first violation aborts the build and is handed back to the
//! caller, which renders it with [`crate::display_error`].

pub mod errors;
