//! Runtime environment context
//!
//! The resolver takes its platform at construction time; detection lives here
//! so hosts do not have to map OS names themselves.

mod platform;

pub use platform::Platform;
