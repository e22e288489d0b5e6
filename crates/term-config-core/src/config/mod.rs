//! Configuration inputs
//!
//! The resolver reads two layers out of a single settings tree:
//! 1. `terminal.integrated.*` (terminal-specific)
//! 2. `editor.*` (generic editor settings)
//!
//! Both arrive through injected accessors; nothing here touches the
//! filesystem.

mod accessor;
mod snapshot;

pub use accessor::{ConfigurationAccessor, ThemeAccessor};
pub use snapshot::{ConfigError, ConfigurationSnapshot};
