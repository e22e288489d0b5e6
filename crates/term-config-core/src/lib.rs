//! Configuration resolution for an embedded terminal panel
//!
//! This crate derives the effective runtime settings of a terminal panel
//! from layered configuration and live environment state:
//! - Font description (`terminal.integrated.*` over `editor.*`, per field)
//! - Shell executable for the current platform
//! - ANSI color table for the active UI theme
//!
//! The resolver only reads injected snapshots. Loading, persisting and
//! watching settings belong to the host application.

pub mod config;
pub mod context;
pub mod logging;
pub mod resolver;
pub mod theme;

pub use config::{ConfigError, ConfigurationAccessor, ConfigurationSnapshot, ThemeAccessor};
pub use context::Platform;
pub use resolver::{FontDescriptor, ResolvedTerminalSettings, TerminalConfigResolver};
pub use theme::{ThemeCategory, ThemeColorTable};
