//! Log output for the resolver when the host has none of its own.
//!
//! The resolver only emits `tracing` events under this crate's target. Hosts
//! that already run a subscriber see them there and never need this module.
//! Hosts without one can call [`init`] or [`init_with_default`], which install
//! a fmt subscriber that shows this crate's events and nothing else.
//!
//! The verbosity comes from `TERM_CONFIG_LOG` (`off`, `error`, `warn`, `info`,
//! `debug`, `trace`, case-insensitive), falling back to the host's default.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable selecting the log level.
pub const LOG_ENV_VAR: &str = "TERM_CONFIG_LOG";

/// Target prefix shared by every event this crate emits
pub const LOG_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Level from a raw `TERM_CONFIG_LOG` value, or `default` when absent or
/// unparsable.
pub fn level_from_env_value(raw: Option<&str>, default: LevelFilter) -> LevelFilter {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Filter enabling this crate's events up to `level` and nothing else.
pub fn crate_filter(level: LevelFilter) -> Targets {
    Targets::new().with_target(LOG_TARGET, level)
}

/// Install a subscriber at `TERM_CONFIG_LOG`, or `default` if unset.
///
/// Returns `true` when this call installed the global subscriber and `false`
/// when one was already in place (ours or the host's).
pub fn init_with_default(default: LevelFilter) -> bool {
    let raw = std::env::var(LOG_ENV_VAR).ok();
    let level = level_from_env_value(raw.as_deref(), default);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(crate_filter(level))
        .try_init()
        .is_ok()
}

/// [`init_with_default`] with an `info` default.
pub fn init() -> bool {
    init_with_default(LevelFilter::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tracing::Level;

    #[test]
    fn test_level_defaults_when_unset_or_blank() {
        assert_eq!(level_from_env_value(None, LevelFilter::WARN), LevelFilter::WARN);
        assert_eq!(level_from_env_value(Some("  "), LevelFilter::INFO), LevelFilter::INFO);
    }

    #[test]
    fn test_level_parsed_case_insensitive() {
        assert_eq!(level_from_env_value(Some("DEBUG"), LevelFilter::INFO), LevelFilter::DEBUG);
        assert_eq!(level_from_env_value(Some(" trace "), LevelFilter::INFO), LevelFilter::TRACE);
        assert_eq!(level_from_env_value(Some("off"), LevelFilter::INFO), LevelFilter::OFF);
    }

    #[test]
    fn test_level_unknown_keeps_host_default() {
        assert_eq!(level_from_env_value(Some("verbose"), LevelFilter::ERROR), LevelFilter::ERROR);
    }

    #[test]
    fn test_crate_filter_scopes_to_this_crate() {
        let filter = crate_filter(LevelFilter::DEBUG);

        assert!(filter.would_enable("term_config_core::resolver", &Level::DEBUG));
        assert!(!filter.would_enable("term_config_core::resolver", &Level::TRACE));
        assert!(!filter.would_enable("hyper::client", &Level::ERROR));
    }

    #[test]
    fn test_crate_filter_off_disables_everything() {
        let filter = crate_filter(LevelFilter::OFF);
        assert!(!filter.would_enable("term_config_core::config", &Level::ERROR));
    }

    #[test]
    fn test_log_target_matches_module_paths() {
        assert!(module_path!().starts_with(LOG_TARGET));
    }

    #[test]
    #[serial]
    fn test_second_init_reports_existing_subscriber() {
        init_with_default(LevelFilter::DEBUG);
        assert!(!init(), "a subscriber is already installed");
    }
}
