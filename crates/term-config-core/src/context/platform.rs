//! Platform detection

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Operating system platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux
    Linux,
    /// macOS (Darwin)
    Mac,
    /// Windows
    Windows,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::Mac,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            os => {
                // Default to Linux for unknown Unix-like systems
                warn!("Unknown OS '{os}', defaulting to Linux");
                Platform::Linux
            }
        }
    }

    /// Key under `terminal.integrated.shell` holding this platform's shell.
    pub fn shell_key(self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Mac => "osx",
            Platform::Windows => "windows",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_detection() {
        let platform = Platform::detect();

        // Should match the current OS
        #[cfg(target_os = "macos")]
        assert_eq!(platform, Platform::Mac);

        #[cfg(target_os = "linux")]
        assert_eq!(platform, Platform::Linux);

        #[cfg(target_os = "windows")]
        assert_eq!(platform, Platform::Windows);
    }

    #[test]
    fn test_shell_keys() {
        assert_eq!(Platform::Linux.shell_key(), "linux");
        assert_eq!(Platform::Mac.shell_key(), "osx");
        assert_eq!(Platform::Windows.shell_key(), "windows");
    }

    #[test]
    fn test_platform_serde_lowercase() {
        let json = serde_json::to_string(&Platform::Mac).unwrap();
        assert_eq!(json, "\"mac\"");
        let parsed: Platform = serde_json::from_str("\"windows\"").unwrap();
        assert_eq!(parsed, Platform::Windows);
    }
}
