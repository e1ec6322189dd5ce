mod content;

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub use content::{Configuration, DEFAULT_DELAY, DEFAULT_GRACE, DEFAULT_PORT};

/// Environment variable holding the installation directory of the operating
/// system.
pub const WINDOWS_DIRECTORY_VAR: &str = "windir";

/// Build the configuration from the process environment.
pub fn load() -> Configuration {
    load_with(|key| env::var_os(key))
}

/// Build the configuration from a custom variable lookup. An unset or empty
/// installation directory is accepted here; invoking the suspend utility will
/// fail later instead.
pub fn load_with<F>(lookup: F) -> Configuration
where
    F: Fn(&str) -> Option<OsString>,
{
    let windows_directory = lookup(WINDOWS_DIRECTORY_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from);

    if windows_directory.is_none() {
        tracing::warn!(
            var = WINDOWS_DIRECTORY_VAR,
            "Installation directory is unknown, suspending will fail"
        );
    }

    Configuration {
        windows_directory,
        ..Configuration::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_with_windows_directory() {
        let config = load_with(|key| match key {
            "windir" => Some(OsString::from("C:\\Windows")),
            _ => None,
        });
        assert_eq!(
            config.windows_directory,
            Some(PathBuf::from("C:\\Windows"))
        );
        assert_eq!(config.address.port(), DEFAULT_PORT);
    }

    #[test]
    fn load_with_missing_windows_directory() {
        assert_eq!(load_with(|_| None), Configuration::default());
        assert_eq!(
            load_with(|_| Some(OsString::new())).windows_directory,
            None
        );
    }
}
