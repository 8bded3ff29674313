//! Environment configuration for the runtime.

use std::env;

pub const WRITE_LOG_ENV: &str = "FOLIO_WRITE_LOG";
pub const LOG_FILE_ENV: &str = "FOLIO_LOG_FILE";
pub const DEBUG_ENV: &str = "FOLIO_DEBUG";
pub const NO_ALT_SCREEN_ENV: &str = "FOLIO_NO_ALT_SCREEN";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Mirror every raw terminal write to this file.
    pub write_log: Option<String>,
    /// Destination of `tracing` output.
    pub log_file: Option<String>,
    /// Lower the default log filter to `debug`.
    pub debug: bool,
    /// Draw on the main screen instead of the alternate screen buffer.
    pub no_alt_screen: bool,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            write_log: env_string_opt(WRITE_LOG_ENV),
            log_file: env_string_opt(LOG_FILE_ENV),
            debug: env_flag(DEBUG_ENV),
            no_alt_screen: env_flag(NO_ALT_SCREEN_ENV),
        }
    }
}

pub fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

pub fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{EnvConfig, DEBUG_ENV, LOG_FILE_ENV, NO_ALT_SCREEN_ENV, WRITE_LOG_ENV};
    use std::env;
    use std::sync::{Mutex, OnceLock};

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                env::set_var(self.key, value);
            } else {
                env::remove_var(self.key);
            }
        }
    }

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .expect("env lock poisoned")
    }

    fn set_env_guard(key: &'static str, value: Option<&str>) -> EnvGuard {
        let previous = env::var(key).ok();
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
        EnvGuard { key, previous }
    }

    #[test]
    fn env_defaults_are_off() {
        let _lock = env_lock();
        let _g1 = set_env_guard(WRITE_LOG_ENV, None);
        let _g2 = set_env_guard(LOG_FILE_ENV, None);
        let _g3 = set_env_guard(DEBUG_ENV, None);
        let _g4 = set_env_guard(NO_ALT_SCREEN_ENV, None);

        assert_eq!(EnvConfig::from_env(), EnvConfig::default());
    }

    #[test]
    fn env_flags_set_to_one_enable() {
        let _lock = env_lock();
        let _g1 = set_env_guard(WRITE_LOG_ENV, Some("/tmp/folio-writes.log"));
        let _g2 = set_env_guard(LOG_FILE_ENV, Some("/tmp/folio.log"));
        let _g3 = set_env_guard(DEBUG_ENV, Some("1"));
        let _g4 = set_env_guard(NO_ALT_SCREEN_ENV, Some("1"));

        let config = EnvConfig::from_env();
        assert_eq!(config.write_log.as_deref(), Some("/tmp/folio-writes.log"));
        assert_eq!(config.log_file.as_deref(), Some("/tmp/folio.log"));
        assert!(config.debug);
        assert!(config.no_alt_screen);
    }

    #[test]
    fn blank_paths_and_other_flag_values_are_ignored() {
        let _lock = env_lock();
        let _g1 = set_env_guard(LOG_FILE_ENV, Some("   "));
        let _g2 = set_env_guard(DEBUG_ENV, Some("true"));

        let config = EnvConfig::from_env();
        assert!(config.log_file.is_none());
        assert!(!config.debug);
    }
}
