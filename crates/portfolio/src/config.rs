//! Profile file and environment overrides.

use std::path::{Path, PathBuf};
use std::time::Duration;

use contact_terminal::{ContactProfile, PacingConfig};
use folio_tui::config::{env_flag, env_string_opt};
use serde::Deserialize;

use crate::error::ConfigError;

pub const PROFILE_PATH_ENV: &str = "PORTFOLIO_PROFILE_PATH";
pub const TYPING_SOUND_ENV: &str = "PORTFOLIO_TYPING_SOUND";
pub const DOWNLOAD_DIR_ENV: &str = "PORTFOLIO_DOWNLOAD_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    /// Base per-grapheme delay of the contact terminal.
    pub base_delay_ms: u64,
    /// Ring the terminal bell for every revealed grapheme.
    pub sound: bool,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            base_delay_ms: 28,
            sound: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    pub contact: ContactProfile,
    pub typing: TypingConfig,
    pub download_dir: Option<PathBuf>,
}

impl PortfolioConfig {
    pub fn from_json(path: &Path, json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.contact.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &json)
    }

    /// Defaults, or the file named by `PORTFOLIO_PROFILE_PATH`, then env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env_string_opt(PROFILE_PATH_ENV) {
            Some(path) => {
                tracing::info!(path = %path, "loading profile");
                Self::from_file(Path::new(&path))?
            }
            None => Self::default(),
        };
        if env_flag(TYPING_SOUND_ENV) {
            config.typing.sound = true;
        }
        if let Some(dir) = env_string_opt(DOWNLOAD_DIR_ENV) {
            config.download_dir = Some(PathBuf::from(dir));
        }
        Ok(config)
    }

    pub fn pacing(&self) -> PacingConfig {
        PacingConfig {
            base_delay: Duration::from_millis(self.typing.base_delay_ms),
            ..PacingConfig::default()
        }
    }

    /// Where downloads land: the configured directory, `$HOME/Downloads`, or the working
    /// directory.
    pub fn download_dir(&self) -> PathBuf {
        if let Some(dir) = &self.download_dir {
            return dir.clone();
        }
        env_string_opt("HOME")
            .map(|home| Path::new(&home).join("Downloads"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::{PortfolioConfig, DOWNLOAD_DIR_ENV, PROFILE_PATH_ENV, TYPING_SOUND_ENV};
    use crate::error::ConfigError;
    use pretty_assertions::assert_eq;
    use std::env;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::sync::{Mutex, OnceLock};
    use std::time::Duration;

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
    fn partial_files_keep_defaults() {
        let json = r#"{ "contact": { "phone": "+1 555 0100" }, "typing": { "sound": true } }"#;
        let config = PortfolioConfig::from_json(Path::new("profile.json"), json).expect("parse");
        assert_eq!(config.contact.phone.as_deref(), Some("+1 555 0100"));
        assert_eq!(config.contact.email, "pradeeptraje@gmail.com");
        assert!(config.typing.sound);
        assert_eq!(config.pacing().base_delay, Duration::from_millis(28));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PortfolioConfig::from_json(Path::new("profile.json"), r#"{ "theme": "dark" }"#)
            .expect_err("unknown field");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("profile.json"));
    }

    #[test]
    fn invalid_profiles_fail_validation() {
        let json = r#"{ "contact": { "email": "not-an-address" } }"#;
        let err = PortfolioConfig::from_json(Path::new("profile.json"), json).expect_err("invalid");
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = PortfolioConfig::from_file(Path::new("/nonexistent/profile.json"))
            .expect_err("missing");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/profile.json"));
    }

    #[test]
    fn load_reads_the_profile_file_and_env_overrides() {
        let _lock = env_lock();
        let mut file = tempfile::NamedTempFile::new().expect("temp profile");
        write!(file, r#"{{ "typing": {{ "base_delay_ms": 5 }} }}"#).expect("write profile");
        let path = file.path().to_string_lossy().into_owned();

        let _g1 = set_env_guard(PROFILE_PATH_ENV, Some(&path));
        let _g2 = set_env_guard(TYPING_SOUND_ENV, Some("1"));
        let _g3 = set_env_guard(DOWNLOAD_DIR_ENV, Some("/tmp/portfolio-downloads"));

        let config = PortfolioConfig::load().expect("load");
        assert_eq!(config.pacing().base_delay, Duration::from_millis(5));
        assert!(config.typing.sound);
        assert_eq!(config.download_dir(), PathBuf::from("/tmp/portfolio-downloads"));
    }

    #[test]
    fn load_without_env_uses_defaults() {
        let _lock = env_lock();
        let _g1 = set_env_guard(PROFILE_PATH_ENV, None);
        let _g2 = set_env_guard(TYPING_SOUND_ENV, None);
        let _g3 = set_env_guard(DOWNLOAD_DIR_ENV, None);

        assert_eq!(PortfolioConfig::load().expect("load"), PortfolioConfig::default());
    }
}
