use serde::Deserialize;
use url::Url;

use crate::error::ProfileError;

/// Contact details and terminal branding.
///
/// Every field has a default, so a profile file only needs the fields it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactProfile {
    pub name: String,
    pub title: String,
    pub email: String,
    /// `contact --phone` is only registered when this is set.
    pub phone: Option<String>,
    pub linkedin_url: String,
    pub github_url: String,
    pub resume: ResumeAsset,
    pub banner_title: String,
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResumeAsset {
    /// Source file copied on `download --resume`. Missing files are simulated.
    pub path: String,
    pub file_name: String,
}

impl Default for ResumeAsset {
    fn default() -> Self {
        Self {
            path: "assets/Pradeep_Traje_Resume.pdf".to_string(),
            file_name: "Resume.pdf".to_string(),
        }
    }
}

impl Default for ContactProfile {
    fn default() -> Self {
        Self {
            name: "Pradeep Traje".to_string(),
            title: "Senior DevOps Engineer".to_string(),
            email: "pradeeptraje@gmail.com".to_string(),
            phone: None,
            linkedin_url: "https://www.linkedin.com/in/pradeeptraje/".to_string(),
            github_url: "https://github.com/saineox".to_string(),
            resume: ResumeAsset::default(),
            banner_title: "Pradeep Traje DevOps Terminal v2.1.0".to_string(),
            prompt: "pradeep@contact:~$".to_string(),
        }
    }
}

impl ContactProfile {
    pub fn validate(&self) -> Result<(), ProfileError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("banner_title", &self.banner_title),
            ("prompt", &self.prompt),
            ("resume.file_name", &self.resume.file_name),
        ] {
            if value.trim().is_empty() {
                return Err(ProfileError::EmptyField { field });
            }
        }

        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid_email || email.contains(char::is_whitespace) {
            return Err(ProfileError::InvalidEmail {
                value: self.email.clone(),
            });
        }

        for (field, value) in [
            ("linkedin_url", &self.linkedin_url),
            ("github_url", &self.github_url),
        ] {
            check_web_url(field, value)?;
        }

        if let Some(phone) = self.phone.as_deref() {
            if phone.trim().is_empty() {
                return Err(ProfileError::EmptyField { field: "phone" });
            }
        }

        Ok(())
    }

    /// The lines a fresh or cleared terminal starts with (the prompt line excluded).
    pub fn banner(&self) -> [String; 2] {
        [
            format!("Welcome to {}", self.banner_title),
            "Type \"help\" for available commands".to_string(),
        ]
    }
}

/// Accepts only absolute `http`/`https` URLs that name a host.
fn check_web_url(field: &'static str, value: &str) -> Result<(), ProfileError> {
    let invalid = |source| ProfileError::InvalidUrl {
        field,
        value: value.to_string(),
        source,
    };
    let url = Url::parse(value).map_err(|err| invalid(Some(err)))?;
    let web_scheme = matches!(url.scheme(), "http" | "https");
    if !web_scheme || url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(None));
    }
    Ok(())
}
