use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    #[error("profile email '{value}' is not an email address")]
    InvalidEmail { value: String },

    #[error("profile field '{field}' must be an http(s) URL with a host, got '{value}'")]
    InvalidUrl {
        field: &'static str,
        value: String,
        #[source]
        source: Option<url::ParseError>,
    },
}
