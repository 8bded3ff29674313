//! Terminal portfolio: a scrolling one-page site with an interactive contact terminal.

pub mod anchors;
pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod page;
pub mod sections;
pub mod services;

pub use app::PortfolioApp;
pub use config::PortfolioConfig;
pub use error::{ConfigError, ServiceError};
pub use services::{DownloadOutcome, HostServices, ProcessServices};
