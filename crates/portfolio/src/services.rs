//! Host-side effects of contact commands: clipboard, browser, downloads.

use std::fs;
use std::path::{Path, PathBuf};

use folio_tui::TerminalCmd;

use crate::error::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Copied(PathBuf),
    /// The asset is missing; nothing was written.
    Simulated,
}

pub trait HostServices {
    fn copy_to_clipboard(&mut self, value: &str);

    fn open_url(&mut self, url: &str) -> Result<(), ServiceError>;

    fn download(&mut self, asset: &str, file_name: &str) -> Result<DownloadOutcome, ServiceError>;

    /// Terminal commands queued by the services (clipboard writes) since the last call.
    fn take_terminal_cmds(&mut self) -> Vec<TerminalCmd> {
        Vec::new()
    }
}

/// Services backed by the real terminal, system opener and file system.
#[derive(Debug)]
pub struct ProcessServices {
    download_dir: PathBuf,
    cmds: Vec<TerminalCmd>,
}

impl ProcessServices {
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
            cmds: Vec::new(),
        }
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }
}

impl HostServices for ProcessServices {
    fn copy_to_clipboard(&mut self, value: &str) {
        self.cmds.push(TerminalCmd::SetClipboard(value.to_string()));
    }

    fn open_url(&mut self, url: &str) -> Result<(), ServiceError> {
        open::that_detached(url).map_err(|source| ServiceError::Open {
            url: url.to_string(),
            source,
        })
    }

    fn download(&mut self, asset: &str, file_name: &str) -> Result<DownloadOutcome, ServiceError> {
        let source = Path::new(asset);
        if !source.is_file() {
            tracing::warn!(asset, "resume asset not found; simulating download");
            return Ok(DownloadOutcome::Simulated);
        }
        fs::create_dir_all(&self.download_dir).map_err(|err| {
            ServiceError::io("creating download directory", &self.download_dir, err)
        })?;
        let target = self.download_dir.join(file_name);
        fs::copy(source, &target)
            .map_err(|err| ServiceError::io("copying download", &target, err))?;
        tracing::info!(target = %target.display(), "download written");
        Ok(DownloadOutcome::Copied(target))
    }

    fn take_terminal_cmds(&mut self) -> Vec<TerminalCmd> {
        std::mem::take(&mut self.cmds)
    }
}
