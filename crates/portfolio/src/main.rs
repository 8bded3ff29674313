use std::time::Instant;

use anyhow::Context;
use folio_tui::logging::init_file_logging;
use folio_tui::platform::{emergency_restore, install_panic_hook, install_signal_handlers};
use folio_tui::{teardown_cmds, EnvConfig, ProcessTerminal, Runtime, TerminalCmd};
use portfolio::app::PortfolioApp;
use portfolio::config::PortfolioConfig;
use portfolio::services::ProcessServices;

fn restore_terminal() {
    let sequence: String = teardown_cmds().iter().map(TerminalCmd::encode).collect();
    emergency_restore(&sequence);
}

fn main() -> anyhow::Result<()> {
    let env = EnvConfig::from_env();
    init_file_logging(&env).context("failed to initialize logging")?;

    let config = PortfolioConfig::load().context("failed to load portfolio profile")?;
    let download_dir = config.download_dir();
    tracing::info!(download_dir = %download_dir.display(), "starting portfolio");

    let _signals = install_signal_handlers(|| {
        restore_terminal();
        std::process::exit(130);
    })
    .context("failed to install signal handlers")?;
    install_panic_hook(restore_terminal);

    let title = format!("{} | {}", config.contact.name, config.contact.title);
    let mut app = PortfolioApp::new(&config, ProcessServices::new(download_dir), Instant::now());
    let mut runtime = Runtime::new(ProcessTerminal::with_config(&env), &env).with_title(title);
    runtime.run(&mut app).context("terminal session failed")?;
    Ok(())
}
