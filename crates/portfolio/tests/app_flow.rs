use std::time::{Duration, Instant};

use contact_terminal::{LineKind, NAVIGATE_TARGETS};
use folio_tui::{visible_width, InputEvent, Key, RootView, TerminalCmd};
use portfolio::anchors::SectionId;
use portfolio::{DownloadOutcome, HostServices, PortfolioApp, PortfolioConfig, ServiceError};
use pretty_assertions::assert_eq;

const WIDTH: usize = 100;
const HEIGHT: usize = 40;
const FAR: Duration = Duration::from_secs(600);

#[derive(Default)]
struct SpyServices {
    clipboard: Vec<String>,
    opened: Vec<String>,
    downloads: Vec<(String, String)>,
}

impl HostServices for SpyServices {
    fn copy_to_clipboard(&mut self, value: &str) {
        self.clipboard.push(value.to_string());
    }

    fn open_url(&mut self, url: &str) -> Result<(), ServiceError> {
        self.opened.push(url.to_string());
        Ok(())
    }

    fn download(&mut self, asset: &str, file_name: &str) -> Result<DownloadOutcome, ServiceError> {
        self.downloads
            .push((asset.to_string(), file_name.to_string()));
        Ok(DownloadOutcome::Simulated)
    }
}

fn app_with(config: &PortfolioConfig, start: Instant) -> PortfolioApp<SpyServices> {
    let mut app = PortfolioApp::new(config, SpyServices::default(), start);
    app.render_screen(WIDTH, HEIGHT);
    app
}

fn app(start: Instant) -> PortfolioApp<SpyServices> {
    app_with(&PortfolioConfig::default(), start)
}

fn type_command(app: &mut PortfolioApp<SpyServices>, command: &str, now: Instant) {
    app.handle_event(&InputEvent::Text(command.to_string()), now);
    app.handle_event(&InputEvent::Key(Key::Enter), now);
}

/// Settles any scroll animation and lays the page out again.
fn settle(app: &mut PortfolioApp<SpyServices>, now: Instant) {
    app.tick(now);
    app.render_screen(WIDTH, HEIGHT);
}

#[test]
fn every_navigate_target_is_a_registered_anchor() {
    let app = app(Instant::now());
    for (flag, anchor, _) in NAVIGATE_TARGETS {
        assert!(
            app.page().anchors().contains(anchor),
            "navigate --{flag} points at missing anchor {anchor}"
        );
    }
    assert_eq!(app.page().anchors().iter().count(), SectionId::ALL.len());
}

#[test]
fn screen_is_exactly_the_terminal_size() {
    let mut app = app(Instant::now());
    let rows = app.render_screen(WIDTH, HEIGHT);
    assert_eq!(rows.len(), HEIGHT);
    assert!(rows.iter().all(|row| visible_width(row) <= WIDTH));
}

#[test]
fn email_command_copies_after_playback() {
    let start = Instant::now();
    let mut app = app(start);
    type_command(&mut app, "contact --email", start);
    assert!(app.contact().session().is_typing());

    app.tick(start + Duration::from_millis(1));
    assert!(app.services().clipboard.is_empty());

    app.tick(start + FAR);
    assert_eq!(app.services().clipboard, vec!["pradeeptraje@gmail.com".to_string()]);
    assert!(!app.contact().session().is_typing());
}

#[test]
fn link_and_download_commands_reach_the_services() {
    let start = Instant::now();
    let mut app = app(start);
    type_command(&mut app, "contact --github", start);
    app.tick(start + FAR);
    type_command(&mut app, "download --resume", start + FAR);
    app.tick(start + FAR * 2);

    assert_eq!(app.services().opened, vec!["https://github.com/saineox".to_string()]);
    assert_eq!(
        app.services().downloads,
        vec![(
            "assets/Pradeep_Traje_Resume.pdf".to_string(),
            "Resume.pdf".to_string()
        )]
    );
}

#[test]
fn typing_scrolls_the_contact_terminal_into_view() {
    let start = Instant::now();
    let mut app = app(start);
    assert!(!app.page().is_section_visible(SectionId::Contact));

    app.handle_event(&InputEvent::Text("w".to_string()), start);
    assert!(app.page().is_animating());
    settle(&mut app, start + FAR);
    assert!(app.page().is_section_visible(SectionId::Contact));
}

#[test]
fn navigate_scrolls_only_after_its_line_completes() {
    let start = Instant::now();
    let mut app = app(start);
    app.handle_event(&InputEvent::Text("navigate --home".to_string()), start);
    settle(&mut app, start + FAR);
    let at_contact = app.page().scroll();
    assert!(at_contact > 0);

    let submitted = start + FAR;
    app.handle_event(&InputEvent::Key(Key::Enter), submitted);
    app.tick(submitted + Duration::from_millis(50));
    assert!(app.contact().session().is_typing());
    assert!(!app.page().is_animating());
    assert_eq!(app.page().scroll(), at_contact);

    app.tick(submitted + FAR);
    assert!(app.page().is_animating());
    assert_eq!(app.page().target(), 0);

    settle(&mut app, submitted + FAR * 2);
    assert_eq!(app.page().scroll(), 0);
    assert_eq!(app.page().current_section(), Some(SectionId::Hero));
}

#[test]
fn function_keys_fill_the_input_without_submitting() {
    let start = Instant::now();
    let mut app = app(start);
    app.handle_event(&InputEvent::Key(Key::Function(1)), start);
    assert_eq!(app.contact().input().value(), "contact --email");
    assert!(!app.contact().session().is_typing());

    app.handle_event(&InputEvent::Key(Key::Function(4)), start);
    assert_eq!(app.contact().input().value(), "download --resume");
}

#[test]
fn ctrl_l_clears_even_while_typing() {
    let start = Instant::now();
    let mut app = app(start);
    type_command(&mut app, "help", start);
    app.tick(start + Duration::from_millis(300));
    assert!(app.contact().session().is_typing());

    app.handle_event(&InputEvent::Key(Key::Ctrl('l')), start + Duration::from_millis(300));
    let kinds: Vec<LineKind> = app
        .contact()
        .session()
        .log()
        .iter()
        .map(|line| line.kind)
        .collect();
    assert_eq!(kinds, vec![LineKind::System, LineKind::System, LineKind::Prompt]);
    assert!(!app.contact().session().is_typing());
}

#[test]
fn escape_and_ctrl_c_exit() {
    let start = Instant::now();
    let mut app = app(start);
    assert!(!app.should_exit());
    app.handle_event(&InputEvent::Key(Key::Escape), start);
    assert!(app.should_exit());

    let mut app = self::app(start);
    app.handle_event(&InputEvent::Key(Key::Ctrl('c')), start);
    assert!(app.should_exit());
}

#[test]
fn keystroke_bell_follows_the_typing_sound_setting() {
    let start = Instant::now();
    let mut quiet = app(start);
    type_command(&mut quiet, "whoami", start);
    quiet.tick(start + FAR);
    assert!(quiet.take_terminal_cmds().is_empty());

    let mut config = PortfolioConfig::default();
    config.typing.sound = true;
    let mut loud = app_with(&config, start);
    type_command(&mut loud, "whoami", start);
    loud.tick(start + FAR);
    let cmds = loud.take_terminal_cmds();
    assert!(!cmds.is_empty());
    assert!(cmds.iter().all(|cmd| *cmd == TerminalCmd::Bell));
}

#[test]
fn section_keys_step_through_the_page() {
    let start = Instant::now();
    let mut app = app(start);
    app.handle_event(&InputEvent::Key(Key::Ctrl('n')), start);
    settle(&mut app, start + FAR);
    assert_eq!(app.page().current_section(), Some(SectionId::Philosophy));

    app.handle_event(&InputEvent::Key(Key::Ctrl('p')), start + FAR);
    settle(&mut app, start + FAR * 2);
    assert_eq!(app.page().current_section(), Some(SectionId::Hero));

    app.handle_event(&InputEvent::Key(Key::End), start + FAR * 2);
    assert_eq!(app.page().scroll(), app.page().max_scroll());
    app.handle_event(&InputEvent::Key(Key::Home), start + FAR * 2);
    assert_eq!(app.page().scroll(), 0);
}
