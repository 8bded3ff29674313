//! The root view: the scrolling page, its sections and the keyboard map.

use std::time::Instant;

use contact_terminal::{PlaybackEvent, SideEffect};
use folio_tui::{Component, InputEvent, Key, RootView, TerminalCmd};

use crate::anchors::SectionId;
use crate::config::PortfolioConfig;
use crate::page::Page;
use crate::sections::{
    ArsenalSection, CareerSection, ContactSection, Footer, HeroSection, NavigationBar,
    PhilosophySection, ProjectsSection, Section, TestimonialsSection,
};
use crate::services::HostServices;

/// Every section of the page, in document order.
pub struct Sections {
    pub hero: HeroSection,
    pub philosophy: PhilosophySection,
    pub arsenal: ArsenalSection,
    pub projects: ProjectsSection,
    pub testimonials: TestimonialsSection,
    pub career: CareerSection,
    pub contact: ContactSection,
    pub footer: Footer,
}

impl Sections {
    pub fn new(config: &PortfolioConfig, now: Instant) -> Self {
        let profile = &config.contact;
        Self {
            hero: HeroSection::new(profile, now),
            philosophy: PhilosophySection::new(),
            arsenal: ArsenalSection::new(),
            projects: ProjectsSection::new(profile.github_url.clone()),
            testimonials: TestimonialsSection::new(),
            career: CareerSection::new(),
            contact: ContactSection::new(profile, config.pacing()),
            footer: Footer::new(),
        }
    }

    pub fn all(&self) -> [&dyn Section; 8] {
        [
            &self.hero,
            &self.philosophy,
            &self.arsenal,
            &self.projects,
            &self.testimonials,
            &self.career,
            &self.contact,
            &self.footer,
        ]
    }

    pub fn all_mut(&mut self) -> [&mut dyn Section; 8] {
        [
            &mut self.hero,
            &mut self.philosophy,
            &mut self.arsenal,
            &mut self.projects,
            &mut self.testimonials,
            &mut self.career,
            &mut self.contact,
            &mut self.footer,
        ]
    }
}

pub struct PortfolioApp<S: HostServices> {
    navigation: NavigationBar,
    sections: Sections,
    page: Page,
    services: S,
    typing_sound: bool,
    cmds: Vec<TerminalCmd>,
    exit: bool,
    now: Instant,
}

impl<S: HostServices> PortfolioApp<S> {
    pub fn new(config: &PortfolioConfig, services: S, now: Instant) -> Self {
        Self::with_sections(config, Sections::new(config, now), services, now)
    }

    pub fn with_sections(
        config: &PortfolioConfig,
        sections: Sections,
        services: S,
        now: Instant,
    ) -> Self {
        Self {
            navigation: NavigationBar::new(&config.contact.name),
            sections,
            page: Page::new(),
            services,
            typing_sound: config.typing.sound,
            cmds: Vec::new(),
            exit: false,
            now,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn sections(&self) -> &Sections {
        &self.sections
    }

    pub fn contact(&self) -> &ContactSection {
        &self.sections.contact
    }

    pub fn services(&self) -> &S {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut S {
        &mut self.services
    }

    /// Brings the contact terminal on screen when the user types while it is scrolled away.
    fn reveal_contact(&mut self, now: Instant) {
        if !self.page.is_animating() && !self.page.is_section_visible(SectionId::Contact) {
            self.page.scroll_to_section(SectionId::Contact, now);
        }
    }

    fn handle_key(&mut self, key: Key, now: Instant) {
        match key {
            Key::Escape | Key::Ctrl('c') => {
                tracing::info!("exit requested");
                self.exit = true;
            }
            Key::Up => self.page.scroll_by(-1),
            Key::Down => self.page.scroll_by(1),
            Key::PageUp => self.page.scroll_by(-(self.page.page_rows() as isize)),
            Key::PageDown => self.page.scroll_by(self.page.page_rows() as isize),
            Key::Home => self.page.scroll_home(),
            Key::End => self.page.scroll_end(),
            Key::Ctrl('n') => {
                self.page.next_section(now);
            }
            Key::Ctrl('p') => {
                self.page.previous_section(now);
            }
            Key::Ctrl('l') => self.sections.contact.clear(),
            Key::Function(n @ 1..=4) => {
                self.sections.contact.fill(usize::from(n - 1));
                self.reveal_contact(now);
            }
            Key::Ctrl('a') => self.sections.contact.input_mut().move_home(),
            Key::Ctrl('e') => self.sections.contact.input_mut().move_end(),
            Key::Left => self.sections.contact.input_mut().move_left(),
            Key::Right => self.sections.contact.input_mut().move_right(),
            Key::Backspace => self.sections.contact.input_mut().backspace(),
            Key::Delete => self.sections.contact.input_mut().delete(),
            Key::Enter => {
                self.sections.contact.submit(now);
                self.reveal_contact(now);
            }
            _ => {}
        }
    }

    fn handle_playback(&mut self, event: PlaybackEvent, now: Instant) {
        match event {
            PlaybackEvent::Keystroke => {
                if self.typing_sound {
                    self.cmds.push(TerminalCmd::Bell);
                }
            }
            PlaybackEvent::LineCompleted(_) | PlaybackEvent::Ready => {}
            PlaybackEvent::Action(effect) => self.run_action(effect, now),
        }
    }

    fn run_action(&mut self, effect: SideEffect, now: Instant) {
        match effect {
            SideEffect::CopyToClipboard { value } => self.services.copy_to_clipboard(&value),
            SideEffect::OpenUrl { url } => {
                if let Err(error) = self.services.open_url(&url) {
                    tracing::warn!(%error, "failed to open url");
                }
            }
            SideEffect::Download { asset, file_name } => {
                match self.services.download(&asset, &file_name) {
                    Ok(outcome) => tracing::info!(?outcome, "download finished"),
                    Err(error) => tracing::warn!(%error, "download failed"),
                }
            }
            SideEffect::ScrollTo { anchor } => {
                self.page.scroll_to_anchor(&anchor, now);
            }
        }
    }
}

impl<S: HostServices> RootView for PortfolioApp<S> {
    fn handle_event(&mut self, event: &InputEvent, now: Instant) {
        self.now = now;
        match event {
            InputEvent::Key(key) => self.handle_key(*key, now),
            InputEvent::Text(text) => {
                self.sections.contact.input_mut().insert_str(text);
                self.reveal_contact(now);
            }
            InputEvent::Paste(text) => {
                self.sections.contact.input_mut().paste(text);
                self.reveal_contact(now);
            }
            InputEvent::Resize { columns, rows } => {
                tracing::debug!(columns, rows, "resized");
            }
            InputEvent::UnknownRaw(_) => {}
        }
    }

    fn tick(&mut self, now: Instant) {
        self.now = now;
        for event in self.sections.contact.advance(now) {
            self.handle_playback(event, now);
        }
        for section in self.sections.all_mut() {
            section.tick(now);
        }
        self.page.tick(now);
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.sections
            .all()
            .into_iter()
            .filter_map(|section| section.next_deadline())
            .chain(self.page.next_deadline())
            .min()
    }

    fn render_screen(&mut self, width: usize, height: usize) -> Vec<String> {
        self.page.set_viewport_height(height);
        let mut sections = self.sections.all_mut();
        let document = self.page.layout(&mut sections, width);
        for idx in self.page.visible_blocks() {
            sections[idx].on_visible(self.now);
        }

        self.navigation.set_current(self.page.current_section());
        let navigation = self.navigation.render(width);
        self.page.compose(navigation, &document)
    }

    fn take_terminal_cmds(&mut self) -> Vec<TerminalCmd> {
        let mut cmds = std::mem::take(&mut self.cmds);
        cmds.extend(self.services.take_terminal_cmds());
        cmds
    }

    fn should_exit(&self) -> bool {
        self.exit
    }
}
