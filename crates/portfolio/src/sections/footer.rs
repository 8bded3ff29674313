use folio_tui::core::text::slice::center;
use folio_tui::core::text::style::{dim, fg, Color};
use folio_tui::Component;

use super::Section;
use crate::anchors::SectionId;
use crate::content::{FOOTER_COPYRIGHT, FOOTER_LINKS, FOOTER_PROMPT, FOOTER_STATUS};

#[derive(Default)]
pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Footer {
    fn render(&mut self, width: usize) -> Vec<String> {
        let built_with = format!(
            "Built with {} using {} and {}",
            fg("♥", Color::Red),
            fg("</>", Color::Green),
            fg("☕", Color::Orange)
        );
        vec![
            fg(&"─".repeat(width), Color::DarkGray),
            center(&fg(&built_with, Color::Gray), width),
            center(&dim(FOOTER_COPYRIGHT), width),
            center(&fg(&FOOTER_LINKS.join(" • "), Color::DarkGray), width),
            center(
                &format!(
                    "{} {}",
                    fg(FOOTER_PROMPT, Color::Green),
                    fg(FOOTER_STATUS, Color::Gray)
                ),
                width,
            ),
            String::new(),
        ]
    }
}

impl Section for Footer {
    fn id(&self) -> Option<SectionId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::Footer;
    use crate::sections::Section;
    use folio_tui::core::text::ansi::strip_ansi;
    use folio_tui::Component;

    #[test]
    fn footer_has_no_anchor() {
        let mut footer = Footer::new();
        assert_eq!(footer.id(), None);
        let rows = footer.render(90);
        assert!(strip_ansi(&rows[4]).contains("system@status:~$ Infrastructure: OPERATIONAL"));
    }
}
