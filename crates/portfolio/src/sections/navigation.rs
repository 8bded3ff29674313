//! Fixed navigation bar drawn over the top [`NAV_HEIGHT`](crate::anchors::NAV_HEIGHT) rows.

use folio_tui::core::text::slice::{fit_to_width, truncate_to_width};
use folio_tui::core::text::style::{bold, dim, fg, inverse, Color};
use folio_tui::{visible_width, Component};

use crate::anchors::SectionId;

const KEY_HINTS: &str = " ↑↓ scroll  PgUp/PgDn page  ^N/^P section  F1-F4 quick  Esc quit ";

pub struct NavigationBar {
    brand: String,
    current: Option<SectionId>,
}

impl NavigationBar {
    pub fn new(name: &str) -> Self {
        Self {
            brand: format!("</> {name}"),
            current: Some(SectionId::Hero),
        }
    }

    pub fn set_current(&mut self, current: Option<SectionId>) {
        self.current = current;
    }

    pub fn current(&self) -> Option<SectionId> {
        self.current
    }

    fn items(&self) -> String {
        SectionId::ALL
            .iter()
            .map(|id| {
                let label = format!(" {} ", id.nav_label());
                if Some(*id) == self.current {
                    inverse(&fg(&label, Color::Green))
                } else {
                    fg(&label, Color::Gray)
                }
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

impl Component for NavigationBar {
    fn render(&mut self, width: usize) -> Vec<String> {
        let brand = bold(&fg(&self.brand, Color::Green));
        let links = fg("GitHub · LinkedIn · Mail", Color::DarkGray);
        let items = self.items();

        let full = visible_width(&brand) + 2 + visible_width(&items) + 2 + visible_width(&links);
        let top = if full <= width {
            let gap = width - full + 2;
            format!("{brand}  {items}{}{links}", " ".repeat(gap))
        } else {
            truncate_to_width(&format!("{brand}  {items}"), width)
        };

        let hints = dim(KEY_HINTS);
        let rule_width = width.saturating_sub(visible_width(KEY_HINTS));
        let bottom = format!("{}{hints}", fg(&"─".repeat(rule_width), Color::DarkGray));

        vec![fit_to_width(&top, width), fit_to_width(&bottom, width)]
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationBar;
    use crate::anchors::SectionId;
    use folio_tui::core::text::ansi::strip_ansi;
    use folio_tui::{visible_width, Component};

    #[test]
    fn renders_two_rows_of_exact_width() {
        let mut nav = NavigationBar::new("Pradeep Traje");
        for width in [20, 80, 140] {
            let rows = nav.render(width);
            assert_eq!(rows.len(), 2);
            assert!(rows.iter().all(|row| visible_width(row) == width));
        }
    }

    #[test]
    fn wide_layout_lists_every_section() {
        let mut nav = NavigationBar::new("Pradeep Traje");
        nav.set_current(Some(SectionId::Projects));
        let top = strip_ansi(&nav.render(160)[0]);
        assert!(top.starts_with("</> Pradeep Traje"));
        for id in SectionId::ALL {
            assert!(top.contains(id.nav_label()), "missing {}", id.nav_label());
        }
        assert!(top.trim_end().ends_with("Mail"));
        assert_eq!(nav.current(), Some(SectionId::Projects));
    }
}
