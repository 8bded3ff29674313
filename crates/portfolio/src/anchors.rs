//! Section identities and the anchor rows they register.

/// Rows covered by the fixed navigation bar.
pub const NAV_HEIGHT: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Philosophy,
    Arsenal,
    Projects,
    Testimonials,
    Career,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::Philosophy,
        SectionId::Arsenal,
        SectionId::Projects,
        SectionId::Testimonials,
        SectionId::Career,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Philosophy => "devops-philosophy",
            Self::Arsenal => "technical-arsenal",
            Self::Projects => "project-showcase",
            Self::Testimonials => "testimonials",
            Self::Career => "career-timeline",
            Self::Contact => "contact-terminal",
        }
    }

    /// Label shown in the navigation bar.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Philosophy => "DevOps",
            Self::Arsenal => "Skills",
            Self::Projects => "Projects",
            Self::Testimonials => "Testimonials",
            Self::Career => "Experience",
            Self::Contact => "Contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.anchor() == anchor)
    }
}

/// First document row of every registered section, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorMap {
    rows: Vec<(SectionId, usize)>,
}

impl AnchorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    pub fn register(&mut self, id: SectionId, row: usize) {
        match self.rows.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => entry.1 = row,
            None => self.rows.push((id, row)),
        }
        self.rows.sort_by_key(|(_, row)| *row);
    }

    pub fn row(&self, anchor: &str) -> Option<usize> {
        let id = SectionId::from_anchor(anchor)?;
        self.row_of(id)
    }

    pub fn row_of(&self, id: SectionId) -> Option<usize> {
        self.rows
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, row)| *row)
    }

    pub fn contains(&self, anchor: &str) -> bool {
        self.row(anchor).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, usize)> + '_ {
        self.rows.iter().copied()
    }

    /// First section starting strictly below `row`.
    pub fn next_after(&self, row: usize) -> Option<(SectionId, usize)> {
        self.iter().find(|(_, start)| *start > row)
    }

    /// Last section starting strictly above `row`.
    pub fn previous_before(&self, row: usize) -> Option<(SectionId, usize)> {
        self.iter().filter(|(_, start)| *start < row).last()
    }

    /// Section containing `row`.
    pub fn section_at(&self, row: usize) -> Option<SectionId> {
        self.iter()
            .filter(|(_, start)| *start <= row)
            .last()
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::{AnchorMap, SectionId};
    use contact_terminal::NAVIGATE_TARGETS;

    #[test]
    fn anchors_round_trip_and_match_navigate_targets() {
        for id in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(id.anchor()), Some(id));
        }
        for (_, anchor, _) in NAVIGATE_TARGETS {
            assert!(SectionId::from_anchor(anchor).is_some(), "{anchor}");
        }
        assert_eq!(SectionId::from_anchor("footer"), None);
    }

    #[test]
    fn neighbours_and_containing_section() {
        let mut map = AnchorMap::new();
        map.register(SectionId::Philosophy, 40);
        map.register(SectionId::Hero, 2);
        map.register(SectionId::Arsenal, 90);

        assert_eq!(map.row("devops-philosophy"), Some(40));
        assert_eq!(map.next_after(2), Some((SectionId::Philosophy, 40)));
        assert_eq!(map.next_after(90), None);
        assert_eq!(map.previous_before(40), Some((SectionId::Hero, 2)));
        assert_eq!(map.previous_before(2), None);
        assert_eq!(map.section_at(60), Some(SectionId::Philosophy));
        assert_eq!(map.section_at(0), None);
    }

    #[test]
    fn re_registering_moves_the_anchor() {
        let mut map = AnchorMap::new();
        map.register(SectionId::Hero, 2);
        map.register(SectionId::Hero, 5);
        assert_eq!(map.iter().count(), 1);
        assert_eq!(map.row_of(SectionId::Hero), Some(5));
    }
}
