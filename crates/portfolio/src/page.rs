//! The scrolling document: layout, anchors and the smooth-scroll animation.

use std::ops::Range;
use std::time::{Duration, Instant};

use crate::anchors::{AnchorMap, SectionId, NAV_HEIGHT};
use crate::sections::{Section, FRAME_INTERVAL};

pub const SCROLL_DURATION: Duration = Duration::from_millis(3500);

/// Cubic ease-in-out on `t` in `0.0..=1.0`.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: usize,
    to: usize,
    started: Instant,
    next_frame: Instant,
}

impl ScrollAnimation {
    fn position(&self, now: Instant) -> (usize, bool) {
        let elapsed = now.saturating_duration_since(self.started);
        let progress = (elapsed.as_secs_f64() / SCROLL_DURATION.as_secs_f64()).min(1.0);
        if progress >= 1.0 {
            return (self.to, true);
        }
        let distance = self.to as f64 - self.from as f64;
        let position = self.from as f64 + distance * ease_in_out_cubic(progress);
        (position.round().max(0.0) as usize, false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Block {
    id: Option<SectionId>,
    rows: Range<usize>,
}

#[derive(Debug, Default)]
pub struct Page {
    scroll: usize,
    animation: Option<ScrollAnimation>,
    anchors: AnchorMap,
    blocks: Vec<Block>,
    document_height: usize,
    viewport_height: usize,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders every section into one document and records where each one starts.
    ///
    /// The document begins with [`NAV_HEIGHT`] blank rows that sit under the navigation bar.
    pub fn layout(&mut self, sections: &mut [&mut dyn Section], width: usize) -> Vec<String> {
        let mut document = vec![String::new(); NAV_HEIGHT];
        self.anchors.clear();
        self.blocks.clear();

        for section in sections.iter_mut() {
            let start = document.len();
            document.extend(section.render(width));
            let id = section.id();
            if let Some(id) = id {
                self.anchors.register(id, start);
            }
            self.blocks.push(Block {
                id,
                rows: start..document.len(),
            });
        }

        self.document_height = document.len();
        self.scroll = self.scroll.min(self.max_scroll());
        document
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn anchors(&self) -> &AnchorMap {
        &self.anchors
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn max_scroll(&self) -> usize {
        self.document_height.saturating_sub(self.viewport_height)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the page is heading: the animation target, or the current position.
    pub fn target(&self) -> usize {
        self.animation.map(|anim| anim.to).unwrap_or(self.scroll)
    }

    /// Document rows below the navigation bar that are on screen.
    pub fn visible_rows(&self) -> Range<usize> {
        let start = self.scroll + NAV_HEIGHT;
        let end = (self.scroll + self.viewport_height).max(start);
        start..end
    }

    /// Indices (in layout order) of the sections with at least one row on screen.
    pub fn visible_blocks(&self) -> Vec<usize> {
        let visible = self.visible_rows();
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.rows.start < visible.end && visible.start < block.rows.end)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Section under the navigation bar.
    pub fn current_section(&self) -> Option<SectionId> {
        self.anchors.section_at(self.scroll + NAV_HEIGHT)
    }

    pub fn is_section_visible(&self, id: SectionId) -> bool {
        self.visible_blocks()
            .into_iter()
            .any(|idx| self.blocks[idx].id == Some(id))
    }

    /// Starts an eased scroll that lands `anchor` just below the navigation bar.
    ///
    /// Returns false when the anchor is not part of the document.
    pub fn scroll_to_anchor(&mut self, anchor: &str, now: Instant) -> bool {
        let Some(row) = self.anchors.row(anchor) else {
            tracing::warn!(anchor, "scroll target is not registered");
            return false;
        };
        self.animate_to(row.saturating_sub(NAV_HEIGHT), now);
        true
    }

    pub fn scroll_to_section(&mut self, id: SectionId, now: Instant) -> bool {
        self.scroll_to_anchor(id.anchor(), now)
    }

    /// Smooth scroll to the next section below the current target.
    pub fn next_section(&mut self, now: Instant) -> Option<SectionId> {
        let (id, row) = self.anchors.next_after(self.target() + NAV_HEIGHT)?;
        self.animate_to(row - NAV_HEIGHT, now);
        Some(id)
    }

    /// Smooth scroll to the section above the current target.
    pub fn previous_section(&mut self, now: Instant) -> Option<SectionId> {
        let (id, row) = self.anchors.previous_before(self.target() + NAV_HEIGHT)?;
        self.animate_to(row - NAV_HEIGHT, now);
        Some(id)
    }

    fn animate_to(&mut self, target: usize, now: Instant) {
        let to = target.min(self.max_scroll());
        if to == self.scroll {
            self.animation = None;
            return;
        }
        tracing::debug!(from = self.scroll, to, "smooth scroll");
        self.animation = Some(ScrollAnimation {
            from: self.scroll,
            to,
            started: now,
            next_frame: now,
        });
    }

    /// Immediate scroll by `delta` rows; cancels any animation.
    pub fn scroll_by(&mut self, delta: isize) {
        self.animation = None;
        let next = self.scroll.saturating_add_signed(delta);
        self.scroll = next.min(self.max_scroll());
    }

    /// Rows moved by PageUp/PageDown.
    pub fn page_rows(&self) -> usize {
        self.viewport_height.saturating_sub(NAV_HEIGHT + 1).max(1)
    }

    pub fn scroll_home(&mut self) {
        self.animation = None;
        self.scroll = 0;
    }

    pub fn scroll_end(&mut self) {
        self.animation = None;
        self.scroll = self.max_scroll();
    }

    pub fn tick(&mut self, now: Instant) {
        let Some(mut animation) = self.animation else {
            return;
        };
        let (position, done) = animation.position(now);
        self.scroll = position.min(self.max_scroll());
        if done {
            self.animation = None;
        } else {
            animation.next_frame = now + FRAME_INTERVAL;
            self.animation = Some(animation);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.animation.map(|anim| anim.next_frame)
    }

    /// The screen: navigation rows on top of the visible slice of `document`.
    pub fn compose(&self, navigation: Vec<String>, document: &[String]) -> Vec<String> {
        let mut rows: Vec<String> = navigation.into_iter().take(NAV_HEIGHT).collect();
        while rows.len() < NAV_HEIGHT {
            rows.push(String::new());
        }
        let visible = self.visible_rows();
        for row in visible {
            rows.push(document.get(row).cloned().unwrap_or_default());
        }
        rows.truncate(self.viewport_height.max(NAV_HEIGHT));
        rows
    }
}
