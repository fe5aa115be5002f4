use crate::{
    constants::TIME_SETTINGS,
    domain::SectionId,
    page::{PageGeometry, SmoothScroll, VisibilityEvent, VisibilityObserver},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct SectionAnchor {
    pub id: SectionId,
    pub top_row: usize,
    pub height_rows: usize,
}

/// The scrolled page as the core sees it. Offsets are page units; one terminal
/// row spans `row_units`. The document starts below a margin the size of the
/// fixed header, so the first section sits exactly one header below the top.
pub(super) struct TerminalViewport {
    row_units: u32,
    header_rows: u32,
    window_rows: u32,
    anchors: Vec<SectionAnchor>,
    document_rows: usize,
    scroll: u32,
    target: u32,
}

impl TerminalViewport {
    pub fn new(header_height: u32, row_units: u32) -> Self {
        let row_units = row_units.max(1);
        Self {
            row_units,
            header_rows: header_height.div_ceil(row_units),
            window_rows: 0,
            anchors: Vec::new(),
            document_rows: 0,
            scroll: 0,
            target: 0,
        }
    }

    pub fn header_rows(&self) -> u16 {
        self.header_rows as u16
    }

    pub fn header_units(&self) -> u32 {
        self.header_rows * self.row_units
    }

    pub fn window_units(&self) -> u32 {
        self.window_rows * self.row_units
    }

    pub fn body_rows(&self) -> u32 {
        self.window_rows.saturating_sub(self.header_rows)
    }

    pub fn set_window_rows(&mut self, rows: u16) {
        self.window_rows = rows as u32;
        self.clamp();
    }

    pub fn set_layout(&mut self, anchors: Vec<SectionAnchor>, document_rows: usize) {
        self.anchors = anchors;
        self.document_rows = document_rows;
        self.clamp();
    }

    pub fn anchor(&self, section: &SectionId) -> Option<&SectionAnchor> {
        self.anchors.iter().find(|anchor| anchor.id == *section)
    }

    pub fn row_top_units(&self, row: usize) -> u32 {
        (self.header_rows + row as u32) * self.row_units
    }

    pub fn max_scroll(&self) -> u32 {
        let page_units = self.header_rows as usize + self.document_rows;
        (page_units as u32 * self.row_units).saturating_sub(self.window_units())
    }

    pub fn scroll(&self) -> u32 {
        self.scroll
    }

    pub fn first_visible_row(&self) -> usize {
        (self.scroll / self.row_units) as usize
    }

    pub fn is_row_visible(&self, row: usize) -> bool {
        let first = self.first_visible_row();
        row >= first && row < first + self.body_rows() as usize
    }

    pub fn scroll_by(&mut self, delta: i64) {
        let next = (self.target as i64 + delta).clamp(0, self.max_scroll() as i64);
        self.target = next as u32;
    }

    /// Advances the smooth scroll by one tick. Returns `true` when the
    /// position moved.
    pub fn step(&mut self) -> bool {
        if self.scroll == self.target {
            return false;
        }

        let distance = self.scroll.abs_diff(self.target);
        let stride = (distance / TIME_SETTINGS.scroll_ease_divisor)
            .max(self.row_units)
            .min(distance);

        if self.target > self.scroll {
            self.scroll += stride;
        } else {
            self.scroll -= stride;
        }
        true
    }

    fn clamp(&mut self) {
        let max = self.max_scroll();
        self.scroll = self.scroll.min(max);
        self.target = self.target.min(max);
    }

    /// Fraction of the section inside the region below the header, plus
    /// whether it touches that region at all. The region runs to the bottom
    /// edge of the window.
    fn visibility(&self, anchor: &SectionAnchor) -> (f32, bool) {
        let root_top = self.scroll + self.header_units();
        let root_bottom = self.scroll + self.window_units();

        let top = self.row_top_units(anchor.top_row);
        let height = anchor.height_rows as u32 * self.row_units;
        if height == 0 {
            return (0.0, false);
        }
        let bottom = top + height;

        let overlap = root_bottom.min(bottom).saturating_sub(root_top.max(top));
        (overlap as f32 / height as f32, overlap > 0)
    }
}

impl PageGeometry for TerminalViewport {
    fn offset_top(&self, section: &SectionId) -> Option<u32> {
        self.anchor(section)
            .map(|anchor| self.row_top_units(anchor.top_row))
    }
}

impl SmoothScroll for TerminalViewport {
    fn smooth_scroll_to(&mut self, offset: u32) {
        self.target = offset.min(self.max_scroll());
    }
}

/// Reports sections whose visibility crossed the threshold since the last
/// batch. A freshly observed section is always reported once. A section counts
/// as crossed only strictly above the threshold, the same test the tracker
/// applies, so a section sitting exactly on it is reported again once it moves
/// past.
pub(super) struct TerminalIntersectionObserver {
    threshold: f32,
    observed: Vec<(SectionId, Option<bool>)>,
}

impl TerminalIntersectionObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            observed: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    pub fn take_batch(&mut self, viewport: &TerminalViewport) -> Vec<VisibilityEvent> {
        let mut batch = Vec::new();
        for (section, last_crossed) in &mut self.observed {
            let Some(anchor) = viewport.anchor(section) else {
                continue;
            };

            let (ratio, is_intersecting) = viewport.visibility(anchor);
            let crossed = is_intersecting && ratio > self.threshold;
            if *last_crossed != Some(crossed) {
                *last_crossed = Some(crossed);
                batch.push(VisibilityEvent::new(
                    section.clone(),
                    ratio,
                    is_intersecting,
                ));
            }
        }
        batch
    }
}

impl VisibilityObserver for TerminalIntersectionObserver {
    fn observe(&mut self, section: &SectionId) {
        if !self.observed.iter().any(|(known, _)| known == section) {
            self.observed.push((section.clone(), None));
        }
    }

    fn unobserve(&mut self, section: &SectionId) {
        self.observed.retain(|(known, _)| known != section);
    }
}
