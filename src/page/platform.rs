use crate::domain::SectionId;

/// One visibility notification for an observed section.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityEvent {
    pub section_id: SectionId,
    /// Share of the section's box inside the observed region, `0.0..=1.0`.
    pub ratio: f32,
    pub is_intersecting: bool,
}

impl VisibilityEvent {
    pub fn new(section_id: SectionId, ratio: f32, is_intersecting: bool) -> Self {
        Self {
            section_id,
            ratio,
            is_intersecting,
        }
    }
}

pub trait VisibilityObserver {
    fn observe(&mut self, section: &SectionId);
    fn unobserve(&mut self, section: &SectionId);
}

pub trait PageGeometry {
    /// Top offset of the section in page units, `None` when it is not on the page.
    fn offset_top(&self, section: &SectionId) -> Option<u32>;
}

pub trait SmoothScroll {
    fn smooth_scroll_to(&mut self, offset: u32);
}
