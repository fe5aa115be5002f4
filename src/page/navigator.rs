use tracing::debug;

use crate::domain::SectionId;

use super::{
    platform::{PageGeometry, SmoothScroll},
    tracker::ActiveSection,
};

#[derive(Clone, Copy, Debug)]
pub struct SectionNavigator {
    header_height: u32,
}

impl SectionNavigator {
    pub fn new(header_height: u32) -> Self {
        Self { header_height }
    }

    pub fn scroll_target(&self, geometry: &impl PageGeometry, section: &SectionId) -> Option<u32> {
        geometry
            .offset_top(section)
            .map(|top| top.saturating_sub(self.header_height))
    }

    /// Scrolls to the section when it exists and marks it active either way,
    /// so the highlight follows the request instead of the animation.
    pub fn navigate_to_section<P>(
        &self,
        section: &SectionId,
        page: &mut P,
        active: &mut ActiveSection,
    ) -> Option<u32>
    where
        P: PageGeometry + SmoothScroll,
    {
        let target = self.scroll_target(&*page, section);
        match target {
            Some(offset) => {
                debug!(%section, offset, "navigating to section");
                page.smooth_scroll_to(offset);
            }
            None => debug!(%section, "navigation target not on page"),
        }

        active.set(section.clone());
        target
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakePage {
        tops: HashMap<String, u32>,
        scrolls: Vec<u32>,
    }

    impl FakePage {
        fn with(tops: &[(&str, u32)]) -> Self {
            Self {
                tops: tops
                    .iter()
                    .map(|(id, top)| (id.to_string(), *top))
                    .collect(),
                scrolls: Vec::new(),
            }
        }
    }

    impl PageGeometry for FakePage {
        fn offset_top(&self, section: &SectionId) -> Option<u32> {
            self.tops.get(section.as_str()).copied()
        }
    }

    impl SmoothScroll for FakePage {
        fn smooth_scroll_to(&mut self, offset: u32) {
            self.scrolls.push(offset);
        }
    }

    #[test]
    fn test_target_subtracts_header_height() {
        let navigator = SectionNavigator::new(64);
        let mut page = FakePage::with(&[("inicio", 64), ("proyectos", 900)]);
        let mut active = ActiveSection::new(SectionId::new("inicio"));

        let target =
            navigator.navigate_to_section(&SectionId::new("proyectos"), &mut page, &mut active);

        assert_eq!(target, Some(836));
        assert_eq!(page.scrolls, vec![836]);
        assert_eq!(active.get().as_str(), "proyectos");
    }

    #[test]
    fn test_target_saturates_at_page_top() {
        let navigator = SectionNavigator::new(64);
        let page = FakePage::with(&[("inicio", 10)]);

        assert_eq!(
            navigator.scroll_target(&page, &SectionId::new("inicio")),
            Some(0)
        );
    }

    #[test]
    fn test_missing_section_still_updates_active() {
        let navigator = SectionNavigator::new(64);
        let mut page = FakePage::with(&[("inicio", 64)]);
        let mut active = ActiveSection::new(SectionId::new("inicio"));

        let target =
            navigator.navigate_to_section(&SectionId::new("proyectos"), &mut page, &mut active);

        assert_eq!(target, None);
        assert!(page.scrolls.is_empty());
        assert_eq!(active.get().as_str(), "proyectos");
    }

    #[test]
    fn test_repeated_navigation_has_same_target() {
        let navigator = SectionNavigator::new(64);
        let mut page = FakePage::with(&[("sobre-mi", 2000)]);
        let mut active = ActiveSection::new(SectionId::new("inicio"));
        let section = SectionId::new("sobre-mi");

        navigator.navigate_to_section(&section, &mut page, &mut active);
        navigator.navigate_to_section(&section, &mut page, &mut active);

        assert_eq!(page.scrolls, vec![1936, 1936]);
    }
}
