use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::domain::SectionId;

use super::platform::{VisibilityEvent, VisibilityObserver};

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActiveSection(SectionId);

impl ActiveSection {
    pub fn new(initial: SectionId) -> Self {
        ActiveSection(initial)
    }

    pub fn get(&self) -> &SectionId {
        &self.0
    }

    pub fn is(&self, section: &SectionId) -> bool {
        self.0 == *section
    }

    /// Returns `true` when the active section changed.
    pub fn set(&mut self, section: SectionId) -> bool {
        if self.0 == section {
            return false;
        }
        self.0 = section;
        true
    }
}

/// Keeps one observation per page section for as long as it lives and picks
/// the active section from each notification batch.
///
/// Within a batch, the qualifying event with the highest ratio wins. Equal
/// ratios go to the section mounted first, so the result never depends on the
/// order the platform delivered the events in.
pub struct SectionTracker<O: VisibilityObserver> {
    observer: O,
    sections: Vec<SectionId>,
    threshold: f32,
}

impl<O: VisibilityObserver> SectionTracker<O> {
    pub fn mount(
        mut observer: O,
        sections: impl IntoIterator<Item = SectionId>,
        threshold: f32,
    ) -> Self {
        let sections: Vec<SectionId> = sections.into_iter().collect();
        for section in &sections {
            observer.observe(section);
        }
        debug!(count = sections.len(), threshold, "section tracker mounted");

        Self {
            observer,
            sections,
            threshold,
        }
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn select(&self, batch: &[VisibilityEvent]) -> Option<SectionId> {
        batch
            .iter()
            .filter(|event| event.is_intersecting && event.ratio > self.threshold)
            .filter_map(|event| {
                self.position(&event.section_id)
                    .map(|position| (event, position))
            })
            .max_by(|(a, a_pos), (b, b_pos)| match a.ratio.total_cmp(&b.ratio) {
                Ordering::Equal => b_pos.cmp(a_pos),
                other => other,
            })
            .map(|(event, _)| event.section_id.clone())
    }

    /// Returns `true` when the batch moved the active section.
    pub fn apply(&self, batch: &[VisibilityEvent], active: &mut ActiveSection) -> bool {
        let Some(section) = self.select(batch) else {
            return false;
        };

        let changed = active.set(section);
        if changed {
            trace!(section = %active.get(), "active section from visibility");
        }
        changed
    }

    fn position(&self, section: &SectionId) -> Option<usize> {
        self.sections.iter().position(|known| known == section)
    }
}

impl<O: VisibilityObserver> Drop for SectionTracker<O> {
    fn drop(&mut self) {
        for section in &self.sections {
            self.observer.unobserve(section);
        }
        debug!(count = self.sections.len(), "section tracker unmounted");
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct RecordingObserver {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl VisibilityObserver for RecordingObserver {
        fn observe(&mut self, section: &SectionId) {
            self.calls.borrow_mut().push(format!("observe {}", section));
        }

        fn unobserve(&mut self, section: &SectionId) {
            self.calls.borrow_mut().push(format!("unobserve {}", section));
        }
    }

    fn ids(names: &[&str]) -> Vec<SectionId> {
        names.iter().map(|name| SectionId::new(*name)).collect()
    }

    fn event(id: &str, ratio: f32, intersecting: bool) -> VisibilityEvent {
        VisibilityEvent::new(SectionId::new(id), ratio, intersecting)
    }

    fn mounted() -> SectionTracker<RecordingObserver> {
        SectionTracker::mount(
            RecordingObserver::default(),
            ids(&["inicio", "proyectos", "sobre-mi", "contacto"]),
            0.5,
        )
    }

    #[test]
    fn test_mount_and_drop_pair_observations() {
        let observer = RecordingObserver::default();
        let calls = observer.calls.clone();

        let tracker = SectionTracker::mount(observer, ids(&["inicio", "proyectos"]), 0.5);
        assert_eq!(
            *calls.borrow(),
            vec!["observe inicio".to_string(), "observe proyectos".to_string()]
        );

        drop(tracker);
        assert_eq!(
            *calls.borrow(),
            vec![
                "observe inicio".to_string(),
                "observe proyectos".to_string(),
                "unobserve inicio".to_string(),
                "unobserve proyectos".to_string(),
            ]
        );
    }

    #[test]
    fn test_qualifying_event_sets_active_section() {
        let tracker = mounted();
        let mut active = ActiveSection::new(SectionId::new("inicio"));

        assert!(tracker.apply(&[event("proyectos", 0.8, true)], &mut active));
        assert_eq!(active.get().as_str(), "proyectos");
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let tracker = mounted();
        let mut active = ActiveSection::new(SectionId::new("inicio"));

        assert!(!tracker.apply(&[event("proyectos", 0.5, true)], &mut active));
        assert!(!tracker.apply(&[event("proyectos", 0.9, false)], &mut active));
        assert_eq!(active.get().as_str(), "inicio");
    }

    #[test]
    fn test_highest_ratio_wins_regardless_of_delivery_order() {
        let tracker = mounted();

        let mut active = ActiveSection::new(SectionId::new("inicio"));
        tracker.apply(
            &[event("sobre-mi", 0.9, true), event("proyectos", 0.6, true)],
            &mut active,
        );
        assert_eq!(active.get().as_str(), "sobre-mi");

        let mut active = ActiveSection::new(SectionId::new("inicio"));
        tracker.apply(
            &[event("proyectos", 0.6, true), event("sobre-mi", 0.9, true)],
            &mut active,
        );
        assert_eq!(active.get().as_str(), "sobre-mi");
    }

    #[test]
    fn test_equal_ratios_prefer_document_order() {
        let tracker = mounted();
        let mut active = ActiveSection::new(SectionId::new("inicio"));

        tracker.apply(
            &[event("contacto", 0.75, true), event("proyectos", 0.75, true)],
            &mut active,
        );
        assert_eq!(active.get().as_str(), "proyectos");
    }

    #[test]
    fn test_unknown_sections_are_ignored() {
        let tracker = mounted();
        let mut active = ActiveSection::new(SectionId::new("inicio"));

        assert!(!tracker.apply(&[event("blog", 1.0, true)], &mut active));
        assert_eq!(active.get().as_str(), "inicio");
    }
}
