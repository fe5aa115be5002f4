use itertools::Itertools;
use tracing::debug;

use crate::domain::{CategoryFilter, ProjectRecord};

/// Filter options for a collection: `All` first, then each bucket in the
/// order it first appears.
pub fn available_categories(projects: &[ProjectRecord]) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(
            projects
                .iter()
                .map(|project| CategoryFilter::Only(project.category_key()))
                .unique(),
        )
        .collect()
}

pub fn filtered_projects<'a>(
    projects: &'a [ProjectRecord],
    filter: &CategoryFilter,
) -> Vec<&'a ProjectRecord> {
    projects
        .iter()
        .filter(|project| filter.matches(project))
        .collect()
}

pub fn visible_slice<T>(filtered: &[T], visible_count: usize) -> &[T] {
    &filtered[..visible_count.min(filtered.len())]
}

pub fn remaining_count(total: usize, visible_count: usize) -> usize {
    total.saturating_sub(visible_count)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PagerState {
    Collapsed,
    Exhausted,
}

impl PagerState {
    pub fn of(total: usize, visible_count: usize) -> Self {
        if visible_count < total {
            PagerState::Collapsed
        } else {
            PagerState::Exhausted
        }
    }
}

/// Filter and pagination state of the projects listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectFilter {
    active: CategoryFilter,
    visible_count: usize,
    page_size: usize,
}

impl ProjectFilter {
    pub fn new(page_size: usize) -> Self {
        Self {
            active: CategoryFilter::All,
            visible_count: page_size,
            page_size,
        }
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.active
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn on_filter_change(&mut self, category: CategoryFilter) {
        debug!(category = category.label(), "project filter changed");
        self.active = category;
        self.visible_count = self.page_size;
    }

    pub fn on_load_more(&mut self, page_size: usize) {
        self.visible_count = self.visible_count.saturating_add(page_size);
        debug!(visible = self.visible_count, "loaded more projects");
    }

    pub fn view<'a>(&self, projects: &'a [ProjectRecord]) -> ProjectsView<'a> {
        ProjectsView {
            filtered: filtered_projects(projects, &self.active),
            visible_count: self.visible_count,
        }
    }
}

/// Snapshot of the listing for one render.
#[derive(Debug)]
pub struct ProjectsView<'a> {
    filtered: Vec<&'a ProjectRecord>,
    visible_count: usize,
}

impl<'a> ProjectsView<'a> {
    pub fn filtered(&self) -> &[&'a ProjectRecord] {
        &self.filtered
    }

    pub fn visible(&self) -> &[&'a ProjectRecord] {
        visible_slice(&self.filtered, self.visible_count)
    }

    pub fn remaining(&self) -> usize {
        remaining_count(self.filtered.len(), self.visible_count)
    }

    pub fn state(&self) -> PagerState {
        PagerState::of(self.filtered.len(), self.visible_count)
    }
}
