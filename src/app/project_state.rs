use tracing::debug;

use crate::page::{PagerState, SmoothScroll};

use super::{App, ui_helpers};

impl App {
    fn active_category_index(&self) -> usize {
        let active = self.project_filter.active_category();
        self.category_options
            .iter()
            .position(|option| option == active)
            .unwrap_or(0)
    }

    pub(super) fn cycle_category(&mut self, forward: bool) {
        if self.category_options.len() < 2 {
            return;
        }

        let current = self.active_category_index();
        let next = if forward {
            ui_helpers::wrap_next_index(current, self.category_options.len())
        } else {
            ui_helpers::wrap_prev_index(current, self.category_options.len())
        };

        let Some(category) = self.category_options.get(next).cloned() else {
            return;
        };
        self.project_filter.on_filter_change(category);
        self.selected_card = 0;
        self.layout_dirty = true;
    }

    pub(super) fn load_more_projects(&mut self) {
        let view = self.project_filter.view(&self.portfolio.projects);
        if view.state() != PagerState::Collapsed {
            return;
        }

        let page_size = self.project_filter.page_size();
        self.project_filter.on_load_more(page_size);
        self.layout_dirty = true;
    }

    pub(super) fn select_next_card(&mut self) {
        let count = self.visible_projects().len();
        if count == 0 {
            return;
        }
        self.selected_card = ui_helpers::wrap_next_index(self.selected_card, count);
        self.focus_selected_card = true;
        self.layout_dirty = true;
    }

    pub(super) fn select_prev_card(&mut self) {
        let count = self.visible_projects().len();
        if count == 0 {
            return;
        }
        self.selected_card = ui_helpers::wrap_prev_index(self.selected_card, count);
        self.focus_selected_card = true;
        self.layout_dirty = true;
    }

    pub(super) fn toggle_selected_expanded(&mut self) {
        let Some(id) = self.selected_project().map(|project| project.id.clone()) else {
            return;
        };

        if !self.expanded_cards.remove(&id) {
            self.expanded_cards.insert(id);
        }
        self.focus_selected_card = true;
        self.layout_dirty = true;
    }

    /// Scrolls so the selected card's first row sits right under the header,
    /// unless it is already on screen.
    pub(super) fn scroll_selected_card_into_view(&mut self) {
        let Some(&row) = self.document.card_rows.get(self.selected_card) else {
            return;
        };
        if self.viewport.is_row_visible(row) {
            return;
        }

        let offset = self
            .viewport
            .row_top_units(row)
            .saturating_sub(self.viewport.header_units());
        debug!(card = self.selected_card, offset, "scrolling card into view");
        self.viewport.smooth_scroll_to(offset);
    }
}
