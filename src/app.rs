use std::{
    collections::HashSet,
    io,
    time::{Duration, Instant},
};

use chrono::{Datelike, Local};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, info};

use crate::{
    config::PageConfig,
    constants::{LAYOUT_SETTINGS, TIME_SETTINGS},
    domain::{CategoryFilter, Portfolio, ProjectRecord, SectionId},
    error::Result,
    page::{
        ActiveSection, ProjectFilter, SectionNavigator, SectionTracker, available_categories,
    },
};

mod event_handlers;
mod page_layout;
mod project_card;
mod project_modal_view;
mod project_state;
mod render_views;
mod ui_helpers;
mod view_style;
mod viewport;

use page_layout::PageDocument;
use viewport::{TerminalIntersectionObserver, TerminalViewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum UiMode {
    Main,
    ProjectModal,
}

struct App {
    portfolio: Portfolio,
    config: PageConfig,
    active_section: ActiveSection,
    project_filter: ProjectFilter,
    category_options: Vec<CategoryFilter>,
    tracker: SectionTracker<TerminalIntersectionObserver>,
    navigator: SectionNavigator,
    viewport: TerminalViewport,
    document: PageDocument,
    ui_mode: UiMode,
    selected_card: usize,
    expanded_cards: HashSet<String>,
    status_message: Option<String>,
    area: Rect,
    current_year: i32,
    focus_selected_card: bool,
    layout_dirty: bool,
    render_needed: bool,
}

impl App {
    fn new(portfolio: Portfolio, config: PageConfig, area: Rect) -> Self {
        let category_options = available_categories(&portfolio.projects);
        let section_ids: Vec<SectionId> = portfolio
            .nav_items
            .iter()
            .map(|item| item.key.clone())
            .collect();

        let tracker = SectionTracker::mount(
            TerminalIntersectionObserver::new(config.visibility_threshold),
            section_ids,
            config.visibility_threshold,
        );

        let mut app = Self {
            active_section: ActiveSection::new(config.default_section.clone()),
            project_filter: ProjectFilter::new(config.page_size),
            navigator: SectionNavigator::new(config.header_height),
            viewport: TerminalViewport::new(config.header_height, LAYOUT_SETTINGS.row_units),
            category_options,
            tracker,
            portfolio,
            config,
            document: PageDocument::default(),
            ui_mode: UiMode::Main,
            selected_card: 0,
            expanded_cards: HashSet::new(),
            status_message: None,
            area,
            current_year: Local::now().year(),
            focus_selected_card: false,
            layout_dirty: true,
            render_needed: true,
        };

        app.ensure_layout(area);
        app
    }

    fn ensure_layout(&mut self, area: Rect) {
        if !self.layout_dirty && area == self.area {
            return;
        }

        self.area = area;
        self.viewport.set_window_rows(area.height);
        self.document = self.build_document(area.width);
        self.viewport
            .set_layout(self.document.anchors.clone(), self.document.lines.len());
        self.layout_dirty = false;
        self.render_needed = true;

        if self.focus_selected_card {
            self.focus_selected_card = false;
            self.scroll_selected_card_into_view();
        }

        self.deliver_visibility();
    }

    fn deliver_visibility(&mut self) {
        let batch = self.tracker.observer_mut().take_batch(&self.viewport);
        if batch.is_empty() {
            return;
        }
        if self.tracker.apply(&batch, &mut self.active_section) {
            self.render_needed = true;
        }
    }

    fn tick(&mut self) {
        if self.viewport.step() {
            self.render_needed = true;
            self.deliver_visibility();
        }
    }

    fn navigate_to(&mut self, section: &SectionId) {
        self.navigator
            .navigate_to_section(section, &mut self.viewport, &mut self.active_section);
        self.render_needed = true;
    }

    fn navigate_to_nav_index(&mut self, index: usize) {
        let Some(section) = self
            .portfolio
            .nav_items
            .get(index)
            .map(|item| item.key.clone())
        else {
            return;
        };
        self.navigate_to(&section);
    }

    fn active_nav_index(&self) -> Option<usize> {
        self.portfolio
            .nav_items
            .iter()
            .position(|item| self.active_section.is(&item.key))
    }

    fn visible_projects(&self) -> Vec<&ProjectRecord> {
        self.project_filter
            .view(&self.portfolio.projects)
            .visible()
            .to_vec()
    }

    fn selected_project(&self) -> Option<&ProjectRecord> {
        self.visible_projects().get(self.selected_card).copied()
    }

    fn open_project_modal(&mut self) {
        let Some(project) = self.selected_project() else {
            return;
        };
        info!(project = %project.id, title = %project.title, "project selected");
        self.ui_mode = UiMode::ProjectModal;
        self.render_needed = true;
    }

    fn close_project_modal(&mut self) {
        self.ui_mode = UiMode::Main;
        self.render_needed = true;
    }

    fn in_project_modal(&self) -> bool {
        matches!(self.ui_mode, UiMode::ProjectModal)
    }

    fn request_cv(&mut self) {
        let message = match &self.portfolio.profile.cv_path {
            Some(path) => {
                info!(path = %path, "cv requested");
                format!("CV: {}", path)
            }
            None => "CV no disponible".to_string(),
        };
        self.set_status(message);
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.render_needed = true;
    }

    fn modal_rect(&self, terminal_size: Rect) -> Rect {
        self.modal_rect_ratio(terminal_size, 2, 3)
    }

    fn modal_rect_ratio(&self, terminal_size: Rect, numerator: u16, denominator: u16) -> Rect {
        let target_width = terminal_size.width.saturating_mul(numerator) / denominator;
        let target_height = (terminal_size.height.saturating_mul(numerator) / denominator).max(10);

        let max_width = terminal_size.width.saturating_sub(2).max(1);
        let max_height = terminal_size.height.saturating_sub(2).max(1);

        let modal_width = target_width.clamp(1, max_width);
        let modal_height = target_height.clamp(1, max_height);

        let modal_x = (terminal_size.width.saturating_sub(modal_width)) / 2;
        let modal_y = (terminal_size.height.saturating_sub(modal_height)) / 2;

        Rect::new(modal_x, modal_y, modal_width, modal_height)
    }
}

pub fn run_ui(portfolio: Portfolio, config: PageConfig) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    let mut app = App::new(portfolio, config, size);
    info!(width = size.width, height = size.height, "page mounted");

    let tick_rate = Duration::from_millis(TIME_SETTINGS.tick_ms);
    let render_rate = Duration::from_millis(1000 / TIME_SETTINGS.target_fps);
    let mut last_tick = Instant::now();
    let mut last_render = Instant::now();

    let outcome = loop {
        let size = match terminal.size() {
            Ok(size) => size,
            Err(e) => break Err(e),
        };
        app.ensure_layout(size);

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if last_render.elapsed() >= render_rate && app.render_needed {
            if let Err(e) = terminal.draw(|f| app.draw_frame(f)) {
                break Err(e);
            }
            app.render_needed = false;
            last_render = Instant::now();
        }

        match event::poll(Duration::from_millis(1)) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => {
                    if app.handle_key(key) {
                        break Ok(());
                    }
                }
                Ok(Event::Resize(width, height)) => {
                    debug!(width, height, "terminal resized");
                    app.layout_dirty = true;
                }
                Ok(_) => {}
                Err(e) => break Err(e),
            },
            Ok(false) => {}
            Err(e) => break Err(e),
        }
    };

    drop(app);
    info!("page unmounted");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    outcome.map_err(Into::into)
}
