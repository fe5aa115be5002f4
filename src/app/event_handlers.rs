use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    constants::{LAYOUT_SETTINGS, SECTION_IDS},
    domain::SectionId,
};

use super::{App, ui_helpers};

impl App {
    pub(super) fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        if self.in_project_modal() {
            self.handle_modal_key(key);
            false
        } else {
            self.handle_normal_key(key)
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => self.close_project_modal(),
            KeyCode::Char('n') | KeyCode::Right => {
                self.select_next_card();
                self.render_needed = true;
            }
            KeyCode::Char('p') | KeyCode::Left => {
                self.select_prev_card();
                self.render_needed = true;
            }
            _ => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let step = self.config.scroll_step as i64;
        let page = self.viewport.body_rows().saturating_sub(1).max(1) as i64
            * LAYOUT_SETTINGS.row_units as i64;

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('c') if ctrl => return true,
            KeyCode::Char(digit @ '1'..='9') => {
                let index = digit as usize - '1' as usize;
                self.navigate_to_nav_index(index);
            }
            KeyCode::Tab => {
                let len = self.portfolio.nav_items.len();
                let current = self.active_nav_index().unwrap_or(0);
                self.navigate_to_nav_index(ui_helpers::wrap_next_index(current, len));
            }
            KeyCode::BackTab => {
                let len = self.portfolio.nav_items.len();
                let current = self.active_nav_index().unwrap_or(0);
                self.navigate_to_nav_index(ui_helpers::wrap_prev_index(current, len));
            }
            KeyCode::Home => self.navigate_to(&SectionId::new(SECTION_IDS.hero)),
            KeyCode::Char('j') | KeyCode::Down => self.viewport.scroll_by(step),
            KeyCode::Char('k') | KeyCode::Up => self.viewport.scroll_by(-step),
            KeyCode::PageDown => self.viewport.scroll_by(page),
            KeyCode::PageUp => self.viewport.scroll_by(-page),
            KeyCode::Char(']') => self.cycle_category(true),
            KeyCode::Char('[') => self.cycle_category(false),
            KeyCode::Char('m') => self.load_more_projects(),
            KeyCode::Char('n') => self.select_next_card(),
            KeyCode::Char('p') => self.select_prev_card(),
            KeyCode::Char('e') => self.toggle_selected_expanded(),
            KeyCode::Enter => self.open_project_modal(),
            KeyCode::Char('v') => self.navigate_to(&SectionId::new(SECTION_IDS.projects)),
            KeyCode::Char('d') => self.request_cv(),
            KeyCode::Esc => {
                self.status_message = None;
                self.render_needed = true;
            }
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::Rect;

    use crate::{config::PageConfig, content::default_portfolio};

    use super::App;

    fn app() -> App {
        App::new(default_portfolio(), PageConfig::default(), Rect::new(0, 0, 100, 30))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_q_quits_only_outside_modal() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(app.in_project_modal());
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert!(!app.in_project_modal());
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_number_keys_navigate_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_section.get().as_str(), "sobre-mi");

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.active_section.get().as_str(), "sobre-mi");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_section.get().as_str(), "contacto");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_section.get().as_str(), "inicio");
    }

    #[test]
    fn test_view_projects_and_cv_actions() {
        let mut app = app();
        press(&mut app, KeyCode::Char('v'));
        assert_eq!(app.active_section.get().as_str(), "proyectos");

        press(&mut app, KeyCode::Char('d'));
        assert_eq!(
            app.status_message.as_deref(),
            Some("CV: /cv-nicolas-garrido.pdf")
        );
        press(&mut app, KeyCode::Esc);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_scroll_keys_move_viewport() {
        let mut app = app();
        press(&mut app, KeyCode::Char('j'));
        while app.viewport.step() {}
        assert_eq!(app.viewport.scroll(), 48);

        press(&mut app, KeyCode::Home);
        while app.viewport.step() {}
        assert_eq!(app.viewport.scroll(), 0);
    }
}
