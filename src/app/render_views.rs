use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::App;

impl App {
    pub(super) fn draw_frame(&mut self, f: &mut Frame) {
        let size = f.size();
        let header_height = self.viewport.header_rows().min(size.height);

        let header_rect = Rect::new(size.x, size.y, size.width, header_height);
        let body_rect = Rect::new(
            size.x,
            size.y + header_height,
            size.width,
            size.height.saturating_sub(header_height),
        );

        f.render_widget(self.header_widget(), header_rect);
        f.render_widget(self.body_widget(body_rect.height), body_rect);

        if self.in_project_modal() {
            self.render_project_modal(f, size);
        }
    }

    fn header_widget(&self) -> Paragraph<'static> {
        let active_index = self.active_nav_index();

        let mut nav = Vec::new();
        for (index, item) in self.portfolio.nav_items.iter().enumerate() {
            let style = if Some(index) == active_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            nav.push(Span::styled(format!(" {} {} ", index + 1, item.label), style));
            nav.push(Span::raw(" "));
        }

        let status = match &self.status_message {
            Some(message) => Span::styled(message.clone(), Style::default().fg(Color::Yellow)),
            None => Span::styled(
                self.portfolio
                    .contact
                    .email
                    .clone()
                    .unwrap_or_default(),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(
                Line::from(Span::styled(
                    self.portfolio.profile.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Left),
            )
            .title(
                Line::from(Span::styled(
                    self.active_section.get().to_string(),
                    Style::default().fg(Color::LightCyan),
                ))
                .alignment(Alignment::Right),
            )
            .border_style(Style::default().fg(Color::DarkGray));

        Paragraph::new(vec![Line::from(nav), Line::from(status)]).block(block)
    }

    /// Only the rows in view are handed to the widget.
    fn body_widget(&self, height: u16) -> Paragraph<'static> {
        let first = self
            .viewport
            .first_visible_row()
            .min(self.document.lines.len());
        let last = (first + height as usize).min(self.document.lines.len());
        let rows = self.document.lines[first..last].to_vec();

        Paragraph::new(rows).block(Block::default().padding(Padding::horizontal(2)))
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend, layout::Rect};

    use crate::{config::PageConfig, content::default_portfolio};

    use super::App;

    fn rendered_rows(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.draw_frame(f)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer.get(x, y).symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_header_highlights_active_section() {
        let mut app = App::new(default_portfolio(), PageConfig::default(), Rect::new(0, 0, 100, 30));
        let rows = rendered_rows(&mut app, 100, 30);

        assert!(rows[0].contains("Nicolás Garrido"));
        assert!(rows[0].contains("inicio"));
        assert!(rows[1].contains("1 Inicio"));
        assert!(rows[4..].iter().any(|row| row.contains("Hola, soy")));
    }

    #[test]
    fn test_navigation_moves_body_and_highlight() {
        let mut app = App::new(default_portfolio(), PageConfig::default(), Rect::new(0, 0, 100, 30));
        app.navigate_to_nav_index(1);
        while app.viewport.step() {}
        app.deliver_visibility();

        let rows = rendered_rows(&mut app, 100, 30);
        assert!(rows[0].contains("proyectos"));
        assert!(rows[4..].iter().any(|row| row.contains("Proyectos Destacados")));
    }

    #[test]
    fn test_modal_shows_selected_project() {
        let mut app = App::new(default_portfolio(), PageConfig::default(), Rect::new(0, 0, 100, 30));
        app.open_project_modal();
        let title = app.selected_project().map(|p| p.title.clone()).unwrap();

        let rows = rendered_rows(&mut app, 100, 30);
        assert!(rows.iter().any(|row| row.contains(&title)));
        assert!(rows.iter().any(|row| row.contains("Esc cerrar")));
    }
}
