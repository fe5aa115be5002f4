use ratatui::prelude::{Line, Span};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::domain::ProjectRecord;

use super::{App, view_style};

pub(super) fn project_detail_lines(project: &ProjectRecord) -> Vec<Line<'static>> {
    let accent = view_style::project_accent(project);
    let mut lines = Vec::new();

    let mut heading = vec![
        Span::styled(format!("{} ", accent.glyph), Style::default().fg(accent.color)),
        Span::styled(
            project.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if project.is_featured() {
        heading.push(Span::raw("  "));
        heading.push(Span::styled(
            " Destacado ",
            Style::default()
                .fg(view_style::text_color_for_bg(accent.color))
                .bg(accent.color),
        ));
    }
    lines.push(Line::from(heading));

    lines.push(Line::from(vec![
        Span::raw(project.category_key().label().to_string()).fg(accent.color),
        Span::raw(
            project
                .completed_date
                .as_ref()
                .map(|date| format!(" · {}", date))
                .unwrap_or_default(),
        )
        .fg(Color::Gray),
    ]));
    lines.push(Line::default());

    lines.push(Line::from(project.description.clone()));
    lines.push(Line::default());

    if !project.technologies.is_empty() {
        lines.push(Line::from(Span::raw("Tecnologías").bold()));
        let techs: Vec<Span<'static>> = project
            .technologies
            .iter()
            .flat_map(|technology| {
                [
                    Span::styled(format!("[{}]", technology), Style::default().fg(Color::Cyan)),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(techs));
        lines.push(Line::default());
    }

    if let Some(url) = project.github_link() {
        lines.push(Line::from(vec![
            Span::raw("Código  ").bold(),
            Span::raw(url.to_string()).underlined(),
        ]));
    }
    if let Some(url) = project.demo_link() {
        lines.push(Line::from(vec![
            Span::raw("Demo    ").bold(),
            Span::raw(url.to_string()).fg(Color::LightGreen).underlined(),
        ]));
    }

    lines
}

impl App {
    pub(super) fn render_project_modal(&self, f: &mut Frame, terminal_size: Rect) {
        let Some(project) = self.selected_project() else {
            return;
        };
        let modal_rect = self.modal_rect(terminal_size);
        let accent = view_style::project_accent(project);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Line::from(Span::styled(
                "proyecto",
                Style::default().fg(Color::White),
            )))
            .title_alignment(Alignment::Center)
            .title_bottom(
                Line::from(Span::styled("Esc cerrar", Style::default().fg(Color::DarkGray)))
                    .alignment(Alignment::Right),
            )
            .border_style(Style::default().fg(accent.color));

        let paragraph = Paragraph::new(project_detail_lines(project))
            .block(block)
            .wrap(Wrap { trim: false });

        f.render_widget(Clear, modal_rect);
        f.render_widget(paragraph, modal_rect);
    }
}
