use ratatui::{
    prelude::{Line, Span},
    style::{Color, Modifier, Style, Stylize},
};

use crate::{constants::LAYOUT_SETTINGS, domain::ProjectRecord};

use super::{ui_helpers, view_style};

pub(super) struct CardOptions {
    pub width: usize,
    pub selected: bool,
    pub expanded: bool,
}

/// Lines of one project card. Every line starts with the accent bar so the
/// card reads as a block; the selected card gets a brighter bar.
pub(super) fn card_lines(project: &ProjectRecord, options: &CardOptions) -> Vec<Line<'static>> {
    let accent = view_style::project_accent(project);
    let bar_style = if options.selected {
        Style::default().fg(accent.color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent.color).add_modifier(Modifier::DIM)
    };
    let bar = || Span::styled(if options.selected { "┃ " } else { "│ " }, bar_style);
    let text_width = options.width.saturating_sub(2).max(10);

    let mut lines = Vec::new();

    let mut heading = vec![
        bar(),
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

    let mut meta = vec![bar()];
    if let Some(category) = project.category.as_deref().filter(|c| !c.trim().is_empty()) {
        meta.push(Span::styled(category.to_string(), Style::default().fg(accent.color)));
    }
    if let Some(date) = &project.completed_date {
        if meta.len() > 1 {
            meta.push(Span::raw(" · ").fg(Color::DarkGray));
        }
        meta.push(Span::raw(date.clone()).fg(Color::Gray));
    }
    if meta.len() > 1 {
        lines.push(Line::from(meta));
    }

    let description = if options.expanded {
        project.description.clone()
    } else {
        ui_helpers::truncate_label(&project.description, LAYOUT_SETTINGS.card_preview_chars)
    };
    for row in ui_helpers::wrap_text(&description, text_width) {
        lines.push(Line::from(vec![bar(), Span::raw(row).fg(Color::Gray)]));
    }

    let truncated = project.description.chars().count() > LAYOUT_SETTINGS.card_preview_chars;
    if truncated {
        let hint = if options.expanded { "Ver menos [e]" } else { "Ver más [e]" };
        lines.push(Line::from(vec![
            bar(),
            Span::raw(hint).fg(Color::DarkGray).italic(),
        ]));
    }

    let (shown, hidden) = project.technology_preview(LAYOUT_SETTINGS.max_card_technologies);
    if !shown.is_empty() {
        let mut techs = vec![bar()];
        for technology in shown {
            techs.push(Span::styled(
                format!("[{}]", technology),
                Style::default().fg(Color::Cyan),
            ));
            techs.push(Span::raw(" "));
        }
        if hidden > 0 {
            techs.push(Span::raw(format!("+{}", hidden)).fg(Color::Gray));
        }
        lines.push(Line::from(techs));
    }

    let mut links = vec![bar()];
    if project.github_link().is_some() {
        links.push(Span::raw("⌥ Código").fg(Color::White));
    }
    if project.demo_link().is_some() {
        if links.len() > 1 {
            links.push(Span::raw("   "));
        }
        links.push(Span::raw("↗ Demo").fg(Color::LightGreen));
    }
    if links.len() > 1 {
        lines.push(Line::from(links));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    fn options(expanded: bool) -> CardOptions {
        CardOptions {
            width: 60,
            selected: false,
            expanded,
        }
    }

    #[test]
    fn test_card_shows_badge_and_tech_overflow() {
        let record = ProjectRecord {
            featured: Some(true),
            technologies: ["React", "Node.js", "MongoDB", "Stripe", "Redux", "JWT"]
                .map(String::from)
                .to_vec(),
            ..project("a", Some("Full Stack"))
        };

        let rendered = text(&card_lines(&record, &options(false)));
        assert!(rendered[0].contains("Destacado"));
        let techs = rendered
            .iter()
            .find(|line| line.contains("[React]"))
            .unwrap();
        assert!(techs.contains("[Stripe]"));
        assert!(!techs.contains("[Redux]"));
        assert!(techs.ends_with("+2"));
    }

    #[test]
    fn test_links_render_only_when_present() {
        let record = ProjectRecord {
            demo_url: Some("https://demo.example".to_string()),
            github_url: Some("  ".to_string()),
            ..project("a", None)
        };

        let rendered = text(&card_lines(&record, &options(false)));
        assert!(rendered.iter().any(|line| line.contains("Demo")));
        assert!(!rendered.iter().any(|line| line.contains("Código")));
    }

    #[test]
    fn test_long_description_expands() {
        let record = ProjectRecord {
            description: "palabra ".repeat(40),
            ..project("a", None)
        };

        let collapsed = text(&card_lines(&record, &options(false)));
        let expanded = text(&card_lines(&record, &options(true)));
        assert!(collapsed.iter().any(|line| line.contains("Ver más")));
        assert!(expanded.iter().any(|line| line.contains("Ver menos")));
        assert!(expanded.len() > collapsed.len());
    }
}
