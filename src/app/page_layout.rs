use ratatui::{
    prelude::{Line, Span},
    style::{Color, Modifier, Style, Stylize},
};

use crate::{
    constants::{LAYOUT_SETTINGS, SECTION_IDS},
    domain::{SectionId, SocialPlatform},
    page::PagerState,
};

use super::{
    App, project_card,
    project_card::CardOptions,
    ui_helpers,
    view_style,
    viewport::SectionAnchor,
};

const MAX_TEXT_WIDTH: usize = 96;
const SIDE_MARGIN: usize = 2;

/// The whole scrollable page, laid out for one terminal width.
#[derive(Default)]
pub(super) struct PageDocument {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<SectionAnchor>,
    /// First document row of each visible project card.
    pub card_rows: Vec<usize>,
}

impl PageDocument {
    fn begin_section(&self) -> usize {
        self.lines.len()
    }

    fn end_section(&mut self, id: &str, top_row: usize) {
        self.anchors.push(SectionAnchor {
            id: SectionId::new(id),
            top_row,
            height_rows: self.lines.len() - top_row,
        });
    }

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn heading(&mut self, text: &str) {
        self.push(Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }

    fn paragraph(&mut self, text: &str, width: usize, color: Color) {
        for row in ui_helpers::wrap_text(text, width) {
            self.push(Line::from(Span::styled(row, Style::default().fg(color))));
        }
    }
}

impl App {
    pub(super) fn build_document(&self, width: u16) -> PageDocument {
        let text_width = (width as usize)
            .saturating_sub(SIDE_MARGIN * 2)
            .clamp(10, MAX_TEXT_WIDTH);
        let mut document = PageDocument::default();

        self.layout_hero(&mut document, text_width);
        self.layout_projects(&mut document, text_width);
        self.layout_about(&mut document, text_width);
        self.layout_footer(&mut document, text_width);

        document
    }

    fn layout_hero(&self, document: &mut PageDocument, width: usize) {
        let profile = &self.portfolio.profile;
        let top = document.begin_section();

        document.blank();
        document.push(Line::styled("Hola, soy", Style::default().fg(Color::Gray)));
        document.push(Line::from(Span::styled(
            profile.name.clone(),
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )));
        document.heading(&profile.title);
        document.paragraph(&profile.subtitle, width, Color::Cyan);
        document.blank();
        document.paragraph(&profile.description, width, Color::Gray);
        document.blank();

        let mut actions = vec![Span::styled(
            " Ver Proyectos [v] ",
            Style::default().fg(Color::Black).bg(Color::LightCyan),
        )];
        if profile.cv_path.is_some() {
            actions.push(Span::raw("   "));
            actions.push(Span::styled(
                " Descargar CV [d] ",
                Style::default().fg(Color::White).add_modifier(Modifier::REVERSED),
            ));
        }
        document.push(Line::from(actions));

        let min_rows = self.viewport.body_rows() as usize;
        while document.lines.len() - top < min_rows {
            document.blank();
        }
        document.end_section(SECTION_IDS.hero, top);
    }

    fn layout_projects(&self, document: &mut PageDocument, width: usize) {
        let section = &self.portfolio.projects_section;
        let view = self.project_filter.view(&self.portfolio.projects);
        let top = document.begin_section();

        document.blank();
        document.heading(&section.title);
        document.paragraph(&section.description, width, Color::Gray);
        document.blank();

        if section.show_filters && self.category_options.len() > 1 {
            let active = self.project_filter.active_category();
            let mut tabs = vec![Span::raw("[ ").fg(Color::DarkGray)];
            for option in &self.category_options {
                tabs.push(view_style::tab_label_span(option.label(), option == active));
            }
            tabs.push(Span::raw(" ]").fg(Color::DarkGray));
            document.push(Line::from(tabs));
            document.blank();
        }

        if view.filtered().is_empty() {
            document.push(Line::styled(
                "No hay proyectos en esta categoría",
                Style::default().fg(Color::White),
            ));
            document.push(Line::styled(
                "Intenta seleccionar otra categoría o revisa más tarde.",
                Style::default().fg(Color::DarkGray),
            ));
            document.blank();
        }

        for (index, project) in view.visible().iter().enumerate() {
            document.card_rows.push(document.lines.len());
            let options = CardOptions {
                width,
                selected: index == self.selected_card,
                expanded: self.expanded_cards.contains(&project.id),
            };
            for line in project_card::card_lines(project, &options) {
                document.push(line);
            }
            document.blank();
        }

        if section.show_load_more && view.state() == PagerState::Collapsed {
            document.push(Line::from(vec![
                Span::styled(
                    format!("Ver más proyectos ({} restantes)", view.remaining()),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" [m]").fg(Color::DarkGray),
            ]));
            document.blank();
        }

        document.end_section(SECTION_IDS.projects, top);
    }

    fn layout_about(&self, document: &mut PageDocument, width: usize) {
        let about = &self.portfolio.about;
        let top = document.begin_section();

        document.blank();
        document.heading(&about.title);
        document.paragraph(&about.description, width, Color::Gray);
        document.blank();

        if about.show_stats {
            document.push(Line::from(vec![
                Span::styled(
                    format!("{}+", about.years_of_experience),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Años de experiencia     ").fg(Color::Gray),
                Span::styled(
                    format!("{}+", about.completed_projects),
                    Style::default()
                        .fg(Color::LightCyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Proyectos completados").fg(Color::Gray),
            ]));
            document.blank();
        }

        let name_width = about
            .skills
            .iter()
            .map(|skill| skill.name.chars().count())
            .max()
            .unwrap_or(0);

        for (category, skills) in about.grouped_skills() {
            document.push(Line::styled(
                category.title(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::UNDERLINED),
            ));
            for skill in skills {
                document.push(Line::from(vec![
                    Span::raw(format!("  {:<width$}  ", skill.name, width = name_width)),
                    Span::styled(
                        ui_helpers::skill_bar(skill.level, LAYOUT_SETTINGS.skill_bar_width),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(format!(" {:>3}%", skill.level.min(100))).fg(Color::Gray),
                ]));
            }
            document.blank();
        }

        document.end_section(SECTION_IDS.about, top);
    }

    fn layout_footer(&self, document: &mut PageDocument, width: usize) {
        let footer = &self.portfolio.footer;
        let contact = &self.portfolio.contact;
        let top = document.begin_section();

        document.push(Line::styled(
            "─".repeat(width),
            Style::default().fg(Color::DarkGray),
        ));
        document.heading(&self.portfolio.profile.name);
        document.paragraph(&footer.blurb, width, Color::Gray);
        document.blank();

        if footer.show_contact_section {
            document.heading("Contacto");
            let entries = [
                ("✉", &contact.email),
                ("☎", &contact.phone),
                ("⌖", &contact.location),
            ];
            for (icon, value) in entries {
                if let Some(value) = value {
                    document.push(Line::from(vec![
                        Span::raw(format!("{} ", icon)).fg(Color::LightCyan),
                        Span::raw(value.clone()),
                    ]));
                }
            }
            document.blank();
        }

        if !self.portfolio.social_links.is_empty() {
            document.heading("Sígueme");
            for link in &self.portfolio.social_links {
                document.push(Line::from(vec![
                    Span::raw(format!("{} ", social_icon(link.platform))).fg(Color::LightCyan),
                    Span::raw(format!("{}: ", link.label)),
                    Span::raw(link.url.clone()).fg(Color::Gray).underlined(),
                ]));
            }
            document.blank();
        }

        document.push(Line::styled(
            footer.copyright_line(&self.portfolio.profile.name, self.current_year),
            Style::default().fg(Color::DarkGray),
        ));
        document.blank();

        document.end_section(SECTION_IDS.contact, top);
    }
}

fn social_icon(platform: SocialPlatform) -> &'static str {
    match platform {
        SocialPlatform::Github => "gh",
        SocialPlatform::Linkedin => "in",
        SocialPlatform::Twitter => "x",
        SocialPlatform::Instagram => "ig",
        SocialPlatform::Custom => "↗",
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::*;
    use crate::{
        config::PageConfig,
        content::default_portfolio,
        domain::{CategoryFilter, Portfolio},
    };

    fn app_with(portfolio: Portfolio) -> App {
        App::new(portfolio, PageConfig::default(), Rect::new(0, 0, 100, 30))
    }

    fn text(document: &PageDocument) -> Vec<String> {
        document
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_sections_follow_nav_order() {
        let app = app_with(default_portfolio());
        let ids: Vec<&str> = app
            .document
            .anchors
            .iter()
            .map(|anchor| anchor.id.as_str())
            .collect();
        assert_eq!(ids, vec!["inicio", "proyectos", "sobre-mi", "contacto"]);

        let mut expected_top = 0;
        for anchor in &app.document.anchors {
            assert_eq!(anchor.top_row, expected_top);
            expected_top += anchor.height_rows;
        }
        assert_eq!(expected_top, app.document.lines.len());
    }

    #[test]
    fn test_hero_fills_the_body() {
        let app = app_with(default_portfolio());
        let hero = &app.document.anchors[0];
        assert!(hero.height_rows >= app.viewport.body_rows() as usize);
    }

    #[test]
    fn test_empty_projects_show_empty_state() {
        let mut portfolio = default_portfolio();
        portfolio.projects.clear();
        let app = app_with(portfolio);

        let lines = text(&app.document);
        assert!(
            lines
                .iter()
                .any(|line| line == "No hay proyectos en esta categoría")
        );
        assert!(app.document.card_rows.is_empty());
        assert!(!lines.iter().any(|line| line.contains("Ver más proyectos")));
    }

    #[test]
    fn test_load_more_line_counts_remaining() {
        let mut portfolio = default_portfolio();
        let extra: Vec<_> = portfolio
            .projects
            .iter()
            .map(|project| {
                let mut copy = project.clone();
                copy.id = format!("{}-b", project.id);
                copy
            })
            .collect();
        portfolio.projects.extend(extra);
        let total = portfolio.projects.len();
        let app = app_with(portfolio);

        let lines = text(&app.document);
        let expected = format!("Ver más proyectos ({} restantes) [m]", total - 6);
        assert!(lines.iter().any(|line| *line == expected));
        assert_eq!(app.document.card_rows.len(), 6);
    }

    #[test]
    fn test_footer_shows_copyright_with_year() {
        let app = app_with(default_portfolio());
        let lines = text(&app.document);
        let expected = format!(
            "© {} Nicolás Garrido. Todos los derechos reservados.",
            app.current_year
        );
        assert!(lines.iter().any(|line| *line == expected));
    }

    #[test]
    fn test_filter_tabs_list_every_option() {
        let app = app_with(default_portfolio());
        let lines = text(&app.document);
        let tabs = lines
            .iter()
            .find(|line| line.starts_with("[ "))
            .unwrap();
        for option in &app.category_options {
            assert!(tabs.contains(option.label()));
        }
        assert_eq!(app.category_options[0], CategoryFilter::All);
    }
}
