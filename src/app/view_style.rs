use ratatui::{
    prelude::Span,
    style::{Color, Modifier, Style},
};

use crate::domain::{CategoryKey, ProjectRecord};

pub(super) struct Accent {
    pub glyph: &'static str,
    pub color: Color,
}

static ACCENTS: [(&str, Accent); 6] = [
    (
        "frontend",
        Accent {
            glyph: "📊",
            color: Color::Rgb(240, 147, 251),
        },
    ),
    (
        "backend",
        Accent {
            glyph: "⇄",
            color: Color::Rgb(79, 172, 254),
        },
    ),
    (
        "mobile",
        Accent {
            glyph: "📱",
            color: Color::Rgb(250, 112, 154),
        },
    ),
    (
        "full stack",
        Accent {
            glyph: "👥",
            color: Color::Rgb(168, 237, 234),
        },
    ),
    (
        "cloud engineer, ai orchestration",
        Accent {
            glyph: "☁",
            color: Color::Rgb(102, 126, 234),
        },
    ),
    (
        "education",
        Accent {
            glyph: "📖",
            color: Color::Rgb(252, 182, 159),
        },
    ),
];

static DEFAULT_ACCENT: Accent = Accent {
    glyph: "◆",
    color: Color::Rgb(195, 207, 226),
};

/// Accent for a filter bucket, matched case-insensitively on the category name.
pub(super) fn category_accent(category: &CategoryKey) -> &'static Accent {
    let CategoryKey::Named(name) = category else {
        return &DEFAULT_ACCENT;
    };
    let name = name.trim().to_lowercase();
    ACCENTS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, accent)| accent)
        .unwrap_or(&DEFAULT_ACCENT)
}

pub(super) fn project_accent(project: &ProjectRecord) -> &'static Accent {
    category_accent(&project.category_key())
}

pub(super) fn tab_label_span(label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::Gray)
    };

    Span::styled(format!(" {} ", label), style)
}

pub(super) fn text_color_for_bg(bg_color: Color) -> Color {
    if let Color::Rgb(r, g, b) = bg_color {
        let brightness = (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000;
        if brightness > 128 {
            Color::Black
        } else {
            Color::White
        }
    } else {
        Color::White
    }
}
