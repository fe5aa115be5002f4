pub fn wrap_prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

pub fn wrap_next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    }
}

/// Cuts `text` to at most `max_chars` characters, ending in an ellipsis when shortened.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// Greedy word wrap. Words longer than `width` get a line of their own.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn skill_bar(level: u8, width: usize) -> String {
    let level = level.min(100) as usize;
    let filled = (level * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::{skill_bar, truncate_label, wrap_next_index, wrap_prev_index, wrap_text};

    #[test]
    fn test_wrap_prev_index_wraps_to_end() {
        assert_eq!(wrap_prev_index(0, 5), 4);
        assert_eq!(wrap_prev_index(3, 5), 2);
        assert_eq!(wrap_prev_index(0, 0), 0);
    }

    #[test]
    fn test_wrap_next_index_wraps_to_start() {
        assert_eq!(wrap_next_index(4, 5), 0);
        assert_eq!(wrap_next_index(1, 5), 2);
        assert_eq!(wrap_next_index(0, 0), 0);
    }

    #[test]
    fn test_truncate_label_adds_ellipsis() {
        assert_eq!(truncate_label("corto", 10), "corto");
        assert_eq!(truncate_label("una descripción larga", 8), "una des…");
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("Plataforma completa de comercio electrónico", 20);
        assert_eq!(lines, vec!["Plataforma completa", "de comercio", "electrónico"]);
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn test_skill_bar_scales_level() {
        assert_eq!(skill_bar(50, 10), "█████░░░░░");
        assert_eq!(skill_bar(0, 4), "░░░░");
        assert_eq!(skill_bar(120, 4), "████");
    }
}
