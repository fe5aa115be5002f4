pub const PAGE_DEFAULTS: PageDefaults = PageDefaults {
    header_height: 64,
    visibility_threshold: 0.5,
    page_size: 6,
    default_section: "inicio",
    scroll_step: 48,
};

pub const SECTION_IDS: SectionIds = SectionIds {
    hero: "inicio",
    projects: "proyectos",
    about: "sobre-mi",
    contact: "contacto",
};

pub const LAYOUT_SETTINGS: LayoutSettings = LayoutSettings {
    row_units: 16,
    max_card_technologies: 4,
    card_preview_chars: 120,
    skill_bar_width: 20,
};

pub const TIME_SETTINGS: TimeSettings = TimeSettings {
    tick_ms: 16,
    target_fps: 30,
    scroll_ease_divisor: 4,
};

pub const FILE_NAMES: FileNames = FileNames {
    content: "portfolio.json",
    config: "config.json",
    log_prefix: "folio.log",
};

pub struct PageDefaults {
    pub header_height: u32,
    pub visibility_threshold: f32,
    pub page_size: usize,
    pub default_section: &'static str,
    pub scroll_step: u32,
}

pub struct SectionIds {
    pub hero: &'static str,
    pub projects: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
}

pub struct LayoutSettings {
    pub row_units: u32,
    pub max_card_technologies: usize,
    pub card_preview_chars: usize,
    pub skill_bar_width: usize,
}

pub struct TimeSettings {
    pub tick_ms: u64,
    pub target_fps: u64,
    pub scroll_ease_divisor: u32,
}

pub struct FileNames {
    pub content: &'static str,
    pub config: &'static str,
    pub log_prefix: &'static str,
}
