use crate::config::SiteConfig;

const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Experience,
    Skills,
    Projects,
    Awards,
    Certifications,
    Education,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Experience,
        Self::Skills,
        Self::Projects,
        Self::Awards,
        Self::Certifications,
        Self::Education,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Awards => "awards",
            Self::Certifications => "certifications",
            Self::Education => "education",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Awards => "Awards",
            Self::Certifications => "Certifications",
            Self::Education => "Education",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Experience => "Where I've Worked",
            Self::Skills => "Technical Skills",
            Self::Projects => "Featured Projects",
            Self::Awards => "Awards & Achievements",
            Self::Certifications => "Certifications",
            Self::Education => "Education",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionAnchor {
    pub id: SectionId,
    pub offset_top: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpyNavigator {
    scroll_threshold: f64,
    lookahead_offset: f64,
    nav_offset: f64,
    scrolled: bool,
    active: Option<SectionId>,
    menu_open: bool,
}

impl ScrollSpyNavigator {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            scroll_threshold: config.scroll_threshold_px,
            lookahead_offset: config.lookahead_offset_px,
            nav_offset: config.nav_offset_px,
            scrolled: false,
            active: None,
            menu_open: false,
        }
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn on_scroll(&mut self, scroll_y: f64, anchors: &[SectionAnchor]) -> Option<SectionId> {
        self.scrolled = scroll_y > self.scroll_threshold;
        self.recompute_active(anchors, scroll_y)
    }

    /// Last anchor whose offset does not exceed `scroll_y + lookahead`.
    pub fn recompute_active(&mut self, anchors: &[SectionAnchor], scroll_y: f64) -> Option<SectionId> {
        let probe = scroll_y + self.lookahead_offset;
        let candidate = anchors
            .iter()
            .rev()
            .find(|anchor| anchor.offset_top <= probe)
            .map(|anchor| anchor.id)?;

        if self.active == Some(candidate) {
            return None;
        }

        self.active = Some(candidate);
        Some(candidate)
    }

    pub fn scroll_target(&self, offset_top: f64) -> f64 {
        (offset_top - self.nav_offset).max(0.0)
    }

    pub fn scroll_to(&mut self, id: SectionId, anchors: &[SectionAnchor]) -> Option<f64> {
        self.menu_open = false;
        anchors
            .iter()
            .find(|anchor| anchor.id == id)
            .map(|anchor| self.scroll_target(anchor.offset_top))
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn on_resize(&mut self, viewport_width: f64) {
        if viewport_width >= MOBILE_BREAKPOINT_PX {
            self.menu_open = false;
        }
    }
}
