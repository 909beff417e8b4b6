//! Theme modes, their fixed palettes, and the role lookup the page styles
//! are derived from.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "◐",
            Self::Dark => "◑",
        }
    }

    pub fn palette(self) -> &'static ThemePalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    fn spotlight_tint(self) -> &'static str {
        match self {
            Self::Light => "rgba(37, 99, 235, 0.08)",
            Self::Dark => "rgba(59, 130, 246, 0.15)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub card: &'static str,
    pub nav: &'static str,
    pub primary: &'static str,
    pub primary_hover: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub card_hover: &'static str,
}

pub const LIGHT_PALETTE: ThemePalette = ThemePalette {
    background: "#f8fafc",
    card: "#ffffff",
    nav: "rgba(248, 250, 252, 0.85)",
    primary: "#2563eb",
    primary_hover: "#1d4ed8",
    text_primary: "#0f172a",
    text_muted: "#475569",
    border: "#e2e8f0",
    card_hover: "#f1f5f9",
};

pub const DARK_PALETTE: ThemePalette = ThemePalette {
    background: "#020617",
    card: "#0f172a",
    nav: "rgba(2, 6, 23, 0.85)",
    primary: "#3b82f6",
    primary_hover: "#22d3ee",
    text_primary: "#f1f5f9",
    text_muted: "#94a3b8",
    border: "#334155",
    card_hover: "#1e293b",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeRole {
    Background,
    Card,
    Nav,
    Primary,
    PrimaryHover,
    TextPrimary,
    TextMuted,
    Border,
    CardHover,
}

impl ThemeRole {
    pub const ALL: [ThemeRole; 9] = [
        Self::Background,
        Self::Card,
        Self::Nav,
        Self::Primary,
        Self::PrimaryHover,
        Self::TextPrimary,
        Self::TextMuted,
        Self::Border,
        Self::CardHover,
    ];

    pub fn css_variable(self) -> &'static str {
        match self {
            Self::Background => "--color-background",
            Self::Card => "--color-card",
            Self::Nav => "--color-nav",
            Self::Primary => "--color-primary",
            Self::PrimaryHover => "--color-primary-hover",
            Self::TextPrimary => "--color-text-primary",
            Self::TextMuted => "--color-text-muted",
            Self::Border => "--color-border",
            Self::CardHover => "--color-card-hover",
        }
    }
}

pub fn resolve_style(role: ThemeRole, palette: &ThemePalette) -> &'static str {
    match role {
        ThemeRole::Background => palette.background,
        ThemeRole::Card => palette.card,
        ThemeRole::Nav => palette.nav,
        ThemeRole::Primary => palette.primary,
        ThemeRole::PrimaryHover => palette.primary_hover,
        ThemeRole::TextPrimary => palette.text_primary,
        ThemeRole::TextMuted => palette.text_muted,
        ThemeRole::Border => palette.border,
        ThemeRole::CardHover => palette.card_hover,
    }
}

/// Inline declaration block setting every role as a custom property, so a
/// single write on the document root recolors the whole page.
pub fn css_variables(palette: &ThemePalette) -> String {
    ThemeRole::ALL
        .iter()
        .map(|role| format!("{}: {};", role.css_variable(), resolve_style(*role, palette)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn spotlight_background(mode: ThemeMode, x: f64, y: f64) -> String {
    format!(
        "background: radial-gradient(circle 600px at {x:.0}px {y:.0}px, {}, transparent 80%);",
        mode.spotlight_tint()
    )
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeStore {
    mode: ThemeMode,
}

impl ThemeStore {
    pub fn current_mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &'static ThemePalette {
        self.mode.palette()
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_starts_light() {
        let store = ThemeStore::default();

        assert_eq!(store.current_mode(), ThemeMode::Light);
        assert_eq!(store.palette(), &LIGHT_PALETTE);
    }

    #[test]
    fn toggle_twice_restores_original_palette() {
        let mut store = ThemeStore::default();
        let original = *store.palette();

        store.toggle();
        assert_eq!(store.current_mode(), ThemeMode::Dark);
        assert_eq!(store.palette(), &DARK_PALETTE);

        store.toggle();
        assert_eq!(*store.palette(), original);
    }

    #[test]
    fn resolve_style_reads_the_matching_role() {
        assert_eq!(resolve_style(ThemeRole::Primary, &DARK_PALETTE), "#3b82f6");
        assert_eq!(resolve_style(ThemeRole::TextMuted, &LIGHT_PALETTE), "#475569");
        assert_eq!(resolve_style(ThemeRole::CardHover, &DARK_PALETTE), DARK_PALETTE.card_hover);
    }

    #[test]
    fn css_variables_cover_every_role() {
        let declarations = css_variables(&LIGHT_PALETTE);

        for role in ThemeRole::ALL {
            assert!(declarations.contains(role.css_variable()), "missing {}", role.css_variable());
        }
        assert!(declarations.starts_with("--color-background: #f8fafc;"));
    }

    #[test]
    fn toggle_label_names_the_next_mode() {
        assert_eq!(ThemeMode::Light.toggle_label(), "Switch to dark theme");
        assert!(ThemeMode::Dark.pressed());
        assert!(!ThemeMode::Light.pressed());
    }

    #[test]
    fn spotlight_tracks_pointer_position() {
        let style = spotlight_background(ThemeMode::Dark, 120.4, 48.6);

        assert!(style.contains("at 120px 49px"));
        assert!(style.contains("rgba(59, 130, 246, 0.15)"));
    }
}
