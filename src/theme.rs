use log::warn;
use web_sys::window;

pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Font Awesome icon for the toggle button: the mode you would switch to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Mirrors the theme onto `<body>` so page-wide styles can key off it.
pub fn apply_to_body(theme: Theme) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        warn!("No document body to apply theme to");
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force(DARK_THEME_CLASS, theme.is_dark()) {
        warn!("Failed to toggle {} class: {:?}", DARK_THEME_CLASS, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_theme() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn icon_follows_mode() {
        assert_eq!(Theme::default().toggle_icon(), "fas fa-moon");
        assert_eq!(Theme::Dark.toggle_icon(), "fas fa-sun");
    }
}
