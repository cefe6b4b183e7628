#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
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
        matches!(self, Self::Light)
    }

    /// Shows the theme the button switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }

    pub fn glow_color(self) -> &'static str {
        match self {
            Self::Dark => "rgba(99, 102, 241, 0.8)",
            Self::Light => "rgba(255, 165, 0, 0.7)",
        }
    }

    pub fn glow_shadow(self) -> &'static str {
        match self {
            Self::Dark => "0 0 3px #6366f1, 0 0 6px #6366f1",
            Self::Light => "0 0 3px #ffa500, 0 0 6px #ffa500",
        }
    }
}

/// How a theme change reaches the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeSwitch {
    Animated,
    Immediate,
}

impl ThemeSwitch {
    pub fn choose(reduced_motion: bool, view_transitions: bool) -> Self {
        if view_transitions && !reduced_motion {
            Self::Animated
        } else {
            Self::Immediate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_switch_animates_only_when_supported_and_allowed() {
        assert_eq!(ThemeSwitch::choose(false, true), ThemeSwitch::Animated);
        assert_eq!(ThemeSwitch::choose(true, true), ThemeSwitch::Immediate);
        assert_eq!(ThemeSwitch::choose(false, false), ThemeSwitch::Immediate);
        assert_eq!(ThemeSwitch::choose(true, false), ThemeSwitch::Immediate);
    }

    #[test]
    fn session_starts_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn toggling_twice_restores_theme() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark theme");
    }

    #[test]
    fn glow_differs_per_theme() {
        assert_ne!(Theme::Dark.glow_color(), Theme::Light.glow_color());
        assert!(Theme::Light.glow_shadow().contains("#ffa500"));
    }
}
