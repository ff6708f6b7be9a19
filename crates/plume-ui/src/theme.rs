//! Color palettes for the editor window.
//!
//! ## Learning: Const Constructors
//!
//! `Color::rgb` is a `const fn`, so palettes are plain data built without
//! any runtime work:
//! ```rust,ignore
//! let theme = Theme::from_dark_flag(config.ui.dark);
//! let bg = theme.background.primary.to_iced();
//! ```

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to iced Color.
    pub fn to_iced(&self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Editor theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Is this a dark theme?
    pub is_dark: bool,

    /// Background colors
    pub background: BackgroundColors,

    /// Foreground colors
    pub foreground: ForegroundColors,

    /// UI element colors
    pub ui: UiColors,
}

/// Background colors.
#[derive(Debug, Clone)]
pub struct BackgroundColors {
    /// Text area
    pub primary: Color,
    /// Menu and status bars
    pub secondary: Color,
    /// Open menu title
    pub active: Color,
    pub hover: Color,
    pub selection: Color,
}

/// Foreground (text) colors.
#[derive(Debug, Clone)]
pub struct ForegroundColors {
    pub primary: Color,
    pub secondary: Color,
    pub muted: Color,
}

/// UI element colors.
#[derive(Debug, Clone)]
pub struct UiColors {
    pub border: Color,
    pub divider: Color,
}

impl Theme {
    /// Creates the dark theme.
    pub fn dark() -> Self {
        Self {
            name: "Plume Dark".to_string(),
            is_dark: true,
            background: BackgroundColors {
                primary: Color::rgb(0.10, 0.10, 0.12),
                secondary: Color::rgb(0.14, 0.14, 0.16),
                active: Color::rgb(0.22, 0.22, 0.25),
                hover: Color::rgb(0.20, 0.20, 0.23),
                selection: Color::rgba(0.25, 0.46, 0.85, 0.55),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.9, 0.9, 0.9),
                secondary: Color::rgb(0.7, 0.7, 0.7),
                muted: Color::rgb(0.5, 0.5, 0.5),
            },
            ui: UiColors {
                border: Color::rgb(0.25, 0.25, 0.28),
                divider: Color::rgb(0.2, 0.2, 0.22),
            },
        }
    }

    /// Creates the light theme.
    pub fn light() -> Self {
        Self {
            name: "Plume Light".to_string(),
            is_dark: false,
            background: BackgroundColors {
                primary: Color::rgb(1.0, 1.0, 1.0),
                secondary: Color::rgb(0.95, 0.95, 0.95),
                active: Color::rgb(0.85, 0.85, 0.88),
                hover: Color::rgb(0.90, 0.90, 0.92),
                selection: Color::rgba(0.3, 0.5, 0.8, 0.35),
            },
            foreground: ForegroundColors {
                primary: Color::rgb(0.1, 0.1, 0.1),
                secondary: Color::rgb(0.3, 0.3, 0.3),
                muted: Color::rgb(0.5, 0.5, 0.5),
            },
            ui: UiColors {
                border: Color::rgb(0.8, 0.8, 0.8),
                divider: Color::rgb(0.88, 0.88, 0.88),
            },
        }
    }

    /// Picks the palette for the `ui.dark` config flag.
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    /// The built-in iced theme that matches this palette, used for widgets
    /// we don't style by hand (checkboxes, scrollbars).
    pub fn iced_theme(&self) -> iced::Theme {
        if self.is_dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
