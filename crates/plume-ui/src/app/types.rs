use std::path::PathBuf;

use plume_core::Config;

/// Launch options passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// File to open at startup
    pub file: Option<PathBuf>,
    /// Loaded configuration
    pub config: Config,
}

/// Menus in the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    File,
    Format,
}

impl TopMenu {
    pub const ALL: [TopMenu; 2] = [TopMenu::File, TopMenu::Format];

    pub fn label(&self) -> &'static str {
        match self {
            TopMenu::File => "File",
            TopMenu::Format => "Format",
        }
    }

    /// Horizontal offset of the dropdown under its title.
    pub fn dropdown_offset(&self) -> f32 {
        match self {
            TopMenu::File => 8.0,
            TopMenu::Format => 48.0,
        }
    }
}
