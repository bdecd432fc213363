//! Named render boxes used by the editor

use std::fmt;

use clap::ValueEnum;

/// Where a chart is being drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Surface {
    /// Size used when the caller does not ask for one
    #[default]
    Default,
    /// Main slide canvas
    Editor,
    /// Full-slide preview and static export
    Preview,
    /// Sidebar thumbnail
    Thumbnail,
}

impl Surface {
    /// Width and height of the render box
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Surface::Default => (320.0, 220.0),
            Surface::Editor => (600.0, 300.0),
            Surface::Preview => (780.0, 350.0),
            Surface::Thumbnail => (150.0, 100.0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Surface::Default => "default",
            Surface::Editor => "editor",
            Surface::Preview => "preview",
            Surface::Thumbnail => "thumbnail",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
