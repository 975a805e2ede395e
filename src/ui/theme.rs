use crossterm::style::Color;
use logview::Status;

/// Terminal color for a status, mirroring the sidebar's hex colors.
pub fn status_color(status: Status) -> Color {
    match status {
        Status::Unknown => Color::DarkGrey,
        Status::Failure => Color::Red,
        Status::Override => Color::DarkYellow,
        Status::Retry => Color::Yellow,
        Status::Success => Color::Green,
    }
}

pub mod icons {
    pub const FILE: &str = "●";
    pub const FOLDER: &str = "▶";
    pub const BRANCH: &str = "├── ";
    pub const LAST_BRANCH: &str = "└── ";
    pub const PIPE: &str = "│   ";
    pub const SPACE: &str = "    ";
}

pub mod icons_ascii {
    pub const FILE: &str = "*";
    pub const FOLDER: &str = ">";
    pub const BRANCH: &str = "|-- ";
    pub const LAST_BRANCH: &str = "`-- ";
    pub const PIPE: &str = "|   ";
    pub const SPACE: &str = "    ";
}
