//! Theme system
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Built-in presets (darkwall, catppuccin, nord, gruvbox)
//! - Day cell style resolution (weekend, other month, category tags)
//! - Hex color parsing

use ratatui::style::{Color, Modifier, Style};

use crate::calendar::CellView;
use crate::event::Category;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Primary text color
    pub foreground: Color,
    /// Background for the cursor cell and focused buttons
    pub selection_bg: Color,
    /// Text color for the cursor cell and focused buttons
    pub selection_fg: Color,
    /// Accent color (borders, headers, selected day)
    pub accent: Color,
    /// Dimmed text (hints, week numbers)
    pub dimmed: Color,
    /// Days of the adjacent months
    pub other_month: Color,
    /// Weekend day numbers
    pub weekend: Color,
    /// Weekend days of the adjacent months
    pub weekend_other_month: Color,
    /// Error notices
    pub error: Color,
    /// Exam tag background
    pub exam: Color,
    /// Homework tag background
    pub homework: Color,
    /// Quiz tag background
    pub quiz: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::darkwall()
    }
}

impl Theme {
    /// Darkwall theme - default
    pub fn darkwall() -> Self {
        Self {
            background: Color::Rgb(13, 17, 22),      // #0d1116
            foreground: Color::Rgb(229, 234, 241),   // #e5eaf1
            selection_bg: Color::Rgb(20, 28, 42),    // #141c2a
            selection_fg: Color::Rgb(229, 234, 241), // #e5eaf1
            accent: Color::Rgb(34, 197, 94),         // #22c55e (green)
            dimmed: Color::Rgb(156, 163, 175),       // #9ca3af
            other_month: Color::Rgb(107, 114, 128),  // #6b7280
            weekend: Color::Rgb(248, 113, 113),      // #f87171
            weekend_other_month: Color::Rgb(153, 84, 84), // #995454
            error: Color::Rgb(239, 68, 68),          // #ef4444
            exam: Color::Rgb(127, 29, 29),           // #7f1d1d
            homework: Color::Rgb(30, 58, 138),       // #1e3a8a
            quiz: Color::Rgb(120, 53, 15),           // #78350f
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            background: Color::Rgb(30, 30, 46),       // #1e1e2e (base)
            foreground: Color::Rgb(205, 214, 244),    // #cdd6f4 (text)
            selection_bg: Color::Rgb(49, 50, 68),     // #313244 (surface0)
            selection_fg: Color::Rgb(205, 214, 244),  // #cdd6f4 (text)
            accent: Color::Rgb(166, 227, 161),        // #a6e3a1 (green)
            dimmed: Color::Rgb(166, 173, 200),        // #a6adc8 (subtext0)
            other_month: Color::Rgb(108, 112, 134),   // #6c7086 (overlay0)
            weekend: Color::Rgb(243, 139, 168),       // #f38ba8 (red)
            weekend_other_month: Color::Rgb(146, 96, 120), // red over overlay0
            error: Color::Rgb(243, 139, 168),         // #f38ba8 (red)
            exam: Color::Rgb(88, 44, 60),             // red over base
            homework: Color::Rgb(40, 52, 92),         // blue over base
            quiz: Color::Rgb(86, 70, 48),             // peach over base
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),       // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),    // #eceff4 (nord6)
            selection_bg: Color::Rgb(67, 76, 94),     // #434c5e (nord2)
            selection_fg: Color::Rgb(236, 239, 244),  // #eceff4 (nord6)
            accent: Color::Rgb(136, 192, 208),        // #88c0d0 (nord8)
            dimmed: Color::Rgb(216, 222, 233),        // #d8dee9 (nord4)
            other_month: Color::Rgb(76, 86, 106),     // #4c566a (nord3)
            weekend: Color::Rgb(208, 135, 112),       // #d08770 (nord12)
            weekend_other_month: Color::Rgb(142, 104, 100), // nord12 over nord3
            error: Color::Rgb(191, 97, 106),          // #bf616a (nord11)
            exam: Color::Rgb(191, 97, 106),           // #bf616a (nord11)
            homework: Color::Rgb(94, 129, 172),       // #5e81ac (nord10)
            quiz: Color::Rgb(180, 142, 173),          // #b48ead (nord15)
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),       // #282828 (bg)
            foreground: Color::Rgb(235, 219, 178),    // #ebdbb2 (fg)
            selection_bg: Color::Rgb(60, 56, 54),     // #3c3836 (bg1)
            selection_fg: Color::Rgb(235, 219, 178),  // #ebdbb2 (fg)
            accent: Color::Rgb(152, 151, 26),         // #98971a (green)
            dimmed: Color::Rgb(168, 153, 132),        // #a89984 (gray)
            other_month: Color::Rgb(102, 92, 84),     // #665c54 (bg3)
            weekend: Color::Rgb(251, 73, 52),         // #fb4934 (bright red)
            weekend_other_month: Color::Rgb(157, 0, 6),   // #9d0006 (faded red)
            error: Color::Rgb(204, 36, 29),           // #cc241d (red)
            exam: Color::Rgb(157, 0, 6),              // #9d0006 (faded red)
            homework: Color::Rgb(7, 102, 120),        // #076678 (faded blue)
            quiz: Color::Rgb(181, 118, 20),           // #b57614 (faded yellow)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "darkwall" | "default" => Some(Self::darkwall()),
            "catppuccin-mocha" | "catppuccin_mocha" | "catppuccin" => Some(Self::catppuccin_mocha()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }

    /// Background color for a category tag
    pub fn tag_color(&self, tag: &str) -> Option<Color> {
        match tag.parse::<Category>().ok()? {
            Category::Exam => Some(self.exam),
            Category::Homework => Some(self.homework),
            Category::Quiz => Some(self.quiz),
        }
    }

    /// Override a category tag color. Unknown tags are ignored.
    pub fn set_tag_color(&mut self, tag: &str, color: Color) {
        match tag.parse::<Category>() {
            Ok(Category::Exam) => self.exam = color,
            Ok(Category::Homework) => self.homework = color,
            Ok(Category::Quiz) => self.quiz = color,
            Err(e) => tracing::warn!("{}", e),
        }
    }

    /// Style layered over a cell that carries a tag
    pub fn tag_style(&self, tag: &str) -> Option<Style> {
        self.tag_color(tag)
            .map(|bg| Style::default().bg(bg).add_modifier(Modifier::BOLD))
    }

    /// Full style of a day cell: base style patched with its tag style
    pub fn cell_style(&self, cell: &CellView) -> Style {
        let fg = match (cell.is_weekend, cell.is_other_month) {
            (true, true) => self.weekend_other_month,
            (false, true) => self.other_month,
            (true, false) => self.weekend,
            (false, false) => self.foreground,
        };
        let base = Style::default().fg(fg).bg(self.background);

        match cell.tag.as_deref().and_then(|t| self.tag_style(t)) {
            Some(tag) => base.patch(tag),
            None => base,
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    match s.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = u8::from_str_radix(&s[0..1], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[1..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[2..3], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r * 17, g * 17, b * 17))
        }
        // #rrggbb
        6 => {
            let r = u8::from_str_radix(&s[0..2], 16).map_err(|_| ColorError::InvalidHex)?;
            let g = u8::from_str_radix(&s[2..4], 16).map_err(|_| ColorError::InvalidHex)?;
            let b = u8::from_str_radix(&s[4..6], 16).map_err(|_| ColorError::InvalidHex)?;
            Ok(Color::Rgb(r, g, b))
        }
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3 or 6 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}
