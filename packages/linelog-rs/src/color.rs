//! ANSI colorization of rendered header fields.

use serde::{Deserialize, Serialize};

/// The 8-color ANSI foreground palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

impl Color {
    /// ANSI foreground code for this color.
    pub fn code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::Gray => 37,
        }
    }

    /// Wrap `text` as `ESC[<code>m<text>ESC[0m`.
    pub fn paint(self, text: &str) -> String {
        format!("\x1b[{}m{}\x1b[0m", self.code(), text)
    }
}

/// Per-field color assignment for the rendered header.
///
/// A `None` entry leaves that field unpainted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorMap {
    pub app: Option<Color>,
    pub severity: Option<Color>,
    pub time: Option<Color>,
}

impl Default for ColorMap {
    fn default() -> Self {
        Self {
            app: Some(Color::Yellow),
            severity: Some(Color::Magenta),
            time: Some(Color::Cyan),
        }
    }
}

/// The rendered header fields of one log line, after colorization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub app: String,
    pub severity: String,
    pub time: String,
}

/// Colorizes header fields, or passes them through untouched.
///
/// The logger picks [`Colorizer::Palette`] automatically only when its sink
/// is an interactive terminal; an explicitly configured colorizer always
/// wins over that auto-detection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Colorizer {
    /// Pass-through: no escape codes, fields unchanged.
    #[default]
    NoOp,
    /// Wrap each field with its configured color, if any.
    Palette(ColorMap),
}

impl Colorizer {
    /// A palette colorizer with the default color map.
    pub fn default_palette() -> Self {
        Colorizer::Palette(ColorMap::default())
    }

    /// Produce the header for one log line.
    pub fn colorize(&self, app: &str, severity: &str, time: &str) -> Header {
        match self {
            Colorizer::NoOp => Header {
                app: app.to_string(),
                severity: severity.to_string(),
                time: time.to_string(),
            },
            Colorizer::Palette(map) => Header {
                app: paint_or_keep(map.app, app),
                severity: paint_or_keep(map.severity, severity),
                time: paint_or_keep(map.time, time),
            },
        }
    }
}

fn paint_or_keep(color: Option<Color>, text: &str) -> String {
    match color {
        Some(color) => color.paint(text),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_codes() {
        assert_eq!(Color::Black.code(), 30);
        assert_eq!(Color::Red.code(), 31);
        assert_eq!(Color::Green.code(), 32);
        assert_eq!(Color::Yellow.code(), 33);
        assert_eq!(Color::Blue.code(), 34);
        assert_eq!(Color::Magenta.code(), 35);
        assert_eq!(Color::Cyan.code(), 36);
        assert_eq!(Color::Gray.code(), 37);
    }

    #[test]
    fn test_paint_wraps_with_reset() {
        assert_eq!(Color::Red.paint("x"), "\x1b[31mx\x1b[0m");
    }

    #[test]
    fn test_noop_passes_fields_through() {
        let header = Colorizer::NoOp.colorize("app", "INFO", "2017-01-15 16:00:23 +0100");
        assert_eq!(header.app, "app");
        assert_eq!(header.severity, "INFO");
        assert_eq!(header.time, "2017-01-15 16:00:23 +0100");
        assert!(!header.app.contains('\x1b'));
    }

    #[test]
    fn test_default_palette_paints_app_yellow() {
        let header = Colorizer::default_palette().colorize("app", "INFO", "t");
        assert_eq!(header.app, "\x1b[33mapp\x1b[0m");
        assert_eq!(header.severity, "\x1b[35mINFO\x1b[0m");
        assert_eq!(header.time, "\x1b[36mt\x1b[0m");
    }

    #[test]
    fn test_unconfigured_fields_are_kept() {
        let map = ColorMap {
            app: Some(Color::Blue),
            severity: None,
            time: None,
        };
        let header = Colorizer::Palette(map).colorize("app", "INFO", "t");
        assert_eq!(header.app, "\x1b[34mapp\x1b[0m");
        assert_eq!(header.severity, "INFO");
        assert_eq!(header.time, "t");
    }
}
