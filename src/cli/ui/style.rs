use std::{env, io::IsTerminal};

use colored::{Color, Colorize};

use duesboard_config::{Config, Theme};

/// Resolved presentation settings for one invocation. Built once from the
/// loaded configuration and passed into the renderers; there is no ambient
/// style state.
#[derive(Debug, Clone)]
pub struct UiStyle {
    pub header_prefix: String,
    pub horizontal: char,
    pub line_width: usize,
    pub use_color: bool,
    pub color_header: Option<Color>,
    pub color_ok: Option<Color>,
    pub color_due: Option<Color>,
    pub plain_mode: bool,
    pub use_icons: bool,
}

impl UiStyle {
    pub fn from_config(config: &Config) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = env::var_os("NO_COLOR").is_some();
        let plain_mode = config.theme == Theme::Plain;
        let use_color = stdout_tty && config.ui_color_enabled && !plain_mode && !no_color;
        let use_icons = !plain_mode;

        let header_prefix = if plain_mode { "> ".into() } else { "⮞ ".into() };

        Self {
            header_prefix,
            horizontal: '─',
            line_width: terminal_width(),
            use_color,
            color_header: if use_color {
                Some(Color::BrightBlue)
            } else {
                None
            },
            color_ok: if use_color { Some(Color::Green) } else { None },
            color_due: if use_color { Some(Color::Red) } else { None },
            plain_mode,
            use_icons,
        }
    }

    /// Section header with the themed prefix.
    pub fn header(&self, text: &str) -> String {
        let line = format!("{}{}", self.header_prefix, text);
        match self.color_header {
            Some(color) => line.color(color).bold().to_string(),
            None => line,
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        self.horizontal.to_string().repeat(width.max(40))
    }

    pub fn ok(&self, text: &str) -> String {
        match self.color_ok {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }

    pub fn due(&self, text: &str) -> String {
        match self.color_due {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }

    /// Separator between inline facts, plainer without icons.
    pub fn separator(&self) -> &'static str {
        if self.use_icons {
            " • "
        } else {
            " | "
        }
    }
}

fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(width, _)| usize::from(width).clamp(40, 96))
        .unwrap_or(60)
}
