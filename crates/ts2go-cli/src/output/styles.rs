//! Style constants and clap help styling.

use anstyle::{AnsiColor, Color, Effects, Style};

const fn fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

pub(crate) const SUCCESS: Style = fg(AnsiColor::Green);

pub(crate) const ERROR: Style = fg(AnsiColor::Red);

pub(crate) const WARNING: Style = fg(AnsiColor::Yellow);

pub(crate) const HEADER: Style = Style::new().effects(Effects::BOLD);

/// Secondary information and hints.
pub(crate) const DIM: Style = Style::new().effects(Effects::DIMMED);

pub(crate) fn clap_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .header(fg(AnsiColor::Green).effects(Effects::BOLD))
        .usage(fg(AnsiColor::Green).effects(Effects::BOLD))
        .literal(fg(AnsiColor::Cyan))
        .placeholder(fg(AnsiColor::Cyan))
        .error(fg(AnsiColor::Red).effects(Effects::BOLD))
        .valid(fg(AnsiColor::Green))
        .invalid(fg(AnsiColor::Yellow))
}
