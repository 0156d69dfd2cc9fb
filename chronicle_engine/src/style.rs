//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn character_style(&self) -> ColoredString;
    fn enemy_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn quest_style(&self) -> ColoredString;
    fn quest_done_style(&self) -> ColoredString;
    fn quest_locked_style(&self) -> ColoredString;
    fn ability_style(&self) -> ColoredString;
    fn gold_style(&self) -> ColoredString;
    fn xp_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn character_style(&self) -> ColoredString {
        self.bold().truecolor(110, 220, 110)
    }
    fn enemy_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn quest_style(&self) -> ColoredString {
        self.truecolor(220, 40, 220)
    }
    fn quest_done_style(&self) -> ColoredString {
        self.truecolor(220, 40, 220).strikethrough()
    }
    fn quest_locked_style(&self) -> ColoredString {
        self.dimmed().truecolor(140, 140, 140)
    }
    fn ability_style(&self) -> ColoredString {
        self.italic().truecolor(75, 180, 255)
    }
    fn gold_style(&self) -> ColoredString {
        self.bold().truecolor(240, 200, 60)
    }
    fn xp_style(&self) -> ColoredString {
        self.truecolor(150, 230, 30)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn denied_style(&self) -> ColoredString {
        self.italic().truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn character_style(&self) -> ColoredString {
        self.as_str().character_style()
    }
    fn enemy_style(&self) -> ColoredString {
        self.as_str().enemy_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn quest_style(&self) -> ColoredString {
        self.as_str().quest_style()
    }
    fn quest_done_style(&self) -> ColoredString {
        self.as_str().quest_done_style()
    }
    fn quest_locked_style(&self) -> ColoredString {
        self.as_str().quest_locked_style()
    }
    fn ability_style(&self) -> ColoredString {
        self.as_str().ability_style()
    }
    fn gold_style(&self) -> ColoredString {
        self.as_str().gold_style()
    }
    fn xp_style(&self) -> ColoredString {
        self.as_str().xp_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
}

/// Wrapping options for ordinary paragraphs at terminal width.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth())
}

/// Wrapping options for indented detail text.
pub fn indented_block() -> Options<'static> {
    Options::new(termwidth()).initial_indent("    ").subsequent_indent("    ")
}
