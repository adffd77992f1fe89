#![doc = include_str!("../README.md")]

mod color;
mod prompt;

pub use color::{Color, install_color_eyre};
pub use prompt::{Prompter, TerminalPrompter, parse_yes_no};
