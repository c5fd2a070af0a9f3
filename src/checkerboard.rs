//! Animated checkerboard.
//!
//! The cell width comes from an editable text field that is re-read on every
//! frame. Type digits to append, Backspace or Delete to remove the last one.

use bytemuck::{Pod, Zeroable};
use log::debug;
use winit::event::WindowEvent;

use crate::{
    app::Interactive,
    frame::{Frame, Scene},
};

/// Used whenever the field doesn't hold a usable width.
pub const FALLBACK_CELL_WIDTH: f32 = 1.0;

const BACKSPACE: char = '\u{8}';
// macOS reports the backspace key as DEL.
const DELETE: char = '\u{7f}';

/// Uniform bundle for `checkerboard.wgsl`.
#[repr(C)]
#[derive(Pod, Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct CheckerboardUniforms {
    pub time: f32,
    pub cell_width: f32,
    pub resolution_height: f32,
    pub padding: f32,
}

pub struct Checkerboard {
    field: String,
}

impl Checkerboard {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    #[cfg(test)]
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn cell_width(&self) -> f32 {
        parse_cell_width(&self.field)
    }

    fn type_character(&mut self, character: char) {
        match character {
            BACKSPACE | DELETE => {
                self.field.pop();
            }
            character if !character.is_control() => self.field.push(character),
            _ => return,
        }
        debug!("cell width field {:?}", self.field);
    }
}

impl Scene for Checkerboard {
    type Uniforms = CheckerboardUniforms;

    fn uniforms(&self, frame: &Frame) -> CheckerboardUniforms {
        CheckerboardUniforms {
            time: frame.time,
            cell_width: self.cell_width(),
            resolution_height: frame.size.height as f32,
            padding: 0.0,
        }
    }
}

impl Interactive for Checkerboard {
    const TITLE: &'static str = "checkerboard";
    const SHADER: &'static str = include_str!("checkerboard.wgsl");

    fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::ReceivedCharacter(character) = event {
            self.type_character(*character);
        }
    }
}

/// Read the leading integer of `text`, ignoring anything after it
/// (`"30px"` is 30). A `0x` prefix reads hexadecimal digits. Text without a
/// leading integer, or with a width that isn't positive, gives
/// [`FALLBACK_CELL_WIDTH`].
pub fn parse_cell_width(text: &str) -> f32 {
    let text = text.trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits) = match unsigned
        .strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
    {
        Some(rest) => (16, rest),
        None => (10, unsigned),
    };
    let digits_end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if digits_end == 0 || negative {
        return FALLBACK_CELL_WIDTH;
    }

    let width = digits[..digits_end]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |width: f32, digit| width * radix as f32 + digit as f32);
    if width > 0.0 {
        width
    } else {
        FALLBACK_CELL_WIDTH
    }
}
