//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::draw::{BACKGROUND, Color};

/// Drawing tool selection.
///
/// Both tools draw freehand strokes; the eraser simply paints with the
/// canvas background color instead of the selected color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand pen in the selected color
    #[default]
    Pen,
    /// Pen fixed to the background color
    Eraser,
}

impl Tool {
    /// Color a stroke made with this tool actually paints.
    pub fn stroke_color(self, selected: Color) -> Color {
        match self {
            Tool::Pen => selected,
            Tool::Eraser => BACKGROUND,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Eraser => "eraser",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, WHITE};

    #[test]
    fn eraser_paints_background() {
        assert_eq!(Tool::Pen.stroke_color(RED), RED);
        assert_eq!(Tool::Eraser.stroke_color(RED), WHITE);
    }
}
