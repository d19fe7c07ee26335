//! Text measurement. The layout engine never looks at glyphs itself; it asks a
//! [TextMeasurer] how wide a string is in a given style and makes every
//! wrapping decision from that answer.

use crate::error::{LayoutError, Result};
use crate::style::TextStyle;
use crate::units::Pt;

/// Measures the rendered width of text, in the same units as the page geometry.
///
/// Implementations must be pure: the same text and style always give the same
/// width. Measurement is synchronous; anything that needs to load fonts or
/// talk to a renderer must do so before layout starts.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Pt;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &TextStyle) -> Pt,
{
    fn measure(&self, text: &str, style: &TextStyle) -> Pt {
        self(text, style)
    }
}

/// Measures every character as the same fraction of the font size, the way a
/// monospaced face would. Useful for plain-text previews and tests.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance of one character as a fraction of the font size
    pub advance: f32,
}

impl MonospaceMeasurer {
    pub fn new(advance: f32) -> Self {
        MonospaceMeasurer { advance }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        MonospaceMeasurer { advance: 0.6 }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Pt {
        style.size * (self.advance * text.chars().count() as f32)
    }
}

/// Measure `text` and reject widths that would corrupt wrapping decisions
pub(crate) fn checked_width<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    style: &TextStyle,
) -> Result<Pt> {
    let width = measurer.measure(text, style);
    if !width.is_finite() || width.0 < 0.0 {
        return Err(LayoutError::Measurement {
            text: text.to_string(),
            width: width.0,
        });
    }
    Ok(width)
}
