use serde::{Deserialize, Serialize};

/// A colour, expressed in RGB or grey colour spaces. Colours are carried through
/// layout untouched so the renderer can apply them to each line
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// Colours used by the default policy stylesheet
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Main headings and the cover band
    pub const NAVY: Colour = Colour::RGB {
        r: 30.0 / 255.0,
        g: 58.0 / 255.0,
        b: 138.0 / 255.0,
    };
    /// Sub-headings
    pub const CHARCOAL: Colour = Colour::RGB {
        r: 51.0 / 255.0,
        g: 51.0 / 255.0,
        b: 51.0 / 255.0,
    };
    /// Cover metadata
    pub const SLATE: Colour = Colour::RGB {
        r: 100.0 / 255.0,
        g: 100.0 / 255.0,
        b: 100.0 / 255.0,
    };
    /// Footers
    pub const SILVER: Colour = Colour::RGB {
        r: 150.0 / 255.0,
        g: 150.0 / 255.0,
        b: 150.0 / 255.0,
    };
}
