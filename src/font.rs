use crate::{
    measure::TextMeasurer,
    style::{FontWeight, TextStyle},
    LayoutError, Pt,
};
use owned_ttf_parser::{AsFaceRef, OwnedFace};
use std::path::Path;

/// A parsed TrueType / OpenType font, used to measure text with real glyph
/// advances. Fonts are never embedded by this crate; the renderer is expected
/// to draw with the same faces that were used to measure.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LayoutError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file from disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Font, LayoutError> {
        let bytes = std::fs::read(path.as_ref())?;
        log::debug!("loaded {} bytes of font data from {}", bytes.len(), path.as_ref().display());
        Font::load(bytes)
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        let scaling: Pt = size / self.face.as_face_ref().units_per_em() as f32;
        scaling * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        let scaling: Pt = size / self.face.as_face_ref().units_per_em() as f32;
        let leading: Pt = scaling * self.face.as_face_ref().line_gap() as f32;
        let ascent: Pt = scaling * self.face.as_face_ref().ascender() as f32;
        let descent: Pt = scaling * self.face.as_face_ref().descender() as f32;
        leading + ascent - descent
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// Calculate the width of a given string of text given the font size. Characters the
    /// font has no glyph for are measured as the replacement glyph, which is what a
    /// renderer would end up drawing in their place.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let face = self.face.as_face_ref();
        let scaling = size / face.units_per_em() as f32;
        let replacement = self.replacement_glyph_id();
        text.chars()
            .filter_map(|ch| self.glyph_id(ch).or(replacement))
            .map(|gid| {
                scaling
                    * face
                        .glyph_hor_advance(owned_ttf_parser::GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}

/// Measures text with real font faces: one for regular text and one for bold
/// text (headings and the cover title)
pub struct FontMeasurer {
    pub regular: Font,
    pub bold: Font,
}

impl FontMeasurer {
    pub fn new(regular: Font, bold: Font) -> Self {
        FontMeasurer { regular, bold }
    }

    pub fn font_for(&self, weight: FontWeight) -> &Font {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

impl TextMeasurer for FontMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> Pt {
        self.font_for(style.weight).width_of_text(text, style.size)
    }
}
