//! Text styles. Every line the layout engine produces carries a [StyleId];
//! the [Stylesheet] resolves it to the font, size, colour and line height used
//! both for measuring and for rendering.

use crate::colour::{colours, Colour};
use crate::layout::BlockKind;
use crate::units::{Mm, Pt};
use serde::{Deserialize, Serialize};

/// Identifies the style of a laid out line
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleId {
    Heading1,
    Heading2,
    Bullet,
    Paragraph,
    Footer,
    CoverTitle,
    CoverSubtitle,
    CoverMeta,
}

impl StyleId {
    /// The style used for the lines of a content block. Blank blocks never
    /// produce lines and so have no style.
    pub fn for_block(kind: BlockKind) -> Option<StyleId> {
        match kind {
            BlockKind::Heading1 => Some(StyleId::Heading1),
            BlockKind::Heading2 => Some(StyleId::Heading2),
            BlockKind::Bullet => Some(StyleId::Bullet),
            BlockKind::Paragraph => Some(StyleId::Paragraph),
            BlockKind::Blank => None,
        }
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font attributes of a style plus the vertical advance of one of its lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub id: StyleId,
    #[serde(default)]
    pub weight: FontWeight,
    pub size: Pt,
    #[serde(default)]
    pub colour: Colour,
    /// How far the cursor moves down after a line in this style
    pub line_height: Pt,
}

impl TextStyle {
    pub fn new(id: StyleId, weight: FontWeight, size: Pt, line_height: Pt, colour: Colour) -> Self {
        TextStyle {
            id,
            weight,
            size,
            colour,
            line_height,
        }
    }
}

/// One [TextStyle] for every [StyleId]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stylesheet {
    pub heading1: TextStyle,
    pub heading2: TextStyle,
    pub bullet: TextStyle,
    pub paragraph: TextStyle,
    pub footer: TextStyle,
    pub cover_title: TextStyle,
    pub cover_subtitle: TextStyle,
    pub cover_meta: TextStyle,
}

impl Stylesheet {
    pub fn get(&self, id: StyleId) -> &TextStyle {
        match id {
            StyleId::Heading1 => &self.heading1,
            StyleId::Heading2 => &self.heading2,
            StyleId::Bullet => &self.bullet,
            StyleId::Paragraph => &self.paragraph,
            StyleId::Footer => &self.footer,
            StyleId::CoverTitle => &self.cover_title,
            StyleId::CoverSubtitle => &self.cover_subtitle,
            StyleId::CoverMeta => &self.cover_meta,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextStyle> {
        [
            &self.heading1,
            &self.heading2,
            &self.bullet,
            &self.paragraph,
            &self.footer,
            &self.cover_title,
            &self.cover_subtitle,
            &self.cover_meta,
        ]
        .into_iter()
    }

    /// Tallest line height of the styles used for document content
    pub fn tallest_content_line(&self) -> Pt {
        [
            self.heading1.line_height,
            self.heading2.line_height,
            self.bullet.line_height,
            self.paragraph.line_height,
        ]
        .into_iter()
        .fold(Pt(0.0), Pt::max)
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        use FontWeight::*;
        Stylesheet {
            heading1: TextStyle::new(StyleId::Heading1, Bold, Pt(16.0), Mm(15.0).into(), colours::NAVY),
            heading2: TextStyle::new(StyleId::Heading2, Bold, Pt(13.0), Mm(12.0).into(), colours::CHARCOAL),
            bullet: TextStyle::new(StyleId::Bullet, Regular, Pt(11.0), Mm(6.0).into(), colours::BLACK),
            paragraph: TextStyle::new(StyleId::Paragraph, Regular, Pt(11.0), Mm(6.0).into(), colours::BLACK),
            footer: TextStyle::new(StyleId::Footer, Regular, Pt(9.0), Mm(4.0).into(), colours::SILVER),
            cover_title: TextStyle::new(StyleId::CoverTitle, Bold, Pt(24.0), Mm(10.0).into(), colours::WHITE),
            cover_subtitle: TextStyle::new(StyleId::CoverSubtitle, Regular, Pt(12.0), Mm(5.0).into(), colours::WHITE),
            cover_meta: TextStyle::new(StyleId::CoverMeta, Regular, Pt(10.0), Mm(5.0).into(), colours::SLATE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_resolves_to_itself() {
        let sheet = Stylesheet::default();
        for style in sheet.iter() {
            assert_eq!(sheet.get(style.id).id, style.id);
        }
    }

    #[test]
    fn blank_blocks_have_no_style() {
        assert_eq!(StyleId::for_block(BlockKind::Blank), None);
        assert_eq!(StyleId::for_block(BlockKind::Bullet), Some(StyleId::Bullet));
    }

    #[test]
    fn headings_are_the_tallest_default_lines() {
        let sheet = Stylesheet::default();
        assert_eq!(sheet.tallest_content_line(), sheet.heading1.line_height);
    }
}
