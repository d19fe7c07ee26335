//! Layout parameters. Every threshold the pagination engine uses lives here as
//! a named value so it can be tuned per document without touching the engine.
//!
//! Configurations are plain serde structures and can be loaded from JSON.
//! Missing fields fall back to the defaults, which reproduce the look of the
//! generated policy documents: A4 paper, 20 mm side margins, navy headings.

use crate::colour::{colours, Colour};
use crate::error::{LayoutError, Result};
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::style::Stylesheet;
use crate::units::{Mm, Pt};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Size of the page and the margins that bound its printable area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
    pub margins: Margins,
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        PageGeometry {
            width: size.0,
            height: size.1,
            margins,
        }
    }

    /// Horizontal space available for text
    pub fn content_width(&self) -> Pt {
        self.width - self.margins.horizontal()
    }

    /// Vertical space available for text
    pub fn content_height(&self) -> Pt {
        self.height - self.margins.vertical()
    }

    /// Lowest y position the bottom of a content line may reach
    pub fn bottom_limit(&self) -> Pt {
        self.height - self.margins.bottom
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry::new(
            pagesize::A4,
            Margins::trbl(Mm(20.0).into(), Mm(20.0).into(), Mm(25.0).into(), Mm(20.0).into()),
        )
    }
}

/// Vertical and horizontal spacing between blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    /// Cursor advance for every blank input line
    pub blank_line: Pt,
    /// Extra space after each paragraph block
    pub paragraph_gap: Pt,
    /// Minimum space that must remain below a heading for it to stay on the
    /// current page
    pub heading_reserve: Pt,
    /// Left indent of bullet lines, also taken off their wrap width
    pub bullet_indent: Pt,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing {
            blank_line: Mm(5.0).into(),
            paragraph_gap: Mm(3.0).into(),
            heading_reserve: Mm(6.0).into(),
            bullet_indent: Mm(10.0).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Distance from the bottom page edge to the top of the footer line
    pub offset_from_bottom: Pt,
}

impl Default for FooterConfig {
    fn default() -> Self {
        FooterConfig {
            offset_from_bottom: Mm(15.0).into(),
        }
    }
}

/// Placement of the cover header drawn at the top of the first page. All
/// positions are measured from the top page edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    pub band_height: Pt,
    pub band_colour: Colour,
    pub title_y: Pt,
    pub subtitle_y: Pt,
    /// Top of the first metadata line; the others follow at the metadata line height
    pub meta_y: Pt,
    /// Where document content starts on the first page
    pub body_start: Pt,
}

impl CoverConfig {
    /// Number of metadata lines (generation date, document type, version)
    pub const META_LINES: usize = 3;
}

impl Default for CoverConfig {
    fn default() -> Self {
        CoverConfig {
            band_height: Mm(40.0).into(),
            band_colour: colours::NAVY,
            title_y: Mm(16.0).into(),
            subtitle_y: Mm(31.0).into(),
            meta_y: Mm(56.0).into(),
            body_start: Mm(80.0).into(),
        }
    }
}

/// Everything the layout engine needs besides the text and a measurer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page: PageGeometry,
    pub styles: Stylesheet,
    pub spacing: Spacing,
    /// Prefix given to the first line of every bullet
    pub bullet_glyph: String,
    pub footer: FooterConfig,
    pub cover: Option<CoverConfig>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page: PageGeometry::default(),
            styles: Stylesheet::default(),
            spacing: Spacing::default(),
            bullet_glyph: "• ".to_string(),
            footer: FooterConfig::default(),
            cover: None,
        }
    }
}

impl LayoutConfig {
    /// The default layout with the navy cover header on the first page
    pub fn policy_document() -> Self {
        LayoutConfig {
            cover: Some(CoverConfig::default()),
            ..LayoutConfig::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        LayoutConfig::from_json(&json)
    }

    /// Content width available to bullet lines
    pub fn bullet_width(&self) -> Pt {
        self.page.content_width() - self.spacing.bullet_indent
    }

    /// Check that the geometry can hold content. Layout refuses to run on an
    /// invalid configuration instead of looping or producing negative-size pages.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(LayoutError::InvalidGeometry(reason));
        let page = &self.page;

        if !page.width.is_finite() || !page.height.is_finite() || page.width.0 <= 0.0 || page.height.0 <= 0.0 {
            return invalid(format!("page size {} x {} must be positive", page.width, page.height));
        }
        if !page.margins.is_valid() {
            return invalid(format!("margins {:?} must be finite and non-negative", page.margins));
        }
        if page.content_width().0 <= 0.0 {
            return invalid(format!("content width {} must be positive", page.content_width()));
        }
        let spacing = [
            self.spacing.blank_line,
            self.spacing.paragraph_gap,
            self.spacing.heading_reserve,
            self.spacing.bullet_indent,
        ];
        if spacing.iter().any(|s| !s.is_finite() || s.0 < 0.0) {
            return invalid(format!("spacing {:?} must be finite and non-negative", self.spacing));
        }
        if self.bullet_width().0 <= 0.0 {
            return invalid(format!(
                "bullet indent {} leaves no room for bullet text",
                self.spacing.bullet_indent
            ));
        }
        for style in self.styles.iter() {
            if !style.size.is_finite() || !style.line_height.is_finite() || style.size.0 <= 0.0 || style.line_height.0 <= 0.0 {
                return invalid(format!("style {:?} needs a positive size and line height", style.id));
            }
        }
        let tallest = self.styles.tallest_content_line();
        if page.content_height() < tallest {
            return invalid(format!(
                "printable height {} cannot fit a {} line",
                page.content_height(),
                tallest
            ));
        }

        let footer = &self.footer;
        if footer.offset_from_bottom < self.styles.footer.line_height
            || footer.offset_from_bottom > page.margins.bottom
        {
            return invalid(format!(
                "footer offset {} must lie between the footer line height {} and the bottom margin {}",
                footer.offset_from_bottom, self.styles.footer.line_height, page.margins.bottom
            ));
        }

        if let Some(cover) = &self.cover {
            let meta_end = cover.meta_y + self.styles.cover_meta.line_height * CoverConfig::META_LINES as f32;
            if !(cover.title_y < cover.subtitle_y && cover.subtitle_y < cover.meta_y && meta_end <= cover.body_start) {
                return invalid("cover lines must be ordered title, subtitle, metadata, body".to_string());
            }
            if cover.body_start + tallest > page.bottom_limit() {
                return invalid(format!("cover body start {} leaves no room for content", cover.body_start));
            }
            if cover.band_height.0 < 0.0 || cover.band_height > page.height {
                return invalid(format!("cover band height {} must fit on the page", cover.band_height));
            }
        }

        Ok(())
    }
}
