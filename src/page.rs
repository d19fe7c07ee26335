use crate::colour::Colour;
use crate::rect::Rect;
use crate::style::StyleId;
use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// One physical line of text, before it is given a position on a page
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct WrappedLine {
    pub text: String,
    pub style: StyleId,
    /// Index of the block this line was wrapped from. Cover and footer lines
    /// do not come from a block.
    pub block_index: Option<usize>,
}

/// A line with its position on the page. `y` is the top of the line box,
/// measured down from the top page edge; `x` is measured from the left edge.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct PlacedLine {
    pub x: Pt,
    pub y: Pt,
    #[serde(flatten)]
    pub line: WrappedLine,
}

impl PlacedLine {
    pub fn text(&self) -> &str {
        &self.line.text
    }

    pub fn style(&self) -> StyleId {
        self.line.style
    }

    pub fn is_footer(&self) -> bool {
        self.line.style == StyleId::Footer
    }
}

/// A filled rectangle drawn behind the text, such as the cover band
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Fill {
    pub rect: Rect,
    pub colour: Colour,
}

/// One laid out page. Lines are stored in reading order; the footer, once the
/// footer pass has run, is always the last line.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based position of the page in the document
    pub index: usize,
    pub lines: Vec<PlacedLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Fill>,
}

impl Page {
    pub fn new(index: usize) -> Page {
        Page {
            index,
            lines: Vec::new(),
            fills: Vec::new(),
        }
    }

    /// Whether nothing at all has been placed on the page
    pub fn is_blank(&self) -> bool {
        self.lines.is_empty() && self.fills.is_empty()
    }

    pub(crate) fn add_line(&mut self, line: PlacedLine) {
        self.lines.push(line);
    }

    pub(crate) fn add_fill(&mut self, fill: Fill) {
        self.fills.push(fill);
    }

    /// Every line except the footer
    pub fn content_lines(&self) -> impl Iterator<Item = &PlacedLine> {
        self.lines.iter().filter(|line| !line.is_footer())
    }

    pub fn footer(&self) -> Option<&PlacedLine> {
        self.lines.last().filter(|line| line.is_footer())
    }
}
