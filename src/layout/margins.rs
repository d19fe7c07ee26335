use crate::units::Pt;
use serde::{Deserialize, Serialize};

/// Margins bound the printable area of every page. The pagination engine never
/// places content lines above the top margin or below the bottom margin, and
/// wraps text to the width left between the side margins.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Pt, horizontal: Pt) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Pt(0.0))
    }

    /// Combined width of the left and right margins
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// Combined height of the top and bottom margins
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }

    fn iter(&self) -> impl Iterator<Item = Pt> {
        [self.top, self.right, self.bottom, self.left].into_iter()
    }

    /// Whether every margin is a finite, non-negative length
    pub fn is_valid(&self) -> bool {
        self.iter().all(|m| m.is_finite() && m.0 >= 0.0)
    }
}
