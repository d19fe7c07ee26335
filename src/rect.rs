use crate::units::*;
use serde::{Deserialize, Serialize};

/// A rectangle, specified by two opposite corners. Coordinates follow the
/// layout convention: x grows to the right from the left page edge, y grows
/// downwards from the top page edge.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// The x-coordinate of the top-left corner.
    pub x1: Pt,
    /// The y-coordinate of the top-left corner.
    pub y1: Pt,
    /// The x-coordinate of the bottom-right corner.
    pub x2: Pt,
    /// The y-coordinate of the bottom-right corner.
    pub y2: Pt,
}

impl Rect {
    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}
