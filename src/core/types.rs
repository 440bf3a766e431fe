use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Pixel length of the viewport along `axis`.
    #[must_use]
    pub fn extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => f64::from(self.width),
            Axis::Vertical => f64::from(self.height),
        }
    }
}

/// Measurement direction. Horizontal maps to x, vertical maps to y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}
