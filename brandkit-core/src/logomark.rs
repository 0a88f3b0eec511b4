use serde::{Deserialize, Serialize};

use crate::geometry::RoundedRect;

/// The five stacked bars forming the abstract "B" mark, top to bottom.
const BARS: [RoundedRect; 5] = [
    RoundedRect::new(0.0, 0.0, 31.5, 8.2, 4.1),
    RoundedRect::new(8.2, 10.3, 30.2, 8.2, 4.1),
    RoundedRect::new(0.0, 20.6, 24.7, 6.9, 3.4),
    RoundedRect::new(8.2, 29.5, 37.0, 8.2, 4.1),
    RoundedRect::new(0.0, 39.8, 34.3, 8.2, 4.1),
];

/// Fixed geometry of the logomark. A design constant, never computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogomarkSpec {
    pub width: f64,
    pub height: f64,
    pub rects: Vec<RoundedRect>,
}

impl LogomarkSpec {
    /// The "B" logomark, 45.2 × 48 units.
    pub fn standard() -> Self {
        Self {
            width: 45.2,
            height: 48.0,
            rects: BARS.to_vec(),
        }
    }
}

impl Default for LogomarkSpec {
    fn default() -> Self {
        Self::standard()
    }
}
