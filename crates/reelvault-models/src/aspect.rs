//! Aspect-ratio classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse aspect-ratio bucket for a video stream.
///
/// The bands are intentionally narrow around 16:9 (1.778) and 9:16
/// (0.5625); near-square and unusual ratios land in `Other`. The
/// constants are frozen: downstream storage paths depend on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectClass {
    Landscape,
    Portrait,
    Other,
}

impl AspectClass {
    /// Classify a stream's pixel dimensions.
    ///
    /// Both band edges are inclusive. Degenerate dimensions (a zero
    /// width or height) fall through to `Other`.
    pub fn classify(width: u32, height: u32) -> Self {
        let ratio = f64::from(width) / f64::from(height);
        if (1.70..=1.80).contains(&ratio) {
            AspectClass::Landscape
        } else if (0.55..=0.57).contains(&ratio) {
            AspectClass::Portrait
        } else {
            AspectClass::Other
        }
    }

    /// Storage-path prefix for this class.
    pub fn prefix(&self) -> &'static str {
        match self {
            AspectClass::Landscape => "landscape",
            AspectClass::Portrait => "portrait",
            AspectClass::Other => "other",
        }
    }
}

impl fmt::Display for AspectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_resolutions() {
        assert_eq!(AspectClass::classify(1920, 1080), AspectClass::Landscape);
        assert_eq!(AspectClass::classify(1280, 720), AspectClass::Landscape);
        assert_eq!(AspectClass::classify(1080, 1920), AspectClass::Portrait);
        assert_eq!(AspectClass::classify(720, 1280), AspectClass::Portrait);
        assert_eq!(AspectClass::classify(1000, 1000), AspectClass::Other);
        assert_eq!(AspectClass::classify(640, 480), AspectClass::Other);
    }

    #[test]
    fn test_landscape_band_edges_inclusive() {
        // ratio exactly 1.70 and 1.80
        assert_eq!(AspectClass::classify(170, 100), AspectClass::Landscape);
        assert_eq!(AspectClass::classify(180, 100), AspectClass::Landscape);
        // just outside the band
        assert_eq!(AspectClass::classify(169, 100), AspectClass::Other);
        assert_eq!(AspectClass::classify(181, 100), AspectClass::Other);
    }

    #[test]
    fn test_portrait_band_edges_inclusive() {
        // ratio exactly 0.55 and 0.57
        assert_eq!(AspectClass::classify(55, 100), AspectClass::Portrait);
        assert_eq!(AspectClass::classify(57, 100), AspectClass::Portrait);
        // just outside the band
        assert_eq!(AspectClass::classify(54, 100), AspectClass::Other);
        assert_eq!(AspectClass::classify(58, 100), AspectClass::Other);
    }

    #[test]
    fn test_degenerate_dimensions_are_other() {
        assert_eq!(AspectClass::classify(0, 0), AspectClass::Other);
        assert_eq!(AspectClass::classify(1920, 0), AspectClass::Other);
        assert_eq!(AspectClass::classify(0, 1080), AspectClass::Other);
    }

    #[test]
    fn test_prefix_values() {
        assert_eq!(AspectClass::Landscape.prefix(), "landscape");
        assert_eq!(AspectClass::Portrait.prefix(), "portrait");
        assert_eq!(AspectClass::Other.prefix(), "other");
    }
}
