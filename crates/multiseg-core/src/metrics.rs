//! Fixed layout metrics for the segmented control.

use serde::{Deserialize, Serialize};

/// Height of one segment, before container padding.
pub const SEGMENT_HEIGHT: f32 = 30.0;

/// Padding between the container background and the segment run, per side.
pub const CONTAINER_PADDING: f32 = 2.0;

/// Corner radius of the container background.
pub const CONTAINER_CORNER_RADIUS: u8 = 8;

/// Corner radius of each segment.
pub const SEGMENT_CORNER_RADIUS: u8 = 8;

/// Icon edge length (icons are drawn aspect-fit inside a square this size).
pub const ICON_SIZE: f32 = 14.0;

/// Layout direction of the segment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Segments in a row.
    #[default]
    Horizontal,
    /// Segments in a column.
    Vertical,
}

impl Orientation {
    /// Gap between adjacent segments. The horizontal/vertical asymmetry is
    /// part of the visual design.
    pub fn spacing(self) -> f32 {
        match self {
            Orientation::Horizontal => 1.0,
            Orientation::Vertical => 2.0,
        }
    }
}

/// Content height of the control, excluding container padding.
///
/// A horizontal run always reserves one spacing unit of slack above the
/// segments; a vertical run reserves one per segment.
pub fn container_height(orientation: Orientation, segment_count: usize) -> f32 {
    let spacing = orientation.spacing();
    match orientation {
        Orientation::Horizontal => SEGMENT_HEIGHT + spacing,
        Orientation::Vertical => (SEGMENT_HEIGHT + spacing) * segment_count as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_asymmetry() {
        assert!((Orientation::Horizontal.spacing() - 1.0).abs() < f32::EPSILON);
        assert!((Orientation::Vertical.spacing() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_horizontal_height_ignores_count() {
        assert!((container_height(Orientation::Horizontal, 1) - 31.0).abs() < f32::EPSILON);
        assert!((container_height(Orientation::Horizontal, 5) - 31.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_vertical_height_scales_with_count() {
        for n in 0..6 {
            let expected = (SEGMENT_HEIGHT + 2.0) * n as f32;
            assert!((container_height(Orientation::Vertical, n) - expected).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_default_orientation_is_horizontal() {
        assert_eq!(Orientation::default(), Orientation::Horizontal);
    }
}
