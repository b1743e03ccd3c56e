//! Visual state derivation: grayscale fills, shadows, content offsets.
//!
//! Everything here is a pure function of the toggle state and the ambient
//! color scheme, so the widget crate only has to translate the results into
//! paint calls.

use serde::{Deserialize, Serialize};

/// Default base tint for inactive segments and the container background.
pub const DEFAULT_GRAYSCALE_WHITE: f32 = 0.8;

/// How much lighter inactive segments (and the container background) are
/// drawn relative to the base tint.
pub const INACTIVE_LIFT: f32 = 0.1;

/// The ambient appearance signal, passed down explicitly at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScheme {
    Light,
    Dark,
    /// The host could not determine the appearance.
    Unknown,
}

/// Which way a segment shadow is cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowDirection {
    /// Cast outward; the segment reads as raised.
    Drop,
    /// Cast inward; the segment reads as pressed.
    Inset,
}

/// Shadow parameters for one segment. The color is always black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowSpec {
    pub direction: ShadowDirection,
    pub blur: u8,
    pub offset: [i8; 2],
}

/// Resolve the caller-supplied tint against the ambient color scheme.
///
/// Dark appearance ignores the supplied tint and tints from black so the
/// control stays legible; an unknown appearance keeps the supplied tint.
pub fn effective_white(scheme: ColorScheme, grayscale_white_amount: f32) -> f32 {
    match scheme {
        ColorScheme::Light => grayscale_white_amount,
        ColorScheme::Dark => 0.0,
        ColorScheme::Unknown => grayscale_white_amount,
    }
}

/// Grayscale fill for one segment. Inactive segments sit slightly lighter
/// than active ones.
pub fn segment_fill(is_active: bool, white: f32) -> f32 {
    if is_active {
        white
    } else {
        white + INACTIVE_LIFT
    }
}

/// Grayscale fill for the container background.
pub fn container_fill(white: f32) -> f32 {
    white + INACTIVE_LIFT
}

/// Shadow treatment for one segment: pressed segments get an inset shadow,
/// raised segments a drop shadow, otherwise identical.
pub fn segment_shadow(is_active: bool) -> ShadowSpec {
    ShadowSpec {
        direction: if is_active {
            ShadowDirection::Inset
        } else {
            ShadowDirection::Drop
        },
        blur: 1,
        offset: [1, 1],
    }
}

/// Label/icon offset reinforcing the pressed illusion.
pub fn content_offset(is_active: bool) -> (f32, f32) {
    if is_active { (-1.0, -1.0) } else { (0.0, 0.0) }
}

/// Quantize a grayscale level to a u8 channel value, clamping to [0, 1].
pub fn gray_byte(white: f32) -> u8 {
    (white.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_levels_at_default_tint() {
        assert!((segment_fill(true, 0.8) - 0.8).abs() < f32::EPSILON);
        assert!((segment_fill(false, 0.8) - 0.9).abs() < f32::EPSILON);
        assert!((container_fill(0.8) - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_dark_scheme_overrides_supplied_tint() {
        assert!(effective_white(ColorScheme::Dark, 0.8).abs() < f32::EPSILON);
        // Background then derives from black, not from the caller's tint.
        let bg = container_fill(effective_white(ColorScheme::Dark, 0.8));
        assert!((bg - INACTIVE_LIFT).abs() < f32::EPSILON);
    }

    #[test]
    fn test_light_and_unknown_keep_supplied_tint() {
        assert!((effective_white(ColorScheme::Light, 0.8) - 0.8).abs() < f32::EPSILON);
        assert!((effective_white(ColorScheme::Unknown, 0.8) - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn test_shadow_direction_tracks_state() {
        let pressed = segment_shadow(true);
        let raised = segment_shadow(false);
        assert_eq!(pressed.direction, ShadowDirection::Inset);
        assert_eq!(raised.direction, ShadowDirection::Drop);
        // Same geometry either way.
        assert_eq!(pressed.blur, raised.blur);
        assert_eq!(pressed.offset, raised.offset);
        assert_eq!(raised.offset, [1, 1]);
    }

    #[test]
    fn test_content_offset() {
        assert_eq!(content_offset(true), (-1.0, -1.0));
        assert_eq!(content_offset(false), (0.0, 0.0));
    }

    #[test]
    fn test_gray_byte_clamps() {
        assert_eq!(gray_byte(0.0), 0);
        assert_eq!(gray_byte(1.0), 255);
        // 0.95 + 0.1 overshoots the scale; it must clamp, not wrap.
        assert_eq!(gray_byte(1.05), 255);
        assert_eq!(gray_byte(-0.2), 0);
    }
}
