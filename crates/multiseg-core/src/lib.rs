//! MultiSeg Core Library
//!
//! Toolkit-agnostic state and styling math for the multi-segmented control:
//! the caller-owned [`Control`] record, the fixed layout metrics, and the
//! pure fill/shadow/offset derivation the widget crate renders from.

pub mod control;
pub mod metrics;
pub mod visual;

pub use control::Control;
pub use metrics::{
    container_height, Orientation, CONTAINER_CORNER_RADIUS, CONTAINER_PADDING, ICON_SIZE,
    SEGMENT_CORNER_RADIUS, SEGMENT_HEIGHT,
};
pub use visual::{
    container_fill, content_offset, effective_white, gray_byte, segment_fill, segment_shadow,
    ColorScheme, ShadowDirection, ShadowSpec, DEFAULT_GRAYSCALE_WHITE, INACTIVE_LIFT,
};
