//! Neumorphic multi-segmented control for egui.
//!
//! A row or column of independently toggleable segments. Each segment flips
//! its own caller-owned [`Control`] record when tapped; there is no mutual
//! exclusion between segments (this is not a radio group). Pressed segments
//! are drawn with an inset shadow and a slightly darker fill, raised ones
//! with a drop shadow, over a rounded container background.
//!
//! ```no_run
//! # use multiseg_widgets::{Control, MultiSegmentedControl};
//! # fn ui(ui: &mut egui::Ui, controls: &mut Vec<Control<egui::ImageSource<'static>>>) {
//! if MultiSegmentedControl::new(controls).show(ui).changed() {
//!     // a segment was toggled; controls reflects the new state
//! }
//! # }
//! ```

pub mod container;
pub mod segment;

pub use container::MultiSegmentedControl;
pub use segment::SegmentItem;

pub use multiseg_core::{ColorScheme, Control, Orientation};

/// The icon reference type segments carry in egui.
pub type IconSource = egui::ImageSource<'static>;

/// Fixed colors used by the segment painter.
pub mod theme {
    use egui::Color32;

    /// Label color on light fills.
    pub const TEXT_ON_LIGHT: Color32 = Color32::from_gray(20);
    /// Label color on dark fills.
    pub const TEXT_ON_DARK: Color32 = Color32::from_gray(230);
    /// Cast-shadow color for raised segments.
    pub const SHADOW: Color32 = Color32::BLACK;
    /// Inner-edge shade for pressed segments.
    pub const INSET_EDGE: Color32 = Color32::from_black_alpha(110);
}
