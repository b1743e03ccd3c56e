//! The caller-owned record behind one segment.

use serde::{Deserialize, Serialize};

/// One toggleable option in a multi-segmented control.
///
/// The record is owned by the calling application; the widget borrows it
/// mutably for the duration of a frame and flips [`Control::is_active`] when
/// the segment is tapped. Nothing else mutates it.
///
/// `I` is the icon reference type of the host toolkit (`()` when icons are
/// not used; the widget crate uses `egui::ImageSource<'static>`).
///
/// `name` doubles as the display label and the list-diffing identity: it must
/// be unique within one control list. A duplicate name degrades identity
/// tracking between frames but never crashes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Control<I = ()> {
    /// Display label and identity key.
    pub name: String,
    /// Decorative glyph shown after the label.
    pub icon: Option<I>,
    /// Toggle state. Flipped by [`Control::toggle`] only.
    pub is_active: bool,
}

impl<I> Control<I> {
    /// Create an inactive, icon-less control.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: None,
            is_active: false,
        }
    }

    /// Attach an icon reference.
    pub fn with_icon(mut self, icon: I) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the initial toggle state.
    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// The identity key used for list diffing and interact-id salting.
    pub fn key(&self) -> &str {
        &self.name
    }

    /// Flip the toggle state. The tap handler is the only caller inside the
    /// widget; applications may also call it directly.
    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
        log::debug!("segment '{}' toggled to {}", self.name, self.is_active);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_only_active_flag() {
        let mut control = Control::<()>::new("Border");
        assert!(!control.is_active);

        control.toggle();
        assert!(control.is_active);
        assert_eq!(control.name, "Border");
        assert_eq!(control.icon, None);
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut control = Control::<()>::new("Fill").active(true);
        control.toggle();
        control.toggle();
        assert!(control.is_active);
    }

    #[test]
    fn test_segments_toggle_independently() {
        let mut controls = vec![Control::<()>::new("Border"), Control::new("Fill")];
        controls[0].toggle();
        assert!(controls[0].is_active);
        assert!(!controls[1].is_active);
    }

    #[test]
    fn test_border_fill_scenario() {
        // Two inactive controls; tap "Border", then tap "Fill".
        let mut controls = vec![Control::<()>::new("Border"), Control::new("Fill")];

        let idx = controls.iter().position(|c| c.key() == "Border").unwrap();
        controls[idx].toggle();
        assert!(controls[0].is_active);
        assert!(!controls[1].is_active);

        let idx = controls.iter().position(|c| c.key() == "Fill").unwrap();
        controls[idx].toggle();
        assert!(controls[0].is_active);
        assert!(controls[1].is_active);
    }

    #[test]
    fn test_key_is_name() {
        let control = Control::<()>::new("Border");
        assert_eq!(control.key(), "Border");
    }

    #[test]
    fn test_serde_round_trip() {
        let control = Control::<String>::new("Border")
            .with_icon("underline".to_string())
            .active(true);
        let json = serde_json::to_string(&control).unwrap();
        let back: Control<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, control);
    }
}
