//! The segmented control container: background, layout, segment placement.

use egui::{pos2, vec2, Color32, CornerRadius, Rect, Response, Sense, Ui};

use multiseg_core::{
    container_height, visual, ColorScheme, Control, Orientation, CONTAINER_CORNER_RADIUS,
    CONTAINER_PADDING, DEFAULT_GRAYSCALE_WHITE, SEGMENT_HEIGHT,
};

use crate::{segment::SegmentItem, IconSource};

/// A row or column of independently toggleable segments over caller-owned
/// [`Control`] records.
///
/// Control names must be unique within the slice; they salt the per-segment
/// interact ids and a duplicate makes two segments share hover/press state.
pub struct MultiSegmentedControl<'a> {
    controls: &'a mut [Control<IconSource>],
    grayscale_white_amount: f32,
    orientation: Orientation,
    color_scheme: Option<ColorScheme>,
}

impl<'a> MultiSegmentedControl<'a> {
    /// Create a control over the given segments. Defaults: tint 0.8,
    /// horizontal, color scheme read from the `Ui` at show time.
    pub fn new(controls: &'a mut [Control<IconSource>]) -> Self {
        Self {
            controls,
            grayscale_white_amount: DEFAULT_GRAYSCALE_WHITE,
            orientation: Orientation::default(),
            color_scheme: None,
        }
    }

    /// Set the base tint for inactive segments and the background.
    pub fn grayscale_white_amount(mut self, amount: f32) -> Self {
        self.grayscale_white_amount = amount;
        self
    }

    /// Set the layout direction.
    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Lay the segments out in a row.
    pub fn horizontal(self) -> Self {
        self.orientation(Orientation::Horizontal)
    }

    /// Lay the segments out in a column.
    pub fn vertical(self) -> Self {
        self.orientation(Orientation::Vertical)
    }

    /// Override the ambient color scheme instead of reading it from the
    /// `Ui`. Mainly for hosts that track appearance themselves.
    pub fn color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = Some(scheme);
        self
    }

    /// Show the control. The returned response is the union of the
    /// container and every segment, so `changed()` reports any toggle.
    pub fn show(self, ui: &mut Ui) -> Response {
        let scheme = self.color_scheme.unwrap_or_else(|| {
            if ui.visuals().dark_mode {
                ColorScheme::Dark
            } else {
                ColorScheme::Light
            }
        });
        let white = visual::effective_white(scheme, self.grayscale_white_amount);

        let orientation = self.orientation;
        let count = self.controls.len();

        let content_height = container_height(orientation, count);
        let content_width = ui.available_width() - 2.0 * CONTAINER_PADDING;
        let outer = vec2(
            content_width + 2.0 * CONTAINER_PADDING,
            content_height + 2.0 * CONTAINER_PADDING,
        );

        let (rect, mut response) = ui.allocate_exact_size(outer, Sense::hover());

        if ui.is_rect_visible(rect) {
            let bg = Color32::from_gray(visual::gray_byte(visual::container_fill(white)));
            ui.painter()
                .rect_filled(rect, CornerRadius::same(CONTAINER_CORNER_RADIUS), bg);
        }

        if count == 0 {
            return response;
        }

        let inner = rect.shrink(CONTAINER_PADDING);
        let base_id = response.id;
        for (index, control) in self.controls.iter_mut().enumerate() {
            let seg_rect = segment_rect(inner, orientation, count, index);
            let id = base_id.with(control.key());
            let seg_response = SegmentItem::new(control, white).show_at(ui, seg_rect, id);
            response |= seg_response;
        }

        response
    }
}

/// Rect for segment `index`: uniform sizes, spacing per orientation, the run
/// centered inside the padded content area.
fn segment_rect(inner: Rect, orientation: Orientation, count: usize, index: usize) -> Rect {
    let spacing = orientation.spacing();
    match orientation {
        Orientation::Horizontal => {
            let width = (inner.width() - spacing * (count - 1) as f32) / count as f32;
            let x = inner.left() + index as f32 * (width + spacing);
            let y = inner.center().y - SEGMENT_HEIGHT / 2.0;
            Rect::from_min_size(pos2(x, y), vec2(width, SEGMENT_HEIGHT))
        }
        Orientation::Vertical => {
            let run = count as f32 * SEGMENT_HEIGHT + (count - 1) as f32 * spacing;
            let top = inner.center().y - run / 2.0;
            let y = top + index as f32 * (SEGMENT_HEIGHT + spacing);
            Rect::from_min_size(pos2(inner.left(), y), vec2(inner.width(), SEGMENT_HEIGHT))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_rects_do_not_overlap() {
        let inner = Rect::from_min_size(pos2(0.0, 0.0), vec2(300.0, 96.0));
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let a = segment_rect(inner, orientation, 3, 0);
            let b = segment_rect(inner, orientation, 3, 1);
            assert!(!a.intersects(b), "{orientation:?} segments overlap");
            match orientation {
                Orientation::Horizontal => {
                    assert!((b.left() - a.right() - 1.0).abs() < 1e-4);
                }
                Orientation::Vertical => {
                    assert!((b.top() - a.bottom() - 2.0).abs() < 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_show_renders_without_toggling() {
        let controls = std::cell::RefCell::new(vec![
            Control::new("Border"),
            Control::new("Fill"),
        ]);
        egui::__run_test_ui(|ui| {
            let response = MultiSegmentedControl::new(&mut controls.borrow_mut())
                .color_scheme(ColorScheme::Light)
                .show(ui);
            assert!(!response.changed());
        });
        assert!(controls.borrow().iter().all(|c| !c.is_active));
    }

    #[test]
    fn test_empty_control_list_renders() {
        let controls: std::cell::RefCell<Vec<Control<IconSource>>> = std::cell::RefCell::new(Vec::new());
        egui::__run_test_ui(|ui| {
            MultiSegmentedControl::new(&mut controls.borrow_mut()).vertical().show(ui);
        });
    }
}
