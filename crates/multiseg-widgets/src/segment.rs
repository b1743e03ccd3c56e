//! A single toggleable segment.

use egui::{
    epaint::Shadow, pos2, vec2, Color32, CornerRadius, CursorIcon, FontId, Id, Image, Rect,
    Response, Sense, Stroke, Ui,
};

use multiseg_core::visual::ShadowDirection;
use multiseg_core::{visual, Control, ICON_SIZE, SEGMENT_CORNER_RADIUS, SEGMENT_HEIGHT};

use crate::{theme, IconSource};

/// Caption-scale label size.
const FONT_SIZE: f32 = 11.0;
/// Gap between label and icon.
const ICON_GAP: f32 = 4.0;
/// Horizontal slack around the content when the segment sizes itself.
const CONTENT_PADDING: f32 = 8.0;

/// One tappable segment. Tapping anywhere in its bounds flips the bound
/// control's `is_active` flag; siblings are never affected.
///
/// Normally shown by [`MultiSegmentedControl`](crate::MultiSegmentedControl),
/// which supplies the effective tint and a uniform rect; `show` lets a
/// segment stand alone and size itself from its label.
pub struct SegmentItem<'a> {
    control: &'a mut Control<IconSource>,
    grayscale_white_amount: f32,
}

impl<'a> SegmentItem<'a> {
    /// Create a segment over a caller-owned control. `grayscale_white_amount`
    /// is the effective tint, already resolved against the color scheme.
    pub fn new(control: &'a mut Control<IconSource>, grayscale_white_amount: f32) -> Self {
        Self {
            control,
            grayscale_white_amount,
        }
    }

    /// Show the segment in a self-sized rect and return its response.
    /// `changed()` reports a toggle.
    pub fn show(self, ui: &mut Ui) -> Response {
        let galley = ui.painter().layout_no_wrap(
            self.control.name.clone(),
            FontId::proportional(FONT_SIZE),
            Color32::PLACEHOLDER,
        );
        let icon_span = if self.control.icon.is_some() {
            ICON_GAP + ICON_SIZE
        } else {
            0.0
        };
        let width = galley.size().x + icon_span + 2.0 * CONTENT_PADDING;

        let (rect, response) =
            ui.allocate_exact_size(vec2(width, SEGMENT_HEIGHT), Sense::click());
        self.finish(ui, rect, response)
    }

    /// Show the segment in a rect chosen by the container. `id` must be
    /// stable across frames (the container salts it with the control key).
    pub(crate) fn show_at(self, ui: &mut Ui, rect: Rect, id: Id) -> Response {
        let response = ui.interact(rect, id, Sense::click());
        self.finish(ui, rect, response)
    }

    fn finish(self, ui: &mut Ui, rect: Rect, mut response: Response) -> Response {
        if response.clicked() {
            self.control.toggle();
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect);
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }

    fn paint(&self, ui: &Ui, rect: Rect) {
        let is_active = self.control.is_active;
        let fill = visual::segment_fill(is_active, self.grayscale_white_amount);
        let fill_color = Color32::from_gray(visual::gray_byte(fill));
        let radius = CornerRadius::same(SEGMENT_CORNER_RADIUS);
        let shadow = visual::segment_shadow(is_active);
        let painter = ui.painter();

        match shadow.direction {
            ShadowDirection::Drop => {
                // Raised: cast shadow behind the segment.
                let cast = Shadow {
                    offset: shadow.offset,
                    blur: shadow.blur,
                    spread: 0,
                    color: theme::SHADOW,
                };
                painter.add(cast.as_shape(rect, radius));
                painter.rect_filled(rect, radius, fill_color);
            }
            ShadowDirection::Inset => {
                // Pressed: shade the lit inner edges instead, since egui has
                // no native inner shadow.
                painter.rect_filled(rect, radius, fill_color);
                let edge = rect.shrink(f32::from(shadow.offset[0]));
                let corner = f32::from(SEGMENT_CORNER_RADIUS) * 0.5;
                let stroke = Stroke::new(f32::from(shadow.blur), theme::INSET_EDGE);
                painter.line_segment(
                    [
                        pos2(edge.left() + corner, edge.top()),
                        pos2(edge.right() - corner, edge.top()),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        pos2(edge.left(), edge.top() + corner),
                        pos2(edge.left(), edge.bottom() - corner),
                    ],
                    stroke,
                );
            }
        }

        // Content: caption label, then the optional 14x14 aspect-fit icon,
        // centered as a unit and nudged while pressed.
        let text_color = if fill >= 0.5 {
            theme::TEXT_ON_LIGHT
        } else {
            theme::TEXT_ON_DARK
        };
        let galley = painter.layout_no_wrap(
            self.control.name.clone(),
            FontId::proportional(FONT_SIZE),
            text_color,
        );
        let text_size = galley.size();
        let icon_span = if self.control.icon.is_some() {
            ICON_GAP + ICON_SIZE
        } else {
            0.0
        };

        let (dx, dy) = visual::content_offset(is_active);
        let center = rect.center() + vec2(dx, dy);
        let content_width = text_size.x + icon_span;
        let text_pos = pos2(center.x - content_width / 2.0, center.y - text_size.y / 2.0);
        painter.galley(text_pos, galley, text_color);

        if let Some(icon) = &self.control.icon {
            let icon_center = pos2(
                text_pos.x + text_size.x + ICON_GAP + ICON_SIZE / 2.0,
                center.y,
            );
            let icon_rect = Rect::from_center_size(icon_center, vec2(ICON_SIZE, ICON_SIZE));
            Image::new(icon.clone())
                .fit_to_exact_size(vec2(ICON_SIZE, ICON_SIZE))
                .paint_at(ui, icon_rect);
        }
    }
}
