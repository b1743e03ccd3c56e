//! Native demo: a capsule styled by two independent toggles, with the
//! segmented control shown in both orientations over the same records.

use egui::{pos2, vec2, Color32, Rect, Sense, Stroke, StrokeKind};
use multiseg_widgets::{Control, IconSource, MultiSegmentedControl};

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting MultiSeg demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([320.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "MultiSeg",
        options,
        Box::new(|cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DemoApp::default()))
        }),
    )
}

struct DemoApp {
    controls: Vec<Control<IconSource>>,
}

impl Default for DemoApp {
    fn default() -> Self {
        Self {
            controls: vec![
                Control::new("Border").with_icon(egui::include_image!("../assets/underline.svg")),
                Control::new("Fill").with_icon(egui::include_image!("../assets/strikethrough.svg")),
            ],
        }
    }
}

impl DemoApp {
    fn is_on(&self, name: &str) -> bool {
        self.controls
            .iter()
            .find(|c| c.key() == name)
            .is_some_and(|c| c.is_active)
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let border_on = self.is_on("Border");
            let fill_on = self.is_on("Fill");

            // Capsule preview reacting to the toggles.
            let (rect, _) =
                ui.allocate_exact_size(vec2(ui.available_width(), 120.0), Sense::hover());
            let capsule = Rect::from_center_size(rect.center(), vec2(rect.width() - 20.0, 100.0));
            let radius = capsule.height() / 2.0;
            let neutral = Color32::from_gray(230);
            let fill = if fill_on {
                Color32::from_rgb(59, 130, 246)
            } else {
                neutral
            };
            ui.painter().rect_filled(capsule, radius, fill);
            if border_on {
                ui.painter().rect_stroke(
                    capsule,
                    radius,
                    Stroke::new(10.0, Color32::BLACK),
                    StrokeKind::Inside,
                );
            }

            if !border_on && !fill_on {
                ui.painter().text(
                    pos2(rect.center().x, rect.bottom() + 8.0),
                    egui::Align2::CENTER_TOP,
                    "No option selected",
                    egui::FontId::proportional(12.0),
                    ui.visuals().text_color(),
                );
                ui.add_space(20.0);
            }

            ui.add_space(16.0);
            ui.label("Vertical");
            MultiSegmentedControl::new(&mut self.controls)
                .vertical()
                .show(ui);

            ui.add_space(16.0);
            ui.label("Horizontal");
            MultiSegmentedControl::new(&mut self.controls).show(ui);
        });
    }
}
