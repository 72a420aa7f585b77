use super::QuizUi;
use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};

pub fn top_panel(quiz_ui: &mut QuizUi, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let progress = quiz_ui.app.progress();
            ui.label(format!("⭐ {} points", progress.total_points));
            ui.separator();
            if progress.badges.is_empty() {
                ui.label("No badges yet");
            } else {
                for badge in &progress.badges {
                    ui.label(format!("🏅 {badge}"));
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Reset progress").clicked() {
                    quiz_ui.confirm_reset = true;
                }
                if quiz_ui.app.has_unsaved_progress() && ui.button("💾 Retry save").clicked() {
                    let result = quiz_ui.app.flush();
                    if quiz_ui.report(result).is_some() {
                        quiz_ui.message = "Progress saved.".to_owned();
                    }
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
    right_enabled: bool,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right_enabled, |ui| {
                ui.add_sized([btn_w, 36.0], Button::new(right_label))
            })
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}
