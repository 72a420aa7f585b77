// src/ui/helpers.rs
use egui::{Button, Color32, Ui, Vec2};

/// Devuelve (clicked_main, clicked_replay).
/// - Si `is_completed == false`: SOLO se muestra el botón principal.
/// - Si `is_completed == true`: principal deshabilitado + "Replay" activo
pub fn split_button_with_replay(
    ui: &mut Ui,
    label: &str,
    total_width: f32,
    height: f32,
    enabled: bool,
    is_completed: bool,
) -> (bool, bool) {
    if !is_completed {
        let clicked = ui
            .add_enabled(enabled, Button::new(label).min_size(Vec2::new(total_width, height)))
            .clicked();
        return (clicked, false);
    }

    let gap = 8.0;
    let replay_w = (total_width / 4.0).max(80.0);
    let main_w = (total_width - replay_w - gap).max(120.0);

    let mut clicked_replay = false;
    ui.horizontal(|ui| {
        ui.add_enabled(false, Button::new(label).min_size(Vec2::new(main_w, height)))
            .on_hover_text("Completed: replaying does not award points again");

        let replay_btn = Button::new("⟲ Replay")
            .min_size(Vec2::new(replay_w, height))
            .fill(Color32::DARK_GREEN);
        if ui.add(replay_btn).clicked() {
            clicked_replay = true;
        }
    });

    (false, clicked_replay)
}
