use crate::ui::QuizUi;
use crate::ui::layout::{centered_panel, two_button_row};
use egui::Context;

pub fn ui_level_complete(quiz_ui: &mut QuizUi, ctx: &Context) {
    let (level_title, level_points) = quiz_ui
        .app
        .current_level()
        .map(|l| (l.title.clone(), l.points))
        .unwrap_or_default();
    let (correct, total) = quiz_ui.app.session_score().unwrap_or((0, 0));
    let new_badges: Vec<String> = quiz_ui.app.newly_earned_badges().iter().cloned().collect();
    let has_next = quiz_ui.app.has_next_level();

    centered_panel(ctx, 320.0, 480.0, |ui| {
        let panel_width = ui.available_width();
        ui.heading(format!("{level_title} completed"));
        ui.add_space(10.0);
        ui.label(format!("Score: {correct}/{total}"));
        ui.label(format!(
            "Level reward: {level_points} points · Total: {}",
            quiz_ui.app.progress().total_points
        ));

        // Aviso único: solo en la transición que las ganó
        for badge in &new_badges {
            ui.add_space(6.0);
            ui.colored_label(egui::Color32::GOLD, format!("🏅 New badge: {badge}!"));
        }

        if !has_next {
            ui.add_space(6.0);
            ui.label("🎉 Well done! You reached the end of the quiz road.");
        }

        ui.add_space(16.0);
        let (retry, next) = two_button_row(ui, panel_width, "⟲ Retry level", "Next level ➡", has_next);
        if retry {
            let result = quiz_ui.app.retry_current_level();
            if quiz_ui.report(result).is_some() {
                quiz_ui.message.clear();
            }
        }
        if next {
            let result = quiz_ui.app.advance_to_next_level();
            if quiz_ui.report(result).is_some() {
                quiz_ui.message.clear();
            }
        }

        ui.add_space(8.0);
        if ui.button("⬅ Back to levels").clicked() {
            quiz_ui.app.return_to_menu();
            quiz_ui.message.clear();
        }

        if let Some(err) = quiz_ui.app.last_store_error() {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::LIGHT_RED, format!("Progress not saved yet: {err}"));
        }
    });
}
