use crate::ui::QuizUi;
use crate::ui::helpers::split_button_with_replay;
use crate::ui::layout::centered_panel;
use crate::view_models::{BadgeInfo, LevelInfo};
use egui::Context;

pub fn ui_level_menu(quiz_ui: &mut QuizUi, ctx: &Context) {
    let infos: Vec<LevelInfo> = quiz_ui.app.level_infos();
    let badges: Vec<BadgeInfo> = quiz_ui.app.badge_infos();
    let button_h = 36.0;
    let estimated_h = 160.0 + (button_h + 8.0) * (infos.len() + badges.len()) as f32;

    centered_panel(ctx, estimated_h, 420.0, |ui| {
        let content_width = ui.available_width();
        ui.heading("Quiz road: choose a level");
        ui.add_space(20.0);

        for info in &infos {
            let (clicked_main, clicked_replay) = split_button_with_replay(
                ui,
                &info.label(),
                content_width,
                button_h,
                info.unlocked,
                info.completed,
            );
            if clicked_main || clicked_replay {
                let result = quiz_ui.app.select_level(&info.id);
                if quiz_ui.report(result).is_some() {
                    quiz_ui.input.clear();
                    quiz_ui.message.clear();
                }
                return;
            }
            ui.add_space(8.0);
        }

        ui.add_space(16.0);
        ui.label("Badges");
        for badge in &badges {
            ui.label(badge.label());
        }
        if let Some(next) = quiz_ui.app.badge_rules().next_rule(quiz_ui.app.progress().total_points) {
            ui.small(format!(
                "{} more points for {}",
                next.threshold - quiz_ui.app.progress().total_points,
                next.badge
            ));
        }

        if !quiz_ui.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&quiz_ui.message);
        }
    });
}
