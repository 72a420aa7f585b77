use crate::model::QuestionKind;
use crate::ui::QuizUi;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, Key, TextEdit};

pub fn ui_quiz(quiz_ui: &mut QuizUi, ctx: &Context) {
    // Copia de lo que se pinta, para poder mutar la app al pulsar
    let Some(question) = quiz_ui.app.current_question().cloned() else {
        return;
    };
    let title = quiz_ui
        .app
        .current_level()
        .map(|l| l.title.clone())
        .unwrap_or_default();
    let (number, total) = quiz_ui.app.question_position().unwrap_or((1, 1));

    centered_panel(ctx, 420.0, 600.0, |ui| {
        let panel_width = ui.available_width();
        ui.heading(&title);
        ui.label(format!("Question {number} of {total}"));
        ui.add_space(10.0);
        ui.label(&question.prompt);
        ui.add_space(10.0);

        let mut submitted: Option<String> = None;
        match question.kind {
            QuestionKind::MultipleChoice => {
                for opt in question.options.iter().flatten() {
                    if ui
                        .add_sized([panel_width, 32.0], Button::new(opt.as_str()))
                        .clicked()
                    {
                        submitted = Some(opt.clone());
                    }
                    ui.add_space(4.0);
                }
            }
            QuestionKind::FreeText => {
                let response = ui.add_sized(
                    [panel_width, 30.0],
                    TextEdit::singleline(&mut quiz_ui.input).hint_text("Your answer"),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                let send = ui
                    .add_sized([panel_width, 36.0], Button::new("Submit"))
                    .clicked();
                if send || enter {
                    if quiz_ui.input.trim().is_empty() {
                        quiz_ui.message = "⚠ Write an answer before submitting.".to_owned();
                    } else {
                        submitted = Some(quiz_ui.input.clone());
                    }
                }
            }
        }

        if let Some(answer) = submitted {
            let result = quiz_ui.app.submit_answer(&answer);
            if let Some(outcome) = quiz_ui.report(result) {
                quiz_ui.input.clear();
                quiz_ui.message = if outcome.correct {
                    "✅ Correct!".into()
                } else {
                    format!("❌ Not quite. The answer was: {}", question.correct_answer)
                };
            }
        }

        ui.add_space(12.0);
        if ui.button("⬅ Back to levels").clicked() {
            quiz_ui.app.return_to_menu();
            quiz_ui.message.clear();
        }

        if !quiz_ui.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&quiz_ui.message);
        }
    });
}
