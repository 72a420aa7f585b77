mod helpers;
pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::error::QuizError;
use crate::model::QuizState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

/// Capa de presentación: observa la máquina de progresión y le envía
/// los eventos. Aquí solo vive estado de UI (texto escrito, mensajes).
pub struct QuizUi {
    pub app: QuizApp,
    pub input: String,
    pub message: String,
    pub confirm_reset: bool,
}

impl QuizUi {
    pub fn new(app: QuizApp) -> Self {
        let mut quiz_ui = Self {
            app,
            input: String::new(),
            message: String::new(),
            confirm_reset: false,
        };
        if quiz_ui.app.is_catalog_finished() {
            quiz_ui.message = "You have completed the whole quiz road!".to_owned();
        }
        quiz_ui
    }

    /// Los errores de transición se muestran, nunca tumban la app
    pub(crate) fn report<T>(&mut self, result: Result<T, QuizError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.message = e.to_string();
                None
            }
        }
    }

    pub fn confirm_reset(&mut self, ctx: &Context) {
        egui::Window::new("Confirm reset")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Erase all points, badges and completed levels? This cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Yes, erase").clicked() {
                        let result = self.app.reset_progress();
                        if self.report(result).is_some() {
                            self.input.clear();
                            self.message.clear();
                        }
                        self.confirm_reset = false;
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}

impl App for QuizUi {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);
        bottom_panel(ctx);

        // Dispatch por estado de la máquina
        match self.app.state() {
            QuizState::Idle => views::level_menu::ui_level_menu(self, ctx),
            QuizState::InLevel { .. } => views::quiz::ui_quiz(self, ctx),
            QuizState::LevelComplete { .. } => {
                views::level_complete::ui_level_complete(self, ctx)
            }
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }
}
