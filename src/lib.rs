pub mod answer_utils;
pub mod app;
pub mod badges;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod store;
#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use ui::QuizUi;
