use arqueo_quiz::config::AppConfig;
use arqueo_quiz::{QuizApp, QuizUi};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let config = AppConfig::from_env();
    arqueo_quiz::telemetry::init_tracing(&config.log_filter);

    let app = match QuizApp::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("Could not load the quiz content: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Archaeology Quiz Road",
        options,
        Box::new(|_cc| Ok(Box::new(QuizUi::new(app)))),
    )
}

// En la web el progreso va a localStorage (ver `store::LocalStorageStore`)
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document available");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Canvas `the_canvas_id` not found");
            return;
        };

        let app = match QuizApp::from_config(&AppConfig::default()) {
            Ok(app) => app,
            Err(e) => {
                log::error!("Could not load the quiz content: {e}");
                return;
            }
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(QuizUi::new(app)))),
            )
            .await;
        if let Err(e) = start_result {
            log::error!("Failed to start eframe: {e:?}");
        }
    });
}
