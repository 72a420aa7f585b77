//! Inicialización de logs para el binario nativo.
//!
//! La librería escribe con `log`; el subscriber de `tracing` recoge esos
//! registros y los filtra con `ARQUEO_QUIZ_LOG` (ver `config`).

use tracing_subscriber::EnvFilter;

pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();

    if let Err(e) = result {
        eprintln!("Logging was already initialized: {e}");
    }
}
