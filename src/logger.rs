//! # Logger de Consola
//! src/logger.rs
//!
//! Backend mínimo para la fachada `log`: info/debug/trace van a stdout,
//! warn/error a stderr. El nivel se toma de `LOG_LEVEL` (por defecto `info`).
//!
//! ```bash
//! LOG_LEVEL=debug ./mini_http_server
//! ```

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Variable de entorno que controla el nivel de log
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Logger que escribe directo a la consola
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record.level(), &record.args().to_string());
        match record.level() {
            Level::Error | Level::Warn => eprintln!("{}", line),
            _ => println!("{}", line),
        }
    }

    fn flush(&self) {}
}

/// Formatea una línea de log: `[LEVEL] mensaje`
fn format_record(level: Level, message: &str) -> String {
    format!("[{:<5}] {}", level, message)
}

/// Interpreta el valor de `LOG_LEVEL`; valores desconocidos caen a `Info`
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Instala el logger global
///
/// Llamarlo más de una vez no es un error: solo la primera instalación
/// tiene efecto, pero el nivel siempre se actualiza. Si otro logger ya fue
/// instalado con `log::set_logger`, ese sigue activo y el error se descarta
/// en silencio.
pub fn init() {
    let level = parse_level(std::env::var(LOG_LEVEL_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
