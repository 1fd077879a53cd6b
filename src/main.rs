//! # HTTP Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada: parsea `--directory`, instala el logger y arranca el
//! loop de accept.

use mini_http_server::config::Config;
use mini_http_server::logger;
use mini_http_server::server::Server;

fn main() {
    logger::init();

    log::info!("=================================");
    log::info!("  Mini HTTP/1.1 Server");
    log::info!("=================================");

    // Crear configuración desde la CLI
    let config = Config::new();

    if let Err(e) = config.validate() {
        log::error!("💥 Configuración inválida: {}", e);
        std::process::exit(1);
    }

    config.log_summary();

    let server = match Server::bind(config) {
        Ok(server) => server,
        Err(e) => {
            log::error!("💥 Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Server is running...");

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        log::error!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
