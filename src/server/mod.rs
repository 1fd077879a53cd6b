//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Servidor TCP que:
//! 1. Escucha en 127.0.0.1:4221 con SO_REUSEADDR/SO_REUSEPORT
//! 2. Acepta conexiones y lanza un thread por cada una
//! 3. Lee un único buffer, lo parsea y lo enruta
//! 4. Escribe la respuesta y cierra la conexión

pub mod listener;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::{ConnectionError, Server};
