//! # Handlers del Servidor
//! src/commands/mod.rs
//!
//! Cada ruta tiene una función handler que recibe el `Request` y un
//! [`Context`] y retorna una `Response`.
//!
//! ## Categorías
//!
//! - **basic**: saludo, eco de User-Agent y eco del path (con gzip)
//! - **files**: lectura y escritura de archivos bajo `--directory`
//!
//! Los handlers retornan `io::Result`: solo "no encontrado" se traduce a
//! 404, cualquier otro error de I/O sube hasta la conexión.

use crate::config::Config;

pub mod basic;
pub mod files;

// Re-exportar funciones útiles
pub use basic::*;
pub use files::*;

/// Datos que el router pasa a cada handler
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    /// Resto del target después del prefijo de la ruta ("" en rutas exactas)
    pub param: &'a str,

    /// Configuración global (solo lectura)
    pub config: &'a Config,
}
