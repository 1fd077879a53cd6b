//! # Handlers de Archivos
//! src/commands/files.rs
//!
//! - `GET /files/{name}`: lee `<directory>/<name>` como bytes
//! - `POST /files/{name}`: escribe el body del request en `<directory>/<name>`
//!
//! El nombre se concatena al directorio sin sanitizar. Solo `NotFound` se
//! traduce a 404; permisos, disco lleno, etc. se propagan como error.

use super::Context;
use crate::http::{Method, Request, Response, StatusCode};
use std::fs;
use std::io::{self, ErrorKind};

/// Handler para /files/{name}
///
/// Despacha según el método. Métodos distintos de GET/POST → 404.
pub fn files_handler(req: &Request, ctx: &Context) -> io::Result<Response> {
    match req.method() {
        Method::GET => read_file(ctx),
        Method::POST => write_file(req, ctx),
        Method::Other(_) => Ok(Response::not_found()),
    }
}

/// GET: 200 con el contenido o 404 si no existe
fn read_file(ctx: &Context) -> io::Result<Response> {
    let path = ctx.config.files_path(ctx.param);

    let content = match fs::read(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("   Archivo no encontrado: {}", path.display());
            return Ok(Response::not_found());
        }
        Err(e) => return Err(e),
    };

    Ok(Response::new(StatusCode::Ok)
        .with_header("Content-Type", "application/octet-stream")
        .with_body_bytes(content))
}

/// POST: sobrescribe el archivo; 201 o 404 si el directorio no existe
fn write_file(req: &Request, ctx: &Context) -> io::Result<Response> {
    let path = ctx.config.files_path(ctx.param);

    match fs::write(&path, req.body()) {
        Ok(()) => {
            log::debug!("   Escritos {} bytes en {}", req.body().len(), path.display());
            Ok(Response::new(StatusCode::Created))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Response::not_found()),
        Err(e) => Err(e),
    }
}
