//! # Handlers Básicos
//! src/commands/basic.rs
//!
//! - `/`: saludo fijo
//! - `/user-agent`: devuelve el header User-Agent
//! - `/echo/{msg}`: devuelve `msg`, comprimido si el cliente acepta gzip

use super::Context;
use crate::http::compression::{self, GZIP};
use crate::http::{Request, Response, StatusCode};
use std::io;

/// Valor usado cuando el request no trae User-Agent
pub const UNKNOWN_USER_AGENT: &str = "Unknown";

/// Handler para /
pub fn root_handler(_req: &Request, _ctx: &Context) -> io::Result<Response> {
    Ok(Response::text("Hello, World!"))
}

/// Handler para /user-agent
///
/// # Ejemplo
/// ```text
/// GET /user-agent  (User-Agent: curl/8.0)  →  200 "curl/8.0"
/// GET /user-agent  (sin header)            →  200 "Unknown"
/// ```
pub fn user_agent_handler(req: &Request, _ctx: &Context) -> io::Result<Response> {
    let user_agent = req.header("User-Agent").unwrap_or(UNKNOWN_USER_AGENT);
    Ok(Response::text(user_agent))
}

/// Handler para /echo/{msg}
///
/// Si `Accept-Encoding` contiene "gzip" en cualquier parte del valor, el
/// mensaje se comprime y se agrega `Content-Encoding: gzip`. El header no se
/// interpreta como lista.
pub fn echo_handler(req: &Request, ctx: &Context) -> io::Result<Response> {
    let message = ctx.param;
    let response = Response::new(StatusCode::Ok).with_header("Content-Type", "text/plain");

    if accepts_gzip(req) {
        let compressed = compression::compress(message.as_bytes(), GZIP)?;
        return Ok(response
            .with_header("Content-Encoding", GZIP)
            .with_body_bytes(compressed));
    }

    Ok(response.with_body(message))
}

/// ¿El cliente aceptó gzip?
fn accepts_gzip(req: &Request) -> bool {
    req.header("Accept-Encoding")
        .map(|value| value.contains(GZIP))
        .unwrap_or(false)
}
