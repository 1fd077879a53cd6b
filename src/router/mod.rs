//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea el target del request a un handler.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! Las rutas se evalúan en el orden en que se registraron y gana la primera
//! que coincide (igualdad exacta o prefijo). No hay trie ni parámetros con
//! nombre: lo que sigue al prefijo se pasa al handler como `param`.
//! Si ninguna ruta coincide, se responde 404 sin headers ni body.

use crate::commands::{self, Context};
use crate::config::Config;
use crate::http::{Request, Response};
use std::io;

/// Tipo de función handler
///
/// Un handler recibe el Request y su Context y retorna una Response.
pub type Handler = fn(&Request, &Context) -> io::Result<Response>;

/// Cómo compara una ruta contra el target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// El target debe ser exactamente este string
    Exact(String),

    /// El target debe empezar con este prefijo
    Prefix(String),
}

impl Matcher {
    /// Si coincide, retorna el resto del target después del patrón
    pub fn matches<'a>(&self, target: &'a str) -> Option<&'a str> {
        match self {
            Matcher::Exact(path) if target == path.as_str() => Some(""),
            Matcher::Exact(_) => None,
            Matcher::Prefix(prefix) => target.strip_prefix(prefix.as_str()),
        }
    }
}

/// Router que mapea targets a handlers
pub struct Router {
    /// Rutas en orden de registro
    routes: Vec<(Matcher, Handler)>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Router con la tabla completa del servidor
    ///
    /// | Orden | Ruta          | Handler              |
    /// |-------|---------------|----------------------|
    /// | 1     | `/`           | saludo               |
    /// | 2     | `/user-agent` | eco de User-Agent    |
    /// | 3     | `/echo/*`     | eco del path (+gzip) |
    /// | 4     | `/files/*`    | GET/POST de archivos |
    pub fn with_default_routes() -> Self {
        let mut router = Self::new();
        router.register_exact("/", commands::root_handler);
        router.register_exact("/user-agent", commands::user_agent_handler);
        router.register_prefix("/echo/", commands::echo_handler);
        router.register_prefix("/files/", commands::files_handler);
        router
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::router::{Matcher, Router};
    /// use mini_http_server::commands::Context;
    /// use mini_http_server::http::{Request, Response};
    ///
    /// fn hello_handler(_req: &Request, _ctx: &Context) -> std::io::Result<Response> {
    ///     Ok(Response::text("hello"))
    /// }
    ///
    /// let mut router = Router::new();
    /// router.register(Matcher::Exact("/hello".to_string()), hello_handler);
    /// ```
    pub fn register(&mut self, matcher: Matcher, handler: Handler) {
        self.routes.push((matcher, handler));
    }

    /// Atajo para una ruta exacta
    pub fn register_exact(&mut self, path: &str, handler: Handler) {
        self.register(Matcher::Exact(path.to_string()), handler);
    }

    /// Atajo para una ruta por prefijo
    pub fn register_prefix(&mut self, prefix: &str, handler: Handler) {
        self.register(Matcher::Prefix(prefix.to_string()), handler);
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Si no encuentra un handler para el target, retorna 404.
    pub fn route(&self, request: &Request, config: &Config) -> io::Result<Response> {
        let target = request.target();

        for (matcher, handler) in &self.routes {
            if let Some(param) = matcher.matches(target) {
                let ctx = Context { param, config };
                return handler(request, &ctx);
            }
        }

        log::debug!("   Ruta no encontrada: {}", target);
        Ok(Response::not_found())
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::with_default_routes()
    }
}
