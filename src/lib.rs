//! # Mini HTTP Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero: un request por
//! conexión, un thread por conexión y una tabla fija de rutas.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing de requests, serialización de responses, gzip
//! - `router`: Tabla ordenada de rutas (exactas y por prefijo)
//! - `commands`: Handlers de cada ruta (saludo, eco, archivos)
//! - `server`: Listener TCP y manejo de conexiones
//! - `config`: Argumentos CLI
//! - `logger`: Backend de consola para `log`
//!
//! ## Rutas
//!
//! | Target          | Respuesta                                  |
//! |-----------------|--------------------------------------------|
//! | `/`             | 200 `Hello, World!`                        |
//! | `/user-agent`   | 200 con el header `User-Agent`             |
//! | `/echo/{msg}`   | 200 con `msg` (gzip si el cliente lo pide) |
//! | `/files/{name}` | GET 200/404, POST 201/404                  |
//! | otro            | 404                                        |
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use mini_http_server::config::Config;
//! use mini_http_server::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("Error al hacer bind");
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod commands;
pub mod config;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;
