//! # Módulo HTTP
//! src/http/mod.rs
//!
//! Implementa el subconjunto de HTTP/1.1 que usa el servidor, sin librerías
//! de alto nivel:
//!
//! - Parsing de requests desde un único buffer
//! - Construcción y serialización de responses
//! - Tabla cerrada de status codes
//! - Compresión gzip de bodies
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```

pub mod compression; // Content-Encoding (gzip)
pub mod request;     // Parsing de HTTP requests
pub mod response;    // Construcción de HTTP responses
pub mod status;      // Códigos de estado HTTP

// Re-exportamos los tipos principales para facilitar su uso
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::{StatusCode, UnsupportedStatusCode};
