//! # Construcción de Respuestas HTTP
//! src/http/response.rs
//!
//! API tipo builder para armar una respuesta y serializarla a bytes.
//!
//! ## Formato de una respuesta 200
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 13\r\n
//! \r\n
//! Hello, World!
//! ```
//!
//! ## Formato de 201 / 404
//!
//! ```text
//! HTTP/1.1 404 Not Found\r\n
//! \r\n
//! ```
//!
//! Los headers y el body de una 201/404 se descartan al serializar.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use mini_http_server::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("Hello");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"Content-Length: 5\r\n\r\nHello"));
//! ```

use super::StatusCode;

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone)]
pub struct Response {
    /// Código de estado HTTP
    status: StatusCode,

    /// Headers en orden de inserción (Content-Length se agrega al serializar)
    headers: Vec<(String, String)>,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una nueva respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Respuesta 404 sin headers ni body
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
    }

    /// Respuesta 200 `text/plain` con el texto dado
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::http::{Response, StatusCode};
    ///
    /// let response = Response::text("Hello, World!");
    /// assert_eq!(response.status(), StatusCode::Ok);
    /// assert_eq!(response.header("Content-Type"), Some("text/plain"));
    /// ```
    pub fn text(body: &str) -> Self {
        Self::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body(body)
    }

    /// Agrega un header al final de la lista
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.add_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente (versión mutable)
    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.push((name.to_string(), value.to_string()));
    }

    /// Establece el cuerpo de la respuesta desde un string
    pub fn with_body(mut self, body: &str) -> Self {
        self.body = body.as_bytes().to_vec();
        self
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para archivos y payloads comprimidos.
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - 201/404: solo la status line y la línea vacía
    /// - Resto: headers en orden, `Content-Length` si hay body, línea vacía
    ///   y el body tal cual
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = format!("HTTP/1.1 {}\r\n", self.status).into_bytes();

        if self.status.is_bare() {
            result.extend_from_slice(b"\r\n");
            return result;
        }

        for (name, value) in &self.headers {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        if !self.body.is_empty() {
            result.extend_from_slice(format!("Content-Length: {}\r\n", self.body.len()).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    /// Obtiene el código de estado de la respuesta
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Obtiene los headers en orden de inserción
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Busca un header por nombre exacto (el último agregado gana)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Obtiene una referencia al body
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
