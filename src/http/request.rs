//! # Parsing de Requests HTTP
//! src/http/request.rs
//!
//! Parser que trabaja sobre el buffer completo de una sola lectura.
//!
//! ## Formato aceptado
//!
//! ```text
//! POST /files/notas.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hola!
//! ```
//!
//! ## Reglas
//!
//! 1. Todo el mensaje se separa por `\r\n`.
//! 2. **Request Line**: `METHOD TARGET [...]`; lo que sigue al target se ignora.
//! 3. **Headers**: líneas entre la primera y la última, hasta la primera
//!    línea vacía. Separador obligatorio `": "`.
//! 4. **Body**: siempre el *último* segmento del split. Un body con `\r\n`
//!    dentro no se reconstruye.

use std::collections::HashMap;

/// Método HTTP del request
///
/// Solo GET y POST tienen comportamiento propio; cualquier otro se conserva
/// tal cual para que el router decida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// Cualquier otro token (PUT, DELETE, basura...)
    Other(String),
}

impl Method {
    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(m) => m,
        }
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP
    method: Method,

    /// Target tal como llegó (ej: "/echo/abc")
    target: String,

    /// Headers con claves sensibles a mayúsculas; el último duplicado gana
    headers: HashMap<String, String>,

    /// Body crudo (puede estar vacío)
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing (request malformado)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// El buffer no es UTF-8 válido
    InvalidEncoding,

    /// La request line no tiene método y target
    InvalidRequestLine,

    /// Header sin el separador `": "`
    InvalidHeader(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidEncoding => write!(f, "Request is not valid UTF-8"),
            ParseError::InvalidRequestLine => write!(f, "Invalid request line format"),
            ParseError::InvalidHeader(h) => write!(f, "Invalid header: {}", h),
        }
    }
}

impl std::error::Error for ParseError {}

impl Request {
    /// Parsea un request HTTP desde bytes
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use mini_http_server::http::Request;
    ///
    /// let raw = b"GET /user-agent HTTP/1.1\r\nUser-Agent: curl/8.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.target(), "/user-agent");
    /// assert_eq!(request.header("User-Agent"), Some("curl/8.0"));
    /// assert!(request.body().is_empty());
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let request_str =
            std::str::from_utf8(buffer).map_err(|_| ParseError::InvalidEncoding)?;

        let lines: Vec<&str> = request_str.split("\r\n").collect();

        // 1. Request line
        let (method, target) = Self::parse_request_line(lines[0])?;

        // 2. Headers: entre la primera y la última línea
        let header_lines: &[&str] = if lines.len() >= 2 {
            &lines[1..lines.len() - 1]
        } else {
            &[]
        };
        let headers = Self::parse_headers(header_lines)?;

        // 3. Body: el último segmento, sin importar cuántas líneas vacías hubo
        let body = lines
            .last()
            .map(|last| last.as_bytes().to_vec())
            .unwrap_or_default();

        Ok(Request {
            method,
            target,
            headers,
            body,
        })
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path HTTP/1.1` (la versión no se valida)
    fn parse_request_line(line: &str) -> Result<(Method, String), ParseError> {
        let mut parts = line.split(' ');

        let method = match parts.next() {
            Some(m) if !m.is_empty() => Method::from(m),
            _ => return Err(ParseError::InvalidRequestLine),
        };
        let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;

        Ok((method, target.to_string()))
    }

    /// Parsea los headers HTTP
    ///
    /// Cada header tiene formato: "Name: Value"
    fn parse_headers(lines: &[&str]) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines {
            // La línea vacía marca el fin de los headers
            if line.is_empty() {
                break;
            }

            match line.split_once(": ") {
                Some((name, value)) => {
                    headers.insert(name.to_string(), value.to_string());
                }
                None => return Err(ParseError::InvalidHeader(line.to_string())),
            }
        }

        Ok(headers)
    }

    // === Métodos públicos para acceder a los campos ===

    /// Obtiene el método HTTP del request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Obtiene el target del request
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Obtiene todos los headers
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (la clave es sensible a mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    /// Obtiene el body del request
    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
