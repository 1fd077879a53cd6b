//! # Códigos de Estado HTTP
//! src/http/status.rs
//!
//! Tabla cerrada de códigos que el servidor sabe emitir. Cualquier otro
//! código es un error de programación, no un error del cliente:
//!
//! | Código | Razón                 |
//! |--------|-----------------------|
//! | 200    | OK                    |
//! | 201    | Created               |
//! | 404    | Not Found             |
//! | 500    | Internal Server Error |

/// Códigos de estado soportados por el servidor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK - Petición exitosa, con headers y body
    Ok = 200,

    /// 201 Created - Archivo escrito; nunca lleva body
    Created = 201,

    /// 404 Not Found - Ruta o archivo inexistente
    NotFound = 404,

    /// 500 Internal Server Error - Reservado para fallos internos
    InternalServerError = 500,
}

/// Error al convertir un número a un código fuera de la tabla
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedStatusCode(pub u16);

impl std::fmt::Display for UnsupportedStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unsupported status code: {}", self.0)
    }
}

impl std::error::Error for UnsupportedStatusCode {}

impl StatusCode {
    /// Convierte el código a su valor numérico
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::http::StatusCode;
    /// assert_eq!(StatusCode::Created.as_u16(), 201);
    /// ```
    pub fn as_u16(&self) -> u16 {
        *self as u16
    }

    /// Retorna el texto de razón (reason phrase) asociado al código
    ///
    /// # Ejemplo
    /// ```
    /// use mini_http_server::http::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// Indica si la respuesta se serializa solo con la status line
    ///
    /// 201 y 404 nunca llevan headers ni body en este servidor.
    pub fn is_bare(&self) -> bool {
        matches!(self, StatusCode::Created | StatusCode::NotFound)
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = UnsupportedStatusCode;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        match code {
            200 => Ok(StatusCode::Ok),
            201 => Ok(StatusCode::Created),
            404 => Ok(StatusCode::NotFound),
            500 => Ok(StatusCode::InternalServerError),
            other => Err(UnsupportedStatusCode(other)),
        }
    }
}

impl std::fmt::Display for StatusCode {
    /// Formato: "200 OK"
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}
