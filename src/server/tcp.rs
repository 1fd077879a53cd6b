//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Un loop de accept en el thread principal y un thread por conexión, sin
//! pool ni límite. Cada conexión hace una sola lectura de hasta
//! [`READ_BUFFER_SIZE`] bytes: lo que no entre se descarta en silencio.
//! No hay timeouts; un cliente que no envía nada bloquea solo su thread.
//!
//! Un request malformado o un error de I/O que no sea "no encontrado"
//! termina la conexión sin enviar respuesta. El error queda en el log.

use super::listener;
use crate::config::Config;
use crate::http::{ParseError, Request};
use crate::router::Router;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

/// Tamaño del único read que se hace por conexión
pub const READ_BUFFER_SIZE: usize = 1024;

/// Errores que terminan una conexión sin respuesta
#[derive(Debug)]
pub enum ConnectionError {
    /// Fallo de lectura/escritura del socket o del sistema de archivos
    Io(io::Error),

    /// Request malformado
    Parse(ParseError),
}

impl std::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionError::Io(e) => write!(f, "I/O error: {}", e),
            ConnectionError::Parse(e) => write!(f, "Malformed request: {}", e),
        }
    }
}

impl std::error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConnectionError::Io(e) => Some(e),
            ConnectionError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConnectionError {
    fn from(e: io::Error) -> Self {
        ConnectionError::Io(e)
    }
}

impl From<ParseError> for ConnectionError {
    fn from(e: ParseError) -> Self {
        ConnectionError::Parse(e)
    }
}

/// Servidor HTTP/1.1 concurrente (thread por conexión)
pub struct Server {
    config: Arc<Config>,
    router: Arc<Router>,
    listener: TcpListener,
}

impl Server {
    /// Hace bind en `config.address()` con la tabla de rutas por defecto
    pub fn bind(config: Config) -> io::Result<Self> {
        Self::with_router(config, Router::with_default_routes())
    }

    /// Hace bind usando un router propio
    pub fn with_router(config: Config, router: Router) -> io::Result<Self> {
        let address = listener::resolve(&config.address())?;
        log::info!("[*] Iniciando servidor en {}", address);

        let listener = listener::create_reusable_listener(address)?;

        Ok(Self {
            config: Arc::new(config),
            router: Arc::new(router),
            listener,
        })
    }

    /// Dirección real del listener (útil con puerto 0)
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Loop de accept; no retorna mientras el listener siga vivo
    pub fn run(&self) -> io::Result<()> {
        log::info!("[+] Servidor escuchando en {}", self.local_addr()?);
        log::info!("[*] Modo concurrente: un thread por conexion");

        for stream in self.listener.incoming() {
            let mut stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    log::error!("   ❌ Error al aceptar conexión: {}", e);
                    continue;
                }
            };

            let router = Arc::clone(&self.router);
            let config = Arc::clone(&self.config);

            let peer_addr = stream
                .peer_addr()
                .map(|addr| addr.to_string())
                .unwrap_or_else(|_| "unknown".to_string());

            log::info!(" ✅ Nueva conexión desde: {} (spawning thread)", peer_addr);

            thread::spawn(move || {
                if let Err(e) = Self::handle_connection(&mut stream, &router, &config) {
                    log::error!("   ❌ Error en conexión {}: {}", peer_addr, e);
                }
                // El stream se cierra al salir del thread
            });
        }

        Ok(())
    }

    /// Atiende un único request sobre cualquier conexión `Read + Write`
    ///
    /// - 0 bytes leídos: el peer cerró, no se responde
    /// - Request malformado o I/O no recuperable: `Err`, no se responde
    /// - Resto: se escribe la respuesta completa
    pub fn handle_connection<S: Read + Write>(
        stream: &mut S,
        router: &Router,
        config: &Config,
    ) -> Result<(), ConnectionError> {
        let start = Instant::now();

        let mut buffer = [0u8; READ_BUFFER_SIZE];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            log::debug!("   Conexión cerrada sin datos");
            return Ok(());
        }

        let request = Request::parse(&buffer[..bytes_read])?;
        log::debug!("   {} bytes: {} {}", bytes_read, request.method().as_str(), request.target());

        let response = router.route(&request, config)?;

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        log::info!(
            "   {} {} → {} ({:.2}ms)",
            request.method().as_str(),
            request.target(),
            response.status(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        Ok(())
    }
}
