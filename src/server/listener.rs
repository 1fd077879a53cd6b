//! # Listener reutilizable
//! src/server/listener.rs
//!
//! Crea el `TcpListener` con `socket2` para poder activar `SO_REUSEADDR`
//! (y `SO_REUSEPORT` en Unix) antes del bind. Así el servidor puede
//! reiniciarse sin esperar a que el puerto salga de TIME_WAIT.

use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{SocketAddr, TcpListener, ToSocketAddrs};

/// Backlog de conexiones pendientes
const LISTEN_BACKLOG: i32 = 128;

/// Resuelve `host:port` a la primera dirección disponible
pub fn resolve(address: &str) -> io::Result<SocketAddr> {
    address.to_socket_addrs()?.next().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("No address resolved for {}", address),
        )
    })
}

/// Crea un `TcpListener` bloqueante con reuso de dirección/puerto
pub fn create_reusable_listener(addr: SocketAddr) -> io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;

    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;

    Ok(socket.into())
}
