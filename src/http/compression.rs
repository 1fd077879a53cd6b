//! # Compresión de Bodies
//! src/http/compression.rs
//!
//! Aplica un `Content-Encoding` a un payload. Solo se conoce gzip; cualquier
//! otro nombre deja el payload intacto.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Nombre del encoding gzip tal como viaja en los headers
pub const GZIP: &str = "gzip";

/// Codifica `body` según `encoding`
///
/// Con `"gzip"` produce un stream gzip estándar con nivel por defecto.
/// Con cualquier otro valor retorna una copia del input.
///
/// # Ejemplo
/// ```
/// use mini_http_server::http::compression::compress;
///
/// let plain = compress(b"abc", "br").unwrap();
/// assert_eq!(plain, b"abc");
///
/// let gz = compress(b"abc", "gzip").unwrap();
/// assert_eq!(&gz[..2], &[0x1f_u8, 0x8b]);
/// ```
pub fn compress(body: &[u8], encoding: &str) -> std::io::Result<Vec<u8>> {
    if encoding != GZIP {
        return Ok(body.to_vec());
    }

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body)?;
    encoder.finish()
}
