use std::io;
use std::net::{SocketAddr, TcpStream};

use tokio_core::net::TcpStream as TokioStream;


/// A live connection that a response is being received on
///
/// This is the only thing `StatusSnapshot` needs from the transport's
/// socket. The snapshot queries both endpoints once, when it's created,
/// and never holds the connection afterwards, so the connection may be
/// returned to the pool as soon as the snapshot is constructed.
pub trait Connection {
    /// Address of the peer (server or proxy)
    fn remote_endpoint(&self) -> io::Result<SocketAddr>;
    /// Address of our side of the connection
    fn local_endpoint(&self) -> io::Result<SocketAddr>;
}

impl Connection for TcpStream {
    fn remote_endpoint(&self) -> io::Result<SocketAddr> {
        self.peer_addr()
    }
    fn local_endpoint(&self) -> io::Result<SocketAddr> {
        self.local_addr()
    }
}

impl Connection for TokioStream {
    fn remote_endpoint(&self) -> io::Result<SocketAddr> {
        self.peer_addr()
    }
    fn local_endpoint(&self) -> io::Result<SocketAddr> {
        self.local_addr()
    }
}

impl<'a, T: Connection + ?Sized> Connection for &'a T {
    fn remote_endpoint(&self) -> io::Result<SocketAddr> {
        (**self).remote_endpoint()
    }
    fn local_endpoint(&self) -> io::Result<SocketAddr> {
        (**self).local_endpoint()
    }
}

/// Reads both endpoints, absent ones are `None`
///
/// A socket which is already disconnected fails `peer_addr()`, this is
/// treated the same as having no connection at all.
pub fn capture(conn: Option<&dyn Connection>)
    -> (Option<SocketAddr>, Option<SocketAddr>)
{
    let conn = match conn {
        Some(conn) => conn,
        None => return (None, None),
    };
    let remote = conn.remote_endpoint()
        .map_err(|e| debug!("Can't get remote endpoint: {}", e))
        .ok();
    let local = conn.local_endpoint()
        .map_err(|e| debug!("Can't get local endpoint: {}", e))
        .ok();
    (remote, local)
}
