//! Printer adapters for dispatching rendered ESC/POS payloads.
//!
//! Most thermal printers accept raw bytes over TCP port 9100; that is the
//! only transport this crate ships. Anything fancier (spoolers, serial,
//! USB) belongs to the embedding application.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument};

use crate::error::{PrintError, PrintResult};

/// Trait for printer adapters.
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send raw ESC/POS data to the printer.
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Check if the printer is online/reachable.
    async fn is_online(&self) -> bool;
}

/// Network printer speaking raw TCP on port 9100.
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    pub fn new(host: &str, port: u16) -> PrintResult<Self> {
        let addr_str = format!("{host}:{port}");
        let addr = addr_str
            .parse()
            .map_err(|_| PrintError::InvalidConfig(format!("invalid address: {addr_str}")))?;
        Ok(Self {
            addr,
            timeout: Duration::from_secs(5),
        })
    }

    /// Create from a socket address string (e.g. `192.168.1.100:9100`).
    pub fn from_addr(addr: &str) -> PrintResult<Self> {
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| PrintError::InvalidConfig(format!("invalid address: {addr}")))?;
        Ok(Self {
            addr,
            timeout: Duration::from_secs(5),
        })
    }

    /// Set connection timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(data), fields(addr = %self.addr, data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| PrintError::Timeout(format!("connection timeout: {}", self.addr)))??;

        stream.write_all(data).await?;
        stream.flush().await?;
        stream.shutdown().await?;

        info!("payload dispatched");
        Ok(())
    }

    async fn is_online(&self) -> bool {
        matches!(
            tokio::time::timeout(self.timeout, TcpStream::connect(self.addr)).await,
            Ok(Ok(_))
        )
    }
}
