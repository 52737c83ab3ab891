use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use carousel_core::api::IMAGES_DIR;

/// Port used when none is supplied.
pub const DEFAULT_PORT: u16 = 3000;

/// Public root used when none is supplied.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Runtime settings for the listing server. Fixed for the process lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    /// Root served as static files. Images live in its `images/` child.
    pub public_dir: PathBuf,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Directory enumerated by the listing endpoint.
    pub fn images_dir(&self) -> PathBuf {
        self.public_dir.join(IMAGES_DIR)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}
