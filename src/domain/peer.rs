//! Peer address value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::PeerAddressError;

/// Remote host and port the clipboard is pushed to.
/// Parsed once at start-up and fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PeerAddress {
    host: String,
    port: u16,
}

impl PeerAddress {
    /// Create from an already-validated host and port
    pub fn new(host: impl Into<String>, port: u16) -> Result<Self, PeerAddressError> {
        let host = host.into();
        let host = host.trim().trim_start_matches('[').trim_end_matches(']');
        if host.is_empty() {
            return Err(PeerAddressError::EmptyHost);
        }
        if port == 0 {
            return Err(PeerAddressError::InvalidPort(port.to_string()));
        }
        Ok(Self {
            host: host.to_string(),
            port,
        })
    }

    /// Create from the separate host and port strings given on the command line
    pub fn from_parts(host: &str, port: &str) -> Result<Self, PeerAddressError> {
        let port = parse_port(port)?;
        Self::new(host, port)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

/// Parse a TCP port, rejecting 0
pub fn parse_port(input: &str) -> Result<u16, PeerAddressError> {
    match input.trim().parse::<u16>() {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(PeerAddressError::InvalidPort(input.to_string())),
    }
}

impl FromStr for PeerAddress {
    type Err = PeerAddressError;

    /// Parse "host:port" or "[v6]:port"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port) = s
            .trim()
            .rsplit_once(':')
            .ok_or_else(|| PeerAddressError::MissingPort(s.to_string()))?;
        Self::from_parts(host, port)
    }
}

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
