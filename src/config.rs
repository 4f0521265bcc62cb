use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::errors::AppError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_DIST: &str = "frontend/dist";

/// Where the host listens and what it serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind: String,
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unparsable ports fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let bind = lookup("LEGAL_DESK_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let dist_dir = lookup("LEGAL_DESK_DIST")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST));
        Self { bind, port, dist_dir }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AppError> {
        let ip: IpAddr = self
            .bind
            .parse()
            .map_err(|_| AppError::InvalidBind { value: self.bind.clone() })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn index_file(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }

    /// Checks that a built bundle is actually there before the listener opens.
    pub fn ensure_bundle(&self) -> Result<(), AppError> {
        if !self.dist_dir.is_dir() {
            return Err(AppError::BundleMissing { path: self.dist_dir.clone() });
        }
        if !self.index_file().is_file() {
            return Err(AppError::IndexMissing { path: self.dist_dir.clone() });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = HostConfig::from_lookup(lookup(&[]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn overrides() {
        let config = HostConfig::from_lookup(lookup(&[
            ("PORT", "3001"),
            ("LEGAL_DESK_BIND", "127.0.0.1"),
            ("LEGAL_DESK_DIST", "/srv/legal-desk"),
        ]));
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3001");
        assert_eq!(config.index_file(), PathBuf::from("/srv/legal-desk/index.html"));
    }

    #[test]
    fn garbage_port_falls_back() {
        let config = HostConfig::from_lookup(lookup(&[("PORT", "eighty")]));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn bad_bind_is_rejected() {
        let config = HostConfig::from_lookup(lookup(&[("LEGAL_DESK_BIND", "localhost:80")]));
        assert!(matches!(config.socket_addr(), Err(AppError::InvalidBind { .. })));
    }

    #[test]
    fn missing_bundle_is_reported() {
        let config = HostConfig::from_lookup(lookup(&[("LEGAL_DESK_DIST", "/nonexistent/legal-desk-dist")]));
        assert!(matches!(config.ensure_bundle(), Err(AppError::BundleMissing { .. })));
    }
}
