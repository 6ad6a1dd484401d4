use std::net::IpAddr;

use async_trait::async_trait;
use tokio::net::lookup_host;
use tracing::debug;

use crate::error::{BanError, BanResult};

/// Turns the host string an IP ban is stored under back into an address.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve(&self, host: &str) -> BanResult<IpAddr>;
}

/// Accepts IP literals as-is and falls back to the system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

#[async_trait]
impl AddressResolver for SystemResolver {
    async fn resolve(&self, host: &str) -> BanResult<IpAddr> {
        if let Ok(address) = host.parse::<IpAddr>() {
            return Ok(address);
        }

        debug!("Looking up host {}", host);
        let mut addrs = lookup_host((host, 0)).await.map_err(|e| BanError::AddressResolution {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

        addrs
            .next()
            .map(|addr| addr.ip())
            .ok_or_else(|| BanError::AddressResolution {
                host: host.to_string(),
                reason: "no addresses found".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[tokio::test]
    async fn test_resolves_ipv4_literal() {
        let address = SystemResolver.resolve("192.0.2.1").await.unwrap();
        assert_eq!(address, IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)));
    }

    #[tokio::test]
    async fn test_resolves_ipv6_literal() {
        let address = SystemResolver.resolve("2001:db8::1").await.unwrap();
        assert_eq!(address, IpAddr::V6("2001:db8::1".parse::<Ipv6Addr>().unwrap()));
    }
}
