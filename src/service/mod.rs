use std::net::IpAddr;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::authority::{AddressResolver, AuthorityBanKind, BanAuthority, SystemResolver};
use crate::ban::{Ban, BanBuilder, IpBan, PlayerBan};
use crate::config::ServiceConfig;
use crate::error::{BanError, BanResult};
use crate::player::PlayerReference;

mod translate;

/// Issues, queries and pardons bans through a [`BanAuthority`].
///
/// Holds no state of its own, so clones are cheap and can be shared freely.
#[derive(Clone)]
pub struct BanService {
    authority: Arc<dyn BanAuthority>,
    resolver: Arc<dyn AddressResolver>,
    config: Arc<ServiceConfig>,
}

impl BanService {
    pub fn new(authority: Arc<dyn BanAuthority>, config: ServiceConfig) -> Self {
        Self {
            authority,
            resolver: Arc::new(SystemResolver),
            config: Arc::new(config),
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn AddressResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// A builder starting now, carrying the configured default reason if any.
    pub fn builder(&self) -> BanBuilder {
        let builder = BanBuilder::new().start_date(Utc::now());
        match &self.config.bans.default_reason {
            Some(reason) => builder.reason(reason.clone()),
            None => builder,
        }
    }

    /// All player bans followed by all IP bans.
    pub async fn list_bans(&self) -> BanResult<Vec<Ban>> {
        let mut bans: Vec<Ban> = self
            .list_player_bans()
            .await?
            .into_iter()
            .map(Ban::from)
            .collect();
        bans.extend(self.list_ip_bans().await?.into_iter().map(Ban::from));
        Ok(bans)
    }

    /// Player bans as the authority lists them. Records that cannot be
    /// turned into a ban are logged and skipped.
    pub async fn list_player_bans(&self) -> BanResult<Vec<PlayerBan>> {
        let records = self.authority.get_all_bans(AuthorityBanKind::Uuid).await?;
        debug!("Authority returned {} player bans", records.len());

        let mut bans = Vec::with_capacity(records.len());
        for record in records {
            match self.player_ban_from_record(record).await {
                Ok(ban) => bans.push(ban),
                Err(BanError::InvalidRecord(reason)) => {
                    warn!("Skipping malformed player ban record: {}", reason);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(bans)
    }

    pub async fn list_ip_bans(&self) -> BanResult<Vec<IpBan>> {
        let records = self.authority.get_all_bans(AuthorityBanKind::Ip).await?;
        debug!("Authority returned {} IP bans", records.len());

        let mut bans = Vec::with_capacity(records.len());
        for record in records {
            match self.ip_ban_from_record(record).await {
                Ok(ban) => bans.push(ban),
                Err(BanError::InvalidRecord(reason)) => {
                    warn!("Skipping malformed IP ban record: {}", reason);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(bans)
    }

    pub async fn is_player_banned(&self, player: &PlayerReference) -> BanResult<bool> {
        debug!("Checking bans for player {}", player);
        self.authority.is_banned(player.name()).await
    }

    pub async fn is_address_banned(&self, address: IpAddr) -> BanResult<bool> {
        debug!("Checking bans for address {}", address);
        self.authority.is_ip_banned(&address.to_string()).await
    }

    /// Removes every ban held against the player.
    pub async fn pardon_player(&self, player: &PlayerReference) -> BanResult<()> {
        info!("Pardoning player {}", player);
        self.authority.unban(player.name()).await
    }

    /// Removes every ban held against the address.
    pub async fn pardon_address(&self, address: IpAddr) -> BanResult<()> {
        info!("Pardoning address {}", address);
        self.authority.unban(&address.to_string()).await
    }

    pub async fn pardon(&self, ban: &Ban) -> BanResult<()> {
        match ban {
            Ban::Player(ban) => self.pardon_player(ban.player()).await,
            Ban::Ip(ban) => {
                // Unresolved bans are still keyed by their stored host.
                info!("Pardoning host {}", ban.host());
                self.authority.unban(ban.host()).await
            }
        }
    }

    pub async fn issue_ban(&self, ban: &Ban) -> BanResult<()> {
        let record = self.record_from_ban(ban)?;
        info!(
            "Issuing {} ban on {} until {}: {}",
            ban.kind(),
            record.subject.as_deref().or(record.ip.as_deref()).unwrap_or("?"),
            ban.expiration_date()
                .map(|date| date.to_rfc3339())
                .unwrap_or_else(|| "forever".to_string()),
            ban.reason()
        );
        self.authority.issue_ban(record).await
    }
}
