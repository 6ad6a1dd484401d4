use std::net::IpAddr;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::ban::{Ban, BanKind, BanTerms, IpBan, PlayerBan};
use crate::error::{BanError, BanResult};
use crate::player::PlayerReference;

/// Accumulates the fields of a ban and produces a [`Ban`].
///
/// The player is only used when the kind is [`BanKind::Player`] and the
/// address only when it is [`BanKind::Ip`]. Setting the other one is not an
/// error, it is simply ignored by [`BanBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct BanBuilder {
    player: Option<PlayerReference>,
    address: Option<IpAddr>,
    kind: BanKind,
    reason: Option<String>,
    start_date: Option<DateTime<Utc>>,
    expiration_date: Option<DateTime<Utc>>,
}

impl BanBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, player: PlayerReference) -> Self {
        self.player = Some(player);
        self
    }

    pub fn address(mut self, address: IpAddr) -> Self {
        self.address = Some(address);
        self
    }

    pub fn kind(mut self, kind: BanKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn start_date(mut self, date: DateTime<Utc>) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the expiration date, or clears it with `None`.
    pub fn expiration_date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.expiration_date = date;
        self
    }

    pub fn build(self) -> BanResult<Ban> {
        let reason = self.reason.ok_or(BanError::MissingField("reason"))?;
        let start_date = self.start_date.ok_or(BanError::MissingField("start date"))?;
        let terms = BanTerms::new(reason, start_date, self.expiration_date);

        match self.kind {
            BanKind::Player => {
                if self.address.is_some() {
                    debug!("Ignoring address set on a player ban");
                }
                let player = self.player.ok_or(BanError::MissingField("player"))?;
                Ok(Ban::Player(PlayerBan::new(player, terms)))
            }
            BanKind::Ip => {
                if self.player.is_some() {
                    debug!("Ignoring player set on an IP ban");
                }
                let address = self.address.ok_or(BanError::MissingField("address"))?;
                Ok(Ban::Ip(IpBan::new(address, terms)))
            }
        }
    }
}
