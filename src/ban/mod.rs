use std::net::IpAddr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::player::PlayerReference;

pub use builder::BanBuilder;
pub use kind::BanKind;

mod builder;
mod kind;

/// Fields shared by every ban, whatever its subject.
///
/// Dates are kept to millisecond precision, the resolution the authority
/// stores them at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanTerms {
    pub(crate) reason: String,
    pub(crate) start_date: DateTime<Utc>,
    pub(crate) expiration_date: Option<DateTime<Utc>>,
}

impl BanTerms {
    pub fn new(
        reason: impl Into<String>,
        start_date: DateTime<Utc>,
        expiration_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            reason: reason.into(),
            start_date: start_date.trunc_subsecs(3),
            expiration_date: expiration_date.map(|date| date.trunc_subsecs(3)),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn expiration_date(&self) -> Option<DateTime<Utc>> {
        self.expiration_date
    }

    /// A ban without an expiration date never runs out.
    pub fn is_indefinite(&self) -> bool {
        self.expiration_date.is_none()
    }
}

/// A ban made on a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerBan {
    pub(crate) player: PlayerReference,
    pub(crate) terms: BanTerms,
}

impl PlayerBan {
    pub fn new(player: PlayerReference, terms: BanTerms) -> Self {
        Self { player, terms }
    }

    pub fn kind(&self) -> BanKind {
        BanKind::Player
    }

    pub fn player(&self) -> &PlayerReference {
        &self.player
    }

    pub fn terms(&self) -> &BanTerms {
        &self.terms
    }
}

/// A ban made on an IP address.
///
/// `host` is the key the authority stores the ban under. `address` is what
/// that key resolved to, and is `None` when resolution failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpBan {
    pub(crate) host: String,
    pub(crate) address: Option<IpAddr>,
    pub(crate) terms: BanTerms,
}

impl IpBan {
    pub fn new(address: IpAddr, terms: BanTerms) -> Self {
        Self {
            host: address.to_string(),
            address: Some(address),
            terms,
        }
    }

    pub(crate) fn unresolved(host: String, terms: BanTerms) -> Self {
        Self {
            host,
            address: None,
            terms,
        }
    }

    pub fn kind(&self) -> BanKind {
        BanKind::Ip
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn address(&self) -> Option<IpAddr> {
        self.address
    }

    pub fn is_resolved(&self) -> bool {
        self.address.is_some()
    }

    pub fn terms(&self) -> &BanTerms {
        &self.terms
    }
}

/// Represents a ban made on either a player or an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ban {
    Player(PlayerBan),
    Ip(IpBan),
}

impl Ban {
    pub fn builder() -> BanBuilder {
        BanBuilder::new()
    }

    pub fn kind(&self) -> BanKind {
        match self {
            Ban::Player(ban) => ban.kind(),
            Ban::Ip(ban) => ban.kind(),
        }
    }

    pub fn terms(&self) -> &BanTerms {
        match self {
            Ban::Player(ban) => &ban.terms,
            Ban::Ip(ban) => &ban.terms,
        }
    }

    pub fn reason(&self) -> &str {
        self.terms().reason()
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.terms().start_date()
    }

    pub fn expiration_date(&self) -> Option<DateTime<Utc>> {
        self.terms().expiration_date()
    }

    pub fn is_indefinite(&self) -> bool {
        self.terms().is_indefinite()
    }

    pub fn as_player(&self) -> Option<&PlayerBan> {
        match self {
            Ban::Player(ban) => Some(ban),
            Ban::Ip(_) => None,
        }
    }

    pub fn as_ip(&self) -> Option<&IpBan> {
        match self {
            Ban::Ip(ban) => Some(ban),
            Ban::Player(_) => None,
        }
    }
}

impl From<PlayerBan> for Ban {
    fn from(ban: PlayerBan) -> Self {
        Ban::Player(ban)
    }
}

impl From<IpBan> for Ban {
    fn from(ban: IpBan) -> Self {
        Ban::Ip(ban)
    }
}
