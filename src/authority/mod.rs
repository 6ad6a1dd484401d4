use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BanResult;
use crate::player::PlayerReference;

pub use resolver::{AddressResolver, SystemResolver};

mod resolver;

/// Ban types as the authority names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuthorityBanKind {
    Uuid,
    Ip,
}

/// A ban as the authority stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityRecord {
    pub subject: Option<String>,
    pub ip: Option<String>,
    pub reason: String,
    pub issuer: String,
    /// Milliseconds since the Unix epoch
    pub issued: i64,
    /// Milliseconds since the Unix epoch, or [`AuthorityRecord::NO_EXPIRATION`]
    pub expiration: i64,
    pub kind: AuthorityBanKind,
}

impl AuthorityRecord {
    /// Marks a permanent ban. The instant one millisecond before the epoch
    /// is therefore not a valid expiration.
    pub const NO_EXPIRATION: i64 = -1;

    pub fn new(kind: AuthorityBanKind) -> Self {
        Self {
            subject: None,
            ip: None,
            reason: String::new(),
            issuer: String::new(),
            issued: 0,
            expiration: Self::NO_EXPIRATION,
            kind,
        }
    }

    pub fn is_permanent(&self) -> bool {
        self.expiration == Self::NO_EXPIRATION
    }
}

/// The system of record that persists and enforces bans.
///
/// Implementations report their own failures as
/// [`BanError::Authority`](crate::error::BanError::Authority); the service
/// passes them through untouched.
#[async_trait]
pub trait BanAuthority: Send + Sync {
    async fn issue_ban(&self, record: AuthorityRecord) -> BanResult<()>;

    async fn get_all_bans(&self, kind: AuthorityBanKind) -> BanResult<Vec<AuthorityRecord>>;

    async fn is_banned(&self, name: &str) -> BanResult<bool>;

    async fn is_ip_banned(&self, host: &str) -> BanResult<bool>;

    /// Lifts every ban keyed by `subject`, a player name or an IP host.
    async fn unban(&self, subject: &str) -> BanResult<()>;

    async fn get_player(&self, name: &str) -> BanResult<Option<PlayerReference>>;
}
