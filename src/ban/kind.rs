use std::fmt;

use serde::{Deserialize, Serialize};

use crate::authority::AuthorityBanKind;

/// The subject a ban applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BanKind {
    /// A ban made on a player
    #[default]
    Player,
    /// A ban made on an IP address
    Ip,
}

impl From<BanKind> for AuthorityBanKind {
    fn from(kind: BanKind) -> Self {
        match kind {
            BanKind::Player => AuthorityBanKind::Uuid,
            BanKind::Ip => AuthorityBanKind::Ip,
        }
    }
}

impl From<AuthorityBanKind> for BanKind {
    fn from(kind: AuthorityBanKind) -> Self {
        match kind {
            AuthorityBanKind::Uuid => BanKind::Player,
            AuthorityBanKind::Ip => BanKind::Ip,
        }
    }
}

impl fmt::Display for BanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BanKind::Player => f.write_str("player"),
            BanKind::Ip => f.write_str("ip"),
        }
    }
}
