//! Typed ban management over an external ban authority.
//!
//! Bans are described with [`Ban`] values, usually made through a
//! [`BanBuilder`], and handed to a [`BanService`] which forwards them to
//! whatever [`BanAuthority`] the host provides.

pub mod authority;
pub mod ban;
pub mod config;
pub mod error;
pub mod player;
pub mod service;

pub use authority::{
    AddressResolver, AuthorityBanKind, AuthorityRecord, BanAuthority, SystemResolver,
};
pub use ban::{Ban, BanBuilder, BanKind, BanTerms, IpBan, PlayerBan};
pub use config::ServiceConfig;
pub use error::{BanError, BanResult};
pub use player::PlayerReference;
pub use service::BanService;
