use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::authority::{AuthorityBanKind, AuthorityRecord};
use crate::ban::{Ban, BanKind, BanTerms, IpBan, PlayerBan};
use crate::error::{BanError, BanResult};
use crate::player::PlayerReference;
use crate::service::BanService;

fn timestamp(millis: i64) -> BanResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| BanError::InvalidRecord(format!("timestamp {} out of range", millis)))
}

fn terms_from_record(record: &AuthorityRecord) -> BanResult<BanTerms> {
    let expiration_date = if record.is_permanent() {
        None
    } else {
        Some(timestamp(record.expiration)?)
    };

    Ok(BanTerms::new(
        record.reason.clone(),
        timestamp(record.issued)?,
        expiration_date,
    ))
}

fn expect_kind(record: &AuthorityRecord, kind: BanKind) -> BanResult<()> {
    let actual = BanKind::from(record.kind);
    if actual != kind {
        return Err(BanError::InvalidRecord(format!(
            "expected a {} ban, got a {} ban",
            kind, actual
        )));
    }
    Ok(())
}

impl BanService {
    pub(crate) fn record_from_ban(&self, ban: &Ban) -> BanResult<AuthorityRecord> {
        let mut record = AuthorityRecord::new(AuthorityBanKind::from(ban.kind()));
        record.issued = ban.start_date().timestamp_millis();
        record.reason = ban.reason().to_string();
        record.issuer = self.config.bans.issuer.clone();
        if let Some(expiration) = ban.expiration_date() {
            let millis = expiration.timestamp_millis();
            if millis == AuthorityRecord::NO_EXPIRATION {
                return Err(BanError::InvalidRecord(format!(
                    "expiration {} collides with the no-expiration marker",
                    expiration.to_rfc3339()
                )));
            }
            record.expiration = millis;
        }

        match ban {
            Ban::Player(ban) => record.subject = Some(ban.player().name().to_string()),
            Ban::Ip(ban) => record.ip = Some(ban.host().to_string()),
        }

        Ok(record)
    }

    pub(crate) async fn player_ban_from_record(
        &self,
        record: AuthorityRecord,
    ) -> BanResult<PlayerBan> {
        expect_kind(&record, BanKind::Player)?;
        let terms = terms_from_record(&record)?;
        let subject = record
            .subject
            .ok_or_else(|| BanError::InvalidRecord("player ban without a subject".to_string()))?;

        let player = match self.authority.get_player(&subject).await? {
            Some(player) => player,
            None => {
                debug!("Player {} is unknown to the authority, using name only", subject);
                PlayerReference::new(subject)
            }
        };

        Ok(PlayerBan::new(player, terms))
    }

    pub(crate) async fn ip_ban_from_record(&self, record: AuthorityRecord) -> BanResult<IpBan> {
        expect_kind(&record, BanKind::Ip)?;
        let terms = terms_from_record(&record)?;
        let host = record
            .ip
            .ok_or_else(|| BanError::InvalidRecord("IP ban without an address".to_string()))?;

        match self.resolver.resolve(&host).await {
            Ok(address) => Ok(IpBan {
                host,
                address: Some(address),
                terms,
            }),
            Err(e) => {
                warn!("Leaving IP ban on {} unresolved: {}", host, e);
                Ok(IpBan::unresolved(host, terms))
            }
        }
    }
}
