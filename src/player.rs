use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity handle for a player known to the ban authority.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerReference {
    name: String,
    uuid: Option<Uuid>,
}

impl PlayerReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: None,
        }
    }

    pub fn with_uuid(name: impl Into<String>, uuid: Uuid) -> Self {
        Self {
            name: name.into(),
            uuid: Some(uuid),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn uuid(&self) -> Option<Uuid> {
        self.uuid
    }
}

impl fmt::Display for PlayerReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
