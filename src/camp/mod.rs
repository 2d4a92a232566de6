use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type CampId = TypedId<Camp>;

pub const REGISTERED_PARTICIPANTS: &str = "registeredParticipants";

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Camp {
    #[serde(rename = "_id")]
    pub id: CampId,
    /// Absent until the first registration; only ever bumped by one.
    #[serde(
        rename = "registeredParticipants",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_participants: Option<i64>,
    /// Everything else, `name` included. Stored camps are not guaranteed to
    /// carry any particular field.
    #[serde(flatten)]
    pub details: Document,
}

impl TypedIdMarker for Camp {
    fn kind() -> &'static str {
        "camp"
    }
}

impl Camp {
    pub fn name(&self) -> Option<&str> {
        self.details.get_str("name").ok()
    }
}
