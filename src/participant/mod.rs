use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type ParticipantId = TypedId<Participant>;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Participant {
    #[serde(rename = "_id")]
    pub id: ParticipantId,
    /// `email`, `campId`, `confirmationStatus` and whatever else was posted.
    /// `campId` is never checked against the camps collection.
    #[serde(flatten)]
    pub details: Document,
}

impl TypedIdMarker for Participant {
    fn kind() -> &'static str {
        "participant"
    }
}

impl Participant {
    pub fn email(&self) -> Option<&str> {
        self.details.get_str("email").ok()
    }

    pub fn confirmation_status(&self) -> Option<&Bson> {
        self.details.get("confirmationStatus")
    }
}
