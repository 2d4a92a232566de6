use mongodb::bson::Document;
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type AdminId = TypedId<Admin>;

/// Admins are addressed by email; the `_id` is only assigned by the upsert.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: AdminId,
    pub email: String,
    #[serde(flatten)]
    pub details: Document,
}

impl TypedIdMarker for Admin {
    fn kind() -> &'static str {
        "admin"
    }
}
