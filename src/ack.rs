use serde::{Deserialize, Serialize};

/// Outcome of a single-document insert, as reported to the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub inserted_id: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub deleted_count: u64,
}

/// Wraps a write outcome in the `{ "acknowledged": true, ... }` envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledged<T> {
    pub acknowledged: bool,
    #[serde(flatten)]
    pub result: T,
}

impl<T> Acknowledged<T> {
    pub fn new(result: T) -> Acknowledged<T> {
        Acknowledged {
            acknowledged: true,
            result,
        }
    }
}
