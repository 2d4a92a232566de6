use mongodb::bson::Document;

use crate::ack::{DeleteAck, UpdateAck};
use crate::database::Database;
use crate::error::Error;
use crate::fields::reject_reserved;

use super::{Camp, CampId, REGISTERED_PARTICIPANTS};

#[tracing::instrument(skip(db))]
pub async fn create_camp(
    db: &dyn Database,
    name: String,
    registered_participants: Option<u32>,
    details: Document,
) -> Result<Camp, Error> {
    reject_reserved(&details, &[])?;

    let mut fields = Document::new();
    fields.insert("name", name);
    for (key, value) in details {
        fields.insert(key, value);
    }

    let camp = Camp {
        id: CampId::new(),
        registered_participants: registered_participants.map(i64::from),
        details: fields,
    };

    db.camps().insert_camp(&camp).await?;

    Ok(camp)
}

#[tracing::instrument(skip(db))]
pub async fn get_camps(db: &dyn Database) -> Result<Vec<Camp>, Error> {
    let camps = db.camps().fetch_camps().await?;

    Ok(camps)
}

#[tracing::instrument(skip(db))]
pub async fn get_camp_by_id(db: &dyn Database, camp_id: CampId) -> Result<Camp, Error> {
    let camp = db
        .camps()
        .fetch_camp_by_id(camp_id)
        .await?
        .ok_or(Error::CampNotFound { camp_id })?;

    Ok(camp)
}

/// Merges the given fields into the camp. The registration counter is not
/// writable here.
#[tracing::instrument(skip(db))]
pub async fn update_camp(
    db: &dyn Database,
    camp_id: CampId,
    name: Option<String>,
    mut details: Document,
) -> Result<UpdateAck, Error> {
    reject_reserved(&details, &[REGISTERED_PARTICIPANTS])?;

    if let Some(name) = name {
        details.insert("name", name);
    }
    if details.is_empty() {
        return Err(Error::EmptyUpdate);
    }

    let ack = db.camps().update_camp_fields(camp_id, details).await?;
    if ack.matched_count == 0 {
        return Err(Error::CampNotFound { camp_id });
    }

    Ok(ack)
}

#[tracing::instrument(skip(db))]
pub async fn delete_camp(db: &dyn Database, camp_id: CampId) -> Result<DeleteAck, Error> {
    let ack = db.camps().delete_camp(camp_id).await?;
    if ack.deleted_count == 0 {
        return Err(Error::CampNotFound { camp_id });
    }

    Ok(ack)
}

#[tracing::instrument(skip(db))]
pub async fn register_participant(db: &dyn Database, camp_id: CampId) -> Result<UpdateAck, Error> {
    let ack = db.camps().increment_registered_participants(camp_id).await?;
    if ack.matched_count == 0 {
        return Err(Error::CampNotFound { camp_id });
    }

    Ok(ack)
}
