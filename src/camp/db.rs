use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Document};

use crate::ack::{DeleteAck, UpdateAck};
use crate::database::MongoCampStore;
use crate::error::Error;

use super::{Camp, CampId};

#[async_trait]
pub trait CampStore: Send + Sync {
    async fn insert_camp(&self, camp: &Camp) -> Result<(), Error>;

    async fn fetch_camps(&self) -> Result<Vec<Camp>, Error>;

    async fn fetch_camp_by_id(&self, camp_id: CampId) -> Result<Option<Camp>, Error>;

    /// Merges `fields` into the camp with `$set` semantics.
    async fn update_camp_fields(&self, camp_id: CampId, fields: Document)
        -> Result<UpdateAck, Error>;

    /// Must be a single atomic increment on the store side.
    async fn increment_registered_participants(&self, camp_id: CampId)
        -> Result<UpdateAck, Error>;

    async fn delete_camp(&self, camp_id: CampId) -> Result<DeleteAck, Error>;
}

#[async_trait]
impl CampStore for MongoCampStore {
    #[tracing::instrument(skip(self))]
    async fn insert_camp(&self, camp: &Camp) -> Result<(), Error> {
        self.insert_one(camp, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_camps(&self) -> Result<Vec<Camp>, Error> {
        let camps: Vec<Camp> = self
            .find(bson::doc! {}, None)
            .await?
            .try_collect()
            .await?;

        Ok(camps)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_camp_by_id(&self, camp_id: CampId) -> Result<Option<Camp>, Error> {
        let camp: Option<Camp> = self.find_one(bson::doc! { "_id": camp_id }, None).await?;

        Ok(camp)
    }

    #[tracing::instrument(skip(self))]
    async fn update_camp_fields(
        &self,
        camp_id: CampId,
        fields: Document,
    ) -> Result<UpdateAck, Error> {
        let result = self
            .update_one(
                bson::doc! { "_id": camp_id },
                bson::doc! { "$set": fields },
                None,
            )
            .await?;

        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn increment_registered_participants(
        &self,
        camp_id: CampId,
    ) -> Result<UpdateAck, Error> {
        let result = self
            .update_one(
                bson::doc! { "_id": camp_id },
                bson::doc! { "$inc": { "registeredParticipants": 1_i64 } },
                None,
            )
            .await?;

        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn delete_camp(&self, camp_id: CampId) -> Result<DeleteAck, Error> {
        let result = self.delete_one(bson::doc! { "_id": camp_id }, None).await?;

        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }
}
