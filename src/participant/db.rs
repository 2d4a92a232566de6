use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Bson};

use crate::ack::{DeleteAck, UpdateAck};
use crate::database::MongoParticipantStore;
use crate::error::Error;

use super::{Participant, ParticipantId};

#[async_trait]
pub trait ParticipantStore: Send + Sync {
    async fn insert_participant(&self, participant: &Participant) -> Result<(), Error>;

    async fn fetch_participants(&self) -> Result<Vec<Participant>, Error>;

    async fn fetch_participants_by_email(&self, email: &str) -> Result<Vec<Participant>, Error>;

    async fn update_confirmation_status(
        &self,
        participant_id: ParticipantId,
        status: Bson,
    ) -> Result<UpdateAck, Error>;

    async fn delete_participant(&self, participant_id: ParticipantId)
        -> Result<DeleteAck, Error>;
}

#[async_trait]
impl ParticipantStore for MongoParticipantStore {
    #[tracing::instrument(skip(self))]
    async fn insert_participant(&self, participant: &Participant) -> Result<(), Error> {
        self.insert_one(participant, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_participants(&self) -> Result<Vec<Participant>, Error> {
        let participants: Vec<Participant> = self
            .find(bson::doc! {}, None)
            .await?
            .try_collect()
            .await?;

        Ok(participants)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_participants_by_email(&self, email: &str) -> Result<Vec<Participant>, Error> {
        let participants: Vec<Participant> = self
            .find(bson::doc! { "email": email }, None)
            .await?
            .try_collect()
            .await?;

        Ok(participants)
    }

    #[tracing::instrument(skip(self))]
    async fn update_confirmation_status(
        &self,
        participant_id: ParticipantId,
        status: Bson,
    ) -> Result<UpdateAck, Error> {
        let result = self
            .update_one(
                bson::doc! { "_id": participant_id },
                bson::doc! { "$set": { "confirmationStatus": status } },
                None,
            )
            .await?;

        Ok(UpdateAck {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    #[tracing::instrument(skip(self))]
    async fn delete_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Result<DeleteAck, Error> {
        let result = self
            .delete_one(bson::doc! { "_id": participant_id }, None)
            .await?;

        Ok(DeleteAck {
            deleted_count: result.deleted_count,
        })
    }
}
