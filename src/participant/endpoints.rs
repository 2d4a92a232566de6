use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, patch, post};
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ack::{Acknowledged, DeleteAck, InsertAck, UpdateAck};
use crate::database::Database;
use crate::error::Error;

use super::{manager, Participant, ParticipantId};

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct CreateParticipantBody {
    #[validate(email)]
    pub email: String,
    #[serde(rename = "campId", default, skip_serializing_if = "Option::is_none")]
    pub camp_id: Option<Bson>,
    #[serde(
        rename = "confirmationStatus",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub confirmation_status: Option<Bson>,
    #[serde(flatten)]
    pub details: Document,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateConfirmationStatusBody {
    #[serde(rename = "confirmationStatus")]
    pub confirmation_status: Bson,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticipantBody {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub details: Document,
}

impl ParticipantBody {
    pub fn render(participant: Participant) -> ParticipantBody {
        ParticipantBody {
            id: participant.id.to_string(),
            details: participant.details,
        }
    }
}

#[post("/participants")]
#[tracing::instrument(skip(db))]
pub async fn create_participant(
    db: Data<Box<dyn Database>>,
    body: Json<CreateParticipantBody>,
) -> Result<Json<Acknowledged<InsertAck>>, Error> {
    let body = body.into_inner();
    body.validate()?;

    let participant = manager::create_participant(
        &***db,
        body.email,
        body.camp_id,
        body.confirmation_status,
        body.details,
    )
    .await?;

    Ok(Json(Acknowledged::new(InsertAck {
        inserted_id: participant.id.to_string(),
    })))
}

#[get("/participants")]
#[tracing::instrument(skip(db))]
pub async fn get_participants(
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<ParticipantBody>>, Error> {
    let participants = manager::get_participants(&***db).await?;

    let body = participants.into_iter().map(ParticipantBody::render).collect();

    Ok(Json(body))
}

#[get("/participants/email/{email}")]
#[tracing::instrument(skip(db))]
pub async fn get_participants_by_email(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<Vec<ParticipantBody>>, Error> {
    let email = params.into_inner();

    let participants = manager::get_participants_by_email(&***db, email).await?;

    let body = participants.into_iter().map(ParticipantBody::render).collect();

    Ok(Json(body))
}

#[patch("/participants/{participant_id}")]
#[tracing::instrument(skip(db))]
pub async fn update_participant_confirmation_status(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
    body: Json<UpdateConfirmationStatusBody>,
) -> Result<Json<Acknowledged<UpdateAck>>, Error> {
    let participant_id: ParticipantId = params.into_inner().parse()?;
    let body = body.into_inner();

    let ack =
        manager::update_confirmation_status(&***db, participant_id, body.confirmation_status)
            .await?;

    Ok(Json(Acknowledged::new(ack)))
}

#[delete("/participants/{participant_id}")]
#[tracing::instrument(skip(db))]
pub async fn delete_participant(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<Acknowledged<DeleteAck>>, Error> {
    let participant_id: ParticipantId = params.into_inner().parse()?;

    let ack = manager::delete_participant(&***db, participant_id).await?;

    Ok(Json(Acknowledged::new(ack)))
}
