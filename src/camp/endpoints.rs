use actix_web::web::{Data, Json, Path};
use actix_web::{delete, get, patch, post, put};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ack::{Acknowledged, DeleteAck, InsertAck, UpdateAck};
use crate::database::Database;
use crate::error::Error;

use super::{manager, Camp, CampId};

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct CreateCampBody {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(
        rename = "registeredParticipants",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_participants: Option<u32>,
    #[serde(flatten)]
    pub details: Document,
}

#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct UpdateCampBody {
    #[validate(length(min = 1))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub details: Document,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampBody {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(
        rename = "registeredParticipants",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registered_participants: Option<i64>,
    #[serde(flatten)]
    pub details: Document,
}

impl CampBody {
    pub fn render(camp: Camp) -> CampBody {
        CampBody {
            id: camp.id.to_string(),
            registered_participants: camp.registered_participants,
            details: camp.details,
        }
    }
}

#[get("/camps")]
#[tracing::instrument(skip(db))]
pub async fn get_camps(db: Data<Box<dyn Database>>) -> Result<Json<Vec<CampBody>>, Error> {
    let camps = manager::get_camps(&***db).await?;

    let body = camps.into_iter().map(CampBody::render).collect();

    Ok(Json(body))
}

#[get("/camps/{camp_id}")]
#[tracing::instrument(skip(db))]
pub async fn get_camp_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<CampBody>, Error> {
    let camp_id: CampId = params.into_inner().parse()?;

    let camp = manager::get_camp_by_id(&***db, camp_id).await?;

    Ok(Json(CampBody::render(camp)))
}

#[post("/camps")]
#[tracing::instrument(skip(db))]
pub async fn create_camp(
    db: Data<Box<dyn Database>>,
    body: Json<CreateCampBody>,
) -> Result<Json<Acknowledged<InsertAck>>, Error> {
    let body = body.into_inner();
    body.validate()?;

    let camp = manager::create_camp(
        &***db,
        body.name,
        body.registered_participants,
        body.details,
    )
    .await?;

    Ok(Json(Acknowledged::new(InsertAck {
        inserted_id: camp.id.to_string(),
    })))
}

#[put("/camps/{camp_id}")]
#[tracing::instrument(skip(db))]
pub async fn update_camp(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
    body: Json<UpdateCampBody>,
) -> Result<Json<Acknowledged<UpdateAck>>, Error> {
    let camp_id: CampId = params.into_inner().parse()?;
    let body = body.into_inner();
    body.validate()?;

    let ack = manager::update_camp(&***db, camp_id, body.name, body.details).await?;

    Ok(Json(Acknowledged::new(ack)))
}

#[delete("/delete-camp/{camp_id}")]
#[tracing::instrument(skip(db))]
pub async fn delete_camp(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<Acknowledged<DeleteAck>>, Error> {
    let camp_id: CampId = params.into_inner().parse()?;

    let ack = manager::delete_camp(&***db, camp_id).await?;

    Ok(Json(Acknowledged::new(ack)))
}

#[patch("/camps/{camp_id}/register")]
#[tracing::instrument(skip(db))]
pub async fn register_participant_in_camp(
    db: Data<Box<dyn Database>>,
    params: Path<String>,
) -> Result<Json<Acknowledged<UpdateAck>>, Error> {
    let camp_id: CampId = params.into_inner().parse()?;

    let ack = manager::register_participant(&***db, camp_id).await?;

    Ok(Json(Acknowledged::new(ack)))
}
