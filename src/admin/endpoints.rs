use actix_web::put;
use actix_web::web::{Data, Json, Path};
use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::database::Database;
use crate::error::Error;

use super::{manager, Admin};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminBody {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(flatten)]
    pub details: Document,
}

impl AdminBody {
    pub fn render(admin: Admin) -> AdminBody {
        AdminBody {
            id: admin.id.to_string(),
            email: admin.email,
            details: admin.details,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AdminPath {
    #[validate(email)]
    pub email: String,
}

#[put("/admins/{email}")]
#[tracing::instrument(skip(db))]
pub async fn upsert_admin(
    db: Data<Box<dyn Database>>,
    params: Path<AdminPath>,
    body: Json<Document>,
) -> Result<Json<AdminBody>, Error> {
    let params = params.into_inner();
    params.validate()?;

    let admin = manager::upsert_admin(&***db, params.email, body.into_inner()).await?;

    Ok(Json(AdminBody::render(admin)))
}
