use mongodb::bson::Document;

use crate::database::Database;
use crate::error::Error;
use crate::fields::reject_reserved;

use super::Admin;

/// Upserts never report not-found; the path email always wins over an
/// `email` field in the body.
#[tracing::instrument(skip(db))]
pub async fn upsert_admin(
    db: &dyn Database,
    email: String,
    mut fields: Document,
) -> Result<Admin, Error> {
    fields.remove("email");
    reject_reserved(&fields, &[])?;

    let admin = db
        .admins()
        .upsert_admin_by_email(&email, fields)
        .await?
        .ok_or_else(|| {
            Error::ExistentialState(format!("upsert of admin '{}' returned no document", email))
        })?;

    Ok(admin)
}
