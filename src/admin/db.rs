use async_trait::async_trait;
use mongodb::bson::{self, Document};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};

use crate::database::MongoAdminStore;
use crate::error::Error;

use super::Admin;

const ADMINS: &str = "admins";

/// One admin per email, so concurrent first-time upserts cannot fork it.
pub async fn initialize(db: &mongodb::Database) -> Result<(), Error> {
    db.run_command(
        bson::doc! {
            "createIndexes": ADMINS,
            "indexes": [
                { "key": { "email": 1 }, "name": "by_email", "unique": true },
            ]
        },
        None,
    )
    .await?;

    Ok(())
}

#[async_trait]
pub trait AdminStore: Send + Sync {
    /// Sets `fields` on the admin with this email, creating it if needed,
    /// and returns the document as it is after the write.
    async fn upsert_admin_by_email(
        &self,
        email: &str,
        fields: Document,
    ) -> Result<Option<Admin>, Error>;
}

#[async_trait]
impl AdminStore for MongoAdminStore {
    #[tracing::instrument(skip(self))]
    async fn upsert_admin_by_email(
        &self,
        email: &str,
        mut fields: Document,
    ) -> Result<Option<Admin>, Error> {
        // keeps `$set` non-empty when the body carries nothing
        fields.insert("email", email);

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let admin: Option<Admin> = self
            .find_one_and_update(
                bson::doc! { "email": email },
                bson::doc! { "$set": fields },
                options,
            )
            .await?;

        Ok(admin)
    }
}
