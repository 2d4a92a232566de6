use mongodb::bson;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::{Client, Collection};
use tracing::info;

use crate::admin::db::AdminStore;
use crate::admin::Admin;
use crate::camp::db::CampStore;
use crate::camp::Camp;
use crate::config::Config;
use crate::error::Error;
use crate::participant::db::ParticipantStore;
use crate::participant::Participant;

const CAMPS: &str = "camps";
const PARTICIPANTS: &str = "participants";
const ADMINS: &str = "admins";

pub type MongoCampStore = Collection<Camp>;
pub type MongoParticipantStore = Collection<Participant>;
pub type MongoAdminStore = Collection<Admin>;

/// Handle to every collection the server touches.
pub trait Database: Send + Sync {
    fn camps(&self) -> &dyn CampStore;
    fn participants(&self) -> &dyn ParticipantStore;
    fn admins(&self) -> &dyn AdminStore;
}

#[derive(Debug, Clone)]
pub struct MongoDatabase {
    camps: Collection<Camp>,
    participants: Collection<Participant>,
    admins: Collection<Admin>,
    db: mongodb::Database,
}

impl MongoDatabase {
    pub fn new(db: mongodb::Database) -> MongoDatabase {
        MongoDatabase {
            camps: db.collection(CAMPS),
            participants: db.collection(PARTICIPANTS),
            admins: db.collection(ADMINS),
            db,
        }
    }

    /// Builds the client with the stable v1 API and pings the server once
    /// so a bad uri or credentials fail at startup instead of on first use.
    #[tracing::instrument(skip(config), fields(database = %config.database_name))]
    pub async fn connect(config: &Config) -> Result<MongoDatabase, Error> {
        let mut options = ClientOptions::parse(&config.database_uri).await?;
        options.app_name = Some("healcoord".to_string());
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );

        let client = Client::with_options(options)?;
        let db = client.database(&config.database_name);

        db.run_command(bson::doc! { "ping": 1 }, None).await?;
        info!("connected to db");

        crate::admin::db::initialize(&db).await?;

        Ok(MongoDatabase::new(db))
    }

    pub async fn drop(&self) -> Result<(), Error> {
        self.db.drop(None).await?;
        Ok(())
    }
}

impl Database for MongoDatabase {
    fn camps(&self) -> &dyn CampStore {
        &self.camps
    }

    fn participants(&self) -> &dyn ParticipantStore {
        &self.participants
    }

    fn admins(&self) -> &dyn AdminStore {
        &self.admins
    }
}
