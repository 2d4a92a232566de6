use std::env;
use std::fmt::{Debug, Display};

use crate::error::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CLUSTER: &str = "cluster0.cuvfj.mongodb.net";
const DEFAULT_APP_NAME: &str = "Cluster0";
const DEFAULT_DATABASE: &str = "healCoordDB";

/// Process configuration, read from the environment once at startup.
#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_uri: String,
    pub database_name: String,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Config::from_lookup(|name| env::var(name).ok())
    }

    /// `MONGODB_URI` wins when set, otherwise the atlas uri is assembled
    /// from `DB_USER`/`DB_PASSWORD` and the optional cluster settings.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|_| Error::InvalidConfig {
                name: "PORT",
                reason: format!("'{}' is not a valid port", port),
            })?,
            None => DEFAULT_PORT,
        };

        let database_uri = match lookup("MONGODB_URI") {
            Some(uri) => uri,
            None => {
                let user = require(&lookup, "DB_USER")?;
                let password = require(&lookup, "DB_PASSWORD")?;
                let cluster = lookup("DB_CLUSTER").unwrap_or_else(|| DEFAULT_CLUSTER.to_string());
                let app_name =
                    lookup("DB_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

                format!(
                    "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName={}",
                    urlencoding::encode(&user),
                    urlencoding::encode(&password),
                    cluster,
                    app_name,
                )
            }
        };

        let database_name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Ok(Config {
            host,
            port,
            database_uri,
            database_name,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    /// The uri with any credentials masked, for logging.
    pub fn redacted_database_uri(&self) -> String {
        let uri = &self.database_uri;
        match (uri.find("://"), uri.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                format!("{}://***@{}", &uri[..scheme_end], &uri[at + 1..])
            }
            _ => uri.clone(),
        }
    }
}

fn require<F>(lookup: &F, name: &'static str) -> Result<String, Error>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or(Error::InvalidConfig {
        name,
        reason: "must be set when MONGODB_URI is not".to_string(),
    })
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "{}:{} -> {} ({})",
            self.host,
            self.port,
            self.redacted_database_uri(),
            self.database_name
        )
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(self, f)
    }
}
