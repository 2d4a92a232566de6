use std::fmt::{Debug, Display};
use std::io::Error as IoError;

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derivative::Derivative;
use mongodb::error::Error as DatabaseError;
use serde::Serialize;
use validator::ValidationErrors;

use crate::camp::CampId;
use crate::participant::ParticipantId;
use crate::typedid::TypedIdParseError;

#[derive(Debug, Derivative)]
#[derivative(PartialEq)]
pub enum Error {
    // 400
    InvalidJson(#[derivative(PartialEq = "ignore")] JsonPayloadError),
    InvalidPath(#[derivative(PartialEq = "ignore")] PathError),
    InvalidId(TypedIdParseError),
    InvalidBody(#[derivative(PartialEq = "ignore")] ValidationErrors),
    ReservedField {
        field: String,
    },
    EmptyUpdate,

    // 404
    PathNotFound,
    CampNotFound {
        camp_id: CampId,
    },
    ParticipantNotFound {
        participant_id: ParticipantId,
    },
    NoParticipantsForEmail {
        email: String,
    },

    // 500
    ExistentialState(String),
    InvalidConfig {
        name: &'static str,
        reason: String,
    },
    FailedDatabaseCall(#[derivative(PartialEq = "ignore")] DatabaseError),
    IoError(#[derivative(PartialEq = "ignore")] IoError),
}

impl Error {
    pub fn error_message(&self) -> &'static str {
        match self {
            Error::InvalidJson(_) => "The given json could not be parsed",
            Error::InvalidPath(_) => "The given path could not be parsed",
            Error::InvalidId(_) => "The given id is not valid",
            Error::InvalidBody(_) => "The given body failed validation",
            Error::ReservedField { .. } => "The given body sets a field that cannot be set",
            Error::EmptyUpdate => "The given body has no fields to update",
            Error::PathNotFound => "The requested path was not found",
            Error::CampNotFound { .. } => "Camp not found",
            Error::ParticipantNotFound { .. } => "Participant not found",
            Error::NoParticipantsForEmail { .. } => "No participants found for this email",
            Error::ExistentialState(_) => "The server detected an invalid state",
            Error::InvalidConfig { .. } => "The server configuration is invalid",
            Error::FailedDatabaseCall(_) => {
                "An error occurred when communicating with the database"
            }
            Error::IoError(_) => "An error occurred during an I/O operation",
        }
    }

    /// Underlying cause, attached to the response for diagnostics.
    pub fn error_detail(&self) -> Option<String> {
        match self {
            Error::InvalidJson(err) => Some(err.to_string()),
            Error::InvalidPath(err) => Some(err.to_string()),
            Error::InvalidId(err) => Some(err.to_string()),
            Error::InvalidBody(err) => Some(err.to_string()),
            Error::ReservedField { field } => Some(format!("'{}' is reserved", field)),
            Error::ExistentialState(reason) => Some(reason.clone()),
            Error::InvalidConfig { name, reason } => Some(format!("{}: {}", name, reason)),
            Error::FailedDatabaseCall(err) => Some(err.to_string()),
            Error::IoError(err) => Some(err.to_string()),
            Error::EmptyUpdate
            | Error::PathNotFound
            | Error::CampNotFound { .. }
            | Error::ParticipantNotFound { .. }
            | Error::NoParticipantsForEmail { .. } => None,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidJson(_) => StatusCode::BAD_REQUEST,
            Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::InvalidId(_) => StatusCode::BAD_REQUEST,
            Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Error::ReservedField { .. } => StatusCode::BAD_REQUEST,
            Error::EmptyUpdate => StatusCode::BAD_REQUEST,
            Error::PathNotFound => StatusCode::NOT_FOUND,
            Error::CampNotFound { .. } => StatusCode::NOT_FOUND,
            Error::ParticipantNotFound { .. } => StatusCode::NOT_FOUND,
            Error::NoParticipantsForEmail { .. } => StatusCode::NOT_FOUND,
            Error::ExistentialState(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidConfig { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::FailedDatabaseCall(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::IoError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        #[derive(Serialize)]
        struct Dummy {
            message: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            error: Option<String>,
        }

        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        HttpResponse::build(self.status_code()).json(&Dummy {
            message: self.error_message(),
            error: self.error_detail(),
        })
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self.error_detail() {
            Some(detail) => write!(f, "{}: {}", self.error_message(), detail),
            None => Debug::fmt(self, f),
        }
    }
}

impl From<DatabaseError> for Error {
    fn from(error: DatabaseError) -> Error {
        Error::FailedDatabaseCall(error)
    }
}

impl From<ValidationErrors> for Error {
    fn from(error: ValidationErrors) -> Error {
        Error::InvalidBody(error)
    }
}

impl From<TypedIdParseError> for Error {
    fn from(error: TypedIdParseError) -> Error {
        Error::InvalidId(error)
    }
}

impl From<IoError> for Error {
    fn from(error: IoError) -> Error {
        Error::IoError(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidJson(err) => Some(err),
            Error::InvalidPath(err) => Some(err),
            Error::InvalidId(err) => Some(err),
            Error::InvalidBody(err) => Some(err),
            Error::FailedDatabaseCall(err) => Some(err),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}
