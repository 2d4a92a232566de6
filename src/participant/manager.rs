use mongodb::bson::{Bson, Document};

use crate::ack::{DeleteAck, UpdateAck};
use crate::database::Database;
use crate::error::Error;
use crate::fields::reject_reserved;

use super::{Participant, ParticipantId};

#[tracing::instrument(skip(db))]
pub async fn create_participant(
    db: &dyn Database,
    email: String,
    camp_id: Option<Bson>,
    confirmation_status: Option<Bson>,
    details: Document,
) -> Result<Participant, Error> {
    reject_reserved(&details, &[])?;

    let mut fields = Document::new();
    fields.insert("email", email);
    if let Some(camp_id) = camp_id {
        fields.insert("campId", camp_id);
    }
    if let Some(confirmation_status) = confirmation_status {
        fields.insert("confirmationStatus", confirmation_status);
    }
    for (key, value) in details {
        fields.insert(key, value);
    }

    let participant = Participant {
        id: ParticipantId::new(),
        details: fields,
    };

    db.participants().insert_participant(&participant).await?;

    Ok(participant)
}

#[tracing::instrument(skip(db))]
pub async fn get_participants(db: &dyn Database) -> Result<Vec<Participant>, Error> {
    let participants = db.participants().fetch_participants().await?;

    Ok(participants)
}

/// An email with no registrations is reported as not found rather than as
/// an empty list.
#[tracing::instrument(skip(db))]
pub async fn get_participants_by_email(
    db: &dyn Database,
    email: String,
) -> Result<Vec<Participant>, Error> {
    let participants = db.participants().fetch_participants_by_email(&email).await?;
    if participants.is_empty() {
        return Err(Error::NoParticipantsForEmail { email });
    }

    Ok(participants)
}

#[tracing::instrument(skip(db))]
pub async fn update_confirmation_status(
    db: &dyn Database,
    participant_id: ParticipantId,
    status: Bson,
) -> Result<UpdateAck, Error> {
    let ack = db
        .participants()
        .update_confirmation_status(participant_id, status)
        .await?;
    if ack.matched_count == 0 {
        return Err(Error::ParticipantNotFound { participant_id });
    }

    Ok(ack)
}

#[tracing::instrument(skip(db))]
pub async fn delete_participant(
    db: &dyn Database,
    participant_id: ParticipantId,
) -> Result<DeleteAck, Error> {
    let ack = db.participants().delete_participant(participant_id).await?;
    if ack.deleted_count == 0 {
        return Err(Error::ParticipantNotFound { participant_id });
    }

    Ok(ack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test::MockDatabase;
    use mongodb::bson::doc;
    use std::sync::{Arc, Mutex};

    fn participant(email: &str) -> Participant {
        Participant {
            id: ParticipantId::new(),
            details: doc! {
                "email": email,
                "campId": "65a1f0c2b3d4e5f60718293a",
                "confirmationStatus": "Pending",
                "participantName": "Rahim",
            },
        }
    }

    #[tokio::test]
    async fn can_create_participant() {
        let mut db = MockDatabase::new();
        let inserted = Arc::new(Mutex::new(None));
        let inserted_clone = Arc::clone(&inserted);
        db.participants.on_insert_participant = Box::new(move |participant| {
            *inserted_clone.lock().unwrap() = Some(participant);
            Ok(())
        });

        let participant = create_participant(
            &db,
            "rahim@example.com".into(),
            Some("65a1f0c2b3d4e5f60718293a".into()),
            None,
            doc! { "age": 42 },
        )
        .await
        .unwrap();

        assert_eq!(participant.email(), Some("rahim@example.com"));
        assert_eq!(
            participant.details,
            doc! {
                "email": "rahim@example.com",
                "campId": "65a1f0c2b3d4e5f60718293a",
                "age": 42,
            }
        );
        assert_eq!(
            inserted.lock().unwrap().as_ref(),
            Some(&participant),
            "db.insert_participant was not called with the participant"
        );
    }

    #[tokio::test]
    async fn participants_by_email_returns_all_matches() {
        let mut db = MockDatabase::new();
        let first = participant("rahim@example.com");
        let second = participant("rahim@example.com");
        let expected = vec![first.clone(), second.clone()];
        db.participants.on_fetch_participants_by_email = Box::new(move |email| {
            assert_eq!(email, "rahim@example.com");
            Ok(vec![first.clone(), second.clone()])
        });

        let participants = get_participants_by_email(&db, "rahim@example.com".into())
            .await
            .unwrap();

        assert_eq!(participants, expected);
    }

    #[tokio::test]
    async fn participants_by_email_reports_no_matches_as_not_found() {
        let mut db = MockDatabase::new();
        db.participants.on_fetch_participants_by_email = Box::new(|_| Ok(vec![]));

        let result = get_participants_by_email(&db, "nobody@example.com".into()).await;

        assert_eq!(
            result.unwrap_err(),
            Error::NoParticipantsForEmail {
                email: "nobody@example.com".into()
            }
        );
    }

    #[tokio::test]
    async fn update_confirmation_status_passes_status_through() {
        let mut db = MockDatabase::new();
        let test_participant_id = ParticipantId::new();
        db.participants.on_update_confirmation_status = Box::new(move |(id, status)| {
            assert_eq!(id, test_participant_id);
            assert_eq!(status, Bson::String("Confirmed".into()));
            Ok(UpdateAck {
                matched_count: 1,
                modified_count: 1,
            })
        });

        let ack = update_confirmation_status(&db, test_participant_id, "Confirmed".into())
            .await
            .unwrap();

        assert_eq!(ack.modified_count, 1);
    }

    #[tokio::test]
    async fn update_confirmation_status_keeps_non_string_values() {
        let mut db = MockDatabase::new();
        db.participants.on_update_confirmation_status = Box::new(|(_, status)| {
            assert_eq!(status, Bson::Boolean(true));
            Ok(UpdateAck {
                matched_count: 1,
                modified_count: 1,
            })
        });

        update_confirmation_status(&db, ParticipantId::new(), Bson::Boolean(true))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_confirmation_status_reports_missing_participant() {
        let mut db = MockDatabase::new();
        let test_participant_id = ParticipantId::new();
        db.participants.on_update_confirmation_status = Box::new(|_| {
            Ok(UpdateAck {
                matched_count: 0,
                modified_count: 0,
            })
        });

        let result = update_confirmation_status(&db, test_participant_id, "Confirmed".into()).await;

        assert_eq!(
            result.unwrap_err(),
            Error::ParticipantNotFound {
                participant_id: test_participant_id
            }
        );
    }

    #[tokio::test]
    async fn delete_participant_reports_missing_participant() {
        let mut db = MockDatabase::new();
        let test_participant_id = ParticipantId::new();
        db.participants.on_delete_participant =
            Box::new(|_| Ok(DeleteAck { deleted_count: 0 }));

        let result = delete_participant(&db, test_participant_id).await;

        assert_eq!(
            result.unwrap_err(),
            Error::ParticipantNotFound {
                participant_id: test_participant_id
            }
        );
    }
}
