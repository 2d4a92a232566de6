#![allow(dead_code)]

use std::sync::Mutex;

use actix_web::web::Data;
use async_trait::async_trait;
use healcoord::ack::{DeleteAck, UpdateAck};
use healcoord::admin::db::AdminStore;
use healcoord::admin::{Admin, AdminId};
use healcoord::camp::db::CampStore;
use healcoord::camp::{Camp, CampId};
use healcoord::participant::db::ParticipantStore;
use healcoord::participant::{Participant, ParticipantId};
use healcoord::{Database, Error};
use mongodb::bson::{doc, Bson, Document};

/// In-process stand-in for the three collections, with the same
/// single-document semantics as the real store.
#[derive(Default)]
pub struct MemoryDatabase {
    camps: MemoryCampStore,
    participants: MemoryParticipantStore,
    admins: MemoryAdminStore,
}

pub fn memory_data() -> Data<Box<dyn Database>> {
    MemoryDatabase::default().into_data()
}

impl MemoryDatabase {
    /// Seeds camps as if another writer had stored them directly.
    pub fn with_camps(camps: Vec<Camp>) -> MemoryDatabase {
        MemoryDatabase {
            camps: MemoryCampStore {
                camps: Mutex::new(camps),
            },
            ..MemoryDatabase::default()
        }
    }

    pub fn into_data(self) -> Data<Box<dyn Database>> {
        Data::new(Box::new(self) as Box<dyn Database>)
    }
}

impl Database for MemoryDatabase {
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

fn merge(details: &mut Document, fields: Document) -> bool {
    let mut modified = false;
    for (key, value) in fields {
        if details.get(&key) != Some(&value) {
            details.insert(key, value);
            modified = true;
        }
    }
    modified
}

#[derive(Default)]
pub struct MemoryCampStore {
    camps: Mutex<Vec<Camp>>,
}

#[async_trait]
impl CampStore for MemoryCampStore {
    async fn insert_camp(&self, camp: &Camp) -> Result<(), Error> {
        self.camps.lock().unwrap().push(camp.clone());
        Ok(())
    }

    async fn fetch_camps(&self) -> Result<Vec<Camp>, Error> {
        Ok(self.camps.lock().unwrap().clone())
    }

    async fn fetch_camp_by_id(&self, camp_id: CampId) -> Result<Option<Camp>, Error> {
        let camps = self.camps.lock().unwrap();
        Ok(camps.iter().find(|camp| camp.id == camp_id).cloned())
    }

    async fn update_camp_fields(
        &self,
        camp_id: CampId,
        fields: Document,
    ) -> Result<UpdateAck, Error> {
        let mut camps = self.camps.lock().unwrap();
        let camp = match camps.iter_mut().find(|camp| camp.id == camp_id) {
            Some(camp) => camp,
            None => {
                return Ok(UpdateAck {
                    matched_count: 0,
                    modified_count: 0,
                })
            }
        };

        let modified = merge(&mut camp.details, fields);

        Ok(UpdateAck {
            matched_count: 1,
            modified_count: modified as u64,
        })
    }

    async fn increment_registered_participants(
        &self,
        camp_id: CampId,
    ) -> Result<UpdateAck, Error> {
        let mut camps = self.camps.lock().unwrap();
        match camps.iter_mut().find(|camp| camp.id == camp_id) {
            Some(camp) => {
                camp.registered_participants = Some(camp.registered_participants.unwrap_or(0) + 1);
                Ok(UpdateAck {
                    matched_count: 1,
                    modified_count: 1,
                })
            }
            None => Ok(UpdateAck {
                matched_count: 0,
                modified_count: 0,
            }),
        }
    }

    async fn delete_camp(&self, camp_id: CampId) -> Result<DeleteAck, Error> {
        let mut camps = self.camps.lock().unwrap();
        let before = camps.len();
        camps.retain(|camp| camp.id != camp_id);
        Ok(DeleteAck {
            deleted_count: (before - camps.len()) as u64,
        })
    }
}

#[derive(Default)]
pub struct MemoryParticipantStore {
    participants: Mutex<Vec<Participant>>,
}

#[async_trait]
impl ParticipantStore for MemoryParticipantStore {
    async fn insert_participant(&self, participant: &Participant) -> Result<(), Error> {
        self.participants.lock().unwrap().push(participant.clone());
        Ok(())
    }

    async fn fetch_participants(&self) -> Result<Vec<Participant>, Error> {
        Ok(self.participants.lock().unwrap().clone())
    }

    async fn fetch_participants_by_email(&self, email: &str) -> Result<Vec<Participant>, Error> {
        let participants = self.participants.lock().unwrap();
        Ok(participants
            .iter()
            .filter(|participant| participant.email() == Some(email))
            .cloned()
            .collect())
    }

    async fn update_confirmation_status(
        &self,
        participant_id: ParticipantId,
        status: Bson,
    ) -> Result<UpdateAck, Error> {
        let mut participants = self.participants.lock().unwrap();
        match participants.iter_mut().find(|p| p.id == participant_id) {
            Some(participant) => {
                let modified = merge(
                    &mut participant.details,
                    doc! { "confirmationStatus": status },
                );
                Ok(UpdateAck {
                    matched_count: 1,
                    modified_count: modified as u64,
                })
            }
            None => Ok(UpdateAck {
                matched_count: 0,
                modified_count: 0,
            }),
        }
    }

    async fn delete_participant(
        &self,
        participant_id: ParticipantId,
    ) -> Result<DeleteAck, Error> {
        let mut participants = self.participants.lock().unwrap();
        let before = participants.len();
        participants.retain(|participant| participant.id != participant_id);
        Ok(DeleteAck {
            deleted_count: (before - participants.len()) as u64,
        })
    }
}

#[derive(Default)]
pub struct MemoryAdminStore {
    admins: Mutex<Vec<Admin>>,
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn upsert_admin_by_email(
        &self,
        email: &str,
        fields: Document,
    ) -> Result<Option<Admin>, Error> {
        let mut admins = self.admins.lock().unwrap();
        let index = match admins.iter().position(|admin| admin.email == email) {
            Some(index) => index,
            None => {
                admins.push(Admin {
                    id: AdminId::new(),
                    email: email.to_string(),
                    details: Document::new(),
                });
                admins.len() - 1
            }
        };

        let admin = &mut admins[index];
        merge(&mut admin.details, fields);

        Ok(Some(admin.clone()))
    }
}
