//! [`Consultation`]-related [`Storage`] implementations.

use common::operations::{By, Delete, Insert, Select, Update};
use tracerr::Traced;

use crate::{
    domain::{consultation, Consultation},
    infra::{
        storage::{self, json::key, JsonFile},
        Storage,
    },
};

impl Storage<Select<By<Vec<Consultation>, ()>>> for JsonFile {
    type Ok = Vec<Consultation>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        _: Select<By<Vec<Consultation>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.load(key::CONSULTATIONS).await
    }
}

impl Storage<Select<By<Option<Consultation>, consultation::Id>>> for JsonFile {
    type Ok = Option<Consultation>;
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Consultation>, consultation::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self
            .load::<Vec<Consultation>>(key::CONSULTATIONS)
            .await?
            .into_iter()
            .find(|c| c.id == id))
    }
}

impl Storage<Insert<Consultation>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Insert(consultation): Insert<Consultation>,
    ) -> Result<Self::Ok, Self::Err> {
        self.modify::<Vec<Consultation>, _>(key::CONSULTATIONS, |stored| {
            // Newest-first: submissions are prepended, not appended.
            stored.insert(0, consultation);
        })
        .await
    }
}

impl Storage<Update<Consultation>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Update(consultation): Update<Consultation>,
    ) -> Result<Self::Ok, Self::Err> {
        self.modify::<Vec<Consultation>, _>(key::CONSULTATIONS, |stored| {
            if let Some(slot) =
                stored.iter_mut().find(|c| c.id == consultation.id)
            {
                *slot = consultation;
            }
        })
        .await
    }
}

impl Storage<Delete<consultation::Id>> for JsonFile {
    type Ok = ();
    type Err = Traced<storage::Error>;

    async fn execute(
        &self,
        Delete(id): Delete<consultation::Id>,
    ) -> Result<Self::Ok, Self::Err> {
        self.modify::<Vec<Consultation>, _>(key::CONSULTATIONS, |stored| {
            stored.retain(|c| c.id != id);
        })
        .await
    }
}
