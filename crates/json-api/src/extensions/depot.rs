//! Depot helper extensions.

use std::any::Any;

use meet_app::{auth::Identity, domain::persons::records::PersonUuid};
use salvo::prelude::{Depot, StatusError};

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_identity(&mut self, identity: Identity);

    /// The authenticated caller, or 401 when the route was reached anonymously.
    fn identity_or_401(&self) -> Result<&Identity, StatusError>;

    /// The authenticated caller's person, if any.
    fn requester(&self) -> Option<PersonUuid>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_identity(&mut self, identity: Identity) {
        self.inject(identity);
    }

    fn identity_or_401(&self) -> Result<&Identity, StatusError> {
        self.obtain::<Identity>()
            .map_err(|_ignored| StatusError::unauthorized().brief("Authentication required"))
    }

    fn requester(&self) -> Option<PersonUuid> {
        self.obtain::<Identity>()
            .ok()
            .map(|identity| identity.person_uuid)
    }
}
