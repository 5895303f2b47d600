//! Test helpers.

use std::sync::Arc;

use meet_app::{
    auth::{Identity, MockAuthService},
    context::AppContext,
    domain::{
        buy_packs::MockBuyPacksService,
        files::MockFilesService,
        models::{MockModelsService, MockProfileImagesService},
        owned_resources::MockOwnedResourcesService,
        pack_payment_methods::MockPackPaymentMethodsService,
        packs::MockPacksService,
        persons::{MockPersonsService, records::PersonUuid},
        profiles::{ProfileCode, permissions_for},
    },
};
use salvo::{affix_state::inject, prelude::*};
use uuid::Uuid;

use crate::{extensions::*, state::State};

pub(crate) const TEST_PERSON_UUID: PersonUuid = PersonUuid::from_uuid(Uuid::nil());

/// Mock services with no expectations. Any unexpected call fails the test.
#[derive(Default)]
pub(crate) struct MockServices {
    pub persons: MockPersonsService,
    pub models: MockModelsService,
    pub profile_images: MockProfileImagesService,
    pub owned_resources: MockOwnedResourcesService,
    pub files: MockFilesService,
    pub packs: MockPacksService,
    pub pack_payment_methods: MockPackPaymentMethodsService,
    pub buy_packs: MockBuyPacksService,
    pub auth: MockAuthService,
}

impl MockServices {
    pub(crate) fn with_packs(packs: MockPacksService) -> Self {
        Self {
            packs,
            ..Self::default()
        }
    }

    pub(crate) fn with_buy_packs(buy_packs: MockBuyPacksService) -> Self {
        Self {
            buy_packs,
            ..Self::default()
        }
    }

    pub(crate) fn with_files(files: MockFilesService) -> Self {
        Self {
            files,
            ..Self::default()
        }
    }

    pub(crate) fn with_models(models: MockModelsService) -> Self {
        Self {
            models,
            ..Self::default()
        }
    }

    pub(crate) fn into_state(self) -> Arc<State> {
        State::from_app_context(AppContext {
            persons: Arc::new(self.persons),
            models: Arc::new(self.models),
            profile_images: Arc::new(self.profile_images),
            owned_resources: Arc::new(self.owned_resources),
            files: Arc::new(self.files),
            packs: Arc::new(self.packs),
            pack_payment_methods: Arc::new(self.pack_payment_methods),
            buy_packs: Arc::new(self.buy_packs),
            auth: Arc::new(self.auth),
        })
    }
}

/// Puts a fixed identity in the depot, standing in for the auth middleware.
pub(crate) struct InjectIdentity(Identity);

#[salvo::handler]
impl InjectIdentity {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        depot.insert_identity(self.0.clone());
        ctrl.call_next(req, depot, res).await;
    }
}

pub(crate) fn identity(profile_code: ProfileCode, model_nick_name: Option<&str>) -> Identity {
    Identity {
        person_uuid: TEST_PERSON_UUID,
        email: model_nick_name.map_or_else(
            || "someone@example.com".to_string(),
            |nick_name| format!("{nick_name}@example.com"),
        ),
        profile_code,
        permissions: permissions_for(profile_code),
        model_nick_name: model_nick_name.map(str::to_string),
    }
}

pub(crate) fn model_identity(nick_name: &str) -> Identity {
    identity(ProfileCode::Model, Some(nick_name))
}

pub(crate) fn user_identity() -> Identity {
    identity(ProfileCode::User, None)
}

pub(crate) fn moderator_identity() -> Identity {
    identity(ProfileCode::Moderator, None)
}

/// A service for `route` with the mocks injected, called as `caller` or anonymously.
pub(crate) fn service_as(services: MockServices, caller: Option<Identity>, route: Router) -> Service {
    let router = Router::new().hoop(inject(services.into_state()));

    let router = match caller {
        Some(identity) => router.hoop(InjectIdentity(identity)),
        None => router,
    };

    Service::new(router.push(route))
}
