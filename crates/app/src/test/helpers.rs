//! Test Helpers

use std::error::Error;

use crate::{
    domain::{
        files::{
            data::NewFileMetadata,
            records::{FileMetadataRecord, FileUuid},
            repository::PgFilesRepository,
        },
        models::{ModelsService, records::ModelRecord},
        packs::{PacksService, records::PackRecord},
        persons::{
            PersonsService,
            data::NewPerson,
            records::{PersonRecord, PersonUuid},
        },
        profiles::ProfileCode,
    },
    test::TestContext,
};

type HelperResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

pub(crate) fn new_person(email: &str, profile_code: ProfileCode) -> NewPerson {
    NewPerson {
        uuid: PersonUuid::new(),
        email: email.to_string(),
        first_name: "Test".to_string(),
        last_name: "Person".to_string(),
        profile_code,
    }
}

/// Creates a user and registers them as a model under `nick_name`.
pub(crate) async fn register_model(
    ctx: &TestContext,
    email: &str,
    nick_name: &str,
) -> HelperResult<(PersonRecord, ModelRecord)> {
    let person = ctx
        .persons
        .create_person(new_person(email, ProfileCode::User))
        .await?;

    let model = ctx.models.register_model(person.uuid, nick_name).await?;

    Ok((person, model))
}

pub(crate) async fn insert_file(
    ctx: &TestContext,
    hash: &str,
    path: &str,
) -> HelperResult<FileMetadataRecord> {
    let mut tx = ctx.db.pool().begin().await?;

    let file = PgFilesRepository::new()
        .create_file_metadata(
            &mut tx,
            NewFileMetadata {
                uuid: FileUuid::new(),
                hash: hash.to_string(),
                path: path.to_string(),
            },
        )
        .await?;

    tx.commit().await?;

    Ok(file)
}

/// Creates the model's next pack, prices it and publishes it.
pub(crate) async fn create_published_pack(
    ctx: &TestContext,
    nick_name: &str,
    price: Option<u64>,
) -> HelperResult<PackRecord> {
    let pack = ctx.packs.create_new_pack(nick_name).await?;

    ctx.packs
        .edit_pack_title(nick_name, pack.pack_number, "Summer".to_string())
        .await?;
    ctx.packs
        .edit_pack_price(nick_name, pack.pack_number, price)
        .await?;
    ctx.packs
        .ready_to_publish_pack(nick_name, pack.pack_number)
        .await?;
    ctx.packs.publish_pack(nick_name, pack.pack_number).await?;

    Ok(ctx.packs.find_pack(pack.uuid).await?)
}
