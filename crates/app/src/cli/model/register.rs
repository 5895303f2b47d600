use clap::Args;
use meet_app::{
    database::{self, Db},
    domain::{
        models::{ModelsService, PgModelsService},
        persons::records::PersonUuid,
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct RegisterModelArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Person becoming a model
    #[arg(long)]
    person_uuid: Uuid,

    /// Public nickname used in pack URLs
    #[arg(long)]
    nick_name: String,
}

pub(crate) async fn run(args: RegisterModelArgs) -> Result<(), String> {
    if args.nick_name.trim().is_empty() {
        return Err("nick-name cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let model = PgModelsService::new(Db::new(pool))
        .register_model(PersonUuid::from_uuid(args.person_uuid), &args.nick_name)
        .await
        .map_err(|error| format!("failed to register model: {error}"))?;

    println!("model_uuid: {}", model.uuid);
    println!("model_nick_name: {}", model.nick_name);

    Ok(())
}
