use clap::Args;
use meet_app::{
    database::{self, Db},
    domain::persons::{PersonsService, PgPersonsService, data::NewPerson, records::PersonUuid},
};

use super::Profile;

#[derive(Debug, Args)]
pub(crate) struct CreatePersonArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long, value_enum, default_value_t = Profile::User)]
    profile_code: Profile,
}

pub(crate) async fn run(args: CreatePersonArgs) -> Result<(), String> {
    if args.email.trim().is_empty() {
        return Err("email cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let person = PgPersonsService::new(Db::new(pool))
        .create_person(NewPerson {
            uuid: PersonUuid::new(),
            email: args.email,
            first_name: args.first_name,
            last_name: args.last_name,
            profile_code: args.profile_code.into(),
        })
        .await
        .map_err(|error| format!("failed to create person: {error}"))?;

    println!("person_uuid: {}", person.uuid);
    println!("person_email: {}", person.email);
    println!("person_profile: {:?}", person.profile_code);

    Ok(())
}
