use clap::Args;
use meet_app::{
    database::{self, Db},
    domain::persons::{PersonsService, PgPersonsService},
};

use super::Profile;

#[derive(Debug, Args)]
pub(crate) struct SetProfileArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    email: String,

    #[arg(long, value_enum)]
    profile_code: Profile,
}

pub(crate) async fn run(args: SetProfileArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let persons = PgPersonsService::new(Db::new(pool));

    let person = persons
        .find_person_by_email(&args.email)
        .await
        .map_err(|error| format!("failed to find person: {error}"))?;

    let person = persons
        .change_profile(person.uuid, args.profile_code.into())
        .await
        .map_err(|error| format!("failed to change profile: {error}"))?;

    println!("person_uuid: {}", person.uuid);
    println!("person_profile: {:?}", person.profile_code);

    Ok(())
}
