use clap::Args;
use meet_app::{
    database::{self, Db},
    domain::persons::{PersonsService, PgPersonsService},
};

#[derive(Debug, Args)]
pub(crate) struct PersonStatusArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    #[arg(long)]
    email: String,
}

pub(crate) async fn run(args: PersonStatusArgs, active: bool) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let persons = PgPersonsService::new(Db::new(pool));

    let person = persons
        .find_person_by_email(&args.email)
        .await
        .map_err(|error| format!("failed to find person: {error}"))?;

    let person = persons
        .set_person_active(person.uuid, active)
        .await
        .map_err(|error| format!("failed to update person: {error}"))?;

    println!("person_uuid: {}", person.uuid);
    println!("person_active: {}", person.active);

    Ok(())
}
