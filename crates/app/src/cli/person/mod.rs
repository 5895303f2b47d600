use clap::{Args, Subcommand, ValueEnum};
use meet_app::domain::profiles::ProfileCode;

mod create;
mod set_profile;
mod status;

#[derive(Debug, Args)]
pub(crate) struct PersonCommand {
    #[command(subcommand)]
    command: PersonSubcommand,
}

#[derive(Debug, Subcommand)]
enum PersonSubcommand {
    Create(create::CreatePersonArgs),
    SetProfile(set_profile::SetProfileArgs),
    /// Let the person sign in again
    Activate(status::PersonStatusArgs),
    /// Block the person from signing in and buying
    Deactivate(status::PersonStatusArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    Administrator,
    User,
    Model,
    Moderator,
}

impl From<Profile> for ProfileCode {
    fn from(value: Profile) -> Self {
        match value {
            Profile::Administrator => Self::Administrator,
            Profile::User => Self::User,
            Profile::Model => Self::Model,
            Profile::Moderator => Self::Moderator,
        }
    }
}

pub(crate) async fn run(command: PersonCommand) -> Result<(), String> {
    match command.command {
        PersonSubcommand::Create(args) => create::run(args).await,
        PersonSubcommand::SetProfile(args) => set_profile::run(args).await,
        PersonSubcommand::Activate(args) => status::run(args, true).await,
        PersonSubcommand::Deactivate(args) => status::run(args, false).await,
    }
}
