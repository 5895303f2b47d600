use clap::{Parser, Subcommand};

mod db;
mod model;
mod person;
mod token;

#[derive(Debug, Parser)]
#[command(name = "meet-app", about = "Meet CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Person(person::PersonCommand),
    Model(model::ModelCommand),
    Token(token::TokenCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Person(command) => person::run(command).await,
            Commands::Model(command) => model::run(command).await,
            Commands::Token(command) => token::run(command).await,
        }
    }
}
