use clap::{Args, Subcommand};

mod register;

#[derive(Debug, Args)]
pub(crate) struct ModelCommand {
    #[command(subcommand)]
    command: ModelSubcommand,
}

#[derive(Debug, Subcommand)]
enum ModelSubcommand {
    Register(register::RegisterModelArgs),
}

pub(crate) async fn run(command: ModelCommand) -> Result<(), String> {
    match command.command {
        ModelSubcommand::Register(args) => register::run(args).await,
    }
}
