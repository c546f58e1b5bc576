use clap::{Parser, Subcommand};

mod data;
mod genes;
mod list;
mod lookup;
mod validate;

#[derive(Parser, Debug)]
#[command(name = "kira-pgx", version, about = "Kira PGx CLI")]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Lookup(lookup::LookupArgs),
    Genes(genes::GenesArgs),
    List(list::ListArgs),
    Validate(validate::ValidateArgs),
}

impl Cli {
    pub fn dispatch(self) -> anyhow::Result<()> {
        match self.command {
            Command::Lookup(args) => lookup::handle(args),
            Command::Genes(args) => genes::handle(args),
            Command::List(args) => list::handle(args),
            Command::Validate(args) => validate::handle(args),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/cli/mod.rs"]
mod tests;
