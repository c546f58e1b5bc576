use clap::{Args, Subcommand};

use crate::cli::data::DataArgs;

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    data: DataArgs,

    #[command(subcommand)]
    pub(crate) command: ListCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub(crate) enum ListCommand {
    Drugs,
    Genes,
    Conditions,
}

pub fn handle(args: ListArgs) -> anyhow::Result<()> {
    let (ctx, _) = args.data.load()?;
    let names = match args.command {
        ListCommand::Drugs => ctx.drug_names(),
        ListCommand::Genes => ctx.gene_names(),
        ListCommand::Conditions => ctx.medical_conditions(),
    };
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
