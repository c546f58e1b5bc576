use clap::Args;

use crate::cli::data::DataArgs;

#[derive(Args, Debug)]
pub struct GenesArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Drug whose annotated genes to list
    #[arg(long)]
    drug: String,
}

pub fn handle(args: GenesArgs) -> anyhow::Result<()> {
    let (ctx, _) = args.data.load()?;
    for gene in ctx.genes_for_drug(&args.drug) {
        println!("{}", gene);
    }
    Ok(())
}
