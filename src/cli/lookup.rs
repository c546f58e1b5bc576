use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::cli::data::DataArgs;
use crate::pipeline::stage2_filter::{Selection, run_stage2_filter};
use crate::pipeline::stage3_aggregate::run_stage3_aggregate;
use crate::pipeline::stage4_report::run_stage4_report;
use crate::report::json::render_summary;
use crate::report::text::render_report;

#[derive(Args, Debug)]
pub struct LookupArgs {
    #[command(flatten)]
    pub(crate) data: DataArgs,

    /// Drug to prescribe
    #[arg(long)]
    pub(crate) drug: Option<String>,

    /// Gene of interest
    #[arg(long)]
    pub(crate) gene: Option<String>,

    /// Patient medical condition to check against contraindications (repeatable)
    #[arg(long = "condition")]
    pub(crate) conditions: Vec<String>,

    /// Optional output directory for summary.json, report.txt and phenotypes.tsv
    #[arg(long)]
    out: Option<PathBuf>,

    /// Stdout format
    #[arg(long, value_enum, default_value = "text")]
    pub(crate) format: FormatArg,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Text,
    Json,
}

pub fn handle(args: LookupArgs) -> anyhow::Result<()> {
    let (ctx, policy) = args.data.load()?;
    let selection = Selection::new(args.drug.as_deref(), args.gene.as_deref(), &args.conditions);

    let start = Instant::now();
    info!(stage = "stage2_filter", "starting stage");
    let filter_ctx = run_stage2_filter(&ctx, &selection);
    info!(
        stage = "stage2_filter",
        elapsed_ms = start.elapsed().as_millis(),
        records = filter_ctx.records.len(),
        issues = filter_ctx.issues.len(),
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage3_aggregate", "starting stage");
    let aggregate_ctx = run_stage3_aggregate(&filter_ctx, policy);
    info!(
        stage = "stage3_aggregate",
        elapsed_ms = start.elapsed().as_millis(),
        policy = policy.as_str(),
        variants = aggregate_ctx.rows.len(),
        skipped_null_variants = aggregate_ctx.skipped_null_variants,
        "finished stage"
    );

    let start = Instant::now();
    info!(stage = "stage4_report", "starting stage");
    let summary = run_stage4_report(&ctx, &filter_ctx, &aggregate_ctx, args.out.as_deref())?;
    info!(
        stage = "stage4_report",
        elapsed_ms = start.elapsed().as_millis(),
        "finished stage"
    );

    match args.format {
        FormatArg::Text => print!("{}", render_report(&summary)),
        FormatArg::Json => println!("{}", render_summary(&summary)?),
    }
    Ok(())
}
