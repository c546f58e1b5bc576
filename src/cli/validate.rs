use std::path::{Path, PathBuf};

use clap::Args;

use crate::cli::data::DataArgs;
use crate::model::catalog::DuplicateKey;
use crate::pipeline::stage1_load::DatasetCtx;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    data: DataArgs,

    /// Output directory for validate.tsv and catalog_warnings.tsv
    #[arg(long)]
    out: Option<PathBuf>,
}

pub fn handle(args: ValidateArgs) -> anyhow::Result<()> {
    let (ctx, policy) = args.data.load()?;
    let validate = render_validate(&ctx, policy.as_str());
    let warnings = render_catalog_warnings(&ctx);
    match &args.out {
        Some(out) => {
            std::fs::create_dir_all(out)?;
            write(out, "validate.tsv", &validate)?;
            write(out, "catalog_warnings.tsv", &warnings)?;
        }
        None => print!("{}", validate),
    }
    Ok(())
}

fn write(out_dir: &Path, name: &str, contents: &str) -> anyhow::Result<()> {
    std::fs::write(out_dir.join(name), contents)?;
    Ok(())
}

pub(crate) fn render_validate(ctx: &DatasetCtx, policy: &str) -> String {
    let mut lines = Vec::new();
    lines.push(("drugs_file", ctx.drugs_path.to_string_lossy().to_string()));
    lines.push(("genes_file", ctx.genes_path.to_string_lossy().to_string()));
    lines.push(("variants_file", ctx.variants_path.to_string_lossy().to_string()));
    lines.push((
        "drug_details_file",
        ctx.details_path
            .as_ref()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_else(|| ".".to_string()),
    ));
    lines.push(("variant_policy", policy.to_string()));
    lines.push(("n_drugs", ctx.drugs.len().to_string()));
    lines.push(("n_genes", ctx.genes.len().to_string()));
    lines.push(("n_variants", ctx.variants.len().to_string()));
    lines.push((
        "n_drug_details",
        ctx.details.as_ref().map_or(0, |d| d.len()).to_string(),
    ));
    lines.push(("n_medical_conditions", ctx.medical_conditions().len().to_string()));
    lines.push(("duplicate_drugs", ctx.drugs.duplicates.len().to_string()));
    lines.push(("duplicate_genes", ctx.genes.duplicates.len().to_string()));
    lines.push(("null_drug_names", ctx.drugs.null_keys.to_string()));
    lines.push(("null_gene_symbols", ctx.genes.null_keys.to_string()));
    lines.push(("null_variant_gene", ctx.variant_nulls.gene.to_string()));
    lines.push(("null_variant_variant", ctx.variant_nulls.variant.to_string()));
    lines.push(("null_variant_chemicals", ctx.variant_nulls.chemicals.to_string()));
    lines.push(("null_variant_phenotypes", ctx.variant_nulls.phenotypes.to_string()));

    let mut buf = String::new();
    for (k, v) in lines {
        buf.push_str(k);
        buf.push('\t');
        buf.push_str(&v);
        buf.push('\n');
    }
    buf
}

pub(crate) fn render_catalog_warnings(ctx: &DatasetCtx) -> String {
    let mut buf = String::new();
    buf.push_str("table\tkey\tfirst_row\tdup_row\n");
    push_duplicates(&mut buf, "drugs", &ctx.drugs.duplicates);
    push_duplicates(&mut buf, "genes", &ctx.genes.duplicates);
    if let Some(details) = &ctx.details {
        push_duplicates(&mut buf, "drug_details", &details.duplicates);
    }
    buf
}

fn push_duplicates(buf: &mut String, table: &str, duplicates: &[DuplicateKey]) {
    for dup in duplicates {
        buf.push_str(table);
        buf.push('\t');
        buf.push_str(&dup.key);
        buf.push('\t');
        buf.push_str(&dup.first_row.to_string());
        buf.push('\t');
        buf.push_str(&dup.dup_row.to_string());
        buf.push('\n');
    }
}
