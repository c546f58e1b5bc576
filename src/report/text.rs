use crate::pipeline::stage4_report::LookupSummary;

pub fn render_report(summary: &LookupSummary) -> String {
    let mut out = String::new();
    out.push_str("Kira PGx Lookup\n");
    out.push_str("===============\n\n");
    out.push_str("Phenotypes are merged from curated clinical annotations. ");
    out.push_str("Drug matching is by name substring and may include related compounds. ");
    out.push_str("Without a gene selection, alleles with the same name in different genes ");
    out.push_str("(e.g. *4) are merged into one row.\n\n");

    if let Some(drug) = &summary.selection.drug {
        out.push_str(&format!("DRUG: {}\n", drug));
    }
    if let Some(gene) = &summary.selection.gene {
        out.push_str(&format!("BIOMARKER: {}\n", gene));
    }
    out.push_str(&format!("Variant policy: {}\n\n", summary.policy));

    for issue in &summary.issues {
        out.push_str(&format!("! {}\n", issue));
    }
    if !summary.issues.is_empty() {
        out.push('\n');
    }

    if summary.selection.drug.is_some() {
        out.push_str(&format!(
            "Mechanism: {}\n",
            summary.mechanism.as_deref().unwrap_or("unknown")
        ));
    }
    if let Some(check) = &summary.contraindication {
        let verdict = if check.conflict {
            "CONTRAINDICATED"
        } else {
            "no known contraindication"
        };
        out.push_str(&format!(
            "Contraindications ({}): {}\n",
            check.conditions.join(", "),
            verdict
        ));
    }
    if !summary.filtered_genes.is_empty() {
        out.push_str(&format!(
            "Genes annotated for drug: {}\n",
            summary.filtered_genes.join(", ")
        ));
    }
    out.push('\n');

    match &summary.empty_message {
        Some(message) => {
            out.push_str(message);
            out.push('\n');
        }
        None => {
            let width = variant_width(summary);
            out.push_str(&format!("{:<width$}  phenotypes\n", "variants"));
            for row in &summary.rows {
                out.push_str(&format!("{:<width$}  {}\n", row.variant, row.phenotypes));
            }
        }
    }

    out
}

fn variant_width(summary: &LookupSummary) -> usize {
    summary
        .rows
        .iter()
        .map(|r| r.variant.chars().count())
        .chain(std::iter::once("variants".len()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
