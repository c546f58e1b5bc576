use super::*;
use crate::pipeline::stage2_filter::{Selection, SelectionIssue};
use crate::pipeline::stage3_aggregate::PhenotypeRow;
use crate::pipeline::stage4_report::{ContraindicationSummary, ToolSummary};

fn summary(rows: Vec<PhenotypeRow>, empty_message: Option<&str>) -> LookupSummary {
    LookupSummary {
        tool: ToolSummary {
            name: "kira-pgx".to_string(),
            version: "0.0.0".to_string(),
        },
        selection: Selection::new(Some("Codeine"), Some("CYP2D6"), &["Asthma".to_string()]),
        policy: "strip-gene-prefix".to_string(),
        issues: vec![],
        mechanism: None,
        contraindication: Some(ContraindicationSummary {
            drug: "Codeine".to_string(),
            conditions: vec!["Asthma".to_string()],
            conflict: true,
        }),
        filtered_genes: vec!["CYP2D6".to_string()],
        rows,
        empty_message: empty_message.map(str::to_string),
    }
}

#[test]
fn renders_table_rows() {
    let text = render_report(&summary(
        vec![
            PhenotypeRow {
                variant: "*4".to_string(),
                phenotypes: "poor metabolizer".to_string(),
            },
            PhenotypeRow {
                variant: "*10".to_string(),
                phenotypes: "".to_string(),
            },
        ],
        None,
    ));
    assert!(text.contains("DRUG: Codeine\n"));
    assert!(text.contains("BIOMARKER: CYP2D6\n"));
    assert!(text.contains("Mechanism: unknown\n"));
    assert!(text.contains("Contraindications (Asthma): CONTRAINDICATED\n"));
    assert!(text.contains("variants  phenotypes\n"));
    assert!(text.contains("*4        poor metabolizer\n"));
}

#[test]
fn renders_fallback_message() {
    let mut s = summary(vec![], Some("No clinical variants found for the selected gene."));
    s.issues.push(SelectionIssue::UnknownGene("CYP2D6".to_string()));
    let text = render_report(&s);
    assert!(text.contains("No clinical variants found for the selected gene.\n"));
    assert!(text.contains("! gene not in catalog: CYP2D6\n"));
    assert!(!text.contains("phenotypes\n"));
}

#[test]
fn header_notes_cross_gene_allele_merge() {
    let text = render_report(&summary(vec![], Some("No selection made.")));
    assert!(text.contains("alleles with the same name in different genes"));
    assert!(text.contains("merged into one row"));
}
