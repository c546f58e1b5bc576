use super::*;

fn record(gene: &str, variant: Option<&str>, phenotypes: Option<&str>) -> ClinicalVariantRecord {
    ClinicalVariantRecord {
        gene: Some(gene.to_string()),
        variant: variant.map(str::to_string),
        chemicals: Some("codeine".to_string()),
        phenotypes: phenotypes.map(str::to_string),
    }
}

fn row(variant: &str, phenotypes: &str) -> PhenotypeRow {
    PhenotypeRow {
        variant: variant.to_string(),
        phenotypes: phenotypes.to_string(),
    }
}

#[test]
fn cyp2d6_scenario() {
    let records = vec![
        record("CYP2D6", Some("CYP2D6*4"), Some("poor metabolizer, reduced efficacy")),
        record("CYP2D6", Some("CYP2D6*4"), Some("reduced efficacy")),
    ];
    let rows = aggregate(&records, VariantPolicy::StripGenePrefix);
    assert_eq!(rows, vec![row("*4", "poor metabolizer, reduced efficacy")]);
}

#[test]
fn empty_input_gives_empty_output() {
    let records: Vec<ClinicalVariantRecord> = Vec::new();
    assert!(aggregate(&records, VariantPolicy::StarSuffix).is_empty());
}

#[test]
fn rows_are_sorted_and_unique() {
    let records = vec![
        record("CYP2C19", Some("CYP2C19*17"), Some("ultrarapid")),
        record("CYP2C19", Some("CYP2C19*2"), Some("poor")),
        record("CYP2C19", Some("CYP2C19*17"), Some("efficacy")),
        record("CYP2C19", Some("CYP2C19*1"), None),
    ];
    let rows = aggregate(&records, VariantPolicy::StripGenePrefix);
    let variants: Vec<&str> = rows.iter().map(|r| r.variant.as_str()).collect();
    assert_eq!(variants, vec!["*1", "*17", "*2"]);
    assert!(variants.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(rows[0].phenotypes, "");
    assert_eq!(rows[1].phenotypes, "efficacy, ultrarapid");
}

#[test]
fn order_of_input_does_not_matter() {
    let mut records = vec![
        record("G", Some("G*1"), Some("b, a")),
        record("G", Some("G*2"), Some("c")),
        record("G", Some("G*1"), Some("a , d")),
    ];
    let forward = aggregate(&records, VariantPolicy::StarSuffix);
    records.reverse();
    assert_eq!(forward, aggregate(&records, VariantPolicy::StarSuffix));
    assert_eq!(forward[0], row("*1", "a, b, d"));
}

#[test]
fn reaggregation_is_idempotent() {
    let records = vec![
        record("G", Some("G*1"), Some("b, a, b")),
        record("G", Some("G*1"), Some(" c,a ")),
    ];
    let first = aggregate(&records, VariantPolicy::StripGenePrefix);
    let replay: Vec<ClinicalVariantRecord> = first
        .iter()
        .map(|r| ClinicalVariantRecord {
            gene: None,
            variant: Some(r.variant.clone()),
            chemicals: None,
            phenotypes: Some(r.phenotypes.clone()),
        })
        .collect();
    assert_eq!(aggregate(&replay, VariantPolicy::StripGenePrefix), first);
}

#[test]
fn policies_group_differently() {
    let records = vec![
        record("CYP2D6", Some("CYP2D6*4"), Some("x")),
        record("CYP2D6", Some("rs3892097 CYP2D6*4"), Some("y")),
    ];
    let strip = aggregate(&records, VariantPolicy::StripGenePrefix);
    assert_eq!(strip.len(), 2);
    let star = aggregate(&records, VariantPolicy::StarSuffix);
    assert_eq!(star, vec![row("*4", "x, y")]);
}

#[test]
fn null_variants_are_skipped_and_counted() {
    let records = vec![
        record("G", None, Some("lost")),
        record("G", Some("G*1"), Some("kept")),
    ];
    let (rows, skipped) = aggregate_counting(&records, VariantPolicy::StripGenePrefix);
    assert_eq!(rows, vec![row("*1", "kept")]);
    assert_eq!(skipped, 1);
}

#[test]
fn strip_policy_merges_same_allele_across_genes() {
    let records = vec![
        record("CYP2D6", Some("CYP2D6*4"), Some("poor")),
        record("CYP2C9", Some("CYP2C9*4"), Some("bleeding")),
    ];
    let rows = aggregate(&records, VariantPolicy::StripGenePrefix);
    assert_eq!(rows, vec![row("*4", "bleeding, poor")]);
}
