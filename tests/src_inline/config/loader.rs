use super::*;
use crate::model::variant::VariantPolicy;
use tempfile::tempdir;

#[test]
fn defaults_live_in_data_dir() {
    let paths = DataPaths::in_dir(Path::new("data"));
    assert_eq!(paths.drugs, Path::new("data").join("drugs.tsv"));
    assert_eq!(
        paths.clinical_variants,
        Path::new("data").join("clinicalVariants.tsv")
    );
    assert!(matches!(paths.drug_details, DetailsSource::Default(_)));
}

#[test]
fn config_overrides_resolve_against_config_dir() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        "[data]\ngenes = \"catalog/genes.tsv\"\ndrug_details = \"/abs/details.tsv\"\n\n[normalize]\npolicy = \"star-suffix\"\n",
    )
    .expect("write");

    let config = load_config(&path).expect("load");
    assert_eq!(config.normalize.policy, Some(VariantPolicy::StarSuffix));

    let mut paths = DataPaths::in_dir(Path::new("data"));
    paths.apply_config(&config, dir.path());
    assert_eq!(paths.genes, dir.path().join("catalog/genes.tsv"));
    assert_eq!(paths.drugs, Path::new("data").join("drugs.tsv"));
    assert_eq!(
        paths.drug_details,
        DetailsSource::Explicit(PathBuf::from("/abs/details.tsv"))
    );
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "[normalize]\nmode = \"x\"\n").expect("write");
    assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
}

#[test]
fn default_config_is_optional() {
    let dir = tempdir().expect("tempdir");
    assert_eq!(default_config_path(dir.path()), None);
    fs::write(dir.path().join(CONFIG_FILE_NAME), "").expect("write");
    assert_eq!(
        default_config_path(dir.path()),
        Some(dir.path().join(CONFIG_FILE_NAME))
    );
}
