use serde::{Deserialize, Serialize};

/// How raw variant identifiers are canonicalized before grouping.
///
/// Two policies exist because source tables disagree on whether variants
/// embed the gene symbol (`CYP2D6*4`) or only the allele suffix. Neither is
/// assumed correct; the caller picks one explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantPolicy {
    /// Remove every occurrence of the gene symbol from the variant.
    #[default]
    StripGenePrefix,
    /// Keep `*` plus whatever follows the last `*`.
    StarSuffix,
}

impl VariantPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantPolicy::StripGenePrefix => "strip-gene-prefix",
            VariantPolicy::StarSuffix => "star-suffix",
        }
    }

    pub fn normalize(&self, variant: &str, gene: &str) -> String {
        match self {
            VariantPolicy::StripGenePrefix => strip_gene_prefix(variant, gene),
            VariantPolicy::StarSuffix => star_suffix(variant),
        }
    }

    /// Null variants stay null; a null gene leaves the variant untouched.
    pub fn normalize_opt(&self, variant: Option<&str>, gene: Option<&str>) -> Option<String> {
        variant.map(|v| self.normalize(v, gene.unwrap_or("")))
    }
}

pub fn strip_gene_prefix(variant: &str, gene: &str) -> String {
    if gene.is_empty() {
        return variant.to_string();
    }
    let mut out = variant.replace(gene, "");
    // removal can splice a fresh occurrence together, e.g. "AABB" minus "AB"
    while out.contains(gene) {
        out = out.replace(gene, "");
    }
    out
}

pub fn star_suffix(variant: &str) -> String {
    match variant.rfind('*') {
        Some(pos) => format!("*{}", &variant[pos + 1..]),
        None => variant.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/variant.rs"]
mod tests;
