pub mod catalog;
pub mod contraindications;
pub mod records;
pub mod terms;
pub mod variant;
