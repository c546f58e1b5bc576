pub mod cli;
pub mod config;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;

pub mod prelude {
    pub use crate::model::variant::VariantPolicy;
    pub use crate::pipeline::stage1_load::DatasetCtx;
    pub use crate::pipeline::stage2_filter::Selection;
    pub use crate::pipeline::stage3_aggregate::PhenotypeRow;
}
