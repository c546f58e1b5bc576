pub mod stage1_load;
pub mod stage2_filter;
pub mod stage3_aggregate;
pub mod stage4_report;
