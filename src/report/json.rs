use crate::pipeline::stage4_report::{LookupSummary, Stage4Error};

pub type Summary = LookupSummary;

pub fn render_summary(summary: &Summary) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(summary)
}

pub fn write_summary(out_dir: &std::path::Path, summary: &Summary) -> Result<(), Stage4Error> {
    let json = render_summary(summary)?;
    let path = out_dir.join("summary.json");
    std::fs::write(path, json)?;
    Ok(())
}
