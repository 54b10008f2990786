use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::input::Sequence;
use crate::model::residue::UNKNOWN_RESIDUE;
use crate::pipeline::Prediction;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{SegmentLists, SummaryData, ToolMeta, composition, segment_lists};

#[derive(Debug, Clone)]
pub struct ReportInput<'a> {
    pub sequence: &'a Sequence,
    pub prediction: &'a Prediction,
    pub input_source: String,
    pub parameters: serde_json::Value,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &ReportInput<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    write_prediction_tsv(input, &out_dir.join("prediction.tsv"))?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let labels = input.prediction.label_string();
    let report = render_report_text(&summary, input.sequence.as_str(), &labels);
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!("reports written to {}", out_dir.display());
    Ok(())
}

pub fn build_summary(input: &ReportInput<'_>) -> SummaryData {
    let labels = &input.prediction.labels;
    // The classical variant reports the regions it resolved; other methods
    // reconstruct runs from the label string.
    let segments = match &input.prediction.regions {
        Some(lists) => SegmentLists::from(lists),
        None => segment_lists(labels),
    };
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        method: input.prediction.method.name().to_string(),
        input_source: input.input_source.clone(),
        length: labels.len(),
        composition: composition(labels, &segments),
        segments,
        parameters: input.parameters.clone(),
    }
}

fn write_prediction_tsv(input: &ReportInput<'_>, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "position\tresidue\tlabel")?;
    for (i, class) in input.prediction.labels.iter().enumerate() {
        let residue = if i < input.sequence.len() {
            input.sequence.residue(i)
        } else {
            UNKNOWN_RESIDUE
        };
        writeln!(w, "{}\t{}\t{}", i + 1, residue, class.code())?;
    }
    w.flush()
}

fn write_text(path: &Path, content: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(content.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
