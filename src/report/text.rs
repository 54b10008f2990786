use crate::model::region::Region;
use crate::report::{SummaryData, format_f64_4};

const LINE_WIDTH: usize = 60;

pub fn render_report_text(data: &SummaryData, sequence: &str, labels: &str) -> String {
    let mut out = String::new();

    out.push_str("Protein Secondary Structure Prediction Report\n");
    out.push_str("=============================================\n\n");

    out.push_str(&format!("Method: {}\n", data.method));
    out.push_str(&format!("Input: {}\n", data.input_source));
    out.push_str(&format!("Length: {}\n\n", data.length));

    out.push_str("1. Composition\n");
    for stat in &data.composition {
        out.push_str(&format!(
            "{} {:<6} residues={} fraction={} segments={}\n",
            stat.code,
            class_label(stat.code),
            stat.count,
            format_f64_4(stat.fraction),
            stat.segments
        ));
    }
    out.push('\n');

    out.push_str("2. Segments (1-based, inclusive)\n");
    out.push_str(&format!("Helix (H): {}\n", format_regions(&data.segments.helix)));
    out.push_str(&format!(
        "Strand (E): {}\n",
        format_regions(&data.segments.strand)
    ));
    out.push_str(&format!("Coil (C): {}\n\n", format_regions(&data.segments.coil)));

    out.push_str("3. Sequence / prediction\n");
    out.push_str(&render_alignment(sequence, labels));

    out.push_str("\nLegend: H = alpha helix, E = beta strand, C = coil\n");
    out
}

fn class_label(code: char) -> &'static str {
    match code {
        'H' => "helix",
        'E' => "strand",
        _ => "coil",
    }
}

pub fn format_regions(regions: &[Region]) -> String {
    if regions.is_empty() {
        return "none".to_string();
    }
    regions
        .iter()
        .map(|r| format!("{}-{}", r.start + 1, r.end))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sequence and labels in blocks of 60 with a 1-based start column.
pub fn render_alignment(sequence: &str, labels: &str) -> String {
    let mut out = String::new();
    let seq = sequence.as_bytes();
    let lab = labels.as_bytes();
    let mut start = 0usize;
    while start < seq.len() {
        let end = (start + LINE_WIDTH).min(seq.len());
        let lab_end = end.min(lab.len());
        let lab_start = start.min(lab_end);
        out.push_str(&format!(
            "{:>6} {}\n",
            start + 1,
            String::from_utf8_lossy(&seq[start..end])
        ));
        out.push_str(&format!(
            "{:>6} {}\n\n",
            "",
            String::from_utf8_lossy(&lab[lab_start..lab_end])
        ));
        start = end;
    }
    out
}
