pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::region::{Region, RegionSet};
use crate::model::residue::SecondaryClass;
use crate::pipeline::RegionLists;

#[derive(Debug, Clone, Serialize)]
pub struct ClassStat {
    pub class: SecondaryClass,
    pub code: char,
    pub count: usize,
    pub fraction: f64,
    pub segments: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentLists {
    pub helix: RegionSet,
    pub strand: RegionSet,
    pub coil: RegionSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub method: String,
    pub input_source: String,
    pub length: usize,
    pub composition: Vec<ClassStat>,
    pub segments: SegmentLists,
    pub parameters: serde_json::Value,
}

/// Maximal runs of `class` in a label sequence, as half-open regions.
pub fn segments(labels: &[SecondaryClass], class: SecondaryClass) -> RegionSet {
    let mut out = Vec::new();
    let mut i = 0usize;
    while i < labels.len() {
        if labels[i] != class {
            i += 1;
            continue;
        }
        let start = i;
        while i < labels.len() && labels[i] == class {
            i += 1;
        }
        out.push(Region::new(start, i));
    }
    out
}

pub fn segment_lists(labels: &[SecondaryClass]) -> SegmentLists {
    SegmentLists {
        helix: segments(labels, SecondaryClass::Helix),
        strand: segments(labels, SecondaryClass::Strand),
        coil: segments(labels, SecondaryClass::Coil),
    }
}

impl From<&RegionLists> for SegmentLists {
    fn from(value: &RegionLists) -> Self {
        SegmentLists {
            helix: value.helix.clone(),
            strand: value.strand.clone(),
            coil: value.coil.clone(),
        }
    }
}

pub fn composition(labels: &[SecondaryClass], lists: &SegmentLists) -> Vec<ClassStat> {
    SecondaryClass::ALL
        .iter()
        .map(|&class| {
            let count = labels.iter().filter(|&&l| l == class).count();
            let segments = match class {
                SecondaryClass::Helix => lists.helix.len(),
                SecondaryClass::Strand => lists.strand.len(),
                SecondaryClass::Coil => lists.coil.len(),
            };
            ClassStat {
                class,
                code: class.code(),
                count,
                fraction: fraction(count, labels.len()),
                segments,
            }
        })
        .collect()
}

pub fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

pub fn format_f64_4(v: f64) -> String {
    format!("{:.4}", v)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
