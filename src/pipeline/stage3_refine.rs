use crate::model::region::{Region, RegionSet};
use crate::model::residue::Conformation;
use crate::pipeline::scoring::ResidueScorer;

pub fn filter_regions(
    scorer: &ResidueScorer<'_>,
    regions: &[Region],
    conformation: Conformation,
    threshold: f64,
) -> RegionSet {
    let kept: RegionSet = regions
        .iter()
        .copied()
        .filter(|&r| scorer.average_propensity(r, conformation) >= threshold)
        .collect();
    tracing::debug!(
        "{} filter {}: kept {} of {}",
        conformation.name(),
        threshold,
        kept.len(),
        regions.len()
    );
    kept
}

pub fn merge_regions(regions: &[Region]) -> RegionSet {
    let mut sorted = regions.to_vec();
    sorted.sort_by_key(|r| r.start);

    let mut merged: RegionSet = Vec::with_capacity(sorted.len());
    let mut iter = sorted.into_iter();
    let Some(mut current) = iter.next() else {
        return merged;
    };
    for next in iter {
        if current.end >= next.start {
            current = Region::new(current.start.min(next.start), current.end.max(next.end));
        } else {
            merged.push(current);
            current = next;
        }
    }
    merged.push(current);
    merged
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_refine.rs"]
mod tests;
