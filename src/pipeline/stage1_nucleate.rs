use crate::model::region::{Region, RegionSet};
use crate::model::residue::Conformation;
use crate::model::thresholds::NucleationParams;
use crate::pipeline::scoring::ResidueScorer;

// Helix dominance is `>=`, strand dominance is strict `>`.
pub fn is_dominant(scorer: &ResidueScorer<'_>, region: Region, conformation: Conformation) -> bool {
    let own = scorer.average_propensity(region, conformation);
    let other = scorer.average_propensity(region, conformation.competitor());
    match conformation {
        Conformation::Helix => own >= other,
        Conformation::Strand => own > other,
    }
}

pub fn is_nucleation(
    scorer: &ResidueScorer<'_>,
    region: Region,
    conformation: Conformation,
    count_threshold: usize,
    min_param: f64,
) -> bool {
    if !region.is_valid_for(scorer.len()) {
        return false;
    }
    let qualified = (region.start..region.end)
        .filter(|&pos| scorer.score_at(pos, conformation) > min_param)
        .count();
    qualified >= count_threshold && is_dominant(scorer, region, conformation)
}

pub fn find_nucleation_regions(
    scorer: &ResidueScorer<'_>,
    params: &NucleationParams,
    conformation: Conformation,
) -> RegionSet {
    let n = scorer.len();
    if params.window == 0 || params.window > n {
        return Vec::new();
    }
    let regions: RegionSet = (0..=n - params.window)
        .map(|start| Region::new(start, start + params.window))
        .filter(|&region| {
            is_nucleation(
                scorer,
                region,
                conformation,
                params.count_threshold,
                params.min_param,
            )
        })
        .collect();
    tracing::debug!(
        "{} nucleation windows: {}",
        conformation.name(),
        regions.len()
    );
    regions
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_nucleate.rs"]
mod tests;
