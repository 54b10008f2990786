use crate::model::region::{Region, RegionSet};
use crate::model::residue::Conformation;
use crate::pipeline::scoring::ResidueScorer;

pub const EXTENSION_WINDOW: usize = 4;

pub fn extend_region(
    scorer: &ResidueScorer<'_>,
    region: Region,
    conformation: Conformation,
    threshold: f64,
) -> Region {
    let n = scorer.len();
    let w = EXTENSION_WINDOW;

    let mut start = region.start;
    while start > 0 {
        let probe = Region::new(start - 1, start - 1 + w);
        if scorer.average_propensity(probe, conformation) >= threshold {
            start -= 1;
        } else {
            break;
        }
    }

    let mut end = region.end;
    while end < n {
        let Some(probe_start) = (end + 1).checked_sub(w) else {
            break;
        };
        let probe = Region::new(probe_start, end + 1);
        if scorer.average_propensity(probe, conformation) >= threshold {
            end += 1;
        } else {
            break;
        }
    }

    Region::new(start, end)
}

pub fn extend_regions(
    scorer: &ResidueScorer<'_>,
    regions: &[Region],
    conformation: Conformation,
    threshold: f64,
) -> RegionSet {
    regions
        .iter()
        .map(|&r| extend_region(scorer, r, conformation, threshold))
        .collect()
}

pub fn extend_bounds(seed: usize, scores: &[f64], threshold: f64) -> (usize, usize) {
    let n = scores.len();
    let w = EXTENSION_WINDOW;

    let mut left = seed;
    while left >= w {
        let avg = scores[left + 1 - w..=left].iter().sum::<f64>() / w as f64;
        if avg < threshold {
            break;
        }
        left -= 1;
    }

    let mut right = seed;
    while right + w < n {
        let avg = scores[right..right + w].iter().sum::<f64>() / w as f64;
        if avg < threshold {
            break;
        }
        right += 1;
    }

    (left, right)
}

pub fn mark_coverage(coverage: &mut [bool], left: usize, right: usize) {
    let hi = right.min(coverage.len().saturating_sub(1));
    if coverage.is_empty() || left > hi {
        return;
    }
    coverage[left..=hi].iter_mut().for_each(|c| *c = true);
}

pub fn coverage_from_sites(sites: &[usize], scores: &[f64], threshold: f64) -> Vec<bool> {
    let mut coverage = vec![false; scores.len()];
    for &seed in sites {
        if seed >= scores.len() {
            continue;
        }
        let (left, right) = extend_bounds(seed, scores, threshold);
        mark_coverage(&mut coverage, left, right);
    }
    coverage
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_extend.rs"]
mod tests;
