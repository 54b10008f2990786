use crate::model::region::{Region, RegionSet};
use crate::model::residue::{Conformation, SecondaryClass};
use crate::pipeline::scoring::ResidueScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    First,
    Second,
}

// Higher whole-region average wins; exact ties go to the helix side.
pub fn stronger(
    scorer: &ResidueScorer<'_>,
    first: (Region, Conformation),
    second: (Region, Conformation),
) -> Winner {
    let avg_first = scorer.average_propensity(first.0, first.1);
    let avg_second = scorer.average_propensity(second.0, second.1);
    if avg_first > avg_second {
        Winner::First
    } else if avg_second > avg_first {
        Winner::Second
    } else if first.1 == Conformation::Helix {
        Winner::First
    } else {
        Winner::Second
    }
}

pub fn resolve_conflicts(
    scorer: &ResidueScorer<'_>,
    set_a: &[Region],
    conf_a: Conformation,
    set_b: &[Region],
    conf_b: Conformation,
) -> RegionSet {
    let kept: RegionSet = set_a
        .iter()
        .copied()
        .filter(|a| {
            !set_b.iter().any(|b| {
                a.overlaps(b) && stronger(scorer, (*a, conf_a), (*b, conf_b)) == Winner::Second
            })
        })
        .collect();
    tracing::debug!(
        "{} vs {}: kept {} of {}",
        conf_a.name(),
        conf_b.name(),
        kept.len(),
        set_a.len()
    );
    kept
}

pub fn resolve_per_residue(
    scorer: &ResidueScorer<'_>,
    helix: &[bool],
    strand: &[bool],
) -> Vec<SecondaryClass> {
    (0..scorer.len())
        .map(|i| match (helix[i], strand[i]) {
            (true, true) => {
                if scorer.score_at(i, Conformation::Helix) >= scorer.score_at(i, Conformation::Strand)
                {
                    SecondaryClass::Helix
                } else {
                    SecondaryClass::Strand
                }
            }
            (true, false) => SecondaryClass::Helix,
            (false, true) => SecondaryClass::Strand,
            (false, false) => SecondaryClass::Coil,
        })
        .collect()
}

pub fn revert_short_runs(labels: &mut [SecondaryClass], class: SecondaryClass, min_run: usize) {
    let n = labels.len();
    let mut i = 0usize;
    while i < n {
        if labels[i] != class {
            i += 1;
            continue;
        }
        let mut j = i;
        while j < n && labels[j] == class {
            j += 1;
        }
        if j - i < min_run {
            labels[i..j].iter_mut().for_each(|l| *l = SecondaryClass::Coil);
        }
        i = j;
    }
}

pub fn clean_short_runs(labels: &mut [SecondaryClass], min_helix: usize, min_strand: usize) {
    revert_short_runs(labels, SecondaryClass::Helix, min_helix);
    revert_short_runs(labels, SecondaryClass::Strand, min_strand);
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_resolve.rs"]
mod tests;
