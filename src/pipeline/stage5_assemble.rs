use crate::model::region::{Region, RegionSet};
use crate::model::residue::SecondaryClass;

fn covered(helix: &[Region], strand: &[Region], seq_len: usize) -> Vec<bool> {
    let mut mask = vec![false; seq_len];
    for r in helix.iter().chain(strand.iter()) {
        let clipped = Region::new(r.start, r.end.min(seq_len));
        if !clipped.is_empty() {
            mask[clipped.start..clipped.end].iter_mut().for_each(|m| *m = true);
        }
    }
    mask
}

pub fn coil_fill(helix: &[Region], strand: &[Region], seq_len: usize) -> RegionSet {
    let mask = covered(helix, strand, seq_len);
    let mut coil = Vec::new();
    let mut run_start: Option<usize> = None;
    for (i, &is_covered) in mask.iter().enumerate() {
        match (is_covered, run_start) {
            (false, None) => run_start = Some(i),
            (true, Some(start)) => {
                coil.push(Region::new(start, i));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        coil.push(Region::new(start, seq_len));
    }
    coil
}

pub fn assemble(helix: &[Region], strand: &[Region], seq_len: usize) -> Vec<SecondaryClass> {
    let mut labels = vec![SecondaryClass::Coil; seq_len];
    for (set, class) in [(strand, SecondaryClass::Strand), (helix, SecondaryClass::Helix)] {
        for r in set {
            let clipped = Region::new(r.start, r.end.min(seq_len));
            if !clipped.is_empty() {
                labels[clipped.start..clipped.end].iter_mut().for_each(|l| *l = class);
            }
        }
    }
    labels
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_assemble.rs"]
mod tests;
