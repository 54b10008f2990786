use crate::gor::GorError;
use crate::gor::model::GorModel;
use crate::model::profile::Profile;
use crate::model::residue::{AA_COUNT, SecondaryClass};

/// Windowed class scores at position `i`, in `SecondaryClass::ALL` order.
pub fn score_position(model: &GorModel, profile: &Profile, i: usize) -> [f64; 3] {
    let rows = profile.rows();
    let n = rows.len();
    let half = model.half_window();
    let lo = i.saturating_sub(half);
    let hi = (i + half + 1).min(n);

    let mut scores = [0.0f64; 3];
    for (j, src) in rows.iter().enumerate().take(hi).skip(lo) {
        let rel = j + half - i;
        for (slot, class) in SecondaryClass::ALL.iter().enumerate() {
            let weights = &model.matrix(*class)[rel];
            let mut dot = 0.0f64;
            for k in 0..AA_COUNT {
                dot += src[k] * weights[k];
            }
            scores[slot] += dot;
        }
    }
    scores
}

/// Strict argmax; an exact tie keeps the earlier class (H, then E, then C).
pub fn pick_class(scores: [f64; 3]) -> SecondaryClass {
    let mut best = SecondaryClass::ALL[0];
    let mut max = scores[0];
    for (slot, class) in SecondaryClass::ALL.iter().enumerate().skip(1) {
        if scores[slot] > max {
            max = scores[slot];
            best = *class;
        }
    }
    best
}

pub fn predict(model: &GorModel, profile: &Profile) -> Result<Vec<SecondaryClass>, GorError> {
    model.validate()?;
    Ok((0..profile.len())
        .map(|i| pick_class(score_position(model, profile, i)))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/gor/predict.rs"]
mod tests;
