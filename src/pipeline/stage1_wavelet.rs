use crate::model::propensity::Scale;
use crate::model::thresholds::SignalParams;
use crate::pipeline::scoring::ResidueScorer;

#[inline]
pub fn morlet(t: f64) -> f64 {
    (-0.5 * t * t).exp() * (5.0 * t).cos()
}

pub fn wavelet_transform(values: &[f64], scale: f64) -> Vec<f64> {
    let n = values.len();
    if n == 0 || !scale.is_finite() || scale <= 0.0 {
        return vec![0.0; n];
    }
    // Windows wider than the sequence only add out-of-range indices.
    let half = ((3.0 * scale) as usize).min(n);
    let norm = scale.sqrt();
    (0..n)
        .map(|b| {
            let lo = b.saturating_sub(half);
            let hi = b.saturating_add(half).min(n - 1);
            let sum: f64 = (lo..=hi)
                .map(|k| {
                    let t = (k as f64 - b as f64) / scale;
                    values[k] * morlet(t)
                })
                .sum();
            sum / norm
        })
        .collect()
}

pub fn find_extrema(coeffs: &[f64], noise_floor: f64) -> Vec<usize> {
    let n = coeffs.len();
    if n < 3 {
        return Vec::new();
    }
    (1..n - 1)
        .filter(|&i| {
            let c = coeffs[i];
            let peak = c > coeffs[i - 1] && c > coeffs[i + 1];
            let valley = c < coeffs[i - 1] && c < coeffs[i + 1];
            (peak || valley) && c.abs() > noise_floor
        })
        .collect()
}

pub fn find_signal_sites(scorer: &ResidueScorer<'_>, params: &SignalParams) -> Vec<usize> {
    if scorer.is_empty() {
        return Vec::new();
    }
    let hydro = scorer.signal(Scale::Hydrophobicity);
    let coeffs = wavelet_transform(&hydro, params.scale);
    let sites = find_extrema(&coeffs, params.noise_floor);
    tracing::debug!("wavelet nucleation sites: {}", sites.len());
    sites
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_wavelet.rs"]
mod tests;
