use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NucleationParams {
    pub window: usize,
    pub count_threshold: usize,
    pub min_param: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChouFasmanParams {
    pub helix_nucleation: NucleationParams,
    pub strand_nucleation: NucleationParams,
    pub extension_threshold: f64,
    pub helix_filter: f64,
    pub strand_filter: f64,
}

impl ChouFasmanParams {
    pub fn default_v1() -> Self {
        Self {
            helix_nucleation: NucleationParams {
                window: 6,
                count_threshold: 4,
                min_param: 1.0,
            },
            strand_nucleation: NucleationParams {
                window: 5,
                count_threshold: 3,
                min_param: 1.0,
            },
            extension_threshold: 1.0,
            helix_filter: 1.03,
            strand_filter: 1.05,
        }
    }
}

impl Default for ChouFasmanParams {
    fn default() -> Self {
        Self::default_v1()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalParams {
    pub scale: f64,
    pub noise_floor: f64,
    pub helix_extension: f64,
    pub strand_extension: f64,
    pub min_helix_run: usize,
    pub min_strand_run: usize,
}

impl SignalParams {
    pub fn default_v1() -> Self {
        Self {
            scale: 9.0,
            noise_floor: 0.1,
            helix_extension: 1.00,
            strand_extension: 1.02,
            min_helix_run: 3,
            min_strand_run: 2,
        }
    }
}

impl Default for SignalParams {
    fn default() -> Self {
        Self::default_v1()
    }
}

pub const GOR_DEFAULT_WINDOW: usize = 17;
pub const GOR_MAX_WINDOW: usize = 255;
