//! Windowed statistical (GOR-style) engine: per-class, per-offset amino-acid
//! frequency matrices trained from labeled profiles.

use thiserror::Error;

use crate::input::InputError;
use crate::model::thresholds::GOR_MAX_WINDOW;

pub mod model;
pub mod predict;
pub mod train;

#[derive(Debug, Error)]
pub enum GorError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("model serialization error: {0}")]
    Model(#[from] serde_json::Error),
    #[error("length mismatch {id}: profile={profile} labels={labels}")]
    LengthMismatch {
        id: String,
        profile: usize,
        labels: usize,
    },
    #[error("window size must be odd and in 1..={max}, got {0}", max = GOR_MAX_WINDOW)]
    InvalidWindow(usize),
    #[error("invalid model: {0}")]
    InvalidModel(String),
}
