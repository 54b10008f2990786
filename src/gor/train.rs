use std::path::{Path, PathBuf};

use crate::gor::GorError;
use crate::gor::model::GorModel;
use crate::input::dssp::parse_labels;
use crate::input::fasta::parse_sequence_file;
use crate::input::ids::parse_ids;
use crate::input::pssm::parse_pssm;
use crate::input::require_dir;
use crate::model::profile::Profile;
use crate::model::residue::{AA_COUNT, AA_ORDER, SecondaryClass};

#[derive(Debug, Clone)]
pub struct TrainingExample {
    pub id: String,
    pub profile: Profile,
    pub labels: Vec<SecondaryClass>,
}

/// Where per-example profiles come from.
#[derive(Debug, Clone)]
pub enum ProfileSource {
    /// `<dir>/<id>.pssm`, empirical probabilities.
    Pssm(PathBuf),
    /// `<dir>/<id>.fasta`, one-hot encoded.
    Fasta(PathBuf),
}

impl ProfileSource {
    pub fn dir(&self) -> &Path {
        match self {
            ProfileSource::Pssm(dir) | ProfileSource::Fasta(dir) => dir,
        }
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        match self {
            ProfileSource::Pssm(dir) => dir.join(format!("{id}.pssm")),
            ProfileSource::Fasta(dir) => dir.join(format!("{id}.fasta")),
        }
    }

    pub fn load(&self, id: &str) -> Result<Profile, GorError> {
        let path = self.path_for(id);
        let profile = match self {
            ProfileSource::Pssm(_) => parse_pssm(&path)?,
            ProfileSource::Fasta(_) => Profile::one_hot(&parse_sequence_file(&path)?, &AA_ORDER),
        };
        Ok(profile)
    }
}

/// Loads every listed example; the first failure aborts the whole set.
pub fn load_training_set(
    ids_path: &Path,
    source: &ProfileSource,
    dssp_dir: &Path,
) -> Result<Vec<TrainingExample>, GorError> {
    require_dir(source.dir())?;
    require_dir(dssp_dir)?;
    let ids = parse_ids(ids_path)?;
    tracing::info!("loading {} training examples from {}", ids.len(), ids_path.display());

    let mut examples = Vec::with_capacity(ids.len());
    for id in ids {
        let profile = source.load(&id)?;
        let labels = parse_labels(&dssp_dir.join(format!("{id}.dssp")))?;
        examples.push(TrainingExample {
            id,
            profile,
            labels,
        });
    }
    Ok(examples)
}

pub fn train(examples: &[TrainingExample], window_size: usize) -> Result<GorModel, GorError> {
    let mut model = GorModel::empty(window_size)?;
    let half = model.half_window();
    let mut used = 0usize;
    let mut skipped = 0usize;

    for example in examples {
        if example.profile.is_empty() || example.profile.total_mass() == 0.0 {
            tracing::warn!("skipping {}: profile has zero total mass", example.id);
            skipped += 1;
            continue;
        }
        if example.profile.len() != example.labels.len() {
            return Err(GorError::LengthMismatch {
                id: example.id.clone(),
                profile: example.profile.len(),
                labels: example.labels.len(),
            });
        }
        accumulate(&mut model, &example.profile, &example.labels, half);
        used += 1;
    }

    model.normalize_rows();
    tracing::info!(
        "trained window {} model from {} examples ({} skipped)",
        window_size,
        used,
        skipped
    );
    Ok(model)
}

fn accumulate(model: &mut GorModel, profile: &Profile, labels: &[SecondaryClass], half: usize) {
    let rows = profile.rows();
    let n = rows.len();
    for (i, &label) in labels.iter().enumerate() {
        let lo = i.saturating_sub(half);
        let hi = (i + half + 1).min(n);
        let matrix = model.matrix_mut(label);
        for (j, src) in rows.iter().enumerate().take(hi).skip(lo) {
            let rel = j + half - i;
            for k in 0..AA_COUNT {
                matrix[rel][k] += src[k];
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/gor/train.rs"]
mod tests;
