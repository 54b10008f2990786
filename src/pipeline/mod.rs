pub mod scoring;
pub mod stage1_nucleate;
pub mod stage1_wavelet;
pub mod stage2_extend;
pub mod stage3_refine;
pub mod stage4_resolve;
pub mod stage5_assemble;
pub mod stage6_report;

use serde::Serialize;

use crate::gor::GorError;
use crate::gor::model::GorModel;
use crate::gor::predict::predict;
use crate::input::Sequence;
use crate::model::profile::Profile;
use crate::model::propensity::{PropensityTables, Scale};
use crate::model::region::RegionSet;
use crate::model::residue::{Conformation, SecondaryClass, labels_to_string};
use crate::model::thresholds::{ChouFasmanParams, SignalParams};
use crate::pipeline::scoring::ResidueScorer;
use crate::pipeline::stage1_nucleate::find_nucleation_regions;
use crate::pipeline::stage1_wavelet::find_signal_sites;
use crate::pipeline::stage2_extend::{coverage_from_sites, extend_regions};
use crate::pipeline::stage3_refine::{filter_regions, merge_regions};
use crate::pipeline::stage4_resolve::{clean_short_runs, resolve_conflicts, resolve_per_residue};
use crate::pipeline::stage5_assemble::{assemble, coil_fill};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    ChouFasman,
    Wavelet,
    Gor,
}

impl Method {
    pub fn name(self) -> &'static str {
        match self {
            Method::ChouFasman => "chou-fasman",
            Method::Wavelet => "wavelet",
            Method::Gor => "gor",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionLists {
    pub helix: RegionSet,
    pub strand: RegionSet,
    pub coil: RegionSet,
}

#[derive(Debug, Clone)]
pub struct Prediction {
    pub method: Method,
    pub labels: Vec<SecondaryClass>,
    pub regions: Option<RegionLists>,
}

impl Prediction {
    pub fn label_string(&self) -> String {
        labels_to_string(&self.labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

fn candidate_regions(
    scorer: &ResidueScorer<'_>,
    params: &ChouFasmanParams,
    conformation: Conformation,
) -> RegionSet {
    let (nucleation, filter) = match conformation {
        Conformation::Helix => (&params.helix_nucleation, params.helix_filter),
        Conformation::Strand => (&params.strand_nucleation, params.strand_filter),
    };
    let nuclei = find_nucleation_regions(scorer, nucleation, conformation);
    let extended = extend_regions(scorer, &nuclei, conformation, params.extension_threshold);
    let filtered = filter_regions(scorer, &extended, conformation, filter);
    merge_regions(&filtered)
}

pub fn run_chou_fasman(
    sequence: &Sequence,
    tables: &PropensityTables,
    params: &ChouFasmanParams,
) -> Prediction {
    let scorer = ResidueScorer::new(sequence, tables);
    let helix = candidate_regions(&scorer, params, Conformation::Helix);
    let strand = candidate_regions(&scorer, params, Conformation::Strand);

    // Both sides are resolved against the unresolved competitor set.
    let helix_final = resolve_conflicts(
        &scorer,
        &helix,
        Conformation::Helix,
        &strand,
        Conformation::Strand,
    );
    let strand_final = resolve_conflicts(
        &scorer,
        &strand,
        Conformation::Strand,
        &helix,
        Conformation::Helix,
    );

    let n = sequence.len();
    let coil = coil_fill(&helix_final, &strand_final, n);
    let labels = assemble(&helix_final, &strand_final, n);
    tracing::info!(
        "chou-fasman: {} helix, {} strand, {} coil regions over {} residues",
        helix_final.len(),
        strand_final.len(),
        coil.len(),
        n
    );

    Prediction {
        method: Method::ChouFasman,
        labels,
        regions: Some(RegionLists {
            helix: helix_final,
            strand: strand_final,
            coil,
        }),
    }
}

pub fn run_wavelet(
    sequence: &Sequence,
    tables: &PropensityTables,
    params: &SignalParams,
) -> Prediction {
    let scorer = ResidueScorer::new(sequence, tables);
    let sites = find_signal_sites(&scorer, params);

    let helix_scores = scorer.signal(Scale::Helix);
    let strand_scores = scorer.signal(Scale::Strand);
    let helix = coverage_from_sites(&sites, &helix_scores, params.helix_extension);
    let strand = coverage_from_sites(&sites, &strand_scores, params.strand_extension);

    let mut labels = resolve_per_residue(&scorer, &helix, &strand);
    clean_short_runs(&mut labels, params.min_helix_run, params.min_strand_run);
    tracing::info!(
        "wavelet: {} nucleation sites over {} residues",
        sites.len(),
        sequence.len()
    );

    Prediction {
        method: Method::Wavelet,
        labels,
        regions: None,
    }
}

pub fn run_gor(model: &GorModel, profile: &Profile) -> Result<Prediction, GorError> {
    let prediction = Prediction {
        method: Method::Gor,
        labels: predict(model, profile)?,
        regions: None,
    };
    tracing::info!("gor: predicted {} positions", prediction.len());
    Ok(prediction)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/mod.rs"]
mod tests;
