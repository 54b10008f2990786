mod gor;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde_json::json;

use crate::gor::model::GorModel;
use crate::gor::train::{ProfileSource, load_training_set, train};
use crate::input::dssp::parse_labels;
use crate::input::fasta::parse_sequence_file;
use crate::input::pssm::parse_pssm_record;
use crate::input::{Sequence, load_json, normalize_sequence};
use crate::model::profile::Profile;
use crate::model::propensity::PropensityTables;
use crate::model::residue::{AA_ORDER, labels_to_string};
use crate::model::thresholds::{ChouFasmanParams, GOR_DEFAULT_WINDOW, SignalParams};
use crate::pipeline::stage6_report::{ReportInput, write_reports};
use crate::pipeline::{Prediction, run_chou_fasman, run_gor, run_wavelet};

const TOOL_NAME: &str = "kira-secstruct";

#[derive(Debug, Parser)]
#[command(
    name = "kira-secstruct",
    version,
    about = "Protein secondary structure prediction (H/E/C)"
)]
struct Cli {
    /// Debug-level logging unless RUST_LOG is set.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Classical Chou-Fasman region algorithm.
    ChouFasman(RegionArgs),
    /// Chou-Fasman with wavelet-transform nucleation.
    Wavelet(RegionArgs),
    /// Train a GOR model from PSSM (or FASTA) profiles and DSSP labels.
    GorTrain(TrainArgs),
    /// Predict with a trained GOR model.
    GorPredict(PredictArgs),
    /// Reduce a DSSP file to an H/E/C string.
    DsspToHec { path: PathBuf },
}

#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
struct SequenceSource {
    /// FASTA or bare sequence file (optionally .gz).
    #[arg(long)]
    input: Option<PathBuf>,
    /// Literal amino-acid sequence.
    #[arg(long)]
    seq: Option<String>,
}

#[derive(Debug, Clone, Args)]
struct RegionArgs {
    #[command(flatten)]
    source: SequenceSource,
    /// JSON propensity tables replacing the built-in preset.
    #[arg(long)]
    tables: Option<PathBuf>,
    /// JSON threshold overrides.
    #[arg(long)]
    params: Option<PathBuf>,
    /// Directory for prediction.tsv, summary.json and report.txt.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
struct TrainProfiles {
    /// Directory with <id>.pssm files.
    #[arg(long)]
    pssm_dir: Option<PathBuf>,
    /// Directory with <id>.fasta files, one-hot encoded.
    #[arg(long)]
    fasta_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct TrainArgs {
    /// File with one protein id per line.
    #[arg(long)]
    ids: PathBuf,
    #[command(flatten)]
    profiles: TrainProfiles,
    /// Directory with <id>.dssp files.
    #[arg(long)]
    dssp_dir: PathBuf,
    #[arg(long, default_value_t = GOR_DEFAULT_WINDOW)]
    window: usize,
    #[arg(long, default_value = "gor_model.json")]
    out: PathBuf,
}

#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = false)]
struct PredictSource {
    #[arg(long)]
    pssm: Option<PathBuf>,
    #[arg(long)]
    input: Option<PathBuf>,
    #[arg(long)]
    seq: Option<String>,
}

#[derive(Debug, Clone, Args)]
struct PredictArgs {
    #[arg(long, default_value = "gor_model.json")]
    model: PathBuf,
    #[command(flatten)]
    source: PredictSource,
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::ChouFasman(args) => run_region_method(&args, RegionMethod::ChouFasman),
        Command::Wavelet(args) => run_region_method(&args, RegionMethod::Wavelet),
        Command::GorTrain(args) => run_gor_train(&args),
        Command::GorPredict(args) => run_gor_predict(&args),
        Command::DsspToHec { path } => {
            let labels = parse_labels(&path).map_err(|e| e.to_string())?;
            println!("{}", labels_to_string(&labels));
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RegionMethod {
    ChouFasman,
    Wavelet,
}

fn run_region_method(args: &RegionArgs, method: RegionMethod) -> Result<(), String> {
    let (sequence, input_source) = load_sequence(&args.source)?;

    let tables = match &args.tables {
        Some(path) => load_json::<PropensityTables>(path).map_err(|e| e.to_string())?,
        None => match method {
            RegionMethod::ChouFasman => PropensityTables::chou_fasman_v1(),
            RegionMethod::Wavelet => PropensityTables::jiang_alpha_beta_v1(),
        },
    };

    let (prediction, parameters) = match method {
        RegionMethod::ChouFasman => {
            let params = match &args.params {
                Some(path) => load_json::<ChouFasmanParams>(path).map_err(|e| e.to_string())?,
                None => ChouFasmanParams::default_v1(),
            };
            let prediction = run_chou_fasman(&sequence, &tables, &params);
            (prediction, json!({ "tables": tables.name, "chou_fasman": params }))
        }
        RegionMethod::Wavelet => {
            let params = match &args.params {
                Some(path) => load_json::<SignalParams>(path).map_err(|e| e.to_string())?,
                None => SignalParams::default_v1(),
            };
            let prediction = run_wavelet(&sequence, &tables, &params);
            (prediction, json!({ "tables": tables.name, "wavelet": params }))
        }
    };

    emit(&sequence, &prediction, input_source, parameters, args.out.as_deref())
}

fn run_gor_train(args: &TrainArgs) -> Result<(), String> {
    let source = match (&args.profiles.pssm_dir, &args.profiles.fasta_dir) {
        (Some(dir), _) => ProfileSource::Pssm(dir.clone()),
        (None, Some(dir)) => ProfileSource::Fasta(dir.clone()),
        (None, None) => return Err("provide --pssm-dir or --fasta-dir".to_string()),
    };
    let examples =
        load_training_set(&args.ids, &source, &args.dssp_dir).map_err(|e| e.to_string())?;
    let model = train(&examples, args.window).map_err(|e| e.to_string())?;
    model.save(&args.out).map_err(|e| e.to_string())?;
    println!("GOR model saved to {}", args.out.display());
    Ok(())
}

fn run_gor_predict(args: &PredictArgs) -> Result<(), String> {
    let model = GorModel::load(&args.model).map_err(|e| e.to_string())?;

    let (profile, sequence, input_source) = if let Some(path) = &args.source.pssm {
        tracing::info!("loading PSSM from {}", path.display());
        let (profile, sequence) = parse_pssm_record(path).map_err(|e| e.to_string())?;
        let profile = profile.reorder(&AA_ORDER, &model.aa_list);
        (profile, sequence, path.display().to_string())
    } else {
        let source = SequenceSource {
            input: args.source.input.clone(),
            seq: args.source.seq.clone(),
        };
        let (sequence, input_source) = load_sequence(&source)?;
        let profile = Profile::one_hot(&sequence, &model.aa_list);
        (profile, sequence, input_source)
    };

    let prediction = run_gor(&model, &profile).map_err(|e| e.to_string())?;
    let parameters = json!({
        "model": args.model.display().to_string(),
        "window_size": model.window_size,
    });
    emit(&sequence, &prediction, input_source, parameters, args.out.as_deref())
}

fn load_sequence(source: &SequenceSource) -> Result<(Sequence, String), String> {
    match (&source.input, &source.seq) {
        (Some(path), _) => {
            tracing::info!("loading sequence from {}", path.display());
            let sequence = parse_sequence_file(path).map_err(|e| e.to_string())?;
            Ok((sequence, path.display().to_string()))
        }
        (None, Some(raw)) => {
            let sequence = normalize_sequence(raw).map_err(|e| e.to_string())?;
            Ok((sequence, "command line".to_string()))
        }
        (None, None) => Err("provide --input or --seq".to_string()),
    }
}

fn emit(
    sequence: &Sequence,
    prediction: &Prediction,
    input_source: String,
    parameters: serde_json::Value,
    out_dir: Option<&Path>,
) -> Result<(), String> {
    if sequence.is_empty() {
        tracing::warn!("empty sequence; nothing to predict");
    }
    println!("{}", prediction.label_string());

    if let Some(dir) = out_dir {
        let input = ReportInput {
            sequence,
            prediction,
            input_source,
            parameters,
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        };
        write_reports(&input, dir).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
