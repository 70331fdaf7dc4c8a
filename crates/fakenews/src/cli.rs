//! Command-line front end for the classification form.

use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
    sync::Arc,
    time::Instant,
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::{
    ABOUT, ArtifactCache, ArtifactPaths, ClassifyForm, FormError, Predictor, Report, SAMPLE_NEWS,
    TextStats,
    artifacts::{DEFAULT_MODEL_PATH, DEFAULT_VECTORIZER_PATH},
};

/// Texts classified per progress-bar step in batch mode
const BATCH_CHUNK: usize = 256;

/// Batches at least this large get a progress bar
const MIN_TEXTS_FOR_PROGRESS: usize = 10;

/// Characters of each sample shown by `samples`
const PREVIEW_CHARS: usize = 72;

#[derive(Parser, Debug)]
#[command(name = "fakenews")]
#[command(about = "Classify news articles as real or fake", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Trained classifier artifact (.json for the JSON export, bincode otherwise)
    #[arg(
        long,
        value_name = "PATH",
        env = "FAKENEWS_MODEL",
        default_value = DEFAULT_MODEL_PATH,
        global = true
    )]
    model: PathBuf,

    /// Fitted vectorizer artifact (.json for the JSON export, bincode otherwise)
    #[arg(
        long,
        value_name = "PATH",
        env = "FAKENEWS_VECTORIZER",
        default_value = DEFAULT_VECTORIZER_PATH,
        global = true
    )]
    vectorizer: PathBuf,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode (debug logging and timings)
    #[arg(short, long, conflicts_with = "quiet", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify one article
    Classify(ClassifyArgs),
    /// Classify many articles
    Batch(BatchArgs),
    /// List the sample articles, or print one in full
    Samples {
        /// Sample to print
        index: Option<usize>,
    },
    /// Describe the model and how to use it
    About,
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Article text (if not provided, reads from stdin)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the article from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Use one of the sample articles
    #[arg(short, long, value_name = "INDEX", conflicts_with_all = ["text", "file"])]
    sample: Option<usize>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "human")]
    format: OutputFormat,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// One article per line
    #[arg(long, value_name = "PATH", required_unless_present = "json")]
    lines: Option<PathBuf>,

    /// JSON array of article strings
    #[arg(long, value_name = "PATH", conflicts_with = "lines")]
    json: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "label")]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// The full report: prediction, confidence and text statistics
    Human,
    /// The report as JSON
    Json,
    /// Just the label
    Label,
}

impl Cli {
    #[must_use]
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.model, &self.vectorizer)
    }
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the verbosity flags.
pub fn init_tracing(cli: &Cli) {
    let default_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (_, true) => "debug",
        _ => "warn",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run(cli: &Cli) -> Result<()> {
    let cache = ArtifactCache::new(cli.artifact_paths());

    match &cli.command {
        Command::Classify(args) => classify(&cache, args),
        Command::Batch(args) => batch(&cache, args, cli.quiet),
        Command::Samples { index } => samples(*index),
        Command::About => {
            println!("{ABOUT}");
            Ok(())
        }
    }
}

fn load_predictor(cache: &ArtifactCache) -> Result<Arc<Predictor>> {
    let start = Instant::now();
    let predictor = cache.get_or_load().with_context(|| {
        format!(
            "Failed to load artifacts (model: {}, vectorizer: {})",
            cache.paths().model.display(),
            cache.paths().vectorizer.display()
        )
    })?;
    info!(elapsed = ?start.elapsed(), "Predictor ready");
    Ok(predictor)
}

/// Fill the form from the argument, a file, a sample or stdin, in that order.
fn fill_form(args: &ClassifyArgs) -> Result<ClassifyForm> {
    let mut form = ClassifyForm::new();

    if let Some(text) = &args.text {
        form.set_text(text.as_str());
    } else if let Some(path) = &args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        form.set_text(text);
    } else if let Some(index) = args.sample {
        form.use_sample(index)?;
    } else {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        form.set_text(buffer);
    }
    Ok(form)
}

fn classify(cache: &ArtifactCache, args: &ClassifyArgs) -> Result<()> {
    let form = fill_form(args)?;
    let report = submit_form(&form, cache)?;
    write_report(&mut std::io::stdout().lock(), &report, args.format)
}

/// Blank text fails with [`FormError::EmptyText`] before any artifact is read.
fn submit_form(form: &ClassifyForm, cache: &ArtifactCache) -> Result<Report> {
    form.validate()?;
    let predictor = load_predictor(cache)?;

    let start = Instant::now();
    let report = form.submit(&*predictor)?;
    info!(elapsed = ?start.elapsed(), "Article classified");
    Ok(report)
}

/// JSON shape of one report, shared by `classify` and `batch`.
fn report_json(report: &Report) -> serde_json::Value {
    serde_json::json!({
        "label": report.prediction.classification().label(),
        "score": report.prediction.score(),
        "confidence": report.prediction.confidence(),
        "stats": report.stats,
    })
}

fn write_report(out: &mut impl Write, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => writeln!(out, "{report}")?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&report_json(report))?
        )?,
        OutputFormat::Label => writeln!(out, "{}", report.prediction.classification())?,
    }
    Ok(())
}

fn read_batch(args: &BatchArgs) -> Result<Vec<String>> {
    if let Some(path) = &args.json {
        return read_json_batch(path);
    }
    match &args.lines {
        Some(path) => read_line_batch(path),
        None => bail!("Either --lines or --json is required"),
    }
}

fn read_line_batch(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file: {}", path.display()))?;
    Ok(contents.lines().map(String::from).collect())
}

fn read_json_batch(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON batch file: {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| "Failed to parse JSON array of strings")
}

fn progress_bar_setup(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );
    pb.set_message("Classifying");
    Ok(pb)
}

/// Classify every non-blank text. Blank entries come back as `None`.
fn classify_all(
    predictor: &Predictor,
    texts: &[String],
    quiet: bool,
) -> Result<Vec<Option<Report>>> {
    let pending: Vec<(usize, &str)> = texts
        .iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(idx, text)| (idx, text.as_str()))
        .collect();

    let pb = (!quiet && pending.len() >= MIN_TEXTS_FOR_PROGRESS)
        .then(|| progress_bar_setup(pending.len()))
        .transpose()?;

    let mut reports = vec![None; texts.len()];
    for chunk in pending.chunks(BATCH_CHUNK) {
        let chunk_texts: Vec<&str> = chunk.iter().map(|(_, text)| *text).collect();
        let predictions = predictor.predict_batch(&chunk_texts);
        for ((idx, text), prediction) in chunk.iter().zip(predictions) {
            reports[*idx] = Some(Report {
                prediction,
                stats: TextStats::from_text(text),
            });
        }
        if let Some(pb) = &pb {
            pb.inc(chunk.len() as u64);
        }
    }
    if let Some(pb) = pb {
        pb.finish_with_message("Classification complete");
    }
    Ok(reports)
}

fn batch(cache: &ArtifactCache, args: &BatchArgs, quiet: bool) -> Result<()> {
    let texts = read_batch(args)?;
    let predictor = load_predictor(cache)?;

    let start = Instant::now();
    let quiet = quiet || matches!(args.format, OutputFormat::Json);
    let reports = classify_all(&predictor, &texts, quiet)?;
    let skipped = reports.iter().filter(|r| r.is_none()).count();
    info!(
        num_texts = texts.len(),
        skipped,
        elapsed = ?start.elapsed(),
        "Batch classified"
    );

    write_batch(&mut std::io::stdout().lock(), &reports, args.format)
}

/// Write batch results in input order. Blank entries are reported as skipped.
fn write_batch(
    out: &mut impl Write,
    reports: &[Option<Report>],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json_array: Vec<_> = reports
                .iter()
                .enumerate()
                .map(|(index, report)| match report {
                    Some(report) => {
                        let mut entry = report_json(report);
                        entry["index"] = serde_json::json!(index);
                        entry
                    }
                    None => serde_json::json!({
                        "index": index,
                        "skipped": true,
                        "reason": FormError::EmptyText.to_string(),
                    }),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string(&json_array)?)?;
        }
        OutputFormat::Label => {
            for report in reports {
                match report {
                    Some(report) => writeln!(out, "{}", report.prediction.classification())?,
                    None => writeln!(out, "skipped")?,
                }
            }
        }
        OutputFormat::Human => {
            for (index, report) in reports.iter().enumerate() {
                writeln!(out, "[{index}]")?;
                match report {
                    Some(report) => writeln!(out, "{report}\n")?,
                    None => writeln!(out, "{}\n", FormError::EmptyText)?,
                }
            }
        }
    }
    Ok(())
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= PREVIEW_CHARS {
        return trimmed.to_owned();
    }
    let mut short: String = trimmed.chars().take(PREVIEW_CHARS).collect();
    short.push('…');
    short
}

fn samples(index: Option<usize>) -> Result<()> {
    if let Some(index) = index {
        let mut form = ClassifyForm::new();
        form.use_sample(index)?;
        println!("{}", form.text());
        return Ok(());
    }
    for (index, sample) in SAMPLE_NEWS.iter().enumerate() {
        println!("[{index}] {}", preview(sample));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::CommandFactory;
    use fakenews_preprocessing::{TfidfVectorizer, VectorizerParams};

    use super::*;
    use crate::{Classification, model::LinearClassifier};

    fn predictor() -> Predictor {
        let vectorizer = TfidfVectorizer::new(
            [("reuters".to_owned(), 0), ("hoax".to_owned(), 1)],
            vec![1.0, 1.0],
            VectorizerParams::default(),
        )
        .unwrap();
        let classifier = LinearClassifier::new(vec![2.0, -2.0], 0.0, [0, 1]).unwrap();
        Predictor::new(vectorizer, classifier).unwrap()
    }

    fn batch_reports() -> Vec<Option<Report>> {
        let texts = ["Reuters", "   ", "", "hoax"].map(String::from);
        classify_all(&predictor(), &texts, true).unwrap()
    }

    fn batch_output(format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_batch(&mut out, &batch_reports(), format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_artifact_paths() {
        let cli = Cli::try_parse_from(["fakenews", "about"]).unwrap();
        // Defaults apply unless the environment overrides them
        if std::env::var_os("FAKENEWS_MODEL").is_none() {
            assert_eq!(cli.artifact_paths().model, PathBuf::from(DEFAULT_MODEL_PATH));
        }
        if std::env::var_os("FAKENEWS_VECTORIZER").is_none() {
            assert_eq!(
                cli.artifact_paths().vectorizer,
                PathBuf::from(DEFAULT_VECTORIZER_PATH)
            );
        }
    }

    #[test]
    fn test_global_artifact_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fakenews",
            "classify",
            "--sample",
            "2",
            "--model",
            "artifacts/model.json",
            "--vectorizer",
            "artifacts/vectorizer.json",
        ])
        .unwrap();
        assert_eq!(
            cli.artifact_paths(),
            ArtifactPaths::new("artifacts/model.json", "artifacts/vectorizer.json")
        );
        let Command::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.sample, Some(2));
        assert_eq!(args.format, OutputFormat::Human);
    }

    #[test]
    fn test_text_and_sample_conflict() {
        assert!(
            Cli::try_parse_from(["fakenews", "classify", "some text", "--sample", "1"]).is_err()
        );
        assert!(Cli::try_parse_from(["fakenews", "-q", "-v", "about"]).is_err());
    }

    #[test]
    fn test_batch_requires_an_input() {
        assert!(Cli::try_parse_from(["fakenews", "batch"]).is_err());
        assert!(Cli::try_parse_from(["fakenews", "batch", "--json", "articles.json"]).is_ok());
    }

    #[test]
    fn test_fill_form_from_sample_and_file() {
        let args = ClassifyArgs {
            text: None,
            file: None,
            sample: Some(3),
            format: OutputFormat::Label,
        };
        assert_eq!(fill_form(&args).unwrap().text(), SAMPLE_NEWS[3]);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Senate passes bill").unwrap();
        let args = ClassifyArgs {
            text: None,
            file: Some(file.path().to_path_buf()),
            sample: None,
            format: OutputFormat::Human,
        };
        assert_eq!(fill_form(&args).unwrap().text(), "Senate passes bill");
    }

    #[test]
    fn test_fill_form_rejects_unknown_sample() {
        let args = ClassifyArgs {
            text: None,
            file: None,
            sample: Some(42),
            format: OutputFormat::Human,
        };
        assert!(fill_form(&args).is_err());
    }

    #[test]
    fn test_read_batches() {
        let mut lines = tempfile::NamedTempFile::new().unwrap();
        writeln!(lines, "first article\n\nthird article").unwrap();
        assert_eq!(
            read_line_batch(lines.path()).unwrap(),
            ["first article", "", "third article"]
        );

        let mut json = tempfile::NamedTempFile::new().unwrap();
        write!(json, r#"["one", "two"]"#).unwrap();
        assert_eq!(read_json_batch(json.path()).unwrap(), ["one", "two"]);

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        write!(bad, r#"{{"not": "an array"}}"#).unwrap();
        assert!(read_json_batch(bad.path()).is_err());
    }

    #[test]
    fn test_classify_all_skips_blank_entries_in_order() {
        let classifications: Vec<_> = batch_reports()
            .iter()
            .map(|report| report.map(|r| r.prediction.classification()))
            .collect();
        assert_eq!(
            classifications,
            [
                Some(Classification::Real),
                None,
                None,
                Some(Classification::Fake),
            ]
        );
    }

    #[test]
    fn test_empty_text_fails_without_loading_artifacts() {
        let dir = tempfile::TempDir::new().unwrap();
        let cache = ArtifactCache::new(ArtifactPaths::new(
            dir.path().join("missing-model.bin"),
            dir.path().join("missing-vectorizer.bin"),
        ));

        for text in ["", " \n\t "] {
            let err = submit_form(&ClassifyForm::with_text(text), &cache).unwrap_err();
            assert_eq!(
                err.downcast_ref::<FormError>(),
                Some(&FormError::EmptyText)
            );
        }
        assert!(!cache.is_loaded());

        // Real text does reach the loader, which fails on the missing files
        let err = submit_form(&ClassifyForm::with_text("Reuters"), &cache).unwrap_err();
        assert!(err.downcast_ref::<FormError>().is_none());
    }

    #[test]
    fn test_batch_label_output_marks_skipped() {
        assert_eq!(
            batch_output(OutputFormat::Label),
            "Real News\nskipped\nskipped\nFake News\n"
        );
    }

    #[test]
    fn test_batch_human_output_warns_on_blank_entries() {
        let output = batch_output(OutputFormat::Human);
        assert!(output.starts_with("[0]\nPrediction: ✅ Real News\n"));
        assert!(output.contains("[1]\nPlease enter some text to classify.\n"));
        assert!(output.contains("[2]\nPlease enter some text to classify.\n"));
        assert!(output.contains("[3]\nPrediction: ❌ Fake News\n"));
    }

    #[test]
    fn test_batch_json_marks_skipped_entries() {
        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&batch_output(OutputFormat::Json)).unwrap();
        assert_eq!(entries.len(), 4);

        assert_eq!(entries[0]["index"], 0);
        assert_eq!(entries[0]["label"], "Real News");
        assert!(entries[0].get("skipped").is_none());

        for index in [1, 2] {
            assert_eq!(entries[index]["index"], index);
            assert_eq!(entries[index]["skipped"], true);
            assert_eq!(
                entries[index]["reason"],
                "Please enter some text to classify."
            );
        }
        assert_eq!(entries[3]["label"], "Fake News");
    }

    #[test]
    fn test_classify_and_batch_share_json_shape() {
        let report = ClassifyForm::with_text("Reuters")
            .submit(&predictor())
            .unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &report, OutputFormat::Json).unwrap();
        let single: serde_json::Value = serde_json::from_slice(&out).unwrap();

        let entries: Vec<serde_json::Value> =
            serde_json::from_str(&batch_output(OutputFormat::Json)).unwrap();
        let mut from_batch = entries[0].clone();
        from_batch.as_object_mut().unwrap().remove("index");

        assert_eq!(single, from_batch);
        assert_eq!(single["label"], "Real News");
        assert_eq!(single["stats"]["word_count"], 1);
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        assert_eq!(preview("  short  "), "short");
        let long = "â€™".repeat(PREVIEW_CHARS);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
        assert!(shown.ends_with('…'));
    }
}
