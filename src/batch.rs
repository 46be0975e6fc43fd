//! Batch conversion of a folder of page sources into corpus files.
//!
//! Every source is read, structured and rendered independently, so a
//! malformed source only fails its own [`DocumentOutcome`].

use crate::error::{Error, Result};
use crate::reader::{source_name, ReaderRegistry};
use crate::render::{write_corpus, CorpusFormatter, CorpusOptions, CorpusStats};
use crate::structure::structure_document;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to every corpus file name.
pub const OUTPUT_SUFFIX: &str = "_iramuteq.txt";

/// Timestamp layout appended to document names (`YYYYmmddHHMM`).
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M";

/// Options for batch conversion.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Corpus rendering options applied to every document
    pub corpus: CorpusOptions,

    /// Convert documents in parallel
    pub parallel: bool,

    /// Fixed timestamp for output names (current local time if `None`)
    pub timestamp: Option<String>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            corpus: CorpusOptions::default(),
            parallel: true,
            timestamp: None,
        }
    }
}

impl BatchOptions {
    /// Create new batch options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set corpus rendering options.
    pub fn with_corpus_options(mut self, options: CorpusOptions) -> Self {
        self.corpus = options;
        self
    }

    /// Use a fixed timestamp instead of the current time.
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Enable parallel processing.
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    fn resolve_timestamp(&self) -> String {
        self.timestamp
            .clone()
            .unwrap_or_else(|| chrono::Local::now().format(TIMESTAMP_FORMAT).to_string())
    }
}

/// Result of converting one source.
#[derive(Debug)]
pub struct DocumentOutcome {
    /// Source file
    pub source: PathBuf,

    /// Written corpus file, or the error that stopped this source
    pub result: Result<PathBuf>,

    /// Segment statistics for a successful conversion
    pub stats: Option<CorpusStats>,
}

impl DocumentOutcome {
    /// Check if the source was converted.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a batch run, in source order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-source outcomes
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// Number of converted sources.
    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    /// Number of failed sources.
    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    /// Outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &DocumentOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    /// Check if every source was converted.
    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }

    /// Combined statistics of all converted sources.
    pub fn total_stats(&self) -> CorpusStats {
        let mut total = CorpusStats::new();
        for stats in self.outcomes.iter().filter_map(|o| o.stats.as_ref()) {
            total.merge(stats);
        }
        total
    }
}

/// Output file name for a document name.
pub fn output_file_name(doc_name: &str) -> String {
    format!("{}{}", doc_name, OUTPUT_SUFFIX)
}

/// List supported sources directly inside `dir`, sorted by path.
pub fn collect_sources(dir: &Path, registry: &ReaderRegistry) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && registry.supports_path(&path) {
            sources.push(path);
        }
    }
    sources.sort();
    Ok(sources)
}

/// Convert every supported source in `input_dir` into `output_dir`.
pub fn process_folder(
    input_dir: &Path,
    output_dir: &Path,
    options: &BatchOptions,
) -> Result<BatchReport> {
    process_folder_with_progress(input_dir, output_dir, options, |_| {})
}

/// Like [`process_folder`], calling `on_done` as each source finishes.
pub fn process_folder_with_progress<F>(
    input_dir: &Path,
    output_dir: &Path,
    options: &BatchOptions,
    on_done: F,
) -> Result<BatchReport>
where
    F: Fn(&DocumentOutcome) + Sync,
{
    if !input_dir.is_dir() {
        return Err(Error::Other(format!(
            "Input is not a directory: {}",
            input_dir.display()
        )));
    }
    fs::create_dir_all(output_dir)?;

    let registry = ReaderRegistry::with_defaults();
    let sources = collect_sources(input_dir, &registry)?;
    let timestamp = options.resolve_timestamp();

    log::info!(
        "Converting {} sources from {}",
        sources.len(),
        input_dir.display()
    );

    let convert = |source: &PathBuf| {
        let outcome = convert_source(source, output_dir, &registry, options, &timestamp);
        on_done(&outcome);
        outcome
    };

    let outcomes: Vec<DocumentOutcome> = if options.parallel {
        sources.par_iter().map(convert).collect()
    } else {
        sources.iter().map(convert).collect()
    };

    let report = BatchReport { outcomes };
    log::info!(
        "Batch finished: {} converted, {} failed",
        report.success_count(),
        report.failure_count()
    );
    Ok(report)
}

/// Convert a single source into `output_dir`, named like a batch entry.
pub fn process_file(input: &Path, output_dir: &Path, options: &BatchOptions) -> DocumentOutcome {
    let registry = ReaderRegistry::with_defaults();
    let timestamp = options.resolve_timestamp();

    if let Err(e) = fs::create_dir_all(output_dir) {
        return DocumentOutcome {
            source: input.to_path_buf(),
            result: Err(e.into()),
            stats: None,
        };
    }
    convert_source(input, output_dir, &registry, options, &timestamp)
}

/// Convert a single source to an explicit corpus file path.
pub fn convert_file(input: &Path, output: &Path, options: &CorpusOptions) -> Result<CorpusStats> {
    let source = ReaderRegistry::with_defaults().read(input)?;
    let doc = structure_document(&source);

    let segments = CorpusFormatter::new(options.clone()).format(&doc);
    write_corpus(&segments, output)?;
    Ok(CorpusStats::from_segments(&segments))
}

fn convert_source(
    source: &Path,
    output_dir: &Path,
    registry: &ReaderRegistry,
    options: &BatchOptions,
    timestamp: &str,
) -> DocumentOutcome {
    log::debug!("Processing {}", source.display());

    let result = write_source(source, output_dir, registry, options, timestamp);
    match result {
        Ok((path, stats)) => DocumentOutcome {
            source: source.to_path_buf(),
            result: Ok(path),
            stats: Some(stats),
        },
        Err(e) => {
            log::warn!("Failed to process {}: {}", source.display(), e);
            DocumentOutcome {
                source: source.to_path_buf(),
                result: Err(e),
                stats: None,
            }
        }
    }
}

fn write_source(
    source: &Path,
    output_dir: &Path,
    registry: &ReaderRegistry,
    options: &BatchOptions,
    timestamp: &str,
) -> Result<(PathBuf, CorpusStats)> {
    let doc = structure_document(&registry.read(source)?);

    let base_name = format!("{}{}", source_name(source), timestamp);
    let doc_name = match options.corpus.doc_name {
        Some(ref prefix) => format!("{}_{}", prefix, base_name),
        None => base_name.clone(),
    };

    let corpus = options.corpus.clone().with_doc_name(doc_name);
    let segments = CorpusFormatter::new(corpus).format(&doc);

    let output = output_dir.join(output_file_name(&base_name));
    write_corpus(&segments, &output)?;

    log::debug!("Wrote {}", output.display());
    Ok((output, CorpusStats::from_segments(&segments)))
}
