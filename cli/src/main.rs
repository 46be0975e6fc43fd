//! iramuteq-prep CLI - IRaMuTeQ corpus preparation tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use iramuteq_prep::batch::{collect_sources, process_folder_with_progress};
use iramuteq_prep::{
    process_file, sanitize, BatchOptions, CorpusOptions, DocumentOutcome, IramuteqPrep,
    ReaderRegistry,
};

const DEFAULT_OUTPUT_DIR: &str = "iramuteq_corpus";

#[derive(Parser)]
#[command(name = "iramuteq-prep")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Prepare extracted document text as IRaMuTeQ corpora", long_about = None)]
struct Cli {
    /// Input page source (.txt, .json) or folder
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    corpus: CorpusArgs,

    /// Convert folder entries one at a time
    #[arg(long)]
    sequential: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct CorpusArgs {
    /// Keep accents in the corpus text
    #[arg(long, env = "IRAMUTEQ_PRESERVE_ACCENTS")]
    preserve_accents: bool,

    /// Segment identifier prefix
    #[arg(long, value_name = "PREFIX")]
    name: Option<String>,

    /// Do not emit metadata variables
    #[arg(long)]
    no_metadata: bool,
}

impl CorpusArgs {
    fn options(&self) -> CorpusOptions {
        let mut options = CorpusOptions::new()
            .with_preserve_accents(self.preserve_accents)
            .with_metadata(!self.no_metadata);
        if let Some(ref name) = self.name {
            options = options.with_doc_name(name);
        }
        options
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a page source or a folder of sources to corpus files
    Convert {
        /// Input page source or folder
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[command(flatten)]
        corpus: CorpusArgs,

        /// Convert folder entries one at a time
        #[arg(long)]
        sequential: bool,
    },

    /// Print the corpus of a page source
    Segment {
        /// Input page source
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Sanitize text from a file or stdin
    Clean {
        /// Input text file (stdin if not specified)
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Keep accents
        #[arg(long, env = "IRAMUTEQ_PRESERVE_ACCENTS")]
        preserve_accents: bool,
    },

    /// Show document information and corpus statistics
    Info {
        /// Input page source
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print metadata and statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            corpus,
            sequential,
        }) => cmd_convert(&input, output.as_deref(), &corpus, sequential),
        Some(Commands::Segment {
            input,
            output,
            corpus,
        }) => cmd_segment(&input, output.as_deref(), &corpus),
        Some(Commands::Clean {
            input,
            preserve_accents,
        }) => cmd_clean(input.as_deref(), preserve_accents),
        Some(Commands::Info { input, json }) => cmd_info(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref(), &cli.corpus, cli.sequential)
            } else {
                println!("{}", "Usage: iramuteq-prep <INPUT> [OUTPUT]".yellow());
                println!("       iramuteq-prep --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    corpus: &CorpusArgs,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let mut options = BatchOptions::new().with_corpus_options(corpus.options());
    if sequential {
        options = options.sequential();
    }

    if !input.is_dir() {
        let outcome = process_file(input, &output_dir, &options);
        let path = outcome.result?;
        println!("{} {}", "Saved to".green(), path.display());
        if let Some(stats) = outcome.stats {
            println!(
                "  {} {} pages, {} segments",
                "└─".dimmed(),
                stats.page_count,
                stats.segment_count()
            );
        }
        return Ok(());
    }

    let total = collect_sources(input, &ReaderRegistry::with_defaults())?.len();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let report = process_folder_with_progress(input, &output_dir, &options, |outcome| {
        report_progress(&pb, outcome);
    })?;

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} converted, {} failed",
        "Summary:".green().bold(),
        report.success_count(),
        report.failure_count()
    );
    for outcome in &report.outcomes {
        match outcome.result {
            Ok(ref path) => println!("  {} {}", "├─".dimmed(), path.display()),
            Err(ref e) => println!(
                "  {} {} {}",
                "├─".dimmed(),
                outcome.source.display().to_string().red(),
                e
            ),
        }
    }

    let stats = report.total_stats();
    println!(
        "  {} {} pages, {} segments, {} words",
        "└─".dimmed(),
        stats.page_count,
        stats.segment_count(),
        stats.word_count
    );

    if report.is_success() {
        Ok(())
    } else {
        Err(format!("{} sources failed", report.failure_count()).into())
    }
}

fn report_progress(pb: &ProgressBar, outcome: &DocumentOutcome) {
    let name = outcome
        .source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Err(ref e) = outcome.result {
        pb.println(format!("{} {}: {}", "Failed".red(), name, e));
    }
    pb.set_message(name);
    pb.inc(1);
}

fn cmd_segment(
    input: &Path,
    output: Option<&Path>,
    corpus: &CorpusArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let prepared = IramuteqPrep::new()
        .with_options(corpus.options())
        .read(input)?;

    if let Some(path) = output {
        prepared.write_to(path)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        print!("{}", prepared.to_corpus());
    }

    Ok(())
}

fn cmd_clean(input: Option<&Path>, preserve_accents: bool) -> Result<(), Box<dyn std::error::Error>> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    println!("{}", sanitize(&text, preserve_accents));
    Ok(())
}

fn cmd_info(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let prepared = IramuteqPrep::new().read(input)?;
    let doc = prepared.document();
    let result = prepared.to_corpus_with_stats();

    if json {
        let info = serde_json::json!({
            "file": input.display().to_string(),
            "name": doc.name,
            "pages": doc.page_count(),
            "metadata": result.metadata,
            "stats": result.stats,
        });
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Name".bold(), doc.name);
    println!("{}: {}", "Pages".bold(), doc.page_count());

    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }

    let stats = &result.stats;

    println!();
    println!("{}", "Corpus Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Segments".bold(), stats.segment_count());
    println!("{}: {}", "Titles".bold(), stats.title_count);
    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Figures".bold(), stats.figure_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "iramuteq-prep".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("IRaMuTeQ corpus preparation tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/iramuteq-prep".dimmed()
    );
    println!("License: MIT");
}
