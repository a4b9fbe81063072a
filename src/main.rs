//! frlex CLI - build gender noun lists and clean question text

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use frlex::text::clean_corpus;
use frlex::{CleanConfig, GenderListBuilder, GenderListConfig, VERSION};

/// frlex - French lexical resource builders
#[derive(Parser, Debug)]
#[command(name = "frlex")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build grammatical masculine/feminine noun lists without person nouns
    GenderLists {
        /// YAML file with the paths below; flags override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// CoNLL-U corpus
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Tab-separated animate word table (index, feminine, masculine)
        #[arg(long)]
        animate: Option<PathBuf>,

        /// YAML list of extra animate words (defaults to the bundled one)
        #[arg(long)]
        extra_words: Option<PathBuf>,

        /// Output file for masculine lemmas
        #[arg(long)]
        masculine_out: Option<PathBuf>,

        /// Output file for feminine lemmas
        #[arg(long)]
        feminine_out: Option<PathBuf>,
    },

    /// Clean raw question text, one document per line
    Clean {
        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep the "question de mr X à mme Y" heading
        #[arg(long)]
        keep_heading: bool,

        /// Do not strip HTML markup
        #[arg(long)]
        keep_markup: bool,
    },
}

const SPINNER_TICK_MS: u64 = 100;

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Tracing subscriber already set");
    }
}

fn create_progress_bar(msg: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid progress template")?,
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
    Ok(pb)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    info!("frlex v{}", VERSION);

    match cli.command {
        Commands::GenderLists {
            config,
            corpus,
            animate,
            extra_words,
            masculine_out,
            feminine_out,
        } => {
            let mut cfg = match &config {
                Some(path) => GenderListConfig::load(path)
                    .with_context(|| format!("Failed to load config {:?}", path))?,
                None => GenderListConfig::default(),
            };
            if let Some(path) = corpus {
                cfg.corpus = path;
            }
            if let Some(path) = animate {
                cfg.animate_table = path;
            }
            if extra_words.is_some() {
                cfg.extra_words = extra_words;
            }
            if let Some(path) = masculine_out {
                cfg.masculine_out = path;
            }
            if let Some(path) = feminine_out {
                cfg.feminine_out = path;
            }

            let builder = GenderListBuilder::new(cfg);
            let pb = create_progress_bar("Building gender lists...")?;
            let report = builder.run().context("Failed to build gender lists")?;
            pb.finish_and_clear();

            let written = builder.config();
            println!(
                "Wrote {} and {}",
                written.masculine_out.display(),
                written.feminine_out.display()
            );

            println!("(before) {}", report.before);
            println!("(after)  {}", report.after);
            Ok(())
        }

        Commands::Clean {
            input,
            output,
            keep_heading,
            keep_markup,
        } => {
            let file = File::open(&input)
                .with_context(|| format!("Failed to open {:?}", input))?;
            let documents = BufReader::new(file)
                .lines()
                .collect::<io::Result<Vec<_>>>()
                .with_context(|| format!("Failed to read {:?}", input))?;

            let config = CleanConfig {
                strip_markup: !keep_markup,
                remove_heading: !keep_heading,
            };
            let pb = create_progress_bar("Cleaning documents...")?;
            let cleaned = clean_corpus(&documents, &config);
            pb.finish_and_clear();
            info!("Cleaned {} documents", cleaned.len());

            let mut writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(
                    File::create(path).with_context(|| format!("Failed to create {:?}", path))?,
                )),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            for doc in &cleaned {
                writeln!(writer, "{}", doc).context("Failed to write output")?;
            }
            writer.flush().context("Failed to write output")?;
            Ok(())
        }
    }
}
