//! Acadeval - quality evaluator for academic Q&A answers
//!
//! Command-line host for the evaluation store and the subject knowledge base.
//! Command output goes to stdout; logs go to stderr.

mod cli;

use clap::{Parser, Subcommand};
use acadeval_core::error::Result;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{self, EnvFilter};

use cli::helpers::GlobalOptions;

#[derive(Parser)]
#[command(name = "acadeval")]
#[command(about = "Quality evaluator for academic Q&A answers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Config file (defaults to ./acadeval.toml when present)
    #[arg(long, env = "ACADEVAL_CONFIG")]
    config: Option<PathBuf>,

    /// Evaluation history file (overrides configuration)
    #[arg(long)]
    history: Option<PathBuf>,

    /// Knowledge directory (overrides configuration)
    #[arg(long)]
    knowledge: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an answer and record it in the history
    Evaluate {
        /// Question the answer responds to
        #[arg(short, long)]
        question: String,

        /// Subject id (e.g. matematica, fisica, computacao)
        #[arg(short, long)]
        subject: String,

        /// Kind of request that produced the answer
        #[arg(short, long, default_value = "responder_pergunta_academica")]
        task_type: String,

        /// File with the answer text (reads stdin when omitted)
        #[arg(short, long)]
        response_file: Option<PathBuf>,
    },

    /// Show rolling evaluation statistics
    Stats,

    /// List the most recent evaluations
    Recent {
        /// Number of evaluations (defaults to the configured recent_limit)
        #[arg(
            short = 'n',
            long,
            value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
        )]
        limit: Option<usize>,

        /// Print full records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage knowledge base subjects
    Subjects {
        #[command(subcommand)]
        action: SubjectsAction,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum SubjectsAction {
    /// List subjects with document counts
    List,

    /// Show subject metadata and documents
    Show {
        /// Subject id (folder name)
        subject: String,
    },

    /// Create a subject folder with metadata.yaml
    Create {
        /// Subject name (e.g. "Cálculo Avançado")
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        /// Readable name (defaults to the given name)
        #[arg(short = 'n', long)]
        display_name: Option<String>,

        /// Short description
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite an existing metadata.yaml
        #[arg(short, long)]
        force: bool,
    },

    /// Document statistics for every subject
    Stats,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the subject scoring profiles
    Subjects,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::new(format!(
        "acadeval={level},acadeval_core={level}",
        level = level.as_str().to_lowercase()
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Write logs to stderr, not stdout
        .init();

    debug!("Acadeval v{} starting...", env!("CARGO_PKG_VERSION"));

    let options = GlobalOptions {
        config_path: cli.config,
        history_path: cli.history,
        knowledge_root: cli.knowledge,
    };

    match cli.command {
        Commands::Evaluate {
            question,
            subject,
            task_type,
            response_file,
        } => cli::evaluate::handle(&options, question, subject, task_type, response_file),
        Commands::Stats => cli::history::handle_stats(&options),
        Commands::Recent { limit, json } => cli::history::handle_recent(&options, limit, json),
        Commands::Subjects { action } => match action {
            SubjectsAction::List => cli::subjects::handle_list(&options),
            SubjectsAction::Show { subject } => cli::subjects::handle_show(&options, &subject),
            SubjectsAction::Create {
                name,
                display_name,
                description,
                force,
            } => cli::subjects::handle_create(
                &options,
                &name.join(" "),
                display_name.as_deref(),
                description.as_deref(),
                force,
            ),
            SubjectsAction::Stats => cli::subjects::handle_stats(&options),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => cli::config::handle_show(&options),
            ConfigAction::Subjects => cli::config::handle_subjects(&options),
        },
    }
}
