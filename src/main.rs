//! interview-prep CLI
//!
//! Paste a job description and résumé, then practice mock interview
//! questions in the terminal.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use interview_prep::bank::QuestionBank;
use interview_prep::feedback::CannedFeedback;
use interview_prep::logging;
use interview_prep::report::{format_bank, format_summary};
use interview_prep::session::Session;
use interview_prep::tui::run::run;
use interview_prep::tui::state::App;
use interview_prep::types::{OutputFormat, QuestionCategory};

#[derive(Parser)]
#[command(name = "interview-prep")]
#[command(about = "Practice mock interview questions for a job description and résumé")]
#[command(version)]
struct Cli {
    /// Log filter (e.g. "debug", "interview_prep=trace"); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file (required for logging in practice mode)
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive practice screen
    Practice {
        /// Question bank JSON (default: config dir, then built-in questions)
        #[arg(long, value_name = "FILE")]
        questions: Option<PathBuf>,

        /// Prefill the job description from a file
        #[arg(long, value_name = "FILE")]
        job_description: Option<PathBuf>,

        /// Prefill the résumé from a file
        #[arg(long, value_name = "FILE")]
        resume: Option<PathBuf>,

        /// Format of the summary printed on exit
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Do not print a summary on exit
        #[arg(long)]
        no_summary: bool,
    },

    /// Print the question bank
    Questions {
        /// Question bank JSON (default: config dir, then built-in questions)
        #[arg(long, value_name = "FILE")]
        questions: Option<PathBuf>,

        /// Only show one category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CategoryArg {
    Technical,
    Behavioral,
}

impl From<CategoryArg> for QuestionCategory {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Technical => QuestionCategory::Technical,
            CategoryArg::Behavioral => QuestionCategory::Behavioral,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let interactive = matches!(cli.command, Commands::Practice { .. });
    if let Err(e) = logging::init(cli.log_level.as_deref(), cli.log_file.as_deref(), interactive) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Practice {
            questions,
            job_description,
            resume,
            format,
            no_summary,
        } => cmd_practice(
            questions.as_deref(),
            job_description.as_deref(),
            resume.as_deref(),
            (!no_summary).then_some(format.into()),
        ),
        Commands::Questions {
            questions,
            category,
            format,
        } => cmd_questions(questions.as_deref(), category.map(Into::into), format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// INPUT HELPERS
// ============================================================================

/// Read an optional prefill file; missing argument means empty text.
fn read_prefill(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(p) => fs::read_to_string(p).map_err(|e| format!("cannot read {}: {}", p.display(), e)),
        None => Ok(String::new()),
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_practice(
    questions: Option<&Path>,
    job_description: Option<&Path>,
    resume: Option<&Path>,
    summary: Option<OutputFormat>,
) -> Result<(), String> {
    let bank = QuestionBank::resolve(questions).map_err(|e| e.to_string())?;
    let session = Session::with_form(read_prefill(job_description)?, read_prefill(resume)?);

    let app = run(App::with_session(session), &bank, &CannedFeedback).map_err(|e| e.to_string())?;

    if let (Some(format), Some(board)) = (summary, &app.session.board) {
        print!("{}", format_summary(board, format));
        if format == OutputFormat::Json {
            println!();
        }
    }

    Ok(())
}

fn cmd_questions(
    questions: Option<&Path>,
    category: Option<QuestionCategory>,
    format: OutputFormat,
) -> Result<(), String> {
    let bank = QuestionBank::resolve(questions).map_err(|e| e.to_string())?;

    print!("{}", format_bank(bank.questions(), category, format));
    if format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
