mod input;
mod logging;
mod model;
mod personas;
mod pipeline;
mod report;

use std::path::PathBuf;

use chrono::Utc;
use clap::{ArgAction, Args, Parser, Subcommand};
use thiserror::Error;

use crate::input::{InputError, load_answers, load_history, load_transcript};
use crate::model::history::{HistoryFilter, demo_history};
use crate::model::limits::LatencyProfile;
use crate::model::rules::ScoringRules;
use crate::personas::loader::load_catalog;
use crate::pipeline::driver::{Pacing, ScriptPlan, drive_scripted};
use crate::pipeline::scorer::score_transcript;
use crate::pipeline::sequencer::next_prompt;
use crate::pipeline::session::{
    PitchSession, SessionConfig, SessionError, SessionSetup, SessionState,
};
use crate::report::csv::{DEFAULT_CSV_NAME, render_sessions_csv};
use crate::report::json::render_summary_json;
use crate::report::text::{render_report_text, render_transcript_text};
use crate::report::writer::{ReportError, append_history, write_session_reports, write_text};
use crate::report::{SessionInfo, build_summary};

#[derive(Debug, Parser)]
#[command(
    name = "pitchsim",
    version,
    about = "Scripted investor-pitch practice sessions with heuristic scoring"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the prompt a persona asks at a given turn.
    Prompt(PromptArgs),
    /// List the available judge personas.
    Personas(CatalogArgs),
    /// Play a scripted pitch session and write its reports.
    Simulate(SimulateArgs),
    /// Score an existing transcript.
    Score(ScoreArgs),
    /// Export session history as CSV.
    Export(ExportArgs),
}

#[derive(Debug, Args)]
struct CatalogArgs {
    /// JSON persona catalog to use instead of the built-in personas.
    #[arg(long)]
    personas: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct PromptArgs {
    #[arg(long)]
    persona: String,
    #[arg(long, default_value_t = 0)]
    turn: usize,
    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Debug, Args)]
struct SimulateArgs {
    #[arg(long)]
    startup: String,
    #[arg(long)]
    persona: String,
    /// Text file with one answer per line.
    #[arg(long)]
    answers: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// End the session early after this many answers.
    #[arg(long)]
    end_after: Option<usize>,
    /// Seed for the simulated reply latency.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Sleep through the simulated latency instead of skipping it.
    #[arg(long, conflicts_with = "instant")]
    realtime: bool,
    /// Disable simulated latency entirely.
    #[arg(long)]
    instant: bool,
    /// JSON history file to append the finished session to.
    #[arg(long)]
    history: Option<PathBuf>,
    #[command(flatten)]
    catalog: CatalogArgs,
}

#[derive(Debug, Args)]
struct ScoreArgs {
    #[arg(long)]
    transcript: PathBuf,
    /// Print the results as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Args)]
struct ExportArgs {
    /// JSON history file; the sample history is used when omitted.
    #[arg(long)]
    history: Option<PathBuf>,
    /// Only sessions for this startup ("all" for every startup).
    #[arg(long)]
    startup: Option<String>,
    /// Only sessions with this judge type ("all" for every judge).
    #[arg(long)]
    judge: Option<String>,
    #[arg(long, default_value = DEFAULT_CSV_NAME)]
    out: PathBuf,
    /// Print the CSV instead of writing a file.
    #[arg(long)]
    stdout: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Incomplete(String),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    if let Err(err) = run(cli.command) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Prompt(args) => run_prompt(&args),
        Command::Personas(args) => run_personas(&args),
        Command::Simulate(args) => run_simulate(&args),
        Command::Score(args) => run_score(&args),
        Command::Export(args) => run_export(&args),
    }
}

fn run_prompt(args: &PromptArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.personas.as_deref())?;
    println!("{}", next_prompt(&catalog, &args.persona, args.turn));
    Ok(())
}

fn run_personas(args: &CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.personas.as_deref())?;
    let default_id = catalog.default_persona().id.clone();
    for persona in catalog.personas() {
        let marker = if persona.id == default_id { "*" } else { " " };
        println!(
            "{}{:<10} {:<20} {:<32} {} prompts",
            marker,
            persona.id,
            persona.name,
            persona.personality,
            persona.prompts.len()
        );
    }
    Ok(())
}

fn run_simulate(args: &SimulateArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.personas.as_deref())?;
    if catalog.get(args.persona.trim()).is_none() {
        tracing::warn!(
            "unknown persona {}; falling back to {}",
            args.persona,
            catalog.default_persona().id
        );
    }
    let answers = load_answers(&args.answers)?;

    let mut config = SessionConfig::default_v1(Utc::now());
    config.seed = args.seed;
    if args.instant {
        config.latency = LatencyProfile::instant();
    }
    let rules = config.rules.clone();
    let limits = config.limits;

    let mut session = PitchSession::create(
        SessionSetup {
            startup: args.startup.clone(),
            persona_id: args.persona.clone(),
        },
        &catalog,
        config,
    )?;

    let plan = ScriptPlan {
        answers,
        end_after: args.end_after,
    };
    let pacing = if args.realtime {
        Pacing::Realtime
    } else {
        Pacing::Virtual
    };
    let now = drive_scripted(&mut session, &plan, pacing)?;
    session.teardown();

    let Some(breakdown) = session.breakdown().cloned() else {
        return Err(AppError::Incomplete(
            "session ended without a score".to_string(),
        ));
    };

    let record_id = session.started_at().format("%Y%m%d%H%M%S").to_string();
    let record = session.to_record(&record_id, now);
    let end_reason = match session.state() {
        SessionState::Ended { reason } => Some(reason),
        _ => None,
    };
    let info = SessionInfo {
        startup: session.startup().to_string(),
        persona_id: session.persona().id.clone(),
        persona_name: session.persona().name.clone(),
        end_reason,
        duration: record.duration.clone(),
        questions_answered: session.transcript().respondent_count(),
        questions_total: limits.max_turns,
    };
    let summary = build_summary(
        session.transcript(),
        &breakdown,
        &rules,
        Some(info),
        Some(record.clone()),
    );
    let written = write_session_reports(&args.out, session.transcript(), &summary)?;
    if let Some(history) = &args.history {
        append_history(history, record)?;
    }

    print!(
        "{}",
        render_transcript_text(session.transcript(), &session.persona().name)
    );
    let progress = session.progress();
    println!(
        "\nQuestion {} of {} | Score: {}/100 ({})",
        progress.question, progress.total, breakdown.overall, summary.feedback.risk_label
    );
    println!("Transcript: {}", written.transcript.display());
    println!("Results: {}", written.results.display());
    println!("Report: {}", written.report.display());
    Ok(())
}

fn run_score(args: &ScoreArgs) -> Result<(), AppError> {
    let transcript = load_transcript(&args.transcript)?;
    if transcript.is_empty() {
        tracing::warn!(path = %args.transcript.display(), "transcript has no turns");
    }
    let rules = ScoringRules::default_v1();
    let breakdown = score_transcript(&transcript, &rules);
    let summary = build_summary(&transcript, &breakdown, &rules, None, None);
    if args.json {
        println!("{}", render_summary_json(&summary)?);
    } else {
        print!("{}", render_report_text(&summary));
    }
    Ok(())
}

fn run_export(args: &ExportArgs) -> Result<(), AppError> {
    let records = match &args.history {
        Some(path) => load_history(path)?,
        None => demo_history(),
    };
    let filter = HistoryFilter {
        startup: args.startup.clone(),
        judge_type: args.judge.clone(),
    };
    let selected = filter.apply(&records);
    let csv = render_sessions_csv(selected.iter().copied());
    if args.stdout {
        println!("{csv}");
    } else {
        write_text(&args.out, &csv)?;
        tracing::info!(
            path = %args.out.display(),
            rows = selected.len(),
            "session history exported"
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
