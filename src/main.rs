//! CLI entry point for the TacticalGrade simulator.
//!
//! Provides subcommands for listing subjects, running what-if grade
//! predictions, solving for the score a component needs, and reviewing the
//! study plan.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::ffi::OsStr;
use std::path::Path;
use tactical_grade::{
    error::GradeError,
    infra::{BuiltinCatalog, JsonFileCatalog},
    output::{PredictionRecord, append_record, print_json, print_pretty},
    planner::sort_tasks,
    services::SubjectSource,
    simulator::SimulationSession,
    stats::{SubjectSummary, UserStats},
};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "tactical_grade")]
#[command(about = "What-if grade simulator", long_about = None)]
struct Cli {
    /// JSON file with subject data (defaults to $TACTICAL_GRADE_SUBJECTS, then bundled data)
    #[arg(long, global = true, value_name = "FILE")]
    subjects: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List subjects with their current marks
    Subjects,
    /// Predict the final grade of a subject with hypothetical scores
    Predict {
        /// Subject id, code or name
        #[arg(value_name = "SUBJECT")]
        subject: String,

        /// Hypothetical score for a pending component, as NAME=SCORE
        #[arg(short = 's', long = "set", value_name = "NAME=SCORE", value_parser = parse_override)]
        overrides: Vec<(String, f64)>,

        /// Log the full report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// CSV file to append the prediction to
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Solve for the score a component needs to reach a target grade
    Needed {
        /// Subject id, code or name
        #[arg(value_name = "SUBJECT")]
        subject: String,

        /// Component to solve for
        #[arg(value_name = "COMPONENT")]
        component: String,

        /// Target percentage
        #[arg(short, long, default_value_t = 85.0)]
        target: f64,

        /// Hypothetical score for another pending component, as NAME=SCORE
        #[arg(short = 's', long = "set", value_name = "NAME=SCORE", value_parser = parse_override)]
        overrides: Vec<(String, f64)>,
    },
    /// Show study tasks, most urgent first
    Tasks,
    /// Show overall statistics
    Stats,
}

fn parse_override(s: &str) -> Result<(String, f64), String> {
    let (name, score) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=SCORE, got '{s}'"))?;
    let score: f64 = score
        .trim()
        .parse()
        .map_err(|e| format!("invalid score '{score}': {e}"))?;
    if !score.is_finite() {
        return Err(format!("score must be finite, got '{score}'"));
    }
    Ok((name.trim().to_string(), score))
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/tactical_grade.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("tactical_grade.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let subjects_file = cli
        .subjects
        .or_else(|| std::env::var("TACTICAL_GRADE_SUBJECTS").ok());
    let source: Box<dyn SubjectSource> = match subjects_file {
        Some(path) => {
            info!(path = %path, "Using subject file");
            Box::new(JsonFileCatalog::new(path))
        }
        None => Box::new(BuiltinCatalog),
    };

    match cli.command {
        Commands::Subjects => {
            for subject in source.list_subjects()? {
                let summary = SubjectSummary::from_subject(&subject);
                info!(
                    code = %summary.code,
                    name = %summary.name,
                    components = summary.components,
                    pending = summary.pending,
                    current_marks = ?summary.current_marks.map(|m| format!("{m:.1}%")),
                    status = summary.status.map(|t| t.label()).unwrap_or("no data"),
                    "Subject"
                );
            }
        }
        Commands::Predict {
            subject,
            overrides,
            json,
            output,
        } => {
            let session = simulate(source.as_ref(), &subject, &overrides)?;
            let report = session.report()?;

            print_pretty(&report);
            if json {
                print_json(&report)?;
            }

            match (report.predicted_percentage, report.tier) {
                (Some(p), Some(tier)) => {
                    info!(
                        subject = %report.subject_name,
                        predicted = %format!("{p:.1}%"),
                        tier = tier.label(),
                        "Predicted grade"
                    );
                    for check in &report.thresholds {
                        info!(
                            threshold = check.threshold,
                            label = check.label,
                            reached = check.reached,
                            "Threshold"
                        );
                    }
                }
                _ => warn!(subject = %report.subject_name, "No weighted data, prediction unavailable"),
            }
            info!("{}", report.insight);

            if let Some(path) = output {
                append_record(&path, &PredictionRecord::from_report(&report))?;
                info!(path = %path, "Prediction appended");
            }
        }
        Commands::Needed {
            subject,
            component,
            target,
            overrides,
        } => {
            let session = simulate(source.as_ref(), &subject, &overrides)?;
            let total = session
                .selected()
                .component(&component)
                .map(|c| c.total)
                .ok_or_else(|| GradeError::UnknownComponent {
                    subject: session.selected().name.clone(),
                    component: component.clone(),
                })?;

            match session.score_needed(&component, target) {
                Ok(needed) if needed > total => warn!(
                    component = %component,
                    needed = %format!("{needed:.1}/{total}"),
                    target,
                    "Target out of reach"
                ),
                Ok(needed) => info!(
                    component = %component,
                    needed = %format!("{:.1}/{total}", needed.max(0.0)),
                    target,
                    "Score needed"
                ),
                Err(GradeError::NoWeightedData { .. }) => {
                    warn!(subject = %subject, "No weighted data, cannot solve")
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Tasks => {
            let now = Utc::now();
            let mut tasks = source.list_tasks(now)?;
            sort_tasks(&mut tasks);
            for task in &tasks {
                info!(
                    title = %task.title,
                    subject = %task.subject,
                    priority = ?task.priority,
                    urgency = task.urgency,
                    due_in_days = task.days_until_due(now),
                    completed = task.completed,
                    "Task"
                );
            }
        }
        Commands::Stats => {
            let subjects = source.list_subjects()?;
            let tasks = source.list_tasks(Utc::now())?;
            let stats = UserStats::collect(&subjects, &tasks);
            info!(
                total_subjects = stats.total_subjects,
                total_tasks = stats.total_tasks,
                completed_tasks = stats.completed_tasks,
                average_compliance = stats.average_compliance,
                "User stats"
            );
        }
    }

    Ok(())
}

/// Builds a session with `subject` selected and `overrides` applied.
#[tracing::instrument(skip(source, overrides), fields(overrides = overrides.len()))]
fn simulate(
    source: &dyn SubjectSource,
    subject: &str,
    overrides: &[(String, f64)],
) -> Result<SimulationSession> {
    let mut session = SimulationSession::new(source.list_subjects()?)?;
    session.select(subject)?;
    for (name, score) in overrides {
        session.set_override(name, *score)?;
    }
    Ok(session)
}
