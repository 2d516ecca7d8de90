//! Burndown CLI - sprint report generator for Asana projects.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::ProgressBar;
use tracing::info;
use tracing_subscriber::EnvFilter;

use asana::{AsanaClient, Task};
use report::aggregate::Aggregates;
use report::burndown::build_burndown;
use report::chart::chart_url;
use report::estimate::EstimateParser;
use report::normalize::{normalize, TaskRow};
use report::sprint::{parse_date, SprintRange};
use report::summary::Summary;
use report::table::{write_burndown, write_task_list};
use report::tags::TagClassTable;

/// Generate a sprint task list and burndown chart from Asana tasks.
#[derive(Parser)]
#[command(name = "burndown")]
#[command(about = "Generate a sprint task list and burndown chart from Asana tasks")]
struct Cli {
    /// JSON snapshot of an Asana project (View As JSON export).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Asana API key (or set `ASANA_API_KEY` env var).
    #[arg(short, long, env = "ASANA_API_KEY", default_value = "")]
    key: String,

    /// Asana project id to pull tasks from.
    #[arg(short, long)]
    project_id: Option<String>,

    /// Sprint start date in YYYY-MM-DD.
    #[arg(short, long)]
    start: Option<String>,

    /// Sprint end date in YYYY-MM-DD.
    #[arg(short, long)]
    end: Option<String>,

    /// Default estimate for tasks without explicit estimates.
    #[arg(short = 'b', long, default_value_t = 0.0)]
    default_estimate: f64,

    /// Directory for the generated CSV files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Enable debug logging.
    #[arg(short, long, default_value = "false")]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if cli.input.is_none() && cli.project_id.is_none() {
        bail!("An input file or Asana project id must be specified.");
    }
    if cli.default_estimate < 0.0 {
        bail!("Default estimate must be non-negative.");
    }

    // Gather raw tasks, and the project name when pulling from the API.
    let (tasks, project_name) = match (&cli.input, &cli.project_id) {
        (Some(path), _) => {
            let tasks = asana::load_tasks(path)
                .with_context(|| format!("Failed to load snapshot {}", path.display()))?;
            (tasks, None)
        }
        (None, Some(project_id)) => {
            let key = resolve_api_key(&cli)?;
            let client = AsanaClient::new(key).context("Failed to create Asana client")?;
            let (tasks, name) = fetch_project_tasks(&client, project_id).await?;
            (tasks, Some(name))
        }
        (None, None) => unreachable!(),
    };
    info!(count = tasks.len(), "Gathered tasks");

    // Sprint dates: explicit flags win, then the project-name annotation,
    // then an interactive prompt.
    let range = resolve_sprint_range(
        cli.start.as_deref(),
        cli.end.as_deref(),
        project_name.as_deref(),
    )?;

    // Normalize and aggregate in one pass.
    let parser = EstimateParser::new(cli.default_estimate);
    let table = TagClassTable::default();
    let mut rows: Vec<TaskRow> = Vec::with_capacity(tasks.len());
    let mut aggregates = Aggregates::default();
    for task in &tasks {
        let row = normalize(task, &parser);
        aggregates.record(&row, table.classify(&task.tags));
        rows.push(row);
    }

    let buckets = aggregates.buckets(&table);
    let today = Utc::now().date_naive();
    let burndown_rows = build_burndown(&range, &aggregates, &buckets, today);

    let tasks_path = cli.out_dir.join("tasks.csv");
    write_task_list(&tasks_path, &rows).context("Failed to write task list")?;
    let burndown_path = cli.out_dir.join("burndown.csv");
    write_burndown(&burndown_path, &burndown_rows, &buckets)
        .context("Failed to write burndown table")?;
    info!(
        tasks = %tasks_path.display(),
        burndown = %burndown_path.display(),
        "Reports written"
    );

    let summary = Summary::compute(&aggregates, &range, &buckets)?;
    println!("{summary}");
    println!("Burndown chart: {}", chart_url(&burndown_rows, &range));

    Ok(())
}

/// Resolve the API key from the flag or environment.
fn resolve_api_key(cli: &Cli) -> Result<String> {
    let key = cli.key.trim();
    if key.is_empty() {
        bail!("Set ASANA_API_KEY in your environment or pass a key with the -k flag.");
    }
    Ok(key.to_string())
}

/// Fetch full task detail for every task in a project.
///
/// Project queries only return task summaries, so each task is hydrated
/// with its own request.
async fn fetch_project_tasks(client: &AsanaClient, project_id: &str) -> Result<(Vec<Task>, String)> {
    let project = client
        .get_project(project_id)
        .await
        .context("Failed to fetch project")?;
    println!("Gathering tasks from '{}'", project.name);
    println!("{}", AsanaClient::project_url(project_id));

    let summaries = client
        .project_tasks(project_id)
        .await
        .context("Failed to list project tasks")?;

    let progress = ProgressBar::new(summaries.len() as u64);
    let mut tasks = Vec::with_capacity(summaries.len());
    for summary in &summaries {
        let task = client
            .get_task(&summary.gid)
            .await
            .with_context(|| format!("Failed to fetch task {}", summary.gid))?;
        tasks.push(task);
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok((tasks, project.name))
}

/// Resolve the sprint range from flags, the project-name annotation, or
/// an interactive prompt, in that order per endpoint.
fn resolve_sprint_range(
    start: Option<&str>,
    end: Option<&str>,
    project_name: Option<&str>,
) -> Result<SprintRange> {
    let annotated = match project_name {
        Some(name) => SprintRange::from_project_name(name)?,
        None => None,
    };

    let start = match (start, annotated) {
        (Some(value), _) => parse_date(value)?,
        (None, Some(range)) => range.start(),
        (None, None) => prompt_date("Sprint start date (YYYY-MM-DD)")?,
    };
    let end = match (end, annotated) {
        (Some(value), _) => parse_date(value)?,
        (None, Some(range)) => range.end(),
        (None, None) => prompt_date("Sprint end date (YYYY-MM-DD)")?,
    };

    Ok(SprintRange::new(start, end)?)
}

/// Prompt until a valid date is entered.
fn prompt_date(prompt: &str) -> Result<NaiveDate> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .validate_with(|input: &String| match parse_date(input) {
            Ok(_) => Ok(()),
            Err(_) => Err("expected a date in YYYY-MM-DD form"),
        })
        .interact_text()?;
    Ok(parse_date(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_from_flags() {
        let range = resolve_sprint_range(Some("2024-03-01"), Some("2024-03-08"), None).unwrap();
        assert_eq!(range.days(), 7);
    }

    #[test]
    fn test_range_from_project_annotation() {
        let range = resolve_sprint_range(None, None, Some("Sprint 9 [2024-03-01 - 2024-03-08]"))
            .unwrap();
        assert_eq!(range.start().to_string(), "2024-03-01");
        assert_eq!(range.end().to_string(), "2024-03-08");
    }

    #[test]
    fn test_flag_overrides_annotation() {
        let range = resolve_sprint_range(
            Some("2024-03-02"),
            None,
            Some("Sprint 9 [2024-03-01 - 2024-03-08]"),
        )
        .unwrap();
        assert_eq!(range.start().to_string(), "2024-03-02");
        assert_eq!(range.end().to_string(), "2024-03-08");
    }

    #[test]
    fn test_inverted_flags_rejected() {
        let result = resolve_sprint_range(Some("2024-03-08"), Some("2024-03-01"), None);
        assert!(result.is_err());
    }
}
