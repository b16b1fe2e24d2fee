use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use mealcal::api::ColorExport;
use mealcal::{CalendarState, WeekPlan};
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "mealcal-export",
    author,
    version,
    about = "Assign ingredient colors for a meal plan and export them as JSON",
    long_about = None
)]
pub struct Cli {
    /// Week plan JSON file, or a directory searched recursively for them
    #[arg(long, value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination file for the color export
    #[arg(long, value_name = "OUTPUT_FILE")]
    pub output: PathBuf,

    /// Only list legend entries containing this text (case-insensitive)
    #[arg(long, value_name = "TERM", default_value = "")]
    pub search: String,

    /// Highlight an ingredient; repeat to select several
    #[arg(long = "select", value_name = "INGREDIENT")]
    pub selected: Vec<String>,
}

pub fn run(cli: Cli) -> Result<()> {
    let plan = load_source(&cli.source)
        .with_context(|| format!("failed to load meal plan from '{}'", cli.source.display()))?;

    let mut state = CalendarState::new(plan);
    for ingredient in &cli.selected {
        if state.colors().get(ingredient).is_none() {
            debug!(ingredient = %ingredient, "selected ingredient does not appear in the plan");
        }
        if !state.selection().contains(ingredient) {
            state.toggle_ingredient(ingredient);
        }
    }

    let export = ColorExport::from_state(&state, &cli.search);

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!(
                    "failed to create output parent directory '{}'",
                    parent.display()
                )
            })?;
        }
    }

    let json = serde_json::to_vec_pretty(&export)?;
    fs::write(&cli.output, json)
        .with_context(|| format!("failed to write export to '{}'", cli.output.display()))?;

    info!(
        target: "mealcal::exporter",
        source = %cli.source.display(),
        output = %cli.output.display(),
        meals = export.meals.len(),
        ingredients = export.legend.len(),
        palette = export.palette_size,
        "export completed"
    );

    Ok(())
}

fn load_source(source: &Path) -> Result<WeekPlan> {
    let metadata = fs::metadata(source)
        .with_context(|| format!("failed to read metadata for '{}'", source.display()))?;

    if metadata.is_file() {
        return read_plan(source);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(source) {
        let entry = entry
            .with_context(|| format!("failed to walk plan directory '{}'", source.display()))?;

        if entry.file_type().is_file() && is_json(entry.path()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    if files.is_empty() {
        anyhow::bail!("no plan files found under '{}'", source.display());
    }

    let mut plan = WeekPlan::default();
    for path in files {
        plan.merge(read_plan(&path)?);
    }
    Ok(plan)
}

fn read_plan(path: &Path) -> Result<WeekPlan> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read plan file '{}'", path.display()))?;
    let plan: WeekPlan = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse plan file '{}'", path.display()))?;

    debug!(
        path = %path.display(),
        days = plan.days().len(),
        meals = plan.meal_count(),
        "read plan file"
    );
    Ok(plan)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
