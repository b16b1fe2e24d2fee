use std::error::Error;
use std::process;

use clap::Command;
use duct::cmd;

type AnyResult<T> = Result<T, Box<dyn Error>>;
type StepFn = fn() -> AnyResult<()>;
type Step = (&'static str, StepFn);

fn cli() -> Command {
    Command::new("mealcal-task")
        .about("Tasks for managing the mealcal workspace")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("lint").about("Run Rust formatters and linters"))
        .subcommand(Command::new("test").about("Run Rust tests"))
        .subcommand(Command::new("bench").about("Build benchmarks without running them"))
        .subcommand(
            Command::new("export-sample")
                .about("Export colors for the sample week into target/sample_colors.json"),
        )
        .subcommand(Command::new("all").about("Run every lint, test and bench build"))
}

fn main() {
    if let Err(error) = run() {
        eprintln!("xtask error: {error}");
        process::exit(1);
    }
}

fn run() -> AnyResult<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("lint", _)) => run_lint(),
        Some(("test", _)) => run_tests(),
        Some(("bench", _)) => run_bench_build(),
        Some(("export-sample", _)) => run_export_sample(),
        Some(("all", _)) => run_all(),
        _ => unreachable!(),
    }
}

fn run_lint() -> AnyResult<()> {
    println!("Running Rust lint...");
    run_cmd("cargo", &["fmt", "--all"])?;
    run_cmd(
        "cargo",
        &[
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ],
    )?;
    Ok(())
}

fn run_tests() -> AnyResult<()> {
    println!("Running Rust tests...");
    run_cmd("cargo", &["test", "--workspace"])
}

fn run_bench_build() -> AnyResult<()> {
    println!("Building benchmarks...");
    run_cmd("cargo", &["bench", "-p", "mealcal", "--no-run"])
}

fn run_export_sample() -> AnyResult<()> {
    println!("Exporting sample week colors...");
    run_cmd(
        "cargo",
        &[
            "run",
            "-p",
            "exporter",
            "--",
            "--source",
            "mealcal/tests/fixtures/sample_week.json",
            "--output",
            "target/sample_colors.json",
        ],
    )
}

fn run_all() -> AnyResult<()> {
    let mut errors = Vec::new();

    const STEPS: &[Step] = &[
        ("Rust lint", run_lint),
        ("Rust tests", run_tests),
        ("Bench build", run_bench_build),
    ];

    for (label, step) in STEPS {
        if let Err(error) = step() {
            eprintln!("{label} failed: {error}");
            errors.push(format!("{label}: {error}"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("One or more tasks failed:\n{}", errors.join("\n")).into())
    }
}

fn run_cmd(program: &str, args: &[&str]) -> AnyResult<()> {
    println!("> {} {}", program, args.join(" "));
    cmd(program, args).run()?;
    Ok(())
}
