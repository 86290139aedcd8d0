//! Application entry point and dispatch.

use anyhow::{Context, Result};
use tracing::{debug, info};

use seqgen_cli::output::{sequence_json, write_to_file};
use seqgen_cli::presenter::CLISequencePresenter;
use seqgen_cli::ui::print_header;
use seqgen_core::reorder::move_to_center;
use seqgen_orchestration::interfaces::SequencePresenter;
use seqgen_orchestration::orchestrator::{demo_seeds, execute_demo, execute_request};
use seqgen_orchestration::request::SequenceRequest;

use crate::config::{AppConfig, Command, GenerateArgs, LinearFormula, ReorderArgs};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = CLISequencePresenter::new(config.verbose, config.quiet, config.json);

    match &config.command {
        Command::Generate(args) => run_generate(config, args, &presenter),
        Command::Demo { count } => run_demo(config, *count, &presenter),
        Command::Reorder(args) => run_reorder(args, &presenter),
        Command::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            seqgen_cli::completion::generate_completion(&mut cmd, *shell, &mut std::io::stdout());
            Ok(())
        }
    }
}

fn run_generate(
    config: &AppConfig,
    args: &GenerateArgs,
    presenter: &CLISequencePresenter,
) -> Result<()> {
    let (default_previous, default_current) = demo_seeds(args.variant);
    let request = SequenceRequest::new(
        args.variant,
        args.count,
        args.previous.as_deref().unwrap_or(default_previous),
        args.current.as_deref().unwrap_or(default_current),
    );
    debug!(?request, "generate");

    let recurrence = args.formula.map(LinearFormula::into_recurrence);
    let result = execute_request(&request, recurrence);
    let sequence = result
        .outcome
        .with_context(|| format!("cannot build {} sequence", request.variant))?;

    presenter.present_sequence(request.variant, &sequence, result.duration);

    if let Some(ref path) = args.output {
        let contents = if config.json {
            sequence_json(request.variant, &sequence)?
        } else {
            sequence.to_string()
        };
        write_to_file(path, &contents).with_context(|| format!("cannot write {path}"))?;
        info!(path = %path, "sequence written");
    }

    Ok(())
}

fn run_demo(config: &AppConfig, count: i64, presenter: &CLISequencePresenter) -> Result<()> {
    if !config.quiet && !config.json {
        print_header("Sequence generators");
    }

    for outcome in execute_demo(count) {
        outcome.present(presenter);
    }

    Ok(())
}

fn run_reorder(args: &ReorderArgs, presenter: &CLISequencePresenter) -> Result<()> {
    let output = move_to_center(&args.values, &args.target);
    presenter.present_reorder(&args.values, args.target, &output);
    Ok(())
}
