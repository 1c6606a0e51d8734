//! keycalc: replay keypad scripts
//!
//! ## Usage
//!
//! ```bash
//! keycalc run "9/3="              # prints 3
//! keycalc run "5+3+2=" --steps    # display after every key
//! keycalc run "1/0=" --json       # {display, pending, tape}
//! keycalc keys --handlers         # keypad layout
//! keycalc --config calc.yaml config
//! ```

use clap::Parser;
use keypad_calc_cli::{
    load_engine_config, Cli, CliConfig, CliResult, ColorChoice, Commands, ConfigArgs, KeysArgs,
    Printer, ReplayRunner, RunArgs, Verbosity,
};
use keypad_calc::config::EngineConfig;
use keypad_calc::wasm::WasmKeypad;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    keypad_calc_cli::logging::init_logging(verbosity);

    let config = build_config(&cli, verbosity)?;
    let printer = Printer::new(config.color.should_color(), config.verbosity.is_quiet());

    match cli.command {
        Commands::Run(args) => run_replay(&config, &printer, &args),
        Commands::Keys(args) => run_keys(&printer, &args),
        Commands::Config(args) => run_config(&config, &printer, &args),
    }
}

fn build_config(cli: &Cli, verbosity: Verbosity) -> CliResult<CliConfig> {
    let color: ColorChoice = cli.color.clone().into();
    let engine = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading engine configuration");
            load_engine_config(path)?
        }
        None => EngineConfig::default(),
    };

    Ok(CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_engine(engine))
}

fn run_replay(config: &CliConfig, printer: &Printer, args: &RunArgs) -> CliResult<()> {
    let report = ReplayRunner::new(config.engine.clone())
        .with_steps(args.steps)
        .run(&args.keys)?;

    if args.json {
        printer.report_json(&report)
    } else {
        printer.report(&report, args.tape)
    }
}

fn run_keys(printer: &Printer, args: &KeysArgs) -> CliResult<()> {
    printer.keypad(&WasmKeypad::new(), args.handlers)
}

fn run_config(config: &CliConfig, printer: &Printer, args: &ConfigArgs) -> CliResult<()> {
    let engine = if args.defaults {
        EngineConfig::default()
    } else {
        config.engine.clone()
    };
    let yaml = serde_yaml_ng::to_string(&engine)?;
    printer.raw(&yaml)
}
