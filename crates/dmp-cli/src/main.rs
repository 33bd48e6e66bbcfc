//! Research output schema mapper CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use dmp_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use dmp_cli::commands::{
    load_registry, run_empty_row, run_export, run_fields, run_import, run_row_info, write_json,
};
use dmp_cli::logging::{LogConfig, LogFormat, init_logging};
use dmp_cli::summary::{columns_table, editor_summary_line, fields_table, row_info_table};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let registry = load_registry(cli.standards_dir.as_deref())?;
    match &cli.command {
        Command::Export(args) => {
            let question = run_export(args, &registry)?;
            match write_json(&question, args.out.as_deref())? {
                Some(json) => println!("{json}"),
                None => println!("{}", columns_table(&question)),
            }
        }
        Command::Import(args) => {
            let state = run_import(args, &registry)?;
            match write_json(&state, args.out.as_deref())? {
                Some(json) => println!("{json}"),
                None => println!("{}", editor_summary_line(&state.summary())),
            }
        }
        Command::EmptyRow(args) => {
            let row = run_empty_row(args)?;
            if let Some(json) = write_json(&row, None)? {
                println!("{json}");
            }
        }
        Command::RowInfo(args) => {
            let info = run_row_info(args)?;
            if args.json {
                if let Some(json) = write_json(&info, None)? {
                    println!("{json}");
                }
            } else {
                println!("{}", row_info_table(&info));
            }
        }
        Command::Fields(args) => println!("{}", fields_table(&run_fields(args, &registry)?)),
        Command::Template => {
            let json = serde_json::to_string_pretty(&registry.template)
                .context("serialize template")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
