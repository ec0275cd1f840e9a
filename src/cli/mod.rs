pub mod commands;
pub mod context;
pub mod formatters;
pub mod registry;
pub mod render;
pub mod ui;

use std::{env, path::PathBuf};

use crate::errors::CliError;
use context::CliContext;

pub fn run_cli() -> Result<(), CliError> {
    let args = env::args().skip(1).collect();
    run_with_args(args)
}

pub fn run_with_args(args: Vec<String>) -> Result<(), CliError> {
    let parsed = ParsedArgs::parse(args)?;

    match parsed.command.as_deref().unwrap_or("show") {
        "help" | "--help" | "-h" => {
            commands::help();
            Ok(())
        }
        "version" | "--version" => {
            commands::version();
            Ok(())
        }
        "theme" => {
            let mut ctx = CliContext::bootstrap(parsed.data_dir)?;
            commands::theme(&mut ctx, parsed.rest.first().cloned())
        }
        "show" => commands::show(&CliContext::bootstrap(parsed.data_dir)?),
        "balance" => commands::balance(&CliContext::bootstrap(parsed.data_dir)?),
        "collections" => commands::collections(&CliContext::bootstrap(parsed.data_dir)?),
        "expenses" => commands::expenses(&CliContext::bootstrap(parsed.data_dir)?),
        "events" => commands::events(&CliContext::bootstrap(parsed.data_dir)?),
        "notices" => commands::notices(&CliContext::bootstrap(parsed.data_dir)?),
        "banking" => commands::banking(&CliContext::bootstrap(parsed.data_dir)?),
        "lookup" => {
            let ctx = CliContext::bootstrap(parsed.data_dir)?;
            commands::lookup(&ctx, parsed.rest.first().cloned())
        }
        other => {
            print_usage();
            if let Some(suggestion) = registry::suggest(other) {
                eprintln!("Suggestion: `{suggestion}`?");
            }
            Err(CliError::Input(format!("unknown command `{other}`")))
        }
    }
}

struct ParsedArgs {
    command: Option<String>,
    rest: Vec<String>,
    data_dir: Option<PathBuf>,
}

impl ParsedArgs {
    fn parse(args: Vec<String>) -> Result<Self, CliError> {
        let mut command = None;
        let mut rest = Vec::new();
        let mut data_dir = None;
        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            if arg == "--data" {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::Input("`--data` requires a directory".into()))?;
                data_dir = Some(PathBuf::from(value));
            } else if command.is_none() {
                command = Some(arg);
            } else {
                rest.push(arg);
            }
        }
        Ok(Self {
            command,
            rest,
            data_dir,
        })
    }
}

fn print_usage() {
    eprintln!("Usage: duesboard_cli [--data <dir>] <command>");
    eprintln!("Commands:");
    for spec in registry::REGISTRY.iter() {
        eprintln!("  {:<22} {}", spec.usage, spec.summary);
    }
}

#[cfg(test)]
mod tests {
    use super::ParsedArgs;

    #[test]
    fn data_flag_is_extracted_anywhere_in_the_args() {
        let parsed = ParsedArgs::parse(vec![
            "lookup".into(),
            "--data".into(),
            "/tmp/docs".into(),
            "8".into(),
        ])
        .expect("parse");
        assert_eq!(parsed.command.as_deref(), Some("lookup"));
        assert_eq!(parsed.rest, vec!["8".to_string()]);
        assert_eq!(parsed.data_dir.as_deref().unwrap().to_str(), Some("/tmp/docs"));
    }

    #[test]
    fn data_flag_without_value_is_an_input_error() {
        let err = ParsedArgs::parse(vec!["show".into(), "--data".into()])
            .err()
            .expect("must fail");
        assert!(format!("{err}").contains("--data"));
    }
}
