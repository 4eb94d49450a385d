// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::infra::LoggerBuilder;

pub mod commands;

fn dir_arg() -> Arg {
    Arg::new("dir")
        .long("dir")
        .help("Locales directory laid out as <locale>/<namespace>.json. Defaults to the embedded catalog.")
        .value_name("DIR")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn locale_arg() -> Arg {
    Arg::new("locale")
        .long("locale")
        .help("Platform locale to use instead of querying the operating system, e.g. de-AT.")
        .value_name("LOCALE")
        .action(ArgAction::Set)
}

pub fn build_cli() -> Command {
    Command::new("locale-switch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect translation catalogs, detect the system language and resolve keys.")
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .help("Default log level when RUST_LOG is not set.")
                .value_name("LEVEL")
                .default_value("warn")
                .global(true)
                .action(ArgAction::Set),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("detect")
                .about("Print the platform locale and the derived system language.")
                .arg(locale_arg()),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a catalog: every file parses and every locale has the same namespaces.")
                .arg(dir_arg()),
        )
        .subcommand(
            Command::new("lookup")
                .about("Resolve one translation key.")
                .arg(
                    Arg::new("key")
                        .help("Key to resolve, either `namespace:key` or a plain key with --ns.")
                        .value_name("KEY")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("lang")
                        .long("lang")
                        .help("Active language. Defaults to the detected system language.")
                        .value_name("LANGUAGE")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("ns")
                        .long("ns")
                        .help("Namespace of the key.")
                        .value_name("NAMESPACE")
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("Engine options file (TOML).")
                        .value_name("CONFIG")
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("set")
                        .long("set")
                        .help("Interpolation value as name=value. May be repeated.")
                        .value_name("NAME=VALUE")
                        .action(ArgAction::Append),
                )
                .arg(locale_arg())
                .arg(dir_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List locales, namespaces and key counts.")
                .arg(dir_arg()),
        )
}

pub fn parse_args() -> ArgMatches {
    build_cli().get_matches()
}

pub fn process_command(matches: ArgMatches) -> Result<()> {
    let level = matches
        .get_one::<String>("log-level")
        .cloned()
        .unwrap_or_else(|| "warn".to_string());
    LoggerBuilder::new().default_level(level).init()?;

    match matches.subcommand() {
        Some(("detect", detect_matches)) => {
            let locale = detect_matches.get_one::<String>("locale").cloned();
            commands::detect::execute(locale)?;
        }
        Some(("check", check_matches)) => {
            let dir = check_matches.get_one::<PathBuf>("dir").cloned();
            commands::check::execute(dir)?;
        }
        Some(("lookup", lookup_matches)) => {
            let args = commands::lookup::LookupArgs {
                key: lookup_matches
                    .get_one::<String>("key")
                    .cloned()
                    .unwrap_or_default(),
                language: lookup_matches.get_one::<String>("lang").cloned(),
                namespace: lookup_matches.get_one::<String>("ns").cloned(),
                config: lookup_matches.get_one::<PathBuf>("config").cloned(),
                values: lookup_matches
                    .get_many::<String>("set")
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default(),
                locale: lookup_matches.get_one::<String>("locale").cloned(),
                dir: lookup_matches.get_one::<PathBuf>("dir").cloned(),
            };
            commands::lookup::execute(args)?;
        }
        Some(("list", list_matches)) => {
            let dir = list_matches.get_one::<PathBuf>("dir").cloned();
            commands::list::execute(dir)?;
        }
        _ => {
            // subcommand_required makes clap print help before we get here.
        }
    }
    Ok(())
}
