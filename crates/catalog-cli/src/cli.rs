//! Argument parsing and dispatch

use crate::commands::{self, RandomOptions};
use crate::config::CatalogConfig;
use crate::kind::EntityKind;
use crate::logging;
use anyhow::Context;
use catalog_post::Post;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;

fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .short('k')
        .default_value("plant")
        .value_parser(|s: &str| s.parse::<EntityKind>().map_err(|e| e.to_string()))
        .help("Entity kind: plant, tree, flower, rose or post")
}

fn counter_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .default_value("0")
        .allow_negative_numbers(true)
        .value_parser(value_parser!(i64))
        .help(help)
}

/// Command-line definition of the `catalog` binary
#[must_use]
pub fn command() -> Command {
    Command::new("catalog")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate, enter and inspect catalogue entities")
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML file with seed, count and log_filter defaults"),
        )
        .subcommand(
            Command::new("random")
                .about("Generate random entities")
                .arg(kind_arg())
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .value_parser(value_parser!(usize))
                        .help("Number of entities [default: config count]"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_parser(value_parser!(u64))
                        .help("Random seed for reproducibility"),
                )
                .arg(
                    Arg::new("sorted")
                        .long("sorted")
                        .action(ArgAction::SetTrue)
                        .help("Sort plants by name"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
        .subcommand(
            Command::new("enter")
                .about("Enter one entity interactively")
                .arg(kind_arg()),
        )
        .subcommand(
            Command::new("stats")
                .about("Show derived metrics of a post")
                .arg(counter_arg("views", "Number of views"))
                .arg(counter_arg("comments", "Number of comments"))
                .arg(counter_arg("reactions", "Number of reactions"))
                .arg(
                    Arg::new("audience")
                        .long("audience")
                        .required(true)
                        .value_parser(value_parser!(u64))
                        .help("Total audience for the engagement rate"),
                ),
        )
}

/// Resolve configuration from the optional `--config` file
///
/// # Errors
/// Returns error if a given config file cannot be loaded
pub fn load_config(matches: &ArgMatches) -> anyhow::Result<CatalogConfig> {
    match matches.get_one::<PathBuf>("config") {
        Some(path) => CatalogConfig::load(path)
            .with_context(|| format!("loading {}", path.display())),
        None => Ok(CatalogConfig::default()),
    }
}

/// Run the parsed command line
///
/// # Errors
/// Returns error if configuration, input or output fails
pub fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = load_config(matches)?;
    logging::init(&config.log_filter);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match matches.subcommand() {
        Some(("random", args)) => {
            let kind = args
                .get_one::<EntityKind>("kind")
                .copied()
                .unwrap_or_default();
            let options = RandomOptions {
                kind,
                count: args.get_one::<usize>("count").copied().unwrap_or(config.count),
                sorted: args.get_flag("sorted"),
                json: args.get_flag("json"),
            };
            let mut rng = match args.get_one::<u64>("seed").copied().or(config.seed) {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            commands::random(options, &mut rng, &mut out)?;
        }
        Some(("enter", args)) => {
            let kind = args
                .get_one::<EntityKind>("kind")
                .copied()
                .unwrap_or_default();
            commands::enter(kind, io::stdin().lock(), io::stderr(), &mut out)?;
        }
        Some(("stats", args)) => {
            let counter = |name: &str| args.get_one::<i64>(name).copied().unwrap_or(0);
            let post = Post::new(counter("views"), counter("comments"), counter("reactions"));
            let audience = args.get_one::<u64>("audience").copied().unwrap_or(0);
            commands::stats(&post, audience, &mut out)?;
        }
        Some((other, _)) => anyhow::bail!("unknown subcommand: {other}"),
        None => anyhow::bail!("no subcommand given"),
    }

    out.flush()?;
    Ok(())
}
