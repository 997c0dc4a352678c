//! Secret Santa assignment generator.
//!
//! Reads one participant name per line, assigns every participant someone else
//! to give to, and writes `"<giver> -> <receiver>"` lines in input order.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use santa::assign::{AssignOutcome, run_assign};
use santa::check::{CheckOutcome, check_file};
use santa::exit_codes;
use santa::io::config::{DEFAULT_CONFIG_FILE, SantaConfig, init_config, load_config};
use santa::logging;

#[derive(Parser)]
#[command(
    name = "santa",
    version,
    about = "Secret Santa assignment generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file.
    Init {
        /// Config file to create.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Generate assignments from a name file and write them to OUTPUT.
    Assign {
        /// File with one participant name per line.
        input: PathBuf,
        /// Destination for `giver -> receiver` lines (overwritten).
        output: PathBuf,
        /// TOML config file. Missing file means defaults.
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
        /// Random draws per participant before skipping it for the round.
        #[arg(long)]
        retry_max: Option<u32>,
        /// Rounds before giving up (0 retries forever).
        #[arg(long)]
        max_rounds: Option<u32>,
        /// Fixed RNG seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check an assignment file for self-assignments and unbalanced pairings.
    Check {
        /// Assignment file to validate.
        file: PathBuf,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { config, force } => cmd_init(&config, force),
        Command::Assign {
            input,
            output,
            config,
            retry_max,
            max_rounds,
            seed,
        } => {
            let mut cfg = load_config(&config)?;
            apply_overrides(&mut cfg, retry_max, max_rounds, seed);
            cmd_assign(&input, &output, &cfg)
        }
        Command::Check { file } => cmd_check(&file),
    }
}

fn apply_overrides(
    cfg: &mut SantaConfig,
    retry_max: Option<u32>,
    max_rounds: Option<u32>,
    seed: Option<u64>,
) {
    if let Some(retry_max) = retry_max {
        cfg.retry_max = retry_max;
    }
    if let Some(max_rounds) = max_rounds {
        cfg.max_rounds = max_rounds;
    }
    if seed.is_some() {
        cfg.seed = seed;
    }
}

fn cmd_init(config: &Path, force: bool) -> Result<i32> {
    let cfg = init_config(config, force)?;
    println!(
        "init: config={} retry_max={} max_rounds={}",
        config.display(),
        cfg.retry_max,
        cfg.max_rounds
    );
    Ok(exit_codes::OK)
}

fn cmd_assign(input: &Path, output: &Path, cfg: &SantaConfig) -> Result<i32> {
    match run_assign(input, output, cfg)? {
        AssignOutcome::Written { assignment, rounds } => {
            println!(
                "assigned: participants={} rounds={} output={}",
                assignment.len(),
                rounds,
                output.display()
            );
            Ok(exit_codes::OK)
        }
        AssignOutcome::WriteFailed { error, .. } => {
            eprintln!("{}", error);
            Ok(exit_codes::WRITE_FAILED)
        }
        AssignOutcome::Unmatched { rounds } => {
            eprintln!("unable to generate a valid assignment after {} rounds", rounds);
            Ok(exit_codes::UNMATCHED)
        }
    }
}

fn cmd_check(file: &Path) -> Result<i32> {
    match check_file(file)? {
        CheckOutcome::Valid { pairings } => {
            println!("valid: pairings={}", pairings);
            Ok(exit_codes::OK)
        }
        CheckOutcome::Invalid { errors } => {
            eprintln!("invalid assignment:\n- {}", errors.join("\n- "));
            Ok(exit_codes::INVALID)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_assign_defaults() {
        let cli = Cli::parse_from(["santa", "assign", "names.txt", "out.txt"]);
        let Command::Assign {
            input,
            output,
            config,
            retry_max,
            max_rounds,
            seed,
        } = cli.command
        else {
            panic!("expected assign");
        };
        assert_eq!(input, PathBuf::from("names.txt"));
        assert_eq!(output, PathBuf::from("out.txt"));
        assert_eq!(config, PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!((retry_max, max_rounds, seed), (None, None, None));
    }

    #[test]
    fn parse_assign_overrides() {
        let cli = Cli::parse_from([
            "santa",
            "assign",
            "in.txt",
            "out.txt",
            "--retry-max",
            "5",
            "--max-rounds",
            "0",
            "--seed",
            "42",
        ]);
        assert!(matches!(
            cli.command,
            Command::Assign {
                retry_max: Some(5),
                max_rounds: Some(0),
                seed: Some(42),
                ..
            }
        ));
    }

    #[test]
    fn parse_init_force() {
        let cli = Cli::parse_from(["santa", "init", "--force"]);
        assert!(matches!(cli.command, Command::Init { force: true, .. }));
    }

    #[test]
    fn parse_check() {
        let cli = Cli::parse_from(["santa", "check", "out.txt"]);
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn overrides_replace_config_values() {
        let mut cfg = SantaConfig::default();
        apply_overrides(&mut cfg, Some(7), None, Some(3));
        assert_eq!(cfg.retry_max, 7);
        assert_eq!(cfg.max_rounds, SantaConfig::default().max_rounds);
        assert_eq!(cfg.seed, Some(3));
    }
}
