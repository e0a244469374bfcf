use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use termcheck_core::{AgeStrategy, Terminal};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "termcheck")]
#[command(about = "Interactive age and full name input validation", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter (e.g. "debug"), overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for a positive age
    Age {
        /// How the number is read from the input: direct, token or strict
        #[arg(
            short,
            long,
            value_parser = str::parse::<AgeStrategy>,
            default_value_t = AgeStrategy::Direct
        )]
        strategy: AgeStrategy,
    },

    /// Ask for a "First Last" name
    Name,

    /// Ask for an age with every strategy, then for a name
    All,
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("Invalid --log-level filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn banner() {
    println!("-------------------------------------------------------------");
    println!("                        TERMCHECK                            ");
    println!(
        "                  VERSION: {:<10}                        ",
        env!("CARGO_PKG_VERSION")
    );
    println!("-------------------------------------------------------------");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let mut terminal = Terminal::stdio();

    match cli.command.unwrap_or(Commands::All) {
        Commands::Age { strategy } => {
            let age = terminal
                .ask_age(strategy)
                .with_context(|| format!("Failed to read an age ({} strategy)", strategy))?;
            println!("The input: {}", age);
        }
        Commands::Name => {
            let name = terminal
                .ask_full_name()
                .context("Failed to read a full name")?;
            println!("First name: {}", name.first());
            println!("Last name: {}", name.last());
        }
        Commands::All => {
            banner();

            for strategy in AgeStrategy::ALL {
                let age = terminal
                    .ask_age(strategy)
                    .with_context(|| format!("Failed to read an age ({} strategy)", strategy))?;
                println!("The input ({}): {}", strategy, age);
            }

            let name = terminal
                .ask_full_name()
                .context("Failed to read a full name")?;
            println!("The input: {}", name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(args: &[&str]) -> Option<AgeStrategy> {
        match Cli::try_parse_from(args.iter().copied()).ok()?.command {
            Some(Commands::Age { strategy }) => Some(strategy),
            _ => None,
        }
    }

    #[test]
    fn test_age_strategy_flag() {
        assert_eq!(
            strategy(&["termcheck", "age", "--strategy", "strict"]),
            Some(AgeStrategy::Strict)
        );
        assert_eq!(
            strategy(&["termcheck", "age", "-s", "token"]),
            Some(AgeStrategy::Token)
        );
        assert_eq!(strategy(&["termcheck", "age"]), Some(AgeStrategy::Direct));
    }

    #[test]
    fn test_unknown_age_strategy_rejected() {
        assert!(
            Cli::try_parse_from(["termcheck", "age", "--strategy", "fuzzy"]).is_err()
        );
    }

    #[test]
    fn test_no_subcommand_runs_everything() {
        let cli = Cli::try_parse_from(["termcheck"]).unwrap();
        assert!(cli.command.is_none());
    }
}
