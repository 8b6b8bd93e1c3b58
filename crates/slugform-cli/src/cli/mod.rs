//! CLI for slugform.

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use slugform_core::config::{self, SlugformConfig};
use std::path::Path;

use commands::{run_check, run_completions, run_man, run_replay, run_slug, SlugArgs};

/// Top-level CLI for slugform.
#[derive(Debug, Parser)]
#[command(name = "slugform")]
#[command(about = "slugform: slugs, auto-slug fields and quantity steppers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the slug of each TEXT, one per line.
    Slug {
        /// Text to slugify.
        #[arg(required = true)]
        text: Vec<String>,

        /// Transliterate to ASCII and join words with the delimiter.
        #[arg(long)]
        ascii: bool,

        /// Word delimiter for --ascii (default from config).
        #[arg(long, value_name = "D")]
        delim: Option<String>,
    },

    /// Check that each SLUG is already a valid slug.
    Check {
        #[arg(required = true)]
        slug: Vec<String>,
    },

    /// Replay a page fixture and print the resulting form state as JSON.
    Replay {
        /// Path to the fixture (TOML).
        path: String,

        /// Single-line JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },

    /// Generate a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate the man page (roff) on stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => run_completions(Cli::command(), shell),
            CliCommand::Man => run_man(Cli::command()),
            command => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                command.run(&cfg)
            }
        }
    }

    fn run(self, cfg: &SlugformConfig) -> Result<()> {
        match self {
            CliCommand::Slug { text, ascii, delim } => run_slug(
                cfg,
                &SlugArgs {
                    text: &text,
                    ascii,
                    delim: delim.as_deref(),
                },
            )?,
            CliCommand::Check { slug } => run_check(&slug)?,
            CliCommand::Replay { path, compact } => run_replay(cfg, Path::new(&path), compact)?,
            CliCommand::Completions { .. } | CliCommand::Man => {
                unreachable!("handled before config load")
            }
        }
        Ok(())
    }
}
