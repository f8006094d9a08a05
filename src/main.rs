//! # Folio CLI (`folio`)
//!
//! Ask the portfolio assistant questions and browse portfolio content from
//! the terminal.
//!
//! ## Usage
//!
//! ```bash
//! folio --config ./config/folio.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `folio ask "<question>"` | Answer one question |
//! | `folio chat` | Interactive chat over stdin |
//! | `folio projects` | List projects, optionally by category |
//! | `folio show <id>` | Show one project in full |
//! | `folio timeline` | List talks, exhibitions, awards and other events |
//! | `folio publications` | List publications and theses |
//! | `folio profile` | Show the profile |
//! | `folio completions <shell>` | Print shell completions |

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use folio::ask::{self, AskOptions};
use folio::{chat, config, content, listing, logging};

/// Folio CLI — a portfolio assistant that answers from local content.
#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio — a portfolio assistant that answers from local content",
    version,
    long_about = "Folio loads a profile, projects and timeline from JSON content files and \
    answers questions about them by keyword matching, with no network access."
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/folio.toml`. If the file does not exist,
    /// built-in defaults are used.
    #[arg(long, global = true, default_value = "./config/folio.toml")]
    config: PathBuf,

    /// Content directory, overriding `[content].dir`.
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Only log errors.
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Answer a single question.
    Ask {
        /// The question to ask.
        question: String,

        /// Print the reply as a JSON message envelope.
        #[arg(long)]
        json: bool,

        /// Show which rule answered and the scores behind it.
        #[arg(long)]
        explain: bool,
    },

    /// Chat interactively.
    ///
    /// Reads one question per line from stdin until end of input. Enter a
    /// suggestion's number to ask it.
    Chat,

    /// List projects.
    Projects {
        /// Only show this category (Research, Hardware, Artistic, Coursework).
        #[arg(long)]
        category: Option<String>,
    },

    /// Show one project in full.
    Show {
        /// Project id.
        id: String,
    },

    /// List non-publication timeline events.
    Timeline,

    /// List publications and theses.
    Publications,

    /// Show the profile.
    Profile,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Commands that don't require config or content
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "folio", &mut std::io::stdout());
        return Ok(());
    }

    let mut cfg = config::load_or_minimal(&cli.config)?;
    if let Some(dir) = cli.content {
        cfg.content.dir = dir;
    }

    logging::init_tracing(&cfg.logging.level, cli.verbose, cli.quiet)?;

    let ctx = content::load_content(&cfg.content)?;

    match cli.command {
        Commands::Ask {
            question,
            json,
            explain,
        } => {
            ask::run_ask(ctx, &question, AskOptions { json, explain }).await?;
        }
        Commands::Chat => {
            chat::run_chat(ctx, &cfg.chat.suggestions).await?;
        }
        Commands::Projects { category } => {
            listing::run_projects(&ctx.projects, category.as_deref())?;
        }
        Commands::Show { id } => {
            listing::run_show(&ctx.projects, &id)?;
        }
        Commands::Timeline => {
            print!("{}", listing::render_timeline(&ctx.timeline));
        }
        Commands::Publications => {
            print!("{}", listing::render_publications(&ctx.timeline));
        }
        Commands::Profile => {
            print!("{}", listing::render_profile(&ctx.profile));
        }
        Commands::Completions { .. } => {
            // Handled above (before config loading)
            unreachable!()
        }
    }

    Ok(())
}
