mod cmd_hook;
mod cmd_inspect;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use todogate_bridge_claude::CheckOptions;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tracing filter directive, e.g. `TODOGATE_LOG=debug`. Off when unset.
const LOG_ENV: &str = "TODOGATE_LOG";

#[derive(Parser)]
#[command(
    name = "todogate",
    version,
    about = "Block a coding agent from stopping while todos or tasks are still open"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Hook entrypoints (read hook JSON from stdin)
    Hook {
        #[command(subcommand)]
        cmd: HookCmd,
    },
    /// Show the open todos and tasks for a transcript without gating
    Inspect {
        /// Transcript JSONL path (`~` is expanded)
        #[arg(long)]
        transcript: Option<String>,
        /// Session ID whose task snapshot to consult
        #[arg(long)]
        session: Option<String>,
        #[command(flatten)]
        snapshot: SnapshotArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum HookCmd {
    /// Claude Code Stop/SubagentStop hook: exit 1 with a report while work is open
    Claude {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },
}

#[derive(Args)]
struct SnapshotArgs {
    /// Task snapshot root (default: $TODOGATE_TASKS_DIR, else ~/.claude/tasks)
    #[arg(long)]
    tasks_dir: Option<PathBuf>,
    /// Ignore task snapshot files; use only the transcript
    #[arg(long)]
    no_snapshot: bool,
}

impl SnapshotArgs {
    fn options(self) -> CheckOptions {
        CheckOptions {
            tasks_root: self.tasks_dir,
            use_snapshot: !self.no_snapshot,
        }
    }
}

fn init_tracing() {
    // Hook stdout is parsed by the agent host, so logs only go to stderr
    // and only when asked for. Invalid filters are ignored.
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let exit_code = match cli.cmd {
        Command::Hook { cmd } => match cmd {
            HookCmd::Claude { snapshot } => cmd_hook::hook_claude(&snapshot.options())?,
        },
        Command::Inspect {
            transcript,
            session,
            snapshot,
            json,
        } => cmd_inspect::execute(transcript, session, &snapshot.options(), json)?,
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}
