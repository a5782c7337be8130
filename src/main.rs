use anyhow::{Context, Result};
use bodmas::editor::{Editor, Snapshot};
use bodmas::{Config, keys, logging, ui};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

/// Arithmetic expression editor with live results and history.
#[derive(Parser, Debug)]
#[command(name = "bodmas", version, about)]
struct Cli {
    /// Key script to replay, e.g. "5+3=" or "(2+3)*4<del>5=".
    /// Without it, key scripts are read from stdin one line at a time.
    keys: Option<String>,

    /// Config file (defaults to $XDG_CONFIG_HOME/bodmas/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print snapshots as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Compact log format
    #[arg(long)]
    compact_logs: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_from_verbosity(cli.verbose), cli.compact_logs);

    let config = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
    let mut editor = Editor::new(config.editor_options());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(script) = &cli.keys {
        replay(&mut editor, script)?;
        print_snapshot(&mut out, &editor.snapshot(), &config, cli.json)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        if let Err(e) = replay(&mut editor, &line) {
            warn!(error = %e, "ignoring line");
            writeln!(out, "{e:#}")?;
            continue;
        }
        print_snapshot(&mut out, &editor.snapshot(), &config, cli.json)?;
    }

    Ok(())
}

fn replay(editor: &mut Editor, script: &str) -> Result<()> {
    let actions = keys::parse_keys(script).with_context(|| format!("Invalid key script {script:?}"))?;
    for action in actions {
        editor.dispatch(action);
    }
    Ok(())
}

fn print_snapshot(
    out: &mut impl Write,
    snapshot: &Snapshot,
    config: &Config,
    json: bool,
) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, snapshot).context("Failed to serialize snapshot")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}\n", ui::render(snapshot, config))?;
    }
    out.flush()?;
    Ok(())
}
