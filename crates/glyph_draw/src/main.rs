#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]

use std::{fs, path::Path, path::PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, Naming};
use glyph_engine::{parse_text, render_to_text};
use glyph_engine_edit::{Editor, Snapshot};

mod options;
mod script;

use options::Options;
use script::{parse_script, Replay};

#[derive(Parser, Debug)]
#[command(version, about = "Headless glyph canvas editor", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write an empty document
    New {
        #[arg(value_name = "OUT")]
        out: PathBuf,

        /// Canvas width in cells (default from options.toml)
        #[arg(long)]
        width: Option<i32>,

        /// Canvas height in cells (default from options.toml)
        #[arg(long)]
        height: Option<i32>,
    },

    /// Replay an input script against a document
    Replay {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Where to write the result (default: overwrite SNAPSHOT)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Print the canvas of a document
    Export {
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        #[arg(long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,
    },

    /// Turn a plain text file into a new document
    Import {
        #[arg(value_name = "TEXT_FILE")]
        text: PathBuf,

        #[arg(value_name = "OUT")]
        out: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Json,
}

fn get_log_dir() -> Option<PathBuf> {
    let dir = Options::config_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir).ok()?;
    }
    Some(dir)
}

fn load_editor(path: &Path, options: &Options) -> anyhow::Result<Editor> {
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let snapshot = Snapshot::from_json(&json).with_context(|| format!("parsing {}", path.display()))?;
    let mut editor = Editor::default();
    editor.set_box_charset(options.box_charset());
    editor.restore(snapshot).with_context(|| format!("loading {}", path.display()))?;
    Ok(editor)
}

fn save_snapshot(path: &Path, snapshot: &Snapshot) -> anyhow::Result<()> {
    let json = snapshot.to_json_pretty()?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    log::info!("saved {}", path.display());
    Ok(())
}

fn run(command: Command, options: &Options) -> anyhow::Result<()> {
    match command {
        Command::New { out, width, height } => {
            let width = width.unwrap_or(options.default_width);
            let height = height.unwrap_or(options.default_height);
            if width < 0 || height < 0 {
                anyhow::bail!("invalid canvas size {width}x{height}");
            }
            let mut snapshot = Editor::new(width, height).snapshot();
            options.apply_to(&mut snapshot);
            save_snapshot(&out, &snapshot)
        }
        Command::Replay { snapshot, script, out } => {
            let mut editor = load_editor(&snapshot, options)?;
            let text = fs::read_to_string(&script).with_context(|| format!("reading {}", script.display()))?;
            let lines = parse_script(&text).with_context(|| format!("parsing {}", script.display()))?;

            let mut replay = Replay::default();
            replay.run(&mut editor, &lines)?;
            log::info!("replayed {} lines, {} handled", lines.len(), replay.handled());

            save_snapshot(out.as_deref().unwrap_or(snapshot.as_path()), &editor.snapshot())
        }
        Command::Export { snapshot, format } => {
            let editor = load_editor(&snapshot, options)?;
            match format {
                ExportFormat::Text => print!("{}", render_to_text(editor.state().grid())),
                ExportFormat::Json => println!("{}", editor.snapshot().to_json_pretty()?),
            }
            Ok(())
        }
        Command::Import { text, out } => {
            let txt = fs::read_to_string(&text).with_context(|| format!("reading {}", text.display()))?;
            let mut snapshot = Editor::new(0, 0).snapshot();
            options.apply_to(&mut snapshot);

            let mut editor = Editor::default();
            editor.restore(snapshot)?;
            editor.import_slice(&parse_text(&txt));
            save_snapshot(&out, &editor.snapshot())
        }
    }
}

fn main() {
    let args = Args::parse();

    let _logger = match get_log_dir() {
        Some(log_dir) => Logger::try_with_env_or_str("info")
            .and_then(|logger| {
                logger
                    .log_to_file(FileSpec::default().directory(&log_dir).basename("glyph_draw").suffix("log").suppress_timestamp())
                    .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
                    .duplicate_to_stderr(flexi_logger::Duplicate::Warn)
                    .start()
            })
            .map_err(|err| eprintln!("Failed to start logger: {err}"))
            .ok(),
        None => {
            eprintln!("Failed to create log file");
            None
        }
    };

    log::info!("Starting glyph_draw {}", env!("CARGO_PKG_VERSION"));

    let options = Options::load();
    if Options::config_file().is_some_and(|file| !file.exists()) {
        options.store();
    }

    if let Err(err) = run(args.command, &options) {
        log::error!("{err:#}");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
