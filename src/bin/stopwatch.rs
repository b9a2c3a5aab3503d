use anyhow::Context;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg, Program};
use bubbletea_stopwatch::face;
use bubbletea_stopwatch::logging::{init_logging, LoggingConfig};
use bubbletea_stopwatch::options::Options;
use clap::Parser;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

/// A digital stopwatch for the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Tick interval in milliseconds
    #[arg(long, default_value_t = 10)]
    interval_ms: u64,

    /// Start running immediately
    #[arg(long)]
    start: bool,

    /// Hide the key help line
    #[arg(long)]
    no_help: bool,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter in env_logger syntax, e.g. "bubbletea_stopwatch=debug"
    #[arg(long)]
    log_filter: Option<String>,
}

// Model::init takes no arguments, so the parsed options are parked here.
static OPTIONS: OnceLock<Options> = OnceLock::new();

struct App {
    face: face::Model,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let options = OPTIONS.get().cloned().unwrap_or_default();
        let face = face::Model::new(&options);
        let cmd = face.init();
        (Self { face }, cmd)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.face.update(msg)
    }

    fn view(&self) -> String {
        self.face.view()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        file: args.log_file,
        env_filter: args.log_filter,
    })?;

    let options = Options::default()
        .with_interval(Duration::from_millis(args.interval_ms))
        .with_start_running(args.start)
        .with_help(!args.no_help);
    options.validate()?;
    log::info!("starting stopwatch with {:?}", options);
    let _ = OPTIONS.set(options);

    let program = Program::<App>::builder()
        .alt_screen(true)
        .build()
        .context("failed to build terminal program")?;
    program.run().await.context("stopwatch exited with an error")?;

    log::info!("stopwatch closed");
    Ok(())
}
