mod app;
mod renderer;

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::Parser;
use ghostleg_core::animation::Immediate;
use ghostleg_core::labels::{parse_labels, usable_labels};
use ghostleg_core::svg::render_svg;
use ghostleg_core::{LadderConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ghostleg")]
#[command(about = "Ghost-leg (amidakuji) lottery in the terminal")]
struct Cli {
    /// Participant labels, in lane order
    labels: Vec<String>,

    /// Read labels from a file, one per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// JSON file overriding ladder geometry and timing
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of row slots (one fewer rungs are drawn)
    #[arg(long)]
    rows: Option<u32>,

    /// Reveal time per path segment, in milliseconds
    #[arg(long)]
    duration_ms: Option<u64>,

    /// Random seed; a fresh one is chosen and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Write the ladder and one traced path to this SVG file instead of
    /// opening the terminal UI
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Start lane for --svg (random when omitted)
    #[arg(long, requires = "svg")]
    start: Option<usize>,

    /// Dark palette
    #[arg(long)]
    dark: bool,

    /// Write logs here while the terminal UI is open
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    if cli.svg.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<LadderConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            LadderConfig::from_json(&data)?
        }
        None => LadderConfig::default(),
    };
    if let Some(rows) = cli.rows {
        config.row_count = rows;
    }
    if let Some(ms) = cli.duration_ms {
        config.segment_duration_ms = ms;
    }
    config.validate()?;
    Ok(config)
}

fn load_labels(cli: &Cli) -> Result<Vec<String>> {
    let mut labels = match &cli.file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading labels {}", path.display()))?;
            parse_labels(&text)
        }
        None => Vec::new(),
    };
    labels.extend(cli.labels.iter().cloned());
    if usable_labels(&labels).len() < 2 {
        bail!("need at least two non-empty labels");
    }
    Ok(labels)
}

fn export_svg(
    mut session: Session,
    labels: &[String],
    start: Option<usize>,
    dark: bool,
    path: &Path,
) -> Result<()> {
    session.generate(labels)?;
    let trace = session.run(start, &mut Immediate)?;

    let canvas = session.config().canvas(session.ladder().lane_count());
    let svg = render_svg(&session.render(), canvas.w, canvas.h, dark);
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;

    let ladder = session.ladder();
    info!(
        start = %ladder.lane(trace.start).map(|l| l.label.to_string()).unwrap_or_default(),
        result = %ladder.lane(trace.terminal).map(|l| l.label.to_string()).unwrap_or_default(),
        path = %path.display(),
        "wrote SVG"
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let config = load_config(&cli)?;
    let labels = load_labels(&cli)?;
    let session = match cli.seed {
        Some(seed) => Session::with_seed(config, seed)?,
        None => Session::new(config)?,
    };
    info!(seed = session.seed(), lanes = usable_labels(&labels).len(), "session ready");

    if let Some(path) = &cli.svg {
        return export_svg(session, &labels, cli.start, cli.dark, path);
    }

    let mut surface = renderer::TerminalSurface::enter(cli.dark)?;
    let result = app::App::new(session, labels).run(&mut surface);
    surface.leave()?;
    result
}
