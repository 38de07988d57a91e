// Purpose: Provides a command-line interface for stepping through Warshall runs.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use warshall_core::{
    random_adjacency_matrix, transitive_closure, AdjacencyMatrix, StepController, StepSize,
    StepState, VisualizerConfig,
};

/// Warshall transitive closure, one step at a time
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML)
    #[clap(long, env = "WARSHALL_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every step of a full run
    Run(MatrixArgs),

    /// Print only the transitive closure
    Closure(MatrixArgs),

    /// Print a random adjacency matrix
    Random(RandomArgs),

    /// Step through a run interactively
    Step(MatrixArgs),
}

#[derive(Args, Debug, Default)]
struct MatrixArgs {
    /// Matrix file in text form, or "-" for stdin
    matrix_file: Option<PathBuf>,

    /// Use a random graph with this many vertices instead of a file
    #[clap(long, conflicts_with = "matrix_file")]
    random: Option<usize>,

    /// Edge count for the random graph
    #[clap(long, requires = "random")]
    edges: Option<usize>,

    /// Seed for the random graph
    #[clap(long, requires = "random")]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct RandomArgs {
    /// Number of vertices
    #[clap(long)]
    size: Option<usize>,

    /// Number of edges
    #[clap(long)]
    edges: Option<usize>,

    /// Seed for reproducible output
    #[clap(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Plain text
    Text,
    /// One JSON document per step
    Json,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => VisualizerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => VisualizerConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Run(args) => {
            let matrix = load_matrix(&args, &config)?;
            run_all(&matrix, cli.format, &mut out)?;
        }
        Command::Closure(args) => {
            let matrix = load_matrix(&args, &config)?;
            print_closure(&matrix, cli.format, &mut out)?;
        }
        Command::Random(args) => {
            print_random(&args, &config, cli.format, &mut out)?;
        }
        Command::Step(args) => {
            let from_stdin = args.random.is_none()
                && args.matrix_file.as_deref().map_or(true, |p| p == Path::new("-"));
            if from_stdin {
                bail!(
                    "Interactive stepping reads commands from stdin; \
                     pass a matrix file or --random"
                );
            }
            let matrix = load_matrix(&args, &config)?;
            let stdin = io::stdin();
            interactive(&matrix, cli.format, stdin.lock(), &mut out)?;
        }
    }

    Ok(())
}

/// Resolve the input matrix from a file, stdin or the random generator.
fn load_matrix(args: &MatrixArgs, config: &VisualizerConfig) -> Result<AdjacencyMatrix> {
    let matrix = if let Some(size) = args.random {
        config.validate_size(size)?;
        let mut config = config.clone();
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        let mut rng = config.rng();
        let edges = args.edges.unwrap_or_else(|| config.edges_for(size));
        info!(size, edges, seed = rng.seed(), "Using random graph");
        random_adjacency_matrix(size, edges, &mut rng)
    } else {
        let text = match args.matrix_file.as_deref() {
            Some(path) if path != Path::new("-") => fs::read_to_string(path)
                .with_context(|| format!("Failed to read matrix from {}", path.display()))?,
            _ => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read matrix from stdin")?;
                text
            }
        };
        parse_matrix(&text)?
    };

    config.validate_size(matrix.size())?;
    Ok(matrix)
}

fn parse_matrix(text: &str) -> Result<AdjacencyMatrix> {
    let matrix: AdjacencyMatrix = text.parse().context("Invalid adjacency matrix")?;
    if (0..matrix.size()).any(|v| matrix.get(v, v)) {
        warn!("Matrix contains self-loops");
    }
    Ok(matrix)
}

fn write_step(out: &mut impl Write, step: &StepState, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{step}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(step)?)?,
    }
    Ok(())
}

fn write_matrix(
    out: &mut impl Write,
    matrix: &AdjacencyMatrix,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{matrix}")?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(matrix)?)?,
    }
    Ok(())
}

fn run_all(matrix: &AdjacencyMatrix, format: OutputFormat, out: &mut impl Write) -> Result<()> {
    let mut controller = StepController::new();
    controller.start(matrix);

    for step in controller.run_to_end()? {
        write_step(out, &step, format)?;
    }
    write_matrix(out, controller.stepper()?.matrix(), format)
}

fn print_closure(
    matrix: &AdjacencyMatrix,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    write_matrix(out, &transitive_closure(matrix), format)
}

fn print_random(
    args: &RandomArgs,
    config: &VisualizerConfig,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let size = args.size.unwrap_or(config.default_size);
    config.validate_size(size)?;

    let mut config = config.clone();
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let mut rng = config.rng();
    let edges = args.edges.unwrap_or_else(|| config.edges_for(size));
    let matrix = random_adjacency_matrix(size, edges, &mut rng);

    info!(seed = rng.seed(), "Generated random graph");
    write_matrix(out, &matrix, format)
}

const HELP: &str = "commands: s = small step, m = medium step (row), b = big step (layer), \
a = run all, p = step back, r = reset, c = show current, h = help, q = quit";

/// Operator notices go to stdout in text mode and to the log in JSON mode.
fn write_notice(out: &mut impl Write, notice: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{notice}")?,
        OutputFormat::Json => info!("{notice}"),
    }
    Ok(())
}

/// Drive a controller from line commands until `q` or end of input.
fn interactive(
    matrix: &AdjacencyMatrix,
    format: OutputFormat,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut controller = StepController::new();
    let start = controller.start(matrix);
    write_notice(out, HELP, format)?;
    write_step(out, &start, format)?;

    for line in input.lines() {
        let line = line?;
        let steps = match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            "h" | "help" => {
                write_notice(out, HELP, format)?;
                continue;
            }
            "s" => controller.advance(StepSize::Small)?,
            "m" => controller.advance(StepSize::Medium)?,
            "b" => controller.advance(StepSize::Big)?,
            "a" => controller.advance(StepSize::All)?,
            "p" => vec![controller.step_back()?],
            "r" => vec![controller.reset()?],
            "c" => vec![controller.current()?],
            other => {
                write_notice(out, &format!("unknown command {other:?}; {HELP}"), format)?;
                continue;
            }
        };

        if steps.is_empty() {
            let current = controller.current()?;
            match format {
                OutputFormat::Text => writeln!(out, "{}", current.message)?,
                OutputFormat::Json => write_step(out, &current, format)?,
            }
            continue;
        }
        for step in &steps {
            write_step(out, step, format)?;
        }
        if format == OutputFormat::Text {
            writeln!(out, "{}", controller.stepper()?.matrix())?;
        }
    }

    Ok(())
}
