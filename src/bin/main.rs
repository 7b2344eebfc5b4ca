//! gpkernel Command Line Interface
//!
//! Writes, inspects and evaluates kernel description files, and evaluates
//! hyperparameterized kernel families directly.

use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use gpkernel::core::{KernelError, Result};
use gpkernel::kernel::{check_num_hyper, LogKernel, LogKernelHyper};
use gpkernel::utils::hyper;
use gpkernel::{HyperFamily, KernelConfig, KernelFile};
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "gpkernel")]
#[command(about = "Evaluate log-space kernel functions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "gpkernel contributors")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a kernel file from a family and its hyperparameters
    Init(InitArgs),
    /// Evaluate a kernel file on a pair of vectors
    Eval(EvalArgs),
    /// Evaluate a hyperparameterized family with explicit hyperparameters
    EvalHyper(EvalHyperArgs),
    /// Display kernel file information
    Info(InfoArgs),
}

#[derive(Args)]
struct InitArgs {
    /// Output kernel file
    #[arg(short, long)]
    output: PathBuf,

    /// Kernel family
    #[arg(long)]
    family: CliFamily,

    /// Log-space hyperparameters, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    hyper: Vec<f64>,

    /// Add observation noise with this log noise level
    #[arg(long, allow_hyphen_values = true)]
    log_noise: Option<f64>,

    /// Free-form description stored in the file
    #[arg(long)]
    description: Option<String>,
}

#[derive(Args)]
struct PairArgs {
    /// First vector, comma separated
    #[arg(short, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    x: Vec<f64>,

    /// Second vector, comma separated
    #[arg(short, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    y: Vec<f64>,
}

#[derive(Args)]
struct EvalArgs {
    /// Kernel file
    #[arg(short, long)]
    kernel: PathBuf,

    #[command(flatten)]
    pair: PairArgs,
}

#[derive(Args)]
struct EvalHyperArgs {
    /// Kernel family
    #[arg(long)]
    family: CliFamily,

    /// Log-space hyperparameters, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    hyper: Vec<f64>,

    #[command(flatten)]
    pair: PairArgs,
}

#[derive(Args)]
struct InfoArgs {
    /// Kernel file
    #[arg(short, long)]
    kernel: PathBuf,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum CliFamily {
    /// Squared exponential, hyperparameters: log bandwidth
    #[value(name = "unit-sq-exp")]
    UnitSqExp,
    /// Squared exponential with scale, hyperparameters: log bandwidth, log scale
    #[value(name = "sq-exp")]
    ScaledSqExp,
}

impl From<CliFamily> for HyperFamily {
    fn from(cli_family: CliFamily) -> Self {
        match cli_family {
            CliFamily::UnitSqExp => HyperFamily::UnitSqExp,
            CliFamily::ScaledSqExp => HyperFamily::ScaledSqExp,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let result = match cli.command {
        Commands::Init(args) => init_command(args),
        Commands::Eval(args) => eval_command(args),
        Commands::EvalHyper(args) => eval_hyper_command(args),
        Commands::Info(args) => info_command(args),
    };

    if let Err(e) = result {
        error!("Error: {e}");
        process::exit(1);
    }
}

fn init_command(args: InitArgs) -> Result<()> {
    let family = HyperFamily::from(args.family);
    info!("Creating {} kernel with hyper {:?}", family.name(), args.hyper);

    let mut config = KernelConfig::from_family(family, &args.hyper)?;
    if let Some(log_noise) = args.log_noise {
        info!("Adding observation noise: log_noise={log_noise}");
        config = KernelConfig::Sum {
            kernels: vec![config, KernelConfig::FixedNoise { log_noise }],
        };
        config.validate()?;
    }

    let mut kernel_file = KernelFile::new(config);
    if let Some(description) = args.description {
        kernel_file = kernel_file.with_description(description);
    }
    kernel_file.save_to_file(&args.output)?;
    info!("Kernel saved to: {:?}", args.output);

    println!("{}", kernel_file.kernel);
    Ok(())
}

fn eval_command(args: EvalArgs) -> Result<()> {
    info!("Loading kernel from: {:?}", args.kernel);
    let kernel_file = KernelFile::load_from_file(&args.kernel)?;
    let kernel = kernel_file.kernel.build()?;
    debug!("Kernel: {}", kernel_file.kernel);

    let (x, y) = checked_pair(&args.pair)?;
    let log_value = kernel.log_eval(x, y);
    print_values(log_value);
    Ok(())
}

fn eval_hyper_command(args: EvalHyperArgs) -> Result<()> {
    let family = HyperFamily::from(args.family);
    let kernel = family.kernel();
    let (x, y) = checked_pair(&args.pair)?;

    check_num_hyper(&*kernel, x.len(), &args.hyper)?;
    info!("Evaluating {} with hyper {:?}", family.name(), args.hyper);
    debug!("Linear-space hyperparameters: {:?}", hyper::from_log(&args.hyper));

    let log_value = kernel.log_eval_hyper(x, y, &args.hyper);
    print_values(log_value);
    Ok(())
}

fn info_command(args: InfoArgs) -> Result<()> {
    info!("Loading kernel from: {:?}", args.kernel);
    let kernel_file = KernelFile::load_from_file(&args.kernel)?;
    kernel_file.print_summary();
    check_buildable(&kernel_file.kernel);
    Ok(())
}

/// Warn about a stored configuration that would fail to build
fn check_buildable(config: &KernelConfig) -> bool {
    match config.validate() {
        Ok(()) => true,
        Err(e) => {
            warn!("Kernel cannot be built: {e}");
            false
        }
    }
}

/// Reject vectors of different lengths before they reach a kernel
fn checked_pair(pair: &PairArgs) -> Result<(&[f64], &[f64])> {
    if pair.x.len() != pair.y.len() {
        return Err(KernelError::DimensionMismatch {
            expected: pair.x.len(),
            actual: pair.y.len(),
        });
    }
    Ok((pair.x.as_slice(), pair.y.as_slice()))
}

fn print_values(log_value: f64) {
    println!("value: {}", log_value.exp());
    println!("log_value: {log_value}");
}
