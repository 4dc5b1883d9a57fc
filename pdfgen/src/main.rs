use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use invsample_rs::{
    Interpolant, Precision, SampleFloat, Sampler, SamplerConfig, Seeding, UniformRng,
    UniformSource, consts::N_ITER,
};
use tracing::{Level, info, metadata::LevelFilter};
use tracing_subscriber::FmtSubscriber;

mod output;
mod shape;

use shape::Shape;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PrecisionArg {
    Single,
    Double,
}

impl From<PrecisionArg> for Precision {
    fn from(p: PrecisionArg) -> Self {
        match p {
            PrecisionArg::Single => Precision::Single,
            PrecisionArg::Double => Precision::Double,
        }
    }
}

/// Which deposit modes to run
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Every member of each group
    All,
    /// First member of each group only
    First,
    Both,
}

impl Mode {
    fn deposit_flags(self) -> &'static [bool] {
        match self {
            Mode::All => &[true],
            Mode::First => &[false],
            Mode::Both => &[true, false],
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of histogram bins (also the interpolant resolution)
    #[arg(short, long, default_value_t = 100)]
    bins: usize,

    /// Draws summed and normalized per recorded sample
    #[arg(short, long, default_value_t = 1)]
    group_size: usize,

    /// Samples to deposit per run
    #[arg(short, long, default_value_t = N_ITER)]
    iterations: u64,

    #[arg(short, long, value_enum, default_value_t = PrecisionArg::Double)]
    precision: PrecisionArg,

    /// Target inverse CDF
    #[arg(short, long, value_enum, default_value_t = Shape::Symmetric)]
    shape: Shape,

    /// Seed for reproducible runs (fresh entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = Mode::Both)]
    mode: Mode,

    /// Directory the pdf_<mode>.txt files are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    #[arg(short, long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn run<F: SampleFloat>(args: &Args) -> Result<()>
where
    UniformRng: UniformSource<F>,
{
    let precision = Precision::from(args.precision);
    let seeding = args.seed.map_or(Seeding::Entropy, Seeding::Fixed);
    let shape = args.shape;

    for &deposit_all in args.mode.deposit_flags() {
        let inverse_cdf = Interpolant::<F>::from_fn(args.bins, |x| shape.eval(x))
            .with_context(|| format!("building {:?} inverse CDF", shape))?;
        let config = SamplerConfig::default()
            .with_group_size(args.group_size)
            .with_deposit_all(deposit_all)
            .with_target_count(args.iterations);
        let rng = UniformRng::for_precision(precision, seeding);
        let mut sampler = Sampler::new(inverse_cdf, rng, config)?;

        let pdf = sampler.generate();
        let path = output::pdf_path(&args.output_dir, deposit_all);
        output::write_pdf_file(&path, pdf)?;
        info!(path = %path.display(), count = pdf.count(), "wrote pdf");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::from(args.log_level))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match Precision::from(args.precision) {
        Precision::Single => run::<f32>(&args),
        Precision::Double => run::<f64>(&args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library() {
        let args = Args::parse_from(["pdfgen"]);
        assert_eq!(args.iterations, N_ITER);
        assert_eq!(args.group_size, 1);
        assert_eq!(args.mode, Mode::Both);
        assert_eq!(args.precision, PrecisionArg::Double);
    }

    #[test]
    fn run_writes_both_modes() {
        let dir = std::env::temp_dir().join(format!("pdfgen-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let args = Args::parse_from([
            "pdfgen",
            "--bins",
            "16",
            "--group-size",
            "3",
            "--iterations",
            "3000",
            "--seed",
            "1",
            "--precision",
            "single",
            "--output-dir",
            dir.to_str().unwrap(),
        ]);
        run::<f32>(&args).unwrap();
        for deposit_all in [true, false] {
            let text = std::fs::read_to_string(output::pdf_path(&dir, deposit_all)).unwrap();
            assert_eq!(text.lines().count(), 16);
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
