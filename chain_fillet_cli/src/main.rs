use std::{
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use chain_fillet::{
    fillet_all, try_fillet_corner, BlockKind, Chain, Corner, FilletError, FilletReport, Float,
};
use clap::{Parser, ValueEnum};
use num_traits::AsPrimitive;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file holding one chain or a list of chains. Reads stdin when
    /// missing or `-`.
    #[arg()]
    input: Option<PathBuf>,

    /// Round the outlines of a masonry block instead of reading a file.
    #[arg(short, long, conflicts_with = "input")]
    block: Option<BlockKind>,

    /// Fillet radius, in drawing units.
    #[arg(short, long)]
    radius: f64,

    /// Only try the corner at this vertex index.
    #[arg(short, long)]
    index: Option<usize>,

    /// Precision of calculations (Single/Double).
    #[arg(short, long, default_value_t = Precision::Double)]
    precision: Precision,

    /// Output file path. Writes to stdout when missing.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug)]
enum Precision {
    Single,
    Double,
}

impl ValueEnum for Precision {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Single, Self::Double]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(match self {
            Self::Single => clap::builder::PossibleValue::new("Single")
                .alias("single")
                .alias("f32"),
            Self::Double => clap::builder::PossibleValue::new("Double")
                .alias("double")
                .alias("f64"),
        })
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("Single"),
            Self::Double => f.write_str("Double"),
        }
    }
}

/// Either a single chain or a list of them, written back in the same shape.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Document<T> {
    One(Chain<T>),
    Many(Vec<Chain<T>>),
}

impl<T> Document<T> {
    fn chains_mut(&mut self) -> &mut [Chain<T>] {
        match self {
            Document::One(chain) => std::slice::from_mut(chain),
            Document::Many(chains) => chains,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("Invalid chain document: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Fillet(#[from] FilletError),
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let result = match args.precision {
        Precision::Single => with_precision::<f32>(&args),
        Precision::Double => with_precision::<f64>(&args),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn with_precision<S>(args: &Args) -> Result<(), CliError>
where
    S: Float + Serialize + DeserializeOwned,
    f64: AsPrimitive<S>,
{
    let mut document = match args.block {
        Some(kind) => {
            log::info!("Rounding outlines of block {kind}");
            Document::Many(kind.outlines::<S>())
        }
        None => read_document::<S>(args.input.as_ref())?,
    };

    let radius: S = args.radius.as_();
    let mut report = FilletReport::default();
    for chain in document.chains_mut() {
        match args.index {
            Some(index) => match try_fillet_corner(chain, index, radius)? {
                Corner::Rounded { .. } => report.rounded += 1,
                Corner::Skipped(reason) => {
                    log::warn!("Corner {index} left sharp: {reason}");
                    report.skipped += 1;
                }
            },
            None => {
                let chain_report = fillet_all(chain, radius)?;
                report.rounded += chain_report.rounded;
                report.skipped += chain_report.skipped;
            }
        }
    }
    log::info!("{report}");

    write_document(&document, args.output.as_ref(), args.pretty)
}

fn read_document<S: DeserializeOwned>(path: Option<&PathBuf>) -> Result<Document<S>, CliError> {
    let reader: Box<dyn Read> = match path {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(File::open(path)?)),
        _ => Box::new(io::stdin().lock()),
    };
    Ok(serde_json::from_reader(reader)?)
}

fn write_document<S: Serialize>(
    document: &Document<S>,
    path: Option<&PathBuf>,
    pretty: bool,
) -> Result<(), CliError> {
    let mut writer: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut writer, document)?;
    } else {
        serde_json::to_writer(&mut writer, document)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
