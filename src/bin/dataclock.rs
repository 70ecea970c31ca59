use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use time::{PrimitiveDateTime, macros::format_description};

#[derive(Parser, Debug)]
#[command(name = "dataclock", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a chart and write its mesh buffers and attributes as JSON.
    Mesh(MeshArgs),
    /// Build a chart and rasterize it to a PNG.
    Preview(PreviewArgs),
    /// Aggregate hourly samples into calendar periods.
    Aggregate(AggregateArgs),
}

#[derive(Parser, Debug)]
struct MeshArgs {
    /// Input chart document (`{ "values": [...], "options": {...} }`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output JSON path. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Input chart document.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Width and height of the square output, in pixels.
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Start of the revealed slice, as a fraction of a revolution.
    #[arg(long, default_value_t = 0.0)]
    mask_start: f32,

    /// End of the revealed slice, as a fraction of a revolution.
    #[arg(long, default_value_t = 1.0)]
    mask_end: f32,
}

#[derive(Parser, Debug)]
struct AggregateArgs {
    /// JSON array of hourly samples.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long, value_enum)]
    period: PeriodChoice,

    #[arg(long, value_enum, default_value_t = MethodChoice::Average)]
    method: MethodChoice,

    /// Timestamp of the first sample, `YYYY-MM-DDTHH:MM:SS`.
    #[arg(long, value_parser = parse_start)]
    start: PrimitiveDateTime,

    /// Print buckets with their start/end instead of bare values.
    #[arg(long)]
    bounds: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PeriodChoice {
    Day,
    Week,
    Month,
    Year,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MethodChoice {
    Sum,
    Average,
    Max,
    Min,
}

impl From<PeriodChoice> for dataclock::AggregationPeriod {
    fn from(choice: PeriodChoice) -> Self {
        match choice {
            PeriodChoice::Day => Self::Day,
            PeriodChoice::Week => Self::Week,
            PeriodChoice::Month => Self::Month,
            PeriodChoice::Year => Self::Year,
        }
    }
}

impl From<MethodChoice> for dataclock::Aggregation {
    fn from(choice: MethodChoice) -> Self {
        match choice {
            MethodChoice::Sum => Self::Sum,
            MethodChoice::Average => Self::Average,
            MethodChoice::Max => Self::Max,
            MethodChoice::Min => Self::Min,
        }
    }
}

#[derive(serde::Deserialize, Debug)]
struct ChartDoc {
    values: Vec<f64>,
    #[serde(default)]
    options: dataclock::ChartOptions,
}

#[derive(serde::Serialize)]
struct MeshOut<'a> {
    label: Option<&'a str>,
    variant: Option<dataclock::ShadingVariant>,
    #[serde(flatten)]
    geometry: &'a dataclock::ChartGeometry,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Mesh(args) => cmd_mesh(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Aggregate(args) => cmd_aggregate(args),
    }
}

fn parse_start(s: &str) -> Result<PrimitiveDateTime, String> {
    let fmt = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    PrimitiveDateTime::parse(s, fmt).map_err(|e| e.to_string())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))
}

/// Build the chart. Texture keys resolve relative to the document.
fn load_chart(
    path: &Path,
) -> anyhow::Result<(dataclock::RadialChart, dataclock::FileTextureSource)> {
    let doc: ChartDoc = read_json(path, "chart document")?;
    let chart = dataclock::RadialChart::new(&doc.values, doc.options)?;

    let assets_root = path.parent().unwrap_or_else(|| Path::new("."));
    Ok((chart, dataclock::FileTextureSource::new(assets_root)))
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_mesh(args: MeshArgs) -> anyhow::Result<()> {
    let (mut chart, source) = load_chart(&args.in_path)?;
    // Geometry is still useful without its texture.
    if let Err(err) = chart.load_texture(&source) {
        tracing::warn!(error = %err, "texture failed to load; writing geometry only");
    }

    let out = MeshOut {
        label: chart.label(),
        variant: chart.mesh().map(|m| m.variant),
        geometry: chart.geometry(),
    };

    match args.out {
        Some(path) => {
            ensure_parent_dir(&path)?;
            let f = File::create(&path)
                .with_context(|| format!("create mesh output '{}'", path.display()))?;
            serde_json::to_writer_pretty(f, &out).context("write mesh JSON")?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&out)?),
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let (mut chart, source) = load_chart(&args.in_path)?;
    chart
        .load_texture(&source)
        .with_context(|| format!("load texture for '{}'", args.in_path.display()))?;
    chart.set_radial_mask(args.mask_start, args.mask_end);

    let bounds = chart.geometry().bounds;
    let extent = [bounds.x0, bounds.x1, bounds.y0, bounds.y1]
        .into_iter()
        .map(f64::abs)
        .fold(0.0, f64::max);
    let scale = if extent > 0.0 {
        f64::from(args.size) * 0.5 / extent
    } else {
        1.0
    };

    let opts = dataclock::PreviewOpts {
        width: args.size,
        height: args.size,
        scale,
        ..dataclock::PreviewOpts::default()
    };
    let frame = dataclock::rasterize(&chart, &opts)?;

    ensure_parent_dir(&args.out)?;
    frame
        .to_image()?
        .save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_aggregate(args: AggregateArgs) -> anyhow::Result<()> {
    let values: Vec<f64> = read_json(&args.in_path, "values")?;
    let config = dataclock::AggregationConfig {
        period: args.period.into(),
        aggregation: args.method.into(),
        start: args.start,
    };

    let json = if args.bounds {
        let buckets = dataclock::aggregate_time_series_with_bounds(&values, config)?;
        serde_json::to_string_pretty(&buckets)?
    } else {
        let out = dataclock::aggregate_time_series(&values, config)?;
        serde_json::to_string(&out)?
    };
    println!("{json}");
    Ok(())
}
