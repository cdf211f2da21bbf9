//! pdfquery - Query positioned text and rules in PDF layouts
//!
//! Reads layout dumps (JSON, as written by an external layout analyser),
//! builds a document model and prints the elements matching a query,
//! in reading order.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use memmap2::Mmap;
use pdfquery_core::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// Output type for matched elements.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Tab-separated, one element per line (default)
    #[default]
    Text,
    /// JSON array of element objects
    Json,
}

/// Element kind filter.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq)]
enum Kind {
    #[default]
    All,
    Text,
    Lines,
    Horizontal,
    Vertical,
}

/// Line defragmentation applied after sorting.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Defrag {
    #[default]
    FixedPoint,
    SinglePass,
    Disabled,
}

impl From<Defrag> for DefragMode {
    fn from(d: Defrag) -> Self {
        match d {
            Defrag::FixedPoint => DefragMode::FixedPoint,
            Defrag::SinglePass => DefragMode::SinglePass,
            Defrag::Disabled => DefragMode::Disabled,
        }
    }
}

/// A command line tool for locating text and ruling lines in PDF layouts
/// by box, reading order and substring.
#[derive(Parser, Debug)]
#[command(name = "pdfquery")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more layout dump files, or "-" for stdin
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Document options ===
    /// A comma or space separated list of page numbers to load (1-indexed)
    #[arg(long = "page-numbers")]
    page_numbers: Option<String>,

    /// The maximum number of pages to load (0 = no limit)
    #[arg(short = 'm', long, default_value = "0")]
    maxpages: usize,

    /// Row multiplier for reading-order keys (>= 1)
    #[arg(long, default_value_t = pdfquery_core::model::DEFAULT_POSITION_SCALE)]
    scale: f64,

    /// How collinear line fragments are merged
    #[arg(long, value_enum, default_value = "fixed-point")]
    defrag: Defrag,

    // === Query options ===
    /// Restrict to one kind of element
    #[arg(short = 'k', long, value_enum, default_value = "all")]
    kind: Kind,

    /// Half-open box "x1,y1,x2,y2": either corner in [x1,x2) x [y1,y2)
    #[arg(long, value_name = "BOX", conflicts_with = "within")]
    inside: Option<String>,

    /// Inclusive box "x1,y1,x2,y2": both corners inside
    #[arg(long, value_name = "BOX")]
    within: Option<String>,

    /// Grow the --within box by this margin on every side
    #[arg(long, requires = "within")]
    fuzzy: Option<f64>,

    /// Keep text elements containing this substring (case-sensitive)
    #[arg(short = 'c', long)]
    containing: Option<String>,

    /// Print only the first match of each file; fail if no file has one
    #[arg(long, action = ArgAction::SetTrue)]
    first: bool,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "text")]
    output_type: OutputType,
}

/// One matched element, as printed.
#[derive(Debug, Serialize)]
struct Row {
    file: String,
    page: usize,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    content: Content,
}

/// Parse a box given as four comma-separated numbers.
fn parse_box(s: &str) -> Result<(f64, f64, f64, f64)> {
    let parts: Vec<f64> = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("invalid box: {s}"))?;
    match parts[..] {
        [x1, y1, x2, y2] => Ok((x1, y1, x2, y2)),
        _ => bail!("box needs exactly four numbers, got {}: {s}", parts.len()),
    }
}

/// Parse 1-indexed page numbers into zero-indexed ones.
fn parse_page_numbers(s: &str) -> Option<Vec<usize>> {
    let nums: Vec<usize> = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.trim().parse::<usize>().ok())
        .map(|n| n.saturating_sub(1))
        .collect();
    (!nums.is_empty()).then_some(nums)
}

fn build_options(args: &Args) -> Result<ParseOptions> {
    let mut builder = DocumentBuilder::new()
        .maxpages(args.maxpages)
        .defrag(args.defrag.into())
        .position_scale(args.scale)?;
    if let Some(nums) = args.page_numbers.as_deref().and_then(parse_page_numbers) {
        builder = builder.page_numbers(nums);
    }
    Ok(builder.into_options())
}

/// Load a layout dump from a file or stdin.
fn read_dump(path: &PathBuf) -> Result<LayoutDump> {
    if path.as_os_str() == "-" {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        return Ok(LayoutDump::from_slice(&data)?);
    }
    let file = File::open(path)?;
    let mmap = unsafe { Mmap::map(&file) }?;
    Ok(LayoutDump::from_slice(&mmap)?)
}

/// Apply the query flags, in a fixed order: kind, box, substring.
fn select<'a>(doc: &'a Document, args: &Args) -> Result<ElementSet<'a>> {
    let mut set = doc.everything();
    set = match args.kind {
        Kind::All => set,
        Kind::Text => set.text(),
        Kind::Lines => set.lines(),
        Kind::Horizontal => set.horizontal(),
        Kind::Vertical => set.vertical(),
    };
    if let Some(spec) = &args.inside {
        let (x1, y1, x2, y2) = parse_box(spec)?;
        set = set.inside_box(x1, y1, x2, y2)?;
    }
    if let Some(spec) = &args.within {
        let (x1, y1, x2, y2) = parse_box(spec)?;
        let query = BoxQuery::new(x1, y1, x2, y2)?.with_fuzzy_border(args.fuzzy.unwrap_or(0.0));
        set = set.inside(&query, Containment::Whole);
    }
    if let Some(needle) = &args.containing {
        set = set.containing_text(needle);
    }
    if args.first {
        set = match set.first() {
            Ok(e) => std::iter::once(e).collect(),
            Err(e) if e.is_not_found() => ElementSet::default(),
            Err(e) => return Err(e.into()),
        };
    }
    Ok(set)
}

fn collect_rows(file: &str, set: &ElementSet<'_>) -> Vec<Row> {
    set.iter()
        .map(|e| Row {
            file: file.to_string(),
            page: e.owner().number(),
            x1: e.x1(),
            y1: e.y1(),
            x2: e.x2(),
            y2: e.y2(),
            content: e.content().clone(),
        })
        .collect()
}

/// Process a single layout dump.
fn process_file(path: &PathBuf, args: &Args, options: &ParseOptions) -> Result<Vec<Row>> {
    let dump = read_dump(path)?;
    let doc = parse_document(dump, Some(options.clone()))?;
    info!(file = %path.display(), pages = doc.len(), "loaded document");

    let set = select(&doc, args)?;
    debug!(matches = set.count(), "query done");
    Ok(collect_rows(&path.display().to_string(), &set))
}

fn write_rows<W: Write>(writer: &mut W, rows: &[Row], output: OutputType, multi: bool) -> Result<()> {
    match output {
        OutputType::Text => {
            for row in rows {
                if multi {
                    write!(writer, "{}\t", row.file)?;
                }
                writeln!(
                    writer,
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    row.page, row.x1, row.y1, row.x2, row.y2, row.content
                )?;
            }
        }
        OutputType::Json => {
            serde_json::to_writer_pretty(&mut *writer, rows)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();

    let options = build_options(&args)?;

    let mut rows = Vec::new();
    for path in &args.files {
        let found = process_file(path, &args, &options)
            .with_context(|| format!("Error processing {}", path.display()))?;
        rows.extend(found);
    }
    if args.first && rows.is_empty() {
        bail!("no element matched in any input");
    }

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("Failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    write_rows(&mut output, &rows, args.output_type, args.files.len() > 1)?;
    output.flush()?;

    Ok(())
}
