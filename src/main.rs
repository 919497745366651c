//! Fractline — draws a recursively subdivided curve as an SVG stroke.
//!
//! Usage:
//! ```text
//! fractline                                  # reference pattern to stdout
//! fractline --depth 4 --side right -o out.svg
//! fractline --rule left-triangle --start 0,50 --end 100,50 --fit
//! ```
//!
//! Logging goes to stderr. Set `RUST_LOG` (e.g. `RUST_LOG=fractline=debug`)
//! to see expansion details.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use fractline::fractal::rules::{HalfSplit, LeftSquare, LeftTriangle, UpHalfAcrossAndDown, Zigzag};
use fractline::fractal::{Depth, Expand, Rule};
use fractline::geometry::{LineSegment, Polyline, Segment, Side, SidedSegment};
use fractline::math::Point2;
use fractline::render::{DocumentParams, LineCap, LineJoin, StrokeStyle, SvgDocument, ViewBox};
use tracing::info;

/// Generate a fractal curve from one seed segment and write it as SVG.
#[derive(Parser)]
#[command(name = "fractline")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Subdivision rule
    #[arg(short, long, value_enum, default_value_t = RuleKind::UpHalfAcrossAndDown)]
    rule: RuleKind,

    /// Seed start point as X,Y
    #[arg(long, value_parser = parse_point, default_value = "25,75")]
    start: Point2,

    /// Seed end point as X,Y
    #[arg(long, value_parser = parse_point, default_value = "75,75")]
    end: Point2,

    /// Side owned by the seed (sided rules only)
    #[arg(long, value_enum, default_value_t = SideArg::Left)]
    side: SideArg,

    /// Subdivision depth
    #[arg(short, long, default_value_t = 6, allow_negative_numbers = true)]
    depth: i64,

    /// Output file; prints to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stroke color
    #[arg(long, default_value = "#000000")]
    stroke: String,

    /// Stroke width in user units
    #[arg(long, default_value_t = 0.25)]
    stroke_width: f64,

    /// Stroke line cap
    #[arg(long, value_enum, default_value_t = CapArg::Round)]
    line_cap: CapArg,

    /// Stroke line join
    #[arg(long, value_enum, default_value_t = JoinArg::Round)]
    line_join: JoinArg,

    /// Canvas edge length in millimeters
    #[arg(long, default_value_t = 203.2)]
    size_mm: f64,

    /// Fit the view box to the curve instead of 0,0,100,100
    #[arg(long)]
    fit: bool,

    /// Padding around the curve when fitting, in user units
    #[arg(long, default_value_t = 2.0, requires = "fit")]
    margin: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleKind {
    UpHalfAcrossAndDown,
    LeftTriangle,
    LeftSquare,
    Zigzag,
    HalfSplit,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => Side::Left,
            SideArg::Right => Side::Right,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum CapArg {
    Butt,
    Round,
    Square,
}

impl From<CapArg> for LineCap {
    fn from(cap: CapArg) -> Self {
        match cap {
            CapArg::Butt => LineCap::Butt,
            CapArg::Round => LineCap::Round,
            CapArg::Square => LineCap::Square,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum JoinArg {
    Miter,
    Round,
    Bevel,
}

impl From<JoinArg> for LineJoin {
    fn from(join: JoinArg) -> Self {
        match join {
            JoinArg::Miter => LineJoin::Miter,
            JoinArg::Round => LineJoin::Round,
            JoinArg::Bevel => LineJoin::Bevel,
        }
    }
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for fractline.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("fractline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let depth = Depth::try_from(cli.depth)?;

    let polyline = match cli.rule {
        RuleKind::UpHalfAcrossAndDown => generate(
            SidedSegment::new(cli.start, cli.end, cli.side.into()),
            UpHalfAcrossAndDown,
            depth,
        ),
        RuleKind::LeftTriangle => generate(line(&cli), LeftTriangle, depth),
        RuleKind::LeftSquare => generate(line(&cli), LeftSquare, depth),
        RuleKind::Zigzag => generate(line(&cli), Zigzag, depth),
        RuleKind::HalfSplit => generate(line(&cli), HalfSplit, depth),
    }
    .context("failed to expand fractal")?;
    info!(points = polyline.len(), "generated curve");

    let params = document_params(&cli, &polyline)?;
    let doc = SvgDocument::new(&polyline, params).context("failed to build svg")?;

    match &cli.output {
        Some(path) => doc
            .write_to(path)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{doc}"),
    }
    Ok(())
}

fn line(cli: &Cli) -> LineSegment {
    LineSegment::new(cli.start, cli.end)
}

fn generate<S, R>(seed: S, rule: R, depth: Depth) -> fractline::Result<Polyline>
where
    S: Segment,
    R: Rule<S>,
{
    Expand::new(seed, rule, depth).polyline()
}

fn document_params(cli: &Cli, polyline: &Polyline) -> Result<DocumentParams> {
    let stroke = StrokeStyle::new(cli.stroke_width)?
        .with_color(cli.stroke.as_str())?
        .with_line_cap(cli.line_cap.into())
        .with_line_join(cli.line_join.into());

    let view_box = match polyline.bounds() {
        Some(bounds) if cli.fit => ViewBox::fit(bounds, cli.margin)?,
        _ => ViewBox::default(),
    };

    Ok(DocumentParams {
        width_mm: cli.size_mm,
        height_mm: cli.size_mm,
        view_box,
        stroke,
        ..DocumentParams::default()
    })
}

fn parse_point(s: &str) -> std::result::Result<Point2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate {v:?}: {e}"))
    };
    Ok(Point2::new(coord(x)?, coord(y)?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_point_accepts_pairs() {
        assert_eq!(parse_point("25,75").unwrap(), Point2::new(25.0, 75.0));
        assert_eq!(parse_point(" -1.5 , 2 ").unwrap(), Point2::new(-1.5, 2.0));
    }

    #[test]
    fn parse_point_rejects_garbage() {
        assert!(parse_point("25").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn defaults_reproduce_reference_pattern() {
        let cli = Cli::parse_from(["fractline"]);
        assert_eq!(cli.depth, 6);
        assert_eq!(cli.start, Point2::new(25.0, 75.0));
        assert_eq!(cli.end, Point2::new(75.0, 75.0));
        assert!(matches!(cli.rule, RuleKind::UpHalfAcrossAndDown));
        assert!(matches!(cli.side, SideArg::Left));
    }

    #[test]
    fn negative_depth_parses_but_is_rejected() {
        let cli = Cli::parse_from(["fractline", "--depth", "-2"]);
        assert!(Depth::try_from(cli.depth).is_err());
    }

    #[test]
    fn fit_sets_view_box_from_curve() {
        let cli = Cli::parse_from(["fractline", "--fit", "--margin", "1"]);
        let polyline = Polyline::from_points(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 4.0)]);
        let params = document_params(&cli, &polyline).unwrap();
        assert!((params.view_box.width - 12.0).abs() < 1e-12);
    }
}
