use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use genus_loops::affine::{Point, Segment};
use genus_loops::cfg::DEFAULT_GENUS;
use genus_loops::polygon::FundamentalPolygon;
use genus_loops::position::CanvasPosition;
use genus_loops::rational::parse_rational;
use genus_loops::sample::{draw_walk, ReplayToken, WalkCfg};
use genus_loops::session::{DrawingSession, SessionEvent};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod report;
mod script;

use report::{IntersectionJson, LoopJson, PolygonJson, TraceJson};

#[derive(Parser)]
#[command(name = "genus-loops-cli")]
#[command(about = "Trace loops on fundamental polygons of genus-g surfaces")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the side table, vertices and boundary word
    Polygon {
        #[arg(long, default_value_t = DEFAULT_GENUS)]
        genus: usize,
    },
    /// Replay a JSON click script and print the committed loops
    Trace {
        #[arg(long, default_value_t = DEFAULT_GENUS)]
        genus: usize,
        #[arg(long)]
        script: PathBuf,
        /// Write the loops here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Intersect two segments given as X0 Y0 X1 Y1 (exact rationals)
    Intersect {
        #[arg(long, num_args = 4, value_names = ["X0", "Y0", "X1", "Y1"], allow_hyphen_values = true)]
        a: Vec<String>,
        #[arg(long, num_args = 4, value_names = ["X0", "Y0", "X1", "Y1"], allow_hyphen_values = true)]
        b: Vec<String>,
        /// Keep only a point lying on both segments
        #[arg(long)]
        bounded: bool,
        /// Like --bounded, and resolve overlaps of colinear segments
        #[arg(long)]
        clip: bool,
    },
    /// Trace a replayable random walk, closed at its start
    Sample {
        #[arg(long, default_value_t = DEFAULT_GENUS)]
        genus: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = WalkCfg::default().steps)]
        steps: usize,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Polygon { genus } => polygon(genus),
        Action::Trace { genus, script, out } => trace(genus, &script, out.as_deref()),
        Action::Intersect { a, b, bounded, clip } => intersect(&a, &b, bounded, clip),
        Action::Sample {
            genus,
            seed,
            index,
            steps,
        } => sample(genus, seed, index, steps),
        Action::Report => report(),
    }
}

fn polygon(genus: usize) -> Result<()> {
    let poly = FundamentalPolygon::new(genus).context("building polygon")?;
    println!("{}", serde_json::to_string_pretty(&PolygonJson::new(&poly))?);
    Ok(())
}

fn trace_json(session: &DrawingSession, events: &[SessionEvent]) -> TraceJson {
    let poly = session.polygon();
    TraceJson {
        genus: poly.genus(),
        clicks: events.len(),
        warnings: events
            .iter()
            .filter(|e| matches!(e, SessionEvent::Warned(_)))
            .count(),
        loops: session
            .loops()
            .iter()
            .map(|l| LoopJson::new(poly, l))
            .collect(),
    }
}

fn trace(genus: usize, script_path: &Path, out: Option<&Path>) -> Result<()> {
    tracing::info!(genus, script = %script_path.display(), "trace");
    let steps = script::read_script(script_path)?;
    let mut session = DrawingSession::new(genus).context("building polygon")?;
    let events = script::run_script(&mut session, &steps)?;
    let doc = trace_json(&session, &events);
    tracing::info!(loops = doc.loops.len(), warnings = doc.warnings, "trace done");

    let Some(out) = out else {
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = provenance::Payload::new(json!({
        "script": script_path.to_string_lossy(),
        "steps": steps.len(),
    }))
    .with_genus(genus);
    let prov = provenance::write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "wrote loops");
    Ok(())
}

fn parse_segment(coords: &[String]) -> Result<Segment> {
    let c = coords
        .iter()
        .map(|s| parse_rational(s).with_context(|| format!("coordinate `{s}`")))
        .collect::<Result<Vec<_>>>()?;
    let [x0, y0, x1, y1]: [_; 4] = c
        .try_into()
        .map_err(|v: Vec<_>| anyhow::anyhow!("expected 4 coordinates, got {}", v.len()))?;
    Ok(Segment::new(Point::new(x0, y0), Point::new(x1, y1))?)
}

fn intersect(a: &[String], b: &[String], bounded: bool, clip: bool) -> Result<()> {
    let s = parse_segment(a).context("segment --a")?;
    let t = parse_segment(b).context("segment --b")?;
    let x = if clip {
        s.clipped_intersection(&t)
    } else if bounded {
        s.bounded_intersection(&t)
    } else {
        s.intersection(&t)
    };
    tracing::info!(a = %s, b = %t, bounded, clip, "intersect");
    println!(
        "{}",
        serde_json::to_string_pretty(&IntersectionJson::from(&x))?
    );
    Ok(())
}

fn sample(genus: usize, seed: u64, index: u64, steps: usize) -> Result<()> {
    let mut session = DrawingSession::new(genus).context("building polygon")?;
    let cfg = WalkCfg {
        steps,
        ..WalkCfg::default()
    };
    let walk = draw_walk(session.polygon(), cfg, ReplayToken::new(seed, index));
    let mut events = Vec::with_capacity(walk.len() + 1);
    let start = walk.first().cloned();
    for pos in walk.into_iter().chain(start) {
        events.push(session.release(CanvasPosition::from(pos)));
    }
    tracing::info!(genus, seed, index, steps, "sample");
    println!(
        "{}",
        serde_json::to_string_pretty(&trace_json(&session, &events))?
    );
    Ok(())
}

fn report() -> Result<()> {
    let doc = provenance::document(&provenance::Payload::new(json!({})));
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
