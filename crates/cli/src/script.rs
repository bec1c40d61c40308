//! Click scripts: a JSON array of steps replayed into a drawing session.
//!
//! ```json
//! [{"click": ["0", "0"]}, {"side": 2, "t": "1/2"}, {"click": ["0", "0"]},
//!  {"abandon": true}, {"clear": true}]
//! ```
//!
//! `click` points are classified against the polygon like mouse clicks;
//! `side` steps name a side position directly.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use genus_loops::affine::Point;
use genus_loops::position::{CanvasPosition, EdgeParam, SidePosition};
use genus_loops::rational::parse_rational;
use genus_loops::session::{DrawingSession, SessionEvent};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Step {
    Click { click: [String; 2] },
    Side { side: usize, t: String },
    Abandon { abandon: bool },
    Clear { clear: bool },
}

pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    serde_json::from_str(text).context("parsing click script")
}

pub fn read_script(path: &Path) -> Result<Vec<Step>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_script(&text)
}

/// Replay `steps`; returns one event per click or side step.
///
/// Malformed steps (bad rationals, unknown sides, parameters outside the
/// edge window) abort the run. Rejected clicks do not; they come back as
/// `SessionEvent::Warned`.
pub fn run_script(session: &mut DrawingSession, steps: &[Step]) -> Result<Vec<SessionEvent>> {
    let mut events = Vec::new();
    for (i, step) in steps.iter().enumerate() {
        match step {
            Step::Click { click: [x, y] } => {
                let x = parse_rational(x).with_context(|| format!("step {i}: x coordinate"))?;
                let y = parse_rational(y).with_context(|| format!("step {i}: y coordinate"))?;
                events.push(session.click(&Point::new(x, y)));
            }
            Step::Side { side, t } => {
                let side = session
                    .polygon()
                    .try_side(*side)
                    .with_context(|| format!("step {i}"))?;
                let t = parse_rational(t).with_context(|| format!("step {i}: parameter"))?;
                let t = EdgeParam::new(t).with_context(|| format!("step {i}"))?;
                events.push(session.release(CanvasPosition::OnSide(SidePosition::new(side, t))));
            }
            Step::Abandon { abandon } => {
                if *abandon {
                    session.abandon();
                }
            }
            Step::Clear { clear } => {
                if *clear {
                    session.clear();
                }
            }
        }
    }
    Ok(events)
}
