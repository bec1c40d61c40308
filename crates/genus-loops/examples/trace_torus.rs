//! Trace the two generators of the torus and a loop on the genus-2 surface.
//!
//! Purpose
//! - Show the click-level API end to end: classify points of Q², feed them
//!   to a `DrawingSession`, read back committed loops and their crossing
//!   words.
//!
//! Run: `cargo run -p genus-loops --example trace_torus`

use genus_loops::prelude::*;

fn side_point(poly: &FundamentalPolygon, side: usize, t: Rational) -> Point {
    let sp = SidePosition::new(SideId(side), EdgeParam::clamped(t));
    poly.point_at(&sp)
}

fn main() {
    let mut session = DrawingSession::new(1).expect("genus 1");
    let poly = session.polygon().clone();
    println!("torus boundary word: {}", poly.boundary_word());

    let start = Point::origin();
    for side in [0usize, 2] {
        let clicks = [
            start.clone(),
            side_point(&poly, side, rat(1, 2)),
            Point::new(rat(1, 10), rat(1, 10)),
            start.clone(),
        ];
        for p in &clicks {
            let event = session.click(p);
            println!("click {p} -> {event:?}");
        }
    }
    for (i, l) in session.loops().iter().enumerate() {
        println!("loop {i}: {} segments, word `{}`", l.len(), l.word());
    }

    session.set_genus(2).expect("genus 2");
    let poly = session.polygon().clone();
    let clicks = [
        start.clone(),
        side_point(&poly, 5, rat(1, 3)),
        side_point(&poly, 0, rat(2, 3)),
        start,
    ];
    for p in &clicks {
        session.click(p);
    }
    for l in session.loops() {
        for seg in l {
            println!("  {} -> {}", seg.from, seg.to);
        }
        println!("genus-2 loop word: `{}`", l.word());
    }
}
