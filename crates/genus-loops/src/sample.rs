//! Random walks on the fundamental polygon (replayable).
//!
//! Purpose
//! - Produce click sequences for benches, tests and the CLI without a UI.
//!   Interior points are positive rational combinations of the polygon
//!   vertices (hence strictly inside); edge points use parameters `k/100`.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG, so a
//!   single walk can be regenerated from its token alone.
//!
//! Walks are raw input: they may contain steps the loop builder rejects
//! (e.g. the same edge twice in a row), like real clicks do.

use num_bigint::BigInt;
use num_traits::Zero;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::affine::Point;
use crate::cfg::{PARAM_DEN, PARAM_MAX_NUM, PARAM_MIN_NUM};
use crate::polygon::{FundamentalPolygon, SideId};
use crate::position::{EdgeParam, ManifoldPosition, SidePosition};
use crate::rational::{rat, Rational};

/// Random-walk configuration.
#[derive(Clone, Copy, Debug)]
pub struct WalkCfg {
    /// Positions drawn after the interior start point.
    pub steps: usize,
    /// Probability that a step lands on a side rather than in the interior.
    pub edge_prob: f64,
    /// Barycentric weights are drawn from `1..=max_weight`. Clamped to >= 1.
    pub max_weight: u32,
}

impl Default for WalkCfg {
    fn default() -> Self {
        Self {
            steps: 8,
            edge_prob: 0.4,
            max_weight: 16,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A strictly interior point: positive weighted mean of all vertices.
pub fn draw_interior_point<R: Rng>(
    polygon: &FundamentalPolygon,
    max_weight: u32,
    rng: &mut R,
) -> Point {
    let hi = max_weight.max(1);
    let mut total = 0u64;
    let (mut x, mut y) = (Rational::zero(), Rational::zero());
    for v in polygon.vertices() {
        let w = rng.gen_range(1..=hi);
        total += u64::from(w);
        let w = Rational::from_integer(BigInt::from(w));
        x += &v.x * &w;
        y += &v.y * &w;
    }
    let total = Rational::from_integer(BigInt::from(total));
    Point::new(x / &total, y / total)
}

/// A position on a uniformly chosen side with parameter `k/100`.
pub fn draw_side_position<R: Rng>(polygon: &FundamentalPolygon, rng: &mut R) -> SidePosition {
    let side = SideId(rng.gen_range(0..polygon.side_count()));
    let k = rng.gen_range(PARAM_MIN_NUM..=PARAM_MAX_NUM);
    // k/100 is inside the window by construction.
    SidePosition::new(side, EdgeParam::clamped(rat(k, PARAM_DEN)))
}

/// Interior start followed by `cfg.steps` random positions.
pub fn draw_walk(
    polygon: &FundamentalPolygon,
    cfg: WalkCfg,
    tok: ReplayToken,
) -> Vec<ManifoldPosition> {
    let mut rng = tok.to_std_rng();
    let edge_prob = cfg.edge_prob.clamp(0.0, 1.0);
    let mut walk = Vec::with_capacity(cfg.steps + 1);
    walk.push(ManifoldPosition::Interior(draw_interior_point(
        polygon,
        cfg.max_weight,
        &mut rng,
    )));
    for _ in 0..cfg.steps {
        let pos = if rng.gen_bool(edge_prob) {
            ManifoldPosition::OnEdge(draw_side_position(polygon, &mut rng))
        } else {
            ManifoldPosition::Interior(draw_interior_point(polygon, cfg.max_weight, &mut rng))
        };
        walk.push(pos);
    }
    walk
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::CanvasPosition;

    #[test]
    fn walks_replay_from_their_token() {
        let poly = FundamentalPolygon::new(2).unwrap();
        let cfg = WalkCfg::default();
        let a = draw_walk(&poly, cfg, ReplayToken::new(7, 3));
        let b = draw_walk(&poly, cfg, ReplayToken::new(7, 3));
        let c = draw_walk(&poly, cfg, ReplayToken::new(7, 4));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), cfg.steps + 1);
        assert!(a[0].is_interior());
    }

    #[test]
    fn sampled_points_classify_as_drawn() {
        let poly = FundamentalPolygon::new(1).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let p = draw_interior_point(&poly, 9, &mut rng);
            assert_eq!(poly.classify(&p), CanvasPosition::Interior(p.clone()));
            let sp = draw_side_position(&poly, &mut rng);
            assert_eq!(poly.classify(&poly.point_at(&sp)), CanvasPosition::OnSide(sp));
        }
    }

    #[test]
    fn edge_probability_extremes() {
        let poly = FundamentalPolygon::new(1).unwrap();
        let all_edges = WalkCfg {
            steps: 20,
            edge_prob: 1.0,
            max_weight: 4,
        };
        let walk = draw_walk(&poly, all_edges, ReplayToken::new(1, 0));
        assert!(walk[1..].iter().all(|p| !p.is_interior()));
        let no_edges = WalkCfg {
            edge_prob: 0.0,
            ..all_edges
        };
        let walk = draw_walk(&poly, no_edges, ReplayToken::new(1, 0));
        assert!(walk.iter().all(ManifoldPosition::is_interior));
    }
}
