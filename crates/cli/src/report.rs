//! JSON views of polygons, loops and intersections.
//!
//! Rationals are written as exact strings (`"3/5"`, `"-2"`), points as
//! `["x", "y"]`, the same shape the click script reads.

use genus_loops::affine::Point;
use genus_loops::loops::Loop;
use genus_loops::polygon::FundamentalPolygon;
use genus_loops::position::ManifoldPosition;
use genus_loops::projective::SegmentIntersection;
use serde::Serialize;

pub type PointJson = [String; 2];

pub fn point_json(p: &Point) -> PointJson {
    [p.x.to_string(), p.y.to_string()]
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SideJson {
    pub side: usize,
    pub edge: usize,
    pub letter: String,
    pub partner: usize,
    pub from: PointJson,
    pub to: PointJson,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PolygonJson {
    pub genus: usize,
    pub boundary_word: String,
    pub vertices: Vec<PointJson>,
    pub sides: Vec<SideJson>,
}

impl PolygonJson {
    pub fn new(poly: &FundamentalPolygon) -> Self {
        Self {
            genus: poly.genus(),
            boundary_word: poly.boundary_word(),
            vertices: poly.vertices().iter().map(point_json).collect(),
            sides: poly
                .sides()
                .iter()
                .map(|s| SideJson {
                    side: s.id.0,
                    edge: s.edge.0,
                    letter: s.letter(),
                    partner: s.partner.0,
                    from: point_json(s.segment.p0()),
                    to: point_json(s.segment.p1()),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PositionJson {
    Interior {
        point: PointJson,
    },
    OnEdge {
        edge: usize,
        side: usize,
        t: String,
        point: PointJson,
    },
}

impl PositionJson {
    pub fn new(poly: &FundamentalPolygon, pos: &ManifoldPosition) -> Self {
        let point = point_json(&poly.position_point(pos));
        match pos {
            ManifoldPosition::Interior(_) => PositionJson::Interior { point },
            ManifoldPosition::OnEdge(sp) => PositionJson::OnEdge {
                edge: sp.edge().0,
                side: sp.side.0,
                t: sp.t.to_string(),
                point,
            },
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SegmentJson {
    pub from: PositionJson,
    pub to: PositionJson,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LoopJson {
    pub word: String,
    pub segments: Vec<SegmentJson>,
}

impl LoopJson {
    pub fn new(poly: &FundamentalPolygon, l: &Loop) -> Self {
        Self {
            word: l.word(),
            segments: l
                .iter()
                .map(|s| SegmentJson {
                    from: PositionJson::new(poly, &s.from),
                    to: PositionJson::new(poly, &s.to),
                })
                .collect(),
        }
    }
}

/// Output of `trace` and `sample`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TraceJson {
    pub genus: usize,
    pub clicks: usize,
    pub warnings: usize,
    pub loops: Vec<LoopJson>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntersectionJson {
    Empty,
    Point { point: PointJson },
    Segment { from: PointJson, to: PointJson },
}

impl From<&SegmentIntersection> for IntersectionJson {
    fn from(x: &SegmentIntersection) -> Self {
        match x {
            SegmentIntersection::Empty => IntersectionJson::Empty,
            SegmentIntersection::Point(p) => IntersectionJson::Point {
                point: point_json(p),
            },
            SegmentIntersection::Segment(s) => IntersectionJson::Segment {
                from: point_json(s.p0()),
                to: point_json(s.p1()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genus_loops::affine::Segment;
    use genus_loops::rational::rat;
    use serde_json::json;

    #[test]
    fn torus_polygon_json_lists_sides_and_word() {
        let poly = FundamentalPolygon::new(1).unwrap();
        let v = serde_json::to_value(PolygonJson::new(&poly)).unwrap();
        assert_eq!(v["genus"], 1);
        assert_eq!(v["boundary_word"], "x0 x0^-1 x1 x1^-1");
        assert_eq!(v["sides"].as_array().unwrap().len(), 4);
        assert_eq!(v["sides"][1]["letter"], "x0^-1");
        assert_eq!(v["sides"][1]["partner"], 0);
        // Partner sides end at the same vertex.
        assert_eq!(v["sides"][0]["to"], v["sides"][1]["to"]);
    }

    #[test]
    fn intersections_are_tagged() {
        let s = Segment::new(Point::from_ints(0, 0), Point::from_ints(2, 2)).unwrap();
        let t = Segment::new(Point::from_ints(0, 2), Point::from_ints(2, 0)).unwrap();
        let v = serde_json::to_value(IntersectionJson::from(&s.intersection(&t))).unwrap();
        assert_eq!(v, json!({"kind": "point", "point": ["1", "1"]}));
        let parallel = Segment::new(Point::from_ints(1, 0), Point::from_ints(3, 2)).unwrap();
        let v = serde_json::to_value(IntersectionJson::from(&s.intersection(&parallel))).unwrap();
        assert_eq!(v, json!({"kind": "empty"}));
        let far = Segment::new(Point::from_ints(5, 0), Point::from_ints(6, 0)).unwrap();
        let v = serde_json::to_value(IntersectionJson::from(&s.intersection(&far))).unwrap();
        assert_eq!(v, json!({"kind": "point", "point": ["0", "0"]}));
        let v = serde_json::to_value(IntersectionJson::from(&s.bounded_intersection(&far))).unwrap();
        assert_eq!(v, json!({"kind": "empty"}));
    }

    #[test]
    fn rationals_print_exactly() {
        let p = Point::new(rat(-2, 6), rat(4, 2));
        assert_eq!(point_json(&p), ["-1/3".to_string(), "2".to_string()]);
    }
}
