//! Read-only queries over a validated scene.
//!
//! Each query returns a plain value that renders to the CLI text form via
//! `Display` and to JSON via `Serialize`:
//! - `bounding_box` - extent covering every building and antenna range
//! - `summarize` - element counts
//! - `describe` - counts plus every element, sorted by identifier

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::output::plural;
use crate::scene::Scene;
use crate::types::{Antenna, Building};

/// Smallest axis-aligned box containing the whole scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bounding box [{}, {}] x [{}, {}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

/// Result of the bounding-box query. `None` for an empty scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoundingBoxReport(pub Option<BoundingBox>);

impl fmt::Display for BoundingBoxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(bbox) => fmt::Display::fmt(bbox, f),
            None => f.write_str("undefined (empty scene)"),
        }
    }
}

/// Compute the scene bounding box.
///
/// Buildings contribute their rectangle, antennas the square around their
/// coverage disc.
pub fn bounding_box(scene: &Scene) -> BoundingBoxReport {
    let extents = scene
        .buildings()
        .iter()
        .map(Building::extent)
        .chain(scene.antennas().iter().map(Antenna::extent));

    let bbox = extents.reduce(|acc, e| acc.union(e)).map(|e| BoundingBox {
        min_x: e.left,
        max_x: e.right,
        min_y: e.bottom,
        max_y: e.top,
    });

    BoundingBoxReport(bbox)
}

/// Element counts of a scene.
///
/// Serializes as the counts plus the rendered `text` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub buildings: usize,
    pub antennas: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clauses: Vec<String> = [
            (self.buildings, "building", "buildings"),
            (self.antennas, "antenna", "antennas"),
        ]
        .into_iter()
        .filter(|(n, _, _)| *n > 0)
        .map(|(n, singular, pluralized)| plural(n, singular, pluralized))
        .collect();

        if clauses.is_empty() {
            f.write_str("An empty scene")
        } else {
            write!(f, "A scene with {}", clauses.join(" and "))
        }
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Summary", 3)?;
        state.serialize_field("buildings", &self.buildings)?;
        state.serialize_field("antennas", &self.antennas)?;
        state.serialize_field("text", &self.to_string())?;
        state.end()
    }
}

/// Count the elements of a scene.
pub fn summarize(scene: &Scene) -> Summary {
    Summary {
        buildings: scene.buildings().len(),
        antennas: scene.antennas().len(),
    }
}

/// Full listing of a scene, each group sorted by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Description<'a> {
    pub summary: Summary,
    pub buildings: Vec<&'a Building>,
    pub antennas: Vec<&'a Antenna>,
}

impl fmt::Display for Description<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary)?;
        for b in &self.buildings {
            write!(
                f,
                "\n  building {} at {} {} with dimensions {} {}",
                b.id, b.x, b.y, b.w, b.h
            )?;
        }
        for a in &self.antennas {
            write!(f, "\n  antenna {} at {} {} with range {}", a.id, a.x, a.y, a.r)?;
        }
        Ok(())
    }
}

/// Describe every element of the scene.
pub fn describe(scene: &Scene) -> Description<'_> {
    Description {
        summary: summarize(scene),
        buildings: scene.sorted_buildings(),
        antennas: scene.sorted_antennas(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneBuilder;

    fn scene(buildings: &[Building], antennas: &[Antenna]) -> Scene {
        let mut builder = SceneBuilder::new();
        for b in buildings {
            builder.add_building(b.clone()).unwrap();
        }
        for a in antennas {
            builder.add_antenna(a.clone()).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_bounding_box_empty() {
        let report = bounding_box(&Scene::default());
        assert_eq!(report.0, None);
        assert_eq!(report.to_string(), "undefined (empty scene)");
    }

    #[test]
    fn test_bounding_box_single_building() {
        let s = scene(&[Building::new("b1", 0, 0, 1, 1)], &[]);
        assert_eq!(bounding_box(&s).to_string(), "bounding box [-1, 1] x [-1, 1]");
    }

    #[test]
    fn test_bounding_box_mixed() {
        let s = scene(
            &[
                Building::new("b1", 0, 0, 2, 1),
                Building::new("b2", 10, 3, 1, 2),
            ],
            &[Antenna::new("a1", -4, 8, 3)],
        );
        assert_eq!(
            bounding_box(&s).0,
            Some(BoundingBox {
                min_x: -7,
                max_x: 11,
                min_y: -1,
                max_y: 11
            })
        );
    }

    #[test]
    fn test_bounding_box_antenna_only() {
        let s = scene(&[], &[Antenna::new("a1", 5, 5, 3)]);
        assert_eq!(bounding_box(&s).to_string(), "bounding box [2, 8] x [2, 8]");
    }

    #[test]
    fn test_summary_wording() {
        let cases = [
            (0, 0, "An empty scene"),
            (1, 0, "A scene with 1 building"),
            (2, 0, "A scene with 2 buildings"),
            (0, 1, "A scene with 1 antenna"),
            (0, 3, "A scene with 3 antennas"),
            (1, 1, "A scene with 1 building and 1 antenna"),
            (4, 2, "A scene with 4 buildings and 2 antennas"),
        ];
        for (buildings, antennas, expected) in cases {
            let summary = Summary {
                buildings,
                antennas,
            };
            assert_eq!(summary.to_string(), expected);
        }
    }

    #[test]
    fn test_summary_json_carries_text() {
        let summary = Summary {
            buildings: 1,
            antennas: 0,
        };
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(value["buildings"], 1);
        assert_eq!(value["antennas"], 0);
        assert_eq!(value["text"], "A scene with 1 building");
    }

    #[test]
    fn test_describe_json_nests_summary_text() {
        let s = scene(&[Building::new("b1", 0, 0, 1, 1)], &[]);
        let value = serde_json::to_value(describe(&s)).unwrap();
        assert_eq!(value["summary"]["text"], "A scene with 1 building");
        assert_eq!(value["buildings"][0]["id"], "b1");
    }

    #[test]
    fn test_describe_sorts_each_group() {
        let s = scene(
            &[
                Building::new("zeta", 0, 0, 1, 1),
                Building::new("alpha", 5, 5, 1, 2),
            ],
            &[Antenna::new("b", 1, 1, 1), Antenna::new("B", 2, 2, 4)],
        );

        let expected = "A scene with 2 buildings and 2 antennas\n  \
                        building alpha at 5 5 with dimensions 1 2\n  \
                        building zeta at 0 0 with dimensions 1 1\n  \
                        antenna B at 2 2 with range 4\n  \
                        antenna b at 1 1 with range 1";
        assert_eq!(describe(&s).to_string(), expected);
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(describe(&Scene::default()).to_string(), "An empty scene");
    }
}
