//! Area of use of a CRS and its conversion to map rectangle bounds.
//!
//! Areas of use come as `(west, south, east, north)` in degrees. A box that
//! spans the antimeridian has `west > east`; before it can be drawn as a single
//! rectangle one of the two longitudes has to be moved by a full turn.

use crate::core::constants::FULL_TURN_DEGREES;
use crate::core::geo::LatLngBounds;
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde::Deserialize;

/// Geographic extent where a coordinate reference system is valid.
///
/// Serializes as the array PROJ exports, `[w, s, e, n]` followed by the name
/// when there is one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "AreaOfUseRepr")]
pub struct AreaOfUse {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
    /// Human readable description, when the source provides one
    pub name: Option<String>,
}

/// Accepted input shapes: `[w, s, e, n]`, `[w, s, e, n, name]` or
/// `{west, south, east, north, name}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum AreaOfUseRepr {
    Tuple([f64; 4]),
    TupleWithName(f64, f64, f64, f64, Option<String>),
    Object {
        west: f64,
        south: f64,
        east: f64,
        north: f64,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<AreaOfUseRepr> for AreaOfUse {
    fn from(repr: AreaOfUseRepr) -> Self {
        match repr {
            AreaOfUseRepr::Tuple([west, south, east, north]) => {
                Self::new(west, south, east, north)
            }
            AreaOfUseRepr::TupleWithName(west, south, east, north, name)
            | AreaOfUseRepr::Object {
                west,
                south,
                east,
                north,
                name,
            } => Self {
                west,
                south,
                east,
                north,
                name,
            },
        }
    }
}

impl Serialize for AreaOfUse {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let len = if self.name.is_some() { 5 } else { 4 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        for value in self.as_array() {
            seq.serialize_element(&value)?;
        }
        if let Some(name) = &self.name {
            seq.serialize_element(name)?;
        }
        seq.end()
    }
}

impl AreaOfUse {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The raw `[west, south, east, north]` tuple
    pub fn as_array(&self) -> [f64; 4] {
        [self.west, self.south, self.east, self.north]
    }

    /// True when the west edge lies numerically east of the east edge
    pub fn crosses_antimeridian(&self) -> bool {
        !(self.west < self.east)
    }

    /// Rectangle bounds for this area, see [`normalize`]
    pub fn to_bounds(&self) -> LatLngBounds {
        normalize(self)
    }
}

impl From<[f64; 4]> for AreaOfUse {
    fn from([west, south, east, north]: [f64; 4]) -> Self {
        Self::new(west, south, east, north)
    }
}

/// Turns an area of use into bounds `[[south, west'], [north, east']]` with
/// `west' < east'`.
///
/// When `west < east` nothing changes. Otherwise the longitude closer to zero
/// stays put and the other one moves by 360 degrees: if `|west| < |east|` the
/// east edge gets `+360`, else the west edge gets `-360`. The rule is fixed;
/// map pages and their tests rely on this exact tie-break.
pub fn normalize(area: &AreaOfUse) -> LatLngBounds {
    let (mut west, mut east) = (area.west, area.east);

    if west < east {
        // already ordered
    } else if west.abs() < east.abs() {
        east += FULL_TURN_DEGREES;
    } else {
        west -= FULL_TURN_DEGREES;
    }

    LatLngBounds::from_coords(area.south, west, area.north, east)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_area_is_unchanged() {
        let bounds = normalize(&AreaOfUse::new(-170.0, -10.0, 170.0, 10.0));
        assert_eq!(bounds.corners(), [[-10.0, -170.0], [10.0, 170.0]]);
    }

    #[test]
    fn test_crossing_with_west_farther_from_zero_shifts_west() {
        // |170| < |-170| is false, so the west edge moves
        let bounds = normalize(&AreaOfUse::new(170.0, -10.0, -170.0, 10.0));
        assert_eq!(bounds.corners(), [[-10.0, -190.0], [10.0, -170.0]]);
        assert!(bounds.west() < bounds.east());
    }

    #[test]
    fn test_crossing_with_west_closer_to_zero_shifts_east() {
        let bounds = normalize(&AreaOfUse::new(10.0, -10.0, -170.0, 10.0));
        assert_eq!(bounds.corners(), [[-10.0, 10.0], [10.0, 190.0]]);
    }

    #[test]
    fn test_fiji_style_crossing() {
        // Fiji: 176.81E to 178.69W
        let bounds = normalize(&AreaOfUse::new(176.81, -21.04, -178.69, -12.42));
        assert_eq!(bounds.west(), 176.81);
        assert!((bounds.east() - (360.0 - 178.69)).abs() < 1e-9);
        assert!(bounds.span().lng > 0.0 && bounds.span().lng < 10.0);
    }

    #[test]
    fn test_degenerate_equal_longitudes() {
        let bounds = normalize(&AreaOfUse::new(180.0, -90.0, 180.0, 90.0));
        assert_eq!(bounds.west(), -180.0);
        assert_eq!(bounds.east(), 180.0);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let first = normalize(&AreaOfUse::new(170.0, -10.0, -170.0, 10.0));
        let again = normalize(&AreaOfUse::new(
            first.west(),
            first.south(),
            first.east(),
            first.north(),
        ));
        assert_eq!(first, again);
    }

    #[test]
    fn test_west_always_below_east_after_normalizing() {
        let samples = [
            [-180.0, -90.0, 180.0, 90.0],
            [179.0, 0.0, -179.0, 1.0],
            [-179.0, 0.0, -179.5, 1.0],
            [0.0, 0.0, 0.0, 0.0],
            [90.0, 0.0, -45.0, 1.0],
            [45.0, 0.0, -90.0, 1.0],
        ];
        for sample in samples {
            let bounds = normalize(&sample.into());
            assert!(bounds.west() < bounds.east(), "{:?} -> {:?}", sample, bounds);
        }
    }

    #[test]
    fn test_deserialize_tuple_and_object() {
        let tuple: AreaOfUse = serde_json::from_str("[170.0, -10.0, -170.0, 10.0]").unwrap();
        assert_eq!(tuple.as_array(), [170.0, -10.0, -170.0, 10.0]);
        assert!(tuple.crosses_antimeridian());

        let object: AreaOfUse = serde_json::from_str(
            r#"{"west": -180.0, "south": -90.0, "east": 180.0, "north": 90.0, "name": "World."}"#,
        )
        .unwrap();
        assert_eq!(object.name.as_deref(), Some("World."));
        assert!(!object.crosses_antimeridian());
    }

    #[test]
    fn test_deserialize_named_tuple_from_proj_export() {
        let area: AreaOfUse =
            serde_json::from_str(r#"[-180.0, -90.0, 180.0, 90.0, "World."]"#).unwrap();
        assert_eq!(area.as_array(), [-180.0, -90.0, 180.0, 90.0]);
        assert_eq!(area.name.as_deref(), Some("World."));

        let unnamed: AreaOfUse = serde_json::from_str("[1.0, 2.0, 3.0, 4.0, null]").unwrap();
        assert!(unnamed.name.is_none());
    }

    #[test]
    fn test_serializes_as_array() {
        let named = AreaOfUse::new(170.0, -10.0, -170.0, 10.0).with_name("Pacific.");
        assert_eq!(
            serde_json::to_string(&named).unwrap(),
            r#"[170.0,-10.0,-170.0,10.0,"Pacific."]"#
        );
        assert_eq!(
            serde_json::to_string(&AreaOfUse::new(1.0, 2.0, 3.0, 4.0)).unwrap(),
            "[1.0,2.0,3.0,4.0]"
        );
    }
}
