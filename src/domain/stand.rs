use serde::Serialize;
use std::collections::BTreeMap;

use crate::geometry;

/// A single parking stand as declared in the plugin dump: either a circle
/// (`center` + `radius`) or a polygon (`coords`), finalized so that every
/// complete stand ends up with a `center`.
///
/// Absent attributes stay absent in the JSON output; the front-end treats
/// missing keys, not null values, as "not present".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stand {
    /// Decimal-degree [longitude, latitude] center point.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 2]>,
    /// Radius in meters, passed through exactly as written in the dump.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<String>,
    /// Polygon boundary vertices as [longitude, latitude], in file order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub coords: Vec<[f64; 2]>,
    /// Set when an AREA marker line was seen for this stand.
    #[serde(skip_serializing_if = "is_false")]
    pub area: bool,
}

fn is_false(flag: &bool) -> bool {
    !flag
}

/// All parsed stands: airport code -> stand identifier -> [`Stand`].
///
/// Keys are kept sorted so converting the same dump twice yields
/// byte-identical JSON.
#[derive(Debug, Default, Serialize)]
pub struct AirportStands(BTreeMap<String, BTreeMap<String, Stand>>);

impl AirportStands {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a stand, returning the fresh entry. Re-declaring an existing
    /// airport/stand pair starts over from an empty record.
    pub fn declare(&mut self, airport: &str, stand: &str) -> &mut Stand {
        let slot = self
            .0
            .entry(airport.to_string())
            .or_default()
            .entry(stand.to_string())
            .or_default();
        *slot = Stand::default();
        slot
    }

    pub fn get(&self, airport: &str, stand: &str) -> Option<&Stand> {
        self.0.get(airport)?.get(stand)
    }

    pub fn get_mut(&mut self, airport: &str, stand: &str) -> Option<&mut Stand> {
        self.0.get_mut(airport)?.get_mut(stand)
    }

    pub fn airport_count(&self) -> usize {
        self.0.len()
    }

    pub fn stand_count(&self) -> usize {
        self.0.values().map(|stands| stands.len()).sum()
    }

    /// Fill in missing centers from polygon vertices.
    ///
    /// Runs once after parsing. Stands that have neither a center nor any
    /// vertices cannot be completed; they stay in the map untouched and
    /// their (airport, stand) pairs are returned for the caller to report.
    pub fn finalize_centers(&mut self) -> Vec<(String, String)> {
        let mut incomplete = Vec::new();

        for (airport, stands) in &mut self.0 {
            for (id, stand) in stands.iter_mut() {
                if stand.center.is_some() {
                    continue;
                }
                match geometry::vertex_mean(&stand.coords) {
                    Some(center) => stand.center = Some(center),
                    None => incomplete.push((airport.clone(), id.clone())),
                }
            }
        }

        incomplete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_resets_existing_entry() {
        let mut stands = AirportStands::new();
        stands.declare("EGFF", "21").coords.push([-4.2, 51.4]);
        assert_eq!(stands.get("EGFF", "21").unwrap().coords.len(), 1);

        stands.declare("EGFF", "21");
        assert!(stands.get("EGFF", "21").unwrap().coords.is_empty());
        assert_eq!(stands.stand_count(), 1);
    }

    #[test]
    fn test_sibling_stands_are_independent() {
        let mut stands = AirportStands::new();
        stands.declare("EGFF", "21");
        stands.declare("EGFF", "22").coords.push([-4.2, 51.4]);

        assert!(stands.get("EGFF", "21").unwrap().coords.is_empty());
        assert_eq!(stands.get("EGFF", "22").unwrap().coords.len(), 1);
        assert_eq!(stands.airport_count(), 1);
        assert_eq!(stands.stand_count(), 2);
    }

    #[test]
    fn test_finalize_averages_coords() {
        let mut stands = AirportStands::new();
        stands
            .declare("EGFF", "21")
            .coords
            .extend([[-1.0, 51.0], [-1.0, 53.0]]);

        let incomplete = stands.finalize_centers();
        assert!(incomplete.is_empty());
        assert_eq!(stands.get("EGFF", "21").unwrap().center, Some([-1.0, 52.0]));
    }

    #[test]
    fn test_finalize_keeps_explicit_center() {
        let mut stands = AirportStands::new();
        let stand = stands.declare("EGFF", "21");
        stand.center = Some([-4.2, 51.475]);
        stand.coords.push([0.0, 0.0]);

        stands.finalize_centers();
        assert_eq!(
            stands.get("EGFF", "21").unwrap().center,
            Some([-4.2, 51.475])
        );
    }

    #[test]
    fn test_finalize_reports_incomplete_stands() {
        let mut stands = AirportStands::new();
        stands.declare("EGFF", "21");
        stands.declare("ESSA", "F38").coords.push([17.9, 59.65]);

        let incomplete = stands.finalize_centers();
        assert_eq!(incomplete, vec![("EGFF".to_string(), "21".to_string())]);

        // The incomplete entry is retained, just without a center.
        assert_eq!(stands.get("EGFF", "21").unwrap().center, None);
    }

    #[test]
    fn test_serialization_omits_absent_attributes() {
        let mut stands = AirportStands::new();
        stands.declare("EGFF", "21");

        let json = serde_json::to_value(&stands).unwrap();
        let entry = &json["EGFF"]["21"];
        assert!(entry.get("center").is_none());
        assert!(entry.get("radius").is_none());
        assert!(entry.get("coords").is_none());
        assert!(entry.get("area").is_none());
    }

    #[test]
    fn test_serialization_of_complete_stand() {
        let mut stands = AirportStands::new();
        let stand = stands.declare("EGFF", "21");
        stand.center = Some([-4.2, 51.475]);
        stand.radius = Some("20".to_string());
        stand.area = true;

        let json = serde_json::to_value(&stands).unwrap();
        let entry = &json["EGFF"]["21"];
        assert_eq!(entry["center"], serde_json::json!([-4.2, 51.475]));
        assert_eq!(entry["radius"], "20");
        assert_eq!(entry["area"], true);
    }
}
