use thiserror::Error;

use crate::domain::{AirportStands, Stand};
use crate::geometry::{self, CoordinateError};

/// Errors that abort a stand-dump parse. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum StandsParseError {
    #[error("line {line}: {record} line is missing fields")]
    MissingFields { line: usize, record: &'static str },
    #[error("line {line}: geometry line before any stand declaration")]
    GeometryBeforeStand { line: usize },
    #[error("line {line}: {source}")]
    Coordinate {
        line: usize,
        #[source]
        source: CoordinateError,
    },
}

/// Parse the ground-radar plugin stand dump in a single streaming pass.
///
/// The cursor is the most recently declared (airport, stand) pair; COORD and
/// AREA lines attach to it. The dump interleaves several other record types
/// we have no use for, so lines matching no known prefix are skipped.
///
/// Dialect:
/// ```text
/// STAND:<AIRPORT>:<STAND_ID>[:<LAT>:<LON>:<RADIUS_M>]
/// COORD:<LAT>:<LON>
/// AREA
/// ```
///
/// Centers are only taken from fully qualified STAND lines (all of lat, lon
/// and radius present); anything after the radius field is ignored. Stands
/// left without a center get one derived from their polygon afterwards, in
/// [`AirportStands::finalize_centers`].
pub fn parse_stands(input: &str) -> Result<AirportStands, StandsParseError> {
    let mut stands = AirportStands::new();
    let mut current: Option<(String, String)> = None;

    for (idx, raw) in input.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if let Some(rest) = trimmed.strip_prefix("STAND:") {
            let fields: Vec<&str> = rest.split(':').collect();
            if fields.len() < 2 {
                return Err(StandsParseError::MissingFields {
                    line,
                    record: "STAND",
                });
            }
            let (airport, stand_id) = (fields[0], fields[1]);

            let stand = stands.declare(airport, stand_id);
            if fields.len() >= 5 {
                let (lat, lon) = (fields[2], fields[3]);
                stand.center = Some(
                    geometry::convert_lon_lat(lon, lat)
                        .map_err(|source| StandsParseError::Coordinate { line, source })?,
                );
                stand.radius = Some(fields[4].to_string());
            }

            current = Some((airport.to_string(), stand_id.to_string()));
        } else if let Some(rest) = trimmed.strip_prefix("COORD:") {
            let fields: Vec<&str> = rest.split(':').collect();
            if fields.len() < 2 {
                return Err(StandsParseError::MissingFields {
                    line,
                    record: "COORD",
                });
            }
            let (lat, lon) = (fields[0], fields[1]);

            let pair = geometry::convert_lon_lat(lon, lat)
                .map_err(|source| StandsParseError::Coordinate { line, source })?;
            current_stand(&mut stands, &current, line)?.coords.push(pair);
        } else if trimmed == "AREA" {
            current_stand(&mut stands, &current, line)?.area = true;
        }
    }

    Ok(stands)
}

fn current_stand<'a>(
    stands: &'a mut AirportStands,
    current: &Option<(String, String)>,
    line: usize,
) -> Result<&'a mut Stand, StandsParseError> {
    current
        .as_ref()
        .and_then(|(airport, stand)| stands.get_mut(airport, stand))
        .ok_or(StandsParseError::GeometryBeforeStand { line })
}
