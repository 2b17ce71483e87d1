use std::ops::Range;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while decoding a sexagesimal coordinate token.
#[derive(Debug, Error, PartialEq)]
pub enum CoordinateError {
    #[error("coordinate token '{token}' is too short")]
    TooShort { token: String },
    #[error("unknown hemisphere '{found}' (expected N, S, E or W)")]
    Hemisphere { found: char },
    #[error("{name} field of coordinate token '{token}' is not numeric")]
    Field {
        name: &'static str,
        token: String,
    },
}

// Token layout: <H><DDD>.<MM>.<SS.sss>
// The plugin writes fixed-width degree and minute fields; only the seconds
// field varies in length.
const DEGREES: Range<usize> = 1..4;
const MINUTES: Range<usize> = 5..7;
const SECONDS_FROM: usize = 8;

/// Decode a single token like `N051.28.30.500` into signed decimal degrees.
///
/// West and South are negative, East and North positive. Field values are
/// not range-checked: a minutes field of 70 decodes to 70/60 of a degree,
/// exactly as the legacy converter computed it.
pub fn parse_token(token: &str) -> Result<f64, CoordinateError> {
    let hemisphere = token.chars().next().ok_or_else(|| CoordinateError::TooShort {
        token: token.to_string(),
    })?;
    let sign = match hemisphere {
        'N' | 'E' => 1.0,
        'S' | 'W' => -1.0,
        other => return Err(CoordinateError::Hemisphere { found: other }),
    };

    let degrees: u32 = field(token, DEGREES, "degrees")?;
    let minutes: u32 = field(token, MINUTES, "minutes")?;
    let seconds: f64 = field(token, SECONDS_FROM..token.len(), "seconds")?;

    Ok(sign * (f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0))
}

/// Convert a longitude/latitude token pair into `[longitude, latitude]`
/// decimal degrees.
pub fn convert_lon_lat(lon: &str, lat: &str) -> Result<[f64; 2], CoordinateError> {
    Ok([parse_token(lon)?, parse_token(lat)?])
}

fn field<T: FromStr>(
    token: &str,
    span: Range<usize>,
    name: &'static str,
) -> Result<T, CoordinateError> {
    let raw = token.get(span).ok_or_else(|| CoordinateError::TooShort {
        token: token.to_string(),
    })?;
    raw.parse().map_err(|_| CoordinateError::Field {
        name,
        token: token.to_string(),
    })
}
