pub mod centroid;
pub mod sexagesimal;

pub use centroid::vertex_mean;
pub use sexagesimal::{CoordinateError, convert_lon_lat, parse_token};
