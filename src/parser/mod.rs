pub mod coordinations;
pub mod stands;

pub use coordinations::{CoordinationParseError, parse_coordinations};
pub use stands::{StandsParseError, parse_stands};
