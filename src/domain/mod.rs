pub mod coordination;
pub mod stand;

pub use coordination::{Coordination, CoordinationGroup};
pub use stand::{AirportStands, Stand};
