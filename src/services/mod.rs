// Service exports
pub mod geocoder;
pub mod overpass;
pub mod search;

pub use geocoder::{GeocodeError, NominatimClient};
pub use overpass::{OverpassClient, OverpassError};
pub use search::{SearchError, SearchService};
