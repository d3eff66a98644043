use std::time::Duration;
use thiserror::Error;
use vetgeo_entities::geo::{MapPoint, MapPointError};

#[derive(Debug, Error)]
pub enum GeoCodingError {
    #[error("The request timed out after {0:?}")]
    Timeout(Duration),
    #[error("The provider responded with HTTP status {0}")]
    Status(u16),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Invalid position: {0}")]
    Position(#[from] MapPointError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A forward geocoding provider.
///
/// Implementations issue exactly one lookup per call and
/// report the best match, if any.
pub trait GeoCodingGateway {
    /// `Ok(None)` means the provider did not find a match.
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeoCodingError>;
}

impl<G> GeoCodingGateway for Box<G>
where
    G: GeoCodingGateway + ?Sized,
{
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeoCodingError> {
        (**self).resolve_address_lat_lng(address)
    }
}
