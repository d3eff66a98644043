use geocoding::{Forward, Opencage, Point};
use vetgeo_core::gateways::geocode::{GeoCodingError, GeoCodingGateway};
use vetgeo_entities::geo::MapPoint;

/// A geocoding gateway based on the OpenCage API.
pub struct OpenCage {
    client: Opencage<'static>,
}

impl std::fmt::Debug for OpenCage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenCage").finish_non_exhaustive()
    }
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        let client = Opencage::new(api_key);
        Self { client }
    }
}

fn first_match(points: Vec<Point<f64>>) -> Result<Option<MapPoint>, GeoCodingError> {
    let Some(point) = points.into_iter().next() else {
        return Ok(None);
    };
    // x = longitude, y = latitude
    let pos = MapPoint::try_from_lat_lng_deg(point.y(), point.x())?;
    Ok(Some(pos))
}

impl GeoCodingGateway for OpenCage {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeoCodingError> {
        let points: Vec<Point<f64>> = self
            .client
            .forward(address)
            .map_err(|err| GeoCodingError::Other(err.into()))?;
        log::debug!("OpenCage returned {} result(s) for '{address}'", points.len());
        first_match(points)
    }
}
