use crate::{entities::*, gateways::geocode::*};
use std::{cell::RefCell, collections::HashMap};

pub use vetgeo_entities::builders::Builder;

#[derive(Debug, Clone, Copy)]
enum Response {
    Found(MapPoint),
    Failure,
}

/// Gateway that answers from a fixed table and records every query.
///
/// Addresses without an entry are reported as not found.
#[derive(Debug, Default)]
pub struct MockGeoGW {
    responses: HashMap<String, Response>,
    queries: RefCell<Vec<String>>,
}

impl MockGeoGW {
    pub fn with_position(mut self, address: &str, lat: f64, lng: f64) -> Self {
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
        self.responses
            .insert(address.to_string(), Response::Found(pos));
        self
    }

    pub fn with_failure(mut self, address: &str) -> Self {
        self.responses.insert(address.to_string(), Response::Failure);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl GeoCodingGateway for MockGeoGW {
    fn resolve_address_lat_lng(&self, address: &str) -> Result<Option<MapPoint>, GeoCodingError> {
        self.queries.borrow_mut().push(address.to_string());
        match self.responses.get(address) {
            Some(Response::Found(pos)) => Ok(Some(*pos)),
            Some(Response::Failure) => Err(GeoCodingError::Timeout(
                std::time::Duration::from_secs(10),
            )),
            None => Ok(None),
        }
    }
}
