use super::prelude::*;

/// Look up the position of an address.
///
/// Every failure of the gateway is logged and reported as `None`.
/// Absent or empty addresses are never sent to the gateway.
pub fn resolve_coordinates<G>(gateway: &G, address: Option<&str>) -> Option<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    let address = address.filter(|addr| !addr.is_empty())?;
    match gateway.resolve_address_lat_lng(address) {
        Ok(Some(pos)) => {
            log::debug!("Resolved address location '{address}': {pos}");
            Some(pos)
        }
        Ok(None) => {
            log::info!("No location found for '{address}'");
            None
        }
        Err(err) => {
            log::warn!("Error geocoding '{address}': {err}");
            None
        }
    }
}
