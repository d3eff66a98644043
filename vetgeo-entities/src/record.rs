use crate::geo::MapPoint;

/// One row of the processed record set.
///
/// Only the fields that take part in geocoding are modelled here,
/// everything else is carried along by the file adapters.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressRecord {
    pub address : Option<String>,
    pub pos     : Option<MapPoint>,
}

impl AddressRecord {
    pub fn has_position(&self) -> bool {
        self.pos.is_some()
    }

    /// The coordinates as a pair of optional values,
    /// either both present or both absent.
    pub fn lat_lng(&self) -> (Option<f64>, Option<f64>) {
        match self.pos {
            Some(pos) => (Some(pos.lat()), Some(pos.lng())),
            None => (None, None),
        }
    }
}
