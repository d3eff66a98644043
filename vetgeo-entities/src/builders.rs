pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::record_builder::*;

pub mod record_builder {

    use super::*;
    use crate::{geo::*, record::*};

    #[derive(Debug)]
    pub struct AddressRecordBuild {
        record: AddressRecord,
    }

    impl AddressRecordBuild {
        pub fn address(mut self, address: &str) -> Self {
            self.record.address = Some(address.into());
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.record.pos = Some(MapPoint::from_lat_lng_deg(lat, lng));
            self
        }
        pub fn finish(self) -> AddressRecord {
            self.record
        }
    }

    impl Builder for AddressRecord {
        type Build = AddressRecordBuild;
        fn build() -> Self::Build {
            AddressRecordBuild {
                record: AddressRecord::default(),
            }
        }
    }
}
