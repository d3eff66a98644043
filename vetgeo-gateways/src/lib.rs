pub mod nominatim;
pub mod opencage;
