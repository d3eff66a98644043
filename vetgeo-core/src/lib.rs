pub mod gateways;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use vetgeo_entities::{geo::*, record::*};
}
