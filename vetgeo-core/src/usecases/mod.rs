mod enrich_records;
mod resolve_coordinates;

#[cfg(test)]
pub mod tests;

pub use self::{enrich_records::*, resolve_coordinates::*};

mod prelude {
    pub use crate::{entities::*, gateways::geocode::*, util::address::clean_address};
}
