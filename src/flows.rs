use crate::adapters::json;
use anyhow::{Context, Result};
use std::{path::Path, time::Duration};
use vetgeo_core::{
    entities::AddressRecord,
    gateways::geocode::GeoCodingGateway,
    usecases::{self, EnrichmentReport},
};

#[derive(Debug, Clone)]
pub struct GeocodeFileSettings<'a> {
    pub address_field: &'a str,
    pub delay: Duration,
}

/// Read the records from `input`, resolve all missing positions
/// and write the result to `output`.
///
/// Nothing is written if the input can't be loaded.
pub fn geocode_records_file<G>(
    gateway: &G,
    input: &Path,
    output: &Path,
    settings: &GeocodeFileSettings,
) -> Result<EnrichmentReport>
where
    G: GeoCodingGateway + ?Sized,
{
    let mut json_records = json::read_records_from_file(input)
        .with_context(|| format!("Unable to load records from {}", input.display()))?;
    log::info!(
        "Loaded {} records from {}",
        json_records.len(),
        input.display()
    );

    let mut records: Vec<AddressRecord> = json_records
        .iter()
        .map(|r| r.to_address_record(settings.address_field))
        .collect();

    let report = usecases::enrich_records(gateway, &mut records, settings.delay);

    for (json_record, record) in json_records.iter_mut().zip(&records) {
        json_record.set_pos(record.pos);
    }
    json::write_records_to_file(output, &json_records)
        .with_context(|| format!("Unable to write records to {}", output.display()))?;
    Ok(report)
}
