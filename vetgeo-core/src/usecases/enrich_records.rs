use super::{prelude::*, resolve_coordinates};
use std::{thread, time::Duration};

/// Summary of a single enrichment run.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    /// Records that already had a position.
    pub skipped    : usize,
    pub resolved   : usize,
    pub unresolved : usize,
}

impl EnrichmentReport {
    pub fn looked_up(&self) -> usize {
        self.resolved + self.unresolved
    }
}

/// Resolve the position of all records that don't have one yet.
///
/// The records are processed strictly in order, one lookup at a time.
/// After each lookup the thread sleeps for `delay` to respect the
/// usage policy of the provider.
pub fn enrich_records<G>(
    gateway: &G,
    records: &mut [AddressRecord],
    delay: Duration,
) -> EnrichmentReport
where
    G: GeoCodingGateway + ?Sized,
{
    enrich_records_with_pause(gateway, records, || {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    })
}

/// Same as [`enrich_records`] but with a custom pause after each lookup.
pub fn enrich_records_with_pause<G, P>(
    gateway: &G,
    records: &mut [AddressRecord],
    mut pause: P,
) -> EnrichmentReport
where
    G: GeoCodingGateway + ?Sized,
    P: FnMut(),
{
    let mut report = EnrichmentReport::default();
    for record in records.iter_mut() {
        if record.has_position() {
            log::debug!(
                "Skip record with known position: {:?}",
                record.address.as_deref()
            );
            report.skipped += 1;
            continue;
        }
        let address = clean_address(record.address.as_deref());
        log::info!("Geocoding: {}", address.as_deref().unwrap_or_default());
        record.pos = resolve_coordinates(gateway, address.as_deref());
        if record.has_position() {
            report.resolved += 1;
        } else {
            report.unresolved += 1;
        }
        pause();
    }
    report
}
