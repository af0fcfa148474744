use crate::directory::DirectoryFetcher;
use crate::error::{ClientError, Result};
use crate::page::{apply_links, HomeMarker, LinkSlot};
use tracing::{debug, error};
use webring_core::Ring;

/// Resolve the ring neighbors of the current page and point the two
/// navigation slots at them. Any failure leaves both slots untouched.
///
/// Holds no state between invocations; the host calls this once per page
/// load with freshly injected handles.
pub async fn initialize(
    fetcher: &DirectoryFetcher,
    marker: &dyn HomeMarker,
    prev_slot: &mut dyn LinkSlot,
    next_slot: &mut dyn LinkSlot,
) -> Result<()> {
    let uuid = marker.site_uuid().ok_or(ClientError::MissingUuid)?;

    let sites = fetcher.fetch().await?;
    let ring = Ring::new(sites);
    debug!("Resolving neighbors of {} in a ring of {}", uuid, ring.len());

    let neighbors = ring.neighbors_of(&uuid)?;
    apply_links(prev_slot, next_slot, &neighbors);
    Ok(())
}

/// Page-load entry point: like [`initialize`], but a failure is reported
/// to the diagnostic log once and swallowed, so the rest of the host page
/// keeps running with its placeholder link targets.
pub async fn run(
    fetcher: &DirectoryFetcher,
    marker: &dyn HomeMarker,
    prev_slot: &mut dyn LinkSlot,
    next_slot: &mut dyn LinkSlot,
) {
    if let Err(e) = initialize(fetcher, marker, prev_slot, next_slot).await {
        error!("Could not embed the ring navigation links: {}", e);
    }
}
