use webring_core::Neighbors;

/// Handle to the marker element that identifies the current site. The host
/// page owns the element; the library only reads its UUID attribute.
pub trait HomeMarker {
    fn site_uuid(&self) -> Option<String>;
}

/// Handle to a navigation link element whose target gets overwritten.
pub trait LinkSlot {
    fn set_href(&mut self, href: &str);
}

/// Point the two navigation slots at the resolved neighbors.
pub fn apply_links(
    prev_slot: &mut dyn LinkSlot,
    next_slot: &mut dyn LinkSlot,
    neighbors: &Neighbors<'_>,
) {
    prev_slot.set_href(&neighbors.previous.url);
    next_slot.set_href(&neighbors.next.url);
}
