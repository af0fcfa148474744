use crate::error::{Result, RingError};
use crate::site::SiteRecord;
use rand::{thread_rng, Rng};

/// True mathematical modulo: the result is always in `[0, len)`, even for
/// negative positions. `len` must be non-zero.
pub fn wrapped_index(position: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrapped_index needs a non-empty ring");
    let len = len as isize;
    (((position % len) + len) % len) as usize
}

/// The previous and next members relative to some position in the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub previous: &'a SiteRecord,
    pub next: &'a SiteRecord,
}

/// An ordered member directory. Order defines adjacency; the list wraps at
/// both ends. Built fresh from each fetch and discarded after use.
#[derive(Debug, Clone, Default)]
pub struct Ring {
    sites: Vec<SiteRecord>,
}

impl Ring {
    pub fn new(sites: Vec<SiteRecord>) -> Self {
        Self { sites }
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[SiteRecord] {
        &self.sites
    }

    /// Position of the first member whose UUID matches exactly.
    pub fn locate(&self, uuid: &str) -> Option<usize> {
        self.sites.iter().position(|site| site.website_uuid == uuid)
    }

    /// Members adjacent to `index`, wrapping at both ends. A one-member
    /// ring neighbors itself.
    pub fn neighbors(&self, index: usize) -> Result<Neighbors<'_>> {
        if self.sites.is_empty() {
            return Err(RingError::EmptyRing);
        }
        if index >= self.sites.len() {
            return Err(RingError::IndexOutOfBounds(index));
        }

        let len = self.sites.len();
        let previous = &self.sites[wrapped_index(index as isize - 1, len)];
        let next = &self.sites[wrapped_index(index as isize + 1, len)];
        Ok(Neighbors { previous, next })
    }

    /// Locate a member by UUID and resolve its neighbors in one step.
    pub fn neighbors_of(&self, uuid: &str) -> Result<Neighbors<'_>> {
        let index = self
            .locate(uuid)
            .ok_or_else(|| RingError::UnknownSite(uuid.to_string()))?;
        self.neighbors(index)
    }

    /// A uniformly random member, excluding the hub entry at index 0.
    /// Returns `None` when the ring has no members besides the hub.
    pub fn random(&self) -> Option<&SiteRecord> {
        if self.sites.len() < 2 {
            return None;
        }
        let mut rng = thread_rng();
        self.sites.get(rng.gen_range(1..self.sites.len()))
    }
}
