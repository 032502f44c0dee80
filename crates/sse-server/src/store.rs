//! The single-user Server (§4.3): a domain store answering `search` and
//! `update` against client-built secure indexes.

use crate::errors::ServerError;
use sse_types::{DomainName, DomainRecord, MergeRequest, Query, SecureEntry, SORTING_KEY_NAME};
use std::collections::{BTreeMap, HashSet};

/// Holds one [`DomainRecord`] per domain name. Mutated only by
/// [`Server::update`].
#[derive(Debug, Clone, Default)]
pub struct Server {
    index: BTreeMap<DomainName, DomainRecord>,
}

impl Server {
    /// An empty server.
    pub fn new() -> Self {
        Self { index: BTreeMap::new() }
    }

    /// Initialise from a caller-supplied snapshot of existing domains.
    pub fn from_snapshot(index: BTreeMap<DomainName, DomainRecord>) -> Self {
        Self { index }
    }

    /// The current domain records, e.g. for persisting a snapshot.
    pub fn domains(&self) -> &BTreeMap<DomainName, DomainRecord> {
        &self.index
    }

    /// Answer a query (§4.3.1).
    ///
    /// Iterates domains in the query's order. The first domain absent
    /// from the store aborts the whole search with no partial results.
    /// A trapdoor present in a domain's bucket map, whose document id
    /// has not already been appended, contributes its `[id, opse_count]`
    /// pair; everything else (a missing trapdoor, a repeat document id)
    /// silently contributes nothing. The result is sorted descending by
    /// `opse_count`, ties broken by the order hits were encountered.
    pub fn search(&self, query: &Query) -> Vec<SecureEntry> {
        let mut hits = Vec::new();
        let mut seen = HashSet::new();

        for (domain, trapdoors) in query {
            let record = match self.index.get(domain) {
                Some(record) => record,
                None => {
                    tracing::warn!(domain = %domain, "search aborted: unknown domain");
                    return Vec::new();
                }
            };

            for trapdoor in trapdoors {
                if let Some(entry) = record.index.get(trapdoor) {
                    if seen.insert(entry.id.clone()) {
                        hits.push(entry.clone());
                    }
                }
            }
        }

        hits.sort_by(|a, b| b.opse_count.cmp(&a.opse_count));
        tracing::info!(domains_queried = query.len(), hits = hits.len(), "search completed");
        hits
    }

    /// Install a new domain record (§4.3.2).
    ///
    /// Rejects the update if any existing domain `dn`, not named in
    /// `reps`, has at least as many documents as `index` — see
    /// [`ServerError::GrowthViolation`]. Otherwise deletes every domain
    /// named in `reps` and installs `index` under `domain`.
    pub fn update(&mut self, domain: DomainName, index: DomainRecord, reps: &[DomainName]) -> Result<(), ServerError> {
        if domain == SORTING_KEY_NAME {
            tracing::warn!(domain = %domain, "update rejected: domain name is reserved");
            return Err(ServerError::ReservedDomain);
        }

        for (name, record) in &self.index {
            if record.docs.len() >= index.docs.len() && !reps.contains(name) {
                tracing::warn!(domain = %domain, blocking = %name, "update rejected: growth violation");
                return Err(ServerError::GrowthViolation(MergeRequest { domain: name.clone(), docs: record.docs.clone() }));
            }
        }

        for name in reps {
            self.index.remove(name);
        }
        self.index.insert(domain.clone(), index);
        tracing::info!(domain = %domain, replaced = reps.len(), "update accepted");
        Ok(())
    }
}
