//! Composite listing reads.
//!
//! One scan of the listing store, then one lookup per distinct owner against
//! the user store, joined back onto the scan in its original order. A failed
//! owner lookup degrades only the listings that owner holds; a failed scan
//! fails the whole read before any owner is looked up.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures::{future, stream, StreamExt};
use tracing::{debug, error, warn};

use common::{AppError, AppResult};
use domain::{AbsenceReason, AggregatedListing, Listing, ListingQuery, User, UserId};

use crate::clients::{DownstreamError, Lookup};

#[cfg(test)]
use mockall::automock;

/// Source of the primary listing scan.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Listings matching the query, in store order
    async fn list_listings(&self, query: ListingQuery) -> Result<Vec<Listing>, DownstreamError>;
}

/// Per-id owner lookups.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, id: UserId) -> Lookup<User>;
}

/// Limits applied to the owner fan-out of a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanoutPolicy {
    /// Most owner lookups outstanding at once (at least 1)
    pub max_in_flight: usize,
    /// Deadline for the whole fan-out
    pub deadline: Duration,
}

impl Default for FanoutPolicy {
    fn default() -> Self {
        Self {
            max_in_flight: 8,
            deadline: Duration::from_secs(5),
        }
    }
}

/// Builds `AggregatedListing` feeds from the two stores.
pub struct ListingAggregator {
    listings: Arc<dyn ListingSource>,
    users: Arc<dyn UserDirectory>,
    policy: FanoutPolicy,
}

impl ListingAggregator {
    pub fn new(
        listings: Arc<dyn ListingSource>,
        users: Arc<dyn UserDirectory>,
        policy: FanoutPolicy,
    ) -> Self {
        Self {
            listings,
            users,
            policy,
        }
    }

    /// Scan listings and embed each owner.
    ///
    /// Output order is the listing store's order. Lookup results are keyed
    /// by user id, so completion order never leaks into the response.
    pub async fn aggregate(&self, query: ListingQuery) -> AppResult<Vec<AggregatedListing>> {
        let listings = self.listings.list_listings(query).await.map_err(|e| {
            error!("Listing scan failed: {}", e);
            AppError::primary_unavailable(e.to_string())
        })?;

        let owners = distinct_owners(&listings);
        debug!(
            "Joining {} listings against {} distinct owners",
            listings.len(),
            owners.len()
        );

        let lookups = self.fetch_owners(owners).await;
        Ok(join(listings, &lookups))
    }

    /// Look up every owner once, at most `max_in_flight` at a time.
    ///
    /// Ids still unresolved when the deadline passes are recorded as
    /// timed out; their in-flight calls are dropped.
    async fn fetch_owners(&self, owners: Vec<UserId>) -> HashMap<UserId, Lookup<User>> {
        let mut resolved = HashMap::with_capacity(owners.len());
        if owners.is_empty() {
            return resolved;
        }

        let users = Arc::clone(&self.users);
        let lookups = stream::iter(owners.clone())
            .map(move |id| {
                let users = Arc::clone(&users);
                async move { (id, users.find_user(id).await) }
            })
            .buffer_unordered(self.policy.max_in_flight.max(1))
            .for_each(|(id, lookup)| {
                resolved.insert(id, lookup);
                future::ready(())
            });

        let finished = tokio::time::timeout(self.policy.deadline, lookups)
            .await
            .is_ok();
        if !finished {
            warn!(
                "Owner fan-out hit its {:?} deadline with {} of {} lookups resolved",
                self.policy.deadline,
                resolved.len(),
                owners.len()
            );
        }

        for id in owners {
            let lookup = resolved
                .entry(id)
                .or_insert(Lookup::Unavailable(DownstreamError::Timeout));
            match lookup {
                Lookup::Found(_) => {}
                Lookup::NotFound => warn!("Owner {} not found in user store", id),
                Lookup::Unavailable(e) => warn!("Could not fetch owner {}: {}", id, e),
            }
        }

        resolved
    }
}

/// Distinct owner ids in first-seen order.
fn distinct_owners(listings: &[Listing]) -> Vec<UserId> {
    let mut seen = HashSet::new();
    listings
        .iter()
        .map(|listing| listing.user_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

fn join(listings: Vec<Listing>, owners: &HashMap<UserId, Lookup<User>>) -> Vec<AggregatedListing> {
    listings
        .into_iter()
        .map(|listing| match owners.get(&listing.user_id) {
            Some(Lookup::Found(user)) => AggregatedListing::joined(listing, user.clone()),
            Some(Lookup::NotFound) => AggregatedListing::absent(listing, AbsenceReason::NotFound),
            Some(Lookup::Unavailable(_)) | None => {
                AggregatedListing::absent(listing, AbsenceReason::Unavailable)
            }
        })
        .collect()
}
