//! In-memory campaign store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use uuid::Uuid;

use super::model::Campaign;

/// Campaigns keyed by id. Clones share the same map.
#[derive(Clone, Default)]
pub struct CampaignStore {
    inner: Arc<RwLock<HashMap<Uuid, Campaign>>>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, campaign: Campaign) -> Campaign {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.insert(campaign.id, campaign.clone());
        campaign
    }

    pub fn get(&self, id: &Uuid) -> Option<Campaign> {
        let guard = self.inner.read().expect("rwlock poisoned");
        guard.get(id).cloned()
    }

    /// Returns every campaign, newest first; creation-time ties break by id.
    pub fn list(&self) -> Vec<Campaign> {
        let guard = self.inner.read().expect("rwlock poisoned");
        let mut campaigns: Vec<Campaign> = guard.values().cloned().collect();
        campaigns.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        campaigns
    }

    /// Applies `apply` to the campaign under the write lock and stamps
    /// `updated_at`. Returns `None` when the id is unknown.
    pub fn update<F>(&self, id: &Uuid, apply: F) -> Option<Campaign>
    where
        F: FnOnce(&mut Campaign),
    {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        let campaign = guard.get_mut(id)?;
        apply(campaign);
        campaign.updated_at = Utc::now();
        Some(campaign.clone())
    }

    pub fn remove(&self, id: &Uuid) -> Option<Campaign> {
        let mut guard = self.inner.write().expect("rwlock poisoned");
        guard.remove(id)
    }
}
