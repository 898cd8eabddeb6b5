//! Offer Repository
//!
//! Storage seam for marketing offers. The in-memory store backs the preview
//! binary and tests; a database-backed store implements the same trait.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared::models::{Offer, OfferCreate, OfferStatus, OfferUpdate};
use thiserror::Error;

use crate::utils::{AppError, Clock, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Offer {id} is not a draft")]
    NotDraft { id: i64, status: OfferStatus },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::OfferNotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::NotDraft { id, status } => AppError::with_message(
                ErrorCode::OfferNotDraft,
                format!("Offer {} is not a draft", id),
            )
            .with_detail("status", format!("{:?}", status).to_lowercase()),
            RepoError::Storage(msg) => AppError::internal(msg),
        }
    }
}

/// Attempts at drawing an unused id before giving up
const MAX_ID_ATTEMPTS: usize = 16;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Optional filters for listing offers
#[derive(Debug, Clone, Default)]
pub struct OfferFilter {
    pub status: Option<OfferStatus>,
    /// Offers targeting this segment
    pub segment_id: Option<String>,
}

impl OfferFilter {
    pub fn status(status: OfferStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn segment(segment_id: impl Into<String>) -> Self {
        Self {
            segment_id: Some(segment_id.into()),
            ..Default::default()
        }
    }

    fn matches(&self, offer: &Offer) -> bool {
        self.status.is_none_or(|s| offer.status == s)
            && self
                .segment_id
                .as_ref()
                .is_none_or(|id| offer.segment_ids.contains(id))
    }
}

#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn create(&self, data: OfferCreate) -> RepoResult<Offer>;
    /// Offers in insertion order
    async fn list(&self, filter: OfferFilter) -> RepoResult<Vec<Offer>>;
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Offer>>;
    async fn update(&self, id: i64, data: OfferUpdate) -> RepoResult<Offer>;
    /// Move a draft to active and record it as sent to every target, in one step
    ///
    /// Fails with [`RepoError::NotDraft`] when the offer has left draft.
    async fn mark_sent(&self, id: i64) -> RepoResult<Offer>;
}

/// Offer store kept in process memory
#[derive(Debug)]
pub struct InMemoryOfferRepository {
    offers: RwLock<Vec<Offer>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryOfferRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            offers: RwLock::new(Vec::new()),
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.offers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.read().is_empty()
    }
}

#[async_trait]
impl OfferRepository for InMemoryOfferRepository {
    async fn create(&self, data: OfferCreate) -> RepoResult<Offer> {
        let now = self.clock.now_millis();
        let mut offers = self.offers.write();

        // Ids minted in the same millisecond differ only in their random bits
        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| shared::util::snowflake_id_at(now))
            .find(|id| offers.iter().all(|o| o.id != *id))
            .ok_or_else(|| RepoError::Duplicate(format!("No free offer id at {}", now)))?;

        let offer = Offer {
            id,
            title: data.title,
            description: data.description,
            offer_type: data.offer_type,
            segment_ids: data.segment_ids,
            discount_value: data.discount_value,
            discount_type: data.discount_type,
            valid_from: data.valid_from,
            valid_until: data.valid_until,
            status: data.status.unwrap_or_default(),
            target_customers: data.target_customers,
            sent_count: 0,
            open_rate: 0.0,
            conversion_rate: 0.0,
            revenue: 0.0,
            created_at: now,
            updated_at: now,
        };
        offers.push(offer.clone());
        Ok(offer)
    }

    async fn list(&self, filter: OfferFilter) -> RepoResult<Vec<Offer>> {
        let offers = self.offers.read();
        Ok(offers.iter().filter(|o| filter.matches(o)).cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Offer>> {
        Ok(self.offers.read().iter().find(|o| o.id == id).cloned())
    }

    async fn update(&self, id: i64, data: OfferUpdate) -> RepoResult<Offer> {
        let now = self.clock.now_millis();
        let mut offers = self.offers.write();
        let offer = offers
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Offer {} not found", id)))?;

        if let Some(v) = data.title {
            offer.title = v;
        }
        if let Some(v) = data.description {
            offer.description = v;
        }
        if let Some(v) = data.offer_type {
            offer.offer_type = v;
        }
        if let Some(v) = data.segment_ids {
            offer.segment_ids = v;
        }
        if let Some(v) = data.discount_value {
            offer.discount_value = v;
        }
        if let Some(v) = data.discount_type {
            offer.discount_type = v;
        }
        if let Some(v) = data.valid_from {
            offer.valid_from = v;
        }
        if let Some(v) = data.valid_until {
            offer.valid_until = v;
        }
        if let Some(v) = data.status {
            offer.status = v;
        }
        if let Some(v) = data.target_customers {
            offer.target_customers = v;
        }
        if let Some(v) = data.sent_count {
            offer.sent_count = v;
        }
        if let Some(v) = data.open_rate {
            offer.open_rate = v;
        }
        if let Some(v) = data.conversion_rate {
            offer.conversion_rate = v;
        }
        if let Some(v) = data.revenue {
            offer.revenue = v;
        }
        offer.updated_at = now;

        Ok(offer.clone())
    }

    async fn mark_sent(&self, id: i64) -> RepoResult<Offer> {
        let now = self.clock.now_millis();
        // Status check and transition share one write lock
        let mut offers = self.offers.write();
        let offer = offers
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| RepoError::NotFound(format!("Offer {} not found", id)))?;

        if offer.status != OfferStatus::Draft {
            return Err(RepoError::NotDraft {
                id,
                status: offer.status,
            });
        }
        offer.status = OfferStatus::Active;
        offer.sent_count = offer.target_customers;
        offer.updated_at = now;

        Ok(offer.clone())
    }
}
