//! Offer Service
//!
//! Validates offer payloads and drives the draft -> active transition.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::{DiscountType, Offer, OfferCreate, OfferUpdate};

use super::repository::{OfferFilter, OfferRepository, RepoError};
use crate::utils::validation::{
    MAX_DESCRIPTION_LEN, MAX_SEGMENT_ID_LEN, MAX_TITLE_LEN, validate_required_text,
    validate_text_len,
};
use crate::utils::{AppError, AppResult, ErrorCode};

#[derive(Clone)]
pub struct OfferService {
    repo: Arc<dyn OfferRepository>,
}

impl std::fmt::Debug for OfferService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfferService").finish_non_exhaustive()
    }
}

impl OfferService {
    pub fn new(repo: Arc<dyn OfferRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_offer(&self, data: OfferCreate) -> AppResult<Offer> {
        validate_required_text(&data.title, "title", MAX_TITLE_LEN)?;
        validate_text_len(&data.description, "description", MAX_DESCRIPTION_LEN)?;
        validate_segment_ids(&data.segment_ids)?;
        validate_discount(data.discount_value, data.discount_type)?;
        validate_window(data.valid_from, data.valid_until)?;

        let offer = self.repo.create(data).await?;
        tracing::info!(offer_id = offer.id, title = %offer.title, "Offer created");
        Ok(offer)
    }

    pub async fn list_offers(&self, filter: OfferFilter) -> AppResult<Vec<Offer>> {
        Ok(self.repo.list(filter).await?)
    }

    pub async fn get_offer(&self, id: i64) -> AppResult<Offer> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| offer_not_found(id))
    }

    /// Partial update; the merged offer must still be valid
    pub async fn update_offer(&self, id: i64, data: OfferUpdate) -> AppResult<Offer> {
        let existing = self.get_offer(id).await?;

        if let Some(title) = &data.title {
            validate_required_text(title, "title", MAX_TITLE_LEN)?;
        }
        if let Some(description) = &data.description {
            validate_text_len(description, "description", MAX_DESCRIPTION_LEN)?;
        }
        if let Some(segment_ids) = &data.segment_ids {
            validate_segment_ids(segment_ids)?;
        }
        validate_discount(
            data.discount_value.unwrap_or(existing.discount_value),
            data.discount_type.unwrap_or(existing.discount_type),
        )?;
        validate_window(
            data.valid_from.unwrap_or(existing.valid_from),
            data.valid_until.unwrap_or(existing.valid_until),
        )?;

        let offer = self.repo.update(id, data).await?;
        tracing::info!(offer_id = id, "Offer updated");
        Ok(offer)
    }

    /// Send a draft offer to its target customers
    ///
    /// Concurrent sends of the same draft succeed at most once.
    pub async fn send_offer(&self, id: i64) -> AppResult<Offer> {
        let offer = self.repo.mark_sent(id).await.map_err(|e| match e {
            RepoError::NotFound(_) => offer_not_found(id),
            RepoError::NotDraft { id, status } => {
                tracing::warn!(offer_id = id, ?status, "Send rejected");
                RepoError::NotDraft { id, status }.into()
            }
            other => other.into(),
        })?;
        tracing::info!(offer_id = id, sent_count = offer.sent_count, "Offer sent");
        Ok(offer)
    }
}

fn offer_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::OfferNotFound, format!("Offer {} not found", id))
        .with_detail("id", id)
}

fn validate_segment_ids(segment_ids: &[String]) -> AppResult<()> {
    if segment_ids.is_empty() {
        return Err(AppError::validation("An offer must target at least one segment")
            .with_detail("field", "segmentIds"));
    }
    for id in segment_ids {
        validate_required_text(id, "segmentIds", MAX_SEGMENT_ID_LEN)?;
    }
    Ok(())
}

fn validate_discount(value: f64, discount_type: DiscountType) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidOfferDiscount,
            format!("discountValue must be a finite, non-negative number, got {value}"),
        ));
    }
    if discount_type == DiscountType::Percentage && value > 100.0 {
        return Err(AppError::with_message(
            ErrorCode::InvalidOfferDiscount,
            format!("Percentage discount cannot exceed 100, got {value}"),
        ));
    }
    Ok(())
}

fn validate_window(valid_from: NaiveDate, valid_until: NaiveDate) -> AppResult<()> {
    if valid_from > valid_until {
        return Err(AppError::with_message(
            ErrorCode::InvalidOfferWindow,
            format!("validFrom {valid_from} is after validUntil {valid_until}"),
        ));
    }
    Ok(())
}
