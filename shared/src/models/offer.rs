//! Marketing Offer Models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Offer type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OfferType {
    Discount,
    FlashSale,
    VipReward,
    FreeShipping,
    Bundle,
    ExclusiveAccess,
}

/// How `discount_value` is interpreted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// discount_value=15 means 15% off
    Percentage,
    /// discount_value=5.00 means $5 off
    Fixed,
}

/// Offer lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    #[default]
    Draft,
    Active,
    Scheduled,
    Expired,
}

/// Personalized marketing offer targeting one or more segments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub segment_ids: Vec<String>,
    pub discount_value: f64,
    pub discount_type: DiscountType,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    pub status: OfferStatus,
    pub target_customers: u32,
    pub sent_count: u32,
    /// Fraction of recipients who opened the offer (0.0-1.0)
    pub open_rate: f64,
    /// Fraction of recipients who converted (0.0-1.0)
    pub conversion_rate: f64,
    pub revenue: f64,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis
    pub updated_at: i64,
}

/// Create offer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferCreate {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub segment_ids: Vec<String>,
    pub discount_value: f64,
    pub discount_type: DiscountType,
    pub valid_from: NaiveDate,
    pub valid_until: NaiveDate,
    #[serde(default)]
    pub status: Option<OfferStatus>,
    #[serde(default)]
    pub target_customers: u32,
}

/// Update offer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub offer_type: Option<OfferType>,
    pub segment_ids: Option<Vec<String>>,
    pub discount_value: Option<f64>,
    pub discount_type: Option<DiscountType>,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub status: Option<OfferStatus>,
    pub target_customers: Option<u32>,
    pub sent_count: Option<u32>,
    pub open_rate: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub revenue: Option<f64>,
}
