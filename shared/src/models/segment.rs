//! Segment & Customer Models

use serde::{Deserialize, Serialize};

use super::pricing_rule::PricingRule;

/// Customer segment (a cohort sharing behavioral traits)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub customer_count: u32,
    #[serde(default)]
    pub average_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing_rule: Option<PricingRule>,
}

impl Segment {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            customer_count: 0,
            average_value: 0.0,
            pricing_rule: None,
        }
    }

    pub fn with_rule(mut self, rule: PricingRule) -> Self {
        self.pricing_rule = Some(rule);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_customer_count(mut self, customer_count: u32) -> Self {
        self.customer_count = customer_count;
        self
    }
}

/// Customer record
///
/// Pricing only reads `id`; segment membership is resolved by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
}

impl Customer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            segment_id: None,
        }
    }
}
