//! Sample segment catalog
//!
//! The six dashboard segments with representative pricing rules. Used by the
//! `pricing-preview` binary and the integration tests.

use shared::models::{PricingConditions, PricingRule, PricingStrategy, Segment};

use crate::utils::{AppError, AppResult, ErrorCode};

fn segment(
    id: &str,
    name: &str,
    description: &str,
    customer_count: u32,
    average_value: f64,
    pricing_rule: Option<PricingRule>,
) -> Segment {
    Segment {
        average_value,
        pricing_rule,
        ..Segment::new(id, name)
            .with_description(description)
            .with_customer_count(customer_count)
    }
}

pub fn sample_segments() -> Vec<Segment> {
    vec![
        segment(
            "seg-1",
            "Impulsive Emotional Buyers",
            "High-frequency buyers driven by emotions and impulse purchases",
            1245,
            3250.0,
            Some(
                PricingRule::new(PricingStrategy::Dynamic, 0.95, 25.0, 10.0)
                    .with_conditions(PricingConditions {
                        time_based_adjustment: true,
                        ..Default::default()
                    })
                    .with_description("Flash sales during peak shopping hours"),
            ),
        ),
        segment(
            "seg-2",
            "Price-Sensitive Anxious Buyers",
            "Careful shoppers who compare prices and seek best deals",
            892,
            1850.0,
            Some(
                PricingRule::new(PricingStrategy::Discount, 0.85, 20.0, 5.0)
                    .with_conditions(PricingConditions {
                        min_order_value: Some(50.0),
                        ..Default::default()
                    })
                    .with_description("Segment discount on qualifying orders"),
            ),
        ),
        segment(
            "seg-3",
            "Brand-Loyal Confident Buyers",
            "Repeat customers with strong brand loyalty and high lifetime value",
            567,
            5420.0,
            Some(
                PricingRule::new(PricingStrategy::Loyalty, 1.0, 10.0, 0.0)
                    .with_description("Standard price with double rewards points"),
            ),
        ),
        segment(
            "seg-4",
            "Curious Browsers",
            "Window shoppers with high engagement but low conversion",
            2134,
            450.0,
            None,
        ),
        segment(
            "seg-5",
            "Luxury Seekers",
            "Premium customers seeking high-end products and experiences",
            234,
            8750.0,
            Some(
                PricingRule::new(PricingStrategy::Premium, 1.2, 0.0, 100.0)
                    .with_conditions(PricingConditions {
                        inventory_based_adjustment: true,
                        ..Default::default()
                    })
                    .with_description("Exclusive pricing with white-glove service"),
            ),
        ),
        segment(
            "seg-6",
            "Frustrated At-Risk Customers",
            "Previously active customers showing signs of churn",
            423,
            1200.0,
            Some(
                PricingRule::new(PricingStrategy::Discount, 0.8, 30.0, 5.0)
                    .with_conditions(PricingConditions {
                        max_order_value: Some(2000.0),
                        ..Default::default()
                    })
                    .with_description("Win-back discount for churning customers"),
            ),
        ),
    ]
}

/// Look up a sample segment by id
pub fn find_segment(id: &str) -> AppResult<Segment> {
    sample_segments()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| {
            AppError::with_message(ErrorCode::SegmentNotFound, format!("Segment {} not found", id))
                .with_detail("id", id)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_segment() {
        assert_eq!(find_segment("seg-3").unwrap().name, "Brand-Loyal Confident Buyers");
        let err = find_segment("seg-99").unwrap_err();
        assert_eq!(err.code, ErrorCode::SegmentNotFound);
    }

    #[test]
    fn test_sample_segments_are_valid() {
        let segments = sample_segments();
        assert_eq!(segments.len(), 6);
        for segment in &segments {
            if let Some(rule) = &segment.pricing_rule {
                assert!(rule.validate().is_ok(), "{} has an invalid rule", segment.id);
            }
        }
        assert_eq!(segments[4].customer_count, 234);
        assert_eq!(segments[4].average_value, 8750.0);
    }
}
