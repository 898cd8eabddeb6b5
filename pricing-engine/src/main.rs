use std::sync::Arc;

use anyhow::Context;
use chrono::Duration;
use pricing_engine::catalog::sample_segments;
use pricing_engine::{
    InMemoryOfferRepository, OfferFilter, OfferService, PricingRuleEvaluator, SystemClock,
    calculate_revenue_impact, compare_prices_across_segments, pricing_overview,
    segment_pricing_summary, setup_environment, validate_pricing_eligibility,
};
use shared::models::{Customer, DiscountType, OfferCreate, OfferType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment().context("Failed to set up environment")?;

    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        "Pricing preview starting"
    );

    let clock = Arc::new(SystemClock);
    let evaluator = PricingRuleEvaluator::from_config(&config, clock.clone());
    let segments = sample_segments();

    // 2. 概览
    let overview = pricing_overview(&segments);
    tracing::info!("Overview: {}", serde_json::to_string(&overview)?);

    // 3. 分群定价
    let customer = Customer::new("preview-customer");
    for segment in &segments {
        let summary = segment_pricing_summary(segment);
        let price = evaluator.calculate_price(
            config.preview_base_price,
            &customer,
            segment,
            "sample-product",
        )?;
        let eligibility =
            validate_pricing_eligibility(&customer, segment, config.preview_average_order_value)?;
        let impact = calculate_revenue_impact(
            segment,
            config.preview_average_order_value,
            config.preview_estimated_orders,
        )?;

        tracing::info!(
            segment = %segment.name,
            strategy = %summary.strategy,
            adjustment = %summary.price_adjustment,
            adjusted_price = price.adjusted_price,
            reason = %price.reason,
            eligible = eligibility.eligible,
            revenue_change = impact.revenue_change,
            "Segment priced"
        );
    }

    // 4. 跨分群比较
    let comparison = compare_prices_across_segments(config.preview_base_price, &segments, None)?;
    tracing::info!("Comparison: {}", serde_json::to_string_pretty(&comparison)?);

    // 5. 营销活动
    let offers = OfferService::new(Arc::new(InMemoryOfferRepository::new(clock)));
    let today = chrono::Utc::now().date_naive();
    let offer = offers
        .create_offer(OfferCreate {
            title: "Weekend Flash Sale".to_string(),
            description: "Limited-time deal for impulse buyers".to_string(),
            offer_type: OfferType::FlashSale,
            segment_ids: vec!["seg-1".to_string()],
            discount_value: 15.0,
            discount_type: DiscountType::Percentage,
            valid_from: today,
            valid_until: today + Duration::days(3),
            status: None,
            target_customers: segments[0].customer_count,
        })
        .await?;
    offers.send_offer(offer.id).await?;

    let active = offers.list_offers(OfferFilter::default()).await?;
    tracing::info!("Offers: {}", serde_json::to_string_pretty(&active)?);

    Ok(())
}
