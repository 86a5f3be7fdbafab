use serde::Serialize;

use crate::model::{BuildVerdict, Category, Component, ComparisonVerdict, RankedComponent};

#[derive(Serialize)]
struct RankingReport<'a> {
    category: Category,
    ranking: &'a [RankedComponent],
}

#[derive(Serialize)]
struct ListingReport<'a> {
    category: Category,
    components: &'a [Component],
}

pub fn render_verdict_json(verdict: &ComparisonVerdict) -> serde_json::Result<String> {
    serde_json::to_string_pretty(verdict)
}

pub fn render_build_json(verdict: &BuildVerdict) -> serde_json::Result<String> {
    serde_json::to_string_pretty(verdict)
}

pub fn render_ranking_json(
    category: Category,
    ranking: &[RankedComponent],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&RankingReport { category, ranking })
}

pub fn render_listing_json(
    category: Category,
    components: &[Component],
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ListingReport {
        category,
        components,
    })
}
