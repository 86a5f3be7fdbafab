use crate::model::{
    AttributeValue, BuildVerdict, CandidateDetail, Category, Component, ComparisonVerdict,
    RankedComponent, TermScore,
};
use crate::report::{format_index, format_score};

pub fn render_verdict_text(verdict: &ComparisonVerdict) -> String {
    let mut out = String::new();
    let title = format!("{} comparison", verdict.category.label());
    out.push_str(&format!("{}\n{}\n\n", title, "=".repeat(title.len())));
    out.push_str(&format!("Winner: {}\n", verdict.winner.as_str()));
    out.push_str(&format!("Reasoning: {}\n", verdict.reasoning));
    if let Some(text) = &verdict.narrative {
        out.push_str(&format!("Narrative: {}\n", text));
    }
    out.push('\n');
    for detail in &verdict.comparison {
        push_candidate(&mut out, detail);
    }
    out
}

pub fn render_build_text(verdict: &BuildVerdict) -> String {
    let mut out = String::new();
    out.push_str("Build comparison\n================\n\n");
    match verdict.need {
        Some(need) => out.push_str(&format!("Need: {} ({})\n", need, need.description())),
        None => out.push_str("Need: custom weights\n"),
    }
    out.push_str(&format!(
        "Weights: cpu={}, gpu={}, ram={}\n",
        format_index(verdict.weights.cpu),
        format_index(verdict.weights.gpu),
        format_index(verdict.weights.ram)
    ));
    out.push_str(&format!("Winner: {}\n", verdict.winner.as_str()));
    out.push_str(&format!("Reasoning: {}\n", verdict.reasoning));
    if let Some(text) = &verdict.narrative {
        out.push_str(&format!("Narrative: {}\n", text));
    }
    out.push('\n');

    for build in &verdict.builds {
        out.push_str(&format!(
            "{}: build index {}, categories won {}/{}\n",
            build.name,
            format_index(build.build_index),
            build.category_wins,
            verdict.categories.len()
        ));
    }
    out.push('\n');

    for category in &verdict.categories {
        out.push_str(&render_verdict_text(category));
        out.push('\n');
    }
    out
}

pub fn render_ranking_text(category: Category, ranking: &[RankedComponent]) -> String {
    let mut out = String::new();
    let title = format!("{} ranking", category.label());
    out.push_str(&format!("{}\n{}\n", title, "=".repeat(title.len())));
    let width = ranking
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);
    for r in ranking {
        let top = r
            .drivers
            .first()
            .map(|d| format!("  (top: {})", d.term))
            .unwrap_or_default();
        out.push_str(&format!(
            "{:>3}. {:<width$}  {:>6}{}\n",
            r.rank,
            r.name,
            format_index(r.performance_index),
            top,
            width = width
        ));
    }
    out
}

pub fn render_listing_text(category: Category, components: &[Component]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} catalog ({} entries)\n",
        category.label(),
        components.len()
    ));
    for component in components {
        out.push_str(&format!("- {}\n", component.name()));
        out.push_str(&format!("    {}\n", attribute_line(component)));
    }
    out
}

fn push_candidate(out: &mut String, detail: &CandidateDetail) {
    out.push_str(&format!(
        "{}  index {}\n",
        detail.name(),
        format_index(detail.performance_index)
    ));
    out.push_str(&format!("    {}\n", attribute_line(&detail.component)));
    for d in &detail.drivers {
        out.push_str(&format!("    {}\n", driver_line(d)));
    }
    out.push('\n');
}

fn driver_line(d: &TermScore) -> String {
    format!(
        "{:<18} {:>5} x {} = {}",
        d.term,
        format_score(d.score),
        format_index(d.weight),
        format_index(d.contribution)
    )
}

fn attribute_line(component: &Component) -> String {
    component
        .category()
        .attributes()
        .iter()
        .filter_map(|(name, _)| {
            component.attribute(name).map(|v| match v {
                AttributeValue::Number(n) => format!("{}={}", name, n),
                AttributeValue::Flag(b) => format!("{}={}", name, b),
                AttributeValue::Label(s) => format!("{}={}", name, s),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
