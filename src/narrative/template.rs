use crate::model::{
    BuildVerdict, CandidateDetail, Category, Component, ComparisonVerdict, Need, Winner,
};
use crate::narrative::{NarrativeError, NarrativeGenerator};

/// Deterministic narrator that phrases the term drivers of a verdict.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrative;

impl TemplateNarrative {
    pub fn new() -> Self {
        Self
    }
}

impl NarrativeGenerator for TemplateNarrative {
    fn summarize(
        &self,
        category: Category,
        _first: &Component,
        _second: &Component,
        verdict: &ComparisonVerdict,
    ) -> Result<String, NarrativeError> {
        let [a, b] = &verdict.comparison;
        let text = match &verdict.winner {
            Winner::Tie => tie_text(category, a, b),
            Winner::Candidate(name) => {
                let (w, l) = if a.name() == name.as_str() {
                    (a, b)
                } else {
                    (b, a)
                };
                win_text(category, w, l)
            }
        };
        Ok(text)
    }

    fn summarize_build(&self, verdict: &BuildVerdict) -> Result<String, NarrativeError> {
        let [a, b] = &verdict.builds;
        let total = verdict.categories.len();
        let usage = verdict.need.map(Need::name).unwrap_or("general");
        let text = match &verdict.winner {
            Winner::Tie => format!(
                "{} and {} are evenly matched for {} use (build index {:.2}).",
                a.name, b.name, usage, a.build_index
            ),
            Winner::Candidate(name) => {
                let (w, l) = if &a.name == name { (a, b) } else { (b, a) };
                format!(
                    "{} is the stronger build for {} use (build index {:.2} vs {:.2}), ahead in {} of {} categories.",
                    w.name, usage, w.build_index, l.build_index, w.category_wins, total
                )
            }
        };
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "template"
    }

    fn is_available(&self) -> bool {
        true
    }
}

fn win_text(category: Category, w: &CandidateDetail, l: &CandidateDetail) -> String {
    let mut out = format!(
        "Pick the {} {} (index {:.2} vs {:.2} for {}).",
        w.name(),
        category.label(),
        w.performance_index,
        l.performance_index,
        l.name()
    );
    if let Some((term, ws, ls)) = largest_lead(w, l) {
        out.push_str(&format!(
            " Its biggest advantage is {} ({:.0} vs {:.0} points).",
            display_term(&term),
            ws,
            ls
        ));
    }
    match largest_lead(l, w) {
        Some((term, ls, ws)) => out.push_str(&format!(
            " {} still leads on {} ({:.0} vs {:.0}).",
            l.name(),
            display_term(&term),
            ls,
            ws
        )),
        None => out.push_str(&format!(
            " It matches or beats {} on every measured term.",
            l.name()
        )),
    }
    out
}

fn tie_text(category: Category, a: &CandidateDetail, b: &CandidateDetail) -> String {
    let mut out = format!(
        "The {} and {} are evenly matched {}s (index {:.2}).",
        a.name(),
        b.name(),
        category.label(),
        a.performance_index
    );
    if let (Some((ta, _, _)), Some((tb, _, _))) = (largest_lead(a, b), largest_lead(b, a)) {
        out.push_str(&format!(
            " {} is stronger on {}, {} on {}.",
            a.name(),
            display_term(&ta),
            b.name(),
            display_term(&tb)
        ));
    }
    out
}

/// Term where `x` beats `y` by the widest weighted margin.
fn largest_lead(x: &CandidateDetail, y: &CandidateDetail) -> Option<(String, f64, f64)> {
    let mut best: Option<(String, f64, f64, f64)> = None;
    for dx in &x.drivers {
        let Some(dy) = y.driver(&dx.term) else {
            continue;
        };
        let margin = dx.contribution - dy.contribution;
        if margin <= 0.0 {
            continue;
        }
        let better = match &best {
            Some((term, _, _, m)) => margin > *m || (margin == *m && dx.term < *term),
            None => true,
        };
        if better {
            best = Some((dx.term.clone(), dx.score, dy.score, margin));
        }
    }
    best.map(|(term, xs, ys, _)| (term, xs, ys))
}

fn display_term(term: &str) -> String {
    term.replace('_', " ")
}
