//! Instant-Match Engine
//!
//! Weighted heuristic scoring of catering providers against user-supplied
//! people/budget constraints. The coefficients are hand-tuned and load-bearing
//! for output compatibility; do not adjust them.

use crate::models::CateringProvider;

/// Number of providers returned by both the scored and fallback paths
pub const RESULT_COUNT: usize = 3;

/// Parse a user-entered numeric field; `None` for anything non-numeric or <= 0
pub fn parse_positive(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok().filter(|n| *n > 0)
}

/// Heuristic fitness of one provider for the given head count and per-person
/// budget. Over-capacity and under-budget penalties are capped at 5 and 8;
/// budget headroom has unbounded upside.
pub fn score(provider: &CateringProvider, num_people: f64, budget_per_person: f64) -> f64 {
    let min_people = provider.min_people as f64;
    let max_people = provider.max_people as f64;
    let price = provider.price_per_person as f64;

    let mut score = 0.0;

    if num_people >= min_people {
        score += 5.0;
        if num_people <= max_people {
            score += 3.0;
        } else {
            score -= ((num_people - max_people) / 10.0).min(5.0);
        }
    } else {
        score -= 10.0;
    }

    if budget_per_person >= price {
        score += 5.0;
        score += (budget_per_person - price) / 50.0;
    } else {
        score -= ((price - budget_per_person) / 20.0).min(8.0);
    }

    score
}

/// Score every provider and return the top 3 by descending score. The sort is
/// stable, so catalog order breaks ties.
pub fn top_matches(
    providers: &[CateringProvider],
    num_people: i64,
    budget_per_person: i64,
) -> Vec<CateringProvider> {
    let mut scored: Vec<(f64, &CateringProvider)> = providers
        .iter()
        .map(|p| (score(p, num_people as f64, budget_per_person as f64), p))
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(RESULT_COUNT)
        .map(|(_, p)| p.clone())
        .collect()
}

/// Fallback for unusable numeric input: Fisher-Yates shuffle driven by `rand`
/// (values in [0,1)), then take 3. The component passes `js_sys::Math::random`.
pub fn fallback_matches(
    providers: &[CateringProvider],
    mut rand: impl FnMut() -> f64,
) -> Vec<CateringProvider> {
    let mut pool: Vec<CateringProvider> = providers.to_vec();
    for i in (1..pool.len()).rev() {
        let j = (rand() * (i + 1) as f64) as usize;
        pool.swap(i, j.min(i));
    }
    pool.truncate(RESULT_COUNT);
    pool
}

/// Match entry point: parse the raw form fields and pick the scored or the
/// randomized path. A parse failure is a policy decision, not an error.
pub fn recommend(
    providers: &[CateringProvider],
    people_text: &str,
    budget_text: &str,
    rand: impl FnMut() -> f64,
) -> Vec<CateringProvider> {
    match (parse_positive(people_text), parse_positive(budget_text)) {
        (Some(num_people), Some(budget)) => top_matches(providers, num_people, budget),
        _ => fallback_matches(providers, rand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CateringProvider;

    fn make_provider(id: &str, min_people: u32, max_people: u32, price: u32) -> CateringProvider {
        CateringProvider {
            id: id.to_string(),
            name: format!("Provider {}", id),
            specialties: vec!["點心".to_string()],
            min_people,
            max_people,
            price_per_person: price,
            delivery_time: "3 天前預訂".to_string(),
            issue: "庇護工坊".to_string(),
            description: "desc".to_string(),
            image: "img.jpg".to_string(),
        }
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("30"), Some(30));
        assert_eq!(parse_positive(" 200 "), Some(200));
        assert_eq!(parse_positive("abc"), None);
        // trailing non-digits are rejected, not truncated to a prefix
        assert_eq!(parse_positive("30人"), None);
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-5"), None);
        assert_eq!(parse_positive(""), None);
    }

    #[test]
    fn test_score_reference_case() {
        // people in range: +5 +3; budget over price: +5 + (200-150)/50 = 14.0
        let p = make_provider("a", 20, 50, 150);
        assert_eq!(score(&p, 30.0, 200.0), 14.0);
    }

    #[test]
    fn test_score_under_min_people() {
        let p = make_provider("a", 20, 50, 150);
        // -10 for under min, +5 +1 for budget: -4.0
        assert_eq!(score(&p, 10.0, 200.0), -4.0);
    }

    #[test]
    fn test_score_over_max_penalty_is_capped() {
        let p = make_provider("a", 10, 20, 100);
        // 200 people: +5, overflow (200-20)/10 = 18 capped at 5; budget exact: +5
        assert_eq!(score(&p, 200.0, 100.0), 5.0);
    }

    #[test]
    fn test_score_under_budget_penalty_is_capped() {
        let p = make_provider("a", 10, 50, 500);
        // budget 100: (500-100)/20 = 20 capped at 8; people in range +8
        assert_eq!(score(&p, 30.0, 100.0), 0.0);
    }

    #[test]
    fn test_top_matches_orders_by_score_desc() {
        let providers = vec![
            make_provider("cheap", 10, 100, 80),
            make_provider("tight", 40, 50, 190),
            make_provider("premium", 10, 100, 400),
            make_provider("fit", 20, 50, 150),
        ];
        let results = top_matches(&providers, 30, 200);

        assert_eq!(results.len(), 3);
        // cheap: 8 + 5 + 120/50 = 15.4; fit: 14.0; tight: -10 +5 +0.2; premium: 8 - 8
        assert_eq!(results[0].id, "cheap");
        assert_eq!(results[1].id, "fit");
        assert_eq!(results[2].id, "premium");
    }

    #[test]
    fn test_stable_sort_breaks_ties_by_catalog_order() {
        let providers = vec![
            make_provider("first", 20, 50, 150),
            make_provider("second", 20, 50, 150),
            make_provider("third", 20, 50, 150),
        ];
        let results = top_matches(&providers, 30, 200);
        let ids: Vec<&str> = results.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_fallback_returns_three_from_catalog() {
        let providers: Vec<CateringProvider> = (0..6)
            .map(|i| make_provider(&format!("p{}", i), 10, 50, 100))
            .collect();

        // deterministic "random" sequence
        let values = [0.9, 0.1, 0.5, 0.3, 0.7];
        let mut seq = values.iter().cycle();
        let results = fallback_matches(&providers, || *seq.next().unwrap());

        assert_eq!(results.len(), 3);
        for r in &results {
            assert!(providers.iter().any(|p| p.id == r.id));
        }
        // no duplicates
        assert!(results.iter().all(|r| results.iter().filter(|o| o.id == r.id).count() == 1));
    }

    #[test]
    fn test_recommend_takes_fallback_on_bad_input() {
        let providers: Vec<CateringProvider> = (0..5)
            .map(|i| make_provider(&format!("p{}", i), 10, 50, 100))
            .collect();

        let results = recommend(&providers, "abc", "200", || 0.42);
        assert_eq!(results.len(), RESULT_COUNT);

        let results = recommend(&providers, "30", "-1", || 0.42);
        assert_eq!(results.len(), RESULT_COUNT);
    }

    #[test]
    fn test_recommend_scores_on_valid_input() {
        let providers = vec![
            make_provider("far", 100, 200, 900),
            make_provider("fit", 20, 50, 150),
            make_provider("other", 10, 25, 120),
        ];
        let results = recommend(&providers, "30", "200", || 0.0);
        assert_eq!(results[0].id, "fit");
    }
}
