use crate::domain::nutrition::entities::FoodCandidate;

/// Textual closeness between a query and a candidate description, as an
/// integer in [0, 100]. Implementations must be deterministic.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, a: &str, b: &str) -> u8;
}

/// Jaro-Winkler over whitespace-sorted tokens, so word order does not
/// penalize ("mutton biryani" vs "Biryani, mutton").
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenSortRatio;

impl SimilarityScorer for TokenSortRatio {
    fn score(&self, a: &str, b: &str) -> u8 {
        let a = sort_tokens(a);
        let b = sort_tokens(b);

        (strsim::jaro_winkler(&a, &b) * 100.0).round() as u8
    }
}

fn sort_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Picks the candidate whose description scores highest against the query,
/// or `None` when nothing reaches the threshold. Comparison is
/// case-insensitive; on an exact score tie the earlier candidate wins.
pub fn select_best_food<'a>(
    candidates: &'a [FoodCandidate],
    query: &str,
    threshold: u8,
) -> Option<&'a FoodCandidate> {
    select_best_food_with(&TokenSortRatio, candidates, query, threshold)
}

pub fn select_best_food_with<'a, S: SimilarityScorer>(
    scorer: &S,
    candidates: &'a [FoodCandidate],
    query: &str,
    threshold: u8,
) -> Option<&'a FoodCandidate> {
    let query = query.to_lowercase();

    let mut best: Option<&FoodCandidate> = None;
    let mut best_score = 0u8;
    for candidate in candidates {
        let score = scorer.score(&query, &candidate.description.to_lowercase());
        if score > best_score && score >= threshold {
            best_score = score;
            best = Some(candidate);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(description: &str, fdc_id: i64) -> FoodCandidate {
        FoodCandidate {
            description: description.to_string(),
            fdc_id,
            raw_nutrients: Vec::new(),
        }
    }

    fn fruit_candidates() -> Vec<FoodCandidate> {
        vec![
            candidate("Apple, raw", 1),
            candidate("Banana, raw", 2),
            candidate("Orange, raw", 3),
        ]
    }

    #[test]
    fn exact_query_selects_matching_candidate() {
        let candidates = fruit_candidates();
        let best = select_best_food(&candidates, "Apple", 60).unwrap();
        assert_eq!(best.description, "Apple, raw");
    }

    #[test]
    fn typo_query_still_matches() {
        let candidates = fruit_candidates();
        let best = select_best_food(&candidates, "Aple", 70).unwrap();
        assert_eq!(best.description, "Apple, raw");
    }

    #[test]
    fn unrelated_query_returns_none() {
        let candidates = fruit_candidates();
        assert!(select_best_food(&candidates, "Pizza", 80).is_none());
    }

    #[test]
    fn empty_candidate_list_returns_none() {
        for threshold in [0, 50, 100] {
            assert!(select_best_food(&[], "anything", threshold).is_none());
        }
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let candidates = vec![candidate("APPLE, RAW", 1), candidate("Banana, raw", 2)];
        let best = select_best_food(&candidates, "apple", 60).unwrap();
        assert_eq!(best.description, "APPLE, RAW");
    }

    #[test]
    fn reordered_tokens_match() {
        let candidates = vec![
            candidate("Biryani, mutton", 1),
            candidate("Chicken biryani", 2),
            candidate("Pizza, cheese", 3),
        ];
        let best = select_best_food(&candidates, "mutton biryani", 60).unwrap();
        assert_eq!(best.description, "Biryani, mutton");
    }

    #[test]
    fn exact_score_tie_keeps_earliest_candidate() {
        let candidates = vec![candidate("Apple, raw", 1), candidate("Apple, raw", 2)];
        let best = select_best_food(&candidates, "apple, raw", 60).unwrap();
        assert_eq!(best.fdc_id, 1);
    }

    #[test]
    fn selected_candidate_always_clears_threshold() {
        let scorer = TokenSortRatio;
        let candidates = fruit_candidates();
        for query in ["Apple", "Aple", "banana", "grape", "Pizza"] {
            for threshold in [0, 40, 70, 90, 100] {
                if let Some(best) = select_best_food(&candidates, query, threshold) {
                    let score = scorer
                        .score(&query.to_lowercase(), &best.description.to_lowercase());
                    assert!(score >= threshold, "{query} at {threshold} scored {score}");
                }
            }
        }
    }

    #[test]
    fn identical_strings_score_one_hundred() {
        let scorer = TokenSortRatio;
        assert_eq!(scorer.score("apple, raw", "apple, raw"), 100);
    }
}
