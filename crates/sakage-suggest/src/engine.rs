use std::cmp::Reverse;

use rust_decimal::Decimal;
use sakage_core::{MenuCatalog, MenuItem, Money};

use crate::error::SuggestError;
use crate::synonyms::synonyms;
use crate::tokens::tokenize;

/// Suggestions are capped at three items, budget or no budget.
pub const MAX_SUGGESTIONS: usize = 3;

/// Smallest budget the combination search accepts.
#[must_use]
pub fn min_budget() -> Money {
    Money::from_decimal(Decimal::from(10))
}

/// A ranked menu item. Ephemeral; never persisted.
#[derive(Debug, Clone)]
pub struct Suggestion {
    pub item: MenuItem,
    pub score: u32,
}

#[derive(Debug)]
struct Candidate<'a> {
    item: &'a MenuItem,
    score: u32,
    /// Position in catalog order, the tie-breaker everywhere.
    pos: usize,
}

/// Scores one item's search text against the keyword list.
///
/// +2 per keyword found verbatim, +1 per keyword matching only through its
/// synonym set. A keyword never earns both.
fn match_score(text: &str, keywords: &[String]) -> u32 {
    let mut score = 0;
    for keyword in keywords {
        if text.contains(keyword.as_str()) {
            score += 2;
        } else if synonyms(keyword).iter().any(|syn| text.contains(syn)) {
            score += 1;
        }
    }
    score
}

/// Ranks catalog items against free-text cravings, optionally under a budget.
///
/// Returns between zero and [`MAX_SUGGESTIONS`] items. With no usable
/// keywords every item scores 1 and ranking falls back to catalog order.
///
/// # Errors
///
/// - [`SuggestError::BudgetBelowMinimum`] when a budget under [`min_budget`]
///   is supplied.
/// - [`SuggestError::BudgetShortfall`] when no matching item or combination
///   fits the budget.
pub fn suggest(
    free_text: &str,
    budget: Option<Money>,
    dietary: Option<&str>,
    catalog: &MenuCatalog,
) -> Result<Vec<Suggestion>, SuggestError> {
    let mut keywords = tokenize(free_text);
    if let Some(dietary) = dietary {
        keywords.extend(tokenize(dietary));
    }

    let candidates: Vec<Candidate> = if keywords.is_empty() {
        // Match-everything fallback: rank by catalog order alone.
        catalog
            .items()
            .enumerate()
            .map(|(pos, item)| Candidate {
                item,
                score: 1,
                pos,
            })
            .collect()
    } else {
        catalog
            .items()
            .enumerate()
            .filter_map(|(pos, item)| {
                let score = match_score(&item.search_text(), &keywords);
                (score > 0).then_some(Candidate { item, score, pos })
            })
            .collect()
    };

    tracing::debug!(
        keywords = keywords.len(),
        candidates = candidates.len(),
        budget = budget.map(|b| b.to_string()),
        "scored catalog against craving"
    );

    match budget {
        None => Ok(top_by_score(candidates)),
        Some(budget) => best_combination(candidates, budget),
    }
}

/// Unconstrained mode: descending score, ties in catalog order, top three.
fn top_by_score(mut candidates: Vec<Candidate>) -> Vec<Suggestion> {
    candidates.sort_by_key(|c| (Reverse(c.score), c.pos));
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|c| Suggestion {
            item: c.item.clone(),
            score: c.score,
        })
        .collect()
}

/// Budget mode: greedy seeded search for the best-scoring affordable
/// combination, preferring higher spend on score ties.
fn best_combination(
    mut candidates: Vec<Candidate>,
    budget: Money,
) -> Result<Vec<Suggestion>, SuggestError> {
    let min = min_budget();
    if budget < min {
        return Err(SuggestError::BudgetBelowMinimum { min, given: budget });
    }

    candidates.sort_by_key(|c| (c.item.price, c.pos));

    let mut best: Option<(Vec<usize>, u32, Money)> = None;
    for seed in 0..candidates.len() {
        if candidates[seed].item.price > budget {
            // Candidates are price-ascending; nothing further fits either.
            break;
        }

        let mut picked = vec![seed];
        let mut spend = candidates[seed].item.price;
        let mut score = candidates[seed].score;
        for (i, candidate) in candidates.iter().enumerate() {
            if picked.len() >= MAX_SUGGESTIONS {
                break;
            }
            if i == seed || spend + candidate.item.price > budget {
                continue;
            }
            picked.push(i);
            spend += candidate.item.price;
            score += candidate.score;
        }

        let better = match &best {
            None => true,
            Some((_, best_score, best_spend)) => {
                score > *best_score || (score == *best_score && spend > *best_spend)
            }
        };
        if better {
            best = Some((picked, score, spend));
        }
    }

    // No seed ran at all: the cheapest candidate already exceeds the budget.
    let Some((picked, _, _)) = best else {
        return Err(SuggestError::BudgetShortfall(budget));
    };

    let mut chosen: Vec<&Candidate> = picked.iter().map(|&i| &candidates[i]).collect();
    chosen.sort_by_key(|c| (Reverse(c.score), c.pos));
    Ok(chosen
        .into_iter()
        .map(|c| Suggestion {
            item: c.item.clone(),
            score: c.score,
        })
        .collect())
}
