use rand::seq::SliceRandom;
use rand::Rng;

use crate::advice;
use crate::models::{
    AdviceItem, AssessmentRecord, BalanceLevel, BalanceVerdict, Category, HistorySummary, Level,
    Score, ScoreSet,
};

const EXCELLENT_MAX_DEVIATION: f64 = 1.5;
const GOOD_MAX_DEVIATION: f64 = 2.5;

const EXCELLENT_MESSAGE: &str = "Your life is very well balanced!";
const GOOD_MESSAGE: &str = "Mostly balanced. A few small adjustments would help.";
const NEEDS_IMPROVEMENT_MESSAGE: &str =
    "Time to rebalance. Pay special attention to your lowest categories.";

pub fn classify_level(score: Score) -> Level {
    if score <= 4.0 {
        Level::Low
    } else if score <= 7.0 {
        Level::Medium
    } else {
        Level::High
    }
}

/// One item per category, lowest score first. Ties keep declared category order.
pub fn generate_advice<R: Rng + ?Sized>(scores: &ScoreSet, rng: &mut R) -> Vec<AdviceItem> {
    let mut items: Vec<AdviceItem> = scores
        .iter()
        .map(|(category, score)| {
            let level = classify_level(score);
            let advice = advice::candidates(category, level)
                .choose(&mut *rng)
                .copied()
                .unwrap_or_default();
            AdviceItem {
                category,
                score,
                level,
                advice,
            }
        })
        .collect();

    items.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal));
    items
}

/// Balance is judged by the population standard deviation across categories,
/// not by the average.
pub fn overall_balance(scores: &ScoreSet) -> BalanceVerdict {
    let average = average_score(scores);
    let variance = scores
        .iter()
        .map(|(_, score)| (score - average).powi(2))
        .sum::<f64>()
        / Category::ALL.len() as f64;
    let deviation = variance.sqrt();

    let (level, message) = if deviation <= EXCELLENT_MAX_DEVIATION {
        (BalanceLevel::Excellent, EXCELLENT_MESSAGE)
    } else if deviation <= GOOD_MAX_DEVIATION {
        (BalanceLevel::Good, GOOD_MESSAGE)
    } else {
        (BalanceLevel::NeedsImprovement, NEEDS_IMPROVEMENT_MESSAGE)
    };

    BalanceVerdict {
        level,
        message,
        average: round_one_decimal(average),
        deviation: round_one_decimal(deviation),
    }
}

pub fn average_score(scores: &ScoreSet) -> f64 {
    scores.iter().map(|(_, score)| score).sum::<f64>() / Category::ALL.len() as f64
}

/// Category most in need of attention. The first in declared order wins ties.
pub fn lowest_category(scores: &ScoreSet) -> Category {
    let mut lowest = (Category::ALL[0], scores.get(Category::ALL[0]));
    for (category, score) in scores.iter().skip(1) {
        if score < lowest.1 {
            lowest = (category, score);
        }
    }
    lowest.0
}

pub fn summarize_history(history: &[AssessmentRecord]) -> HistorySummary {
    HistorySummary {
        count: history.len(),
        first_date: history.first().and_then(AssessmentRecord::taken_at),
        latest_date: history.last().and_then(AssessmentRecord::taken_at),
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
