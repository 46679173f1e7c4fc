use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A rating for one category. Input is stepped to whole numbers, but stored
/// history may carry fractional values, so everything downstream works on reals.
pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Health,
    Work,
    Hobby,
    Relationships,
    Learning,
}

impl Category {
    /// Declared display order shared by every view and by the analyzer.
    pub const ALL: [Category; 5] = [
        Category::Health,
        Category::Work,
        Category::Hobby,
        Category::Relationships,
        Category::Learning,
    ];

    /// Stored field name.
    pub fn key(self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Work => "work",
            Category::Hobby => "hobby",
            Category::Relationships => "relationships",
            Category::Learning => "learning",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Work => "Work",
            Category::Hobby => "Hobby",
            Category::Relationships => "Relationships",
            Category::Learning => "Learning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One score per category. The struct shape rules out missing or extra entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub health: Score,
    pub work: Score,
    pub hobby: Score,
    pub relationships: Score,
    pub learning: Score,
}

impl ScoreSet {
    pub fn uniform(score: Score) -> Self {
        Self {
            health: score,
            work: score,
            hobby: score,
            relationships: score,
            learning: score,
        }
    }

    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::Health => self.health,
            Category::Work => self.work,
            Category::Hobby => self.hobby,
            Category::Relationships => self.relationships,
            Category::Learning => self.learning,
        }
    }

    #[cfg(test)]
    pub fn with(mut self, category: Category, score: Score) -> Self {
        match category {
            Category::Health => self.health = score,
            Category::Work => self.work = score,
            Category::Hobby => self.hobby = score,
            Category::Relationships => self.relationships = score,
            Category::Learning => self.learning = score,
        }
        self
    }

    /// Scores in declared category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Score)> + '_ {
        Category::ALL.iter().map(move |&category| (category, self.get(category)))
    }
}

impl Default for ScoreSet {
    fn default() -> Self {
        Self::uniform(5.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub scores: ScoreSet,
    pub date: String,
    pub timestamp: i64,
}

impl AssessmentRecord {
    pub fn new(scores: ScoreSet, taken_at: DateTime<Utc>) -> Self {
        Self {
            scores,
            date: taken_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            timestamp: taken_at.timestamp_millis(),
        }
    }

    pub fn taken_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.timestamp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdviceItem {
    pub category: Category,
    pub score: Score,
    pub level: Level,
    pub advice: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceLevel {
    Excellent,
    Good,
    NeedsImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceVerdict {
    pub level: BalanceLevel,
    pub message: &'static str,
    pub average: f64,
    pub deviation: f64,
}

#[derive(Debug, Clone)]
pub struct HistorySummary {
    pub count: usize,
    pub first_date: Option<DateTime<Utc>>,
    pub latest_date: Option<DateTime<Utc>>,
}
