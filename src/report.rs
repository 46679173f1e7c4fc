use std::fmt::Write;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local, Utc};

use crate::balance;
use crate::models::{AdviceItem, AssessmentRecord, BalanceVerdict, Score};

const BAR_WIDTH: usize = 10;

pub struct Results<'a> {
    pub record: &'a AssessmentRecord,
    pub verdict: &'a BalanceVerdict,
    pub advice: &'a [AdviceItem],
}

pub fn render_results(results: Option<&Results<'_>>) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Life Balance Results");
    write_results(&mut output, results);
    output
}

pub fn render_history(history: &[AssessmentRecord]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Assessment History");
    write_history(&mut output, history);
    output
}

pub fn build_report(
    results: Option<&Results<'_>>,
    history: &[AssessmentRecord],
    generated_at: DateTime<Utc>,
) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Life Balance Report");
    let _ = writeln!(output, "Generated {}", format_date(Some(generated_at)));
    write_results(&mut output, results);
    let _ = writeln!(output);
    let _ = writeln!(output, "## History");
    write_history(&mut output, history);
    output
}

pub fn write_report(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

fn write_results(output: &mut String, results: Option<&Results<'_>>) {
    let Some(results) = results else {
        let _ = writeln!(output, "No results yet. Run `assess` to record your first check-in.");
        return;
    };

    let _ = writeln!(output, "Assessed on {}", format_date(results.record.taken_at()));
    let _ = writeln!(output);
    let _ = writeln!(output, "## Overall Balance");
    let _ = writeln!(output, "{}", results.verdict.message);
    let _ = writeln!(
        output,
        "Average score: {}/10 (spread {})",
        results.verdict.average, results.verdict.deviation
    );

    let _ = writeln!(output);
    let _ = writeln!(output, "## Scores");
    for (category, score) in results.record.scores.iter() {
        let _ = writeln!(
            output,
            "- {:<13} {} {}/10",
            category.label(),
            score_bar(score),
            whole(score)
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Advice");
    for item in results.advice {
        let _ = writeln!(
            output,
            "- {} ({}/10, {}): {}",
            item.category,
            whole(item.score),
            item.level,
            item.advice
        );
    }
}

fn write_history(output: &mut String, history: &[AssessmentRecord]) {
    if history.is_empty() {
        let _ = writeln!(output, "No assessment history yet.");
        return;
    }

    for record in history.iter().rev() {
        let _ = writeln!(
            output,
            "- {} average {:.1}/10, focus on {}",
            format_date(record.taken_at()),
            balance::average_score(&record.scores),
            balance::lowest_category(&record.scores)
        );
        let scores: Vec<String> = record
            .scores
            .iter()
            .map(|(category, score)| format!("{} {}", category.label(), whole(score)))
            .collect();
        let _ = writeln!(output, "  {}", scores.join(" | "));
    }

    let summary = balance::summarize_history(history);
    let _ = writeln!(output);
    let _ = writeln!(output, "Total assessments: {}", summary.count);
    let _ = writeln!(output, "First assessment: {}", format_date(summary.first_date));
    let _ = writeln!(output, "Latest assessment: {}", format_date(summary.latest_date));
}

fn whole(score: Score) -> i64 {
    score.round() as i64
}

fn score_bar(score: Score) -> String {
    let filled = (score.round().clamp(0.0, BAR_WIDTH as f64)) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn format_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|value| value.with_timezone(&Local).format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ScoreSet};
    use chrono::{Duration, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_record(days: i64, scores: ScoreSet) -> AssessmentRecord {
        let start = Utc.with_ymd_and_hms(2026, 10, 5, 12, 0, 0).unwrap();
        AssessmentRecord::new(scores, start + Duration::days(days))
    }

    #[test]
    fn bars_scale_to_ten_cells() {
        assert_eq!(score_bar(3.0), "███░░░░░░░");
        assert_eq!(score_bar(9.6), "██████████");
        assert_eq!(score_bar(-2.0), "░░░░░░░░░░");
    }

    #[test]
    fn results_list_advice_in_given_order() {
        let record = sample_record(
            0,
            ScoreSet::default()
                .with(Category::Work, 2.0)
                .with(Category::Relationships, 9.0),
        );
        let verdict = balance::overall_balance(&record.scores);
        let advice = balance::generate_advice(&record.scores, &mut StdRng::seed_from_u64(1));
        let output = render_results(Some(&Results {
            record: &record,
            verdict: &verdict,
            advice: &advice,
        }));

        assert!(output.contains(verdict.message));
        assert!(output.contains("- Work (2/10, low): "));
        let work = output.find("- Work (").unwrap();
        let relationships = output.find("- Relationships (").unwrap();
        assert!(work < relationships);
    }

    #[test]
    fn missing_results_show_notice() {
        assert!(render_results(None).contains("No results yet"));
    }

    #[test]
    fn history_is_newest_first_with_focus() {
        let history = vec![
            sample_record(0, ScoreSet::default().with(Category::Hobby, 1.0)),
            sample_record(7, ScoreSet::uniform(7.0).with(Category::Learning, 3.0)),
        ];
        let output = render_history(&history);

        let newest = output.find("focus on Learning").unwrap();
        let oldest = output.find("focus on Hobby").unwrap();
        assert!(newest < oldest);
        assert!(output.contains("average 6.2/10"));
        assert!(output.contains("Total assessments: 2"));
    }

    #[test]
    fn empty_history_shows_notice() {
        let output = render_history(&[]);
        assert!(output.contains("No assessment history yet."));
        assert!(!output.contains("Total assessments"));
    }

    #[test]
    fn report_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");
        write_report(&path, "# Life Balance Report\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Life Balance Report\n"
        );
    }

    #[test]
    fn unwritable_report_path_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.md");
        let err = write_report(&path, "body").unwrap_err();
        assert!(err
            .to_string()
            .starts_with(&format!("failed to write {}", path.display())));
    }

    #[test]
    fn report_combines_results_and_history() {
        let record = sample_record(0, ScoreSet::default());
        let verdict = balance::overall_balance(&record.scores);
        let advice = balance::generate_advice(&record.scores, &mut StdRng::seed_from_u64(3));
        let report = build_report(
            Some(&Results {
                record: &record,
                verdict: &verdict,
                advice: &advice,
            }),
            std::slice::from_ref(&record),
            Utc::now(),
        );

        assert!(report.starts_with("# Life Balance Report"));
        assert!(report.contains("## Overall Balance"));
        assert!(report.contains("## History"));
        assert!(report.contains("Total assessments: 1"));
    }
}
