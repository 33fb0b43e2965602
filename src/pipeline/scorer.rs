use crate::model::rules::ScoringRules;
use crate::model::score::{CategoryScore, ScoreBreakdown, ScoreSignals};
use crate::model::transcript::Transcript;

pub fn collect_signals(transcript: &Transcript, rules: &ScoringRules) -> ScoreSignals {
    let answers: Vec<String> = transcript
        .respondent_turns()
        .map(|t| t.text.to_lowercase())
        .collect();

    let respondent_turns = answers.len();
    let mean_length = if respondent_turns == 0 {
        0.0
    } else {
        let total: usize = transcript
            .respondent_turns()
            .map(|t| t.text.chars().count())
            .sum();
        total as f64 / respondent_turns as f64
    };

    let keywords_matched = rules
        .keywords
        .iter()
        .filter(|keyword| answers.iter().any(|a| a.contains(*keyword)))
        .map(|keyword| keyword.to_string())
        .collect();

    ScoreSignals {
        respondent_turns,
        mean_length,
        keywords_matched,
    }
}

/// Overall score before banding; 0 when there are no respondent turns.
pub fn overall_from_signals(signals: &ScoreSignals, rules: &ScoringRules) -> u32 {
    if signals.respondent_turns == 0 {
        return 0;
    }
    let sum = rules.base
        + rules.length_tiers.bonus_for(signals.mean_length)
        + rules.count_tiers.bonus_for(signals.respondent_turns as f64)
        + rules.keyword_bonus * signals.keywords_matched.len() as i32;
    sum.clamp(rules.floor, rules.ceiling) as u32
}

pub fn categories_for(overall: u32, rules: &ScoringRules) -> Vec<CategoryScore> {
    rules
        .categories
        .iter()
        .map(|rule| {
            let band = rule.band_for(overall);
            CategoryScore {
                label: rule.label.to_string(),
                points: band.points,
                max_points: rule.max_points,
                remark: band.remark.to_string(),
            }
        })
        .collect()
}

pub fn score_transcript(transcript: &Transcript, rules: &ScoringRules) -> ScoreBreakdown {
    let signals = collect_signals(transcript, rules);
    let overall = overall_from_signals(&signals, rules);
    ScoreBreakdown {
        overall,
        categories: categories_for(overall, rules),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/scorer.rs"]
mod tests;
