use crate::model::score::CategoryScore;
use crate::model::transcript::{Speaker, Transcript};
use crate::pipeline::session::EndReason;
use crate::report::{ResultsSummary, format_f64_1};

pub fn render_report_text(summary: &ResultsSummary) -> String {
    let mut out = String::new();

    out.push_str("Pitch Session Results\n");
    out.push_str("=====================\n\n");

    if let Some(session) = &summary.session {
        out.push_str(&format!("Startup: {}\n", session.startup));
        out.push_str(&format!(
            "Judge: {} ({})\n",
            session.persona_name, session.persona_id
        ));
        out.push_str(&format!("Duration: {}\n", session.duration));
        out.push_str(&format!(
            "Questions answered: {} of {}\n",
            session.questions_answered, session.questions_total
        ));
        if let Some(reason) = session.end_reason {
            out.push_str(&format!("Ended by: {}\n", end_reason_label(reason)));
        }
        out.push('\n');
    }

    out.push_str("1. Overall score\n");
    out.push_str(&format!("Score: {}/100\n", summary.breakdown.overall));
    out.push_str(&format!("Rating: {}\n", summary.feedback.risk_label));
    out.push_str(&format!("{}\n\n", summary.feedback.verdict));

    out.push_str("2. Detailed score breakdown\n");
    for category in &summary.breakdown.categories {
        out.push_str(&category_line(category));
    }
    out.push('\n');

    out.push_str("3. Signals\n");
    out.push_str(&format!(
        "Answers: {}\nMean answer length: {} chars\n",
        summary.signals.respondent_turns,
        format_f64_1(summary.signals.mean_length)
    ));
    if summary.signals.keywords_matched.is_empty() {
        out.push_str("Keywords: none\n\n");
    } else {
        out.push_str(&format!(
            "Keywords: {}\n\n",
            summary.signals.keywords_matched.join(", ")
        ));
    }

    out.push_str("4. Key strengths\n");
    push_bullets(&mut out, &summary.feedback.strengths);
    out.push('\n');

    out.push_str("5. Areas for improvement\n");
    push_bullets(&mut out, &summary.feedback.improvements);
    out.push('\n');

    out.push_str("6. Feedback\n");
    for paragraph in &summary.feedback.narrative {
        out.push_str(paragraph);
        out.push('\n');
    }
    out.push('\n');

    out.push_str("7. Key recommendations\n");
    for (i, item) in summary.feedback.recommendations.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, item));
    }

    out
}

/// Chat-style dump of a transcript, one block per turn.
pub fn render_transcript_text(transcript: &Transcript, judge_name: &str) -> String {
    let mut out = String::new();
    for turn in transcript.turns() {
        let who = match turn.speaker {
            Speaker::Prompter => judge_name,
            Speaker::Respondent => "You",
        };
        out.push_str(&format!(
            "[{}] {}: {}\n",
            turn.timestamp.format("%H:%M:%S"),
            who,
            turn.text
        ));
    }
    out
}

fn category_line(category: &CategoryScore) -> String {
    format!(
        "{:<26} {:>2}/{}  {}\n",
        category.label, category.points, category.max_points, category.remark
    )
}

fn push_bullets(out: &mut String, items: &[&str]) {
    for item in items {
        out.push_str(&format!("- {}\n", item));
    }
}

fn end_reason_label(reason: EndReason) -> &'static str {
    match reason {
        EndReason::TurnLimit => "all questions answered",
        EndReason::Requested => "founder request",
    }
}
