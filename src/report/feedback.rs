use serde::Serialize;

use crate::model::score::RiskRating;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub risk: RiskRating,
    pub risk_label: &'static str,
    pub verdict: &'static str,
    pub strengths: Vec<&'static str>,
    pub improvements: Vec<&'static str>,
    pub narrative: Vec<String>,
    pub recommendations: Vec<&'static str>,
}

const STRONG_STRENGTHS: &[&str] = &[
    "Clear articulation of the problem and solution",
    "Strong understanding of target market",
    "Demonstrated traction and validation",
    "Compelling vision for growth",
    "Solid grasp of business fundamentals",
];

const BASIC_STRENGTHS: &[&str] = &[
    "Good problem identification",
    "Basic market understanding",
    "Reasonable business model",
    "Passion for the venture",
];

const STRONG_IMPROVEMENTS: &[&str] = &[
    "Provide more specific financial projections",
    "Elaborate on go-to-market strategy execution",
    "Strengthen competitive analysis with data",
];

const BASIC_IMPROVEMENTS: &[&str] = &[
    "Develop more detailed financial projections",
    "Provide concrete evidence of market validation",
    "Strengthen competitive differentiation story",
    "Add more specific metrics and traction data",
    "Practice clearer, more concise responses",
];

const RECOMMENDATIONS: &[&str] = &[
    "Practice your pitch 10 more times focusing on the \"Areas for Improvement\" above",
    "Prepare specific metrics and data points for each key question area",
    "Record yourself and review to improve delivery and eliminate filler words",
    "Get feedback from mentors or advisors in your industry",
    "Create a detailed pitch deck to support your verbal presentation",
];

const STRONG_CUTOFF: u32 = 75;

pub fn verdict(overall: u32) -> &'static str {
    if overall >= 80 {
        "Outstanding pitch! You demonstrated strong business acumen and clear vision. Investors would be highly interested."
    } else if overall >= 60 {
        "Good pitch with solid fundamentals. With some refinements, you'll be investment-ready."
    } else {
        "Your pitch needs development. Focus on the areas below to strengthen your story."
    }
}

fn narrative(strong: bool) -> Vec<String> {
    let (depth, clarity) = if strong {
        ("strong", " excellent")
    } else {
        ("good", "")
    };
    let advice = if strong {
        "Your responses were well-structured and showed deep market insight. Continue to refine your financial projections and add more data-driven validation to support your claims."
    } else {
        "To improve, focus on providing more specific data points and metrics. Practice articulating your competitive advantages more clearly, and be prepared with concrete examples of customer validation."
    };
    let outlook = if strong {
        "you're well-positioned"
    } else {
        "with focused practice, you'll be ready"
    };
    vec![
        format!(
            "Your pitch demonstrated {depth} understanding of the fundamental business elements. The way you articulated your value proposition showed{clarity} clarity and confidence."
        ),
        advice.to_string(),
        format!(
            "Overall, {outlook} for investor meetings. Keep practicing and refining your story."
        ),
    ]
}

pub fn build_feedback(overall: u32) -> Feedback {
    let strong = overall >= STRONG_CUTOFF;
    let risk = RiskRating::from_overall(overall);
    Feedback {
        risk,
        risk_label: risk.label(),
        verdict: verdict(overall),
        strengths: if strong {
            STRONG_STRENGTHS.to_vec()
        } else {
            BASIC_STRENGTHS.to_vec()
        },
        improvements: if strong {
            STRONG_IMPROVEMENTS.to_vec()
        } else {
            BASIC_IMPROVEMENTS.to_vec()
        },
        narrative: narrative(strong),
        recommendations: RECOMMENDATIONS.to_vec(),
    }
}
