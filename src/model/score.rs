use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub label: String,
    pub points: u32,
    pub max_points: u32,
    pub remark: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub overall: u32,
    pub categories: Vec<CategoryScore>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSignals {
    pub respondent_turns: usize,
    pub mean_length: f64,
    pub keywords_matched: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskRating {
    Low,
    Medium,
    High,
}

impl RiskRating {
    pub fn from_overall(overall: u32) -> Self {
        if overall >= 80 {
            RiskRating::Low
        } else if overall >= 60 {
            RiskRating::Medium
        } else {
            RiskRating::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskRating::Low => "Low Risk",
            RiskRating::Medium => "Medium Risk",
            RiskRating::High => "High Risk",
        }
    }
}
