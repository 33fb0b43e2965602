#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    GreaterThan,
    AtLeast,
}

impl Comparison {
    pub fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::GreaterThan => value > threshold,
            Comparison::AtLeast => value >= threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusTier {
    pub threshold: f64,
    pub bonus: i32,
}

/// Mutually exclusive tiers, ordered from the highest threshold down.
#[derive(Debug, Clone, Copy)]
pub struct TierTable {
    pub comparison: Comparison,
    pub tiers: &'static [BonusTier],
}

impl TierTable {
    pub fn bonus_for(&self, value: f64) -> i32 {
        self.tiers
            .iter()
            .find(|tier| self.comparison.holds(value, tier.threshold))
            .map(|tier| tier.bonus)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBand {
    pub min_overall: u32,
    pub points: u32,
    pub remark: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub label: &'static str,
    pub max_points: u32,
    /// Ordered from the highest `min_overall` down; the last band has minimum 0.
    pub bands: [CategoryBand; 3],
}

impl CategoryRule {
    pub fn band_for(&self, overall: u32) -> &CategoryBand {
        self.bands
            .iter()
            .find(|band| overall >= band.min_overall)
            .unwrap_or(&self.bands[self.bands.len() - 1])
    }
}

#[derive(Debug, Clone)]
pub struct ScoringRules {
    pub base: i32,
    pub floor: i32,
    pub ceiling: i32,
    pub length_tiers: TierTable,
    pub count_tiers: TierTable,
    pub keyword_bonus: i32,
    pub keywords: &'static [&'static str],
    pub categories: &'static [CategoryRule],
}

const LENGTH_TIERS: &[BonusTier] = &[
    BonusTier {
        threshold: 200.0,
        bonus: 10,
    },
    BonusTier {
        threshold: 100.0,
        bonus: 5,
    },
];

const COUNT_TIERS: &[BonusTier] = &[
    BonusTier {
        threshold: 6.0,
        bonus: 10,
    },
    BonusTier {
        threshold: 4.0,
        bonus: 5,
    },
];

const KEYWORDS: &[&str] = &[
    "market",
    "revenue",
    "customer",
    "growth",
    "traction",
    "team",
    "competitive",
    "validation",
];

const fn bands(
    strong: u32,
    solid: u32,
    weak: u32,
    strong_remark: &'static str,
    other_remark: &'static str,
) -> [CategoryBand; 3] {
    [
        CategoryBand {
            min_overall: 75,
            points: strong,
            remark: strong_remark,
        },
        CategoryBand {
            min_overall: 60,
            points: solid,
            remark: other_remark,
        },
        CategoryBand {
            min_overall: 0,
            points: weak,
            remark: other_remark,
        },
    ]
}

const CATEGORIES: &[CategoryRule] = &[
    CategoryRule {
        label: "Market Opportunity",
        max_points: 20,
        bands: bands(
            18,
            15,
            12,
            "Strong market understanding",
            "Good market awareness, needs more depth",
        ),
    },
    CategoryRule {
        label: "Business Model Viability",
        max_points: 20,
        bands: bands(
            17,
            14,
            11,
            "Clear monetization strategy",
            "Model is viable but needs refinement",
        ),
    },
    CategoryRule {
        label: "Financial Understanding",
        max_points: 20,
        bands: bands(
            16,
            13,
            10,
            "Strong financial acumen",
            "Basic understanding, more details needed",
        ),
    },
    CategoryRule {
        label: "Founder Clarity",
        max_points: 20,
        bands: bands(
            19,
            16,
            13,
            "Excellent communication and vision",
            "Good articulation, could be more concise",
        ),
    },
    CategoryRule {
        label: "Competitive Positioning",
        max_points: 20,
        bands: bands(
            17,
            14,
            11,
            "Clear differentiation identified",
            "Competitive awareness present",
        ),
    },
];

impl ScoringRules {
    pub fn default_v1() -> Self {
        Self {
            base: 60,
            floor: 50,
            ceiling: 95,
            length_tiers: TierTable {
                comparison: Comparison::GreaterThan,
                tiers: LENGTH_TIERS,
            },
            count_tiers: TierTable {
                comparison: Comparison::AtLeast,
                tiers: COUNT_TIERS,
            },
            keyword_bonus: 2,
            keywords: KEYWORDS,
            categories: CATEGORIES,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/rules.rs"]
mod tests;
