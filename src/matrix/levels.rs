use serde::Serialize;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitLevel {
    High,
    Medium,
    Low,
}

impl BenefitLevel {
    /// Display order, top row first.
    pub const ALL: [BenefitLevel; 3] = [Self::High, Self::Medium, Self::Low];

    pub const fn row(self) -> usize {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeasibilityLevel {
    Low,
    Medium,
    High,
}

impl FeasibilityLevel {
    /// Display order, leftmost column first.
    pub const ALL: [FeasibilityLevel; 3] = [Self::Low, Self::Medium, Self::High];

    pub const fn col(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

pub const ROW_LABELS: [&str; 3] = [
    BenefitLevel::High.label(),
    BenefitLevel::Medium.label(),
    BenefitLevel::Low.label(),
];

pub const COL_LABELS: [&str; 3] = [
    FeasibilityLevel::Low.label(),
    FeasibilityLevel::Medium.label(),
    FeasibilityLevel::High.label(),
];

/// Tokens are matched exactly; "high" or " High" do not resolve.
pub fn resolve_benefit(token: &str) -> Option<BenefitLevel> {
    BenefitLevel::ALL
        .into_iter()
        .find(|level| level.label() == token)
}

pub fn resolve_feasibility(token: &str) -> Option<FeasibilityLevel> {
    FeasibilityLevel::ALL
        .into_iter()
        .find(|level| level.label() == token)
}
