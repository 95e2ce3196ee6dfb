//! Rewards policy entities and derived reward math.
//!
//! Policies are read from a JSON snapshot export of the rewards platform and
//! treated as immutable by the UI; the only mutation is requesting deletion
//! through the [`crate::service::PolicyService`].

use serde::{Deserialize, Serialize};

/// Category of a rewards policy.
///
/// Unrecognized categories are preserved verbatim in [`PolicyCategory::Other`]
/// so a snapshot produced by a newer platform version still renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PolicyCategory {
    Distribution,
    Minting,
    Recognition,
    Compliance,
    Other(String),
}

impl From<String> for PolicyCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "distribution" => Self::Distribution,
            "minting" => Self::Minting,
            "recognition" => Self::Recognition,
            "compliance" => Self::Compliance,
            _ => Self::Other(value),
        }
    }
}

impl From<PolicyCategory> for String {
    fn from(category: PolicyCategory) -> Self {
        match category {
            PolicyCategory::Distribution => "distribution".to_string(),
            PolicyCategory::Minting => "minting".to_string(),
            PolicyCategory::Recognition => "recognition".to_string(),
            PolicyCategory::Compliance => "compliance".to_string(),
            PolicyCategory::Other(raw) => raw,
        }
    }
}

impl PolicyCategory {
    /// Human-readable category name. Unknown categories display their raw
    /// snapshot string unchanged.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Distribution => "Distribution",
            Self::Minting => "Minting",
            Self::Recognition => "Recognition",
            Self::Compliance => "Compliance",
            Self::Other(raw) => raw,
        }
    }
}

/// Lifecycle status of a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyStatus {
    Active,
    Draft,
    Archived,
}

impl PolicyStatus {
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Archived => "Archived",
        }
    }
}

/// A reward payout expressed in worm denominations.
///
/// Absent fields in the snapshot mean zero; a condition without a reward
/// object pays nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WormReward {
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub silver: u32,
    #[serde(default)]
    pub bronze: u32,
}

/// A sub-rule of a policy, independently active or inactive, optionally
/// carrying a reward payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub is_active: bool,
    #[serde(default)]
    pub reward: Option<WormReward>,
}

/// A configured rule set governing reward distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: PolicyCategory,
    pub status: PolicyStatus,
    pub created_by: String,
    #[serde(default)]
    pub is_system_policy: bool,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

/// Field-wise sum of worm rewards across a policy's conditions.
///
/// Recomputed on demand; never persisted. Summation is commutative, so the
/// order of conditions does not affect the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewardTotals {
    pub gold: u64,
    pub silver: u64,
    pub bronze: u64,
}

impl RewardTotals {
    /// Accumulate totals over a list of conditions, treating a missing
    /// reward object as all-zero.
    #[must_use]
    pub fn for_conditions(conditions: &[Condition]) -> Self {
        conditions.iter().fold(Self::default(), |mut totals, condition| {
            if let Some(reward) = &condition.reward {
                totals.gold += u64::from(reward.gold);
                totals.silver += u64::from(reward.silver);
                totals.bronze += u64::from(reward.bronze);
            }
            totals
        })
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.gold == 0 && self.silver == 0 && self.bronze == 0
    }

    /// Comma-joined list of the non-zero denominations in gold, silver,
    /// bronze order, or "No rewards" when everything is zero.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.gold > 0 {
            parts.push(format!("{} Gold", self.gold));
        }
        if self.silver > 0 {
            parts.push(format!("{} Silver", self.silver));
        }
        if self.bronze > 0 {
            parts.push(format!("{} Bronze", self.bronze));
        }

        if parts.is_empty() {
            "No rewards".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl Policy {
    #[must_use]
    pub fn reward_totals(&self) -> RewardTotals {
        RewardTotals::for_conditions(&self.conditions)
    }

    #[must_use]
    pub fn active_condition_count(&self) -> usize {
        self.conditions.iter().filter(|condition| condition.is_active).count()
    }

    /// Pluralized label for the active condition count, e.g.
    /// "1 active condition" or "3 active conditions".
    #[must_use]
    pub fn active_condition_label(&self) -> String {
        let count = self.active_condition_count();
        if count == 1 {
            "1 active condition".to_string()
        } else {
            format!("{count} active conditions")
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == PolicyStatus::Active
    }
}

/// Built-in sample set used when no snapshot file is configured.
#[must_use]
pub fn demo_policies() -> Vec<Policy> {
    vec![
        Policy {
            id: "pol-savings-streak".to_string(),
            title: "Savings streak bonus".to_string(),
            description: "Rewards members who make deposits in consecutive weeks.".to_string(),
            category: PolicyCategory::Distribution,
            status: PolicyStatus::Active,
            created_by: "m.keller".to_string(),
            is_system_policy: false,
            conditions: vec![
                Condition {
                    is_active: true,
                    reward: Some(WormReward {
                        gold: 0,
                        silver: 2,
                        bronze: 0,
                    }),
                },
                Condition {
                    is_active: true,
                    reward: Some(WormReward {
                        gold: 1,
                        silver: 0,
                        bronze: 0,
                    }),
                },
                Condition {
                    is_active: false,
                    reward: None,
                },
            ],
        },
        Policy {
            id: "pol-worm-minting".to_string(),
            title: "Quarterly worm minting".to_string(),
            description: "Controls how many worms enter circulation each quarter.".to_string(),
            category: PolicyCategory::Minting,
            status: PolicyStatus::Active,
            created_by: "treasury-ops".to_string(),
            is_system_policy: true,
            conditions: vec![Condition {
                is_active: true,
                reward: None,
            }],
        },
        Policy {
            id: "pol-branch-visit".to_string(),
            title: "Branch visit recognition".to_string(),
            description: "One-off bronze payout for a member's first branch visit.".to_string(),
            category: PolicyCategory::Recognition,
            status: PolicyStatus::Draft,
            created_by: "j.ostermann".to_string(),
            is_system_policy: false,
            conditions: vec![Condition {
                is_active: false,
                reward: Some(WormReward {
                    gold: 0,
                    silver: 0,
                    bronze: 1,
                }),
            }],
        },
        Policy {
            id: "pol-kyc-gate".to_string(),
            title: "KYC completion gate".to_string(),
            description: "Blocks payouts to accounts with incomplete identity checks.".to_string(),
            category: PolicyCategory::Compliance,
            status: PolicyStatus::Active,
            created_by: "compliance-team".to_string(),
            is_system_policy: true,
            conditions: vec![
                Condition {
                    is_active: true,
                    reward: None,
                },
                Condition {
                    is_active: true,
                    reward: None,
                },
            ],
        },
        Policy {
            id: "pol-legacy-promo".to_string(),
            title: "2023 summer promo".to_string(),
            description: "Archived seasonal campaign kept for audit reference.".to_string(),
            category: PolicyCategory::Other("seasonal".to_string()),
            status: PolicyStatus::Archived,
            created_by: "marketing".to_string(),
            is_system_policy: false,
            conditions: vec![Condition {
                is_active: false,
                reward: Some(WormReward {
                    gold: 0,
                    silver: 1,
                    bronze: 3,
                }),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(is_active: bool, reward: Option<(u32, u32, u32)>) -> Condition {
        Condition {
            is_active,
            reward: reward.map(|(gold, silver, bronze)| WormReward { gold, silver, bronze }),
        }
    }

    #[test]
    fn test_totals_sum_across_conditions() {
        let conditions = vec![
            condition(true, Some((2, 0, 1))),
            condition(false, Some((1, 3, 0))),
            condition(true, None),
        ];

        let totals = RewardTotals::for_conditions(&conditions);
        assert_eq!(totals.gold, 3);
        assert_eq!(totals.silver, 3);
        assert_eq!(totals.bronze, 1);
    }

    #[test]
    fn test_totals_are_order_independent() {
        let mut conditions = vec![
            condition(true, Some((5, 0, 0))),
            condition(true, Some((0, 2, 7))),
            condition(false, None),
        ];

        let forward = RewardTotals::for_conditions(&conditions);
        conditions.reverse();
        let backward = RewardTotals::for_conditions(&conditions);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_missing_rewards_count_as_zero() {
        let conditions = vec![condition(true, None), condition(false, None)];
        assert!(RewardTotals::for_conditions(&conditions).is_zero());
    }

    #[test]
    fn test_summary_skips_zero_denominations() {
        let totals = RewardTotals {
            gold: 2,
            silver: 0,
            bronze: 1,
        };
        assert_eq!(totals.summary(), "2 Gold, 1 Bronze");
    }

    #[test]
    fn test_summary_of_zero_totals() {
        assert_eq!(RewardTotals::default().summary(), "No rewards");
    }

    #[test]
    fn test_active_condition_label_pluralization() {
        let mut policy = demo_policies().remove(0);

        policy.conditions = vec![
            condition(true, None),
            condition(true, None),
            condition(false, None),
        ];
        assert_eq!(policy.active_condition_label(), "2 active conditions");

        policy.conditions = vec![condition(true, None)];
        assert_eq!(policy.active_condition_label(), "1 active condition");

        policy.conditions.clear();
        assert_eq!(policy.active_condition_label(), "0 active conditions");
    }

    #[test]
    fn test_unknown_category_round_trips() {
        let category = PolicyCategory::from("unknown-x".to_string());
        assert_eq!(category, PolicyCategory::Other("unknown-x".to_string()));
        assert_eq!(category.display_name(), "unknown-x");
        assert_eq!(String::from(category), "unknown-x");
    }

    #[test]
    fn test_category_parses_known_names() {
        assert_eq!(
            PolicyCategory::from("distribution".to_string()),
            PolicyCategory::Distribution
        );
        assert_eq!(PolicyCategory::from("minting".to_string()), PolicyCategory::Minting);
        assert_eq!(
            PolicyCategory::from("recognition".to_string()),
            PolicyCategory::Recognition
        );
        assert_eq!(
            PolicyCategory::from("compliance".to_string()),
            PolicyCategory::Compliance
        );
    }

    #[test]
    fn test_policy_deserializes_with_defaults() {
        let json = r#"{
            "id": "p1",
            "title": "Test",
            "description": "",
            "category": "distribution",
            "status": "active",
            "created_by": "tester",
            "conditions": [
                { "is_active": true, "reward": { "gold": 2 } },
                { "is_active": false }
            ]
        }"#;

        let policy: Policy = serde_json::from_str(json).unwrap();
        assert!(!policy.is_system_policy);
        assert_eq!(policy.conditions.len(), 2);
        assert_eq!(policy.conditions[0].reward, Some(WormReward { gold: 2, silver: 0, bronze: 0 }));
        assert_eq!(policy.conditions[1].reward, None);
        assert_eq!(policy.reward_totals().summary(), "2 Gold");
    }
}
