use chrono::Utc;
use common::{PatternCategory, PatternDifficulty, ProblemDifficulty, TestCase};
use sea_orm::*;
use serde_json::json;
use tracing::info;

use crate::entity::{pattern, problem};

struct SeedProblem {
    title: &'static str,
    description: &'static str,
    difficulty: ProblemDifficulty,
    language: &'static str,
    starter_code: &'static str,
    test_cases: &'static [(&'static str, &'static str)],
}

struct SeedPattern {
    title: &'static str,
    description: &'static str,
    category: PatternCategory,
    difficulty: PatternDifficulty,
    intuition: &'static str,
    checklist: &'static [&'static str],
    problems: &'static [SeedProblem],
}

/// Starter content inserted into an empty database.
const DEFAULT_CONTENT: &[SeedPattern] = &[
    SeedPattern {
        title: "Two Pointers",
        description: "Use two pointers to iterate through data structures.",
        category: PatternCategory::Dsa,
        difficulty: PatternDifficulty::Beginner,
        intuition: "Efficiently search pairs in sorted arrays.",
        checklist: &["Sorted array?", "Find pair?", "Reduce O(N^2) to O(N)?"],
        problems: &[SeedProblem {
            title: "Pair Sum",
            description: "Find two numbers that add up to target.",
            difficulty: ProblemDifficulty::Easy,
            language: "javascript",
            starter_code: "function pairSum(arr, target) {\n  // Your code here\n}",
            test_cases: &[("[1,2,3], 5", "[2,3]")],
        }],
    },
    SeedPattern {
        title: "Sliding Window",
        description: "Maintain a window of elements to satisfy condition.",
        category: PatternCategory::Dsa,
        difficulty: PatternDifficulty::Intermediate,
        intuition: "Subarray or substring problems.",
        checklist: &["Contiguous subarray?", "Min/Max size?", "Longest substring?"],
        problems: &[SeedProblem {
            title: "Max Sum Subarray",
            description: "Find max sum of subarray of size K.",
            difficulty: ProblemDifficulty::Medium,
            language: "javascript",
            starter_code: "function maxSum(arr, k) {\n  // Your code here\n}",
            test_cases: &[("[1,2,3,4], 2", "7")],
        }],
    },
];

/// Counts of rows inserted by [`seed_content`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub patterns: usize,
    pub problems: usize,
}

/// Insert the starter patterns and problems when no pattern exists yet.
///
/// Running it against a non-empty library is a no-op.
pub async fn seed_content(db: &DatabaseConnection) -> Result<SeedReport, DbErr> {
    if pattern::Entity::find().count(db).await? > 0 {
        return Ok(SeedReport::default());
    }

    let txn = db.begin().await?;
    let now = Utc::now();
    let mut report = SeedReport::default();

    for seed in DEFAULT_CONTENT {
        let pattern = pattern::ActiveModel {
            title: Set(seed.title.to_string()),
            description: Set(seed.description.to_string()),
            category: Set(seed.category),
            difficulty: Set(seed.difficulty),
            intuition: Set(Some(seed.intuition.to_string())),
            checklist: Set(json!(seed.checklist)),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        report.patterns += 1;

        for p in seed.problems {
            let test_cases: Vec<TestCase> = p
                .test_cases
                .iter()
                .map(|&(input, output)| TestCase::new(input, output))
                .collect();

            problem::ActiveModel {
                pattern_id: Set(Some(pattern.id)),
                title: Set(p.title.to_string()),
                description: Set(p.description.to_string()),
                difficulty: Set(p.difficulty),
                starter_code: Set(json!({ (p.language): p.starter_code })),
                test_cases: Set(json!(test_cases)),
                expected_time_complexity: Set(None),
                expected_space_complexity: Set(None),
                edge_cases: Set(json!([])),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            report.problems += 1;
        }
    }

    txn.commit().await?;
    info!(
        "Seeded {} patterns and {} problems",
        report.patterns, report.problems
    );
    Ok(report)
}
