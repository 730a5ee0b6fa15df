//! Built-in sample dataset: a small assessment catalog with labeled
//! test cases.
//!
//! The catalog mirrors a typical talent-assessment vendor lineup
//! (cognitive battery, personality questionnaire, situational judgment,
//! motivation, deductive reasoning) and the test cases carry hand-picked
//! ground truth for it. Both the evaluation binary and the integration
//! tests build on this dataset so they agree on what "correct" looks
//! like.

use super::harness::TestCase;
use crate::catalog::{AssessmentItem, ItemId, JobLevel};

fn item(
    id: u64,
    name: &str,
    description: &str,
    skills: &[&str],
    levels: &[JobLevel],
    duration_minutes: u32,
    popularity: f32,
) -> AssessmentItem {
    AssessmentItem {
        id: ItemId::from_u64(id),
        name: name.to_string(),
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        job_levels: levels.iter().copied().collect(),
        duration_minutes,
        popularity,
    }
}

/// The five-item sample catalog.
pub fn sample_catalog() -> Vec<AssessmentItem> {
    vec![
        item(
            1,
            "Verify Interactive",
            "Cognitive ability test measuring verbal, numerical, and inductive reasoning",
            &["cognitive", "verbal", "numerical", "reasoning"],
            &[JobLevel::Entry, JobLevel::Mid],
            45,
            8.5,
        ),
        item(
            2,
            "OPQ32",
            "Personality questionnaire measuring behavioral preferences at work",
            &["personality", "behavior", "work_preferences"],
            &[JobLevel::All],
            30,
            9.0,
        ),
        item(
            3,
            "SJT Professional",
            "Situational Judgment Test for professional roles",
            &["judgment", "decision_making", "professional_skills"],
            &[JobLevel::Mid, JobLevel::Senior],
            25,
            7.8,
        ),
        item(
            4,
            "Motivational Questionnaire",
            "Measures what drives and motivates individuals at work",
            &["motivation", "drivers", "engagement"],
            &[JobLevel::All],
            20,
            7.2,
        ),
        item(
            5,
            "Deductive Reasoning",
            "Measures logical reasoning and problem-solving skills",
            &["cognitive", "logical_reasoning", "problem_solving"],
            &[JobLevel::Entry, JobLevel::Mid, JobLevel::Senior],
            35,
            8.1,
        ),
    ]
}

fn case(
    query: Option<&str>,
    job_level: Option<JobLevel>,
    relevant: &[u64],
    description: &str,
) -> TestCase {
    TestCase {
        query: query.map(str::to_string),
        job_level,
        relevant_ids: relevant.iter().map(|&id| ItemId::from_u64(id)).collect(),
        description: Some(description.to_string()),
    }
}

/// Labeled test cases over [`sample_catalog`].
pub fn sample_test_cases() -> Vec<TestCase> {
    vec![
        case(
            Some("cognitive reasoning test"),
            Some(JobLevel::Entry),
            &[1, 5],
            "Cognitive assessments for entry-level roles",
        ),
        case(
            Some("personality questionnaire"),
            Some(JobLevel::All),
            &[2, 4],
            "Personality and motivation questionnaires",
        ),
        case(
            Some("professional skills assessment"),
            Some(JobLevel::Senior),
            &[3],
            "Situational judgment for senior roles",
        ),
        case(
            Some("logical reasoning"),
            Some(JobLevel::Mid),
            &[1, 5],
            "Logical reasoning assessments",
        ),
        case(
            Some("work motivation"),
            Some(JobLevel::All),
            &[4],
            "Motivation assessments",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = sample_catalog();
        let ids: BTreeSet<ItemId> = catalog.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_every_case_references_catalog_items() {
        let catalog = sample_catalog();
        for case in sample_test_cases() {
            for id in &case.relevant_ids {
                assert!(
                    catalog.iter().any(|item| item.id == *id),
                    "case references unknown item {id}"
                );
            }
        }
    }

    #[test]
    fn test_every_case_is_labeled() {
        for case in sample_test_cases() {
            assert!(!case.relevant_ids.is_empty());
        }
    }
}
