//! Scenario entity - static incident write-ups served by the catalog
//!
//! A scenario is a post-mortem style article: a short searchable head
//! (title, category, environment, summary) followed by the long-form body
//! (what happened, how it was diagnosed and fixed, what to take away).
//! Records are authored offline and never mutated at runtime.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::ScenarioId;

/// A single incident write-up.
///
/// Field names follow the dataset's camelCase JSON. Title, environment,
/// and summary are the searchable surface; the remaining fields carry the
/// article body and may be empty in terse records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub title: String,
    pub category: String,
    /// Where the incident happened (e.g., "Production - GKE").
    pub environment: String,
    /// One-paragraph teaser shown in list views.
    pub summary: String,
    #[serde(default)]
    pub what_happened: String,
    #[serde(default)]
    pub diagnosis_steps: Vec<String>,
    #[serde(default)]
    pub root_cause: String,
    #[serde(default)]
    pub fix: String,
    #[serde(default)]
    pub lessons_learned: Vec<String>,
    #[serde(default)]
    pub how_to_avoid: Vec<String>,
}

impl Scenario {
    pub fn new(
        id: ScenarioId,
        title: impl Into<String>,
        category: impl Into<String>,
        environment: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            environment: environment.into(),
            summary: summary.into(),
            what_happened: String::new(),
            diagnosis_steps: Vec::new(),
            root_cause: String::new(),
            fix: String::new(),
            lessons_learned: Vec::new(),
            how_to_avoid: Vec::new(),
        }
    }

    pub fn with_what_happened(mut self, text: impl Into<String>) -> Self {
        self.what_happened = text.into();
        self
    }

    pub fn with_diagnosis_steps(mut self, steps: Vec<String>) -> Self {
        self.diagnosis_steps = steps;
        self
    }

    pub fn with_root_cause(mut self, text: impl Into<String>) -> Self {
        self.root_cause = text.into();
        self
    }

    pub fn with_fix(mut self, text: impl Into<String>) -> Self {
        self.fix = text.into();
        self
    }

    pub fn with_lessons_learned(mut self, lessons: Vec<String>) -> Self {
        self.lessons_learned = lessons;
        self
    }

    pub fn with_how_to_avoid(mut self, items: Vec<String>) -> Self {
        self.how_to_avoid = items;
        self
    }
}

/// Checks the catalog invariant that scenario ids are unique.
pub fn validate_unique_ids(scenarios: &[Scenario]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(scenarios.len());
    for scenario in scenarios {
        if !seen.insert(scenario.id) {
            return Err(DomainError::validation(format!(
                "duplicate scenario id: {}",
                scenario.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(id: u32) -> Scenario {
        Scenario::new(
            ScenarioId::new(id).unwrap(),
            "OOMKilled Pods in Production",
            "Kubernetes",
            "Production - GKE",
            "Pods were repeatedly OOMKilled under load.",
        )
    }

    #[test]
    fn builder_fills_narrative_fields() {
        let s = scenario(1)
            .with_what_happened("Checkout pods restarted every few minutes.")
            .with_diagnosis_steps(vec![
                "kubectl describe pod showed OOMKilled".to_string(),
                "Compared memory limits against heap settings".to_string(),
            ])
            .with_root_cause("Container memory limit below the JVM max heap.")
            .with_fix("Raised the limit and capped the heap below it.")
            .with_lessons_learned(vec!["Limits must account for off-heap memory".to_string()])
            .with_how_to_avoid(vec!["Load-test with production limits".to_string()]);

        assert_eq!(s.diagnosis_steps.len(), 2);
        assert!(s.root_cause.contains("JVM"));
        assert_eq!(s.lessons_learned.len(), 1);
        assert_eq!(s.how_to_avoid.len(), 1);
        assert!(!s.what_happened.is_empty());
        assert!(!s.fix.is_empty());
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_string(&scenario(2)).unwrap();
        assert!(json.contains("\"whatHappened\""));
        assert!(json.contains("\"diagnosisSteps\""));
        assert!(json.contains("\"rootCause\""));
        assert!(json.contains("\"lessonsLearned\""));
        assert!(json.contains("\"howToAvoid\""));
    }

    #[test]
    fn deserializes_terse_records() {
        let json = r#"{
            "id": 5,
            "title": "DNS Resolution Failure",
            "category": "Networking",
            "environment": "Staging - EKS",
            "summary": "Lookups failed after a CoreDNS upgrade."
        }"#;
        let s: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(s.id.get(), 5);
        assert!(s.what_happened.is_empty());
        assert!(s.diagnosis_steps.is_empty());
    }

    #[test]
    fn unique_ids_pass_validation() {
        let list = vec![scenario(1), scenario(2), scenario(3)];
        assert!(validate_unique_ids(&list).is_ok());
    }

    #[test]
    fn duplicate_ids_fail_validation() {
        let list = vec![scenario(1), scenario(2), scenario(1)];
        let err = validate_unique_ids(&list).unwrap_err();
        assert!(err.to_string().contains("duplicate scenario id: 1"));
    }
}
