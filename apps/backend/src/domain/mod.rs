//! Game data model - the shapes carried between the caller and the service.
//!
//! The service is stateless: the caller holds the case file, the running
//! interruption history, and the judge/attorney transcript, and resends
//! them in full on every call. Everything here is therefore plain data
//! with serde derives plus the semantic checks that serde alone cannot
//! express (non-empty fields, bounded integers).

use serde::{Deserialize, Serialize};

pub mod fixtures;

/// Difficulty scale ceiling; caller values above this are clamped.
pub const MAX_DIFFICULTY: u8 = 10;

/// Longest prison term the judge may hand down, in years.
pub const MAX_SENTENCE_YEARS: u8 = 10;

/// The generated fictional criminal case. Immutable once generated;
/// the caller carries it on every subsequent request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    /// Name of the accused person
    pub name: String,
    /// Crime they're accused of
    pub accusation: String,
    /// Method of the crime
    pub method: String,
    /// Time of the crime
    pub time: String,
    /// Events that point at the accused
    pub troubling_events: Vec<String>,
    /// Possible alibis for the defense
    pub alibis: Vec<String>,
}

impl CaseFile {
    /// Semantic invariants: every field non-empty, every list non-empty
    /// and free of blank entries. Serde guarantees presence and types;
    /// this guards the content.
    pub fn validate(&self) -> Result<(), String> {
        non_empty("name", &self.name)?;
        non_empty("accusation", &self.accusation)?;
        non_empty("method", &self.method)?;
        non_empty("time", &self.time)?;
        non_empty_list("troubling_events", &self.troubling_events)?;
        non_empty_list("alibis", &self.alibis)?;
        Ok(())
    }
}

/// A short phrase injected into the defense speech to simulate a chip
/// malfunction, with the injection point and a delay before it fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interruption {
    /// Words to inject in the speech
    pub interruption: String,
    /// Character index in the speech where the phrase is injected
    pub position: u32,
    /// Seconds to wait before injecting
    #[serde(default = "default_delay")]
    pub delay: f32,
}

fn default_delay() -> f32 {
    1.0
}

/// Transient per-call bundle for interruption generation. The caller
/// reconstructs it each round; `past_interruptions` is its own
/// accumulated history, resent to bias generation away from repeats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub storyboard: CaseFile,
    /// The speech being delivered right now; empty at the opening
    pub current_speech: String,
    /// Malfunction level on a 0-10 scale
    pub difficulty: u8,
    #[serde(default)]
    pub past_interruptions: Vec<String>,
}

impl GameState {
    pub fn validate(&self) -> Result<(), String> {
        self.storyboard
            .validate()
            .map_err(|msg| format!("storyboard.{msg}"))
    }

    /// Difficulty bounded to the declared scale. Out-of-range caller
    /// values are clamped, not rejected.
    pub fn clamped_difficulty(&self) -> u8 {
        self.difficulty.min(MAX_DIFFICULTY)
    }
}

/// One judge-question / attorney-answer exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    /// May be empty - silence is weighed by the judge too
    #[serde(default)]
    pub answer: String,
}

/// The full trial transcript fed to the judging operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenseHistory {
    pub storyboard: CaseFile,
    #[serde(default)]
    pub transcript: Vec<QuestionAnswer>,
}

impl DefenseHistory {
    pub fn validate(&self) -> Result<(), String> {
        self.storyboard
            .validate()
            .map_err(|msg| format!("storyboard.{msg}"))?;
        for (i, qa) in self.transcript.iter().enumerate() {
            if qa.question.trim().is_empty() {
                return Err(format!("transcript[{i}].question must not be empty"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictKind {
    Guilty,
    Innocent,
}

/// The judge's final ruling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    /// Exactly "guilty" or "innocent"
    pub verdict: VerdictKind,
    /// Justification for the verdict
    pub arguments: String,
    /// Formal verdict announcement
    pub closing_sentence: String,
    /// Prison term in years, within [0, 10]
    pub sentence: u8,
}

fn non_empty(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}

fn non_empty_list(field: &str, values: &[String]) -> Result<(), String> {
    if values.is_empty() {
        return Err(format!("{field} must not be empty"));
    }
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(format!("{field} must not contain empty entries"));
    }
    Ok(())
}
