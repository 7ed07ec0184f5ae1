//! Game orchestration: the four one-shot generation operations.
//!
//! Every operation follows the same pipeline - validate input, render a
//! prompt, ask the oracle, strict-parse the reply - and every failure
//! past input validation surfaces as `AppError::Generation` with the
//! underlying message preserved. Caller-supplied input is rejected
//! before any oracle call is attempted.

use tracing::{debug, info};

use crate::domain::{
    CaseFile, DefenseHistory, GameState, Interruption, Verdict, MAX_SENTENCE_YEARS,
};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::oracle::parse::parse_reply;
use crate::oracle::ModelOracle;
use crate::prompts;

/// Invent a fresh fictional criminal case.
pub async fn generate_case(oracle: &dyn ModelOracle) -> Result<CaseFile, AppError> {
    let raw = oracle.complete(&prompts::case_prompt()).await?;

    let case: CaseFile = parse_reply(&raw)
        .map_err(|e| AppError::generation(format!("case file reply rejected: {e}")))?;
    case.validate()
        .map_err(|msg| AppError::generation(format!("model produced an invalid case file: {msg}")))?;

    info!(accused = %case.name, "case file generated");
    Ok(case)
}

/// Produce one malfunction interruption for the current speech.
pub async fn generate_interruption(
    oracle: &dyn ModelOracle,
    state: &GameState,
) -> Result<Interruption, AppError> {
    state
        .validate()
        .map_err(|msg| AppError::invalid(ErrorCode::ValidationError, msg))?;

    let raw = oracle.complete(&prompts::interruption_prompt(state)).await?;

    let interruption: Interruption = parse_reply(&raw)
        .map_err(|e| AppError::generation(format!("interruption reply rejected: {e}")))?;
    if interruption.interruption.trim().is_empty() {
        return Err(AppError::generation(
            "model produced an empty interruption",
        ));
    }

    debug!(
        difficulty = state.clamped_difficulty(),
        history_len = state.past_interruptions.len(),
        "interruption generated"
    );
    Ok(interruption)
}

/// Ask the judge for one new probing question. Returns trimmed raw text,
/// not JSON - this is the one operation with a free-text contract.
pub async fn ask_judge_question(
    oracle: &dyn ModelOracle,
    history: &DefenseHistory,
) -> Result<String, AppError> {
    history
        .validate()
        .map_err(|msg| AppError::invalid(ErrorCode::ValidationError, msg))?;

    let raw = oracle
        .complete(&prompts::judge_question_prompt(history))
        .await?;

    let question = raw.trim().to_string();
    if question.is_empty() {
        return Err(AppError::generation("model produced an empty question"));
    }

    debug!(transcript_len = history.transcript.len(), "judge question generated");
    Ok(question)
}

/// Weigh the transcript and deliver the final ruling. The sentence is
/// clamped into [0, MAX_SENTENCE_YEARS]; whether an acquittal carries a
/// zero sentence is left to the model.
pub async fn final_verdict(
    oracle: &dyn ModelOracle,
    history: &DefenseHistory,
) -> Result<Verdict, AppError> {
    history
        .validate()
        .map_err(|msg| AppError::invalid(ErrorCode::ValidationError, msg))?;

    let raw = oracle.complete(&prompts::verdict_prompt(history)).await?;

    let mut verdict: Verdict = parse_reply(&raw)
        .map_err(|e| AppError::generation(format!("verdict reply rejected: {e}")))?;
    verdict.sentence = verdict.sentence.min(MAX_SENTENCE_YEARS);

    info!(verdict = ?verdict.verdict, sentence = verdict.sentence, "verdict delivered");
    Ok(verdict)
}
