//! Game-related HTTP routes.
//!
//! Thin adapters from the wire to `services::game`: fetch the oracle
//! handle, hand over the validated body, serialize the result. The
//! judge-question endpoint answers plain text; the rest answer JSON.

use actix_web::{web, HttpResponse};

use crate::domain::{CaseFile, DefenseHistory, GameState, Interruption, Verdict};
use crate::error::AppError;
use crate::extractors::validated_json::ValidatedJson;
use crate::oracle::require_oracle;
use crate::services::game;
use crate::state::app_state::AppState;

/// POST /generate_storyboard
async fn generate_storyboard(
    app_state: web::Data<AppState>,
) -> Result<web::Json<CaseFile>, AppError> {
    let oracle = require_oracle(&app_state)?;
    let case = game::generate_case(oracle.as_ref()).await?;
    Ok(web::Json(case))
}

/// POST /generate_interruption
async fn generate_interruption(
    app_state: web::Data<AppState>,
    state: ValidatedJson<GameState>,
) -> Result<web::Json<Interruption>, AppError> {
    let oracle = require_oracle(&app_state)?;
    let interruption = game::generate_interruption(oracle.as_ref(), &state).await?;
    Ok(web::Json(interruption))
}

/// POST /judge_question
///
/// The one free-text endpoint: the judge's question is returned verbatim
/// as `text/plain`, not wrapped in JSON.
async fn judge_question(
    app_state: web::Data<AppState>,
    history: ValidatedJson<DefenseHistory>,
) -> Result<HttpResponse, AppError> {
    let oracle = require_oracle(&app_state)?;
    let question = game::ask_judge_question(oracle.as_ref(), &history).await?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(question))
}

/// POST /final_verdict
async fn final_verdict(
    app_state: web::Data<AppState>,
    history: ValidatedJson<DefenseHistory>,
) -> Result<web::Json<Verdict>, AppError> {
    let oracle = require_oracle(&app_state)?;
    let verdict = game::final_verdict(oracle.as_ref(), &history).await?;
    Ok(web::Json(verdict))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/generate_storyboard").route(web::post().to(generate_storyboard)));
    cfg.service(
        web::resource("/generate_interruption").route(web::post().to(generate_interruption)),
    );
    cfg.service(web::resource("/judge_question").route(web::post().to(judge_question)));
    cfg.service(web::resource("/final_verdict").route(web::post().to(final_verdict)));
}
