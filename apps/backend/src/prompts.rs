//! Prompt templates for the four generation operations.
//!
//! Each JSON-producing prompt ends with an explicit response-shape block;
//! the reply is then strict-parsed by `oracle::parse` into the matching
//! serde type. The judge-question prompt is the odd one out: it asks for
//! bare text and its reply is used verbatim.

use crate::domain::{CaseFile, DefenseHistory, GameState, MAX_DIFFICULTY, MAX_SENTENCE_YEARS};

/// Response-shape block for case generation.
const CASE_SHAPE: &str = r#"Respond with exactly one JSON object and nothing else, matching:
{"name": string, "accusation": string, "method": string, "time": string, "troubling_events": [string, ...], "alibis": [string, ...]}"#;

/// Response-shape block for interruption generation.
const INTERRUPTION_SHAPE: &str = r#"Respond with exactly one JSON object and nothing else, matching:
{"interruption": string, "position": integer (character index in the speech where the words cut in), "delay": number (seconds to wait before injecting)}"#;

/// Response-shape block for the final verdict.
const VERDICT_SHAPE: &str = r#"Respond with exactly one JSON object and nothing else, matching:
{"verdict": "guilty" or "innocent", "arguments": string, "closing_sentence": string, "sentence": integer}"#;

pub fn case_prompt() -> String {
    format!(
        "You are the narrator of a comedic courtroom role-play game. \
         Invent a creative fictional criminal case: the accused person's name, \
         the crime they are accused of, the method, the time it happened, \
         at least three troubling events that point at the accused, and \
         at least three plausible alibis the defense could lean on. \
         Keep it absurd but internally coherent, and never reference a real person.\n\n{CASE_SHAPE}"
    )
}

pub fn interruption_prompt(state: &GameState) -> String {
    let difficulty = state.clamped_difficulty();
    let avoid = if state.past_interruptions.is_empty() {
        "None yet.".to_string()
    } else {
        state.past_interruptions.join("; ")
    };

    format!(
        "You are responsible for simulating unexpected neural interference in a \
         defense attorney's speech. The attorney is equipped with an implanted chip \
         that occasionally malfunctions, blurting out random, inappropriate, or \
         nonsensical words mid-sentence. The malfunction level is {difficulty}/{MAX_DIFFICULTY}: \
         the higher it is, the more words (1 to 5) and the more inappropriate the \
         interruption. The interruption must be FUNNY, and either unrelated to the \
         context or expressing the opposite of what the attorney wants to say.\n\n\
         Case file: {case}\n\
         Current speech: {speech}\n\
         Already used, do NOT repeat any of these: {avoid}\n\n{INTERRUPTION_SHAPE}",
        case = case_json(&state.storyboard),
        speech = state.current_speech,
    )
}

pub fn judge_question_prompt(history: &DefenseHistory) -> String {
    format!(
        "You are a stern but comedic judge presiding over this case. Ask the \
         defense exactly one new probing question about the case. It must be \
         relevant to the case file and must not repeat any question already asked.\n\n\
         Case file: {case}\n\
         Transcript so far:\n{transcript}\n\
         Reply with the question text only - no quotes, no JSON, no preamble.",
        case = case_json(&history.storyboard),
        transcript = render_transcript(history),
    )
}

pub fn verdict_prompt(history: &DefenseHistory) -> String {
    format!(
        "You are the judge delivering the final ruling in this case. Weigh the \
         case file against the defense's answers, decide guilty or innocent, and \
         justify your decision concisely. Assign a prison sentence as a whole \
         number of years between 0 and {MAX_SENTENCE_YEARS}: 0 if acquitted, and harsher when the \
         defense was incoherent, evasive, or silent. Close with a formal verdict \
         announcement in full courtroom pomp.\n\n\
         Case file: {case}\n\
         Defense transcript:\n{transcript}\n\n{VERDICT_SHAPE}",
        case = case_json(&history.storyboard),
        transcript = render_transcript(history),
    )
}

fn case_json(case: &CaseFile) -> String {
    serde_json::to_string(case).unwrap_or_default()
}

fn render_transcript(history: &DefenseHistory) -> String {
    if history.transcript.is_empty() {
        return "(no questions asked yet)".to_string();
    }
    history
        .transcript
        .iter()
        .map(|qa| {
            let answer = if qa.answer.trim().is_empty() {
                "(no answer)"
            } else {
                qa.answer.as_str()
            };
            format!("Judge: {}\nDefense: {}", qa.question, answer)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use crate::domain::fixtures::{sample_case, sample_game_state, sample_history};
    use crate::domain::DefenseHistory;

    use super::*;

    #[test]
    fn case_prompt_pins_the_response_shape() {
        let prompt = case_prompt();
        assert!(prompt.contains("troubling_events"));
        assert!(prompt.contains("exactly one JSON object"));
    }

    #[test]
    fn interruption_prompt_scales_with_difficulty() {
        let prompt = interruption_prompt(&sample_game_state());
        assert!(prompt.contains("5/10"));
        assert!(prompt.contains("MAYONNAISE"));
        assert!(prompt.contains("Barnaby Quill"));
    }

    #[test]
    fn interruption_prompt_clamps_out_of_range_difficulty() {
        let mut state = sample_game_state();
        state.difficulty = 42;
        let prompt = interruption_prompt(&state);
        assert!(prompt.contains("10/10"));
    }

    #[test]
    fn interruption_prompt_without_history_says_so() {
        let mut state = sample_game_state();
        state.past_interruptions.clear();
        let prompt = interruption_prompt(&state);
        assert!(prompt.contains("None yet."));
    }

    #[test]
    fn judge_prompt_lists_prior_questions() {
        let prompt = judge_question_prompt(&sample_history());
        assert!(prompt.contains("Where exactly was the ladder that night?"));
        assert!(prompt.contains("(no answer)"));
        assert!(prompt.contains("question text only"));
    }

    #[test]
    fn judge_prompt_handles_an_empty_transcript() {
        let history = DefenseHistory {
            storyboard: sample_case(),
            transcript: vec![],
        };
        let prompt = judge_question_prompt(&history);
        assert!(prompt.contains("(no questions asked yet)"));
    }

    #[test]
    fn verdict_prompt_pins_the_sentence_range() {
        let prompt = verdict_prompt(&sample_history());
        assert!(prompt.contains("between 0 and 10"));
        assert!(prompt.contains("\"guilty\" or \"innocent\""));
    }
}
