//! Shared fixtures for tests and local experimentation.

use super::{CaseFile, DefenseHistory, GameState, QuestionAnswer};

/// A fully-populated case file satisfying every CaseFile invariant.
pub fn sample_case() -> CaseFile {
    CaseFile {
        name: "Barnaby Quill".to_string(),
        accusation: "grand theft of the courthouse bell".to_string(),
        method: "a very long ladder and a trombone case".to_string(),
        time: "the night of the mayor's karaoke gala".to_string(),
        troubling_events: vec![
            "a trombone case was seen rolling downhill".to_string(),
            "the bell tower ladder smelled of brass polish".to_string(),
            "Barnaby hummed the bell's exact pitch all week".to_string(),
        ],
        alibis: vec![
            "he was judging a pie contest".to_string(),
            "his ladder was on loan to the fire brigade".to_string(),
            "he is famously afraid of heights".to_string(),
        ],
    }
}

/// Mid-speech game state with one prior interruption on record.
pub fn sample_game_state() -> GameState {
    GameState {
        storyboard: sample_case(),
        current_speech: "Ladies and gentlemen of the jury, my client is innocent.".to_string(),
        difficulty: 5,
        past_interruptions: vec!["MAYONNAISE".to_string()],
    }
}

/// A short transcript with one answered and one unanswered question.
pub fn sample_history() -> DefenseHistory {
    DefenseHistory {
        storyboard: sample_case(),
        transcript: vec![
            QuestionAnswer {
                question: "Where exactly was the ladder that night?".to_string(),
                answer: "On loan to the fire brigade, your honor.".to_string(),
            },
            QuestionAnswer {
                question: "Why does your client hum in B flat?".to_string(),
                answer: String::new(),
            },
        ],
    }
}
