use scout_core::{INPUT_PLACEHOLDER, SUBMIT_LABEL_IDLE, TITLE};

pub fn initial_lines() -> Vec<String> {
    vec![
        TITLE.to_string(),
        "=".repeat(TITLE.len()),
        format!("{INPUT_PLACEHOLDER}, then press Enter to {SUBMIT_LABEL_IDLE}."),
        "Ctrl-D quits.".to_string(),
    ]
}
