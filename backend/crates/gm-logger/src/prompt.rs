use crate::{DEFAULT_PROMPT_PREVIEW_LEN, TRUNCATION_MARKER};

/// Shorten a prompt to [`DEFAULT_PROMPT_PREVIEW_LEN`] characters for logging.
pub fn truncate_prompt(prompt: &str) -> String {
    truncate_prompt_to(prompt, DEFAULT_PROMPT_PREVIEW_LEN)
}

/// Keep at most `max_len` characters of `prompt`, appending `...` when
/// anything was cut.
///
/// Length counts `char`s, so multi-byte text is never split mid-character.
pub fn truncate_prompt_to(prompt: &str, max_len: usize) -> String {
    match prompt.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{TRUNCATION_MARKER}", &prompt[..cut]),
        None => prompt.to_string(),
    }
}
