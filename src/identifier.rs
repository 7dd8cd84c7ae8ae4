//! Identifier formatting
//!
//! Builds the canonical `hf:` identifier handed off to the downstream
//! runner. The format is a contract: `hf:{repo}/{model_id}:{filename}`.

use crate::types::model::ModelRecord;

/// Derive the model id from a filename.
///
/// Takes the part before the first dot (the whole name if there is
/// none), title-cases it and appends "-GGUF".
pub fn generate_model_id(filename: &str) -> String {
    let base = filename.split('.').next().unwrap_or(filename);
    format!("{}-GGUF", title_case(base))
}

/// Format the full identifier for a chosen record.
pub fn format_identifier(record: &ModelRecord) -> String {
    format!(
        "hf:{}/{}:{}",
        record.repo,
        generate_model_id(&record.filename),
        record.filename
    )
}

// Title case in the word-boundary sense: a letter is uppercased when it
// starts the string or follows a non-letter, lowercased otherwise, so
// "llama-8b" becomes "Llama-8B".
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alphabetic = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}
