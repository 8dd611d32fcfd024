//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::GenerationError;
use std::error::Error;

/// Map a generation error to CLI text, including its cause chain.
pub fn map_error(e: &GenerationError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str("\n  caused by: ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}
