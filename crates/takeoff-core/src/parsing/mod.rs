pub mod levels;
pub mod tokenizer;

use crate::model::ComponentRecord;
use levels::level_count;
use tokenizer::{tokenize, Token};

/// Collapse every run of whitespace to a single space.
///
/// Page-layout artifacts split annotation rows across line breaks;
/// only inter-token whitespace is repaired here, a token broken in the
/// middle stays broken.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse raw drawing text into component records, in document order.
///
/// Every component-code token yields exactly one record, carrying the
/// contiguous run of level lists between it and the next code (or end
/// of text). Level lists seen before the first code are orphans and
/// are dropped.
pub fn parse_components(text: &str) -> Vec<ComponentRecord> {
    let normalized = normalize_whitespace(text);

    let mut records = Vec::new();
    let mut current_code: Option<&str> = None;
    let mut pending_levels: Vec<&str> = Vec::new();

    for token in tokenize(&normalized) {
        match token {
            Token::Code(code) => {
                // Flush the previous code before adopting the new one.
                if let Some(prev) = current_code.take() {
                    records.push(make_record(prev, &pending_levels));
                }
                current_code = Some(code);
                pending_levels.clear();
            }
            Token::Levels(spec) => {
                if current_code.is_some() {
                    pending_levels.push(spec);
                }
            }
        }
    }

    if let Some(code) = current_code {
        records.push(make_record(code, &pending_levels));
    }

    records
}

fn make_record(code: &str, specs: &[&str]) -> ComponentRecord {
    ComponentRecord {
        code: code.to_string(),
        levels: specs.join(", "),
        quantity: specs.iter().map(|s| level_count(s)).sum(),
    }
}
