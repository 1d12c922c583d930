/// Count the discrete building levels denoted by one bracketed level
/// list, e.g. "(2, 4-6)" -> 4.
///
/// Ranges are inclusive. An inverted range keeps its literal
/// end - start + 1 value, which can go negative; OCR text is noisy and
/// garbled parts count as zero rather than failing the record.
pub fn level_count(spec: &str) -> i64 {
    let inner = spec.trim().trim_start_matches('(').trim_end_matches(')');
    inner.split(',').map(part_count).sum()
}

fn part_count(part: &str) -> i64 {
    let part = part.trim();
    if let Some((start, end)) = part.split_once('-') {
        match (start.trim().parse::<i64>(), end.trim().parse::<i64>()) {
            (Ok(s), Ok(e)) => e - s + 1,
            _ => 0,
        }
    } else {
        match part.parse::<i64>() {
            Ok(_) => 1,
            Err(_) => 0,
        }
    }
}
