//! Per-word ASR confidence aggregation.
//!
//! Recognizer confidence stands in for pronunciation quality: words the
//! recognizer was unsure about are usually the ones a listener struggles
//! with too.

use crate::transcript::Word;

/// Mean word confidence as a 0-100 score.
///
/// Confidences are clamped to `[0, 1]`; non-finite values are skipped.
/// Returns `None` when there are no usable words.
pub fn pronunciation_score(words: &[Word]) -> Option<u8> {
    let (sum, count) = words
        .iter()
        .filter_map(Word::clamped_confidence)
        .fold((0.0, 0_u32), |(sum, count), c| (sum + c, count + 1));
    if count == 0 {
        return None;
    }
    let mean = sum / f64::from(count);
    Some((mean * 100.0).round().clamp(0.0, 100.0) as u8)
}

/// Speaking rate in words per minute over the first-start to last-end span.
///
/// Returns `None` when there are no words or the span is not positive.
pub fn speaking_rate_wpm(words: &[Word]) -> Option<f64> {
    let first = words.first()?;
    let last = words.last()?;
    let seconds = last.end_time - first.start_time;
    if !seconds.is_finite() || seconds <= 0.0 {
        return None;
    }
    Some(words.len() as f64 / seconds * 60.0)
}
