//! Clarity score aggregation.
//!
//! Rule deductions are normalized by transcript length, so one filler in a
//! ten-word answer costs far more than one in a five-minute talk.

/// Below this many words the score is always 100.
pub const MIN_SCORED_WORDS: usize = 10;

/// Points lost per deduction per 100 words.
const PENALTY_PER_DEFECT: f64 = 3.0;

/// Clarity score (0-100) from a word count and summed rule deductions.
pub fn clarity_score(word_count: usize, deductions: u32) -> u8 {
    if word_count < MIN_SCORED_WORDS {
        return 100;
    }
    let defects_per_100 = f64::from(deductions) / word_count.max(1) as f64 * 100.0;
    let score = (100.0 - defects_per_100 * PENALTY_PER_DEFECT).round();
    score.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_input_is_perfect() {
        assert_eq!(clarity_score(0, 0), 100);
        assert_eq!(clarity_score(9, 50), 100);
    }

    #[test]
    fn no_deductions_is_perfect() {
        assert_eq!(clarity_score(10, 0), 100);
        assert_eq!(clarity_score(500, 0), 100);
    }

    #[test]
    fn normalized_by_length() {
        // 2 / 100 words -> 2 per 100 -> 100 - 6
        assert_eq!(clarity_score(100, 2), 94);
        // 2 / 500 words -> 0.4 per 100 -> 100 - 1.2
        assert_eq!(clarity_score(500, 2), 99);
    }

    #[test]
    fn clamped_at_zero() {
        assert_eq!(clarity_score(10, 40), 0);
    }

    #[test]
    fn monotone_in_deductions() {
        let scores: Vec<u8> = (0..30).map(|d| clarity_score(50, d)).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }
}
