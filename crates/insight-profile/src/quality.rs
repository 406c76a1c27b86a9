//! Percentages and the data-quality score.

/// `round(100 * part / whole)` with halves rounded up, in integer arithmetic.
///
/// Returns 0 when `whole` is 0.
pub fn round_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let part = part as u128;
    let whole = whole as u128;
    ((200 * part + whole) / (2 * whole)) as u32
}

/// Share of non-missing cells as a whole percentage.
///
/// A dataset without cells scores 100.
pub fn quality_score(total_cells: usize, missing_cells: usize) -> u8 {
    if total_cells == 0 {
        return 100;
    }
    let present = total_cells.saturating_sub(missing_cells);
    round_percent(present, total_cells).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_percent(1, 8), 13);
        assert_eq!(round_percent(1, 3), 33);
        assert_eq!(round_percent(2, 3), 67);
        assert_eq!(round_percent(5, 6), 83);
        assert_eq!(round_percent(0, 0), 0);
    }

    #[test]
    fn quality_bounds() {
        assert_eq!(quality_score(0, 0), 100);
        assert_eq!(quality_score(6, 0), 100);
        assert_eq!(quality_score(6, 6), 0);
        assert_eq!(quality_score(6, 1), 83);
    }
}
