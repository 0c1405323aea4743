use bodymetrics::metrics::{gauge_bands, GAUGE_RANGE};

/// One-line text gauge: band letters across `width` columns with a `^`
/// marker line underneath at the BMI position (clamped to the visible range).
pub fn gauge_lines(bmi: f64, width: usize) -> (String, String) {
    let (lo, hi) = GAUGE_RANGE;
    let span = hi - lo;
    let bands = gauge_bands();
    let symbols = ['U', 'N', 'O', '1', '2', '3'];

    let bar: String = (0..width)
        .map(|col| {
            let value = lo + (col as f64 + 0.5) * span / width as f64;
            bands
                .iter()
                .position(|(start, end, _)| value >= *start && value < *end)
                .map(|i| symbols[i])
                .unwrap_or(symbols[symbols.len() - 1])
        })
        .collect();

    let pos = ((bmi.clamp(lo, hi) - lo) / span * width as f64) as usize;
    let pos = pos.min(width.saturating_sub(1));
    let marker = format!("{}^ {:.2}", " ".repeat(pos), bmi);

    (bar, marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_spans_width_and_starts_underweight() {
        let (bar, _) = gauge_lines(22.0, 40);
        assert_eq!(bar.chars().count(), 40);
        assert!(bar.starts_with('U'));
        assert!(bar.ends_with('3'));
    }

    #[test]
    fn marker_is_clamped() {
        let (_, low) = gauge_lines(5.0, 40);
        assert!(low.starts_with('^'));
        let (_, high) = gauge_lines(80.0, 40);
        assert_eq!(high.find('^'), Some(39));
    }
}
