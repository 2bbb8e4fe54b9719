/// Measures rendered label width so the planner can size label slots.
///
/// Hosts usually forward to their font backend; any `Fn(&str) -> f64`
/// closure works directly.
pub trait TextMeasurer {
    fn text_width_px(&self, text: &str) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> f64,
{
    fn text_width_px(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Approximates every glyph with the same advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceTextMeasurer {
    pub advance_px: f64,
}

impl FixedAdvanceTextMeasurer {
    #[must_use]
    pub const fn new(advance_px: f64) -> Self {
        Self { advance_px }
    }

    /// Average advance of a proportional font at `font_size_px`.
    #[must_use]
    pub fn for_font_size(font_size_px: f64) -> Self {
        Self::new(font_size_px * 0.6)
    }
}

impl TextMeasurer for FixedAdvanceTextMeasurer {
    fn text_width_px(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.advance_px
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedAdvanceTextMeasurer, TextMeasurer};

    #[test]
    fn closures_measure_text() {
        let measurer = |text: &str| text.len() as f64 * 2.0;
        assert_eq!(measurer.text_width_px("abc"), 6.0);
    }

    #[test]
    fn fixed_advance_counts_chars_not_bytes() {
        let measurer = FixedAdvanceTextMeasurer::new(5.0);
        assert_eq!(measurer.text_width_px("déc"), 15.0);
    }
}
