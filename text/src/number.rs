//! Fixed-point rendering of the decimal numbers

/// The widest fraction the formatters ever produce
pub(crate) const MAX_FRACTION_DIGITS: u8 = 12;

/// How to render a floating number with the fixed point
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct DecimalStyle {
    min_fraction_digits: u8,
    max_fraction_digits: u8,
    min_integer_digits: u8,
}

impl DecimalStyle {
    /// The fraction is kept between `min` and `max` digits.
    /// The bounds are clamped, so that `min <= max <= MAX_FRACTION_DIGITS`.
    pub(crate) fn new(min_fraction_digits: u8, max_fraction_digits: u8) -> Self {
        let max_fraction_digits = max_fraction_digits.min(MAX_FRACTION_DIGITS);
        Self {
            min_fraction_digits: min_fraction_digits.min(max_fraction_digits),
            max_fraction_digits,
            min_integer_digits: 1,
        }
    }

    /// Exactly the given number of fraction digits
    pub(crate) fn fixed(fraction_digits: u8) -> Self {
        Self::new(fraction_digits, fraction_digits)
    }

    /// Pad the integer part with zeros up to the given width
    pub(crate) const fn with_integer_digits(self, min_integer_digits: u8) -> Self {
        Self {
            min_integer_digits,
            ..self
        }
    }

    pub(crate) const fn min_fraction_digits(self) -> u8 {
        self.min_fraction_digits
    }

    pub(crate) const fn max_fraction_digits(self) -> u8 {
        self.max_fraction_digits
    }

    pub(crate) fn render(self, value: f64) -> String {
        let max = usize::from(self.max_fraction_digits);
        let min = usize::from(self.min_fraction_digits);
        let rendered = format!("{:.*}", max, value.abs());

        let (integer, fraction) = rendered
            .split_once('.')
            .unwrap_or((rendered.as_str(), ""));

        let significant = fraction.trim_end_matches('0').len().max(min);
        let fraction = &fraction[..significant];

        let is_zero = integer.bytes().chain(fraction.bytes()).all(|b| b == b'0');
        let sign = if value.is_sign_negative() && !is_zero {
            "-"
        } else {
            ""
        };

        let width = usize::from(self.min_integer_digits);
        if fraction.is_empty() {
            format!("{sign}{integer:0>width$}")
        } else {
            format!("{sign}{integer:0>width$}.{fraction}")
        }
    }
}
