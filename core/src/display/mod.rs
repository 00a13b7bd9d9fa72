//! Presentation-ready projection of a classification result.

use crate::models::{ClassificationResult, SeverityTier};

/// Format a confidence in `[0, 1]` as a percentage with two decimals.
///
/// `0.8734` becomes `"87.34"`. The same string drives both the confidence
/// label and the indicator width.
pub fn format_percent(confidence: f64) -> String {
    to_fixed_2(confidence * 100.0)
}

/// Two-decimal rendering that rounds exact ties away from zero.
///
/// Works on the exact binary value, so `53.125` becomes `"53.13"` where
/// `format!("{:.2}")` would round to even and give `"53.12"`.
fn to_fixed_2(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    let bits = value.abs().to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);

    // value = mantissa * 2^exponent
    let (mantissa, exponent) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };

    if exponent >= 0 {
        // Whole number, already exact.
        return format!("{:.2}", value);
    }

    let shift = -exponent;
    if shift >= 120 {
        // Below 2^-67: rounds to zero.
        return format!("{}0.00", sign);
    }

    // hundredths = 100 * mantissa / 2^shift, rounded half up
    let numerator = 100u128 * mantissa as u128;
    let denominator = 1u128 << shift;
    let mut hundredths = numerator / denominator;
    if 2 * (numerator % denominator) >= denominator {
        hundredths += 1;
    }

    format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100)
}

/// Everything the result region needs, computed once per result.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Class label, verbatim.
    pub predicted_class: String,
    /// Percentage without the sign, e.g. `"87.34"`.
    pub percent: String,
    pub severity: SeverityTier,
}

impl ResultView {
    /// `Confidence: 87.34%`
    pub fn confidence_text(&self) -> String {
        format!("Confidence: {}%", self.percent)
    }

    /// CSS width of the proportional indicator; also used as its label.
    pub fn indicator_width(&self) -> String {
        format!("{}%", self.percent)
    }

    /// Class attribute for the class label.
    pub fn label_class(&self) -> String {
        format!("prediction-box {}", self.severity.css_class())
    }
}

impl From<&ClassificationResult> for ResultView {
    fn from(result: &ClassificationResult) -> Self {
        Self {
            predicted_class: result.predicted_class.clone(),
            percent: format_percent(result.confidence),
            severity: result.severity(),
        }
    }
}
