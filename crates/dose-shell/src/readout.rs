//! The result line shown to the user, and the fixed texts it can hold.

use std::fmt;

use dose_core::constants::{DRUG_NAME, NEGLIGIBLE_PERCENT, TIMESTAMP_PATTERN};
use serde::Serialize;

/// Display category of a result line.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Waiting for input. Not a failure.
    Prompt,
    /// The input could not be used.
    Error,
    /// A computed percentage.
    Result,
}

/// Contents of the read-only result region.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Readout {
    pub text: String,
    pub tone: Tone,
}

impl Readout {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// Shown before the first calculation.
    pub fn initial() -> Self {
        Self::new("Result: - %", Tone::Prompt)
    }

    pub fn empty_input() -> Self {
        Self::new("Result: Please enter dose time.", Tone::Prompt)
    }

    pub fn invalid_format() -> Self {
        Self::new(
            format!("Result: Invalid date/time format. Use {TIMESTAMP_PATTERN}"),
            Tone::Error,
        )
    }

    pub fn future_dose() -> Self {
        Self::new("Result: Dose time cannot be in the future.", Tone::Error)
    }

    pub fn negligible() -> Self {
        Self::new(
            format!("Result: < {NEGLIGIBLE_PERCENT} % (Essentially negligible)"),
            Tone::Result,
        )
    }

    /// A percentage with exactly two decimals.
    ///
    /// # Examples
    ///
    /// ```
    /// use dose_shell::readout::Readout;
    /// assert_eq!(Readout::percentage(50.0).text, "Result: 50.00 % remaining.");
    /// ```
    pub fn percentage(percent: f64) -> Self {
        Self::new(format!("Result: {percent:.2} % remaining."), Tone::Result)
    }

    pub fn error(message: impl fmt::Display) -> Self {
        Self::new(format!("Result: Error - {message}"), Tone::Error)
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Static label describing the half-life in use.
///
/// Whole-number half-lives keep one decimal, like `66.0`.
pub fn half_life_label(half_life_hours: f64) -> String {
    format!("Using {DRUG_NAME} half-life: {half_life_hours:?} hours.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_texts() {
        assert_eq!(Readout::initial().text, "Result: - %");
        assert_eq!(Readout::empty_input().text, "Result: Please enter dose time.");
        assert_eq!(
            Readout::invalid_format().text,
            "Result: Invalid date/time format. Use yyyy-MM-dd HH:mm"
        );
        assert_eq!(
            Readout::future_dose().text,
            "Result: Dose time cannot be in the future."
        );
        assert_eq!(
            Readout::negligible().text,
            "Result: < 0.01 % (Essentially negligible)"
        );
    }

    #[test]
    fn tones() {
        assert_eq!(Readout::initial().tone, Tone::Prompt);
        assert_eq!(Readout::empty_input().tone, Tone::Prompt);
        assert_eq!(Readout::invalid_format().tone, Tone::Error);
        assert_eq!(Readout::future_dose().tone, Tone::Error);
        assert_eq!(Readout::negligible().tone, Tone::Result);
        assert_eq!(Readout::percentage(1.0).tone, Tone::Result);
    }

    #[test]
    fn percentage_rounds_to_two_places() {
        assert_eq!(Readout::percentage(99.999).text, "Result: 100.00 % remaining.");
        assert_eq!(Readout::percentage(12.345_6).text, "Result: 12.35 % remaining.");
        assert_eq!(Readout::percentage(0.01).text, "Result: 0.01 % remaining.");
    }

    #[test]
    fn error_includes_message() {
        assert_eq!(
            Readout::error("last_dose cannot be unset").text,
            "Result: Error - last_dose cannot be unset"
        );
    }

    #[test]
    fn display_is_text() {
        assert_eq!(Readout::future_dose().to_string(), Readout::future_dose().text);
    }

    #[test]
    fn label_keeps_decimal() {
        assert_eq!(half_life_label(66.0), "Using Vortioxetine half-life: 66.0 hours.");
        assert_eq!(half_life_label(12.5), "Using Vortioxetine half-life: 12.5 hours.");
    }

    #[test]
    fn serializes_tone_snake_case() {
        let json = serde_json::to_string(&Readout::future_dose()).unwrap();
        assert!(json.contains("\"tone\":\"error\""));
    }
}
