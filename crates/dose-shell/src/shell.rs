//! The input/display shell.
//!
//! [`Shell`] owns the one text field and the result line. Every user action
//! arrives as a [`ShellEvent`] and is handled synchronously; there is a
//! single idle state and no terminal state.

use dose_core::constants::PREF_LAST_DOSE_KEY;
use dose_core::traits::{Clock, DecayCalculator, PreferenceStore};
use dose_core::types::{DoseTime, Remaining};
use serde::Serialize;
use tracing::{debug, warn};

use crate::readout::{half_life_label, Readout};

/// A user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Replace the field contents.
    Edit(String),
    /// Overwrite the field with the current time.
    SetToNow,
    /// Calculate from the current field.
    Calculate,
    /// Replace the field contents, then calculate (Enter in the field).
    Submit(String),
}

/// The most recent successful calculation.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct Calculation {
    pub dose: DoseTime,
    /// Serialized with seconds, since `elapsed_hours` counts them.
    #[serde(serialize_with = "serialize_with_seconds")]
    pub evaluated_at: DoseTime,
    pub elapsed_hours: f64,
    pub remaining: Remaining,
}

fn serialize_with_seconds<S: serde::Serializer>(
    time: &DoseTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.0.format("%Y-%m-%d %H:%M:%S"))
}

/// Application state plus its collaborators.
pub struct Shell<C, S, K> {
    calculator: C,
    store: S,
    clock: K,
    input: String,
    readout: Readout,
    last_calculation: Option<Calculation>,
}

impl<C, S, K> Shell<C, S, K>
where
    C: DecayCalculator,
    S: PreferenceStore,
    K: Clock,
{
    /// Create a shell, loading the field from the last persisted input.
    pub fn new(calculator: C, store: S, clock: K) -> Self {
        let input = match store.get(PREF_LAST_DOSE_KEY) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!("could not load last dose time: {e}");
                String::new()
            }
        };

        Self {
            calculator,
            store,
            clock,
            input,
            readout: Readout::initial(),
            last_calculation: None,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    pub fn last_calculation(&self) -> Option<&Calculation> {
        self.last_calculation.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The static half-life label.
    pub fn half_life_label(&self) -> String {
        half_life_label(self.calculator.half_life_hours())
    }

    /// Apply one event and return the result line.
    pub fn handle(&mut self, event: ShellEvent) -> &Readout {
        debug!(?event, "shell event");
        match event {
            ShellEvent::Edit(text) => self.input = text,
            ShellEvent::SetToNow => self.set_to_now(),
            ShellEvent::Calculate => self.calculate(),
            ShellEvent::Submit(text) => {
                self.input = text;
                self.calculate();
            }
        }
        &self.readout
    }

    fn set_to_now(&mut self) {
        self.input = self.clock.now().truncated_to_minute().to_string();
    }

    fn calculate(&mut self) {
        self.last_calculation = None;

        if self.input.trim().is_empty() {
            self.readout = Readout::empty_input();
            return;
        }

        let dose = match DoseTime::parse(&self.input) {
            Ok(dose) => dose,
            Err(e) => {
                debug!("rejected dose time: {e}");
                self.readout = Readout::invalid_format();
                return;
            }
        };

        // Persisted before the future check: any parseable input is kept.
        if let Err(e) = self.store.set(PREF_LAST_DOSE_KEY, &self.input) {
            warn!("could not save last dose time: {e}");
        }

        let now = self.clock.now();
        self.readout = match self.calculator.percentage_remaining(Some(dose), Some(now)) {
            Ok(remaining) => {
                self.last_calculation = Some(Calculation {
                    dose,
                    evaluated_at: now,
                    elapsed_hours: now.hours_since(&dose),
                    remaining,
                });
                match remaining {
                    Remaining::FutureDose => Readout::future_dose(),
                    r if r.is_negligible() => Readout::negligible(),
                    Remaining::Percentage(p) => Readout::percentage(p),
                }
            }
            Err(e) => Readout::error(e),
        };
    }
}
