use tracing::{debug, info, warn};

use kiosk_core::error::SessionError;
use kiosk_core::models::reading::{ReadingSource, VitalReading};
use kiosk_core::models::score::ScoreResult;
use kiosk_core::models::session::SessionRecord;

use crate::config::ScoringConfig;
use crate::derive::{DerivationReport, derive};
use crate::error::EngineError;
use crate::registry::Registry;
use crate::validate::{self, rejected_reading};
use crate::{risk, scoring};

/// The full pipeline over one registry and one scoring policy.
///
/// Holds no per-session state; one engine can serve any number of sessions,
/// from any number of threads.
#[derive(Debug, Clone)]
pub struct Engine<'r> {
    registry: &'r Registry,
    config: ScoringConfig,
}

/// Result of submitting several values at once.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub accepted: Vec<VitalReading>,
    /// One error per rejected value. Rejections never stop the batch.
    pub rejected: Vec<EngineError>,
    pub derivation: DerivationReport,
}

impl Engine<'static> {
    /// Engine over the built-in registry with the default policy.
    pub fn builtin() -> Result<Self, EngineError> {
        Engine::new(Registry::builtin(), ScoringConfig::default())
    }
}

impl<'r> Engine<'r> {
    /// Checks the registry and the config before accepting either.
    pub fn new(registry: &'r Registry, config: ScoringConfig) -> Result<Self, EngineError> {
        registry.check()?;
        config.validate()?;
        debug!(
            parameters = registry.parameters().len(),
            derivations = registry.derivations().len(),
            "engine ready"
        );
        Ok(Self { registry, config })
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validate one raw value without touching any session.
    pub fn validate(&self, parameter_id: &str, raw: &str) -> Result<VitalReading, EngineError> {
        validate::validate(self.registry, parameter_id, raw)
    }

    /// Validate a value, store the outcome in `session` and refresh the
    /// derived readings.
    ///
    /// A value that fails validation is still recorded (as `malformed` or
    /// `out_of_range`, superseding the previous reading) and the error is
    /// returned so the caller can re-prompt. Unknown and derived parameter
    /// ids leave the session untouched.
    pub fn submit(
        &self,
        session: &mut SessionRecord,
        parameter_id: &str,
        raw: &str,
    ) -> Result<VitalReading, EngineError> {
        let outcome = self.record_entry(session, parameter_id, raw);
        if matches!(outcome, Ok(_) | Err(EngineError::Validation(_))) {
            self.refresh_derived(session);
        }
        outcome
    }

    /// Submit several `(parameter_id, raw_value)` pairs, refreshing derived
    /// readings once at the end.
    ///
    /// Fails only if the session no longer accepts readings.
    pub fn submit_batch<I, K, V>(
        &self,
        session: &mut SessionRecord,
        entries: I,
    ) -> Result<BatchOutcome, EngineError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        if !session.state().accepts_readings() {
            return Err(SessionError::Closed(session.state()).into());
        }

        let mut outcome = BatchOutcome::default();
        for (parameter_id, raw) in entries {
            match self.record_entry(session, parameter_id.as_ref(), raw.as_ref()) {
                Ok(reading) => outcome.accepted.push(reading),
                Err(err) => outcome.rejected.push(err),
            }
        }
        outcome.derivation = self.refresh_derived(session);

        info!(
            session_id = %session.id(),
            accepted = outcome.accepted.len(),
            rejected = outcome.rejected.len(),
            "batch submitted"
        );
        Ok(outcome)
    }

    /// Recompute all derived readings and store them in the session.
    pub fn refresh_derived(&self, session: &mut SessionRecord) -> DerivationReport {
        let report = derive(self.registry, session);
        session.replace_derived(report.readings.clone());
        report
    }

    /// Score and classify a snapshot of `session`.
    ///
    /// Derived readings are recomputed on a copy first, so the result does
    /// not depend on whether the caller refreshed them.
    pub fn evaluate(&self, session: &SessionRecord) -> Result<ScoreResult, EngineError> {
        let mut snapshot = session.clone();
        snapshot.replace_derived(derive(self.registry, session).readings);

        let scores = scoring::score(self.registry, &snapshot);
        let overall = scoring::overall(&scores.category_scores, &self.config)?;
        let classification = risk::classify(
            self.registry,
            &snapshot,
            &scores,
            overall.overall_score,
            &self.config,
        );

        info!(
            session_id = %session.id(),
            overall = overall.overall_score,
            band = %classification.risk_band,
            categories = overall.contributing.len(),
            flags = classification.flags.len(),
            "session evaluated"
        );

        Ok(ScoreResult {
            parameter_scores: scores.parameter_scores,
            category_scores: scores.category_scores,
            contributing_categories: overall.contributing,
            overall_score: overall.overall_score,
            risk_band: classification.risk_band,
            critical_count: classification.critical_count,
            flags: classification.flags,
        })
    }

    fn record_entry(
        &self,
        session: &mut SessionRecord,
        parameter_id: &str,
        raw: &str,
    ) -> Result<VitalReading, EngineError> {
        if !session.state().accepts_readings() {
            return Err(SessionError::Closed(session.state()).into());
        }
        match self.validate(parameter_id, raw) {
            Ok(reading) => {
                debug!(parameter = parameter_id, value = ?reading.value, critical = reading.critical, "reading accepted");
                session.record(reading.clone())?;
                Ok(reading)
            }
            Err(EngineError::Validation(err)) => {
                warn!(parameter = parameter_id, error = %err, "reading rejected");
                session.record(rejected_reading(&err, ReadingSource::Entered))?;
                Err(EngineError::Validation(err))
            }
            Err(err) => {
                warn!(parameter = parameter_id, error = %err, "submission refused");
                Err(err)
            }
        }
    }
}
