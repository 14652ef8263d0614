//! Booking submission lifecycle.
//!
//! ```text
//! Idle -> Validating -> Invalid            (back to Idle, errors shown)
//!                    -> Submitting -> Confirmed
//!                                  -> Failed (back to Idle, draft kept)
//! ```
//!
//! The flow never performs I/O itself: the page drives the transitions and
//! owns the simulated delay, so a pending completion can be dropped when the
//! view goes away.
use crate::BookingGateway;
use crate::confirmation::{BookingRequest, ConfirmationRecord};
use crate::validate::ValidationReport;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    Idle,
    Validating,
    Invalid(ValidationReport),
    Submitting,
    Confirmed(Box<ConfirmationRecord>),
    Failed(String),
}

impl SubmissionState {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::Invalid(_) => "invalid",
            Self::Submitting => "submitting",
            Self::Confirmed(_) => "confirmed",
            Self::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("A booking is already being processed")]
    Busy,
    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("Payment declined: {0}")]
    Declined(String),
    #[error("Booking service unavailable")]
    Unavailable,
    #[error("Booking cancelled")]
    Cancelled,
}

/// Outcome of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; every error is in the state.
    Rejected,
    /// Validation passed; the caller should start the round trip.
    Accepted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFlow {
    state: SubmissionState,
}

impl Default for SubmissionFlow {
    fn default() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }
}

impl SubmissionFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// The submit control stays disabled while this is true.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(
            self.state,
            SubmissionState::Validating | SubmissionState::Submitting
        )
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<&ConfirmationRecord> {
        match &self.state {
            SubmissionState::Confirmed(record) => Some(record),
            _ => None,
        }
    }

    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        match &self.state {
            SubmissionState::Invalid(report) => Some(report),
            _ => None,
        }
    }

    /// Explicit submit action.
    ///
    /// # Errors
    ///
    /// [`FlowError::Busy`] while a submission is in flight, or an invalid
    /// transition when a confirmation is still showing.
    pub fn begin(&mut self) -> Result<(), FlowError> {
        match self.state {
            SubmissionState::Idle | SubmissionState::Invalid(_) | SubmissionState::Failed(_) => {
                self.state = SubmissionState::Validating;
                Ok(())
            }
            SubmissionState::Validating | SubmissionState::Submitting => Err(FlowError::Busy),
            SubmissionState::Confirmed(_) => Err(self.invalid("submit")),
        }
    }

    /// Record the validation result of the current attempt.
    ///
    /// # Errors
    ///
    /// Returns an invalid transition unless the flow is validating.
    pub fn validated(&mut self, report: ValidationReport) -> Result<SubmitOutcome, FlowError> {
        if self.state != SubmissionState::Validating {
            return Err(self.invalid("finish validation"));
        }
        if report.is_valid() {
            self.state = SubmissionState::Submitting;
            Ok(SubmitOutcome::Accepted)
        } else {
            log::debug!("submission rejected with {} errors", report.errors.len());
            self.state = SubmissionState::Invalid(report);
            Ok(SubmitOutcome::Rejected)
        }
    }

    /// Begin and validate in one step, as a submit handler does.
    ///
    /// # Errors
    ///
    /// Propagates [`SubmissionFlow::begin`] errors.
    pub fn submit(&mut self, report: ValidationReport) -> Result<SubmitOutcome, FlowError> {
        self.begin()?;
        self.validated(report)
    }

    /// Finish the round trip with the gateway's answer.
    ///
    /// # Errors
    ///
    /// Returns an invalid transition unless the flow is submitting.
    pub fn resolve(
        &mut self,
        result: Result<ConfirmationRecord, GatewayError>,
    ) -> Result<(), FlowError> {
        if self.state != SubmissionState::Submitting {
            return Err(self.invalid("resolve"));
        }
        self.state = match result {
            Ok(record) => SubmissionState::Confirmed(Box::new(record)),
            Err(err) => {
                log::warn!("booking failed: {err}");
                SubmissionState::Failed(err.to_string())
            }
        };
        Ok(())
    }

    /// Close the confirmation or error and return to idle.
    pub fn dismiss(&mut self) {
        if !self.is_busy() {
            self.state = SubmissionState::Idle;
        }
    }

    /// Abandon an in-flight submission, e.g. when the page is torn down.
    pub fn abort(&mut self) {
        if self.is_busy() {
            self.state = SubmissionState::Idle;
        }
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            action,
            state: self.state.label(),
        }
    }
}

/// Client-side stand-in for a booking backend.
///
/// Always succeeds unless told to fail, which exercises the failure branch
/// a real payment provider would need.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    rng: ChaCha20Rng,
    failure: Option<GatewayError>,
}

impl SimulatedGateway {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            failure: None,
        }
    }

    /// Every confirmation attempt fails with `error`.
    #[must_use]
    pub fn failing(mut self, error: GatewayError) -> Self {
        self.failure = Some(error);
        self
    }
}

impl BookingGateway for SimulatedGateway {
    type Error = GatewayError;

    fn confirm(&mut self, request: BookingRequest) -> Result<ConfirmationRecord, Self::Error> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(ConfirmationRecord::issue(request, &mut self.rng))
    }
}

/// Complete a round trip unless the owning view has been torn down.
///
/// # Errors
///
/// [`GatewayError::Cancelled`] when `token` fired during the delay, or the
/// gateway's own error.
pub fn complete_round_trip<G>(
    gateway: &mut G,
    request: BookingRequest,
    token: &CancellationToken,
) -> Result<ConfirmationRecord, GatewayError>
where
    G: BookingGateway<Error = GatewayError>,
{
    if token.is_cancelled() {
        log::debug!("dropping stale {} submission", request.kind.title());
        return Err(GatewayError::Cancelled);
    }
    gateway.confirm(request)
}

/// Simulated payment delay followed by the round trip.
///
/// # Errors
///
/// See [`complete_round_trip`].
#[cfg(feature = "async")]
pub async fn submit_after_delay<G>(
    gateway: &mut G,
    request: BookingRequest,
    delay: std::time::Duration,
    token: &CancellationToken,
) -> Result<ConfirmationRecord, GatewayError>
where
    G: BookingGateway<Error = GatewayError>,
{
    tokio::time::sleep(delay).await;
    complete_round_trip(gateway, request, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::confirmation::FlowKind;
    use crate::quote::Quote;
    use crate::validate::{FieldError, FieldRule};

    fn request() -> BookingRequest {
        BookingRequest {
            kind: FlowKind::Chambal,
            details: Vec::new(),
            quote: Quote::zero(),
            submitted_at_ms: 1_700_000_000_000,
        }
    }

    fn failing_report() -> ValidationReport {
        ValidationReport {
            checked: 1,
            errors: vec![FieldError {
                field: "name".into(),
                rule: FieldRule::Required,
                message: "Please enter your full name".into(),
            }],
        }
    }

    #[test]
    fn invalid_submit_returns_to_idle_equivalent() {
        let mut flow = SubmissionFlow::new();
        assert_eq!(flow.submit(failing_report()), Ok(SubmitOutcome::Rejected));
        assert!(!flow.is_busy());
        assert_eq!(flow.report().map(|r| r.errors.len()), Some(1));
        assert_eq!(
            flow.submit(ValidationReport::default()),
            Ok(SubmitOutcome::Accepted)
        );
    }

    #[test]
    fn repeated_submit_while_busy_is_rejected() {
        let mut flow = SubmissionFlow::new();
        flow.submit(ValidationReport::default()).unwrap();
        assert!(flow.is_busy());
        assert_eq!(flow.begin(), Err(FlowError::Busy));
    }

    #[test]
    fn successful_round_trip_confirms() {
        let mut flow = SubmissionFlow::new();
        let mut gateway = SimulatedGateway::seeded(9);
        flow.submit(ValidationReport::default()).unwrap();
        let token = CancellationToken::new();
        flow.resolve(complete_round_trip(&mut gateway, request(), &token))
            .unwrap();
        let record = flow.confirmation().expect("confirmed");
        assert!(record.booking_id.starts_with("CHB"));
        assert_eq!(flow.begin(), Err(FlowError::InvalidTransition {
            action: "submit",
            state: "confirmed"
        }));
        flow.dismiss();
        assert_eq!(flow.state(), &SubmissionState::Idle);
    }

    #[test]
    fn failure_keeps_flow_retryable() {
        let mut flow = SubmissionFlow::new();
        let mut gateway = SimulatedGateway::seeded(1).failing(GatewayError::Unavailable);
        flow.submit(ValidationReport::default()).unwrap();
        let token = CancellationToken::new();
        flow.resolve(complete_round_trip(&mut gateway, request(), &token))
            .unwrap();
        assert_eq!(
            flow.state(),
            &SubmissionState::Failed("Booking service unavailable".into())
        );
        assert_eq!(flow.begin(), Ok(()));
    }

    #[test]
    fn cancelled_token_drops_completion() {
        let mut gateway = SimulatedGateway::seeded(1);
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(
            complete_round_trip(&mut gateway, request(), &token),
            Err(GatewayError::Cancelled)
        );
    }

    #[test]
    fn dropped_page_guard_cancels_every_clone() {
        let token = CancellationToken::new();
        let pending = token.clone();
        {
            let _page = token.clone().drop_guard();
            assert!(!pending.is_cancelled());
        }
        assert!(pending.is_cancelled());
        let mut gateway = SimulatedGateway::seeded(3);
        assert_eq!(
            complete_round_trip(&mut gateway, request(), &pending),
            Err(GatewayError::Cancelled)
        );
    }

    #[test]
    fn resolve_outside_submitting_is_invalid() {
        let mut flow = SubmissionFlow::new();
        let err = flow.resolve(Err(GatewayError::Unavailable)).unwrap_err();
        assert_eq!(err.to_string(), "Cannot resolve while idle");
    }

    #[test]
    fn abort_clears_in_flight_submission() {
        let mut flow = SubmissionFlow::new();
        flow.submit(ValidationReport::default()).unwrap();
        flow.abort();
        assert_eq!(flow.state(), &SubmissionState::Idle);
    }
}
