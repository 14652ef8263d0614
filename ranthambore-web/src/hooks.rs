//! Form and submission state bound to a component.
//!
//! The simulated payment delay is a `gloo` timeout owned by the component:
//! unmounting drops the timer and fires the cancellation token, so a
//! completion can never land on a page that is gone.
use crate::storage::WebRelayStorage;
use gloo::timers::callback::Timeout;
use ranthambore_booking::constants::PAYMENT_DELAY_MS;
use ranthambore_booking::submission::complete_round_trip;
use ranthambore_booking::{
    BookingDesk, BookingFlow, CancellationToken, ConfirmationRecord, FieldSpec, FieldTouch, FlowError,
    SimulatedGateway, SubmissionFlow, SubmissionState, ValidationReport, submit_draft,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// What happened when the user pressed submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// Validation failed; every error is in the report.
    Rejected(ValidationReport),
    /// The simulated round trip is under way.
    Started,
    /// Ignored because a submission is already in flight or showing.
    Ignored(FlowError),
}

#[derive(Clone)]
pub struct SubmissionHandle {
    flow: Rc<RefCell<SubmissionFlow>>,
    pending: Rc<RefCell<Option<Timeout>>>,
    token: CancellationToken,
    refresh: UseForceUpdateHandle,
}

impl PartialEq for SubmissionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.flow, &other.flow)
    }
}

impl SubmissionHandle {
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        self.flow.borrow().state().clone()
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.flow.borrow().is_busy()
    }

    #[must_use]
    pub fn confirmation(&self) -> Option<ConfirmationRecord> {
        self.flow.borrow().confirmation().cloned()
    }

    /// Validate `draft` and, when it passes, start the simulated payment.
    ///
    /// `on_settled` receives the final state once the round trip ends.
    pub fn submit<F: BookingFlow>(
        &self,
        flow: &F,
        draft: &F::Draft,
        on_settled: Callback<SubmissionState>,
    ) -> SubmitStart {
        let outcome = {
            let mut state = self.flow.borrow_mut();
            submit_draft(flow, &mut state, draft, crate::dom::now_ms())
        };
        let start = match outcome {
            Err(err) => {
                log::debug!("submit ignored: {err}");
                SubmitStart::Ignored(err)
            }
            Ok(None) => SubmitStart::Rejected(
                self.flow.borrow().report().cloned().unwrap_or_default(),
            ),
            Ok(Some(request)) => {
                let shared = Rc::clone(&self.flow);
                let token = self.token.clone();
                let refresh = self.refresh.clone();
                let timer = Timeout::new(PAYMENT_DELAY_MS, move || {
                    let mut desk =
                        BookingDesk::new(SimulatedGateway::seeded(rand::random()), WebRelayStorage);
                    let result = complete_round_trip(&mut desk, request, &token);
                    if token.is_cancelled() {
                        return;
                    }
                    let settled = {
                        let mut state = shared.borrow_mut();
                        if let Err(err) = state.resolve(result) {
                            log::warn!("late completion dropped: {err}");
                            return;
                        }
                        state.state().clone()
                    };
                    refresh.force_update();
                    on_settled.emit(settled);
                });
                self.pending.borrow_mut().replace(timer);
                SubmitStart::Started
            }
        };
        self.refresh.force_update();
        start
    }

    /// Close a confirmation or error and return to idle.
    pub fn dismiss(&self) {
        self.flow.borrow_mut().dismiss();
        self.refresh.force_update();
    }
}

#[hook]
pub fn use_submission() -> SubmissionHandle {
    let flow = use_mut_ref(SubmissionFlow::new);
    let pending = use_mut_ref(|| None::<Timeout>);
    let token = (*use_state(CancellationToken::new)).clone();
    let refresh = use_force_update();

    {
        let flow = flow.clone();
        let pending = pending.clone();
        let token = token.clone();
        use_effect_with((), move |_| {
            let guard = token.drop_guard();
            move || {
                pending.borrow_mut().take();
                flow.borrow_mut().abort();
                drop(guard);
            }
        });
    }

    SubmissionHandle {
        flow,
        pending,
        token,
        refresh,
    }
}

/// Which fields of a form currently show their error.
#[derive(Clone, PartialEq)]
pub struct FormTouch {
    touch: UseStateHandle<FieldTouch>,
}

impl FormTouch {
    #[must_use]
    pub fn snapshot(&self) -> FieldTouch {
        (*self.touch).clone()
    }

    fn update(&self, f: impl FnOnce(&mut FieldTouch)) {
        let mut next = self.snapshot();
        f(&mut next);
        self.touch.set(next);
    }

    pub fn blur(&self, id: &str, report: &ValidationReport) {
        self.update(|touch| {
            touch.blur_from_report(id, report);
        });
    }

    pub fn input(&self, id: &str, report: &ValidationReport) {
        self.update(|touch| {
            touch.input_from_report(id, report);
        });
    }

    /// Flag every field after a rejected submit.
    pub fn flag_all(&self, specs: &[FieldSpec], report: &ValidationReport) {
        self.update(|touch| touch.apply(specs, report));
    }

    pub fn reset(&self) {
        self.touch.set(FieldTouch::new());
    }
}

#[hook]
pub fn use_form_touch() -> FormTouch {
    FormTouch {
        touch: use_state(FieldTouch::new),
    }
}
