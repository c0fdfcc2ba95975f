//! Contact form: validation, one enquiry POST per submit, status reporting.

use crate::error::SiteError;
use crate::scheduler::Scheduler;
use crate::validate::{self, ContactFields, FieldError};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tdc_site_types::{EnquiryPayload, EnquiryReply};
use tracing::{debug, error, warn};

pub const STATUS_SENDING: &str = "Sending your enquiry...";
pub const STATUS_SENT: &str = "Enquiry sent successfully. We will contact you soon.";
pub const STATUS_NETWORK_ERROR: &str = "Network error. Please try WhatsApp or email us.";
pub const SERVER_FALLBACK: &str = "Please try WhatsApp or email us.";
pub const BANNER_TEXT: &str = "Thank you for your message! We will get back to you soon.";

pub fn rejected_status(body: &str) -> String {
    let detail = if body.is_empty() { SERVER_FALLBACK } else { body };
    format!("Unable to send at the moment: {detail}")
}

/// Delivers the enquiry. `Err` means no response arrived at all.
#[async_trait(?Send)]
pub trait EnquiryTransport {
    async fn post(&self, payload: &EnquiryPayload) -> Result<EnquiryReply, SiteError>;
}

pub trait ContactView {
    type Banner: 'static;

    fn read_fields(&self) -> ContactFields;
    fn clear_errors(&self);
    fn show_field_error(&self, error: &FieldError);
    fn set_status(&self, text: &str);
    /// Clear every control back to its initial value.
    fn reset(&self);
    /// Insert the success banner immediately before the form.
    fn insert_banner(&self, text: &str) -> Option<Self::Banner>;
    /// Remove the banner if it is still attached.
    fn remove_banner(&self, banner: &Self::Banner);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(Vec<FieldError>),
    /// A previous submission is still waiting for its response.
    Busy,
    Sent,
    Rejected { status: u16, body: String },
    NetworkError,
    /// The form was disposed before the response arrived; the page was left
    /// untouched.
    Disposed,
}

pub struct ContactForm<V, T, S: Scheduler> {
    view: Rc<V>,
    transport: T,
    scheduler: S,
    banner_ms: u32,
    in_flight: Cell<bool>,
    disposed: Cell<bool>,
    banner_timers: RefCell<Vec<BannerTimer<S::Handle>>>,
}

/// Removal timer for one banner; `fired` is set once the banner is gone.
struct BannerTimer<H> {
    fired: Rc<Cell<bool>>,
    _handle: H,
}

impl<V, T, S> ContactForm<V, T, S>
where
    V: ContactView + 'static,
    T: EnquiryTransport,
    S: Scheduler,
{
    pub fn new(view: V, transport: T, scheduler: S, banner_ms: u32) -> Self {
        Self {
            view: Rc::new(view),
            transport,
            scheduler,
            banner_ms,
            in_flight: Cell::new(false),
            disposed: Cell::new(false),
            banner_timers: RefCell::new(Vec::new()),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Clears old errors, then marks every failing field.
    pub fn validate(&self) -> Result<EnquiryPayload, Vec<FieldError>> {
        self.view.clear_errors();
        let fields = self.view.read_fields();
        validate::validate(&fields).inspect_err(|errors| {
            for err in errors {
                self.view.show_field_error(err);
            }
        })
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.get()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.disposed.get() {
            return SubmitOutcome::Disposed;
        }
        if self.in_flight.get() {
            debug!("enquiry already in flight, ignoring submit");
            return SubmitOutcome::Busy;
        }

        let payload = match self.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                debug!(count = errors.len(), "contact form invalid");
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.view.set_status(STATUS_SENDING);
        self.in_flight.set(true);
        let result = self.transport.post(&payload).await;
        self.in_flight.set(false);

        if self.disposed.get() {
            debug!("contact form disposed while enquiry was in flight");
            return SubmitOutcome::Disposed;
        }

        match result {
            Ok(reply) if reply.is_success() => {
                self.view.set_status(STATUS_SENT);
                self.view.reset();
                self.show_success();
                SubmitOutcome::Sent
            }
            Ok(reply) => {
                warn!(status = reply.status, "enquiry rejected");
                self.view.set_status(&rejected_status(&reply.body));
                SubmitOutcome::Rejected {
                    status: reply.status,
                    body: reply.body,
                }
            }
            Err(err) => {
                error!(error = %err, "enquiry submit failed");
                self.view.set_status(STATUS_NETWORK_ERROR);
                SubmitOutcome::NetworkError
            }
        }
    }

    /// Shows the banner and schedules its removal.
    pub fn show_success(&self) {
        if self.disposed.get() {
            return;
        }
        let Some(banner) = self.view.insert_banner(BANNER_TEXT) else {
            return;
        };
        let view = self.view.clone();
        let fired = Rc::new(Cell::new(false));
        let done = fired.clone();
        let handle = self.scheduler.once(
            self.banner_ms,
            Box::new(move || {
                view.remove_banner(&banner);
                done.set(true);
            }),
        );
        let mut timers = self.banner_timers.borrow_mut();
        timers.retain(|t| !t.fired.get());
        timers.push(BannerTimer {
            fired,
            _handle: handle,
        });
    }

    /// Cancels pending banner removals. A response still in flight is
    /// ignored when it lands.
    pub fn dispose(&self) {
        self.disposed.set(true);
        self.banner_timers.borrow_mut().clear();
    }
}
