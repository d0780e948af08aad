use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::config::SUBMIT_ERROR_MESSAGE;
use crate::models::{Doctor, FormData, FormField, Testimonial};
use crate::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Pending,
    Loaded,
    Failed(String),
}

/// Hands out increasing tickets for one kind of request.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> u64 {
        self.last += 1;
        self.last
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Fetch<T> {
    pub items: Vec<T>,
    pub status: FetchStatus,
    /// Ticket of the most recently issued request; only its response is applied.
    pub latest: Option<u64>,
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: FetchStatus::Idle,
            latest: None,
        }
    }
}

impl<T> Fetch<T> {
    fn requested(&mut self, seq: u64) {
        self.latest = Some(seq);
        self.status = FetchStatus::Pending;
    }

    fn is_current(&self, seq: u64) -> bool {
        self.latest == Some(seq)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageState {
    pub form: FormData,
    pub doctors: Fetch<Doctor>,
    pub testimonials: Fetch<Testimonial>,
    pub error: Option<String>,
    pub theme: Theme,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    Edit(FormField, String),
    TogglePhysioExperience,
    Submit,
    SubmitFailed,
    ToggleTheme,
    DoctorsRequested { seq: u64 },
    DoctorsLoaded { seq: u64, doctors: Vec<Doctor> },
    DoctorsFailed { seq: u64, reason: String },
    TestimonialsRequested { seq: u64 },
    TestimonialsLoaded { seq: u64, testimonials: Vec<Testimonial> },
    TestimonialsFailed { seq: u64, reason: String },
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: PageAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            PageAction::Edit(field, value) => {
                next.form = self.form.with_field(field, value);
            }
            PageAction::TogglePhysioExperience => {
                next.form.physio_experience = !self.form.physio_experience;
            }
            PageAction::Submit => {
                next.form = self.form.submitted();
                next.error = None;
            }
            PageAction::SubmitFailed => {
                next.error = Some(SUBMIT_ERROR_MESSAGE.to_string());
            }
            PageAction::ToggleTheme => {
                next.theme = self.theme.toggled();
            }
            PageAction::DoctorsRequested { seq } => next.doctors.requested(seq),
            PageAction::DoctorsLoaded { seq, doctors } => {
                if !self.doctors.is_current(seq) {
                    debug!("Dropping stale doctor response #{}", seq);
                    return self;
                }
                next.doctors.items = doctors;
                next.doctors.status = FetchStatus::Loaded;
            }
            PageAction::DoctorsFailed { seq, reason } => {
                if !self.doctors.is_current(seq) {
                    debug!("Dropping stale doctor failure #{}", seq);
                    return self;
                }
                next.doctors.status = FetchStatus::Failed(reason);
            }
            PageAction::TestimonialsRequested { seq } => next.testimonials.requested(seq),
            PageAction::TestimonialsLoaded { seq, testimonials } => {
                if !self.testimonials.is_current(seq) {
                    debug!("Dropping stale testimonial response #{}", seq);
                    return self;
                }
                next.testimonials.items = testimonials;
                next.testimonials.status = FetchStatus::Loaded;
                next.error = None;
            }
            PageAction::TestimonialsFailed { seq, reason } => {
                if !self.testimonials.is_current(seq) {
                    debug!("Dropping stale testimonial failure #{}", seq);
                    return self;
                }
                next.testimonials.status = FetchStatus::Failed(reason);
            }
        }
        Rc::new(next)
    }
}
