use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::booking_form::BookingForm;
use crate::components::nav::Nav;
use crate::components::testimonials::Testimonials;
use crate::models::{FormData, FormField};
use crate::query;
use crate::state::{FetchStatus, PageAction, PageState, RequestSequence};
use crate::theme;

const HERO_IMAGE: &str = "https://worldline.com/content/dam/worldline/global/images/blog-content-images/prior-blogs/img-older-person-with-doctor.jpg/jcr:content/renditions/Desktop.jpeg";

/// Issues a doctor lookup for `city`; only the newest ticket's outcome lands in the state.
fn request_doctors(
    dispatcher: UseReducerDispatcher<PageState>,
    sequence: &Rc<RefCell<RequestSequence>>,
    city: String,
) {
    let seq = sequence.borrow_mut().issue();
    info!("Fetching doctors for city {:?} (#{})", city, seq);
    dispatcher.dispatch(PageAction::DoctorsRequested { seq });

    spawn_local(async move {
        match api::fetch_doctors(&city).await {
            Ok(doctors) => dispatcher.dispatch(PageAction::DoctorsLoaded { seq, doctors }),
            Err(e) => {
                error!("Error fetching doctors for {:?}: {}", city, e);
                dispatcher.dispatch(PageAction::DoctorsFailed {
                    seq,
                    reason: e.to_string(),
                });
            }
        }
    });
}

fn request_testimonials(
    dispatcher: UseReducerDispatcher<PageState>,
    sequence: &Rc<RefCell<RequestSequence>>,
) {
    let seq = sequence.borrow_mut().issue();
    dispatcher.dispatch(PageAction::TestimonialsRequested { seq });

    spawn_local(async move {
        match api::fetch_testimonials().await {
            Ok(testimonials) => {
                dispatcher.dispatch(PageAction::TestimonialsLoaded { seq, testimonials })
            }
            Err(e) => {
                error!("Error fetching testimonials: {}", e);
                dispatcher.dispatch(PageAction::TestimonialsFailed {
                    seq,
                    reason: e.to_string(),
                });
            }
        }
    });
}

fn log_submission(form: &FormData) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string(form)?;
    info!("Form data submitted: {}", json);
    Ok(())
}

#[function_component]
pub fn Home() -> Html {
    let state = use_reducer(PageState::default);
    let doctor_requests = use_mut_ref(RequestSequence::default);
    let testimonial_requests = use_mut_ref(RequestSequence::default);

    // Seed the city from the URL once, then load both lists
    {
        let dispatcher = state.dispatcher();
        let default_city = state.form.city.clone();
        let doctor_requests = doctor_requests.clone();
        let testimonial_requests = testimonial_requests.clone();
        use_effect_with_deps(
            move |_| {
                let seed = query::seed_city(query::initial_city(), &default_city);
                if let Some(city) = seed.seeded {
                    info!("City {:?} taken from the query string", city);
                    dispatcher.dispatch(PageAction::Edit(FormField::City, city));
                }
                request_doctors(dispatcher.clone(), &doctor_requests, seed.fetch_city);
                request_testimonials(dispatcher, &testimonial_requests);
                || ()
            },
            (),
        );
    }

    {
        use_effect_with_deps(
            move |theme| {
                theme::apply_to_body(*theme);
                || ()
            },
            state.theme,
        );
    }

    let on_edit = {
        let dispatcher = state.dispatcher();
        let doctor_requests = doctor_requests.clone();
        Callback::from(move |(field, value): (FormField, String)| {
            let refetch = (field == FormField::City).then(|| value.clone());
            dispatcher.dispatch(PageAction::Edit(field, value));
            if let Some(city) = refetch {
                request_doctors(dispatcher.clone(), &doctor_requests, city);
            }
        })
    };

    let on_toggle_physio = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::TogglePhysioExperience))
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| match log_submission(&state.form) {
            Ok(()) => state.dispatch(PageAction::Submit),
            Err(e) => {
                error!("Error submitting form: {}", e);
                state.dispatch(PageAction::SubmitFailed);
            }
        })
    };

    let on_toggle_theme = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PageAction::ToggleTheme))
    };

    html! {
        <div>
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        background: #ffffff;
                        color: #1a1a1a;
                        transition: background 0.3s ease, color 0.3s ease;
                    }
                    body.dark-theme {
                        background: #1a1a1a;
                        color: #f0f0f0;
                    }
                    .navbar {
                        position: sticky;
                        top: 0;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 2rem;
                        background: #0b6e4f;
                        z-index: 10;
                    }
                    .navbar a {
                        color: #fff;
                        margin-right: 1.5rem;
                        text-decoration: none;
                    }
                    .toggle-theme-button {
                        background: none;
                        border: none;
                        color: #fff;
                        font-size: 1.2rem;
                        cursor: pointer;
                    }
                    .hero-section {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        padding: 3rem 2rem;
                    }
                    .hero-section h1 {
                        flex: 1;
                        font-size: 1.6rem;
                        line-height: 1.5;
                    }
                    .hero-section img {
                        flex: 1;
                        max-width: 50%;
                        border-radius: 12px;
                    }
                    .header-section,
                    .footer-section {
                        text-align: center;
                        padding: 2rem;
                    }
                    .booking-form-section,
                    .testimonials-section {
                        max-width: 720px;
                        margin: 0 auto;
                        padding: 2rem;
                    }
                    .booking-form-section label {
                        display: block;
                        margin-bottom: 1rem;
                    }
                    .booking-form-section input[type="text"],
                    .booking-form-section textarea {
                        display: block;
                        width: 100%;
                        padding: 0.6rem;
                        margin-top: 0.3rem;
                        border: 1px solid #ccc;
                        border-radius: 6px;
                        box-sizing: border-box;
                    }
                    .booking-form-section button[type="submit"] {
                        padding: 0.8rem 2rem;
                        background: #0b6e4f;
                        color: #fff;
                        border: none;
                        border-radius: 6px;
                        cursor: pointer;
                    }
                    .testimonial-container {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
                        gap: 1rem;
                    }
                    .testimonial {
                        padding: 1rem;
                        border-radius: 8px;
                        background: rgba(11, 110, 79, 0.08);
                    }
                    .testimonial .quote {
                        font-style: italic;
                    }
                    .testimonial .author {
                        text-align: right;
                        font-weight: bold;
                    }
                    .error-message {
                        color: #c0392b;
                    }
                    body.dark-theme .booking-form-section input[type="text"],
                    body.dark-theme .booking-form-section textarea {
                        background: #2a2a2a;
                        color: #f0f0f0;
                        border-color: #444;
                    }
                    body.dark-theme .testimonial {
                        background: rgba(255, 255, 255, 0.06);
                    }
                    @media (max-width: 768px) {
                        .hero-section {
                            flex-direction: column;
                        }
                        .hero-section img {
                            max-width: 100%;
                        }
                    }
                "#}
            </style>
            <Nav theme={state.theme} {on_toggle_theme} />

            <section class="hero-section" id="hero">
                <h1>{"\"At Fix Health, we redefine healthcare by combining cutting-edge expertise with compassionate care. Your path to optimal wellness begins with us – join us in creating a healthier future together.\""}</h1>
                <img src={HERO_IMAGE} alt="Hero" />
            </section>

            <section class="header-section">
                <h2>{"Welcome to Fix Health"}</h2>
                <p>{"Your path to a healthier life starts here."}</p>
            </section>

            <BookingForm
                form={state.form.clone()}
                doctors={state.doctors.items.clone()}
                doctors_loading={state.doctors.status == FetchStatus::Pending}
                error={state.error.clone()}
                {on_edit}
                {on_toggle_physio}
                {on_submit}
            />

            <Testimonials
                testimonials={state.testimonials.items.clone()}
                error={state.error.clone()}
            />

            <section class="footer-section">
                <p>{"© 2024 Fix Health. All rights reserved."}</p>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn submission_log_accepts_any_form() {
        let form = FormData {
            name: "Asha".into(),
            complaints: "Lower back \"stiffness\"\nafter runs".into(),
            ..FormData::default()
        };
        assert!(log_submission(&form).is_ok());
    }

    #[tokio::test]
    async fn initial_render_lays_out_every_section() {
        let html = ServerRenderer::<Home>::new().render().await;

        for anchor in [r#"id="hero""#, r#"id="consult-form""#, r#"id="testimonial""#] {
            assert!(html.contains(anchor), "missing {}", anchor);
        }
        assert!(html.contains("Welcome to Fix Health"));
        assert!(html.contains("Fix Health. All rights reserved."));
        assert!(html.contains("fa-moon"));
        assert!(!html.contains(r#"class="error-message""#));
    }
}
