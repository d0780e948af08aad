use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::doctor_list::DoctorList;
use crate::components::error_message::ErrorMessage;
use crate::models::{Doctor, FormData, FormField};

#[derive(Properties, PartialEq)]
pub struct BookingFormProps {
    pub form: FormData,
    pub doctors: Vec<Doctor>,
    #[prop_or_default]
    pub doctors_loading: bool,
    #[prop_or_default]
    pub error: Option<String>,
    pub on_edit: Callback<(FormField, String)>,
    pub on_toggle_physio: Callback<()>,
    pub on_submit: Callback<()>,
}

const TEXT_FIELDS: &[(FormField, &str, &str)] = &[
    (FormField::Name, "Name:", "Enter your name here"),
    (FormField::Phone, "Phone Number:", "Enter your Phone Number here"),
    (FormField::Age, "Age:", "Enter your Age here"),
    (FormField::City, "City:", "Enter your City here"),
    (FormField::Company, "Company:", "Enter your Company here"),
];

fn field_value(form: &FormData, field: FormField) -> String {
    match field {
        FormField::Name => form.name.clone(),
        FormField::Phone => form.phone.clone(),
        FormField::Age => form.age.clone(),
        FormField::City => form.city.clone(),
        FormField::Company => form.company.clone(),
        FormField::Complaints => form.complaints.clone(),
    }
}

#[function_component(BookingForm)]
pub fn booking_form(props: &BookingFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let text_input = |(field, label, placeholder): &(FormField, &'static str, &'static str)| {
        let field = *field;
        let on_edit = props.on_edit.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit((field, input.value()));
        });
        html! {
            <label>
                {*label}
                <input
                    type="text"
                    placeholder={*placeholder}
                    value={field_value(&props.form, field)}
                    {oninput}
                />
            </label>
        }
    };

    let on_complaints = {
        let on_edit = props.on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_edit.emit((FormField::Complaints, input.value()));
        })
    };

    let on_physio = {
        let on_toggle_physio = props.on_toggle_physio.clone();
        Callback::from(move |_: Event| on_toggle_physio.emit(()))
    };

    html! {
        <section class="booking-form-section" id="consult-form">
            <h2>{"Book a Consultation"}</h2>
            <form {onsubmit}>
                { for TEXT_FIELDS.iter().map(text_input) }
                <label>
                    {"Chief Complaints:"}
                    <textarea
                        placeholder="Write your complaints here( If any)..."
                        value={props.form.complaints.clone()}
                        oninput={on_complaints}
                    />
                </label>
                if props.form.asks_physio_experience() {
                    <label>
                        {"Previous Experience with Physiotherapy:"}
                        <input
                            type="checkbox"
                            checked={props.form.physio_experience}
                            onchange={on_physio}
                        />
                    </label>
                }
                <DoctorList doctors={props.doctors.clone()} loading={props.doctors_loading} />
                <ErrorMessage message={props.error.clone()} />
                <button type="submit">{"Book Now"}</button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(form: FormData, error: Option<String>) -> String {
        ServerRenderer::<BookingForm>::with_props(move || BookingFormProps {
            form,
            doctors: Vec::new(),
            doctors_loading: false,
            error,
            on_edit: Callback::noop(),
            on_toggle_physio: Callback::noop(),
            on_submit: Callback::noop(),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn physio_checkbox_hidden_below_forty() {
        let html = render(
            FormData {
                age: "39".into(),
                ..FormData::default()
            },
            None,
        )
        .await;
        assert!(!html.contains("Previous Experience with Physiotherapy"));
    }

    #[tokio::test]
    async fn physio_checkbox_shown_from_forty() {
        let html = render(
            FormData {
                age: "40".into(),
                ..FormData::default()
            },
            None,
        )
        .await;
        assert!(html.contains("Previous Experience with Physiotherapy"));
        assert!(html.contains(r#"type="checkbox""#));
    }

    #[tokio::test]
    async fn physio_checkbox_hidden_for_non_numeric_age() {
        let html = render(
            FormData {
                age: "old".into(),
                ..FormData::default()
            },
            None,
        )
        .await;
        assert!(!html.contains("Previous Experience with Physiotherapy"));
    }

    #[tokio::test]
    async fn renders_every_field_and_error() {
        let html = render(
            FormData {
                city: "Pune".into(),
                ..FormData::default()
            },
            Some("Error submitting form. Please try again later.".into()),
        )
        .await;
        for (_, label, placeholder) in TEXT_FIELDS {
            assert!(html.contains(label), "missing {}", label);
            assert!(html.contains(placeholder), "missing {}", placeholder);
        }
        assert!(html.contains("Chief Complaints:"));
        assert!(html.contains(r#"class="error-message""#));
        assert!(html.contains("Book Now"));
    }
}
