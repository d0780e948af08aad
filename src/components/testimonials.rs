use yew::prelude::*;

use crate::components::error_message::ErrorMessage;
use crate::models::Testimonial;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    html! {
        <section class="testimonials-section" id="testimonial">
            <h2>{"Testimonials"}</h2>
            <div class="testimonial-container">
                { for props.testimonials.iter().enumerate().map(|(index, testimonial)| html! {
                    <div key={testimonial.key(index)} class="testimonial">
                        <p class="quote">{&testimonial.quote}</p>
                        <p class="author">{format!("- {}", testimonial.author)}</p>
                    </div>
                }) }
            </div>
            <ErrorMessage message={props.error.clone()} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn single_testimonial_renders_single_block() {
        let html = ServerRenderer::<Testimonials>::with_props(|| TestimonialsProps {
            testimonials: serde_json::from_str(r#"[{"id":1,"quote":"Great","author":"A"}]"#).unwrap(),
            error: None,
        })
        .render()
        .await;

        assert_eq!(html.matches(r#"class="testimonial""#).count(), 1);
        assert!(html.contains(r#"<p class="quote">Great</p>"#));
        assert!(html.contains(r#"<p class="author">- A</p>"#));
        assert!(!html.contains(r#"class="error-message""#));
    }

    #[tokio::test]
    async fn records_without_ids_still_render() {
        let html = ServerRenderer::<Testimonials>::with_props(|| TestimonialsProps {
            testimonials: serde_json::from_str(
                r#"[{"quote":"Great","author":"A"},{"quote":"Kind","author":null}]"#,
            )
            .unwrap(),
            error: None,
        })
        .render()
        .await;

        assert_eq!(html.matches(r#"class="testimonial""#).count(), 2);
        assert!(html.contains(r#"<p class="author">- </p>"#));
    }

    #[tokio::test]
    async fn shows_shared_error() {
        let html = ServerRenderer::<Testimonials>::with_props(|| TestimonialsProps {
            testimonials: Vec::new(),
            error: Some("Error submitting form. Please try again later.".into()),
        })
        .render()
        .await;

        assert!(html.contains(r#"<p class="error-message">Error submitting form. Please try again later.</p>"#));
    }
}
