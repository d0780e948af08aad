use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    match props.message.as_ref() {
        Some(message) => html! { <p class="error-message">{message}</p> },
        None => html! {},
    }
}
