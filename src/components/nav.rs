use yew::prelude::*;

use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme } = props;

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_theme.emit(());
        })
    };

    html! {
        <div class="navbar">
            <span>
                <a href="#hero">{"Home"}</a>
                <a href="#consult-form">{"Consultation Form"}</a>
                <a href="#testimonial">{"Testimonials"}</a>
            </span>
            <button class="toggle-theme-button" onclick={toggle_theme}>
                <i class={theme.toggle_icon()}></i>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn dark_mode_offers_the_sun() {
        let html = ServerRenderer::<Nav>::with_props(|| NavProps {
            theme: Theme::Dark,
            on_toggle_theme: Callback::noop(),
        })
        .render()
        .await;

        assert!(html.contains("fa-sun"));
        assert!(!html.contains("fa-moon"));
        assert!(html.contains(r##"href="#consult-form""##));
    }
}
