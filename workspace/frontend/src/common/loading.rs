use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub visible: bool,
    #[prop_or_default]
    pub text: Option<String>,
}

/// Spinner laid over the chart area while a forecast is being fetched.
///
/// Always rendered so `#loading-overlay` exists in the DOM; only its
/// visibility follows `visible`.
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    let class = classes!(
        "flex",
        "flex-col",
        "justify-center",
        "items-center",
        "py-12",
        "gap-4",
        (!props.visible).then_some("hidden"),
    );

    html! {
        <div id="loading-overlay" {class} aria-busy={props.visible.to_string()}>
            <span class="loading loading-spinner loading-lg"></span>
            {if let Some(text) = &props.text {
                html! { <p class="text-sm text-gray-500">{text}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
