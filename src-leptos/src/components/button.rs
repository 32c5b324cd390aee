//! Button component with variants

use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "dm-button--primary",
            ButtonVariant::Secondary => "dm-button--secondary",
            ButtonVariant::Success => "dm-button--success",
            ButtonVariant::Danger => "dm-button--danger",
            ButtonVariant::Ghost => "dm-button--ghost",
        }
    }
}

#[component]
pub fn Button(
    /// Button text content
    #[prop(into)]
    text: String,
    /// Button variant
    #[prop(optional)]
    variant: ButtonVariant,
    /// Whether button is disabled
    #[prop(optional)]
    disabled: bool,
    /// Whether button is in loading state
    #[prop(optional)]
    loading: bool,
    /// Stretch to the container width
    #[prop(optional)]
    full_width: bool,
    /// Additional CSS class
    #[prop(optional, into)]
    class: String,
    /// Click handler
    on_click: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let variant_class = variant.class();

    view! {
        <button
            type="button"
            class=move || {
                let loading_class = if loading { "dm-button--loading" } else { "" };
                let width_class = if full_width { "dm-button--full" } else { "" };
                format!("dm-button {} {} {} {}", variant_class, loading_class, width_class, class)
            }
            disabled=move || disabled || loading
            on:click=move |_| on_click()
        >
            {move || if loading { "Loading...".to_string() } else { text.clone() }}
        </button>
    }
}
