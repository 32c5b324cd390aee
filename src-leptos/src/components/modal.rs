//! Confirmation dialog component

use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum ModalType {
    #[default]
    Confirm,
    Alert,
    Danger,
}

#[component]
pub fn Modal(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(optional)] message: Option<String>,
    #[prop(default = ModalType::Confirm)] modal_type: ModalType,
    #[prop(optional)] confirm_text: Option<String>,
    #[prop(optional)] cancel_text: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_text = confirm_text.unwrap_or_else(|| "Confirm".to_string());
    let cancel_text = cancel_text.unwrap_or_else(|| "Cancel".to_string());

    let confirm_class = match modal_type {
        ModalType::Danger => "dm-button dm-button--danger",
        _ => "dm-button dm-button--primary",
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="dm-modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="dm-modal" on:click=|e| e.stop_propagation()>
                    <div class="dm-modal-header">
                        <h3 class="dm-modal-title">{title.clone()}</h3>
                        <button class="dm-modal-close" on:click=move |_| on_cancel.run(())>
                            "×"
                        </button>
                    </div>

                    <div class="dm-modal-body">
                        {message.clone().map(|msg| view! { <p>{msg}</p> })}
                    </div>

                    <div class="dm-modal-footer">
                        <button
                            class="dm-button dm-button--secondary"
                            on:click=move |_| on_cancel.run(())
                        >
                            {cancel_text.clone()}
                        </button>
                        <button
                            class=confirm_class
                            on:click=move |_| on_confirm.run(())
                        >
                            {confirm_text.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
