//! Searchable, groupable single/multi select control.
//!
//! The interaction logic lives in [`SelectModel`], a plain state machine
//! that returns [`SelectCommand`]s for the view layer to execute. This
//! module wires the machine to the DOM: signals and memos for derived
//! state, a document-level mousedown guard for outside clicks, and the
//! keyboard contract on the trigger and the search box.

mod options;
mod presets;
mod state;

pub use options::{
    filter_options, group_options, GroupedOptions, IndexedOption, SelectOption, SelectValue,
    SelectionChange,
};
pub use presets::{
    alignment_options, class_options, creature_type_options, race_options, size_options,
    AlignmentSelect, ClassSelect, CreatureTypeSelect, RaceSelect, SizeSelect,
};
pub use state::{CloseReason, DisplayValue, SelectCommand, SelectModel};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollIntoViewOptions, ScrollLogicalPosition};

/// Delay before focusing the search input, letting the panel mount first.
const SEARCH_FOCUS_DELAY_MS: u32 = 10;

/// Document-level mousedown subscription that detaches on drop. Attached
/// only while the dropdown is open, so no global listener leaks across
/// open/close cycles.
struct OutsideClickGuard {
    closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl OutsideClickGuard {
    fn attach(handler: impl FnMut(web_sys::MouseEvent) + 'static) -> Option<Self> {
        let closure = Closure::new(handler);
        let document = web_sys::window()?.document()?;
        document
            .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { closure })
    }
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .remove_event_listener_with_callback("mousedown", self.closure.as_ref().unchecked_ref());
        }
    }
}

#[component]
pub fn Select(
    /// Candidate options
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Externally controlled selection; omit for uncontrolled use
    #[prop(optional, into)]
    value: MaybeProp<Vec<SelectValue>>,
    /// Initial selection for uncontrolled use
    #[prop(optional)]
    default_value: Option<Vec<SelectValue>>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional_no_strip, into)] label: Option<String>,
    #[prop(optional_no_strip, into)] helper_text: Option<String>,
    #[prop(optional_no_strip, into)] error_text: Option<String>,
    /// Toggle-on/toggle-off set selection instead of a single value
    #[prop(optional)]
    multiple: bool,
    /// Show a search box inside the panel
    #[prop(optional)]
    searchable: bool,
    /// Show a clear affordance while something is selected
    #[prop(optional)]
    clearable: bool,
    #[prop(optional, into)] loading: MaybeProp<bool>,
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] max_height: Option<String>,
    #[prop(optional, into)] empty_text: Option<String>,
    #[prop(optional, into)] search_placeholder: Option<String>,
    /// Additional CSS class for the trigger
    #[prop(optional, into)]
    class: String,
    /// Fired on every committed selection change or clear
    #[prop(optional_no_strip, into)]
    on_change: Option<Callback<SelectionChange>>,
    /// Fired on every search box keystroke with the raw term
    #[prop(optional)]
    on_search: Option<Callback<String>>,
    #[prop(optional)] on_dropdown_open: Option<Callback<()>>,
    #[prop(optional)] on_dropdown_close: Option<Callback<()>>,
    #[prop(optional)] on_focus: Option<Callback<()>>,
    #[prop(optional)] on_blur: Option<Callback<()>>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Select an option".to_string());
    let max_height = max_height.unwrap_or_else(|| "200px".to_string());
    // Stored as handles so the dropdown children, re-rendered on every
    // open, can read them without consuming anything.
    let empty_text =
        StoredValue::new(empty_text.unwrap_or_else(|| "No options available".to_string()));
    let search_placeholder =
        StoredValue::new(search_placeholder.unwrap_or_else(|| "Search...".to_string()));

    let model = RwSignal::new(
        SelectModel::new(options.get_untracked(), multiple, searchable)
            .with_selected(default_value.unwrap_or_default()),
    );

    let wrapper_ref = NodeRef::<leptos::html::Div>::new();
    let trigger_ref = NodeRef::<leptos::html::Div>::new();
    let search_input_ref = NodeRef::<leptos::html::Input>::new();

    // Option rows carry DOM ids so focus changes can scroll them into view.
    let select_id = StoredValue::new(format!("dm-select-{}", uuid::Uuid::new_v4().simple()));

    // Mirror reactive props into the machine
    Effect::new(move |_| {
        let opts = options.get();
        model.update(|m| m.sync_options(opts));
    });
    Effect::new(move |_| {
        if let Some(values) = value.get() {
            model.update(|m| m.sync_value(values));
        }
    });
    Effect::new(move |_| {
        let d = disabled.get().unwrap_or(false);
        let l = loading.get().unwrap_or(false);
        model.update(|m| m.sync_flags(d, l));
    });

    // Derived views of the machine
    let is_open = Memo::new(move |_| model.with(|m| m.is_open()));
    let focused = Memo::new(move |_| model.with(|m| m.focused_index()));
    let filtered = Memo::new(move |_| model.with(|m| m.filtered()));
    let grouped = Memo::new(move |_| group_options(&filtered.get()));
    let display = Memo::new(move |_| model.with(|m| m.display_value()));
    let has_selection = Memo::new(move |_| model.with(|m| m.has_selection()));
    let search_term = Memo::new(move |_| model.with(|m| m.search_term().to_string()));
    let is_loading = Memo::new(move |_| loading.get().unwrap_or(false));
    let interaction_disabled =
        Memo::new(move |_| disabled.get().unwrap_or(false) || loading.get().unwrap_or(false));

    // Execute the side effects requested by the machine
    let run_commands = move |commands: Vec<SelectCommand>| {
        for command in commands {
            match command {
                SelectCommand::DropdownOpened => {
                    if let Some(cb) = on_dropdown_open {
                        cb.run(());
                    }
                    if let Some(cb) = on_focus {
                        cb.run(());
                    }
                }
                SelectCommand::DropdownClosed => {
                    if let Some(cb) = on_dropdown_close {
                        cb.run(());
                    }
                    if let Some(cb) = on_blur {
                        cb.run(());
                    }
                }
                SelectCommand::FocusTrigger => {
                    if let Some(el) = trigger_ref.get_untracked() {
                        let _ = el.focus();
                    }
                }
                SelectCommand::FocusSearch => {
                    spawn_local(async move {
                        TimeoutFuture::new(SEARCH_FOCUS_DELAY_MS).await;
                        if let Some(input) = search_input_ref.get_untracked() {
                            let _ = input.focus();
                        }
                    });
                }
                SelectCommand::SearchChanged(term) => {
                    if let Some(cb) = on_search {
                        cb.run(term);
                    }
                }
                SelectCommand::SelectionChanged => {
                    if let Some(cb) = on_change {
                        cb.run(model.with_untracked(|m| m.selection_change()));
                    }
                }
            }
        }
    };

    // Outside clicks close the dropdown; the listener only exists while open
    let outside_guard = StoredValue::new_local(None::<OutsideClickGuard>);
    Effect::new(move |_| {
        if is_open.get() {
            let handler = move |ev: web_sys::MouseEvent| {
                let inside = wrapper_ref.get_untracked().is_some_and(|wrapper| {
                    ev.target()
                        .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                        .is_some_and(|node| wrapper.contains(Some(&node)))
                });
                if !inside {
                    let mut commands = Vec::new();
                    model.update(|m| commands = m.close_dropdown(CloseReason::OutsideClick));
                    run_commands(commands);
                }
            };
            outside_guard.set_value(OutsideClickGuard::attach(handler));
        } else {
            outside_guard.set_value(None);
        }
    });
    on_cleanup(move || outside_guard.set_value(None));

    // Keep the focused option visible, scrolling the minimum amount needed
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        let Some(index) = focused.get() else {
            return;
        };
        let id = format!("{}-option-{}", select_id.get_value(), index);
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(element) = document.get_element_by_id(&id) {
            let scroll_options = ScrollIntoViewOptions::new();
            scroll_options.set_block(ScrollLogicalPosition::Nearest);
            element.scroll_into_view_with_scroll_into_view_options(&scroll_options);
        }
    });

    let handle_toggle = move |_| {
        let mut commands = Vec::new();
        model.update(|m| commands = m.toggle_dropdown());
        run_commands(commands);
    };

    let handle_trigger_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let mut outcome = (false, Vec::new());
        model.update(|m| outcome = m.handle_key(&key));
        if outcome.0 {
            ev.prevent_default();
        }
        run_commands(outcome.1);
    };

    // The search box keeps Space/Home/End for text editing and routes the
    // navigation keys to the machine.
    let handle_search_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if !matches!(key.as_str(), "Enter" | "Escape" | "ArrowDown" | "ArrowUp") {
            return;
        }
        let mut outcome = (false, Vec::new());
        model.update(|m| outcome = m.handle_key(&key));
        if outcome.0 {
            ev.prevent_default();
        }
        run_commands(outcome.1);
    };

    let handle_search_input = move |ev: web_sys::Event| {
        let term = event_target_value(&ev);
        let mut commands = Vec::new();
        model.update(|m| commands = m.set_search(term));
        run_commands(commands);
    };

    // Clear must not reach the trigger toggle
    let handle_clear = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let mut commands = Vec::new();
        model.update(|m| commands = m.clear_selection());
        run_commands(commands);
    };

    let handle_pick = move |index: usize| {
        let mut commands = Vec::new();
        model.update(|m| commands = m.select_at(index));
        run_commands(commands);
    };

    let render_row = move |(index, option): IndexedOption| {
        let row_id = format!("{}-option-{}", select_id.get_value(), index);
        let row_disabled = option.disabled;
        let value_for_class = option.value.clone();
        let value_for_aria = option.value.clone();
        let value_for_check = option.value.clone();
        view! {
            <div
                id=row_id
                class="dm-select-option"
                class:dm-select-option-selected=move || model.with(|m| m.is_selected(&value_for_class))
                class:dm-select-option-focused=move || focused.get() == Some(index)
                class:dm-select-option-disabled=row_disabled
                role="option"
                aria-selected=move || model.with(|m| m.is_selected(&value_for_aria)).to_string()
                aria-disabled=row_disabled.to_string()
                on:click=move |_| handle_pick(index)
            >
                <div class="dm-select-option-content">
                    {option.icon.map(|icon| view! { <span class="dm-select-option-icon">{icon}</span> })}
                    <div class="dm-select-option-text">
                        <span class="dm-select-option-label">{option.label}</span>
                        {option
                            .description
                            .map(|d| view! { <span class="dm-select-option-description">{d}</span> })}
                    </div>
                    <Show when=move || {
                        multiple && model.with(|m| m.is_selected(&value_for_check))
                    }>
                        <span class="dm-select-option-check">"✓"</span>
                    </Show>
                </div>
            </div>
        }
    };

    let render_options_list = move || {
        if is_loading.get() {
            return view! {
                <div class="dm-select-loading">
                    <div class="dm-select-spinner"></div>
                    <span>"Loading..."</span>
                </div>
            }
            .into_any();
        }

        let buckets = grouped.get();
        if buckets.is_empty() {
            return view! {
                <div class="dm-select-empty">
                    <span>{empty_text.get_value()}</span>
                </div>
            }
            .into_any();
        }

        if buckets.has_groups() {
            view! {
                {buckets.ungrouped.into_iter().map(render_row).collect_view()}
                {buckets
                    .groups
                    .into_iter()
                    .map(|(name, bucket)| {
                        view! {
                            <div class="dm-select-group">
                                <div class="dm-select-group-label">{name}</div>
                                {bucket.into_iter().map(render_row).collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            }
            .into_any()
        } else {
            buckets.ungrouped.into_iter().map(render_row).collect_view().into_any()
        }
    };

    let has_error = error_text.is_some();
    let helper = error_text.or(helper_text);
    let display_span = move || match display.get() {
        DisplayValue::Placeholder => {
            view! { <span class="dm-select-placeholder">{placeholder.clone()}</span> }.into_any()
        }
        DisplayValue::Label(text) => {
            view! { <span class="dm-select-value">{text}</span> }.into_any()
        }
        DisplayValue::Count(n) => {
            view! { <span class="dm-select-value">{format!("{} elements selected", n)}</span> }
                .into_any()
        }
    };

    view! {
        <div class="dm-select-container">
            {label
                .map(|text| {
                    view! {
                        <label class="dm-select-label">
                            {text}
                            {required.then(|| view! { <span class="dm-select-required">"*"</span> })}
                        </label>
                    }
                })}
            <div class="dm-select-wrapper" node_ref=wrapper_ref>
                <div
                    node_ref=trigger_ref
                    class=format!("dm-select-trigger {}", class)
                    class:dm-select-open=move || is_open.get()
                    class:dm-select-disabled=move || interaction_disabled.get()
                    class:dm-select-error=has_error
                    tabindex=move || if interaction_disabled.get() { "-1" } else { "0" }
                    role="combobox"
                    aria-haspopup="listbox"
                    aria-expanded=move || is_open.get().to_string()
                    aria-required=required.to_string()
                    aria-invalid=has_error.to_string()
                    on:click=handle_toggle
                    on:keydown=handle_trigger_keydown
                >
                    <div class="dm-select-display">{display_span}</div>
                    <div class="dm-select-icons">
                        <Show when=move || clearable && has_selection.get()>
                            <button
                                type="button"
                                class="dm-select-clear"
                                aria-label="Clear selection"
                                on:click=handle_clear
                            >
                                "✕"
                            </button>
                        </Show>
                        <span class="dm-select-arrow" class:dm-select-arrow-up=move || is_open.get()>
                            "▼"
                        </span>
                    </div>
                </div>

                <Show when=move || is_open.get()>
                    <div
                        class="dm-select-dropdown"
                        style:max-height=max_height.clone()
                        role="listbox"
                        aria-multiselectable=multiple.to_string()
                    >
                        <Show when=move || searchable>
                            <div class="dm-select-search">
                                <input
                                    type="text"
                                    class="dm-select-search-input"
                                    placeholder=search_placeholder.get_value()
                                    prop:value=move || search_term.get()
                                    node_ref=search_input_ref
                                    on:input=handle_search_input
                                    on:keydown=handle_search_keydown
                                />
                            </div>
                        </Show>
                        <div class="dm-select-options">{render_options_list}</div>
                    </div>
                </Show>
            </div>
            {helper
                .map(|text| {
                    view! {
                        <p class="dm-select-helper" class:dm-select-error-text=has_error>{text}</p>
                    }
                })}
        </div>
    }
}
