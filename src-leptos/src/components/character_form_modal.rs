//! Character create/edit modal
//!
//! Builds on the preset selects for race, class and alignment. Characters
//! always belong to the currently open campaign.

use dm_assistant_types::models::{
    CreateCharacterRequest, PlayerCharacter, UpdateCharacterRequest, MAX_LEVEL,
};
use leptos::prelude::*;

use crate::actions::CharacterActions;
use crate::app::AppState;
use crate::components::select::{
    AlignmentSelect, ClassSelect, RaceSelect, SelectValue, SelectionChange,
};

#[derive(Clone, Copy, PartialEq, Default)]
enum FormStatus {
    #[default]
    Idle,
    Saving,
    Success,
    Error,
}

#[component]
pub fn CharacterFormModal(
    /// Signal controlling modal visibility
    is_open: RwSignal<bool>,
    /// Character being edited, empty for create mode
    editing: RwSignal<Option<PlayerCharacter>>,
    /// Callback when the character was saved
    on_saved: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let current_campaign_id = state.current_campaign_id;
    let actions = CharacterActions::new(state);

    let name = RwSignal::new(String::new());
    let race = RwSignal::new(Vec::<SelectValue>::new());
    let class = RwSignal::new(Vec::<SelectValue>::new());
    let alignment = RwSignal::new(Vec::<SelectValue>::new());
    let level = RwSignal::new("1".to_string());
    let max_hp = RwSignal::new("10".to_string());
    let background = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::Idle);
    let message = RwSignal::new(String::new());

    let is_edit = Memo::new(move |_| editing.with(|e| e.is_some()));

    // Populate fields when the modal opens
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        match editing.get() {
            Some(character) => {
                name.set(character.name);
                race.set(vec![SelectValue::from(character.race)]);
                class.set(vec![SelectValue::from(character.class)]);
                alignment.set(if character.alignment.is_empty() {
                    vec![]
                } else {
                    vec![SelectValue::from(character.alignment)]
                });
                level.set(character.level.to_string());
                max_hp.set(character.max_hp.to_string());
                background.set(character.background);
                notes.set(character.notes);
            }
            None => {
                name.set(String::new());
                race.set(vec![]);
                class.set(vec![]);
                alignment.set(vec![]);
                level.set("1".to_string());
                max_hp.set("10".to_string());
                background.set(String::new());
                notes.set(String::new());
            }
        }
    });

    // Reset transient state when the modal closes
    Effect::new(move |_| {
        if !is_open.get() {
            status.set(FormStatus::Idle);
            message.set(String::new());
        }
    });

    let close_after_save = move || {
        status.set(FormStatus::Success);
        on_saved.run(());
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(800).await;
            is_open.set(false);
        });
    };

    let fail = move |text: &str| {
        status.set(FormStatus::Error);
        message.set(text.to_string());
    };

    let on_submit = Callback::new(move |_: ()| {
        let Some(campaign_id) = current_campaign_id.get_untracked() else {
            fail("Open a campaign before adding characters");
            return;
        };
        let character_name = name.get();
        if character_name.trim().is_empty() {
            fail("Character name is required");
            return;
        }
        let Some(race_value) = race.get().first().map(|v| v.to_string()) else {
            fail("Pick a race");
            return;
        };
        let Some(class_value) = class.get().first().map(|v| v.to_string()) else {
            fail("Pick a class");
            return;
        };
        let Ok(level_value) = level.get().trim().parse::<u8>() else {
            fail("Level must be a number");
            return;
        };
        if !(1..=MAX_LEVEL).contains(&level_value) {
            fail("Level must be between 1 and 20");
            return;
        }
        let Ok(hp_value) = max_hp.get().trim().parse::<u16>() else {
            fail("Max HP must be a number");
            return;
        };
        if hp_value == 0 {
            fail("Max HP must be at least 1");
            return;
        }
        let alignment_value = alignment.get().first().map(|v| v.to_string());
        let notes_value = notes.get();

        status.set(FormStatus::Saving);
        message.set(String::new());

        match editing.get_untracked() {
            Some(character) => {
                let req = UpdateCharacterRequest {
                    name: Some(character_name.trim().to_string()),
                    race: Some(race_value),
                    class: Some(class_value),
                    level: Some(level_value),
                    max_hp: Some(hp_value),
                    background: Some(background.get()),
                    alignment: alignment_value,
                    notes: Some(notes_value),
                    is_active: None,
                };
                actions.update(campaign_id, character.id, req, close_after_save);
            }
            None => {
                let req = CreateCharacterRequest {
                    campaign_id,
                    name: character_name.trim().to_string(),
                    race: race_value,
                    class: class_value,
                    level: level_value,
                    max_hp: hp_value,
                    background: background.get(),
                    alignment: alignment_value,
                    notes: (!notes_value.trim().is_empty()).then_some(notes_value),
                };
                actions.create(req, move |result| match result {
                    Ok(_) => close_after_save(),
                    Err(e) => {
                        status.set(FormStatus::Error);
                        message.set(format!("Error: {}", e));
                    }
                });
            }
        }
    });

    let on_close = move |_| {
        is_open.set(false);
    };

    let status_class = move || match status.get() {
        FormStatus::Idle => "",
        FormStatus::Saving => "alert alert--info",
        FormStatus::Success => "alert alert--success",
        FormStatus::Error => "alert alert--error",
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="dm-modal-overlay" on:click=on_close>
                <div class="dm-modal character-form-modal" on:click=|e| e.stop_propagation()>
                    <h2 class="dm-modal-title">
                        {move || if is_edit.get() { "Edit Character" } else { "New Character" }}
                    </h2>

                    <Show when=move || !message.get().is_empty()>
                        <div class=status_class>
                            {move || message.get()}
                        </div>
                    </Show>

                    <div class="form-field">
                        <label class="form-label">"Name" <span class="form-required">"*"</span></label>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Character name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <RaceSelect
                            value=Signal::derive(move || race.get())
                            on_change=Callback::new(move |change: SelectionChange| {
                                race.set(change.values);
                            })
                            label="Race".to_string()
                            searchable=true
                            required=true
                        />
                        <ClassSelect
                            value=Signal::derive(move || class.get())
                            on_change=Callback::new(move |change: SelectionChange| {
                                class.set(change.values);
                            })
                            label="Class".to_string()
                            searchable=true
                            required=true
                        />
                    </div>

                    <AlignmentSelect
                        value=Signal::derive(move || alignment.get())
                        on_change=Callback::new(move |change: SelectionChange| {
                            alignment.set(change.values);
                        })
                        label="Alignment".to_string()
                        clearable=true
                    />

                    <div class="form-row">
                        <div class="form-field">
                            <label class="form-label">"Level"</label>
                            <input
                                type="number"
                                class="form-input"
                                min="1"
                                max="20"
                                prop:value=move || level.get()
                                on:input=move |ev| level.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Max HP"</label>
                            <input
                                type="number"
                                class="form-input"
                                min="1"
                                prop:value=move || max_hp.get()
                                on:input=move |ev| max_hp.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <div class="form-field">
                        <label class="form-label">"Background"</label>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Sage, soldier, outlander..."
                            prop:value=move || background.get()
                            on:input=move |ev| background.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label class="form-label">"Notes"</label>
                        <textarea
                            class="form-textarea"
                            prop:value=move || notes.get()
                            on:input=move |ev| notes.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="dm-modal-footer">
                        <button class="dm-button dm-button--secondary" on:click=on_close>
                            "Cancel"
                        </button>
                        <button
                            class="dm-button dm-button--primary"
                            disabled=move || matches!(status.get(), FormStatus::Saving | FormStatus::Success)
                            on:click=move |_| on_submit.run(())
                        >
                            {move || match status.get() {
                                FormStatus::Saving => "Saving...",
                                _ if is_edit.get() => "Save Changes",
                                _ => "Create Character",
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
