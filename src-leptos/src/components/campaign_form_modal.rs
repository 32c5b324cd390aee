//! Campaign create/edit modal
//!
//! One modal for both flows: pass an existing campaign to edit it, leave
//! it empty to create a new one.

use dm_assistant_types::models::{
    Campaign, CreateCampaignRequest, DifficultyLevel, UpdateCampaignRequest,
};
use leptos::prelude::*;

use crate::actions::CampaignActions;
use crate::app::AppState;
use crate::components::select::{Select, SelectOption, SelectValue, SelectionChange};

#[derive(Clone, Copy, PartialEq, Default)]
enum FormStatus {
    #[default]
    Idle,
    Saving,
    Success,
    Error,
}

const DEFAULT_SETTING: &str = "D&D 5e";
const DEFAULT_PLAYER_COUNT: &str = "5";

fn difficulty_options() -> Vec<SelectOption> {
    DifficultyLevel::all()
        .into_iter()
        .map(|level| SelectOption::new(level.label(), level.label()))
        .collect()
}

fn difficulty_from_value(value: &str) -> DifficultyLevel {
    match value {
        "Casual" => DifficultyLevel::Casual,
        "Hard" => DifficultyLevel::Hard,
        "Deadly" => DifficultyLevel::Deadly,
        _ => DifficultyLevel::Normal,
    }
}

#[component]
pub fn CampaignFormModal(
    /// Signal controlling modal visibility
    is_open: RwSignal<bool>,
    /// Campaign being edited, empty for create mode
    editing: RwSignal<Option<Campaign>>,
    /// Callback when the campaign was saved
    on_saved: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let actions = CampaignActions::new(state);

    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let setting = RwSignal::new(DEFAULT_SETTING.to_string());
    let dm_notes = RwSignal::new(String::new());
    let player_count = RwSignal::new(DEFAULT_PLAYER_COUNT.to_string());
    let difficulty = RwSignal::new(vec![SelectValue::from(DifficultyLevel::Normal.label())]);
    let status = RwSignal::new(FormStatus::Idle);
    let message = RwSignal::new(String::new());

    let is_edit = Memo::new(move |_| editing.with(|e| e.is_some()));

    // Populate fields when the modal opens
    Effect::new(move |_| {
        if !is_open.get() {
            return;
        }
        match editing.get() {
            Some(campaign) => {
                name.set(campaign.name);
                description.set(campaign.description);
                setting.set(campaign.setting);
                dm_notes.set(campaign.dm_notes);
                player_count.set(campaign.player_count.to_string());
                difficulty.set(vec![SelectValue::from(
                    campaign.info.difficulty_level.label(),
                )]);
            }
            None => {
                name.set(String::new());
                description.set(String::new());
                setting.set(DEFAULT_SETTING.to_string());
                dm_notes.set(String::new());
                player_count.set(DEFAULT_PLAYER_COUNT.to_string());
                difficulty.set(vec![SelectValue::from(DifficultyLevel::Normal.label())]);
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

    let on_submit = Callback::new(move |_: ()| {
        let campaign_name = name.get();
        if campaign_name.trim().is_empty() {
            status.set(FormStatus::Error);
            message.set("Campaign name is required".to_string());
            return;
        }
        let players = match player_count.get().trim().parse::<u8>() {
            Ok(n) if (1..=8).contains(&n) => n,
            _ => {
                status.set(FormStatus::Error);
                message.set("Player count must be between 1 and 8".to_string());
                return;
            }
        };
        let difficulty_level = difficulty
            .get()
            .first()
            .map(|v| difficulty_from_value(&v.to_string()))
            .unwrap_or_default();

        status.set(FormStatus::Saving);
        message.set(String::new());

        match editing.get_untracked() {
            Some(campaign) => {
                let req = UpdateCampaignRequest {
                    name: Some(campaign_name.trim().to_string()),
                    description: Some(description.get()),
                    setting: Some(setting.get()),
                    dm_notes: Some(dm_notes.get()),
                    difficulty_level: Some(difficulty_level),
                    player_count: Some(players),
                    is_active: None,
                };
                actions.update(campaign.id, req, close_after_save);
            }
            None => {
                let notes = dm_notes.get();
                let req = CreateCampaignRequest {
                    name: campaign_name.trim().to_string(),
                    description: description.get(),
                    setting: setting.get(),
                    dm_notes: (!notes.trim().is_empty()).then_some(notes),
                    difficulty_level,
                    player_count: Some(players),
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
                <div class="dm-modal campaign-form-modal" on:click=|e| e.stop_propagation()>
                    <h2 class="dm-modal-title">
                        {move || if is_edit.get() { "Edit Campaign" } else { "Create New Campaign" }}
                    </h2>

                    <Show when=move || !message.get().is_empty()>
                        <div class=status_class>
                            {move || message.get()}
                        </div>
                    </Show>

                    <div class="form-field">
                        <label class="form-label">"Campaign Name" <span class="form-required">"*"</span></label>
                        <input
                            type="text"
                            class="form-input"
                            placeholder="Enter campaign name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-field">
                        <label class="form-label">"Description"</label>
                        <textarea
                            class="form-textarea"
                            placeholder="Brief description of the campaign"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-row">
                        <div class="form-field">
                            <label class="form-label">"Setting"</label>
                            <input
                                type="text"
                                class="form-input"
                                prop:value=move || setting.get()
                                on:input=move |ev| setting.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label class="form-label">"Max Players"</label>
                            <input
                                type="number"
                                class="form-input"
                                min="1"
                                max="8"
                                prop:value=move || player_count.get()
                                on:input=move |ev| player_count.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <Select
                        options=difficulty_options()
                        value=Signal::derive(move || difficulty.get())
                        on_change=Callback::new(move |change: SelectionChange| {
                            difficulty.set(change.values);
                        })
                        label="Difficulty".to_string()
                    />

                    <div class="form-field">
                        <label class="form-label">"DM Notes"</label>
                        <textarea
                            class="form-textarea"
                            placeholder="Private notes, only you will see these"
                            prop:value=move || dm_notes.get()
                            on:input=move |ev| dm_notes.set(event_target_value(&ev))
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
                                _ => "Create Campaign",
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
