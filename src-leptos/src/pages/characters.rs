//! Characters page: party roster of the open campaign

use dm_assistant_types::models::PlayerCharacter;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::actions::CharacterActions;
use crate::app::{ActiveScreen, AppState};
use crate::components::select::{ClassSelect, RaceSelect};
use crate::components::{
    CharacterCard, CharacterFormModal, Modal, ModalType, SelectValue, SelectionChange,
};

#[component]
pub fn Characters() -> impl IntoView {
    let state = expect_context::<AppState>();
    let characters = state.characters;
    let campaigns = state.campaigns;
    let current_id = state.current_campaign_id;
    let active_screen = state.active_screen;
    let actions = CharacterActions::new(state);

    // View and filter state
    let search_query = RwSignal::new(String::new());
    let class_filter = RwSignal::new(Vec::<SelectValue>::new());
    let race_filter = RwSignal::new(Vec::<SelectValue>::new());
    let show_form_modal = RwSignal::new(false);
    let editing = RwSignal::new(Option::<PlayerCharacter>::None);
    let delete_confirm = RwSignal::new(Option::<PlayerCharacter>::None);
    let message = RwSignal::new(Option::<(String, bool)>::None);

    let show_message = move |msg: String, is_error: bool| {
        message.set(Some((msg, is_error)));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            message.set(None);
        });
    };

    // Reload the roster whenever another campaign becomes current
    {
        let actions = actions.clone();
        Effect::new(move |_| {
            let _ = current_id.get();
            actions.refresh_list();
        });
    }

    let campaign_name = Memo::new(move |_| {
        let id = current_id.get()?;
        campaigns.with(|all| all.iter().find(|c| c.id == id).map(|c| c.name.clone()))
    });

    // Filtered roster, active characters first
    let filtered_characters = Memo::new(move |_| {
        let query = search_query.get().to_lowercase();
        let class_value = class_filter.get().first().map(|v| v.to_string().to_lowercase());
        let race_value = race_filter.get().first().map(|v| v.to_string().to_lowercase());

        let mut list: Vec<PlayerCharacter> = characters
            .get()
            .into_iter()
            .filter(|c| {
                if !query.is_empty()
                    && !c.name.to_lowercase().contains(&query)
                    && !c.race.to_lowercase().contains(&query)
                    && !c.class.to_lowercase().contains(&query)
                {
                    return false;
                }
                if class_value.as_ref().is_some_and(|class| c.class.to_lowercase() != *class) {
                    return false;
                }
                if race_value.as_ref().is_some_and(|race| c.race.to_lowercase() != *race) {
                    return false;
                }
                true
            })
            .collect();
        list.sort_by(|a, b| b.is_active.cmp(&a.is_active).then(a.name.cmp(&b.name)));
        list
    });

    let total_count = Memo::new(move |_| characters.with(|all| all.len()));
    let shown_count = Memo::new(move |_| filtered_characters.with(|shown| shown.len()));

    let clear_filters = move || {
        search_query.set(String::new());
        class_filter.set(vec![]);
        race_filter.set(vec![]);
    };

    let on_level_up = Callback::new({
        let actions = actions.clone();
        move |(campaign_id, character_id): (Uuid, Uuid)| {
            actions.level_up(campaign_id, character_id, move |result| match result {
                Ok(character) => show_message(
                    format!("{} reached level {}", character.name, character.level),
                    false,
                ),
                Err(e) => show_message(format!("Failed: {}", e), true),
            });
        }
    });

    let on_toggle_active = Callback::new({
        let actions = actions.clone();
        move |(campaign_id, character_id): (Uuid, Uuid)| {
            actions.toggle_active(campaign_id, character_id);
        }
    });

    let execute_delete = {
        let actions = actions.clone();
        move || {
            let Some(character) = delete_confirm.get_untracked() else {
                return;
            };
            actions.delete(character.campaign_id, character.id, move || {
                show_message("Character deleted".to_string(), false);
            });
            delete_confirm.set(None);
        }
    };

    view! {
        <div class="page characters">
            <header class="page-header">
                <div class="header-left">
                    <h1>"Characters"</h1>
                    <p class="subtitle">
                        {move || match campaign_name.get() {
                            Some(name) => format!("Party of \"{}\" ({} shown)", name, shown_count.get()),
                            None => "No campaign open".to_string(),
                        }}
                    </p>
                </div>
                <div class="header-actions">
                    <button
                        class="dm-button dm-button--primary"
                        disabled=move || current_id.get().is_none()
                        on:click=move |_| {
                            editing.set(None);
                            show_form_modal.set(true);
                        }
                    >
                        "➕ New Character"
                    </button>
                </div>
            </header>

            // Message banner
            <Show when=move || message.get().is_some()>
                {move || {
                    let (msg, is_error) = message.get().unwrap_or_default();
                    view! {
                        <div class=format!("alert {}", if is_error { "alert--error" } else { "alert--success" })>
                            <span>{msg}</span>
                        </div>
                    }
                }}
            </Show>

            <Show
                when=move || current_id.get().is_some()
                fallback=move || view! {
                    <div class="empty-state">
                        <span class="empty-icon">"🧭"</span>
                        <h3>"No campaign open"</h3>
                        <p>"Characters belong to a campaign. Open one first."</p>
                        <button
                            class="dm-button dm-button--primary"
                            on:click=move |_| active_screen.set(ActiveScreen::Campaigns)
                        >
                            "Browse Campaigns"
                        </button>
                    </div>
                }
            >
                // Toolbar
                <div class="toolbar">
                    <div class="search-box">
                        <input
                            type="text"
                            placeholder="Search characters..."
                            prop:value=move || search_query.get()
                            on:input=move |ev| search_query.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="roster-filters">
                        <ClassSelect
                            value=Signal::derive(move || class_filter.get())
                            on_change=Callback::new(move |change: SelectionChange| {
                                class_filter.set(change.values);
                            })
                            placeholder="Any class".to_string()
                            searchable=true
                            clearable=true
                        />
                        <RaceSelect
                            value=Signal::derive(move || race_filter.get())
                            on_change=Callback::new(move |change: SelectionChange| {
                                race_filter.set(change.values);
                            })
                            placeholder="Any race".to_string()
                            searchable=true
                            clearable=true
                        />
                        <button
                            class="dm-button dm-button--ghost"
                            on:click=move |_| clear_filters()
                        >
                            "Clear filters"
                        </button>
                    </div>
                </div>

                // Roster grid
                <Show
                    when=move || !filtered_characters.get().is_empty()
                    fallback=move || view! {
                        <div class="empty-state">
                            <span class="empty-icon">"🧙"</span>
                            {move || if total_count.get() == 0 {
                                view! {
                                    <h3>"No characters yet"</h3>
                                    <p>"Create the first member of the party!"</p>
                                    <button
                                        class="dm-button dm-button--primary"
                                        on:click=move |_| {
                                            editing.set(None);
                                            show_form_modal.set(true);
                                        }
                                    >
                                        "Create Character"
                                    </button>
                                }.into_any()
                            } else {
                                view! {
                                    <h3>"No matches"</h3>
                                    <p>"Try different search terms or filters."</p>
                                }.into_any()
                            }}
                        </div>
                    }
                >
                    <div class="character-grid">
                        <For
                            each=move || filtered_characters.get()
                            key=|c| (c.id, c.updated_at)
                            children=move |character| {
                                let campaign_id = character.campaign_id;
                                let character_id = character.id;
                                let character_for_edit = character.clone();
                                let character_for_delete = character.clone();

                                view! {
                                    <CharacterCard
                                        character=character
                                        on_level_up=Callback::new(move |_| {
                                            on_level_up.run((campaign_id, character_id))
                                        })
                                        on_toggle_active=Callback::new(move |_| {
                                            on_toggle_active.run((campaign_id, character_id))
                                        })
                                        on_edit=Callback::new(move |_| {
                                            editing.set(Some(character_for_edit.clone()));
                                            show_form_modal.set(true);
                                        })
                                        on_delete=Callback::new(move |_| {
                                            delete_confirm.set(Some(character_for_delete.clone()));
                                        })
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <CharacterFormModal
                is_open=show_form_modal
                editing=editing
                on_saved=Callback::new(move |_| {
                    show_message("Character saved".to_string(), false);
                })
            />

            <Modal
                is_open=Signal::derive(move || delete_confirm.get().is_some())
                title="Delete Character".to_string()
                message="Are you sure? Achievements and relationships are removed with the character.".to_string()
                modal_type=ModalType::Danger
                confirm_text="Delete".to_string()
                on_confirm=Callback::new(move |_| execute_delete())
                on_cancel=Callback::new(move |_| delete_confirm.set(None))
            />
        </div>
    }
}
