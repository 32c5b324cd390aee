//! Campaigns page: searchable, filterable campaign grid

use dm_assistant_types::models::{sort_by_activity, Campaign, CampaignStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::actions::CampaignActions;
use crate::app::{ActiveScreen, AppState};
use crate::components::{
    CampaignCard, CampaignFormModal, Modal, ModalType, Select, SelectOption, SelectValue,
    SelectionChange,
};

fn status_filter_options() -> Vec<SelectOption> {
    CampaignStatus::all()
        .into_iter()
        .map(|status| SelectOption::new(status.label(), status.label()))
        .collect()
}

fn status_from_label(label: &str) -> Option<CampaignStatus> {
    CampaignStatus::all().into_iter().find(|s| s.label() == label)
}

#[component]
pub fn Campaigns() -> impl IntoView {
    let state = expect_context::<AppState>();
    let campaigns = state.campaigns;
    let current_id = state.current_campaign_id;
    let active_screen = state.active_screen;
    let actions = CampaignActions::new(state);

    // View and filter state
    let search_query = RwSignal::new(String::new());
    let status_filter = RwSignal::new(Vec::<SelectValue>::new());
    let show_form_modal = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Campaign>::None);
    let delete_confirm = RwSignal::new(Option::<Campaign>::None);
    let message = RwSignal::new(Option::<(String, bool)>::None);

    let show_message = move |msg: String, is_error: bool| {
        message.set(Some((msg, is_error)));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            message.set(None);
        });
    };

    // Refresh on entry so archive/delete done elsewhere is reflected
    {
        let actions = actions.clone();
        Effect::new(move |_| {
            actions.refresh_list();
        });
    }

    // Filtered and sorted campaigns
    let filtered_campaigns = Memo::new(move |_| {
        let query = search_query.get().to_lowercase();
        let statuses: Vec<CampaignStatus> = status_filter
            .get()
            .iter()
            .filter_map(|v| status_from_label(&v.to_string()))
            .collect();

        let mut list: Vec<Campaign> = campaigns
            .get()
            .into_iter()
            .filter(|c| {
                if !query.is_empty()
                    && !c.name.to_lowercase().contains(&query)
                    && !c.setting.to_lowercase().contains(&query)
                {
                    return false;
                }
                statuses.is_empty() || statuses.contains(&c.status)
            })
            .collect();
        sort_by_activity(&mut list);
        list
    });

    let total_count = Memo::new(move |_| campaigns.with(|all| all.len()));
    let shown_count = Memo::new(move |_| filtered_campaigns.with(|shown| shown.len()));

    let on_open = Callback::new({
        let actions = actions.clone();
        move |campaign_id: Uuid| {
            actions.open(campaign_id, move || {
                show_message("Campaign opened".to_string(), false);
            });
        }
    });

    let on_start_session = Callback::new({
        let actions = actions.clone();
        move |campaign_id: Uuid| {
            actions.start_session(campaign_id, move |result| match result {
                Ok(updated) => show_message(format!("{} started", updated.session_label()), false),
                Err(e) => show_message(format!("Failed: {}", e), true),
            });
        }
    });

    let on_archive = Callback::new({
        let actions = actions.clone();
        move |campaign_id: Uuid| {
            actions.archive(campaign_id, move || {
                show_message("Campaign archived".to_string(), false);
            });
        }
    });

    let execute_delete = {
        let actions = actions.clone();
        move || {
            let Some(campaign) = delete_confirm.get_untracked() else {
                return;
            };
            actions.delete(campaign.id, move || {
                show_message("Campaign deleted".to_string(), false);
            });
            delete_confirm.set(None);
        }
    };

    view! {
        <div class="page campaigns">
            <header class="page-header">
                <div class="header-left">
                    <h1>"Campaigns"</h1>
                    <p class="subtitle">
                        {move || format!("{} of {} campaigns", shown_count.get(), total_count.get())}
                    </p>
                </div>
                <div class="header-actions">
                    <button
                        class="dm-button dm-button--primary"
                        on:click=move |_| {
                            editing.set(None);
                            show_form_modal.set(true);
                        }
                    >
                        "➕ New Campaign"
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

            // Toolbar
            <div class="toolbar">
                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Search campaigns..."
                        prop:value=move || search_query.get()
                        on:input=move |ev| search_query.set(event_target_value(&ev))
                    />
                </div>

                <div class="status-filter">
                    <Select
                        options=status_filter_options()
                        value=Signal::derive(move || status_filter.get())
                        on_change=Callback::new(move |change: SelectionChange| {
                            status_filter.set(change.values);
                        })
                        placeholder="All statuses".to_string()
                        multiple=true
                        clearable=true
                    />
                </div>
            </div>

            // Campaign grid
            <Show
                when=move || !filtered_campaigns.get().is_empty()
                fallback=move || view! {
                    <div class="empty-state">
                        <span class="empty-icon">"🏰"</span>
                        {move || if total_count.get() == 0 {
                            view! {
                                <h3>"No campaigns yet"</h3>
                                <p>"Create your first campaign to get started!"</p>
                                <button
                                    class="dm-button dm-button--primary"
                                    on:click=move |_| {
                                        editing.set(None);
                                        show_form_modal.set(true);
                                    }
                                >
                                    "Create Campaign"
                                </button>
                            }.into_any()
                        } else {
                            view! {
                                <h3>"No matches"</h3>
                                <p>"Try a different search or status filter."</p>
                            }.into_any()
                        }}
                    </div>
                }
            >
                <div class="campaign-grid">
                    <For
                        each=move || filtered_campaigns.get()
                        key=|c| (c.id, c.updated_at)
                        children=move |campaign| {
                            let campaign_id = campaign.id;
                            let campaign_for_edit = campaign.clone();
                            let campaign_for_delete = campaign.clone();
                            let is_current = Memo::new(move |_| {
                                current_id.get() == Some(campaign_id)
                            });

                            view! {
                                <CampaignCard
                                    campaign=campaign
                                    is_current=is_current
                                    on_open=Callback::new(move |_| on_open.run(campaign_id))
                                    on_edit=Callback::new(move |_| {
                                        editing.set(Some(campaign_for_edit.clone()));
                                        show_form_modal.set(true);
                                    })
                                    on_start_session=Callback::new(move |_| {
                                        on_start_session.run(campaign_id)
                                    })
                                    on_archive=Callback::new(move |_| on_archive.run(campaign_id))
                                    on_delete=Callback::new(move |_| {
                                        delete_confirm.set(Some(campaign_for_delete.clone()));
                                    })
                                />
                            }
                        }
                    />
                </div>
            </Show>

            // Shortcut to the characters of the open campaign
            <Show when=move || current_id.get().is_some()>
                <div class="page-footer">
                    <button
                        class="dm-button dm-button--ghost"
                        on:click=move |_| active_screen.set(ActiveScreen::Characters)
                    >
                        "Manage characters of the open campaign →"
                    </button>
                </div>
            </Show>

            <CampaignFormModal
                is_open=show_form_modal
                editing=editing
                on_saved=Callback::new(move |_| {
                    show_message("Campaign saved".to_string(), false);
                })
            />

            <Modal
                is_open=Signal::derive(move || delete_confirm.get().is_some())
                title="Delete Campaign".to_string()
                message="Are you sure? This removes the campaign and all of its data. This action cannot be undone.".to_string()
                modal_type=ModalType::Danger
                confirm_text="Delete".to_string()
                on_confirm=Callback::new(move |_| execute_delete())
                on_cancel=Callback::new(move |_| delete_confirm.set(None))
            />
        </div>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_options_cover_all_statuses() {
        let options = status_filter_options();
        assert_eq!(options.len(), CampaignStatus::all().len());
        for option in &options {
            assert!(status_from_label(&option.value.to_string()).is_some());
        }
    }

    #[test]
    fn test_status_label_roundtrip() {
        assert_eq!(status_from_label("On Hold"), Some(CampaignStatus::OnHold));
        assert_eq!(status_from_label("nonsense"), None);
    }
}
