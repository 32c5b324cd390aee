//! Dashboard page: campaign overview and quick actions

use dm_assistant_types::models::{sort_by_activity, Campaign, CampaignStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::CampaignActions;
use crate::app::{ActiveScreen, AppState};
use crate::components::{Button, ButtonVariant, CampaignFormModal, StatsCard};
use crate::formatters::{format_average_level, format_session_recency};

/// Aggregate numbers shown in the stats grid.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
struct DashboardStats {
    total_campaigns: usize,
    active_campaigns: usize,
    total_sessions: u32,
    active_characters: u32,
    needs_attention: usize,
}

impl DashboardStats {
    fn from_campaigns(campaigns: &[Campaign]) -> Self {
        Self {
            total_campaigns: campaigns.len(),
            active_campaigns: campaigns
                .iter()
                .filter(|c| c.status == CampaignStatus::Active)
                .count(),
            total_sessions: campaigns.iter().map(|c| c.info.total_sessions).sum(),
            active_characters: campaigns.iter().map(|c| c.active_characters).sum(),
            needs_attention: campaigns.iter().filter(|c| c.needs_attention()).count(),
        }
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_context::<AppState>();
    let campaigns = state.campaigns;
    let current_id = state.current_campaign_id;
    let active_screen = state.active_screen;
    let actions = CampaignActions::new(state);

    let show_create_modal = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Campaign>::None);
    let message = RwSignal::new(Option::<(String, bool)>::None);

    let show_message = move |msg: String, is_error: bool| {
        message.set(Some((msg, is_error)));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            message.set(None);
        });
    };

    // Compute stats from campaigns
    let stats = Memo::new(move |_| DashboardStats::from_campaigns(&campaigns.get()));

    let current_campaign = Memo::new(move |_| {
        let id = current_id.get()?;
        campaigns.with(|all| all.iter().find(|c| c.id == id).cloned())
    });

    // Most recently played campaigns (top 5)
    let recent_campaigns = Memo::new(move |_| {
        let mut recent = campaigns.get();
        sort_by_activity(&mut recent);
        recent.into_iter().take(5).collect::<Vec<_>>()
    });

    // Greeting
    let greeting = Memo::new(move |_| match current_campaign.get() {
        Some(campaign) => format!("Running \"{}\"", campaign.name),
        None => "Welcome, Dungeon Master!".to_string(),
    });

    let on_start_session = {
        let actions = actions.clone();
        move || {
            let Some(campaign) = current_campaign.get_untracked() else {
                return;
            };
            actions.start_session(campaign.id, move |result| match result {
                Ok(updated) => show_message(format!("{} started", updated.session_label()), false),
                Err(e) => show_message(format!("Failed: {}", e), true),
            });
        }
    };

    let on_close_campaign = {
        let actions = actions.clone();
        move || {
            actions.close_current();
            show_message("Campaign closed".to_string(), false);
        }
    };

    let on_open_campaign = {
        let actions = actions.clone();
        move |campaign_id| {
            actions.open(campaign_id, move || {
                show_message("Campaign opened".to_string(), false);
            });
        }
    };

    let go_to_campaigns = move || active_screen.set(ActiveScreen::Campaigns);

    view! {
        <div class="page dashboard">
            <header class="page-header">
                <div class="header-left">
                    <h1>{greeting}</h1>
                    <p class="subtitle">"Overview of your campaigns"</p>
                </div>
                <div class="header-actions">
                    <Button
                        text="➕ New Campaign".to_string()
                        variant=ButtonVariant::Primary
                        on_click=move || {
                            editing.set(None);
                            show_create_modal.set(true);
                        }
                    />
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

            // Stats grid
            <section class="stats-grid stats-grid--5">
                <StatsCard
                    title="Campaigns".to_string()
                    value=Signal::derive(move || stats.get().total_campaigns.to_string())
                    icon="🏰".to_string()
                    color="blue".to_string()
                />
                <StatsCard
                    title="Active".to_string()
                    value=Signal::derive(move || stats.get().active_campaigns.to_string())
                    icon="🎲".to_string()
                    color="green".to_string()
                />
                <StatsCard
                    title="Sessions Played".to_string()
                    value=Signal::derive(move || stats.get().total_sessions.to_string())
                    icon="📅".to_string()
                    color="purple".to_string()
                />
                <StatsCard
                    title="Characters".to_string()
                    value=Signal::derive(move || stats.get().active_characters.to_string())
                    icon="🧙".to_string()
                    color="cyan".to_string()
                />
                <StatsCard
                    title="Needs Attention".to_string()
                    value=Signal::derive(move || stats.get().needs_attention.to_string())
                    icon="⚠️".to_string()
                    color="orange".to_string()
                    hint="Campaigns with missing content or stale sessions".to_string()
                />
            </section>

            // Two column layout
            <div class="dashboard-columns">
                // Current campaign
                <section class="dashboard-card">
                    <h2>"Current Campaign"</h2>
                    {move || match current_campaign.get() {
                        Some(campaign) => {
                            let quest_percent = campaign.quest_progress();
                            let recency = format_session_recency(campaign.last_session_date);
                            let playable = campaign.is_playable();
                            let on_start = on_start_session.clone();
                            let on_close = on_close_campaign.clone();

                            view! {
                                <div class="current-campaign-detail">
                                    <div class="campaign-header">
                                        <span class="campaign-title">{campaign.display_name()}</span>
                                        <span class="campaign-recency">{recency}</span>
                                    </div>
                                    <div class="campaign-numbers">
                                        <span>{format!("{} players", campaign.player_count)}</span>
                                        <span>{format!("Avg level {}", format_average_level(campaign.average_level))}</span>
                                    </div>
                                    <div class="quest-row">
                                        <span>"Quests"</span>
                                        <div class="quest-bar">
                                            <div class="quest-fill" style=format!("width: {}%", quest_percent)></div>
                                        </div>
                                        <span>{quest_percent}"%"</span>
                                    </div>
                                    <div class="campaign-actions">
                                        {playable.then(|| {
                                            let on_start = on_start.clone();
                                            view! {
                                                <button
                                                    class="dm-button dm-button--success"
                                                    on:click=move |_| on_start()
                                                >
                                                    "🎲 Start Session"
                                                </button>
                                            }
                                        })}
                                        <button
                                            class="dm-button dm-button--secondary"
                                            on:click=move |_| on_close()
                                        >
                                            "Close Campaign"
                                        </button>
                                    </div>
                                </div>
                            }.into_any()
                        }
                        None => view! {
                            <div class="no-campaign">
                                <span class="empty-icon">"🗺️"</span>
                                <p>"No campaign open"</p>
                                <button
                                    class="dm-button dm-button--primary"
                                    on:click=move |_| go_to_campaigns()
                                >
                                    "Browse Campaigns"
                                </button>
                            </div>
                        }.into_any()
                    }}
                </section>

                // Recent campaigns
                <section class="dashboard-card">
                    <h2>"Recent Campaigns"</h2>
                    <div class="recent-campaigns-list">
                        <For
                            each=move || recent_campaigns.get()
                            key=|c| c.id
                            children=move |campaign| {
                                let campaign_id = campaign.id;
                                let name = campaign.name.clone();
                                let recency = format_session_recency(campaign.last_session_date);
                                let session = campaign.session_label();
                                let is_current = Memo::new(move |_| {
                                    current_id.get() == Some(campaign_id)
                                });
                                let on_open = on_open_campaign.clone();

                                view! {
                                    <div
                                        class=move || format!(
                                            "recent-campaign-row {}",
                                            if is_current.get() { "is-current" } else { "" }
                                        )
                                        on:click=move |_| on_open(campaign_id)
                                    >
                                        <span class="row-name">{name.clone()}</span>
                                        <span class="row-session">{session.clone()}</span>
                                        <span class="row-recency">{recency.clone()}</span>
                                    </div>
                                }
                            }
                        />
                        <Show when=move || recent_campaigns.get().is_empty()>
                            <p class="empty-hint">"Campaigns you play will show up here."</p>
                        </Show>
                    </div>
                </section>
            </div>

            <CampaignFormModal
                is_open=show_create_modal
                editing=editing
                on_saved=Callback::new(move |_| {
                    show_message("Campaign saved".to_string(), false);
                })
            />
        </div>
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use dm_assistant_types::models::CampaignInfo;
    use uuid::Uuid;

    fn campaign(status: CampaignStatus, sessions: u32, characters: u32) -> Campaign {
        Campaign {
            id: Uuid::new_v4(),
            name: "Test".to_string(),
            description: String::new(),
            setting: "D&D 5e".to_string(),
            dm_notes: String::new(),
            current_session: sessions,
            is_active: status == CampaignStatus::Active,
            info: CampaignInfo {
                total_sessions: sessions,
                total_npcs: 1,
                total_quests: 1,
                ..Default::default()
            },
            status,
            player_count: 4,
            active_characters: characters,
            average_level: 3.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_session_date: Some(Utc::now()),
        }
    }

    #[test]
    fn test_stats_aggregate_over_campaigns() {
        let campaigns = vec![
            campaign(CampaignStatus::Active, 10, 4),
            campaign(CampaignStatus::Planning, 0, 0),
            campaign(CampaignStatus::Archived, 30, 5),
        ];
        let stats = DashboardStats::from_campaigns(&campaigns);
        assert_eq!(stats.total_campaigns, 3);
        assert_eq!(stats.active_campaigns, 1);
        assert_eq!(stats.total_sessions, 40);
        assert_eq!(stats.active_characters, 9);
    }

    #[test]
    fn test_stats_empty_list() {
        let stats = DashboardStats::from_campaigns(&[]);
        assert_eq!(stats, DashboardStats::default());
    }
}
