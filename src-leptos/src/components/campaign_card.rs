//! Campaign card component for grid view

use dm_assistant_types::models::{Campaign, CampaignStatus, HealthStatus};
use leptos::prelude::*;

use crate::formatters::{format_date, format_session_recency, get_session_recency_color};

#[component]
pub fn CampaignCard(
    #[prop(into)] campaign: Campaign,
    #[prop(into)] is_current: Signal<bool>,
    #[prop(into)] on_open: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_start_session: Callback<()>,
    #[prop(into)] on_archive: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let name = campaign.name.clone();
    let description = campaign.description.clone();
    let setting = campaign.setting.clone();
    let status = campaign.status;
    let playable = campaign.is_playable();
    let modifiable = campaign.can_modify();

    let sessions = campaign.info.total_sessions;
    let players = campaign.active_characters;
    let avg_level = crate::formatters::format_average_level(campaign.average_level);
    let quest_percent = campaign.quest_progress();

    let recency_text = format_session_recency(campaign.last_session_date);
    let recency_class = get_session_recency_color(campaign.last_session_date);
    let created = format_date(campaign.created_at);

    let health = campaign.health();
    let health_issues = health.issues.join(", ");
    let health_class = match health.status {
        HealthStatus::Healthy => "",
        HealthStatus::Warning => "has-warning",
        HealthStatus::Attention => "has-attention",
    };

    view! {
        <div
            class=move || format!(
                "campaign-card {} {}",
                if is_current.get() { "is-current" } else { "" },
                health_class
            )
            on:click=move |_| on_open.run(())
        >
            // Header
            <div class="campaign-card-header">
                <span class=format!("status-badge {}", status_class(status))>
                    {status_icon(status)} " " {status.label()}
                </span>
                {move || is_current.get().then(|| view! {
                    <span class="current-badge">"OPEN"</span>
                })}
                {(!health.issues.is_empty()).then(|| view! {
                    <span class="health-badge" title=health_issues.clone()>"⚠"</span>
                })}
            </div>

            // Title
            <div class="campaign-card-title">
                <span class="campaign-name">{name.clone()}</span>
                <span class="campaign-setting">{setting.clone()}</span>
            </div>
            {(!description.is_empty()).then(|| view! {
                <p class="campaign-card-description">{description.clone()}</p>
            })}

            // Stats
            <div class="campaign-card-stats">
                <div class="stat-item">
                    <span class="stat-label">"Sessions"</span>
                    <span class="stat-value">{sessions}</span>
                </div>
                <div class="stat-item">
                    <span class="stat-label">"Players"</span>
                    <span class="stat-value">{players}</span>
                </div>
                <div class="stat-item">
                    <span class="stat-label">"Avg level"</span>
                    <span class="stat-value">{avg_level.clone()}</span>
                </div>
            </div>

            // Quest progress
            <div class="campaign-card-quests">
                <span class="quest-label">"Quests"</span>
                <div class="quest-bar">
                    <div
                        class="quest-fill"
                        style=format!("width: {}%", quest_percent)
                    ></div>
                </div>
                <span class="quest-value">{quest_percent}"%"</span>
            </div>

            // Recency
            <div class="campaign-card-meta">
                <span class=format!("recency recency--{}", recency_class)>{recency_text.clone()}</span>
                <span class="created">"Created " {created.clone()}</span>
            </div>

            // Actions
            <div class="campaign-card-actions">
                {playable.then(|| view! {
                    <button
                        class="dm-button dm-button--icon dm-button--sm dm-button--success"
                        title="Start session"
                        on:click=move |e| {
                            e.stop_propagation();
                            on_start_session.run(());
                        }
                    >
                        "🎲"
                    </button>
                })}
                {modifiable.then(|| view! {
                    <button
                        class="dm-button dm-button--icon dm-button--sm"
                        title="Edit campaign"
                        on:click=move |e| {
                            e.stop_propagation();
                            on_edit.run(());
                        }
                    >
                        "✏️"
                    </button>
                })}
                {(status != CampaignStatus::Archived).then(|| view! {
                    <button
                        class="dm-button dm-button--icon dm-button--sm"
                        title="Archive campaign"
                        on:click=move |e| {
                            e.stop_propagation();
                            on_archive.run(());
                        }
                    >
                        "📦"
                    </button>
                })}
                <button
                    class="dm-button dm-button--icon dm-button--sm dm-button--danger"
                    title="Delete campaign"
                    on:click=move |e| {
                        e.stop_propagation();
                        on_delete.run(());
                    }
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}

fn status_class(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Planning => "status-badge--planning",
        CampaignStatus::Active => "status-badge--active",
        CampaignStatus::OnHold => "status-badge--onhold",
        CampaignStatus::Completed => "status-badge--completed",
        CampaignStatus::Archived => "status-badge--archived",
    }
}

fn status_icon(status: CampaignStatus) -> &'static str {
    match status {
        CampaignStatus::Planning => "📋",
        CampaignStatus::Active => "🎲",
        CampaignStatus::OnHold => "⏸",
        CampaignStatus::Completed => "✅",
        CampaignStatus::Archived => "📦",
    }
}
