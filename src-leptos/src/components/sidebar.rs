//! Sidebar navigation component

use leptos::prelude::*;

use crate::app::{ActiveScreen, AppState};

const VERSION: &str = env!("GIT_VERSION");

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = expect_context::<AppState>();
    let screen = state.active_screen;
    let campaigns = state.campaigns;
    let current_id = state.current_campaign_id;

    let nav_items = vec![
        ("Dashboard", ActiveScreen::Dashboard, "📊"),
        ("Campaigns", ActiveScreen::Campaigns, "🏰"),
        ("Characters", ActiveScreen::Characters, "🧙"),
    ];

    // Campaigns flagged by the health check surface as a badge
    let attention_count = Memo::new(move |_| {
        campaigns.with(|all| all.iter().filter(|c| c.needs_attention()).count())
    });

    let current_campaign_name = move || {
        let id = current_id.get()?;
        campaigns.with(|all| all.iter().find(|c| c.id == id).map(|c| c.name.clone()))
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <div class="logo">
                    <span class="logo-icon">"🐉"</span>
                    <span class="logo-text">"DM Assistant"</span>
                </div>
                <span class="version">{format!("v{}", VERSION)}</span>
            </div>

            <nav class="sidebar-nav">
                {nav_items.into_iter().map(|(label, target, icon)| {
                    let is_active = move || screen.get() == target;
                    let show_badge = label == "Campaigns";

                    view! {
                        <button
                            class=move || format!("nav-item {}", if is_active() { "active" } else { "" })
                            on:click=move |_| screen.set(target)
                        >
                            <span class="nav-icon">{icon}</span>
                            <span class="nav-label">{label}</span>
                            <Show when=move || show_badge && (attention_count.get() > 0)>
                                <span class="nav-badge" title="Campaigns needing attention">
                                    {move || attention_count.get()}
                                </span>
                            </Show>
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="sidebar-footer">
                <Show
                    when=move || current_campaign_name().is_some()
                    fallback=|| view! {
                        <span class="sidebar-current sidebar-current--empty">"No open campaign"</span>
                    }
                >
                    <span class="sidebar-current" title="Open campaign">
                        <span class="nav-icon">"🎲"</span>
                        {move || current_campaign_name().unwrap_or_default()}
                    </span>
                </Show>
            </div>
        </aside>
    }
}
