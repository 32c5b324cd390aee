//! Main App component and global state

use crate::components::Sidebar;
use crate::pages::{Campaigns, Characters, Dashboard};
use dm_assistant_types::models::{AppSettings, Campaign, PlayerCharacter};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// Screens reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScreen {
    Dashboard,
    Campaigns,
    Characters,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    pub campaigns: RwSignal<Vec<Campaign>>,
    pub current_campaign_id: RwSignal<Option<Uuid>>,
    /// Characters of the current campaign
    pub characters: RwSignal<Vec<PlayerCharacter>>,
    pub settings: RwSignal<Option<AppSettings>>,
    pub active_screen: RwSignal<ActiveScreen>,
    pub loading: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            campaigns: RwSignal::new(vec![]),
            current_campaign_id: RwSignal::new(None),
            characters: RwSignal::new(vec![]),
            settings: RwSignal::new(None),
            active_screen: RwSignal::new(ActiveScreen::Dashboard),
            loading: RwSignal::new(false),
        }
    }

    /// Current campaign, if one is selected and still loaded.
    pub fn current_campaign(&self) -> Option<Campaign> {
        let id = self.current_campaign_id.get()?;
        self.campaigns.with(|all| all.iter().find(|c| c.id == id).cloned())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Root App component
#[component]
pub fn App() -> impl IntoView {
    // Create global state
    let state = AppState::new();
    provide_context(state.clone());

    // Load initial data
    Effect::new(move |_| {
        spawn_local(async move {
            load_initial_data().await;
        });
    });

    let screen = state.active_screen;
    let settings = state.settings;

    // Theme comes from backend settings once they arrive
    let theme = Memo::new(move |_| {
        settings.with(|s| s.as_ref().map_or_else(|| "dark".to_string(), |s| s.theme.clone()))
    });

    view! {
        <div class="app-container" data-theme=move || theme.get()>
            <Sidebar />
            <main class="main-content">
                {move || match screen.get() {
                    ActiveScreen::Dashboard => view! { <Dashboard /> }.into_any(),
                    ActiveScreen::Campaigns => view! { <Campaigns /> }.into_any(),
                    ActiveScreen::Characters => view! { <Characters /> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Load initial application data from Tauri backend
async fn load_initial_data() {
    let state = expect_context::<AppState>();
    state.loading.set(true);

    // Load campaigns
    if let Ok(campaigns) = crate::tauri::commands::get_all_campaigns().await {
        state.campaigns.set(campaigns);
    }

    // Load current campaign and its characters
    if let Ok(Some(campaign)) = crate::tauri::commands::get_current_campaign().await {
        state.current_campaign_id.set(Some(campaign.id));
        if let Ok(characters) =
            crate::tauri::commands::get_characters_by_campaign(campaign.id).await
        {
            state.characters.set(characters);
        }
    }

    // Load settings
    if let Ok(settings) = crate::tauri::commands::get_app_settings().await {
        state.settings.set(Some(settings));
    }

    state.loading.set(false);
    log::info!("Initial data loaded");
}
