//! Character card component for grid view

use dm_assistant_types::models::PlayerCharacter;
use leptos::prelude::*;

#[component]
pub fn CharacterCard(
    #[prop(into)] character: PlayerCharacter,
    #[prop(into)] on_level_up: Callback<()>,
    #[prop(into)] on_toggle_active: Callback<()>,
    #[prop(into)] on_edit: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let name = character.name.clone();
    let initial = name.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let stats = character.stats_label();
    let icon = class_icon(&character.class);
    let level = character.level;
    let max_hp = character.max_hp;
    let background = character.background.clone();
    let alignment = character.alignment.clone();
    let achievement_count = character.achievements.len();
    let is_active = character.is_active;
    let can_level_up = character.can_level_up();

    view! {
        <div class=format!(
            "character-card {}",
            if is_active { "" } else { "is-inactive" }
        )>
            // Header
            <div class="character-card-header">
                <div class="character-avatar">{initial}</div>
                <div class="character-card-title">
                    <span class="character-name">{name.clone()}</span>
                    <span class="character-stats">
                        <span class="class-icon">{icon}</span>
                        " " {stats.clone()}
                    </span>
                </div>
                <span class="level-badge">"Lv. " {level}</span>
            </div>

            // Details
            <div class="character-card-details">
                <div class="detail-item">
                    <span class="detail-label">"Max HP"</span>
                    <span class="detail-value">{max_hp}</span>
                </div>
                {(!alignment.is_empty()).then(|| view! {
                    <div class="detail-item">
                        <span class="detail-label">"Alignment"</span>
                        <span class="detail-value">{alignment.clone()}</span>
                    </div>
                })}
                {(!background.is_empty()).then(|| view! {
                    <div class="detail-item">
                        <span class="detail-label">"Background"</span>
                        <span class="detail-value">{background.clone()}</span>
                    </div>
                })}
                <div class="detail-item">
                    <span class="detail-label">"Achievements"</span>
                    <span class="detail-value">{achievement_count}</span>
                </div>
            </div>

            // Actions
            <div class="character-card-actions">
                {can_level_up.then(|| view! {
                    <button
                        class="dm-button dm-button--icon dm-button--sm dm-button--success"
                        title="Level up"
                        on:click=move |e| {
                            e.stop_propagation();
                            on_level_up.run(());
                        }
                    >
                        "⬆"
                    </button>
                })}
                <button
                    class="dm-button dm-button--icon dm-button--sm"
                    title=if is_active { "Mark as inactive" } else { "Mark as active" }
                    on:click=move |e| {
                        e.stop_propagation();
                        on_toggle_active.run(());
                    }
                >
                    {if is_active { "💤" } else { "▶" }}
                </button>
                <button
                    class="dm-button dm-button--icon dm-button--sm"
                    title="Edit character"
                    on:click=move |e| {
                        e.stop_propagation();
                        on_edit.run(());
                    }
                >
                    "✏️"
                </button>
                <button
                    class="dm-button dm-button--icon dm-button--sm dm-button--danger"
                    title="Delete character"
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

fn class_icon(class: &str) -> &'static str {
    match class.to_lowercase().as_str() {
        "barbarian" => "🪓",
        "bard" => "🎵",
        "cleric" => "✝",
        "druid" => "🐾",
        "fighter" => "⚔",
        "monk" => "👊",
        "paladin" => "🛡",
        "ranger" => "🏹",
        "rogue" => "🗡",
        "sorcerer" | "warlock" => "✨",
        "wizard" => "🪄",
        _ => "👤",
    }
}
