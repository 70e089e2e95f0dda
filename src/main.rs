//! Mythweaver Forge - creation flow smoke runner
//!
//! Walks one scripted character creation end to end against the configured
//! backend (or fully offline with OFFLINE_MODE=1), logging each stage. Used
//! to exercise the store and suggestion contracts without a UI.

use std::env;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use mythweaver_forge::domain::value_objects::{modifier, Attribute, CampaignId, PlayStyle, UserId};
use mythweaver_forge::infrastructure::config::AppConfig;
use mythweaver_forge::infrastructure::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mythweaver_forge=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mythweaver Forge smoke run");

    // Load configuration
    let config = AppConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Backend: {}", config.backend_base_url);
    tracing::info!("  Suggestions: {}", config.suggestion_base_url);
    tracing::info!("  Offline: {}", config.offline);

    let state = AppState::new(config)?;

    let campaign = id_from_env("CAMPAIGN_ID").map_or_else(CampaignId::new, CampaignId::from_uuid);
    let user = id_from_env("USER_ID").map_or_else(UserId::new, UserId::from_uuid);

    let mut wizard = state.open_wizard(campaign, user).await;
    tracing::info!(draft_id = ?wizard.draft_id(), "wizard ready");

    // Essence step
    wizard.set_race("Elfo");
    wizard.set_race_detail("Alto Elfo");
    wizard.set_class("Mago");
    wizard.set_archetype("Evocação");
    wizard.set_gender("Feminino");

    let names = wizard.suggest_names().await;
    tracing::info!(?names, "name suggestions");
    let name = names
        .into_iter()
        .next()
        .unwrap_or_else(|| "Azael".to_string());
    wizard.set_name(name);

    if !wizard.suggest_appearance().await {
        wizard.set_appearance("Traços élficos finos, olhar atento e vestes de estudo");
    }
    wizard.select_background("Sabio");
    if !wizard.suggest_motivation().await {
        wizard.set_motivation("Recuperar o conhecimento que o mundo esqueceu");
    }

    anyhow::ensure!(wizard.next_step(), "essence step should be complete");
    tracing::info!("essence step complete");

    // Gameplay step: suggested distribution, then spend whatever is left
    if wizard.request_attribute_suggestion() {
        wizard.choose_play_style(PlayStyle::Versatile).await;
    }
    for attr in Attribute::ALL {
        while wizard.increase_attribute(attr) {}
    }
    tracing::info!(
        remaining = wizard.draft().attributes.remaining(),
        reasoning = %wizard.draft().ai_reasoning,
        "attributes allocated"
    );
    for attr in Attribute::ALL {
        let value = wizard.draft().attributes.get(attr);
        tracing::debug!(attribute = %attr, value, modifier = modifier(value), "attribute");
    }

    for choice in wizard.class_skill_choices() {
        tracing::debug!(
            skill = choice.skill,
            selected = choice.selected,
            disabled = choice.disabled,
            "class skill option"
        );
    }
    wizard.toggle_class_skill("Investigation");
    wizard.toggle_class_skill("Insight");

    anyhow::ensure!(wizard.next_step(), "gameplay step should be complete");
    tracing::info!("gameplay step complete");

    // Review step
    tracing::info!(skills = ?wizard.draft().final_skills(), "final skills");
    tracing::debug!("avatar prompt: {}", wizard.avatar_prompt());

    let character_id = wizard.finish().await?;
    tracing::info!(character_id = %character_id, "character created");

    Ok(())
}

fn id_from_env(name: &str) -> Option<Uuid> {
    env::var(name).ok().and_then(|value| value.parse().ok())
}
