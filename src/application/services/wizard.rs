//! Character creation wizard - the client-side state machine
//!
//! Three editing states plus an explicit playstyle-choice state sequence the
//! flow: essence, gameplay, review. Forward movement is gated on each step's
//! validity; edit jumps from review are unconditional and keep downstream
//! data. Every field mutation mirrors the full draft into the store through
//! the debounced synchronizer; store failures never block editing.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::dto::{
    AttributeSuggestionRequest, DraftSnapshot, EssenceSuggestion, EssenceSuggestionRequest,
    NameSuggestionRequest,
};
use crate::application::ports::outbound::{CharacterStorePort, DraftStorePort, SuggestionPort};
use crate::application::services::avatar::build_avatar_prompt;
use crate::application::services::sync::{DraftSynchronizer, SyncConfig};
use crate::domain::entities::{Character, CharacterDraft, DraftStatus, SkillChoice};
use crate::domain::value_objects::{Attribute, CampaignId, CharacterId, DraftId, PlayStyle, UserId};

/// Where the wizard currently is
///
/// `AwaitingPlaystyle` replaces the source UI's suspended-promise modal: it
/// is entered from `Gameplay` by [`CharacterWizard::request_attribute_suggestion`]
/// and left by exactly one of [`choose_play_style`](CharacterWizard::choose_play_style)
/// or [`cancel_play_style`](CharacterWizard::cancel_play_style).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Essence,
    Gameplay,
    AwaitingPlaystyle,
    Review,
}

/// Errors surfaced to the caller of [`CharacterWizard::finish`]
///
/// Everything else the wizard hits is logged and absorbed locally.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("identity.name is required")]
    MissingName,
    #[error("identity.race is required")]
    MissingRace,
    #[error("identity.class is required")]
    MissingClass,
    #[error("confirmation is only available on the review step")]
    NotInReview,
    #[error("failed to save character: {0}")]
    Save(anyhow::Error),
}

/// The character creation wizard
///
/// Owns the in-progress draft exclusively; the draft store is its durable
/// mirror, updated through the synchronizer and never read back after entry.
pub struct CharacterWizard {
    campaign_id: CampaignId,
    user_id: UserId,
    drafts: Arc<dyn DraftStorePort>,
    characters: Arc<dyn CharacterStorePort>,
    suggestions: Arc<dyn SuggestionPort>,
    draft_id: Option<DraftId>,
    draft: CharacterDraft,
    state: WizardState,
    sync: Option<DraftSynchronizer>,
}

impl CharacterWizard {
    /// Enter the wizard: the single suspend point
    ///
    /// Looks up the draft for the (campaign, user) pair and hydrates it over
    /// defaults, or creates a fresh one. A store failure is logged and the
    /// wizard continues with a local-only draft that is never synced.
    #[instrument(skip(drafts, characters, suggestions, sync_config), fields(campaign_id = %campaign_id, user_id = %user_id))]
    pub async fn start(
        drafts: Arc<dyn DraftStorePort>,
        characters: Arc<dyn CharacterStorePort>,
        suggestions: Arc<dyn SuggestionPort>,
        campaign_id: CampaignId,
        user_id: UserId,
        sync_config: SyncConfig,
    ) -> Self {
        let mut draft = CharacterDraft::default();
        let mut draft_id = None;

        match drafts.find(campaign_id, user_id).await {
            Ok(Some(stored)) => {
                debug!(draft_id = %stored.id, "resuming existing draft");
                draft = stored.snapshot.hydrate();
                draft_id = Some(stored.id);
            }
            Ok(None) => match drafts.create(campaign_id, user_id).await {
                Ok(id) => {
                    info!(draft_id = %id, "created fresh draft");
                    draft_id = Some(id);
                }
                Err(e) => {
                    warn!(error = %e, "draft creation failed; editing locally without sync");
                }
            },
            Err(e) => {
                warn!(error = %e, "draft lookup failed; editing locally without sync");
            }
        }

        let sync = draft_id.map(|id| {
            DraftSynchronizer::spawn(Arc::clone(&drafts), campaign_id, id, sync_config)
        });

        Self {
            campaign_id,
            user_id,
            drafts,
            characters,
            suggestions,
            draft_id,
            draft,
            state: WizardState::Essence,
            sync,
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn draft(&self) -> &CharacterDraft {
        &self.draft
    }

    pub fn draft_id(&self) -> Option<DraftId> {
        self.draft_id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Whether the forward control should be enabled
    pub fn can_advance(&self) -> bool {
        match self.state {
            WizardState::Essence => self.draft.essence_complete(),
            WizardState::Gameplay => self.draft.gameplay_complete(),
            WizardState::AwaitingPlaystyle | WizardState::Review => false,
        }
    }

    /// Advance to the next step; rejected while the current step is invalid
    pub fn next_step(&mut self) -> bool {
        let next = match self.state {
            WizardState::Essence if self.draft.essence_complete() => WizardState::Gameplay,
            WizardState::Gameplay if self.draft.gameplay_complete() => WizardState::Review,
            _ => return false,
        };
        self.state = next;
        true
    }

    /// Go back from gameplay to essence; unconditional
    pub fn prev_step(&mut self) -> bool {
        if self.state == WizardState::Gameplay {
            self.state = WizardState::Essence;
            true
        } else {
            false
        }
    }

    /// Unconditional edit jump from review; downstream data is kept
    pub fn edit_step(&mut self, target: WizardState) -> bool {
        if self.state != WizardState::Review {
            return false;
        }
        match target {
            WizardState::Essence | WizardState::Gameplay => {
                self.state = target;
                true
            }
            WizardState::AwaitingPlaystyle | WizardState::Review => false,
        }
    }

    // =========================================================================
    // Essence fields
    // =========================================================================

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.identity.name = name.into();
        self.queue_sync();
    }

    pub fn set_race(&mut self, race: impl Into<String>) {
        self.draft.set_race(race);
        self.queue_sync();
    }

    pub fn set_race_detail(&mut self, detail: impl Into<String>) {
        self.draft.identity.race_detail = detail.into();
        self.queue_sync();
    }

    pub fn set_class(&mut self, class: impl Into<String>) {
        self.draft.set_class(class);
        self.queue_sync();
    }

    pub fn set_archetype(&mut self, archetype: impl Into<String>) {
        self.draft.identity.archetype = archetype.into();
        self.queue_sync();
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) {
        self.draft.identity.gender = gender.into();
        self.queue_sync();
    }

    pub fn set_appearance(&mut self, appearance: impl Into<String>) {
        self.draft.appearance = appearance.into();
        self.queue_sync();
    }

    /// Edit the backstory text without re-selecting the background
    pub fn set_backstory(&mut self, backstory: impl Into<String>) {
        self.draft.background.description = backstory.into();
        self.queue_sync();
    }

    pub fn set_motivation(&mut self, motivation: impl Into<String>) {
        self.draft.background.motivation = motivation.into();
        self.queue_sync();
    }

    /// Select a background from the catalog; unknown keys are rejected
    pub fn select_background(&mut self, key: &str) -> bool {
        if self.draft.select_background(key) {
            self.queue_sync();
            true
        } else {
            false
        }
    }

    pub fn set_avatar(&mut self, avatar: Option<String>) {
        self.draft.avatar = avatar;
        self.queue_sync();
    }

    /// Portrait-generation prompt for the current draft
    pub fn avatar_prompt(&self) -> String {
        build_avatar_prompt(&self.draft)
    }

    // =========================================================================
    // Attributes and skills
    // =========================================================================

    /// Raise an attribute; a manual change discards the AI reasoning
    pub fn increase_attribute(&mut self, attr: Attribute) -> bool {
        if self.draft.attributes.increase(attr) {
            self.draft.ai_reasoning.clear();
            self.queue_sync();
            true
        } else {
            false
        }
    }

    /// Lower an attribute; a manual change discards the AI reasoning
    pub fn decrease_attribute(&mut self, attr: Attribute) -> bool {
        if self.draft.attributes.decrease(attr) {
            self.draft.ai_reasoning.clear();
            self.queue_sync();
            true
        } else {
            false
        }
    }

    pub fn toggle_class_skill(&mut self, skill: &str) -> bool {
        if self.draft.toggle_class_skill(skill) {
            self.queue_sync();
            true
        } else {
            false
        }
    }

    pub fn class_skill_choices(&self) -> Vec<SkillChoice> {
        self.draft.class_skill_choices()
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// Ask for name suggestions; needs race, class and gender first
    ///
    /// Returns an empty list when the prerequisites are unset or the call
    /// fails; the caller just re-enables its control.
    pub async fn suggest_names(&self) -> Vec<String> {
        let identity = &self.draft.identity;
        if !identity.has_race() || !identity.has_class() || !identity.has_gender() {
            debug!("name suggestion needs race, class and gender first");
            return Vec::new();
        }
        let request = NameSuggestionRequest {
            race: identity.race.clone(),
            class: identity.class.clone(),
            gender: identity.gender.clone(),
        };
        match self.suggestions.suggest_names(&request).await {
            Ok(names) => names,
            Err(e) => {
                warn!(error = %e, "name suggestion failed");
                Vec::new()
            }
        }
    }

    /// Suggest and apply an appearance; returns whether anything was applied
    pub async fn suggest_appearance(&mut self) -> bool {
        match self.fetch_essence().await.and_then(|s| s.appearance) {
            Some(text) => {
                self.draft.appearance = text;
                self.queue_sync();
                true
            }
            None => false,
        }
    }

    /// Suggest and apply a backstory; returns whether anything was applied
    pub async fn suggest_backstory(&mut self) -> bool {
        match self.fetch_essence().await.and_then(|s| s.backstory) {
            Some(text) => {
                self.draft.background.description = text;
                self.queue_sync();
                true
            }
            None => false,
        }
    }

    /// Suggest and apply a motivation; returns whether anything was applied
    pub async fn suggest_motivation(&mut self) -> bool {
        match self.fetch_essence().await.and_then(|s| s.motivation) {
            Some(text) => {
                self.draft.background.motivation = text;
                self.queue_sync();
                true
            }
            None => false,
        }
    }

    async fn fetch_essence(&self) -> Option<EssenceSuggestion> {
        let request = EssenceSuggestionRequest::from_draft(&self.draft);
        match self.suggestions.suggest_essence(&request).await {
            Ok(suggestion) => Some(suggestion),
            Err(e) => {
                warn!(error = %e, "essence suggestion failed; fields left untouched");
                None
            }
        }
    }

    /// Open the playstyle choice; only meaningful on the gameplay step
    pub fn request_attribute_suggestion(&mut self) -> bool {
        if self.state != WizardState::Gameplay {
            return false;
        }
        self.state = WizardState::AwaitingPlaystyle;
        true
    }

    /// Resolve the playstyle choice and apply the suggested distribution
    ///
    /// Always returns to the gameplay step; on failure the current
    /// distribution is kept.
    #[instrument(skip(self))]
    pub async fn choose_play_style(&mut self, style: PlayStyle) -> bool {
        if self.state != WizardState::AwaitingPlaystyle {
            return false;
        }
        self.state = WizardState::Gameplay;

        let request = AttributeSuggestionRequest::from_draft(&self.draft, style);
        match self.suggestions.suggest_attributes(&request).await {
            Ok(suggestion) => {
                self.draft
                    .attributes
                    .apply_suggested(&suggestion.suggested_attributes);
                self.draft.ai_reasoning = suggestion.reasoning;
                self.queue_sync();
                info!(remaining = self.draft.attributes.remaining(), "applied suggested attributes");
                true
            }
            Err(e) => {
                warn!(error = %e, "attribute suggestion failed; keeping current distribution");
                false
            }
        }
    }

    /// Dismiss the playstyle choice without a suggestion
    pub fn cancel_play_style(&mut self) -> bool {
        if self.state != WizardState::AwaitingPlaystyle {
            return false;
        }
        self.state = WizardState::Gameplay;
        true
    }

    // =========================================================================
    // Confirmation
    // =========================================================================

    /// Save the finished character and activate the draft
    ///
    /// Identity preconditions are checked before any network call. On a
    /// store failure the wizard stays on the review step so the player can
    /// retry; a failed activation after a successful save is only logged.
    #[instrument(skip(self), fields(campaign_id = %self.campaign_id))]
    pub async fn finish(&mut self) -> Result<CharacterId, WizardError> {
        if self.state != WizardState::Review {
            return Err(WizardError::NotInReview);
        }
        if !self.draft.identity.has_name() {
            return Err(WizardError::MissingName);
        }
        if !self.draft.identity.has_race() {
            return Err(WizardError::MissingRace);
        }
        if !self.draft.identity.has_class() {
            return Err(WizardError::MissingClass);
        }

        if let Some(sync) = &self.sync {
            sync.flush().await;
        }

        let character = Character::from_draft(&self.draft);
        let character_id = self
            .characters
            .save(self.campaign_id, &character)
            .await
            .map_err(WizardError::Save)?;

        self.draft.status = DraftStatus::Active;
        if let Some(draft_id) = self.draft_id {
            if let Err(e) = self.drafts.activate(self.campaign_id, draft_id).await {
                warn!(
                    draft_id = %draft_id,
                    error = %e,
                    "draft activation failed after save; character is already stored"
                );
            }
        }

        info!(
            character_id = %character_id,
            "character created: {}",
            self.draft.identity.name
        );
        Ok(character_id)
    }

    fn queue_sync(&self) {
        if let Some(sync) = &self.sync {
            sync.push(DraftSnapshot::capture(&self.draft));
        }
    }
}
