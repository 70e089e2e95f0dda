//! Character draft - the in-progress entity the wizard edits

use serde::{Deserialize, Serialize};

use crate::domain::rules;
use crate::domain::value_objects::{AttributeAllocation, Background, Identity};

/// Draft lifecycle status
///
/// A draft is created as `Draft` and becomes `Active` exactly once, when the
/// finished character has been saved. It never reverts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    #[default]
    Draft,
    Active,
}

/// One selectable entry in the class skill choice list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillChoice {
    pub skill: &'static str,
    pub selected: bool,
    pub disabled: bool,
}

/// The in-progress character
///
/// Plain fields are edited directly by the wizard; the rule-bearing
/// operations (race, class, background, skill selection) live here so the
/// derivation invariants cannot be bypassed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CharacterDraft {
    pub status: DraftStatus,
    pub identity: Identity,
    pub appearance: String,
    pub background: Background,
    pub attributes: AttributeAllocation,
    /// Player-picked class skills, in selection order, bounded by the
    /// class rule's choose count
    pub class_skills: Vec<String>,
    /// Opaque image payload (data URL or asset reference)
    pub avatar: Option<String>,
    /// Explanation attached to the latest AI-suggested distribution;
    /// cleared by any manual attribute change
    pub ai_reasoning: String,
}

impl CharacterDraft {
    /// Set the race, resetting the lineage detail and pruning any selected
    /// class skill the new race grants automatically
    pub fn set_race(&mut self, race: impl Into<String>) {
        self.identity.race = race.into();
        self.identity.race_detail.clear();
        self.prune_automatic_class_skills();
    }

    /// Set the class, resetting the archetype and the skill selection that
    /// belonged to the previous class
    pub fn set_class(&mut self, class: impl Into<String>) {
        self.identity.class = class.into();
        self.identity.archetype.clear();
        self.class_skills.clear();
    }

    /// Select a background from the catalog
    ///
    /// Overwrites the background record and seeds the description with the
    /// canonical text; the motivation survives. Returns false for an unknown
    /// key, leaving the draft untouched.
    pub fn select_background(&mut self, key: &str) -> bool {
        let Some(def) = rules::background(key) else {
            return false;
        };
        let motivation = std::mem::take(&mut self.background.motivation);
        self.background = Background::from_def(def, motivation);
        self.prune_automatic_class_skills();
        true
    }

    /// Skills granted without a choice: background grants plus racial grants,
    /// deduplicated in catalog order
    pub fn automatic_skills(&self) -> Vec<&str> {
        let racial = rules::racial_skills(&self.identity.race);
        rules::SKILLS
            .iter()
            .copied()
            .filter(|skill| {
                self.background.granted_skills.iter().any(|g| g == skill)
                    || racial.contains(skill)
            })
            .collect()
    }

    pub fn is_automatic_skill(&self, skill: &str) -> bool {
        self.background.granted_skills.iter().any(|g| g == skill)
            || rules::racial_skills(&self.identity.race).contains(&skill)
    }

    /// Toggle a class skill selection; returns whether anything changed
    ///
    /// Deselecting always works and frees a slot. Selecting is rejected when
    /// the class has no rule, the skill is not among its options, the skill
    /// is already automatic, or the choose quota is full.
    pub fn toggle_class_skill(&mut self, skill: &str) -> bool {
        let Some(rule) = rules::class_skill_rule(&self.identity.class) else {
            return false;
        };
        if let Some(pos) = self.class_skills.iter().position(|s| s == skill) {
            self.class_skills.remove(pos);
            return true;
        }
        if !rule.options.contains(&skill)
            || self.is_automatic_skill(skill)
            || self.class_skills.len() >= rule.choose
        {
            return false;
        }
        self.class_skills.push(skill.to_string());
        true
    }

    /// The class choice list as shown to the player
    pub fn class_skill_choices(&self) -> Vec<SkillChoice> {
        let Some(rule) = rules::class_skill_rule(&self.identity.class) else {
            return Vec::new();
        };
        let quota_full = self.class_skills.len() >= rule.choose;
        rule.options
            .iter()
            .map(|&skill| {
                let selected = self.class_skills.iter().any(|s| s == skill);
                SkillChoice {
                    skill,
                    selected,
                    disabled: !selected && (self.is_automatic_skill(skill) || quota_full),
                }
            })
            .collect()
    }

    /// Final skill set shown at review: automatic plus selected,
    /// deduplicated, in catalog order
    pub fn final_skills(&self) -> Vec<String> {
        rules::SKILLS
            .iter()
            .filter(|&&skill| {
                self.is_automatic_skill(skill) || self.class_skills.iter().any(|s| s == skill)
            })
            .map(|s| s.to_string())
            .collect()
    }

    /// Validity of the essence step
    pub fn essence_complete(&self) -> bool {
        self.identity.has_name()
            && self.identity.has_race()
            && self.identity.has_class()
            && !self.appearance.trim().is_empty()
            && self.background.has_description()
    }

    /// Validity of the gameplay step
    pub fn gameplay_complete(&self) -> bool {
        self.attributes.is_complete()
    }

    /// Drop selected class skills that an automatic grant now covers, so a
    /// grant never consumes a choice slot
    fn prune_automatic_class_skills(&mut self) {
        let automatic: Vec<String> = self
            .automatic_skills()
            .iter()
            .map(|s| s.to_string())
            .collect();
        self.class_skills.retain(|s| !automatic.contains(s));
    }
}
