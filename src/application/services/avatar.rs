//! Avatar prompt builder
//!
//! Assembles an image-generation prompt from the draft so the player can
//! take it to any portrait generator. Pure string assembly; the prompt
//! language stays English because that is what the generators expect.

use crate::domain::entities::CharacterDraft;

/// Scene flavor appended for each class
fn class_environment(class: &str) -> Option<&'static str> {
    let environment = match class {
        "Druida" => "Natural environment background such as ancient forests, stone circles, misty groves, sacred trees, or wild landscapes",
        "Guerreiro" => "Martial environment such as battlefields, training grounds, war camps, or fortified strongholds",
        "Paladino" => "Sacred or noble setting such as temples, radiant halls, holy ruins, or battlefield sanctuaries",
        "Clérigo" => "Religious environment such as shrines, cathedrals, holy libraries, or ritual chambers",
        "Mago" => "Arcane environment such as ancient towers, libraries, arcane laboratories, or rune-filled chambers",
        "Feiticeiro" => "Mystical and volatile environment reflecting innate magic, elemental energies, or arcane surges",
        "Bruxo" => "Dark or otherworldly environment with eldritch symbols, shadowed ruins, infernal or fey influences",
        "Ladino" => "Urban or shadowy environment such as alleyways, rooftops, hidden rooms, or dimly lit interiors",
        "Ranger" => "Wilderness environment such as forests, mountains, borderlands, or untamed nature",
        "Bárbaro" => "Harsh or primal environment such as frozen tundras, wild plains, tribal lands, or stormy landscapes",
        "Bardo" => "Expressive environment such as taverns, stages, courts, or travel roads with artistic elements",
        "Monge" => "Serene or ascetic environment such as monasteries, mountain temples, or tranquil courtyards",
        _ => return None,
    };
    Some(environment)
}

/// Build a portrait prompt from everything the draft knows so far
///
/// Unset fields are simply omitted; the fixed style directives always frame
/// the prompt.
pub fn build_avatar_prompt(draft: &CharacterDraft) -> String {
    let identity = &draft.identity;
    let mut parts: Vec<String> = Vec::new();

    parts.push(
        "High fantasy character portrait, ultra detailed, cinematic lighting, realistic style"
            .to_string(),
    );

    if identity.has_name() {
        parts.push(format!("Character name: {}", identity.name));
    }
    if identity.has_race() {
        parts.push(format!("Race: {}", identity.race));
    }
    if !identity.race_detail.is_empty() {
        parts.push(format!(
            "Lineage / subrace / ancestry: {}",
            identity.race_detail
        ));
    }
    if identity.has_class() {
        parts.push(format!("Class: {}", identity.class));
    }
    if !identity.archetype.is_empty() {
        parts.push(format!("Archetype or path: {}", identity.archetype));
    }
    if identity.has_gender() {
        parts.push(format!("Gender expression: {}", identity.gender));
    }

    if let Some(environment) = class_environment(&identity.class) {
        parts.push(format!("Background environment: {}", environment));
    }

    if !draft.appearance.is_empty() {
        parts.push(format!("Physical appearance: {}", draft.appearance));
    }

    if draft.background.has_description() {
        parts.push(format!(
            "Backstory influence visible in scars, attire, posture, or symbolic details: {}",
            draft.background.description
        ));
    }

    if !draft.background.motivation.is_empty() {
        parts.push(format!(
            "Dominant emotional tone and personality: {}",
            draft.background.motivation
        ));
        parts.push(
            "Facial expression, posture, gaze, and mood must clearly reflect this motivation"
                .to_string(),
        );
    }

    parts.push(
        "Avoid neutral expressions. The character must visually convey a clear emotional state \
         such as serenity, wrath, determination, melancholy, vengeance, curiosity, devotion, or \
         inner conflict, according to their story"
            .to_string(),
    );

    parts.push(
        "dark fantasy, dramatic shadows, painterly realism, expressive eyes, storytelling \
         through pose, lighting, and environment, no anime, no cartoon, high realism"
            .to_string(),
    );

    parts.join(", ")
}
