//! Skill catalog, class skill choices and racial grants

/// The eighteen skills, in canonical display order
pub const SKILLS: [&str; 18] = [
    "Acrobatics",
    "Animal Handling",
    "Arcana",
    "Athletics",
    "Deception",
    "History",
    "Insight",
    "Intimidation",
    "Investigation",
    "Medicine",
    "Nature",
    "Perception",
    "Performance",
    "Persuasion",
    "Religion",
    "Sleight of Hand",
    "Stealth",
    "Survival",
];

/// How many skills a class may pick, and from which options
#[derive(Debug, Clone, Copy)]
pub struct ClassSkillRule {
    pub choose: usize,
    pub options: &'static [&'static str],
}

/// Skill choice rule for a class, if the class is known
pub fn class_skill_rule(class: &str) -> Option<ClassSkillRule> {
    let rule = match class {
        "Guerreiro" => ClassSkillRule {
            choose: 2,
            options: &[
                "Acrobatics",
                "Animal Handling",
                "Athletics",
                "History",
                "Insight",
                "Intimidation",
                "Perception",
                "Survival",
            ],
        },
        "Mago" => ClassSkillRule {
            choose: 2,
            options: &[
                "Arcana",
                "History",
                "Insight",
                "Investigation",
                "Medicine",
                "Religion",
            ],
        },
        "Ladino" => ClassSkillRule {
            choose: 4,
            options: &[
                "Acrobatics",
                "Athletics",
                "Deception",
                "Insight",
                "Intimidation",
                "Investigation",
                "Perception",
                "Performance",
                "Persuasion",
                "Sleight of Hand",
                "Stealth",
            ],
        },
        "Clérigo" => ClassSkillRule {
            choose: 2,
            options: &["History", "Insight", "Medicine", "Persuasion", "Religion"],
        },
        "Paladino" => ClassSkillRule {
            choose: 2,
            options: &[
                "Athletics",
                "Insight",
                "Intimidation",
                "Medicine",
                "Persuasion",
                "Religion",
            ],
        },
        "Bárbaro" => ClassSkillRule {
            choose: 2,
            options: &[
                "Animal Handling",
                "Athletics",
                "Intimidation",
                "Nature",
                "Perception",
                "Survival",
            ],
        },
        "Bardo" => ClassSkillRule {
            choose: 3,
            options: &SKILLS,
        },
        "Druida" => ClassSkillRule {
            choose: 2,
            options: &[
                "Arcana",
                "Animal Handling",
                "Insight",
                "Medicine",
                "Nature",
                "Perception",
                "Religion",
                "Survival",
            ],
        },
        "Ranger" => ClassSkillRule {
            choose: 3,
            options: &[
                "Animal Handling",
                "Athletics",
                "Insight",
                "Investigation",
                "Nature",
                "Perception",
                "Stealth",
                "Survival",
            ],
        },
        "Monge" => ClassSkillRule {
            choose: 2,
            options: &[
                "Acrobatics",
                "Athletics",
                "History",
                "Insight",
                "Religion",
                "Stealth",
            ],
        },
        "Feiticeiro" => ClassSkillRule {
            choose: 2,
            options: &[
                "Arcana",
                "Deception",
                "Insight",
                "Intimidation",
                "Persuasion",
                "Religion",
            ],
        },
        "Bruxo" => ClassSkillRule {
            choose: 2,
            options: &[
                "Arcana",
                "Deception",
                "History",
                "Intimidation",
                "Investigation",
                "Nature",
                "Religion",
            ],
        },
        _ => return None,
    };
    Some(rule)
}

/// Skills granted automatically by race
pub fn racial_skills(race: &str) -> &'static [&'static str] {
    match race {
        "Elfo" => &["Perception"],
        _ => &[],
    }
}
