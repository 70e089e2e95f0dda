//! Static rule tables the wizard draws from
//!
//! Races, classes, genders, backgrounds, skill choices and starting gear are
//! data, not behavior; everything here is a const table with lookup helpers.

mod backgrounds;
mod catalog;
mod equipment;
pub(crate) mod skills;

pub use backgrounds::{background, BackgroundDef, BACKGROUNDS};
pub use catalog::{class, race, ClassDef, RaceDef, CLASSES, GENDERS, RACES};
pub use equipment::{starting_equipment, starting_gold};
pub use skills::{class_skill_rule, racial_skills, ClassSkillRule, SKILLS};
