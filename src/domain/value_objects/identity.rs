//! Character identity - who the character is before any mechanics

/// Identity fields collected on the essence step
///
/// Empty strings mean "not chosen yet"; the wizard's validity predicates and
/// the final-save preconditions check the fields they require.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub race: String,
    /// Subrace / lineage, only meaningful for races that define variants
    pub race_detail: String,
    pub class: String,
    /// Subclass path, only meaningful once a class is chosen
    pub archetype: String,
    pub gender: String,
}

impl Identity {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn has_race(&self) -> bool {
        !self.race.trim().is_empty()
    }

    pub fn has_class(&self) -> bool {
        !self.class.trim().is_empty()
    }

    pub fn has_gender(&self) -> bool {
        !self.gender.trim().is_empty()
    }
}
