//! Point-buy attribute allocation
//!
//! Six attributes start at 8 with a budget of 27 points. One cost table is
//! used everywhere: a step from `v` to `v + 1` costs 2 points once `v`
//! reaches 13, otherwise 1. Raising a score to 14 therefore totals 7 points
//! and the cap of 15 totals 9, matching the standard five-edition table.

use serde::{Deserialize, Serialize};

/// The six character attributes, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "strength",
            Attribute::Dexterity => "dexterity",
            Attribute::Constitution => "constitution",
            Attribute::Intelligence => "intelligence",
            Attribute::Wisdom => "wisdom",
            Attribute::Charisma => "charisma",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Raw attribute values, as exchanged with the backend and suggestion service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValues {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub intelligence: u8,
    pub wisdom: u8,
    pub charisma: u8,
}

impl Default for AttributeValues {
    fn default() -> Self {
        Self {
            strength: AttributeAllocation::MIN,
            dexterity: AttributeAllocation::MIN,
            constitution: AttributeAllocation::MIN,
            intelligence: AttributeAllocation::MIN,
            wisdom: AttributeAllocation::MIN,
            charisma: AttributeAllocation::MIN,
        }
    }
}

impl AttributeValues {
    pub fn get(&self, attr: Attribute) -> u8 {
        match attr {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Intelligence => self.intelligence,
            Attribute::Wisdom => self.wisdom,
            Attribute::Charisma => self.charisma,
        }
    }

    pub fn set(&mut self, attr: Attribute, value: u8) {
        match attr {
            Attribute::Strength => self.strength = value,
            Attribute::Dexterity => self.dexterity = value,
            Attribute::Constitution => self.constitution = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Wisdom => self.wisdom = value,
            Attribute::Charisma => self.charisma = value,
        }
    }
}

/// Ability modifier for display: floor((value - 10) / 2)
pub fn modifier(value: u8) -> i32 {
    (i32::from(value) - 10).div_euclid(2)
}

/// Point-buy state: six values plus the unspent remainder of the budget
///
/// Invariant: the points spent to reach the current values plus `remaining`
/// always equal [`AttributeAllocation::BUDGET`]. All mutation goes through
/// [`increase`](Self::increase), [`decrease`](Self::decrease) and
/// [`apply_suggested`](Self::apply_suggested), which preserve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeAllocation {
    values: AttributeValues,
    remaining: u8,
}

impl Default for AttributeAllocation {
    fn default() -> Self {
        Self {
            values: AttributeValues::default(),
            remaining: Self::BUDGET,
        }
    }
}

impl AttributeAllocation {
    pub const BUDGET: u8 = 27;
    pub const MIN: u8 = 8;
    pub const MAX: u8 = 15;

    /// Cost of the single step from `current` to `current + 1`
    fn step_cost(current: u8) -> u8 {
        if current >= 13 {
            2
        } else {
            1
        }
    }

    /// Rebuild an allocation from stored values
    ///
    /// The remainder is recomputed from the values rather than trusted from
    /// storage; values outside [MIN, MAX] or beyond the budget are walked
    /// back to the nearest reachable configuration in canonical order.
    pub fn from_values(values: &AttributeValues) -> Self {
        let mut allocation = Self::default();
        allocation.apply_suggested(values);
        allocation
    }

    pub fn values(&self) -> &AttributeValues {
        &self.values
    }

    pub fn get(&self, attr: Attribute) -> u8 {
        self.values.get(attr)
    }

    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    pub fn spent(&self) -> u8 {
        Self::BUDGET - self.remaining
    }

    /// The allocation step is complete only when every point is spent
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Raise `attr` by one; returns false (and changes nothing) at the cap
    /// or when the remaining points cannot cover the step
    pub fn increase(&mut self, attr: Attribute) -> bool {
        let current = self.values.get(attr);
        if current >= Self::MAX {
            return false;
        }
        let cost = Self::step_cost(current);
        if self.remaining < cost {
            return false;
        }
        self.values.set(attr, current + 1);
        self.remaining -= cost;
        true
    }

    /// Lower `attr` by one, refunding the cost of the step being undone;
    /// returns false at the floor
    pub fn decrease(&mut self, attr: Attribute) -> bool {
        let current = self.values.get(attr);
        if current <= Self::MIN {
            return false;
        }
        self.values.set(attr, current - 1);
        self.remaining += Self::step_cost(current - 1);
        true
    }

    /// Replace the allocation with a suggested distribution
    ///
    /// Resets to the default spread, then raises each attribute toward its
    /// target one step at a time in canonical order. Targets that would
    /// overrun the budget or the cap are silently truncated per attribute.
    pub fn apply_suggested(&mut self, targets: &AttributeValues) {
        *self = Self::default();
        for attr in Attribute::ALL {
            let target = targets.get(attr);
            while self.values.get(attr) < target && self.increase(attr) {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cost_to_reach(value: u8) -> u8 {
        (AttributeAllocation::MIN..value)
            .map(AttributeAllocation::step_cost)
            .sum()
    }

    #[test]
    fn test_step_cost_table() {
        assert_eq!(AttributeAllocation::step_cost(8), 1);
        assert_eq!(AttributeAllocation::step_cost(12), 1);
        assert_eq!(AttributeAllocation::step_cost(13), 2);
        assert_eq!(AttributeAllocation::step_cost(14), 2);
        // Totals from the default of 8
        assert_eq!(cost_to_reach(13), 5);
        assert_eq!(cost_to_reach(14), 7);
        assert_eq!(cost_to_reach(15), 9);
    }

    #[test]
    fn test_increase_to_cap() {
        let mut allocation = AttributeAllocation::default();

        // 8 -> 14 costs 7 points
        for _ in 0..6 {
            assert!(allocation.increase(Attribute::Strength));
        }
        assert_eq!(allocation.get(Attribute::Strength), 14);
        assert_eq!(allocation.remaining(), 20);

        // 14 -> 15 costs 2 more
        assert!(allocation.increase(Attribute::Strength));
        assert_eq!(allocation.get(Attribute::Strength), 15);
        assert_eq!(allocation.remaining(), 18);

        // At the cap the increase is rejected without side effects
        assert!(!allocation.increase(Attribute::Strength));
        assert_eq!(allocation.get(Attribute::Strength), 15);
        assert_eq!(allocation.remaining(), 18);
    }

    #[test]
    fn test_increase_rejected_when_points_run_out() {
        let mut allocation = AttributeAllocation::default();
        // Spend the whole budget: three attributes at 15 cost 27
        for attr in [Attribute::Strength, Attribute::Dexterity, Attribute::Constitution] {
            while allocation.increase(attr) {}
            assert_eq!(allocation.get(attr), 15);
        }
        assert_eq!(allocation.remaining(), 0);
        assert!(!allocation.increase(Attribute::Wisdom));
        assert_eq!(allocation.get(Attribute::Wisdom), 8);
    }

    #[test]
    fn test_decrease_refunds_the_step_cost() {
        let mut allocation = AttributeAllocation::default();
        while allocation.increase(Attribute::Charisma) {}
        assert_eq!(allocation.get(Attribute::Charisma), 15);
        assert_eq!(allocation.remaining(), 18);

        // Undoing 15 -> 14 refunds 2
        assert!(allocation.decrease(Attribute::Charisma));
        assert_eq!(allocation.remaining(), 20);
        // Undoing 14 -> 13 refunds 2, then 13 -> 12 refunds 1
        assert!(allocation.decrease(Attribute::Charisma));
        assert_eq!(allocation.remaining(), 22);
        assert!(allocation.decrease(Attribute::Charisma));
        assert_eq!(allocation.remaining(), 23);
    }

    #[test]
    fn test_decrease_rejected_at_floor() {
        let mut allocation = AttributeAllocation::default();
        assert!(!allocation.decrease(Attribute::Wisdom));
        assert_eq!(allocation.get(Attribute::Wisdom), 8);
        assert_eq!(allocation.remaining(), AttributeAllocation::BUDGET);
    }

    #[test]
    fn test_increase_then_decrease_restores_state() {
        let mut allocation = AttributeAllocation::default();
        for _ in 0..5 {
            allocation.increase(Attribute::Intelligence);
        }
        let before = allocation;

        assert!(allocation.increase(Attribute::Intelligence));
        assert!(allocation.decrease(Attribute::Intelligence));
        assert_eq!(allocation, before);
    }

    #[test]
    fn test_budget_invariant_over_mixed_sequences() {
        let mut allocation = AttributeAllocation::default();
        let moves = [
            (Attribute::Strength, true),
            (Attribute::Strength, true),
            (Attribute::Dexterity, true),
            (Attribute::Strength, false),
            (Attribute::Wisdom, true),
            (Attribute::Wisdom, false),
            (Attribute::Charisma, false),
        ];
        for (attr, up) in moves {
            if up {
                allocation.increase(attr);
            } else {
                allocation.decrease(attr);
            }
            let spent: u8 = Attribute::ALL
                .iter()
                .map(|a| cost_to_reach(allocation.get(*a)))
                .sum();
            assert_eq!(spent + allocation.remaining(), AttributeAllocation::BUDGET);
            assert!(allocation.remaining() <= AttributeAllocation::BUDGET);
            for attr in Attribute::ALL {
                let value = allocation.get(attr);
                assert!((AttributeAllocation::MIN..=AttributeAllocation::MAX).contains(&value));
            }
        }
    }

    #[test]
    fn test_apply_suggested_reaches_affordable_targets() {
        let mut allocation = AttributeAllocation::default();
        // 15/14/8/8/10/12 costs 9 + 7 + 0 + 0 + 2 + 4 = 22
        let targets = AttributeValues {
            strength: 15,
            dexterity: 14,
            constitution: 8,
            intelligence: 8,
            wisdom: 10,
            charisma: 12,
        };
        allocation.apply_suggested(&targets);
        assert_eq!(allocation.values(), &targets);
        assert_eq!(allocation.remaining(), 5);
    }

    #[test]
    fn test_apply_suggested_drops_overflow_in_canonical_order() {
        let mut allocation = AttributeAllocation::default();
        // Six 15s cost 54; only the first three fit in the budget
        let targets = AttributeValues {
            strength: 15,
            dexterity: 15,
            constitution: 15,
            intelligence: 15,
            wisdom: 15,
            charisma: 15,
        };
        allocation.apply_suggested(&targets);
        assert_eq!(allocation.get(Attribute::Strength), 15);
        assert_eq!(allocation.get(Attribute::Dexterity), 15);
        assert_eq!(allocation.get(Attribute::Constitution), 15);
        assert_eq!(allocation.get(Attribute::Intelligence), 8);
        assert_eq!(allocation.remaining(), 0);
    }

    #[test]
    fn test_apply_suggested_resets_previous_spread() {
        let mut allocation = AttributeAllocation::default();
        allocation.increase(Attribute::Charisma);
        allocation.increase(Attribute::Charisma);

        allocation.apply_suggested(&AttributeValues::default());
        assert_eq!(allocation, AttributeAllocation::default());
    }

    #[test]
    fn test_from_values_recomputes_remaining() {
        let values = AttributeValues {
            strength: 10,
            dexterity: 14,
            constitution: 12,
            intelligence: 8,
            wisdom: 8,
            charisma: 8,
        };
        let allocation = AttributeAllocation::from_values(&values);
        assert_eq!(allocation.values(), &values);
        // 2 + 7 + 4 spent
        assert_eq!(allocation.remaining(), 14);
    }

    #[test]
    fn test_from_values_clamps_out_of_range_input() {
        let values = AttributeValues {
            strength: 20,
            dexterity: 3,
            constitution: 8,
            intelligence: 8,
            wisdom: 8,
            charisma: 8,
        };
        let allocation = AttributeAllocation::from_values(&values);
        assert_eq!(allocation.get(Attribute::Strength), 15);
        assert_eq!(allocation.get(Attribute::Dexterity), 8);
    }

    #[test]
    fn test_modifier() {
        assert_eq!(modifier(8), -1);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(14), 2);
        assert_eq!(modifier(15), 2);
    }
}
