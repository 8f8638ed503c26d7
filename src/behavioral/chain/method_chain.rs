//! Chain of Responsibility: a list of modifiers applied in order.

use crate::config::PatternsConfig;
use crate::error::{require_non_blank, Result};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub name: String,
    pub attack: i32,
    pub defense: i32,
}

impl Creature {
    pub fn new(name: impl Into<String>, attack: i32, defense: i32) -> Result<Self> {
        let name = name.into();
        require_non_blank("name", &name)?;
        Ok(Self {
            name,
            attack,
            defense,
        })
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Attack: {}, Defense: {}",
            self.name, self.attack, self.defense
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub trait CreatureModifier {
    /// Applies the modifier and reports what it did.
    fn handle(&self, creature: &mut Creature) -> (String, Flow);
}

pub struct NoBonusesModifier;

impl CreatureModifier for NoBonusesModifier {
    fn handle(&self, _creature: &mut Creature) -> (String, Flow) {
        ("No bonuses for you!".to_string(), Flow::Stop)
    }
}

pub struct DoubleAttackModifier;

impl CreatureModifier for DoubleAttackModifier {
    fn handle(&self, creature: &mut Creature) -> (String, Flow) {
        creature.attack *= 2;
        (format!("Doubling {}'s attack", creature.name), Flow::Continue)
    }
}

pub struct IncreaseDefenseModifier;

impl CreatureModifier for IncreaseDefenseModifier {
    fn handle(&self, creature: &mut Creature) -> (String, Flow) {
        creature.defense += 3;
        (format!("Increasing {}'s defense", creature.name), Flow::Continue)
    }
}

/// Ordered list of modifiers. Handling walks the list front to back and
/// stops at the first modifier that returns `Flow::Stop`.
#[derive(Default)]
pub struct ModifierChain {
    modifiers: Vec<Box<dyn CreatureModifier>>,
}

impl ModifierChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, modifier: impl CreatureModifier + 'static) -> &mut Self {
        self.modifiers.push(Box::new(modifier));
        self
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    pub fn handle(&self, creature: &mut Creature) -> Vec<String> {
        let mut log = Vec::new();
        for modifier in &self.modifiers {
            let (message, flow) = modifier.handle(creature);
            log.push(message);
            if flow == Flow::Stop {
                tracing::debug!("Modifier chain stopped after {} step(s)", log.len());
                break;
            }
        }
        log
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut goblin = Creature::new("Goblin", 2, 2)?;
    writeln!(out, "{goblin}")?;

    let mut root = ModifierChain::new();
    root.add(NoBonusesModifier);
    writeln!(out, "Let's double goblin's attack...")?;
    root.add(DoubleAttackModifier);
    writeln!(out, "Let's increase goblin's defense")?;
    root.add(IncreaseDefenseModifier);

    for line in root.handle(&mut goblin) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{goblin}")?;

    writeln!(out, "\n=== Without the blocking modifier ===")?;
    let mut chain = ModifierChain::new();
    chain.add(DoubleAttackModifier).add(IncreaseDefenseModifier);
    for line in chain.handle(&mut goblin) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{goblin}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_bonuses_blocks_the_rest() {
        let mut goblin = Creature::new("Goblin", 2, 2).unwrap();
        let mut chain = ModifierChain::new();
        chain
            .add(NoBonusesModifier)
            .add(DoubleAttackModifier)
            .add(IncreaseDefenseModifier);

        let log = chain.handle(&mut goblin);
        assert_eq!(log, vec!["No bonuses for you!".to_string()]);
        assert_eq!((goblin.attack, goblin.defense), (2, 2));
    }

    #[test]
    fn test_modifiers_apply_in_order() {
        let mut goblin = Creature::new("Goblin", 2, 2).unwrap();
        let mut chain = ModifierChain::new();
        chain.add(DoubleAttackModifier).add(DoubleAttackModifier).add(IncreaseDefenseModifier);

        let log = chain.handle(&mut goblin);
        assert_eq!(log.len(), 3);
        assert_eq!(goblin.attack, 8);
        assert_eq!(goblin.defense, 5);
    }

    #[test]
    fn test_empty_chain_is_a_no_op() {
        let mut goblin = Creature::new("Goblin", 1, 1).unwrap();
        let chain = ModifierChain::new();
        assert!(chain.is_empty());
        assert!(chain.handle(&mut goblin).is_empty());
        assert_eq!(goblin.to_string(), "Name: Goblin, Attack: 1, Defense: 1");
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(Creature::new("", 1, 1).is_err());
    }
}
