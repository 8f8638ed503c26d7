//! Chain of Responsibility: broker chain
//!
//! The game relays each stat query through every active modifier. A
//! modifier stops applying once its guard is dropped.

use crate::config::PatternsConfig;
use crate::error::{require_non_blank, Result};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::io::Write;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Attack,
    Defense,
}

/// A stat lookup travelling through the game. `value` starts at the base
/// stat and every interested modifier adjusts it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub creature_name: String,
    pub what: Argument,
    pub value: i32,
}

impl Query {
    pub fn new(creature_name: impl Into<String>, what: Argument, value: i32) -> Self {
        Self {
            creature_name: creature_name.into(),
            what,
            value,
        }
    }
}

pub trait QueryModifier {
    fn handle(&self, query: &mut Query);
}

type Subscriber = (u64, Box<dyn QueryModifier>);

/// The broker: every stat query goes through the subscribed modifiers in
/// subscription order.
#[derive(Default)]
pub struct Game {
    subscribers: RefCell<Vec<Subscriber>>,
    next_id: Cell<u64>,
}

impl Game {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn perform_query(&self, query: &mut Query) {
        for (_, modifier) in self.subscribers.borrow().iter() {
            modifier.handle(query);
        }
    }

    pub fn subscribe(self: &Rc<Self>, modifier: impl QueryModifier + 'static) -> ModifierGuard {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Box::new(modifier)));
        tracing::debug!("Modifier {id} subscribed to game queries");
        ModifierGuard {
            game: Rc::downgrade(self),
            id,
        }
    }

    fn unsubscribe(&self, id: u64) {
        self.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
        tracing::debug!("Modifier {id} unsubscribed from game queries");
    }

    pub fn modifier_count(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

/// Keeps a modifier active. Dropping the guard removes the modifier.
#[must_use = "the modifier is removed as soon as the guard is dropped"]
pub struct ModifierGuard {
    game: Weak<Game>,
    id: u64,
}

impl Drop for ModifierGuard {
    fn drop(&mut self) {
        if let Some(game) = self.game.upgrade() {
            game.unsubscribe(self.id);
        }
    }
}

pub struct Creature {
    game: Rc<Game>,
    name: String,
    attack: i32,
    defense: i32,
}

impl Creature {
    pub fn new(game: &Rc<Game>, name: impl Into<String>, attack: i32, defense: i32) -> Result<Self> {
        let name = name.into();
        require_non_blank("name", &name)?;
        Ok(Self {
            game: Rc::clone(game),
            name,
            attack,
            defense,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attack(&self) -> i32 {
        let mut query = Query::new(self.name.clone(), Argument::Attack, self.attack);
        self.game.perform_query(&mut query);
        query.value
    }

    pub fn defense(&self) -> i32 {
        let mut query = Query::new(self.name.clone(), Argument::Defense, self.defense);
        self.game.perform_query(&mut query);
        query.value
    }
}

impl fmt::Display for Creature {
    // Goes through the queries, not the base fields.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, attack: {}, defense: {}",
            self.name,
            self.attack(),
            self.defense()
        )
    }
}

pub struct DoubleAttackModifier {
    creature_name: String,
}

impl DoubleAttackModifier {
    pub fn attach(game: &Rc<Game>, creature: &Creature) -> ModifierGuard {
        game.subscribe(Self {
            creature_name: creature.name().to_string(),
        })
    }
}

impl QueryModifier for DoubleAttackModifier {
    fn handle(&self, query: &mut Query) {
        if query.creature_name == self.creature_name && query.what == Argument::Attack {
            query.value *= 2;
        }
    }
}

pub struct IncreaseDefenseModifier {
    creature_name: String,
}

impl IncreaseDefenseModifier {
    pub fn attach(game: &Rc<Game>, creature: &Creature) -> ModifierGuard {
        game.subscribe(Self {
            creature_name: creature.name().to_string(),
        })
    }
}

impl QueryModifier for IncreaseDefenseModifier {
    fn handle(&self, query: &mut Query) {
        if query.creature_name == self.creature_name && query.what == Argument::Defense {
            query.value += 2;
        }
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let game = Game::new();
    let goblin = Creature::new(&game, "Strong Goblin", 3, 3)?;
    writeln!(out, "{goblin}")?;

    {
        let _double = DoubleAttackModifier::attach(&game, &goblin);
        writeln!(out, "{goblin}")?;
        {
            let _defense = IncreaseDefenseModifier::attach(&game, &goblin);
            writeln!(out, "{goblin}")?;
        }
    }

    writeln!(out, "{goblin}")?;
    Ok(())
}
