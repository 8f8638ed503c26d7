//! Registry of every runnable demo, in the order `patterns all` runs them.

use crate::config::PatternsConfig;
use crate::error::{PatternError, Result};
use crate::{behavioral, creational, solid, structural};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub type RunFn = fn(&mut dyn Write, &PatternsConfig) -> Result<()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
    Solid,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
        Category::Solid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
            Category::Solid => "solid",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| PatternError::UnknownCategory(s.to_string()))
    }
}

#[derive(Clone, Copy)]
pub struct Demo {
    pub name: &'static str,
    pub category: Category,
    pub pattern: &'static str,
    pub summary: &'static str,
    pub run: RunFn,
}

impl Demo {
    pub fn run(&self, out: &mut dyn Write, config: &PatternsConfig) -> Result<()> {
        tracing::debug!("Running demo {}", self.name);
        (self.run)(out, config)
    }
}

impl fmt::Debug for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Demo")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("pattern", &self.pattern)
            .finish()
    }
}

macro_rules! demo {
    ($name:literal, $category:ident, $pattern:literal, $summary:literal, $run:path) => {
        Demo {
            name: $name,
            category: Category::$category,
            pattern: $pattern,
            summary: $summary,
            run: $run,
        }
    };
}

static DEMOS: &[Demo] = &[
    // Creational
    demo!("builder-html", Creational, "Builder", "Fluent HTML element builder", creational::builder::html::run),
    demo!("builder-faceted", Creational, "Builder", "Address and job facets built in tandem", creational::builder::faceted::run),
    demo!("builder-functional", Creational, "Builder", "Deferred actions with extension methods", creational::builder::functional::run),
    demo!("builder-stepwise", Creational, "Builder", "Typestate builder enforcing step order", creational::builder::stepwise::run),
    demo!("factory-point", Creational, "Factory", "Named constructors and a point factory", creational::factory::point::run),
    demo!("factory-abstract", Creational, "Abstract Factory", "Phone families from two manufacturers", creational::factory::abstract_factory::run),
    demo!("factory-async", Creational, "Factory", "Objects that finish initialising asynchronously", creational::factory::async_factory::run),
    demo!("factory-bulk-replacement", Creational, "Factory", "Tracking and replacing every theme handed out", creational::factory::bulk_replacement::run),
    demo!("prototype-shallow-clone", Creational, "Prototype", "Shared references versus owned copies", creational::prototype::shallow_clone::run),
    demo!("prototype-deep-copy", Creational, "Prototype", "Explicit deep copy through a trait", creational::prototype::deep_copy::run),
    demo!("prototype-serialization", Creational, "Prototype", "Deep copy by serializing and deserializing", creational::prototype::serialization::run),
    demo!("singleton", Creational, "Singleton", "Lazily loaded capitals database", creational::singleton::run),
    // Structural
    demo!("adapter-line-to-point", Structural, "Adapter", "Lines adapted to points, with caching", structural::adapter::line_to_point::run),
    demo!("adapter-command-buttons", Structural, "Adapter", "Commands wrapped as toolbar buttons", structural::adapter::command_buttons::run),
    demo!("bridge", Structural, "Bridge", "Shapes decoupled from their renderers", structural::bridge::run),
    demo!("composite-shapes", Structural, "Composite", "Nested groups of graphic objects", structural::composite::shapes::run),
    demo!("composite-neurons", Structural, "Composite", "Connecting neurons and layers uniformly", structural::composite::neurons::run),
    demo!("decorator-shapes", Structural, "Decorator", "Dynamic and static shape decorators", structural::decorator::shapes::run),
    demo!("decorator-reporting", Structural, "Decorator", "Logging wrapped around a reporting service", structural::decorator::reporting::run),
    demo!("decorator-dragon", Structural, "Decorator", "A dragon composed of a bird and a lizard", structural::decorator::dragon::run),
    demo!("facade", Structural, "Facade", "One call orchestrating two subsystems", structural::facade::run),
    demo!("flyweight-text", Structural, "Flyweight", "Formatting ranges instead of per-char flags", structural::flyweight::text::run),
    demo!("flyweight-users", Structural, "Flyweight", "User names stored once in a shared cache", structural::flyweight::users::run),
    demo!("proxy-protection", Structural, "Proxy", "A car that refuses young drivers", structural::proxy::protection::run),
    demo!("proxy-property", Structural, "Proxy", "A field that ignores same-value assignments", structural::proxy::property::run),
    demo!("proxy-value", Structural, "Proxy", "A percentage value type with arithmetic", structural::proxy::value::run),
    demo!("proxy-masonry", Structural, "Proxy", "Array-backed flags with an aggregate view", structural::proxy::masonry::run),
    demo!("proxy-logging", Structural, "Proxy", "Counting and logging calls to an account", structural::proxy::logging::run),
    demo!("proxy-view-model", Structural, "Proxy", "A view model notifying on changes", structural::proxy::view_model::run),
    // Behavioral
    demo!("chain-method", Behavioral, "Chain of Responsibility", "Creature modifiers applied in order", behavioral::chain::method_chain::run),
    demo!("chain-broker", Behavioral, "Chain of Responsibility", "Stat queries relayed through a game", behavioral::chain::broker_chain::run),
    demo!("command", Behavioral, "Command", "Bank account commands with undo", behavioral::command::run),
    demo!("iterator-stats", Behavioral, "Iterator", "Array-backed creature stats", behavioral::iterator::stats::run),
    demo!("iterator-tree", Behavioral, "Iterator", "In-order binary tree traversal", behavioral::iterator::tree::run),
    demo!("mediator-chat-room", Behavioral, "Mediator", "A chat room relaying messages", behavioral::mediator::chat_room::run),
    demo!("mediator-request", Behavioral, "Mediator", "Typed requests routed to handlers", behavioral::mediator::request::run),
    demo!("memento", Behavioral, "Memento", "Bank account undo and redo", behavioral::memento::run),
    demo!("observer-event", Behavioral, "Observer", "Callback lists on the subject", behavioral::observer::event::run),
    demo!("observer-observable", Behavioral, "Observer", "Subscriptions that unsubscribe on drop", behavioral::observer::observable::run),
    demo!("observer-collection", Behavioral, "Observer", "A list reporting its own changes", behavioral::observer::collection::run),
    demo!("observer-weak", Behavioral, "Observer", "Strong versus weak listener references", behavioral::observer::weak::run),
    demo!("state-classic", Behavioral, "State", "A light switch with state objects", behavioral::state::classic::run),
    demo!("state-table", Behavioral, "State", "An enum-driven state machine", behavioral::state::table::run),
    demo!("strategy-list", Behavioral, "Strategy", "Markdown or HTML list rendering", behavioral::strategy::list::run),
    demo!("strategy-comparison", Behavioral, "Strategy", "Equality and ordering strategies", behavioral::strategy::comparison::run),
    demo!("template-method", Behavioral, "Template Method", "A game skeleton with pluggable steps", behavioral::template_method::run),
    demo!("visitor-intrusive", Behavioral, "Visitor", "Printing added to every expression", behavioral::visitor::intrusive::run),
    demo!("visitor-transformer", Behavioral, "Visitor", "Expression reduction with transformers", behavioral::visitor::transformer::run),
    // SOLID
    demo!("single-responsibility", Solid, "Single Responsibility", "A journal and its separate persistence", solid::single_responsibility::run),
    demo!("open-closed", Solid, "Open/Closed", "Composable product specifications", solid::open_closed::run),
    demo!("liskov", Solid, "Liskov Substitution", "Why a square is not a rectangle", solid::liskov::run),
    demo!("interface-segregation", Solid, "Interface Segregation", "Small interfaces instead of a fat machine", solid::interface_segregation::run),
    demo!("dependency-inversion", Solid, "Dependency Inversion", "Research against a relationship browser", solid::dependency_inversion::run),
];

pub fn all() -> &'static [Demo] {
    DEMOS
}

pub fn find(name: &str) -> Result<&'static Demo> {
    DEMOS
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| PatternError::UnknownDemo(name.to_string()))
}

pub fn by_category(category: Category) -> impl Iterator<Item = &'static Demo> {
    DEMOS.iter().filter(move |d| d.category == category)
}
