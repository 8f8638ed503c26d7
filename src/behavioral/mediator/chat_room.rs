//! Mediator: a chat room
//!
//! Participants never hold references to each other; the room delivers
//! every message and keeps the transcript in delivery order.

use crate::config::PatternsConfig;
use crate::error::{require_non_blank, Result};
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    chat_log: Vec<String>,
}

impl Person {
    fn new(name: String) -> Self {
        Self {
            name,
            chat_log: Vec::new(),
        }
    }

    /// Returns the transcript line for this delivery.
    fn receive(&mut self, sender: &str, message: &str) -> String {
        let line = format!("{sender}: '{message}'");
        let entry = format!("[{}'s chat session] {line}", self.name);
        tracing::debug!("{entry}");
        self.chat_log.push(line);
        entry
    }

    pub fn chat_log(&self) -> &[String] {
        &self.chat_log
    }
}

/// Owns the participants and relays every message between them.
#[derive(Debug, Default)]
pub struct ChatRoom {
    people: Vec<Person>,
    transcript: Vec<String>,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Announces the newcomer to everyone already present, then seats them.
    pub fn join(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        require_non_blank("name", &name)?;
        self.broadcast("room", &format!("{name} joins the chat"));
        self.people.push(Person::new(name));
        Ok(())
    }

    pub fn broadcast(&mut self, source: &str, message: &str) {
        for person in self.people.iter_mut().filter(|p| p.name != source) {
            self.transcript.push(person.receive(source, message));
        }
    }

    /// Shorthand for a participant speaking to the whole room.
    pub fn say(&mut self, source: &str, message: &str) {
        self.broadcast(source, message);
    }

    /// Private message. Returns `false` when nobody by that name is present.
    pub fn message(&mut self, source: &str, destination: &str, message: &str) -> bool {
        match self.people.iter_mut().find(|p| p.name == destination) {
            Some(person) => {
                self.transcript.push(person.receive(source, message));
                true
            }
            None => {
                tracing::warn!("{source} tried to message unknown participant {destination}");
                false
            }
        }
    }

    pub fn person(&self, name: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.name == name)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Every delivery so far, oldest first.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut room = ChatRoom::new();

    room.join("John")?;
    room.join("Jane")?;

    room.say("John", "hi room");
    room.say("Jane", "oh, hey john");

    room.join("Simon")?;
    room.say("Simon", "hi everyone!");

    room.message("Jane", "Simon", "glad you could join us!");

    for line in room.transcript() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_is_announced_to_existing_members_only() {
        let mut room = ChatRoom::new();
        room.join("John").unwrap();
        room.join("Jane").unwrap();

        assert_eq!(
            room.person("John").unwrap().chat_log(),
            &["room: 'Jane joins the chat'".to_string()]
        );
        assert!(room.person("Jane").unwrap().chat_log().is_empty());
    }

    #[test]
    fn test_broadcast_skips_sender() {
        let mut room = ChatRoom::new();
        room.join("John").unwrap();
        room.join("Jane").unwrap();
        room.say("John", "hi room");

        assert_eq!(room.person("Jane").unwrap().chat_log(), &["John: 'hi room'".to_string()]);
        assert_eq!(room.person("John").unwrap().chat_log().len(), 1);
    }

    #[test]
    fn test_private_message() {
        let mut room = ChatRoom::new();
        room.join("Jane").unwrap();
        room.join("Simon").unwrap();
        assert!(room.message("Jane", "Simon", "glad you could join us!"));
        assert_eq!(
            room.person("Simon").unwrap().chat_log().last().unwrap(),
            "Jane: 'glad you could join us!'"
        );
        assert!(!room.message("Jane", "Nobody", "hello?"));
    }

    #[test]
    fn test_demo_output_is_in_delivery_order() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[John's chat session] room: 'Jane joins the chat'\n\
             [Jane's chat session] John: 'hi room'\n\
             [John's chat session] Jane: 'oh, hey john'\n\
             [John's chat session] room: 'Simon joins the chat'\n\
             [Jane's chat session] room: 'Simon joins the chat'\n\
             [John's chat session] Simon: 'hi everyone!'\n\
             [Jane's chat session] Simon: 'hi everyone!'\n\
             [Simon's chat session] Jane: 'glad you could join us!'\n"
        );
    }

    #[test]
    fn test_blank_name_cannot_join() {
        let mut room = ChatRoom::new();
        assert!(room.join(" ").is_err());
        assert!(room.people().is_empty());
    }
}
