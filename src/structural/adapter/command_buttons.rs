//! Adapter: commands wrapped as toolbar buttons.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

pub trait Command {
    fn execute(&self) -> String;
}

pub struct SaveCommand;
pub struct OpenCommand;

impl Command for SaveCommand {
    fn execute(&self) -> String {
        "Saving current file".to_string()
    }
}

impl Command for OpenCommand {
    fn execute(&self) -> String {
        "Opening a file".to_string()
    }
}

/// A toolbar button wrapping a command.
pub struct Button {
    command: Box<dyn Command>,
    name: String,
}

impl Button {
    pub fn new(command: Box<dyn Command>, name: &str) -> Self {
        Self {
            command,
            name: name.to_string(),
        }
    }

    pub fn click(&self) -> String {
        self.command.execute()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn describe(&self) -> String {
        format!("I am a button called {}", self.name)
    }
}

pub struct Editor {
    buttons: Vec<Button>,
}

impl Editor {
    pub fn new(buttons: Vec<Button>) -> Self {
        Self { buttons }
    }

    /// The adapter step: every registered command becomes a button named
    /// after its metadata.
    pub fn from_commands<'a>(commands: impl IntoIterator<Item = (&'a str, Box<dyn Command>)>) -> Self {
        let buttons = commands
            .into_iter()
            .map(|(name, command)| Button::new(command, name))
            .collect();
        Self::new(buttons)
    }

    pub fn click_all(&self) -> Vec<String> {
        self.buttons.iter().map(Button::click).collect()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let editor = Editor::from_commands([
        ("Open", Box::new(OpenCommand) as Box<dyn Command>),
        ("Save", Box::new(SaveCommand) as Box<dyn Command>),
    ]);

    for result in editor.click_all() {
        writeln!(out, "{result}")?;
    }
    for button in editor.buttons() {
        writeln!(out, "{}", button.describe())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_wrap_commands() {
        let editor = Editor::from_commands([("Save", Box::new(SaveCommand) as Box<dyn Command>)]);
        assert_eq!(editor.buttons().len(), 1);
        assert_eq!(editor.buttons()[0].name(), "Save");
        assert_eq!(editor.click_all(), vec!["Saving current file"]);
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Opening a file\nSaving current file\nI am a button called Open\nI am a button called Save\n"
        );
    }
}
