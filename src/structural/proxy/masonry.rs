//! Composite proxy: several flags viewed as one.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

const PILLARS: usize = 0;
const WALLS: usize = 1;
const FLOORS: usize = 2;

/// Three checkboxes backed by one array, plus an "all" box that is checked,
/// unchecked or indeterminate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasonrySettings {
    flags: [bool; 3],
}

impl MasonrySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` when the flags disagree.
    pub fn all(&self) -> Option<bool> {
        let first = self.flags[0];
        self.flags.iter().all(|&f| f == first).then_some(first)
    }

    /// `None` leaves the flags untouched.
    pub fn set_all(&mut self, value: Option<bool>) {
        if let Some(value) = value {
            self.flags = [value; 3];
        }
    }

    pub fn pillars(&self) -> bool {
        self.flags[PILLARS]
    }

    pub fn set_pillars(&mut self, value: bool) {
        self.flags[PILLARS] = value;
    }

    pub fn walls(&self) -> bool {
        self.flags[WALLS]
    }

    pub fn set_walls(&mut self, value: bool) {
        self.flags[WALLS] = value;
    }

    pub fn floors(&self) -> bool {
        self.flags[FLOORS]
    }

    pub fn set_floors(&mut self, value: bool) {
        self.flags[FLOORS] = value;
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut settings = MasonrySettings::new();
    writeln!(out, "Fresh: all = {:?}", settings.all())?;
    settings.set_walls(true);
    writeln!(out, "Walls only: all = {:?}", settings.all())?;
    settings.set_all(Some(true));
    writeln!(out, "All checked: all = {:?}", settings.all())?;
    settings.set_all(None);
    writeln!(out, "Indeterminate ignored: floors = {}", settings.floors())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tri_state() {
        let mut s = MasonrySettings::new();
        assert_eq!(s.all(), Some(false));
        s.set_pillars(true);
        assert_eq!(s.all(), None);
        s.set_walls(true);
        s.set_floors(true);
        assert_eq!(s.all(), Some(true));
        s.set_all(Some(false));
        assert!(!s.pillars() && !s.walls() && !s.floors());
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Fresh: all = Some(false)\nWalls only: all = None\n\
             All checked: all = Some(true)\nIndeterminate ignored: floors = true\n"
        );
    }
}
