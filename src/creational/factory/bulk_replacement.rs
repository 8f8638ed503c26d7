//! Factory with bulk replacement
//!
//! A factory that remembers what it handed out, either to report on it or to
//! swap every product in place.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::cell::RefCell;
use std::io::Write;
use std::rc::{Rc, Weak};

pub trait Theme {
    fn text_color(&self) -> &'static str;
    fn background_color(&self) -> &'static str;
    fn is_dark(&self) -> bool;
}

pub struct LightTheme;
pub struct DarkTheme;

impl Theme for LightTheme {
    fn text_color(&self) -> &'static str {
        "black"
    }

    fn background_color(&self) -> &'static str {
        "white"
    }

    fn is_dark(&self) -> bool {
        false
    }
}

impl Theme for DarkTheme {
    fn text_color(&self) -> &'static str {
        "white"
    }

    fn background_color(&self) -> &'static str {
        "dark gray"
    }

    fn is_dark(&self) -> bool {
        true
    }
}

fn make_theme(dark: bool) -> Box<dyn Theme> {
    if dark {
        Box::new(DarkTheme)
    } else {
        Box::new(LightTheme)
    }
}

/// Hands out themes and keeps weak references so it can report which ones
/// are still in use.
#[derive(Default)]
pub struct TrackingThemeFactory {
    themes: Vec<Weak<dyn Theme>>,
}

impl TrackingThemeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_theme(&mut self, dark: bool) -> Rc<dyn Theme> {
        let theme: Rc<dyn Theme> = Rc::from(make_theme(dark));
        self.themes.push(Rc::downgrade(&theme));
        theme
    }

    /// Lists the live themes and forgets the dead ones.
    pub fn info(&mut self) -> String {
        self.themes.retain(|weak| weak.strong_count() > 0);
        self.themes
            .iter()
            .filter_map(Weak::upgrade)
            .map(|theme| {
                let kind = if theme.is_dark() { "Dark" } else { "Light" };
                format!("{kind} theme\n")
            })
            .collect()
    }

    pub fn tracked_count(&self) -> usize {
        self.themes.len()
    }
}

/// Shared, swappable slot. Everyone holding the `ThemeRef` sees a
/// replacement.
pub type ThemeRef = Rc<RefCell<Box<dyn Theme>>>;

#[derive(Default)]
pub struct ReplaceableThemeFactory {
    themes: Vec<Weak<RefCell<Box<dyn Theme>>>>,
}

impl ReplaceableThemeFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_theme(&mut self, dark: bool) -> ThemeRef {
        let theme = Rc::new(RefCell::new(make_theme(dark)));
        self.themes.push(Rc::downgrade(&theme));
        theme
    }

    /// Swaps every live theme in place and forgets the dead ones. Returns the
    /// number of themes replaced.
    pub fn replace_theme(&mut self, dark: bool) -> usize {
        self.themes.retain(|weak| weak.strong_count() > 0);
        let mut replaced = 0;
        for theme in self.themes.iter().filter_map(Weak::upgrade) {
            *theme.borrow_mut() = make_theme(dark);
            replaced += 1;
        }
        tracing::debug!("Replaced {replaced} theme(s), dark = {dark}");
        replaced
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut factory = TrackingThemeFactory::new();
    let _dark = factory.create_theme(true);
    let light = factory.create_theme(false);
    write!(out, "{}", factory.info())?;
    drop(light);
    write!(out, "After dropping the light theme:\n{}", factory.info())?;

    let mut factory2 = ReplaceableThemeFactory::new();
    let magic = factory2.create_theme(true);
    writeln!(out, "{}", magic.borrow().background_color())?;
    factory2.replace_theme(false);
    writeln!(out, "{}", magic.borrow().background_color())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracking_reports_live_themes_only() {
        let mut factory = TrackingThemeFactory::new();
        let dark = factory.create_theme(true);
        {
            let _light = factory.create_theme(false);
            assert_eq!(factory.info(), "Dark theme\nLight theme\n");
        }
        assert_eq!(factory.info(), "Dark theme\n");
        assert_eq!(dark.text_color(), "white");
    }

    #[test]
    fn test_info_forgets_dropped_themes() {
        let mut factory = TrackingThemeFactory::new();
        let _kept = factory.create_theme(true);
        for _ in 0..3 {
            factory.create_theme(false);
        }
        assert_eq!(factory.tracked_count(), 4);
        factory.info();
        assert_eq!(factory.tracked_count(), 1);
    }

    #[test]
    fn test_bulk_replacement() {
        let mut factory = ReplaceableThemeFactory::new();
        let a = factory.create_theme(true);
        let b = factory.create_theme(true);
        let dropped = factory.create_theme(false);
        drop(dropped);

        assert_eq!(factory.replace_theme(false), 2);
        assert_eq!(a.borrow().background_color(), "white");
        assert_eq!(b.borrow().text_color(), "black");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Dark theme\nLight theme\nAfter dropping the light theme:\nDark theme\ndark gray\nwhite\n"
        );
    }
}
