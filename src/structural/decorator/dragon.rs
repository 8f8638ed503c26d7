//! Decorator: a dragon that is both a bird and a lizard, by composition.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::io::Write;

#[derive(Debug, Default)]
pub struct Bird {
    pub age: u32,
}

impl Bird {
    pub fn fly(&self) -> &'static str {
        if self.age < 10 {
            "too young to fly"
        } else {
            "flying"
        }
    }
}

#[derive(Debug, Default)]
pub struct Lizard {
    pub age: u32,
}

impl Lizard {
    pub fn crawl(&self) -> &'static str {
        if self.age > 1 {
            "crawling"
        } else {
            "too young to crawl"
        }
    }
}

/// Both a bird and a lizard, built from one of each. The age setter keeps
/// the two parts in step.
#[derive(Debug, Default)]
pub struct Dragon {
    bird: Bird,
    lizard: Lizard,
}

impl Dragon {
    pub fn new(bird: Bird, lizard: Lizard) -> Self {
        let mut dragon = Self { bird, lizard };
        let age = dragon.bird.age;
        dragon.set_age(age);
        dragon
    }

    pub fn age(&self) -> u32 {
        self.bird.age
    }

    pub fn set_age(&mut self, age: u32) {
        self.bird.age = age;
        self.lizard.age = age;
    }

    pub fn fly(&self) -> &'static str {
        self.bird.fly()
    }

    pub fn crawl(&self) -> &'static str {
        self.lizard.crawl()
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut dragon = Dragon::default();
    for age in [1, 5, 10] {
        dragon.set_age(age);
        writeln!(out, "Age {}: {}, {}", dragon.age(), dragon.crawl(), dragon.fly())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts_share_age() {
        let dragon = Dragon::new(Bird { age: 12 }, Lizard { age: 0 });
        assert_eq!(dragon.crawl(), "crawling");
        assert_eq!(dragon.fly(), "flying");
    }

    #[test]
    fn test_demo_output() {
        let mut out = Vec::new();
        run(&mut out, &PatternsConfig::quiet()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Age 1: too young to crawl, too young to fly\n\
             Age 5: crawling, too young to fly\n\
             Age 10: crawling, flying\n"
        );
    }
}
