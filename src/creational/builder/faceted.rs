//! Builder: faceted
//!
//! Address and job details set through two sub-builders that share one
//! person.

use crate::config::PatternsConfig;
use crate::error::Result;
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    pub street_address: String,
    pub postcode: String,
    pub city: String,
    pub company_name: String,
    pub position: String,
    pub annual_income: u32,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StreetAddress: {}, Postcode: {}, City: {}, CompanyName: {}, Position: {}, AnnualIncome: {}",
            self.street_address,
            self.postcode,
            self.city,
            self.company_name,
            self.position,
            self.annual_income
        )
    }
}

/// Facade over the address and job builders. Both facets borrow the same
/// person, so you can hop between them mid-chain.
#[derive(Debug, Default)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lives(&mut self) -> PersonAddressBuilder<'_> {
        PersonAddressBuilder { builder: self }
    }

    pub fn works(&mut self) -> PersonJobBuilder<'_> {
        PersonJobBuilder { builder: self }
    }

    /// Snapshot of the person built so far; the builder stays usable.
    pub fn build(&self) -> Person {
        self.person.clone()
    }
}

impl From<PersonBuilder> for Person {
    fn from(builder: PersonBuilder) -> Self {
        builder.person
    }
}

pub struct PersonAddressBuilder<'a> {
    builder: &'a mut PersonBuilder,
}

impl<'a> PersonAddressBuilder<'a> {
    pub fn at(self, street_address: &str) -> Self {
        self.builder.person.street_address = street_address.to_string();
        self
    }

    pub fn with_postcode(self, postcode: &str) -> Self {
        self.builder.person.postcode = postcode.to_string();
        self
    }

    pub fn in_city(self, city: &str) -> Self {
        self.builder.person.city = city.to_string();
        self
    }

    pub fn works(self) -> PersonJobBuilder<'a> {
        PersonJobBuilder {
            builder: self.builder,
        }
    }
}

pub struct PersonJobBuilder<'a> {
    builder: &'a mut PersonBuilder,
}

impl<'a> PersonJobBuilder<'a> {
    pub fn at(self, company_name: &str) -> Self {
        self.builder.person.company_name = company_name.to_string();
        self
    }

    pub fn as_a(self, position: &str) -> Self {
        self.builder.person.position = position.to_string();
        self
    }

    pub fn earning(self, annual_income: u32) -> Self {
        self.builder.person.annual_income = annual_income;
        self
    }

    pub fn lives(self) -> PersonAddressBuilder<'a> {
        PersonAddressBuilder {
            builder: self.builder,
        }
    }
}

pub fn run(out: &mut dyn Write, _config: &PatternsConfig) -> Result<()> {
    let mut pb = PersonBuilder::new();
    pb.lives()
        .at("123 London Road")
        .in_city("Hamburg, Germany")
        .with_postcode("23311")
        .works()
        .at("Microhard Corp.")
        .as_a("Junior Developer")
        .earning(123000);
    let person = pb.build();

    // Reusing the builder leaves the first snapshot alone.
    pb.works().earning(50000).at("Edeka").as_a("Cashier").lives().in_city("Sofia");
    let person2 = Person::from(pb);

    writeln!(out, "{person}")?;
    writeln!(out, "{person2}")?;
    Ok(())
}
