//! Search query builder
//!
//! A query is an ordered list of clauses serialized once, joined by spaces.
//! Values are not quoted or escaped: organization, author and label names
//! containing spaces produce a query the search API will read differently.

use std::fmt;

use super::models::BUG_LABEL;
use crate::dates::DateRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    Org(String),
    IsIssue,
    IsPr,
    IsMerged,
    Author(String),
    Created(DateRange),
    Merged(DateRange),
    Label { name: String, negated: bool },
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Org(org) => write!(f, "org:{}", org),
            Clause::IsIssue => write!(f, "is:issue"),
            Clause::IsPr => write!(f, "is:pr"),
            Clause::IsMerged => write!(f, "is:merged"),
            Clause::Author(author) => write!(f, "author:{}", author),
            Clause::Created(range) => write!(f, "created:{}", range),
            Clause::Merged(range) => write!(f, "merged:{}", range),
            Clause::Label { name, negated: false } => write!(f, "label:{}", name),
            Clause::Label { name, negated: true } => write!(f, "-label:{}", name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    clauses: Vec<Clause>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues of an organization created in the window
    pub fn issues_created(org: &str, range: DateRange) -> Self {
        Self::new().org(org).clause(Clause::IsIssue).clause(Clause::Created(range))
    }

    /// Pull requests of an organization merged in the window
    pub fn prs_merged(org: &str, range: DateRange) -> Self {
        Self::new()
            .org(org)
            .clause(Clause::IsPr)
            .clause(Clause::IsMerged)
            .clause(Clause::Merged(range))
    }

    /// Pull requests of one author merged in the window
    pub fn author_prs_merged(org: &str, author: &str, range: DateRange) -> Self {
        Self::new()
            .org(org)
            .clause(Clause::IsPr)
            .clause(Clause::IsMerged)
            .clause(Clause::Author(author.to_string()))
            .clause(Clause::Merged(range))
    }

    pub fn org(self, org: &str) -> Self {
        self.clause(Clause::Org(org.to_string()))
    }

    pub fn label(self, name: &str) -> Self {
        self.clause(Clause::Label { name: name.to_string(), negated: false })
    }

    pub fn without_label(self, name: &str) -> Self {
        self.clause(Clause::Label { name: name.to_string(), negated: true })
    }

    pub fn bug(self) -> Self {
        self.label(BUG_LABEL)
    }

    pub fn not_bug(self) -> Self {
        self.without_label(BUG_LABEL)
    }

    pub fn clause(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// The `q` parameter sent to the search API
    pub fn build(&self) -> String {
        self.clauses
            .iter()
            .map(Clause::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
