// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boolean query evaluation over an inverted index.
//!
//! Three query shapes, all stateless between calls:
//!
//! | Entry point      | Input                    | Combination                          |
//! |------------------|--------------------------|--------------------------------------|
//! | `and_query`      | `"yoda luke darth"`      | intersection of every word           |
//! | `or_query`       | `"frodo yoda"`           | union of every word                  |
//! | `not_query`      | `"love mother"`          | all documents minus the union        |
//! | `flat_query`     | `"yoda AND darth OR x"`  | strict left-to-right fold            |
//! | `grouped_query`  | `"(yoda AND luke) OR x"` | innermost group first, then the fold |
//!
//! There is no operator precedence anywhere. `a OR b AND c` is `(a ∪ b) ∩ c`.
//! Parentheses are the only grouping.
//!
//! Words are normalized exactly like document text before lookup. A word that
//! misses the index is an error unless spelling correction is on, in which
//! case the nearest vocabulary term stands in and the substitution is reported
//! in [`Evaluation::corrections`].

mod flat;
mod grouped;
mod lexer;

use std::borrow::Cow;
use std::fmt;

use crate::error::{Result, SiftError};
use crate::fuzzy::find_nearest;
use crate::inverted::InvertedIndex;
use crate::postings::PostingSet;
use crate::utils::normalize;

pub use lexer::{lex, Element};

/// A binary Boolean connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    /// `left AND NOT right`. Not commutative.
    Not,
}

impl Operator {
    /// Recognize an operator keyword. Keywords are upper-case only.
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "AND" => Some(Operator::And),
            "OR" => Some(Operator::Or),
            "NOT" => Some(Operator::Not),
            _ => None,
        }
    }

    /// Combine two posting sets, `left` first.
    pub fn apply(self, left: &PostingSet, right: &PostingSet) -> PostingSet {
        match self {
            Operator::And => left.intersection(right),
            Operator::Or => left.union(right),
            Operator::Not => left.difference(right),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
        })
    }
}

/// An operand of a Boolean operator: a word still to be looked up, or a group
/// that has already been reduced to its posting set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Word(String),
    Group(PostingSet),
}

/// Which evaluator a query string goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    And,
    Or,
    Not,
    Flat,
    #[default]
    Grouped,
}

/// Per-query knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    /// Substitute the nearest vocabulary term for words missing from the index.
    pub spelling_correction: bool,
    /// Only consider correction candidates sharing the word's first character.
    pub same_first_letter: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            spelling_correction: false,
            same_first_letter: true,
        }
    }
}

impl QueryOptions {
    pub fn with_spelling_correction(mut self) -> Self {
        self.spelling_correction = true;
        self
    }
}

/// A word that was not in the index and what was used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub term: String,
    pub suggestion: String,
}

impl fmt::Display for Correction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' not found. Did you mean '{}'?",
            self.term, self.suggestion
        )
    }
}

/// The result of a query: matching documents, plus any spelling substitutions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub postings: PostingSet,
    pub corrections: Vec<Correction>,
}

/// Evaluates query strings against a read-only index.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    index: &'a InvertedIndex,
    options: QueryOptions,
}

impl<'a> QueryEngine<'a> {
    pub fn new(index: &'a InvertedIndex, options: QueryOptions) -> Self {
        Self { index, options }
    }

    /// Dispatch `text` to the evaluator for `mode`.
    pub fn evaluate(&self, mode: QueryMode, text: &str) -> Result<Evaluation> {
        match mode {
            QueryMode::And => self.and_query(text),
            QueryMode::Or => self.or_query(text),
            QueryMode::Not => self.not_query(text),
            QueryMode::Flat => self.flat_query(text),
            QueryMode::Grouped => self.grouped_query(text),
        }
    }

    /// Documents containing every word.
    pub fn and_query(&self, text: &str) -> Result<Evaluation> {
        self.list_query(text, |postings| {
            let (first, rest) = postings.split_first()?;
            Some(rest.iter().fold((*first).clone(), |acc, p| acc.intersection(p)))
        })
    }

    /// Documents containing any word.
    pub fn or_query(&self, text: &str) -> Result<Evaluation> {
        self.list_query(text, |postings| Some(union_all(postings)))
    }

    /// Documents containing none of the words.
    ///
    /// The words are unioned first and the union is removed from the full
    /// document set, so `"love mother"` excludes documents with either word.
    pub fn not_query(&self, text: &str) -> Result<Evaluation> {
        let all_documents = self.index.all_documents();
        self.list_query(text, |postings| {
            Some(all_documents.difference(&union_all(postings)))
        })
    }

    /// Operators without parentheses, folded strictly left to right.
    pub fn flat_query(&self, text: &str) -> Result<Evaluation> {
        let mut corrections = Vec::new();
        let postings = flat::evaluate(self, text, &mut corrections)?;
        Ok(Evaluation {
            postings,
            corrections,
        })
    }

    /// Operators with arbitrarily nested parentheses.
    pub fn grouped_query(&self, text: &str) -> Result<Evaluation> {
        let mut corrections = Vec::new();
        let postings = grouped::evaluate(self, text, &mut corrections)?;
        Ok(Evaluation {
            postings,
            corrections,
        })
    }

    /// Resolve every whitespace-separated word, then `combine` them.
    fn list_query<F>(&self, text: &str, combine: F) -> Result<Evaluation>
    where
        F: FnOnce(&[&PostingSet]) -> Option<PostingSet>,
    {
        let mut corrections = Vec::new();
        let postings = text
            .split_whitespace()
            .map(|word| self.resolve_word(word, &mut corrections))
            .collect::<Result<Vec<_>>>()?;

        let postings = combine(&postings)
            .ok_or_else(|| SiftError::invalid_query(text, "the query has no words"))?;
        Ok(Evaluation {
            postings,
            corrections,
        })
    }

    /// Postings for a query operand, borrowed from the index or the group.
    fn resolve<'s>(
        &self,
        operand: &'s Operand,
        corrections: &mut Vec<Correction>,
    ) -> Result<Cow<'s, PostingSet>>
    where
        'a: 's,
    {
        match operand {
            Operand::Word(word) => self.resolve_word(word, corrections).map(Cow::Borrowed),
            Operand::Group(postings) => Ok(Cow::Borrowed(postings)),
        }
    }

    /// Normalize a raw query word and look it up, correcting it if allowed.
    fn resolve_word(&self, raw: &str, corrections: &mut Vec<Correction>) -> Result<&'a PostingSet> {
        let word = normalize(raw);
        match self.index.lookup(&word) {
            Ok(postings) => Ok(postings),
            Err(err) if !self.options.spelling_correction => Err(err),
            Err(err) => {
                let Some(suggestion) =
                    find_nearest(&word, self.index.vocabulary(), self.options.same_first_letter)
                else {
                    return Err(err);
                };
                corrections.push(Correction {
                    term: word.clone(),
                    suggestion: suggestion.to_string(),
                });
                self.index.lookup(suggestion)
            }
        }
    }
}

fn union_all(postings: &[&PostingSet]) -> PostingSet {
    postings
        .iter()
        .fold(PostingSet::new(), |acc, p| acc.union(p))
}
