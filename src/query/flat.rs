// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Left-to-right evaluation of `operand (OP operand)*`.
//!
//! The first operator combines the first two operands; every following
//! `OP operand` pair folds into the running result. No precedence: the fold
//! order is the reading order. NOT is always `running AND NOT operand`.

use std::borrow::Cow;

use super::lexer::{lex, Element};
use super::{Correction, QueryEngine};
use crate::error::{Result, SiftError};
use crate::postings::PostingSet;

/// Evaluate a query without parentheses.
pub(super) fn evaluate(
    engine: &QueryEngine<'_>,
    text: &str,
    corrections: &mut Vec<Correction>,
) -> Result<PostingSet> {
    let elements = lex(text, false);
    if elements.len() < 2 {
        return Err(SiftError::invalid_query(
            text,
            "you cannot use a single word; connect at least two words with AND, OR or NOT",
        ));
    }
    engine.fold(text, &elements, corrections)
}

impl QueryEngine<'_> {
    /// Fold a parenthesis-free span of elements into one posting set.
    ///
    /// `query` is only used for error messages.
    pub(super) fn fold(
        &self,
        query: &str,
        span: &[Element],
        corrections: &mut Vec<Correction>,
    ) -> Result<PostingSet> {
        let mut elements = span.iter();

        let mut running: Cow<'_, PostingSet> = match elements.next() {
            Some(Element::Operand(operand)) => self.resolve(operand, corrections)?,
            Some(other) => {
                return Err(SiftError::invalid_query(
                    query,
                    format!("expected a word, found {}", describe(other)),
                ))
            }
            None => return Err(SiftError::invalid_query(query, "empty expression")),
        };

        while let Some(element) = elements.next() {
            let Element::Op(operator) = element else {
                return Err(SiftError::invalid_query(
                    query,
                    format!("expected AND, OR or NOT, found {}", describe(element)),
                ));
            };
            let right = match elements.next() {
                Some(Element::Operand(operand)) => self.resolve(operand, corrections)?,
                _ => {
                    return Err(SiftError::invalid_query(
                        query,
                        format!("{} must be followed by a word", operator),
                    ))
                }
            };
            running = Cow::Owned(operator.apply(&running, &right));
        }

        Ok(running.into_owned())
    }
}

fn describe(element: &Element) -> String {
    match element {
        Element::Open => "'('".to_string(),
        Element::Close => "')'".to_string(),
        Element::Op(operator) => format!("'{}'", operator),
        Element::Operand(super::Operand::Word(word)) => format!("'{}'", word),
        Element::Operand(super::Operand::Group(_)) => "a parenthesized group".to_string(),
    }
}
