// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parenthesized queries.
//!
//! The whole query is wrapped in one extra pair of parentheses, then reduced
//! one group at a time: find the first `)`, walk back to the nearest `(`, fold
//! the span between them left to right, and splice the result back in as a
//! single operand. Repeat until one operand is left.
//!
//! ```text
//! ( ( yoda AND luke ) OR gandalf )
//! ( {0} OR gandalf )
//! {0, 2}
//! ```

use std::iter;

use super::lexer::{lex, Element};
use super::{Correction, Operand, QueryEngine};
use crate::error::{Result, SiftError};
use crate::postings::PostingSet;

/// Evaluate a query with optional parentheses.
pub(super) fn evaluate(
    engine: &QueryEngine<'_>,
    text: &str,
    corrections: &mut Vec<Correction>,
) -> Result<PostingSet> {
    let mut elements = lex(text, true);

    if !elements.iter().any(Element::is_operator) {
        return Err(SiftError::invalid_query(
            text,
            "connect the words with AND, OR or NOT",
        ));
    }

    let opens = elements.iter().filter(|e| **e == Element::Open).count();
    let closes = elements.iter().filter(|e| **e == Element::Close).count();
    if opens != closes {
        return Err(SiftError::invalid_query(
            text,
            format!("unbalanced parentheses: {opens} '(' and {closes} ')'"),
        ));
    }

    elements.insert(0, Element::Open);
    elements.push(Element::Close);

    while let Some(close) = elements.iter().position(|e| *e == Element::Close) {
        let open = elements[..close]
            .iter()
            .rposition(|e| *e == Element::Open)
            .ok_or_else(|| SiftError::invalid_query(text, "')' without a matching '('"))?;

        let group = engine.fold(text, &elements[open + 1..close], corrections)?;
        elements.splice(
            open..=close,
            iter::once(Element::Operand(Operand::Group(group))),
        );
    }

    match elements.pop() {
        Some(Element::Operand(Operand::Group(postings))) if elements.is_empty() => Ok(postings),
        _ => Err(SiftError::invalid_query(text, "mismatched parentheses")),
    }
}
