// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query string to a flat sequence of elements.
//!
//! Splitting is on whitespace only. With parentheses enabled, `(` and `)` are
//! padded with spaces first so `"(yoda AND luke)"` yields five elements.
//! Words are kept raw; normalization happens at lookup.

use super::{Operand, Operator};

/// One position in a query being evaluated.
///
/// Evaluation of a parenthesized query replaces a whole `Open … Close` span
/// with a single `Operand(Operand::Group(_))`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Open,
    Close,
    Op(Operator),
    Operand(Operand),
}

impl Element {
    pub fn is_operator(&self) -> bool {
        matches!(self, Element::Op(_))
    }
}

/// Split `text` into elements. Parentheses are only special when `parentheses`.
pub fn lex(text: &str, parentheses: bool) -> Vec<Element> {
    let padded;
    let text = if parentheses {
        padded = text.replace('(', " ( ").replace(')', " ) ");
        padded.as_str()
    } else {
        text
    };

    text.split_whitespace()
        .map(|word| match word {
            "(" if parentheses => Element::Open,
            ")" if parentheses => Element::Close,
            _ => Operator::parse(word).map_or_else(
                || Element::Operand(Operand::Word(word.to_string())),
                Element::Op,
            ),
        })
        .collect()
}
