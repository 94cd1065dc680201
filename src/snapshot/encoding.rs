// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary encoding primitives: varint, front compression, delta postings.
//!
//! Varint for integers that are usually small. Front compression for the
//! sorted vocabulary, whose neighbours share prefixes. Delta encoding for
//! posting lists, whose ids are ascending.
//!
//! Every decoder returns `(value, bytes_consumed)` and validates as it goes:
//! a snapshot that decodes at all decodes into a well-formed index.
//!
//! # References
//!
//! - **Varint (LEB128)**: Little-endian base-128 variable-length integers, as
//!   used by DWARF and Protocol Buffers.
//! - **Front Compression**: Witten, Moffat, Bell (1999), "Managing Gigabytes",
//!   §3.3 "Front Coding".

use std::io;

use super::header::{MAX_POSTING_SIZE, MAX_VARINT_BYTES};
use crate::postings::PostingSet;
use crate::types::DocId;
use crate::utils::common_prefix_len;

// ============================================================================
// VARINT ENCODING
// ============================================================================

/// Encode a varint to bytes
pub fn encode_varint(mut value: u64, buf: &mut Vec<u8>) {
    loop {
        let byte = (value & 0x7F) as u8;
        value >>= 7;
        if value == 0 {
            buf.push(byte);
            break;
        } else {
            buf.push(byte | 0x80);
        }
    }
}

/// Decode a varint from bytes, returning (value, bytes_consumed)
///
/// Fails on an empty buffer, a buffer ending mid-varint, or a varint longer
/// than MAX_VARINT_BYTES.
pub fn decode_varint(bytes: &[u8]) -> io::Result<(u64, usize)> {
    if bytes.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Empty buffer for varint",
        ));
    }

    let mut result: u64 = 0;
    let mut shift = 0;
    let mut i = 0;

    while i < bytes.len() && i < MAX_VARINT_BYTES {
        let byte = bytes[i];
        result |= ((byte & 0x7F) as u64) << shift;
        i += 1;
        if byte & 0x80 == 0 {
            return Ok((result, i));
        }
        shift += 7;
    }

    if i >= MAX_VARINT_BYTES {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Varint exceeds maximum length (possible corruption)",
        ))
    } else {
        Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "Incomplete varint",
        ))
    }
}

/// Decode a varint that must fit in `usize`.
fn decode_len(bytes: &[u8]) -> io::Result<(usize, usize)> {
    let (value, consumed) = decode_varint(bytes)?;
    let value = usize::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Length {} does not fit in memory", value),
        )
    })?;
    Ok((value, consumed))
}

// ============================================================================
// VOCABULARY ENCODING (front compression)
// ============================================================================

/// Encode vocabulary with front compression.
///
/// Since vocabulary is sorted, consecutive terms share prefixes.
/// Format: [shared_prefix_len: varint][suffix_len: varint][suffix: bytes]
///
/// Example:
/// - "darth" -> [0][5]["darth"]
/// - "darts" -> [4][1]["s"]
/// - "dune"  -> [1][3]["une"]
pub fn encode_vocabulary<'a, I>(vocabulary: I, out: &mut Vec<u8>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut prev: &[u8] = &[];

    for term in vocabulary {
        let bytes = term.as_bytes();
        let shared = common_prefix_len(prev, bytes);
        let suffix = &bytes[shared..];

        encode_varint(shared as u64, out);
        encode_varint(suffix.len() as u64, out);
        out.extend_from_slice(suffix);

        prev = bytes;
    }
}

/// Decode `term_count` front-compressed terms, returning (terms, bytes_consumed).
///
/// Terms must come out strictly ascending; a duplicate or out-of-order term is
/// rejected, since lookup binary-searches the vocabulary.
pub fn decode_vocabulary(bytes: &[u8], term_count: usize) -> io::Result<(Vec<String>, usize)> {
    let mut terms: Vec<String> = Vec::with_capacity(term_count.min(bytes.len()));
    let mut pos = 0;

    for i in 0..term_count {
        let prev: &[u8] = terms.last().map(String::as_bytes).unwrap_or_default();

        let (shared, consumed) = decode_len(&bytes[pos..])?;
        pos += consumed;
        if shared > prev.len() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Invalid shared prefix length {} (prev term len {})",
                    shared,
                    prev.len()
                ),
            ));
        }

        let (suffix_len, consumed) = decode_len(&bytes[pos..])?;
        pos += consumed;

        // Use checked arithmetic to prevent overflow on malicious input
        let end_pos = pos.checked_add(suffix_len).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Term {} suffix length {} causes overflow", i, suffix_len),
            )
        })?;
        if end_pos > bytes.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("Truncated term {} suffix (expected {} bytes)", i, suffix_len),
            ));
        }

        let mut term_bytes = prev[..shared].to_vec();
        term_bytes.extend_from_slice(&bytes[pos..end_pos]);
        pos = end_pos;

        if term_bytes.as_slice() <= prev && i > 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Vocabulary not strictly ascending at term {}", i),
            ));
        }

        let term = String::from_utf8(term_bytes).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid UTF-8 in term {}: {}", i, e),
            )
        })?;
        if term.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Empty term at position {}", i),
            ));
        }
        terms.push(term);
    }

    Ok((terms, pos))
}

// ============================================================================
// POSTINGS ENCODING (delta + varint)
// ============================================================================

/// Encode a posting set with delta+varint compression.
///
/// Format:
/// - doc_freq: varint
/// - For each id in ascending order: delta from the previous id (the first
///   id is a delta from 0)
///
/// Ids [4, 8, 15, 16] are stored as [4][4][4][7][1].
pub fn encode_postings(postings: &PostingSet, buf: &mut Vec<u8>) {
    encode_varint(postings.len() as u64, buf);

    let mut prev = 0u32;
    for id in postings {
        encode_varint(u64::from(id.get() - prev), buf);
        prev = id.get();
    }
}

/// Decode one posting set, returning (postings, bytes_consumed).
///
/// Every id must be below `doc_count` and strictly greater than the one
/// before it, so a zero delta anywhere but the first position is corruption.
pub fn decode_postings(bytes: &[u8], doc_count: u32) -> io::Result<(PostingSet, usize)> {
    let (doc_freq, mut pos) = decode_len(bytes)?;

    if doc_freq > MAX_POSTING_SIZE || doc_freq > doc_count as usize {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Posting list too large: {} (max {}, {} documents)",
                doc_freq, MAX_POSTING_SIZE, doc_count
            ),
        ));
    }

    let mut ids = Vec::with_capacity(doc_freq);
    let mut prev: Option<u32> = None;

    for _ in 0..doc_freq {
        let (delta, consumed) = decode_varint(&bytes[pos..])?;
        pos += consumed;

        let id = u32::try_from(delta)
            .ok()
            .and_then(|delta| match prev {
                None => Some(delta),
                Some(_) if delta == 0 => None,
                Some(prev) => prev.checked_add(delta),
            })
            .filter(|&id| id < doc_count)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!(
                        "Invalid posting delta {} after {:?} ({} documents)",
                        delta, prev, doc_count
                    ),
                )
            })?;

        ids.push(DocId(id));
        prev = Some(id);
    }

    Ok((PostingSet::from_sorted(ids), pos))
}
