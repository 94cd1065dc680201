// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary snapshots of an inverted index.
//!
//! Building the index over a large corpus takes a while; a snapshot lets the
//! front end skip that on later runs. Only the index is stored. The corpus is
//! reloaded from its own files. The header keeps the fingerprint of the texts
//! the index was built over, and a snapshot whose fingerprint does not match
//! the reloaded corpus is rejected when the two are paired into a session.
//!
//! # Security Considerations
//!
//! Snapshots are parsed as untrusted input:
//! - All size fields are validated against MAX_* constants
//! - Bounds checking prevents buffer overreads
//! - CRC32 footer detects corruption/truncation
//! - Decoded vocabulary and postings are checked for ordering, so a snapshot
//!   that loads is a well-formed index
//!
//! # Format Overview (v2)
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ HEADER (32 bytes)                                          │
//! │   magic: [u8; 4] = "SIFT"                                  │
//! │   version: u8 = 2                                          │
//! │   flags: u8                                                │
//! │   reserved: [u8; 2]                                        │
//! │   doc_count: u32, term_count: u32                          │
//! │   vocab_len: u32, postings_len: u32, all_docs_len: u32     │
//! │   corpus_fingerprint: u32                                  │
//! ├────────────────────────────────────────────────────────────┤
//! │ 1. VOCABULARY (front-compressed, sorted)                   │
//! ├────────────────────────────────────────────────────────────┤
//! │ 2. POSTINGS (delta+varint, one list per term, vocab order) │
//! ├────────────────────────────────────────────────────────────┤
//! │ 3. ALL_DOCUMENTS (delta+varint)                            │
//! ├────────────────────────────────────────────────────────────┤
//! │ FOOTER (8 bytes): crc32 + magic "TFIS"                     │
//! └────────────────────────────────────────────────────────────┘
//! ```

mod encoding;
mod header;

pub use encoding::{
    decode_postings, decode_varint, decode_vocabulary, encode_postings, encode_varint,
    encode_vocabulary,
};
pub use header::{
    SectionOffsets, SnapshotFooter, SnapshotHeader, FOOTER_MAGIC, MAGIC, MAX_DOC_COUNT,
    MAX_FILE_SIZE, MAX_POSTING_SIZE, MAX_TERM_COUNT, MAX_VARINT_BYTES, VERSION,
};

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::inverted::InvertedIndex;
use crate::term::Term;

fn section_len(len: usize, name: &str) -> io::Result<u32> {
    u32::try_from(len).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} section too large: {} bytes", name, len),
        )
    })
}

/// Encode `index` as a snapshot.
pub fn serialize(index: &InvertedIndex) -> io::Result<Vec<u8>> {
    let mut vocab_bytes = Vec::new();
    encode_vocabulary(index.vocabulary(), &mut vocab_bytes);

    let mut postings_bytes = Vec::new();
    for term in index.terms() {
        encode_postings(term.postings(), &mut postings_bytes);
    }

    let mut all_docs_bytes = Vec::new();
    encode_postings(index.all_documents(), &mut all_docs_bytes);

    let header = SnapshotHeader {
        version: VERSION,
        flags: 0,
        doc_count: section_len(index.doc_count(), "document")?,
        term_count: section_len(index.len(), "term")?,
        vocab_len: section_len(vocab_bytes.len(), "vocabulary")?,
        postings_len: section_len(postings_bytes.len(), "postings")?,
        all_docs_len: section_len(all_docs_bytes.len(), "all documents")?,
        corpus_fingerprint: index.fingerprint(),
    };

    let total_size = header.section_offsets().total_size();
    let mut buf = Vec::with_capacity(total_size);
    header.write(&mut buf)?;
    buf.extend_from_slice(&vocab_bytes);
    buf.extend_from_slice(&postings_bytes);
    buf.extend_from_slice(&all_docs_bytes);

    // Compute CRC32 over everything written so far
    let crc32 = SnapshotFooter::compute_crc32(&buf);
    SnapshotFooter { crc32 }.write(&mut buf)?;

    Ok(buf)
}

/// Check size limits, footer, checksum and header; return the header.
fn read_envelope(bytes: &[u8]) -> io::Result<(SnapshotHeader, SectionOffsets, u32)> {
    if bytes.len() > MAX_FILE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "File too large: {} bytes (max {})",
                bytes.len(),
                MAX_FILE_SIZE
            ),
        ));
    }

    let min_size = SnapshotHeader::SIZE + SnapshotFooter::SIZE;
    if bytes.len() < min_size {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "File too small: {} bytes (minimum {})",
                bytes.len(),
                min_size
            ),
        ));
    }

    let footer = SnapshotFooter::read(bytes)?;
    let content = &bytes[..bytes.len() - SnapshotFooter::SIZE];
    let computed_crc32 = SnapshotFooter::compute_crc32(content);
    if footer.crc32 != computed_crc32 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "CRC32 mismatch: expected {:#010x}, got {:#010x} (file corrupted)",
                footer.crc32, computed_crc32
            ),
        ));
    }

    let header = SnapshotHeader::read(&mut io::Cursor::new(bytes))?;
    header.validate()?;

    let offsets = header.section_offsets();
    if offsets.content_size() != content.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "Section lengths mismatch: header claims {} bytes, got {} bytes",
                offsets.content_size(),
                content.len()
            ),
        ));
    }

    Ok((header, offsets, footer.crc32))
}

fn section<'a>(
    bytes: &'a [u8],
    offsets: &SectionOffsets,
    range: (usize, usize),
    name: &str,
) -> io::Result<&'a [u8]> {
    offsets.slice(bytes, range).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!("{} section out of bounds", name),
        )
    })
}

fn expect_consumed(consumed: usize, len: usize, name: &str) -> io::Result<()> {
    if consumed == len {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "{} section has {} trailing bytes",
                name,
                len.saturating_sub(consumed)
            ),
        ))
    }
}

/// Decode a snapshot produced by [`serialize`].
pub fn deserialize(bytes: &[u8]) -> io::Result<InvertedIndex> {
    let (header, offsets, _) = read_envelope(bytes)?;

    let vocab_bytes = section(bytes, &offsets, offsets.vocabulary, "Vocabulary")?;
    let (vocabulary, consumed) = decode_vocabulary(vocab_bytes, header.term_count as usize)?;
    expect_consumed(consumed, vocab_bytes.len(), "Vocabulary")?;

    let postings_bytes = section(bytes, &offsets, offsets.postings, "Postings")?;
    let mut terms = Vec::with_capacity(vocabulary.len());
    let mut pos = 0;
    for token in vocabulary {
        let (postings, consumed) = decode_postings(&postings_bytes[pos..], header.doc_count)?;
        pos += consumed;
        if postings.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Term '{}' has no postings", token),
            ));
        }
        terms.push(Term::with_postings(token, postings));
    }
    expect_consumed(pos, postings_bytes.len(), "Postings")?;

    let all_docs_bytes = section(bytes, &offsets, offsets.all_documents, "All documents")?;
    let (all_documents, consumed) = decode_postings(all_docs_bytes, header.doc_count)?;
    expect_consumed(consumed, all_docs_bytes.len(), "All documents")?;
    // Ascending and below doc_count, so the right length means exactly 0..doc_count
    if all_documents.len() != header.doc_count as usize {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!(
                "All-documents list has {} entries, header says {}",
                all_documents.len(),
                header.doc_count
            ),
        ));
    }

    Ok(InvertedIndex::from_parts(
        terms,
        all_documents,
        header.corpus_fingerprint,
    ))
}

/// Write a snapshot of `index` to `path`.
pub fn save(index: &InvertedIndex, path: &Path) -> io::Result<()> {
    fs::write(path, serialize(index)?)
}

/// Read and decode the snapshot at `path`.
pub fn load(path: &Path) -> io::Result<InvertedIndex> {
    deserialize(&fs::read(path)?)
}

/// What a snapshot holds, read from its header without decoding sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub version: u8,
    pub doc_count: u32,
    pub term_count: u32,
    pub vocab_bytes: usize,
    pub postings_bytes: usize,
    pub all_docs_bytes: usize,
    pub total_bytes: usize,
    pub corpus_fingerprint: u32,
    pub crc32: u32,
}

/// Validate the envelope of a snapshot and summarize its layout.
pub fn inspect(bytes: &[u8]) -> io::Result<SnapshotSummary> {
    let (header, offsets, crc32) = read_envelope(bytes)?;
    Ok(SnapshotSummary {
        version: header.version,
        doc_count: header.doc_count,
        term_count: header.term_count,
        vocab_bytes: header.vocab_len as usize,
        postings_bytes: header.postings_len as usize,
        all_docs_bytes: header.all_docs_len as usize,
        total_bytes: offsets.total_size(),
        corpus_fingerprint: header.corpus_fingerprint,
        crc32,
    })
}

impl fmt::Display for SnapshotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "version:        {}", self.version)?;
        writeln!(f, "documents:      {}", self.doc_count)?;
        writeln!(f, "terms:          {}", self.term_count)?;
        writeln!(f, "vocabulary:     {} bytes", self.vocab_bytes)?;
        writeln!(f, "postings:       {} bytes", self.postings_bytes)?;
        writeln!(f, "all documents:  {} bytes", self.all_docs_bytes)?;
        writeln!(f, "total:          {} bytes", self.total_bytes)?;
        writeln!(f, "corpus:         {:#010x}", self.corpus_fingerprint)?;
        write!(f, "crc32:          {:#010x}", self.crc32)
    }
}
