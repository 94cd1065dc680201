// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot header and footer.
//!
//! The header is 32 bytes of fixed-size fields, parsed in one read before
//! anything else. It records the length of every section, so the section
//! boundaries follow from the header alone, and the fingerprint of the corpus
//! the index was built over.
//!
//! The footer is 8 bytes: a CRC32 over everything before it, plus a magic
//! number ("TFIS", the header magic reversed). A wrong footer means the file
//! was truncated or corrupted.

use std::io::{self, Read, Write};

use crc32fast::Hasher as Crc32Hasher;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Magic bytes: "SIFT" in ASCII (header)
pub const MAGIC: [u8; 4] = [0x53, 0x49, 0x46, 0x54];

/// Footer magic: "TFIS" (reversed, marks valid file end)
pub const FOOTER_MAGIC: [u8; 4] = [0x54, 0x46, 0x49, 0x53];

/// Current format version
pub const VERSION: u8 = 2;

// ============================================================================
// SECURITY LIMITS (prevent resource exhaustion from malicious input)
// ============================================================================

/// Maximum file size: 512 MB
pub const MAX_FILE_SIZE: usize = 512 * 1024 * 1024;

/// Maximum number of documents
pub const MAX_DOC_COUNT: u32 = 50_000_000;

/// Maximum number of terms
pub const MAX_TERM_COUNT: u32 = 50_000_000;

/// Maximum posting list size per term
pub const MAX_POSTING_SIZE: usize = 50_000_000;

/// Maximum varint bytes (u64 needs at most 10 bytes)
pub const MAX_VARINT_BYTES: usize = 10;

// ============================================================================
// HEADER
// ============================================================================

/// Snapshot header (32 bytes fixed size)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub version: u8,
    pub flags: u8,
    pub doc_count: u32,
    pub term_count: u32,
    pub vocab_len: u32,
    pub postings_len: u32,
    pub all_docs_len: u32,
    /// CRC32 over the corpus texts, see `InvertedIndex::fingerprint`
    pub corpus_fingerprint: u32,
}

impl SnapshotHeader {
    // 4 (magic) + 1 (version) + 1 (flags) + 2 (reserved) + 6*4 (u32s) = 32
    pub const SIZE: usize = 32;

    pub fn section_offsets(&self) -> SectionOffsets {
        SectionOffsets::from_header(self)
    }

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&MAGIC)?;
        w.write_all(&[self.version])?;
        w.write_all(&[self.flags])?;
        w.write_all(&[0u8; 2])?; // reserved
        w.write_all(&self.doc_count.to_le_bytes())?;
        w.write_all(&self.term_count.to_le_bytes())?;
        w.write_all(&self.vocab_len.to_le_bytes())?;
        w.write_all(&self.postings_len.to_le_bytes())?;
        w.write_all(&self.all_docs_len.to_le_bytes())?;
        w.write_all(&self.corpus_fingerprint.to_le_bytes())?;
        Ok(())
    }

    pub fn read<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut magic = [0u8; 4];
        r.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid magic: expected SIFT, got {:?}", magic),
            ));
        }

        let mut buf = [0u8; 28]; // 32 - 4 (magic) = 28
        r.read_exact(&mut buf)?;

        let u32_at = |i: usize| u32::from_le_bytes([buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]);

        Ok(Self {
            version: buf[0],
            flags: buf[1],
            // buf[2..4] is reserved
            doc_count: u32_at(4),
            term_count: u32_at(8),
            vocab_len: u32_at(12),
            postings_len: u32_at(16),
            all_docs_len: u32_at(20),
            corpus_fingerprint: u32_at(24),
        })
    }

    /// Reject versions and counts this reader does not handle.
    pub fn validate(&self) -> io::Result<()> {
        if self.version != VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Unsupported snapshot version {} (expected {})",
                    self.version, VERSION
                ),
            ));
        }
        if self.doc_count > MAX_DOC_COUNT {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Document count {} exceeds maximum {}",
                    self.doc_count, MAX_DOC_COUNT
                ),
            ));
        }
        if self.term_count > MAX_TERM_COUNT {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Term count {} exceeds maximum {}",
                    self.term_count, MAX_TERM_COUNT
                ),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// FOOTER (8 bytes)
// ============================================================================

/// Footer with CRC32 checksum and magic number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFooter {
    /// CRC32 checksum of header + all sections (everything before footer)
    pub crc32: u32,
}

impl SnapshotFooter {
    pub const SIZE: usize = 8; // 4 bytes CRC32 + 4 bytes magic

    pub fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.crc32.to_le_bytes())?;
        w.write_all(&FOOTER_MAGIC)?;
        Ok(())
    }

    /// Read the footer from the last 8 bytes of `bytes`.
    pub fn read(bytes: &[u8]) -> io::Result<Self> {
        if bytes.len() < Self::SIZE {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "File too short for footer",
            ));
        }

        let footer_start = bytes.len() - Self::SIZE;

        let magic = &bytes[footer_start + 4..];
        if magic != FOOTER_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid footer magic: expected TFIS, got {:?}", magic),
            ));
        }

        let crc32 = u32::from_le_bytes([
            bytes[footer_start],
            bytes[footer_start + 1],
            bytes[footer_start + 2],
            bytes[footer_start + 3],
        ]);

        Ok(Self { crc32 })
    }

    /// Compute CRC32 over the given bytes
    pub fn compute_crc32(data: &[u8]) -> u32 {
        let mut hasher = Crc32Hasher::new();
        hasher.update(data);
        hasher.finalize()
    }
}

// ============================================================================
// SECTION OFFSETS
// ============================================================================

/// Byte ranges of each section, derived from the header lengths.
///
/// Layout:
/// 1. HEADER         [32B]
/// 2. VOCABULARY     [vocab_len]     front-compressed tokens
/// 3. POSTINGS       [postings_len]  one delta+varint list per token
/// 4. ALL_DOCUMENTS  [all_docs_len]  delta+varint list
/// 5. FOOTER         [8B]            CRC32 + magic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionOffsets {
    pub vocabulary: (usize, usize),
    pub postings: (usize, usize),
    pub all_documents: (usize, usize),
    pub footer: (usize, usize),
}

impl SectionOffsets {
    pub fn from_header(h: &SnapshotHeader) -> Self {
        let mut pos = SnapshotHeader::SIZE;

        let vocab_start = pos;
        pos += h.vocab_len as usize;
        let vocab_end = pos;

        let postings_start = pos;
        pos += h.postings_len as usize;
        let postings_end = pos;

        let all_docs_start = pos;
        pos += h.all_docs_len as usize;
        let all_docs_end = pos;

        Self {
            vocabulary: (vocab_start, vocab_end),
            postings: (postings_start, postings_end),
            all_documents: (all_docs_start, all_docs_end),
            footer: (pos, pos + SnapshotFooter::SIZE),
        }
    }

    /// Expected content size (everything before footer)
    pub fn content_size(&self) -> usize {
        self.footer.0
    }

    /// Total file size including footer
    pub fn total_size(&self) -> usize {
        self.footer.1
    }

    #[inline]
    pub fn slice<'a>(&self, bytes: &'a [u8], section: (usize, usize)) -> Option<&'a [u8]> {
        bytes.get(section.0..section.1)
    }
}
