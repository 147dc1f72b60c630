//! # hanoi-types: Core types for `Hanoi`
//!
//! This crate contains the value types shared across the workspace:
//! - Disks ([`Disk`]) and puzzle sizes ([`DiskCount`])
//! - Tower identifiers ([`PegId`])
//! - Requested relocations ([`Move`])
//! - Parse errors for user-supplied tokens ([`ParseError`])
//!
//! Everything here is `Copy`, has no I/O, and serializes with serde so the
//! CLI can emit move lists as JSON.

use std::{
    fmt::{Debug, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Disk - Copy (1-byte value)
// ============================================================================

/// A single disk of the puzzle.
///
/// A larger size is a physically larger disk. Sizes are unique within one
/// puzzle and run from 1 to N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Disk(u8);

impl Disk {
    /// Creates a disk of the given size.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Use [`Disk::try_new`] for untrusted input.
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "disk size must be positive");
        Self(size)
    }

    /// Creates a disk, rejecting the zero size.
    pub fn try_new(size: u8) -> Result<Self, ParseError> {
        if size == 0 {
            return Err(ParseError::ZeroDisk);
        }
        Ok(Self(size))
    }

    /// Returns the size of the disk.
    pub fn size(self) -> u8 {
        self.0
    }

    /// Width of the disk when drawn as a row of blocks.
    pub fn width(self) -> usize {
        usize::from(self.0) * 2 + 1
    }
}

impl Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Disk> for u8 {
    fn from(disk: Disk) -> Self {
        disk.0
    }
}

impl TryFrom<u8> for Disk {
    type Error = ParseError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        Self::try_new(size)
    }
}

// ============================================================================
// PegId - closed set of three towers
// ============================================================================

/// Identifier of one of the three towers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "String")]
pub enum PegId {
    #[default]
    A,
    B,
    C,
}

impl PegId {
    /// All pegs, left to right.
    pub const ALL: [PegId; 3] = [PegId::A, PegId::B, PegId::C];

    /// Position of the peg in [`PegId::ALL`].
    pub fn index(self) -> usize {
        match self {
            PegId::A => 0,
            PegId::B => 1,
            PegId::C => 2,
        }
    }

    /// Returns the single-letter label of the peg.
    pub fn label(self) -> char {
        match self {
            PegId::A => 'A',
            PegId::B => 'B',
            PegId::C => 'C',
        }
    }

    /// Returns the peg that is neither `a` nor `b`.
    ///
    /// Returns `None` when `a == b`, since there are then two candidates.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hanoi_types::PegId;
    /// assert_eq!(PegId::spare(PegId::A, PegId::C), Some(PegId::B));
    /// assert_eq!(PegId::spare(PegId::B, PegId::B), None);
    /// ```
    pub fn spare(a: PegId, b: PegId) -> Option<PegId> {
        if a == b {
            return None;
        }
        PegId::ALL.into_iter().find(|p| *p != a && *p != b)
    }
}

impl Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PegId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(PegId::A),
            "B" | "b" => Ok(PegId::B),
            "C" | "c" => Ok(PegId::C),
            other => Err(ParseError::UnknownPeg(other.to_string())),
        }
    }
}

impl TryFrom<String> for PegId {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ============================================================================
// DiskCount - validated puzzle size
// ============================================================================

/// Number of disks in a puzzle.
///
/// Bounded by [`DiskCount::MAX`] so that the optimal move count `2^n - 1`
/// always fits in a `u64`. Interactive front ends apply their own, much
/// smaller, ceiling for rendering width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DiskCount(u8);

impl DiskCount {
    /// Smallest playable puzzle.
    pub const MIN: u8 = 1;

    /// Largest puzzle whose move count fits in a `u64`.
    pub const MAX: u8 = 63;

    /// Creates a disk count, rejecting values outside `MIN..=MAX`.
    pub fn new(count: u8) -> Result<Self, ParseError> {
        if !(Self::MIN..=Self::MAX).contains(&count) {
            return Err(ParseError::DiskCountOutOfRange {
                count: u64::from(count),
                max: Self::MAX,
            });
        }
        Ok(Self(count))
    }

    /// Returns the count as a `u8`.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the count as a `usize` for indexing.
    pub fn as_usize(self) -> usize {
        usize::from(self.0)
    }

    /// The minimal number of moves to solve a puzzle of this size: `2^n - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use hanoi_types::DiskCount;
    /// assert_eq!(DiskCount::new(3).unwrap().optimal_moves(), 7);
    /// assert_eq!(DiskCount::new(63).unwrap().optimal_moves(), (1u64 << 63) - 1);
    /// ```
    pub fn optimal_moves(self) -> u64 {
        (1u64 << self.0) - 1
    }

    /// Disks of this puzzle from largest to smallest (bottom to top on the
    /// starting tower).
    pub fn disks_descending(self) -> impl Iterator<Item = Disk> {
        (1..=self.0).rev().map(Disk)
    }
}

impl Display for DiskCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for DiskCount {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DiskCount> for u8 {
    fn from(count: DiskCount) -> Self {
        count.0
    }
}

impl FromStr for DiskCount {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: u64 = s
            .parse()
            .map_err(|_| ParseError::InvalidNumber(s.to_string()))?;
        let count = u8::try_from(value).map_err(|_| ParseError::DiskCountOutOfRange {
            count: value,
            max: Self::MAX,
        })?;
        Self::new(count)
    }
}

// ============================================================================
// Move - a requested relocation of a top disk
// ============================================================================

/// A request to move the top disk of `from` onto `to`.
///
/// A `Move` says nothing about legality; the game state decides that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: PegId,
    pub to: PegId,
}

impl Move {
    pub fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    /// Parses two whitespace-separated peg names, e.g. `"a c"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [from, to] => Ok(Move::new(from.parse()?, to.parse()?)),
            _ => Err(ParseError::MalformedMove(s.trim().to_string())),
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Errors from parsing or validating user-supplied values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown peg '{0}', expected A, B or C")]
    UnknownPeg(String),

    #[error("expected two pegs like 'A C', got '{0}'")]
    MalformedMove(String),

    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("disk count {count} is out of range (1-{max})")]
    DiskCountOutOfRange { count: u64, max: u8 },

    #[error("disk size must be positive")]
    ZeroDisk,
}
