//! Strongly-typed value objects used by the search state.
//!
//! These wrappers enforce the pagination invariants (positive page numbers,
//! page sizes from the allowed set) so that once a value reaches the
//! controller it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page sizes offered by the pagination control.
pub const PAGE_SIZE_OPTIONS: [u32; 5] = [3, 10, 20, 50, 100];

/// Page size used when the query string does not carry a valid one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided page number is zero.
    #[error("page must be greater than zero")]
    NonPositivePage,
    /// Provided page size is not one of [`PAGE_SIZE_OPTIONS`].
    #[error("page size {0} is not allowed")]
    PageSizeNotAllowed(u32),
    /// Provided string could not be parsed as a number.
    #[error("invalid number: {0}")]
    InvalidNumber(String),
}

/// One-based page number.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: PageNumber = PageNumber(1);

    /// Creates a new page number ensuring it is greater than zero.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePage)
        }
    }

    /// Returns the raw `u32` backing this page number.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageNumber {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageNumber> for u32 {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}

impl FromStr for PageNumber {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| TypeConstraintError::InvalidNumber(s.to_string()))?;
        Self::new(value)
    }
}

/// Number of results shown per page, restricted to [`PAGE_SIZE_OPTIONS`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    /// Creates a new page size ensuring it is one of the allowed options.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if PAGE_SIZE_OPTIONS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::PageSizeNotAllowed(value))
        }
    }

    /// Returns the raw `u32` backing this page size.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// All page sizes a user may pick from.
    pub fn options() -> impl Iterator<Item = PageSize> {
        PAGE_SIZE_OPTIONS.into_iter().map(PageSize)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl Display for PageSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(value: PageSize) -> Self {
        value.0
    }
}

impl FromStr for PageSize {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u32>()
            .map_err(|_| TypeConstraintError::InvalidNumber(s.to_string()))?;
        Self::new(value)
    }
}
