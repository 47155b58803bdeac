//! Per-key version history.
//!
//! A `HistoryCursor` is a lazy, forward-only, finite sequence of the
//! versions a key went through, oldest first. It cannot be rewound or
//! cloned; asking the store again yields a fresh cursor. Once it returns
//! `None` or an error it stays exhausted.

use core::iter::FusedIterator;

use crate::error::StoreError;

/// One historical version of a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyModification {
    /// Identifier of the transaction that wrote this version.
    pub write_id: String,
    /// Value written.
    pub value: Vec<u8>,
}

impl KeyModification {
    pub fn new(write_id: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            write_id: write_id.into(),
            value: value.into(),
        }
    }
}

/// Lazy cursor over the history of one key.
pub struct HistoryCursor<'a> {
    inner: Box<dyn Iterator<Item = Result<KeyModification, StoreError>> + 'a>,
    exhausted: bool,
}

impl<'a> HistoryCursor<'a> {
    /// Wrap a backend iterator.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = Result<KeyModification, StoreError>> + 'a,
    {
        Self {
            inner: Box::new(iter),
            exhausted: false,
        }
    }

    /// A cursor that yields nothing.
    pub fn empty() -> Self {
        Self::new(core::iter::empty())
    }

    /// Returns true once the cursor has yielded its last element.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}

impl Iterator for HistoryCursor<'_> {
    type Item = Result<KeyModification, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        match self.inner.next() {
            Some(Ok(entry)) => Some(Ok(entry)),
            Some(Err(err)) => {
                self.exhausted = true;
                Some(Err(err))
            }
            None => {
                self.exhausted = true;
                None
            }
        }
    }
}

impl FusedIterator for HistoryCursor<'_> {}

impl core::fmt::Debug for HistoryCursor<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HistoryCursor")
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
