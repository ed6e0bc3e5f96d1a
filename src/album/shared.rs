//! Thread-safe album handle.
//!
//! Concurrent buyers go through a `SharedAlbum`. Each `open_pack` holds the
//! album lock for the whole transaction, so purchases serialize and credits
//! to the same ledger key are never lost.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::draw::DrawResult;
use super::instance::AlbumInstance;
use crate::cards::CardId;
use crate::core::{AlbumResult, Amount, BlockContext, Identity};

/// Cloneable, lock-protected handle to one album.
#[derive(Clone, Debug)]
pub struct SharedAlbum {
    inner: Arc<Mutex<AlbumInstance>>,
}

impl SharedAlbum {
    /// Wrap an album for shared use.
    #[must_use]
    pub fn new(album: AlbumInstance) -> Self {
        Self {
            inner: Arc::new(Mutex::new(album)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, AlbumInstance> {
        // Transactions commit at the end, so a panicked holder left no partial state.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`AlbumInstance::open_pack`].
    pub fn open_pack(&self, buyer: Identity, pack_size: u32, payment: Amount) -> AlbumResult<DrawResult> {
        self.lock().open_pack(buyer, pack_size, payment)
    }

    /// See [`AlbumInstance::owned_cards_count`].
    #[must_use]
    pub fn owned_cards_count(&self, owner: Identity, card_id: CardId) -> u64 {
        self.lock().owned_cards_count(owner, card_id)
    }

    /// See [`AlbumInstance::prize_pool`].
    #[must_use]
    pub fn prize_pool(&self) -> Amount {
        self.lock().prize_pool()
    }

    /// See [`AlbumInstance::set_block`].
    pub fn set_block(&self, block: BlockContext) {
        self.lock().set_block(block);
    }

    /// Run `f` with exclusive access to the album.
    pub fn with<T>(&self, f: impl FnOnce(&mut AlbumInstance) -> T) -> T {
        f(&mut self.lock())
    }
}
