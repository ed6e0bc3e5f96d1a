//! Pack drawing.
//!
//! A draw takes `pack_size` common cards (repeats allowed) and then rolls
//! once against the rare chance for one extra rare card:
//!
//! 1. `draw_range(common_count, pack_size)` picks common positions
//! 2. `draw_single(BASIS_POINTS)` rolls `r`
//! 3. if `r < rare_chance`, `draw_single(rare_count)` picks a rare position
//!
//! A rare chance of `BASIS_POINTS` always yields a rare card.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{CardCatalog, CardId, PoolKind};
use crate::core::{AlbumError, AlbumResult, DrawContext, Identity, RandomSource, BASIS_POINTS};

/// Outcome of drawing one pack.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    /// Set by the album once the draw is attributed to a purchase.
    pub buyer: Option<Identity>,

    /// Drawn common card ids, one per card in the pack.
    pub common_cards: SmallVec<[CardId; 8]>,

    /// Rare card id, if the rare roll succeeded.
    pub rare_card_id: Option<CardId>,
}

impl DrawResult {
    /// Number of common cards drawn.
    #[must_use]
    pub fn pack_size(&self) -> usize {
        self.common_cards.len()
    }

    /// How many times `id` appears among the common cards.
    #[must_use]
    pub fn common_occurrences(&self, id: CardId) -> usize {
        self.common_cards.iter().filter(|&&c| c == id).count()
    }
}

/// Stateless pack drawing over a catalog and a random source.
#[derive(Clone, Copy, Debug, Default)]
pub struct PackDrawEngine;

impl PackDrawEngine {
    /// Draw one pack.
    ///
    /// Fails with `InvalidCatalog` when a rare draw is possible but the rare
    /// pool is empty, and propagates `InsufficientEntropy` from the source
    /// (e.g. an empty common pool).
    pub fn draw(
        catalog: &CardCatalog,
        pack_size: u32,
        rare_chance: u32,
        rng: &mut dyn RandomSource,
        ctx: &DrawContext,
    ) -> AlbumResult<DrawResult> {
        if rare_chance > 0 && catalog.rare_count() == 0 {
            return Err(AlbumError::InvalidCatalog(
                "rare card chance is nonzero but the rare pool is empty".into(),
            ));
        }

        let common_bound = pool_bound(catalog, PoolKind::Common)?;
        let positions = rng.draw_range(ctx, common_bound, pack_size as usize)?;
        if positions.len() != pack_size as usize {
            return Err(AlbumError::InvalidCatalog(format!(
                "random source returned {} positions for a pack of {}",
                positions.len(),
                pack_size
            )));
        }

        let common_cards = positions
            .into_iter()
            .map(|position| card_at(catalog, PoolKind::Common, position))
            .collect::<AlbumResult<SmallVec<[CardId; 8]>>>()?;

        let roll = rng.draw_single(ctx, BASIS_POINTS)?;
        let rare_card_id = if roll < rare_chance {
            let rare_bound = pool_bound(catalog, PoolKind::Rare)?;
            let position = rng.draw_single(ctx, rare_bound)?;
            Some(card_at(catalog, PoolKind::Rare, position)?)
        } else {
            None
        };

        debug!(
            caller = %ctx.caller,
            block = ctx.block.number,
            pack_size,
            roll,
            rare = rare_card_id.is_some(),
            "pack drawn"
        );

        Ok(DrawResult {
            buyer: None,
            common_cards,
            rare_card_id,
        })
    }
}

fn pool_bound(catalog: &CardCatalog, kind: PoolKind) -> AlbumResult<u32> {
    u32::try_from(catalog.count(kind))
        .map_err(|_| AlbumError::InvalidCatalog(format!("{kind} pool is too large to draw from")))
}

fn card_at(catalog: &CardCatalog, kind: PoolKind, position: u32) -> AlbumResult<CardId> {
    catalog
        .pool(kind)
        .get(position as usize)
        .map(|card| card.id)
        .ok_or_else(|| {
            AlbumError::InvalidCatalog(format!(
                "random source returned {kind} position {position} outside the pool"
            ))
        })
}
