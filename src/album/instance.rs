//! Album orchestration.
//!
//! `AlbumInstance` ties a catalog, a config, and a random source to the
//! mutable album state: the ownership ledger, the prize pool, accrued fees,
//! and the event log.
//!
//! ## Purchase flow
//!
//! `open_pack` runs as one transaction:
//! validate size, validate payment, split fee, draw, credit, emit.
//! Every fallible step runs before anything is committed, so a rejected
//! purchase leaves the ledger, the pool, the fees, and the log untouched.

use tracing::{info, warn};

use super::draw::{DrawResult, PackDrawEngine};
use super::events::{AlbumEvent, EventLog};
use super::fee::FeeSplitter;
use super::ledger::OwnershipLedger;
use crate::cards::{CardCatalog, CardDefinition, CardId, PoolKind};
use crate::core::{
    AlbumConfig, AlbumError, AlbumResult, Amount, BlockContext, DrawContext, Identity,
    RandomSource,
};

/// One configured album.
pub struct AlbumInstance {
    config: AlbumConfig,
    catalog: CardCatalog,
    rng: Box<dyn RandomSource>,
    block: BlockContext,
    ledger: OwnershipLedger,
    prize_pool: Amount,
    accrued_fees: Amount,
    events: EventLog,
}

impl AlbumInstance {
    /// Create an album.
    ///
    /// Fails with `InvalidConfig` for out-of-range settings, and with
    /// `InvalidCatalog` when packs could never be drawn: an empty common
    /// pool, or a nonzero rare chance with an empty rare pool.
    pub fn new(
        config: AlbumConfig,
        catalog: CardCatalog,
        rng: Box<dyn RandomSource>,
    ) -> AlbumResult<Self> {
        config.validate()?;

        if catalog.common_count() == 0 {
            return Err(AlbumError::InvalidCatalog("common pool is empty".into()));
        }
        if config.rare_card_chance > 0 && catalog.rare_count() == 0 {
            return Err(AlbumError::InvalidCatalog(
                "rare card chance is nonzero but the rare pool is empty".into(),
            ));
        }

        Ok(Self {
            config,
            catalog,
            rng,
            block: BlockContext::default(),
            ledger: OwnershipLedger::new(),
            prize_pool: 0,
            accrued_fees: 0,
            events: EventLog::new(),
        })
    }

    // === Purchases ===

    /// Buy and open a pack of `pack_size` cards for `buyer`.
    ///
    /// `payment` must equal `price_per_card * pack_size` exactly.
    pub fn open_pack(
        &mut self,
        buyer: Identity,
        pack_size: u32,
        payment: Amount,
    ) -> AlbumResult<DrawResult> {
        if !self.config.accepts_pack_size(pack_size) {
            warn!(buyer = %buyer, pack_size, "rejected pack: unsupported size");
            return Err(AlbumError::UnsupportedPackSize {
                requested: pack_size,
                min: self.config.min_pack_size,
                max: self.config.max_pack_size,
            });
        }

        let expected = self.config.price_for(pack_size);
        if expected != Some(payment) {
            warn!(buyer = %buyer, pack_size, payment, ?expected, "rejected pack: payment mismatch");
            return Err(AlbumError::InsufficientPayment {
                expected,
                provided: payment,
            });
        }

        let split = FeeSplitter::split(payment, self.config.fee_rate);
        let prize_pool = self
            .prize_pool
            .checked_add(split.pool_amount)
            .ok_or(AlbumError::BalanceOverflow("prize pool"))?;
        let accrued_fees = self
            .accrued_fees
            .checked_add(split.fee_amount)
            .ok_or(AlbumError::BalanceOverflow("accrued fees"))?;

        let ctx = DrawContext::new(buyer, self.block);
        let mut result = PackDrawEngine::draw(
            &self.catalog,
            pack_size,
            self.config.rare_card_chance,
            self.rng.as_mut(),
            &ctx,
        )?;
        result.buyer = Some(buyer);

        let mut ledger = self.ledger.clone();
        for &card_id in &result.common_cards {
            ledger.credit(buyer, card_id, PoolKind::Common, 1);
        }
        if let Some(card_id) = result.rare_card_id {
            ledger.credit(buyer, card_id, PoolKind::Rare, 1);
        }

        // Commit
        self.ledger = ledger;
        self.prize_pool = prize_pool;
        self.accrued_fees = accrued_fees;
        if let Some(card_id) = result.rare_card_id {
            self.events.push(AlbumEvent::RareCardDrawn { buyer, card_id });
        }
        self.events.push(AlbumEvent::PackOpened {
            buyer,
            common_cards: result.common_cards.to_vec(),
        });

        info!(
            buyer = %buyer,
            pack_size,
            payment,
            fee = split.fee_amount,
            pool = split.pool_amount,
            rare = ?result.rare_card_id.map(CardId::raw),
            "pack opened"
        );

        Ok(result)
    }

    /// Move the album to a new logical block.
    pub fn set_block(&mut self, block: BlockContext) {
        self.block = block;
    }

    /// The block purchases currently execute in.
    #[must_use]
    pub fn block(&self) -> BlockContext {
        self.block
    }

    // === Ownership ===

    /// Copies of common card `card_id` an owner holds.
    ///
    /// Rare cards live in a separate id namespace; query them with
    /// `owned_count(.., PoolKind::Rare)`.
    #[must_use]
    pub fn owned_cards_count(&self, owner: Identity, card_id: CardId) -> u64 {
        self.ledger.count_of(owner, card_id, PoolKind::Common)
    }

    /// Copies of `card_id` an owner holds within one pool.
    #[must_use]
    pub fn owned_count(&self, owner: Identity, card_id: CardId, pool: PoolKind) -> u64 {
        self.ledger.count_of(owner, card_id, pool)
    }

    /// The ownership ledger.
    #[must_use]
    pub fn ledger(&self) -> &OwnershipLedger {
        &self.ledger
    }

    // === Catalog ===

    /// Common card ids, in catalog order.
    #[must_use]
    pub fn available_common_cards(&self) -> Vec<CardId> {
        self.catalog.ids(PoolKind::Common).collect()
    }

    /// Rare card ids, in catalog order.
    #[must_use]
    pub fn available_rare_cards(&self) -> Vec<CardId> {
        self.catalog.ids(PoolKind::Rare).collect()
    }

    /// Look up a card definition.
    #[must_use]
    pub fn card(&self, card_id: CardId, pool: PoolKind) -> Option<&CardDefinition> {
        self.catalog.get(card_id, pool)
    }

    /// The album's card catalog.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    // === Balances and settings ===

    /// Accumulated payments minus fees.
    #[must_use]
    pub fn prize_pool(&self) -> Amount {
        self.prize_pool
    }

    /// Fees routed to the fee recipient so far.
    #[must_use]
    pub fn accrued_fees(&self) -> Amount {
        self.accrued_fees
    }

    /// Album creator.
    #[must_use]
    pub fn creator(&self) -> Identity {
        self.config.creator
    }

    /// Receives the fee share of every payment.
    #[must_use]
    pub fn fee_recipient(&self) -> Identity {
        self.config.fee_recipient
    }

    /// Price of a single card.
    #[must_use]
    pub fn price_per_card(&self) -> Amount {
        self.config.price_per_card
    }

    /// Exact price of a pack, or `None` on overflow.
    #[must_use]
    pub fn price_for(&self, pack_size: u32) -> Option<Amount> {
        self.config.price_for(pack_size)
    }

    /// Allowed pack sizes, inclusive.
    #[must_use]
    pub fn pack_size_range(&self) -> std::ops::RangeInclusive<u32> {
        self.config.min_pack_size..=self.config.max_pack_size
    }

    /// Construction config.
    #[must_use]
    pub fn config(&self) -> &AlbumConfig {
        &self.config
    }

    // === Events ===

    /// Events emitted so far, in order.
    #[must_use]
    pub fn events(&self) -> &[AlbumEvent] {
        self.events.events()
    }

    /// Remove and return all emitted events.
    pub fn take_events(&mut self) -> Vec<AlbumEvent> {
        self.events.take()
    }
}

impl std::fmt::Debug for AlbumInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlbumInstance")
            .field("config", &self.config)
            .field("common_cards", &self.catalog.common_count())
            .field("rare_cards", &self.catalog.rare_count())
            .field("block", &self.block)
            .field("prize_pool", &self.prize_pool)
            .field("accrued_fees", &self.accrued_fees)
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}
