//! Session module - owns the IC list and the selection
//!
//! The session is the single writer of placement state. The event loop holds
//! it by value and every command goes through `&mut Session`; renderers and
//! the file formats only read.

use crate::ic::Ic;
use crate::membership;
use crate::placement;
use crate::selection::Selection;
use crate::types::{CollisionPolicy, IcId, Location};

#[derive(Debug, Clone)]
pub struct Session {
    ics: Vec<Ic>,
    selection: Selection,
    policy: CollisionPolicy,
    /// Which outside IC "bring inside" picks, as an ordinal into the pool.
    pool_ordinal: usize,
}

impl Session {
    pub fn new(ics: Vec<Ic>) -> Self {
        Self::with_policy(ics, CollisionPolicy::default())
    }

    pub fn with_policy(ics: Vec<Ic>, policy: CollisionPolicy) -> Self {
        Self {
            ics,
            selection: Selection::new(),
            policy,
            pool_ordinal: 0,
        }
    }

    pub fn ics(&self) -> &[Ic] {
        &self.ics
    }

    pub fn ic(&self, id: IcId) -> Option<&Ic> {
        self.ics.get(id.index())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn pool_ordinal(&self) -> usize {
        self.pool_ordinal
    }

    /// Overwrite a location without validation (trusted project loads).
    ///
    /// Returns `false` for an unknown id.
    pub fn set_location(&mut self, id: IcId, location: Location) -> bool {
        let Some(ic) = self.ics.get_mut(id.index()) else {
            return false;
        };
        ic.location = location;
        if self.selection.attached() == Some(id) {
            self.selection.release();
        }
        self.clamp_pool_ordinal();
        true
    }

    pub fn move_cursor(&mut self, d_column: i16, d_row: i16) -> bool {
        self.selection
            .move_cursor(&mut self.ics, d_column, d_row, self.policy)
    }

    pub fn select_at_cursor(&mut self) -> Option<IcId> {
        self.selection.select_at_cursor(&self.ics)
    }

    pub fn release(&mut self) {
        self.selection.release();
    }

    /// Release when an IC is attached, otherwise try to attach one.
    ///
    /// Returns the attached IC after the call.
    pub fn toggle_attach(&mut self) -> Option<IcId> {
        if self.selection.is_selecting() {
            self.selection.release();
            None
        } else {
            self.select_at_cursor()
        }
    }

    /// The IC commands act on: the attached one, else the one under the cursor.
    pub fn target(&self) -> Option<IcId> {
        self.selection
            .attached()
            .or_else(|| self.selection.ic_under_cursor(&self.ics))
    }

    pub fn try_move(&mut self, id: IcId, d_column: i16, d_row: i16) -> bool {
        placement::try_move_with(&mut self.ics, id, d_column, d_row, self.policy)
    }

    pub fn rotate(&mut self, id: IcId) -> bool {
        placement::rotate_with(&mut self.ics, id, self.policy)
    }

    /// Send an IC to the outside pool, detaching it from the cursor if needed.
    pub fn put_outside(&mut self, id: IcId) -> bool {
        let Some(ic) = self.ics.get_mut(id.index()) else {
            return false;
        };
        membership::put_outside(ic);
        if self.selection.attached() == Some(id) {
            self.selection.release();
        }
        true
    }

    pub fn count_outside(&self) -> usize {
        membership::count_outside(&self.ics)
    }

    pub fn outside_ics(&self) -> impl Iterator<Item = (IcId, &Ic)> {
        membership::outside_ics(&self.ics)
    }

    /// Outside IC currently picked for insertion.
    pub fn pool_pick(&self) -> Option<IcId> {
        membership::nth_outside(&self.ics, self.pool_ordinal)
    }

    /// Step the pool pick by `delta`, wrapping around.
    pub fn cycle_pool(&mut self, delta: isize) -> Option<IcId> {
        let count = self.count_outside();
        if count == 0 {
            self.pool_ordinal = 0;
            return None;
        }
        let next = (self.pool_ordinal as isize + delta).rem_euclid(count as isize);
        self.pool_ordinal = next as usize;
        self.pool_pick()
    }

    /// Place the picked outside IC at the cursor cell.
    pub fn bring_inside(&mut self) -> Option<IcId> {
        let id = self.pool_pick()?;
        let ok = membership::move_outside_ic_in(
            &mut self.ics,
            self.pool_ordinal,
            self.selection.row(),
            self.selection.column(),
            self.policy,
        );
        if !ok {
            return None;
        }
        self.clamp_pool_ordinal();
        Some(id)
    }

    /// Same-lane pairs that overlap; empty unless a trusted load broke the rule.
    pub fn overlaps(&self) -> Vec<(IcId, IcId)> {
        placement::overlapping_pairs(&self.ics)
    }

    fn clamp_pool_ordinal(&mut self) {
        let count = self.count_outside();
        if self.pool_ordinal >= count {
            self.pool_ordinal = count.saturating_sub(1);
        }
    }
}
