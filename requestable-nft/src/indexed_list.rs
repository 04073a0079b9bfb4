use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;

use crate::error::ContractError;

/// Ordered sequence of token ids paired with a reverse position map.
///
/// Both the global enumeration and each owner's enumeration are stored as one
/// of these. Append and removal are O(1): removal overwrites the vacated slot
/// with the last element and truncates, so no tail shifting ever happens.
///
/// Invariant: `positions[items[i]] == i` for every valid `i`, and every id in
/// `items` appears exactly once.
#[cw_serde]
#[derive(Default)]
pub struct IndexedList {
    items: Vec<u64>,
    positions: BTreeMap<u64, u64>,
}

impl IndexedList {
    /// Add `id` at the end of the sequence.
    ///
    /// A duplicate means the enumeration has drifted from the ownership table,
    /// so it is rejected rather than silently re-inserted.
    pub fn append(&mut self, id: u64) -> Result<(), ContractError> {
        if self.positions.contains_key(&id) {
            return Err(ContractError::DuplicateEntry { token_id: id });
        }
        self.positions.insert(id, self.items.len() as u64);
        self.items.push(id);
        Ok(())
    }

    /// Remove `id` by swapping the last element into its slot.
    ///
    /// When `id` itself is the last (or only) element nothing is moved; the
    /// sequence just shrinks and the position entry is dropped.
    pub fn swap_remove(&mut self, id: u64) -> Result<(), ContractError> {
        let pos = self
            .positions
            .remove(&id)
            .ok_or(ContractError::TokenNotFound { token_id: id })? as usize;
        if pos >= self.items.len() {
            // positions and items out of sync; cannot happen through this API
            return Err(ContractError::TokenNotFound { token_id: id });
        }
        self.items.swap_remove(pos);
        if let Some(&moved) = self.items.get(pos) {
            self.positions.insert(moved, pos as u64);
        }
        Ok(())
    }

    pub fn index_of(&self, id: u64) -> Option<u64> {
        self.positions.get(&id).copied()
    }

    pub fn at(&self, pos: u64) -> Option<u64> {
        self.items.get(pos as usize).copied()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn len(&self) -> u64 {
        self.items.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.items.iter().copied()
    }
}
