//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::Id;

/// Scalar persisted under an id.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StorageValue {
    /// Integer (also used for booleans).
    Int(i32),
    /// Float.
    Float(f32),
    /// Opaque handle, such as an index into an arena owned by the caller.
    Handle(usize),
}

#[derive(Copy, Clone, Debug)]
struct StorageEntry {
    key: Id,
    value: StorageValue,
}

/// Sorted id → scalar map backing per-window and global persistent widget state.
///
/// Entries stay ordered by key so lookups are a binary search; insertion shifts the tail.
/// References handed out by the `*_mut` accessors are invalidated by the next insertion,
/// which the borrow checker enforces.
#[derive(Default, Clone, Debug)]
pub struct Storage {
    entries: Vec<StorageEntry>,
}

impl Storage {
    /// Creates an empty storage.
    pub fn new() -> Self { Self { entries: Vec::new() } }

    /// Number of stored entries.
    pub fn len(&self) -> usize { self.entries.len() }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Removes every entry, keeping the allocation.
    pub fn clear(&mut self) { self.entries.clear() }

    /// Index of the first entry whose key is not less than `key`.
    pub fn lower_bound(&self, key: Id) -> usize { self.entries.partition_point(|e| e.key < key) }

    /// Raw value stored under `key`.
    pub fn get(&self, key: Id) -> Option<StorageValue> {
        let idx = self.lower_bound(key);
        match self.entries.get(idx) {
            Some(e) if e.key == key => Some(e.value),
            _ => None,
        }
    }

    /// Integer under `key`, or `default` when missing or of another type.
    pub fn get_int(&self, key: Id, default: i32) -> i32 {
        match self.get(key) {
            Some(StorageValue::Int(v)) => v,
            _ => default,
        }
    }

    /// Float under `key`, or `default` when missing or of another type.
    pub fn get_float(&self, key: Id, default: f32) -> f32 {
        match self.get(key) {
            Some(StorageValue::Float(v)) => v,
            _ => default,
        }
    }

    /// Boolean under `key`, stored as an integer.
    pub fn get_bool(&self, key: Id, default: bool) -> bool { self.get_int(key, default as i32) != 0 }

    /// Handle under `key`.
    pub fn get_handle(&self, key: Id) -> Option<usize> {
        match self.get(key) {
            Some(StorageValue::Handle(v)) => Some(v),
            _ => None,
        }
    }

    /// Inserts or overwrites `key`.
    pub fn set(&mut self, key: Id, value: StorageValue) {
        let idx = self.lower_bound(key);
        match self.entries.get_mut(idx) {
            Some(e) if e.key == key => e.value = value,
            _ => self.entries.insert(idx, StorageEntry { key, value }),
        }
    }

    /// Stores an integer.
    pub fn set_int(&mut self, key: Id, value: i32) { self.set(key, StorageValue::Int(value)) }

    /// Stores a float.
    pub fn set_float(&mut self, key: Id, value: f32) { self.set(key, StorageValue::Float(value)) }

    /// Stores a boolean.
    pub fn set_bool(&mut self, key: Id, value: bool) { self.set_int(key, value as i32) }

    /// Stores a handle.
    pub fn set_handle(&mut self, key: Id, value: usize) { self.set(key, StorageValue::Handle(value)) }

    fn value_mut(&mut self, key: Id, default: StorageValue) -> &mut StorageValue {
        let idx = self.lower_bound(key);
        let found = matches!(self.entries.get(idx), Some(e) if e.key == key);
        if !found {
            self.entries.insert(idx, StorageEntry { key, value: default });
        }
        let value = &mut self.entries[idx].value;
        if std::mem::discriminant(value) != std::mem::discriminant(&default) {
            *value = default;
        }
        value
    }

    /// Integer slot under `key`, inserting `default` if missing. A slot of another type is reset.
    pub fn int_mut(&mut self, key: Id, default: i32) -> &mut i32 {
        match self.value_mut(key, StorageValue::Int(default)) {
            StorageValue::Int(v) => v,
            _ => unreachable!("slot was normalised to an integer"),
        }
    }

    /// Float slot under `key`, inserting `default` if missing. A slot of another type is reset.
    pub fn float_mut(&mut self, key: Id, default: f32) -> &mut f32 {
        match self.value_mut(key, StorageValue::Float(default)) {
            StorageValue::Float(v) => v,
            _ => unreachable!("slot was normalised to a float"),
        }
    }

    /// Iterates over keys in storage order.
    pub fn keys(&self) -> impl Iterator<Item = Id> + '_ { self.entries.iter().map(|e| e.key) }
}
