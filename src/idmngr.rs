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
/// Stable 32-bit widget or window identifier. `Id::NONE` means "nothing".
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Id(u32);

impl Id {
    /// The empty id.
    pub const NONE: Id = Id(0);

    /// Wraps a raw 32-bit value.
    pub fn new(raw: u32) -> Self { Self(raw) }

    /// Returns the raw 32-bit value.
    pub fn raw(self) -> u32 { self.0 }

    /// Returns `true` for [`Id::NONE`].
    pub fn is_none(self) -> bool { self.0 == 0 }

    /// Derives a sibling id, used for the synthetic parts of a window (grips, scrollbars).
    pub fn offset(self, n: u32) -> Id { Id(self.0.wrapping_add(n)) }
}

const fn build_crc32_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut c = i as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { 0xEDB8_8320 ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[i] = c;
        i += 1;
    }
    table
}

static CRC32_TABLE: [u32; 256] = build_crc32_table();

#[inline]
fn crc32_step(crc: u32, byte: u8) -> u32 { (crc >> 8) ^ CRC32_TABLE[((crc & 0xFF) as u8 ^ byte) as usize] }

/// CRC32 of `data` chained from `seed`.
pub fn hash_data(data: &[u8], seed: u32) -> Id {
    let mut crc = !seed;
    for &b in data {
        crc = crc32_step(crc, b);
    }
    Id(!crc)
}

/// CRC32 of `text` chained from `seed`. Every `##` marker restarts the hash from the seed,
/// so `"Save##file"` and `"Load##file"` share an id while showing different labels.
pub fn hash_str(text: &str, seed: u32) -> Id {
    let seed = !seed;
    let mut crc = seed;
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && bytes.get(i + 1) == Some(&b'#') {
            crc = seed;
        }
        crc = crc32_step(crc, b);
    }
    Id(!crc)
}

/// Scope stack used to disambiguate identical labels living in different containers.
#[derive(Default, Clone, Debug)]
pub struct IdStack {
    stack: Vec<Id>,
}

impl IdStack {
    /// Creates an empty stack.
    pub fn new() -> Self { Self { stack: Vec::new() } }

    /// Number of pushed scopes.
    pub fn len(&self) -> usize { self.stack.len() }

    /// Returns `true` if no scope is pushed.
    pub fn is_empty(&self) -> bool { self.stack.is_empty() }

    /// Innermost scope, or [`Id::NONE`] at the root.
    pub fn top(&self) -> Id { self.stack.last().copied().unwrap_or(Id::NONE) }

    /// Enters a scope.
    pub fn push(&mut self, id: Id) { self.stack.push(id) }

    /// Leaves the innermost scope. Popping an empty stack is a caller bug.
    pub fn pop(&mut self) -> Id {
        match self.stack.pop() {
            Some(id) => id,
            None => panic!("id stack underflow: pop without matching push"),
        }
    }

    /// Id of `label` inside the current scope.
    pub fn id_from_str(&self, label: &str) -> Id { hash_str(label, self.top().raw()) }

    /// Id of an integer inside the current scope.
    pub fn id_from_int(&self, value: i32) -> Id { hash_data(&value.to_le_bytes(), self.top().raw()) }

    pub(crate) fn clear(&mut self) { self.stack.clear() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_crc32() {
        assert_eq!(hash_str("123456789", 0).raw(), 0xCBF4_3926);
        assert_eq!(hash_data(b"123456789", 0).raw(), 0xCBF4_3926);
    }

    #[test]
    fn same_label_same_scope_is_stable() {
        let a = hash_str("Options", 42);
        let b = hash_str("Options", 42);
        assert_eq!(a, b);
        assert_ne!(a, hash_str("Options", 43));
    }

    #[test]
    fn double_hash_restarts_from_seed() {
        let seed = 7;
        assert_eq!(hash_str("Save##file", seed), hash_str("##file", seed));
        assert_eq!(hash_str("Save##file", seed), hash_str("Load##file", seed));
        assert_ne!(hash_str("Save##file", seed), hash_str("Save##dir", seed));
        assert_ne!(hash_str("Save#file", seed), hash_str("Load#file", seed));
    }

    #[test]
    fn stack_scopes_labels() {
        let mut stack = IdStack::new();
        let root = stack.id_from_str("OK");
        stack.push(hash_str("Window A", 0));
        let in_a = stack.id_from_str("OK");
        stack.pop();
        stack.push(hash_str("Window B", 0));
        let in_b = stack.id_from_str("OK");
        stack.pop();
        assert_ne!(root, in_a);
        assert_ne!(in_a, in_b);
        assert!(stack.is_empty());
    }

    #[test]
    #[should_panic]
    fn pop_on_empty_stack_panics() {
        let mut stack = IdStack::new();
        stack.pop();
    }

    #[test]
    fn offsets_wrap() {
        assert_eq!(Id::new(u32::MAX).offset(2), Id::new(1));
    }
}
