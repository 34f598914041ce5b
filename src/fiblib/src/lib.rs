//
// lib.rs
// Copyright (C) 2026 fibbench authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

/// F(93) is the last fibonacci number that fits in a u64
pub const FIB_TABLE_LEN: usize = 94;

/// F(0) ..= F(93), built at compile time
pub const LOOKUP_TABLE: [u64; FIB_TABLE_LEN] = build_lookup_table();

const fn build_lookup_table() -> [u64; FIB_TABLE_LEN] {
    let mut table = [0u64; FIB_TABLE_LEN];
    table[1] = 1;
    let mut i = 2;
    while i < FIB_TABLE_LEN {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
}

/// Computes the n-th fibonacci number.
///
/// Implementations may assume `n < FIB_TABLE_LEN`.
pub trait Fibonacci {
    fn compute(&self, n: u8) -> u64;
}

/// The textbook doubly recursive definition, exponential in `n`
#[derive(Debug, Clone, Copy, Default)]
pub struct Recursive;

impl Fibonacci for Recursive {
    fn compute(&self, n: u8) -> u64 {
        match n {
            0 => 0,
            1 => 1,
            n => self.compute(n - 1) + self.compute(n - 2),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Iterative;

impl Fibonacci for Iterative {
    #[inline]
    fn compute(&self, n: u8) -> u64 {
        if n == 0 {
            return 0;
        }
        let mut a = 0u64;
        let mut b = 1u64;
        // stop at F(n) so F(93) never computes the overflowing F(94)
        for _ in 1..n {
            let c = a + b;
            a = b;
            b = c;
        }
        b
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Lookup;

impl Fibonacci for Lookup {
    #[inline]
    fn compute(&self, n: u8) -> u64 {
        LOOKUP_TABLE[n as usize]
    }
}

/// The variants shipped with fiblib, dispatched with a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Recursive,
    Iterative,
    Lookup,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Recursive, Variant::Iterative, Variant::Lookup];

    pub fn name(&self) -> &'static str {
        match self {
            Variant::Recursive => "get_single_recursive",
            Variant::Iterative => "get_single_iterative",
            Variant::Lookup => "get_single_lookup",
        }
    }
}

impl Fibonacci for Variant {
    fn compute(&self, n: u8) -> u64 {
        match self {
            Variant::Recursive => Recursive.compute(n),
            Variant::Iterative => Iterative.compute(n),
            Variant::Lookup => Lookup.compute(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_lookup_table_head() {
        assert_eq!(
            &[0u64, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55],
            &LOOKUP_TABLE[..11]
        );
    }

    #[test]
    fn test_lookup_table_last() {
        assert_eq!(12200160415121876738, LOOKUP_TABLE[FIB_TABLE_LEN - 1]);
    }

    #[test_case(0, 0 ; "zero")]
    #[test_case(1, 1 ; "one")]
    #[test_case(2, 1 ; "two")]
    #[test_case(10, 55 ; "ten")]
    #[test_case(20, 6765 ; "twenty")]
    fn test_recursive(n: u8, expected: u64) {
        assert_eq!(expected, Recursive.compute(n));
    }

    #[test_case(0, 0 ; "zero")]
    #[test_case(1, 1 ; "one")]
    #[test_case(10, 55 ; "ten")]
    #[test_case(93, 12200160415121876738 ; "largest")]
    fn test_iterative(n: u8, expected: u64) {
        assert_eq!(expected, Iterative.compute(n));
    }

    #[test]
    fn test_variant_names_are_unique() {
        let names: Vec<&str> = Variant::ALL.iter().map(|v| v.name()).collect();
        for (i, name) in names.iter().enumerate() {
            assert!(!names[i + 1..].contains(name));
        }
    }

    #[test]
    fn test_variant_dispatch() {
        for variant in Variant::ALL {
            assert_eq!(55, variant.compute(10));
        }
    }
}
