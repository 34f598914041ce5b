//
// function.rs
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

use fibbench_error::{FibError, Result};
use fiblib::Fibonacci;

/// A fibonacci implementation with the name it is reported under
#[derive(Debug, Clone)]
pub struct NamedFunction<F> {
    name: String,
    function: F,
}

impl<F: Fibonacci> NamedFunction<F> {
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn call(&self, n: u8) -> u64 {
        self.function.compute(n)
    }
}

/// The read-only ground truth every function is checked against
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable<'a> {
    values: &'a [u64],
}

impl<'a> ReferenceTable<'a> {
    pub fn new(values: &'a [u64]) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the reference value at `n` or `IndexOutOfRange`
    pub fn expected(&self, n: u8) -> Result<u64> {
        self.values
            .get(n as usize)
            .copied()
            .ok_or(FibError::IndexOutOfRange {
                index: n as usize,
                len: self.values.len(),
            })
    }

    /// Reduces an arbitrary random byte to a valid index
    pub fn reduce_index(&self, raw: u8) -> Result<u8> {
        if self.values.is_empty() {
            return Err(FibError::IndexOutOfRange {
                index: raw as usize,
                len: 0,
            });
        }
        Ok((raw as usize % self.values.len()) as u8)
    }
}

/// Names of the functions that disagreed with the reference table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureSet {
    names: Vec<String>,
}

impl FailureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// All names joined with ", "
    pub fn joined(&self) -> String {
        self.names.join(", ")
    }
}
