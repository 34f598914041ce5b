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
use thiserror::Error;

/// Failures that stop a run. A function returning the wrong value or running
/// past the threshold is reported on the console instead.
#[derive(Debug, Error)]
pub enum FibError {
    #[error("index {index} is out of range for a reference table of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid threshold {0}")]
    InvalidThreshold(String),
    #[error("the input closed before an answer was given")]
    PromptClosed,
    #[error("fail to access the console with error {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FibError>;
