/*
 * FreeRTOS Kernel <DEVELOPMENT BRANCH>
 * Copyright (C) 2021 Amazon.com, Inc. or its affiliates. All Rights Reserved.
 *
 * SPDX-License-Identifier: MIT
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of
 * this software and associated documentation files (the "Software"), to deal in
 * the Software without restriction, including without limitation the rights to
 * use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
 * the Software, and to permit persons to whom the Software is furnished to do so,
 * subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
 * FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
 * COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
 * IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
 * CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
 *
 * https://www.FreeRTOS.org
 * https://github.com/FreeRTOS
 *
 * [AMENDMENT] This file is part of FreeRusTOS, a Rust port of the FreeRTOS kernel.
 * This crate carries the kernel list on its own so ports, schedulers and
 * test harnesses can depend on it without pulling in the rest of the kernel.
 */

//! # FreeRusTOS List - the FreeRTOS kernel list in Rust
//!
//! An intrusive, doubly-linked, sentinel-terminated list ordered by a numeric
//! item value. It is what the scheduler keeps ready tasks, delayed tasks,
//! event waiters and timers in. See [`kernel::list`].
//!
//! The list performs no locking and no allocation. Callers provide the items'
//! storage and serialise every mutation (critical section, or scheduler
//! suspended).
//!
//! ## Features
//!
//! - `arch-32bit` - 32-bit architecture types (default)
//! - `arch-64bit` - 64-bit architecture types
//! - `tick-16bit` - 16-bit item values
//! - `tick-32bit` - 32-bit item values (default)
//! - `tick-64bit` - 64-bit item values
//! - `mini-list-item` - Reduced end marker item (default)
//! - `list-data-integrity-check` - Enable list data integrity checks
//! - `defmt` - Emit trace hooks through defmt
//! - `std` - Enable std for testing

#![no_std]
#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::new_without_default)]

#[cfg(feature = "std")]
extern crate std;

// Core modules
pub mod config;
pub mod trace;
pub mod types;

// Kernel modules
pub mod kernel;

// Re-export commonly used items at crate root (like FreeRTOS.h does)
pub use config::*;
pub use types::*;
