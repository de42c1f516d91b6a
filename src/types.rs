/*
 * FreeRTOS Kernel <DEVELOPMENT BRANCH>
 * Copyright (C) 2021 Amazon.com, Inc. or its affiliates. All Rights Reserved.
 *
 * SPDX-License-Identifier: MIT
 *
 * [AMENDMENT] This module provides the Rust equivalents of the FreeRTOS base
 * types the list depends on. These are typically defined in portmacro.h for
 * each port. Here we provide generic definitions controlled by Cargo features.
 */

//! FreeRTOS Base Types
//!
//! This module defines the fundamental types used by the list:
//! - `BaseType_t` - Signed type, architecture word size
//! - `UBaseType_t` - Unsigned type, architecture word size (item counts)
//! - `TickType_t` - Item value type (wake times, priorities)
//!
//! ## Architecture Width
//! - `arch-32bit` feature: 32-bit types (default)
//! - `arch-64bit` feature: 64-bit types
//!
//! ## Tick Width
//! - `tick-16bit` feature: 16-bit item values
//! - `tick-32bit` feature: 32-bit item values (default)
//! - `tick-64bit` feature: 64-bit item values

// =============================================================================
// Feature sanity checks
// =============================================================================

#[cfg(not(any(feature = "arch-32bit", feature = "arch-64bit")))]
compile_error!("one of the `arch-32bit` or `arch-64bit` features must be enabled");

#[cfg(all(feature = "arch-32bit", feature = "arch-64bit"))]
compile_error!("`arch-32bit` and `arch-64bit` are mutually exclusive");

#[cfg(not(any(feature = "tick-16bit", feature = "tick-32bit", feature = "tick-64bit")))]
compile_error!("one of the `tick-16bit`, `tick-32bit` or `tick-64bit` features must be enabled");

#[cfg(any(
    all(feature = "tick-16bit", feature = "tick-32bit"),
    all(feature = "tick-16bit", feature = "tick-64bit"),
    all(feature = "tick-32bit", feature = "tick-64bit"),
))]
compile_error!("only one `tick-*` feature may be enabled (disable default features first)");

// =============================================================================
// Architecture-dependent types (BaseType_t, UBaseType_t)
// =============================================================================

/// Signed base type - architecture word size
/// Used for boolean returns.
#[cfg(feature = "arch-32bit")]
pub type BaseType_t = i32;

#[cfg(feature = "arch-64bit")]
pub type BaseType_t = i64;

/// Unsigned base type - architecture word size
/// Used for item counts.
#[cfg(feature = "arch-32bit")]
pub type UBaseType_t = u32;

#[cfg(feature = "arch-64bit")]
pub type UBaseType_t = u64;

// =============================================================================
// Tick type (configurable width independent of architecture)
// =============================================================================

/// Tick counter type - 16-bit variant
/// Suitable for very resource-constrained systems.
#[cfg(feature = "tick-16bit")]
pub type TickType_t = u16;

/// Tick counter type - 32-bit variant (most common)
#[cfg(feature = "tick-32bit")]
pub type TickType_t = u32;

/// Tick counter type - 64-bit variant
/// For systems needing very long delays without overflow.
#[cfg(feature = "tick-64bit")]
pub type TickType_t = u64;

/// Maximum item value. The list end marker always carries this value.
pub const portMAX_DELAY: TickType_t = TickType_t::MAX;

// =============================================================================
// Boolean-like constants (from projdefs.h)
// =============================================================================

/// Boolean false as BaseType_t
pub const pdFALSE: BaseType_t = 0;

/// Boolean true as BaseType_t
pub const pdTRUE: BaseType_t = 1;

// =============================================================================
// Integrity check value (from projdefs.h)
// =============================================================================

/// Integrity check magic value - 16-bit ticks
#[cfg(feature = "tick-16bit")]
pub const pdINTEGRITY_CHECK_VALUE: TickType_t = 0x5A5A;

/// Integrity check magic value - 32-bit ticks
#[cfg(feature = "tick-32bit")]
pub const pdINTEGRITY_CHECK_VALUE: TickType_t = 0x5A5A_5A5A;

/// Integrity check magic value - 64-bit ticks
#[cfg(feature = "tick-64bit")]
pub const pdINTEGRITY_CHECK_VALUE: TickType_t = 0x5A5A_5A5A_5A5A_5A5A;
