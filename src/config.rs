/*
 * FreeRTOS Kernel <DEVELOPMENT BRANCH>
 * Copyright (C) 2021 Amazon.com, Inc. or its affiliates. All Rights Reserved.
 *
 * SPDX-License-Identifier: MIT
 *
 * [AMENDMENT] This module is the Rust equivalent of the list-related parts of
 * FreeRTOSConfig.h. Configuration is done via:
 * - Cargo features for major toggles
 * - Constants in this module for numeric values
 */

//! FreeRTOS Configuration
//!
//! The list only consumes a handful of configuration values. They are exposed
//! as constants so kernel code can branch on them the same way the C sources
//! branch on `configUSE_*` macros; the branches fold away at compile time.

use crate::types::*;

// =============================================================================
// List Configuration
// =============================================================================

/// Use mini list items for the list end marker
/// [AMENDMENT] Controlled by Cargo feature `mini-list-item`
#[cfg(feature = "mini-list-item")]
pub const configUSE_MINI_LIST_ITEM: BaseType_t = 1;
#[cfg(not(feature = "mini-list-item"))]
pub const configUSE_MINI_LIST_ITEM: BaseType_t = 0;

/// Enable list data integrity checks
/// [AMENDMENT] Controlled by Cargo feature `list-data-integrity-check`
#[cfg(feature = "list-data-integrity-check")]
pub const configUSE_LIST_DATA_INTEGRITY_CHECK_BYTES: BaseType_t = 1;
#[cfg(not(feature = "list-data-integrity-check"))]
pub const configUSE_LIST_DATA_INTEGRITY_CHECK_BYTES: BaseType_t = 0;

// =============================================================================
// Debug / Assert
// =============================================================================

/// configASSERT macro equivalent
/// [AMENDMENT] In Rust, we use debug_assert! so release builds carry no checks.
/// This constant controls whether asserts are active.
pub const configASSERT_DEFINED: BaseType_t = 1;

/// Macro-like function for configASSERT
///
/// A failed assertion panics; on target the application's panic handler is
/// the halt path (typically: mask interrupts and spin so a debugger can
/// inspect the corrupted state).
#[inline(always)]
#[track_caller]
pub fn configASSERT(condition: bool) {
    if configASSERT_DEFINED != 0 {
        debug_assert!(condition, "FreeRTOS assertion failed");
    }
}
