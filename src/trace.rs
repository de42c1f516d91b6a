/*
 * FreeRTOS Kernel <DEVELOPMENT BRANCH>
 * Copyright (C) 2021 Amazon.com, Inc. or its affiliates. All Rights Reserved.
 *
 * SPDX-License-Identifier: MIT
 *
 * [AMENDMENT] This module provides the list trace hook functions. In the
 * original C, these are macros defined in FreeRTOS.h that default to nothing
 * but can be overridden by the user for tracing/debugging.
 *
 * Here we provide them as inline functions that are no-ops unless the
 * `defmt` feature is enabled, in which case they emit defmt trace records.
 */

//! Trace Hooks
//!
//! Every public list function calls a `traceENTER_*` hook on entry and a
//! `traceRETURN_*` hook on exit. By default these are empty and compile away.
//!
//! With the `defmt` feature each hook emits a `defmt::trace!` record carrying
//! the addresses involved (and the remaining item count on removal). The
//! application must provide a defmt global logger in that configuration.

#![allow(unused_variables)]

use crate::kernel::list::{ListItem_t, List_t};
use crate::types::*;

// =============================================================================
// List tracing
// =============================================================================

#[inline(always)]
pub fn traceENTER_vListInitialise(pxList: *mut List_t) {
    #[cfg(feature = "defmt")]
    defmt::trace!("vListInitialise list={:#x}", pxList as usize);
}

#[inline(always)]
pub fn traceRETURN_vListInitialise() {}

#[inline(always)]
pub fn traceENTER_vListInitialiseItem(pxItem: *mut ListItem_t) {
    #[cfg(feature = "defmt")]
    defmt::trace!("vListInitialiseItem item={:#x}", pxItem as usize);
}

#[inline(always)]
pub fn traceRETURN_vListInitialiseItem() {}

#[inline(always)]
pub fn traceENTER_vListInsertEnd(pxList: *mut List_t, pxNewListItem: *mut ListItem_t) {
    #[cfg(feature = "defmt")]
    defmt::trace!(
        "vListInsertEnd list={:#x} item={:#x}",
        pxList as usize,
        pxNewListItem as usize
    );
}

#[inline(always)]
pub fn traceRETURN_vListInsertEnd() {}

#[inline(always)]
pub fn traceENTER_vListInsert(pxList: *mut List_t, pxNewListItem: *mut ListItem_t) {
    #[cfg(feature = "defmt")]
    defmt::trace!(
        "vListInsert list={:#x} item={:#x}",
        pxList as usize,
        pxNewListItem as usize
    );
}

#[inline(always)]
pub fn traceRETURN_vListInsert() {}

#[inline(always)]
pub fn traceENTER_uxListRemove(pxItemToRemove: *mut ListItem_t) {
    #[cfg(feature = "defmt")]
    defmt::trace!("uxListRemove item={:#x}", pxItemToRemove as usize);
}

#[inline(always)]
pub fn traceRETURN_uxListRemove(uxNumberOfItems: UBaseType_t) {
    #[cfg(feature = "defmt")]
    defmt::trace!("uxListRemove -> {}", uxNumberOfItems);
}

#[inline(always)]
pub fn traceLIST_CORRUPTION_DETECTED(pxList: *const List_t) {
    #[cfg(feature = "defmt")]
    defmt::error!("list corruption detected list={:#x}", pxList as usize);
}
