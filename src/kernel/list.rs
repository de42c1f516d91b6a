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
 */

/*
 * The scheduler's list. Ready lists, delayed lists, event lists and the timer
 * lists are all instances of List_t.
 *
 * A list is a ring. It always holds one permanent item, the end marker, whose
 * value is portMAX_DELAY so it sorts after everything else. xListEnd.pxNext is
 * therefore the head of the list and xListEnd.pxPrevious its tail.
 *
 * List items are embedded in the objects they describe (normally a TCB). Each
 * item records the list it is in (pxContainer) so it can be removed without
 * naming the list, and an opaque handle back to the embedding object (pvOwner).
 *
 * Nothing in here allocates or locks. Callers serialise access with a critical
 * section or by suspending the scheduler.
 */

//! FreeRTOS List Implementation
//!
//! The intrusive doubly-linked list used throughout the kernel for ready
//! lists, delayed task lists, event lists and timer lists.
//!
//! ## Structures
//!
//! - [`ListItem_t`] - A list item that can be inserted into a list
//! - [`MiniListItem_t`] - Reduced item used as the list end marker
//! - [`List_t`] - The list container
//! - [`ListOwner_t`] - Opaque handle to the object embedding an item
//!
//! ## Functions
//!
//! - [`vListInitialise`] - Initialize a list
//! - [`vListInitialiseItem`] - Initialize a list item
//! - [`vListInsert`] - Insert item in sorted order
//! - [`vListInsertEnd`] - Insert item at end (before index)
//! - [`uxListRemove`] - Remove an item from its list
//! - [`listGET_OWNER_OF_NEXT_ENTRY`] - Round-robin walk
//! - [`listITERATE`] - Head-to-tail walk
//! - [`xListValidate`] - Structural consistency check
//!
//! ## Pointer discipline
//!
//! Lists and items are self-referential once linked. A list must not move
//! after [`vListInitialise`], and an item must not move or be dropped while
//! it is linked into a list.

use core::ffi::c_void;
use core::ptr;

use crate::config::*;
use crate::trace::*;
use crate::types::*;

// =============================================================================
// List Data Integrity Check Macros
// =============================================================================

/*
 * Known values placed at both ends of lists and list items. If something
 * scribbles over the list structures (a stack overflow, a stray write) the
 * values change and the next insert trips configASSERT. Misuse of the API
 * itself is not caught.
 */

#[cfg(not(feature = "list-data-integrity-check"))]
mod integrity {
    use super::*;

    #[inline(always)]
    pub unsafe fn listSET_FIRST_LIST_ITEM_INTEGRITY_CHECK_VALUE(_pxItem: *mut ListItem_t) {}

    #[inline(always)]
    pub unsafe fn listSET_SECOND_LIST_ITEM_INTEGRITY_CHECK_VALUE(_pxItem: *mut ListItem_t) {}

    #[inline(always)]
    pub unsafe fn listSET_END_MARKER_INTEGRITY_CHECK_VALUE(_pxEnd: *mut MiniListItem_t) {}

    #[inline(always)]
    pub unsafe fn listSET_LIST_INTEGRITY_CHECK_1_VALUE(_pxList: *mut List_t) {}

    #[inline(always)]
    pub unsafe fn listSET_LIST_INTEGRITY_CHECK_2_VALUE(_pxList: *mut List_t) {}

    #[inline(always)]
    pub unsafe fn xListItemIntegrityIntact(_pxItem: *const ListItem_t) -> bool {
        true
    }

    #[inline(always)]
    pub unsafe fn xListIntegrityIntact(_pxList: *const List_t) -> bool {
        true
    }
}

#[cfg(feature = "list-data-integrity-check")]
mod integrity {
    use super::*;

    #[inline(always)]
    pub unsafe fn listSET_FIRST_LIST_ITEM_INTEGRITY_CHECK_VALUE(pxItem: *mut ListItem_t) {
        (*pxItem).xListItemIntegrityValue1 = pdINTEGRITY_CHECK_VALUE;
    }

    #[inline(always)]
    pub unsafe fn listSET_SECOND_LIST_ITEM_INTEGRITY_CHECK_VALUE(pxItem: *mut ListItem_t) {
        (*pxItem).xListItemIntegrityValue2 = pdINTEGRITY_CHECK_VALUE;
    }

    /// The end marker only carries the first value when it is a mini item.
    #[inline(always)]
    pub unsafe fn listSET_END_MARKER_INTEGRITY_CHECK_VALUE(pxEnd: *mut MiniListItem_t) {
        (*pxEnd).xListItemIntegrityValue1 = pdINTEGRITY_CHECK_VALUE;
        #[cfg(not(feature = "mini-list-item"))]
        {
            (*pxEnd).xListItemIntegrityValue2 = pdINTEGRITY_CHECK_VALUE;
        }
    }

    #[inline(always)]
    pub unsafe fn listSET_LIST_INTEGRITY_CHECK_1_VALUE(pxList: *mut List_t) {
        (*pxList).xListIntegrityValue1 = pdINTEGRITY_CHECK_VALUE;
    }

    #[inline(always)]
    pub unsafe fn listSET_LIST_INTEGRITY_CHECK_2_VALUE(pxList: *mut List_t) {
        (*pxList).xListIntegrityValue2 = pdINTEGRITY_CHECK_VALUE;
    }

    #[inline(always)]
    pub unsafe fn xListItemIntegrityIntact(pxItem: *const ListItem_t) -> bool {
        (*pxItem).xListItemIntegrityValue1 == pdINTEGRITY_CHECK_VALUE
            && (*pxItem).xListItemIntegrityValue2 == pdINTEGRITY_CHECK_VALUE
    }

    #[inline(always)]
    pub unsafe fn xListIntegrityIntact(pxList: *const List_t) -> bool {
        (*pxList).xListIntegrityValue1 == pdINTEGRITY_CHECK_VALUE
            && (*pxList).xListIntegrityValue2 == pdINTEGRITY_CHECK_VALUE
            && (*pxList).xListEnd.xListItemIntegrityValue1 == pdINTEGRITY_CHECK_VALUE
    }
}

use integrity::*;

#[inline(always)]
#[track_caller]
unsafe fn listTEST_LIST_ITEM_INTEGRITY(pxItem: *const ListItem_t) {
    configASSERT(xListItemIntegrityIntact(pxItem));
}

#[inline(always)]
#[track_caller]
unsafe fn listTEST_LIST_INTEGRITY(pxList: *const List_t) {
    configASSERT(xListIntegrityIntact(pxList));
}

// =============================================================================
// Owner Handle
// =============================================================================

/// Opaque handle to the object that embeds a list item.
///
/// The list never dereferences it; it is stored by [`listSET_LIST_ITEM_OWNER`]
/// and handed back by the owner accessors. The kernel stores TCB and timer
/// pointers here, but an index into an owner table works equally well.
///
/// Index zero and [`ListOwner_t::NONE`] share a representation, so
/// [`ListOwner_t::is_none`] is only meaningful for pointer owners.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ListOwner_t(*mut c_void);

impl ListOwner_t {
    /// No owner. Items start out like this.
    pub const NONE: ListOwner_t = ListOwner_t(ptr::null_mut());

    /// Owner referenced by address.
    #[inline(always)]
    pub const fn from_ptr<T>(pxOwner: *mut T) -> Self {
        ListOwner_t(pxOwner as *mut c_void)
    }

    /// Owner referenced by position in a table the caller keeps.
    #[inline(always)]
    pub fn from_index(uxIndex: usize) -> Self {
        ListOwner_t(uxIndex as *mut c_void)
    }

    #[inline(always)]
    pub fn as_ptr<T>(self) -> *mut T {
        self.0 as *mut T
    }

    #[inline(always)]
    pub fn as_index(self) -> usize {
        self.0 as usize
    }

    #[inline(always)]
    pub fn is_none(self) -> bool {
        self.0.is_null()
    }
}

impl Default for ListOwner_t {
    fn default() -> Self {
        ListOwner_t::NONE
    }
}

// =============================================================================
// List Item Structure
// =============================================================================

/// List item structure
///
/// Each list item contains:
/// - `xItemValue` - The value used for sorting (e.g., wake time, priority)
/// - `pxNext` / `pxPrevious` - Ring links
/// - `pvOwner` - Handle back to the owning object (usually a TCB)
/// - `pxContainer` - The list this item is in, null when unlinked
#[repr(C)]
pub struct ListItem_t {
    /// Set to a known value if configUSE_LIST_DATA_INTEGRITY_CHECK_BYTES is set to 1.
    #[cfg(feature = "list-data-integrity-check")]
    pub xListItemIntegrityValue1: TickType_t,

    /// The value being listed. Sorted lists keep these in ascending order.
    pub xItemValue: TickType_t,

    /// Next item in the ring.
    pub pxNext: *mut ListItem_t,

    /// Previous item in the ring.
    pub pxPrevious: *mut ListItem_t,

    /// The object (normally a TCB) that contains the list item.
    pub pvOwner: ListOwner_t,

    /// The list this item is linked into, or null.
    pub pxContainer: *mut List_t,

    /// Set to a known value if configUSE_LIST_DATA_INTEGRITY_CHECK_BYTES is set to 1.
    #[cfg(feature = "list-data-integrity-check")]
    pub xListItemIntegrityValue2: TickType_t,
}

impl ListItem_t {
    /// Create a new uninitialized ListItem_t
    ///
    /// [AMENDMENT] Creates a zeroed list item. Use vListInitialiseItem for proper initialization.
    pub const fn new() -> Self {
        ListItem_t {
            #[cfg(feature = "list-data-integrity-check")]
            xListItemIntegrityValue1: 0,
            xItemValue: 0,
            pxNext: ptr::null_mut(),
            pxPrevious: ptr::null_mut(),
            pvOwner: ListOwner_t::NONE,
            pxContainer: ptr::null_mut(),
            #[cfg(feature = "list-data-integrity-check")]
            xListItemIntegrityValue2: 0,
        }
    }
}

/// Static list item type for static allocation
pub type StaticListItem_t = ListItem_t;

/// Mini list item, used only as a list's end marker.
///
/// The end marker is never looked up by owner and never changes list, so it
/// drops `pvOwner` and `pxContainer`. Its layout is a prefix of
/// [`ListItem_t`], which lets it sit in the same ring: code that reaches it
/// through a `*mut ListItem_t` only ever touches the value and link fields.
#[cfg(feature = "mini-list-item")]
#[repr(C)]
pub struct MiniListItem_t {
    /// Set to a known value if configUSE_LIST_DATA_INTEGRITY_CHECK_BYTES is set to 1.
    #[cfg(feature = "list-data-integrity-check")]
    pub xListItemIntegrityValue1: TickType_t,
    pub xItemValue: TickType_t,
    pub pxNext: *mut ListItem_t,
    pub pxPrevious: *mut ListItem_t,
}

#[cfg(feature = "mini-list-item")]
impl MiniListItem_t {
    pub const fn new() -> Self {
        MiniListItem_t {
            #[cfg(feature = "list-data-integrity-check")]
            xListItemIntegrityValue1: 0,
            xItemValue: 0,
            pxNext: ptr::null_mut(),
            pxPrevious: ptr::null_mut(),
        }
    }
}

/// Without `mini-list-item` the end marker is a full list item.
#[cfg(not(feature = "mini-list-item"))]
pub type MiniListItem_t = ListItem_t;

#[cfg(feature = "mini-list-item")]
const _: () = {
    use core::mem::offset_of;
    assert!(offset_of!(MiniListItem_t, xItemValue) == offset_of!(ListItem_t, xItemValue));
    assert!(offset_of!(MiniListItem_t, pxNext) == offset_of!(ListItem_t, pxNext));
    assert!(offset_of!(MiniListItem_t, pxPrevious) == offset_of!(ListItem_t, pxPrevious));
};

// =============================================================================
// List Structure
// =============================================================================

/// List structure
///
/// The list contains:
/// - `uxNumberOfItems` - Number of items in the list, end marker excluded
/// - `pxIndex` - Round-robin cursor
/// - `xListEnd` - Marker item always at the end
#[repr(C)]
pub struct List_t {
    /// Set to a known value if configUSE_LIST_DATA_INTEGRITY_CHECK_BYTES is set to 1.
    #[cfg(feature = "list-data-integrity-check")]
    pub xListIntegrityValue1: TickType_t,

    /// The number of items in the list.
    pub uxNumberOfItems: UBaseType_t,

    /// Points to the last item returned by listGET_OWNER_OF_NEXT_ENTRY(), or
    /// to the end marker before the first call.
    pub pxIndex: *mut ListItem_t,

    /// Holds portMAX_DELAY so it always sorts last.
    pub xListEnd: MiniListItem_t,

    /// Set to a known value if configUSE_LIST_DATA_INTEGRITY_CHECK_BYTES is set to 1.
    #[cfg(feature = "list-data-integrity-check")]
    pub xListIntegrityValue2: TickType_t,
}

impl List_t {
    /// Create a new uninitialized List_t
    ///
    /// [AMENDMENT] Creates a zeroed list, suitable for `static` storage.
    /// Use vListInitialise once it has reached its final address.
    pub const fn new() -> Self {
        List_t {
            #[cfg(feature = "list-data-integrity-check")]
            xListIntegrityValue1: 0,
            uxNumberOfItems: 0,
            pxIndex: ptr::null_mut(),
            xListEnd: MiniListItem_t::new(),
            #[cfg(feature = "list-data-integrity-check")]
            xListIntegrityValue2: 0,
        }
    }
}

/// The end marker viewed as a ring member.
#[inline(always)]
unsafe fn prvListEnd(pxList: *mut List_t) -> *mut ListItem_t {
    ptr::addr_of_mut!((*pxList).xListEnd).cast::<ListItem_t>()
}

// =============================================================================
// List Access Macros (as inline functions)
// =============================================================================

/// Set the owner of a list item
#[inline(always)]
pub unsafe fn listSET_LIST_ITEM_OWNER(pxListItem: *mut ListItem_t, xOwner: ListOwner_t) {
    (*pxListItem).pvOwner = xOwner;
}

/// Get the owner of a list item
#[inline(always)]
pub unsafe fn listGET_LIST_ITEM_OWNER(pxListItem: *const ListItem_t) -> ListOwner_t {
    (*pxListItem).pvOwner
}

/// Set the value of a list item
///
/// The value must not change while the item sits in a sorted list; remove it,
/// update the value, then insert it again.
#[inline(always)]
pub unsafe fn listSET_LIST_ITEM_VALUE(pxListItem: *mut ListItem_t, xValue: TickType_t) {
    (*pxListItem).xItemValue = xValue;
}

/// Get the value of a list item
#[inline(always)]
pub unsafe fn listGET_LIST_ITEM_VALUE(pxListItem: *const ListItem_t) -> TickType_t {
    (*pxListItem).xItemValue
}

/// Get the value of the head entry
///
/// On an empty list this is the end marker's value, portMAX_DELAY.
#[inline(always)]
pub unsafe fn listGET_ITEM_VALUE_OF_HEAD_ENTRY(pxList: *const List_t) -> TickType_t {
    (*(*pxList).xListEnd.pxNext).xItemValue
}

/// Get the head entry of a list
#[inline(always)]
pub unsafe fn listGET_HEAD_ENTRY(pxList: *const List_t) -> *mut ListItem_t {
    (*pxList).xListEnd.pxNext
}

/// Get the next item in the list
#[inline(always)]
pub unsafe fn listGET_NEXT(pxListItem: *const ListItem_t) -> *mut ListItem_t {
    (*pxListItem).pxNext
}

/// Get the end marker of a list
#[inline(always)]
pub unsafe fn listGET_END_MARKER(pxList: *const List_t) -> *const ListItem_t {
    ptr::addr_of!((*pxList).xListEnd).cast::<ListItem_t>()
}

/// Check if a list is empty
#[inline(always)]
pub unsafe fn listLIST_IS_EMPTY(pxList: *const List_t) -> BaseType_t {
    if (*pxList).uxNumberOfItems == 0 {
        pdTRUE
    } else {
        pdFALSE
    }
}

/// Get the current length of a list
#[inline(always)]
pub unsafe fn listCURRENT_LIST_LENGTH(pxList: *const List_t) -> UBaseType_t {
    (*pxList).uxNumberOfItems
}

/// Get the owner of the head entry
///
/// The list must not be empty: with mini list items the end marker has no
/// owner field to read.
#[inline(always)]
pub unsafe fn listGET_OWNER_OF_HEAD_ENTRY(pxList: *const List_t) -> ListOwner_t {
    (*(*pxList).xListEnd.pxNext).pvOwner
}

/// Check if a list item is contained within a list
#[inline(always)]
pub unsafe fn listIS_CONTAINED_WITHIN(
    pxList: *const List_t,
    pxListItem: *const ListItem_t,
) -> BaseType_t {
    if (*pxListItem).pxContainer as *const List_t == pxList {
        pdTRUE
    } else {
        pdFALSE
    }
}

/// Get the container of a list item, null if it is not in a list
#[inline(always)]
pub unsafe fn listLIST_ITEM_CONTAINER(pxListItem: *const ListItem_t) -> *mut List_t {
    (*pxListItem).pxContainer
}

/// Check if a list has been initialized
///
/// Crude: vListInitialise() is the only thing that writes portMAX_DELAY into
/// the end marker, and List_t::new() leaves it zero.
#[inline(always)]
pub unsafe fn listLIST_IS_INITIALISED(pxList: *const List_t) -> BaseType_t {
    if (*pxList).xListEnd.xItemValue == portMAX_DELAY {
        pdTRUE
    } else {
        pdFALSE
    }
}

// =============================================================================
// listGET_OWNER_OF_NEXT_ENTRY
// =============================================================================

/// Get owner of next entry and advance the index
///
/// Moves `pxIndex` one step forward, stepping over the end marker, and returns
/// the owner of the item it lands on. Repeated calls visit every item once per
/// sweep; the scheduler uses this to share time between tasks of equal
/// priority.
///
/// # Safety
///
/// `pxList` must be initialised and must not be empty.
#[inline(always)]
pub unsafe fn listGET_OWNER_OF_NEXT_ENTRY(pxList: *mut List_t) -> ListOwner_t {
    (*pxList).pxIndex = (*(*pxList).pxIndex).pxNext;
    if (*pxList).pxIndex == prvListEnd(pxList) {
        (*pxList).pxIndex = (*pxList).xListEnd.pxNext;
    }
    (*(*pxList).pxIndex).pvOwner
}

// =============================================================================
// PUBLIC LIST API
// =============================================================================

/// Initialize a list
///
/// Must be called before a list is used, after it has reached its final
/// address. Links the end marker to itself and points the index at it.
/// Calling it on a list that still holds items orphans those items.
///
/// # Safety
///
/// `pxList` must point to valid, allocated memory for a `List_t`.
pub unsafe fn vListInitialise(pxList: *mut List_t) {
    traceENTER_vListInitialise(pxList);

    let pxEnd = prvListEnd(pxList);

    (*pxList).pxIndex = pxEnd;

    listSET_END_MARKER_INTEGRITY_CHECK_VALUE(ptr::addr_of_mut!((*pxList).xListEnd));

    (*pxList).xListEnd.xItemValue = portMAX_DELAY;

    /* An empty ring: the end marker is its own neighbour. */
    (*pxList).xListEnd.pxNext = pxEnd;
    (*pxList).xListEnd.pxPrevious = pxEnd;

    #[cfg(not(feature = "mini-list-item"))]
    {
        (*pxList).xListEnd.pvOwner = ListOwner_t::NONE;
        (*pxList).xListEnd.pxContainer = ptr::null_mut();
    }

    (*pxList).uxNumberOfItems = 0;

    listSET_LIST_INTEGRITY_CHECK_1_VALUE(pxList);
    listSET_LIST_INTEGRITY_CHECK_2_VALUE(pxList);

    traceRETURN_vListInitialise();
}
/*-----------------------------------------------------------*/

/// Initialize a list item
///
/// Must be called before a list item is first inserted. Clears the container
/// so the item does not think it is already in a list.
///
/// # Safety
///
/// `pxItem` must point to valid, allocated memory for a `ListItem_t` that is
/// not currently linked into a list.
pub unsafe fn vListInitialiseItem(pxItem: *mut ListItem_t) {
    traceENTER_vListInitialiseItem(pxItem);

    (*pxItem).pxContainer = ptr::null_mut();

    listSET_FIRST_LIST_ITEM_INTEGRITY_CHECK_VALUE(pxItem);
    listSET_SECOND_LIST_ITEM_INTEGRITY_CHECK_VALUE(pxItem);

    traceRETURN_vListInitialiseItem();
}
/*-----------------------------------------------------------*/

/// Insert a list item at the end of the list
///
/// The item goes immediately before `pxIndex`, so it is the last item
/// returned by the current sweep of listGET_OWNER_OF_NEXT_ENTRY. Its value is
/// ignored.
///
/// # Safety
///
/// `pxList` must be initialised. `pxNewListItem` must be initialised and not
/// in any list.
pub unsafe fn vListInsertEnd(pxList: *mut List_t, pxNewListItem: *mut ListItem_t) {
    traceENTER_vListInsertEnd(pxList, pxNewListItem);

    listINSERT_END(pxList, pxNewListItem);

    traceRETURN_vListInsertEnd();
}
/*-----------------------------------------------------------*/

/// Insert a list item in sorted order
///
/// The item is placed before the first item whose value is strictly greater
/// than its own. Items with equal values therefore keep insertion order, which
/// is what gives equal-priority tasks on an event list their fair turn.
///
/// # Safety
///
/// `pxList` must be initialised. `pxNewListItem` must be initialised, have its
/// value set, and not be in any list.
pub unsafe fn vListInsert(pxList: *mut List_t, pxNewListItem: *mut ListItem_t) {
    let mut pxIterator: *mut ListItem_t;
    let xValueOfInsertion: TickType_t = (*pxNewListItem).xItemValue;

    traceENTER_vListInsert(pxList, pxNewListItem);

    listTEST_LIST_INTEGRITY(pxList);
    listTEST_LIST_ITEM_INTEGRITY(pxNewListItem);

    /* The walk below stops on the first value strictly greater than the new
     * one, and relies on the end marker to stop it. An item carrying
     * portMAX_DELAY would never stop it, so such items go straight to the
     * tail. */
    if xValueOfInsertion == portMAX_DELAY {
        pxIterator = (*pxList).xListEnd.pxPrevious;
    } else {
        /* A hang here almost always means the list was corrupted: a stack
         * overflow, an interrupt calling into the kernel above the syscall
         * priority, or a list used before vListInitialise(). Enable
         * list-data-integrity-check to narrow it down. */
        pxIterator = prvListEnd(pxList);
        while (*(*pxIterator).pxNext).xItemValue <= xValueOfInsertion {
            pxIterator = (*pxIterator).pxNext;
        }
    }

    (*pxNewListItem).pxNext = (*pxIterator).pxNext;
    (*(*pxNewListItem).pxNext).pxPrevious = pxNewListItem;
    (*pxNewListItem).pxPrevious = pxIterator;
    (*pxIterator).pxNext = pxNewListItem;

    (*pxNewListItem).pxContainer = pxList;

    (*pxList).uxNumberOfItems += 1;

    traceRETURN_vListInsert();
}
/*-----------------------------------------------------------*/

/// Remove a list item from its list
///
/// The item knows which list it is in, so only the item is passed.
///
/// # Returns
///
/// The number of items that remain in the list after the list item has
/// been removed.
///
/// # Safety
///
/// `pxItemToRemove` must currently be linked into an initialised list.
pub unsafe fn uxListRemove(pxItemToRemove: *mut ListItem_t) -> UBaseType_t {
    let pxList: *mut List_t = (*pxItemToRemove).pxContainer;

    traceENTER_uxListRemove(pxItemToRemove);

    listREMOVE_ITEM(pxItemToRemove);

    traceRETURN_uxListRemove((*pxList).uxNumberOfItems);

    (*pxList).uxNumberOfItems
}
/*-----------------------------------------------------------*/

// =============================================================================
// Inline tick-path variants
// =============================================================================

/// Inline version of uxListRemove that doesn't return a value
///
/// Used by the tick interrupt, where the trace hooks and return value are
/// not wanted.
///
/// # Safety
///
/// `pxItemToRemove` must currently be linked into an initialised list.
#[inline(always)]
pub unsafe fn listREMOVE_ITEM(pxItemToRemove: *mut ListItem_t) {
    let pxList: *mut List_t = (*pxItemToRemove).pxContainer;

    (*(*pxItemToRemove).pxNext).pxPrevious = (*pxItemToRemove).pxPrevious;
    (*(*pxItemToRemove).pxPrevious).pxNext = (*pxItemToRemove).pxNext;

    /* Leave the index on a live item. Backing up one place means the next
     * listGET_OWNER_OF_NEXT_ENTRY() returns the item that followed this one. */
    if (*pxList).pxIndex == pxItemToRemove {
        (*pxList).pxIndex = (*pxItemToRemove).pxPrevious;
    }

    (*pxItemToRemove).pxContainer = ptr::null_mut();
    (*pxList).uxNumberOfItems -= 1;
}

/// Inline version of vListInsertEnd
///
/// # Safety
///
/// `pxList` must be initialised. `pxNewListItem` must be initialised and not
/// in any list.
#[inline(always)]
pub unsafe fn listINSERT_END(pxList: *mut List_t, pxNewListItem: *mut ListItem_t) {
    let pxIndex: *mut ListItem_t = (*pxList).pxIndex;

    listTEST_LIST_INTEGRITY(pxList);
    listTEST_LIST_ITEM_INTEGRITY(pxNewListItem);

    (*pxNewListItem).pxNext = pxIndex;
    (*pxNewListItem).pxPrevious = (*pxIndex).pxPrevious;

    (*(*pxIndex).pxPrevious).pxNext = pxNewListItem;
    (*pxIndex).pxPrevious = pxNewListItem;

    (*pxNewListItem).pxContainer = pxList;

    (*pxList).uxNumberOfItems += 1;
}

// =============================================================================
// Iteration
// =============================================================================

/// Head-to-tail walk over the items of a list, end marker excluded.
///
/// The successor is read before an item is yielded, so the item just yielded
/// may be removed from the list. Any other modification during the walk is
/// not allowed.
pub struct ListIterator {
    pxCurrent: *mut ListItem_t,
    pxEnd: *const ListItem_t,
}

impl Iterator for ListIterator {
    type Item = *mut ListItem_t;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pxCurrent as *const ListItem_t == self.pxEnd {
            return None;
        }
        let pxItem = self.pxCurrent;
        // SAFETY: listITERATE's contract keeps every item reached from the
        // head valid until the end marker is reached.
        self.pxCurrent = unsafe { (*pxItem).pxNext };
        Some(pxItem)
    }
}

impl core::iter::FusedIterator for ListIterator {}

/// Walk the items of `pxList` from head to tail.
///
/// Does not touch `pxIndex`.
///
/// # Safety
///
/// `pxList` must be initialised and must stay valid, and unmodified apart
/// from removing the item last yielded, for as long as the iterator is used.
pub unsafe fn listITERATE(pxList: *const List_t) -> ListIterator {
    ListIterator {
        pxCurrent: (*pxList).xListEnd.pxNext,
        pxEnd: listGET_END_MARKER(pxList),
    }
}

// =============================================================================
// Validation
// =============================================================================

/// The first inconsistency found by [`xListValidate`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum eListCorruption {
    /// The end marker does not hold portMAX_DELAY (not initialised, or overwritten).
    eEndMarkerValue,
    /// A list integrity value has been overwritten.
    eListIntegrityValue,
    /// A list item integrity value has been overwritten.
    eItemIntegrityValue,
    /// A link is null or `pxNext`/`pxPrevious` disagree.
    eBrokenLink,
    /// A member's `pxContainer` names a different list.
    eWrongContainer,
    /// The ring length does not match `uxNumberOfItems`.
    eLengthMismatch,
    /// `pxIndex` is not on the ring.
    eIndexNotInList,
    /// Item values are not in ascending order.
    eOutOfOrder,
}

/// Check the structure of a list.
///
/// Walks the ring at most `uxNumberOfItems + 1` steps, so a ring corrupted
/// into a cycle that skips the end marker still terminates. When
/// `xCheckOrder` is not `pdFALSE` the item values must also be ascending,
/// which only holds for lists filled by [`vListInsert`].
///
/// Meant for debug monitors and tests; the kernel never calls it.
///
/// # Safety
///
/// `pxList` must point to a `List_t`, and every pointer reachable from it
/// that is not null must point to a live list item.
pub unsafe fn xListValidate(
    pxList: *const List_t,
    xCheckOrder: BaseType_t,
) -> Result<(), eListCorruption> {
    let xResult = prvListValidate(pxList, xCheckOrder != pdFALSE);
    if xResult.is_err() {
        traceLIST_CORRUPTION_DETECTED(pxList);
    }
    xResult
}

unsafe fn prvListValidate(pxList: *const List_t, xCheckOrder: bool) -> Result<(), eListCorruption> {
    if listLIST_IS_INITIALISED(pxList) == pdFALSE {
        return Err(eListCorruption::eEndMarkerValue);
    }
    if !xListIntegrityIntact(pxList) {
        return Err(eListCorruption::eListIntegrityValue);
    }

    let pxEnd = listGET_END_MARKER(pxList);
    let pxIndex = (*pxList).pxIndex as *const ListItem_t;
    let uxExpected = (*pxList).uxNumberOfItems;

    let mut uxSeen: UBaseType_t = 0;
    let mut xIndexFound = pxIndex == pxEnd;
    let mut xLastValue: TickType_t = 0;
    let mut pxPrevious = pxEnd;
    let mut pxItem = (*pxList).xListEnd.pxNext as *const ListItem_t;

    while pxItem != pxEnd {
        if pxItem.is_null() {
            return Err(eListCorruption::eBrokenLink);
        }
        if uxSeen == uxExpected {
            return Err(eListCorruption::eLengthMismatch);
        }
        if (*pxItem).pxPrevious as *const ListItem_t != pxPrevious {
            return Err(eListCorruption::eBrokenLink);
        }
        if (*pxItem).pxContainer as *const List_t != pxList {
            return Err(eListCorruption::eWrongContainer);
        }
        if !xListItemIntegrityIntact(pxItem) {
            return Err(eListCorruption::eItemIntegrityValue);
        }
        if xCheckOrder && (*pxItem).xItemValue < xLastValue {
            return Err(eListCorruption::eOutOfOrder);
        }
        if pxItem == pxIndex {
            xIndexFound = true;
        }

        xLastValue = (*pxItem).xItemValue;
        uxSeen += 1;
        pxPrevious = pxItem;
        pxItem = (*pxItem).pxNext;
    }

    if (*pxList).xListEnd.pxPrevious as *const ListItem_t != pxPrevious {
        return Err(eListCorruption::eBrokenLink);
    }
    if uxSeen != uxExpected {
        return Err(eListCorruption::eLengthMismatch);
    }
    if !xIndexFound {
        return Err(eListCorruption::eIndexNotInList);
    }

    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
