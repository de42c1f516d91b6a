//! Model-based tests: random operation sequences are applied both to a list
//! and to a `Vec` describing what the ring should look like.

#![allow(non_snake_case)]

use core::ptr;

use freerustos_list::kernel::list::*;
use freerustos_list::*;
use proptest::prelude::*;

const POOL: usize = 12;

/// A heap-pinned list and a pool of items whose owners are their indices.
struct Fixture {
    pxList: *mut List_t,
    pxItems: *mut ListItem_t,
}

impl Fixture {
    fn new() -> Self {
        let pxList = Box::into_raw(Box::new(List_t::new()));
        let xItems: Vec<ListItem_t> = (0..POOL).map(|_| ListItem_t::new()).collect();
        let pxItems = Box::into_raw(xItems.into_boxed_slice()) as *mut ListItem_t;
        unsafe {
            vListInitialise(pxList);
            for i in 0..POOL {
                vListInitialiseItem(pxItems.add(i));
                listSET_LIST_ITEM_OWNER(pxItems.add(i), ListOwner_t::from_index(i));
            }
        }
        Fixture { pxList, pxItems }
    }

    fn item(&self, i: usize) -> *mut ListItem_t {
        assert!(i < POOL);
        unsafe { self.pxItems.add(i) }
    }

    fn is_linked(&self, i: usize) -> bool {
        unsafe { !listLIST_ITEM_CONTAINER(self.item(i)).is_null() }
    }

    fn owners(&self) -> Vec<usize> {
        unsafe { listITERATE(self.pxList) }
            .map(|px| unsafe { listGET_LIST_ITEM_OWNER(px).as_index() })
            .collect()
    }

    fn values(&self) -> Vec<TickType_t> {
        unsafe { listITERATE(self.pxList) }
            .map(|px| unsafe { listGET_LIST_ITEM_VALUE(px) })
            .collect()
    }

    fn len(&self) -> usize {
        unsafe { listCURRENT_LIST_LENGTH(self.pxList) as usize }
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        unsafe {
            drop(Box::from_raw(self.pxList));
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(self.pxItems, POOL)));
        }
    }
}

#[derive(Clone, Debug)]
enum SortedOp {
    Insert(u16),
    Remove(usize),
}

fn sorted_op() -> impl Strategy<Value = SortedOp> {
    // Few distinct values so ties are common.
    prop_oneof![
        3 => (0u16..8).prop_map(SortedOp::Insert),
        1 => Just(SortedOp::Insert(u16::MAX)),
        2 => any::<usize>().prop_map(SortedOp::Remove),
    ]
}

#[derive(Clone, Debug)]
enum RingOp {
    InsertEnd,
    Remove(usize),
    Next,
}

fn ring_op() -> impl Strategy<Value = RingOp> {
    prop_oneof![
        2 => Just(RingOp::InsertEnd),
        1 => any::<usize>().prop_map(RingOp::Remove),
        3 => Just(RingOp::Next),
    ]
}

/// Where the index sits in the model ring.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Cursor {
    EndMarker,
    Item(usize),
}

proptest! {
    #[test]
    fn sorted_insert_and_remove_match_model(ops in proptest::collection::vec(sorted_op(), 1..64)) {
        let f = Fixture::new();
        // (value, owner) in list order.
        let mut reference: Vec<(TickType_t, usize)> = Vec::new();

        for op in ops {
            match op {
                SortedOp::Insert(v) => {
                    let xValue = if v == u16::MAX { portMAX_DELAY } else { TickType_t::from(v) };
                    let Some(i) = (0..POOL).find(|&i| !f.is_linked(i)) else {
                        continue;
                    };
                    unsafe {
                        vListInitialiseItem(f.item(i));
                        listSET_LIST_ITEM_VALUE(f.item(i), xValue);
                        vListInsert(f.pxList, f.item(i));
                    }
                    let uxPosition = reference.partition_point(|&(x, _)| x <= xValue);
                    reference.insert(uxPosition, (xValue, i));
                }
                SortedOp::Remove(n) => {
                    if reference.is_empty() {
                        prop_assert_eq!(unsafe { listLIST_IS_EMPTY(f.pxList) }, pdTRUE);
                        continue;
                    }
                    let (_, i) = reference.remove(n % reference.len());
                    let uxRemaining = unsafe { uxListRemove(f.item(i)) };
                    prop_assert_eq!(uxRemaining as usize, reference.len());
                    prop_assert!(!f.is_linked(i));
                }
            }

            prop_assert_eq!(unsafe { xListValidate(f.pxList, pdTRUE) }, Ok(()));
            prop_assert_eq!(f.len(), reference.len());
            prop_assert_eq!(f.values(), reference.iter().map(|&(x, _)| x).collect::<Vec<_>>());
            prop_assert_eq!(f.owners(), reference.iter().map(|&(_, i)| i).collect::<Vec<_>>());
            let xHead = reference.first().map_or(portMAX_DELAY, |&(x, _)| x);
            prop_assert_eq!(unsafe { listGET_ITEM_VALUE_OF_HEAD_ENTRY(f.pxList) }, xHead);
            prop_assert_eq!(unsafe { (*f.pxList).xListEnd.xItemValue }, portMAX_DELAY);
        }
    }

    #[test]
    fn round_robin_matches_model(ops in proptest::collection::vec(ring_op(), 1..96)) {
        let f = Fixture::new();
        let mut ring: Vec<usize> = Vec::new();
        let mut cursor = Cursor::EndMarker;

        for op in ops {
            match op {
                RingOp::InsertEnd => {
                    let Some(i) = (0..POOL).find(|&i| !f.is_linked(i)) else {
                        continue;
                    };
                    unsafe {
                        vListInitialiseItem(f.item(i));
                        vListInsertEnd(f.pxList, f.item(i));
                    }
                    match cursor {
                        Cursor::EndMarker => ring.push(i),
                        Cursor::Item(c) => {
                            let p = ring.iter().position(|&x| x == c).unwrap();
                            ring.insert(p, i);
                        }
                    }
                }
                RingOp::Remove(n) => {
                    if ring.is_empty() {
                        continue;
                    }
                    let p = n % ring.len();
                    let i = ring.remove(p);
                    if cursor == Cursor::Item(i) {
                        cursor = if p == 0 { Cursor::EndMarker } else { Cursor::Item(ring[p - 1]) };
                    }
                    let uxRemaining = unsafe { uxListRemove(f.item(i)) };
                    prop_assert_eq!(uxRemaining as usize, ring.len());
                }
                RingOp::Next => {
                    if ring.is_empty() {
                        continue;
                    }
                    let p = match cursor {
                        Cursor::EndMarker => 0,
                        Cursor::Item(c) => {
                            let p = ring.iter().position(|&x| x == c).unwrap() + 1;
                            if p == ring.len() { 0 } else { p }
                        }
                    };
                    cursor = Cursor::Item(ring[p]);
                    let xOwner = unsafe { listGET_OWNER_OF_NEXT_ENTRY(f.pxList) };
                    prop_assert_eq!(xOwner.as_index(), ring[p]);
                }
            }

            prop_assert_eq!(unsafe { xListValidate(f.pxList, pdFALSE) }, Ok(()));
            prop_assert_eq!(f.owners(), ring.clone());
            let pxIndex = unsafe { (*f.pxList).pxIndex };
            match cursor {
                Cursor::EndMarker => {
                    let pxEnd = unsafe { listGET_END_MARKER(f.pxList) };
                    prop_assert_eq!(pxIndex as *const ListItem_t, pxEnd);
                }
                Cursor::Item(c) => {
                    prop_assert_eq!(pxIndex, f.item(c));
                }
            }
        }
    }

    #[test]
    fn every_member_is_visited_once_per_sweep(uxCount in 1..POOL, uxWarmup in 0usize..20) {
        let f = Fixture::new();
        for i in 0..uxCount {
            unsafe { vListInsertEnd(f.pxList, f.item(i)) };
        }

        let xFirst: Vec<usize> = (0..uxCount)
            .map(|_| unsafe { listGET_OWNER_OF_NEXT_ENTRY(f.pxList).as_index() })
            .collect();
        prop_assert_eq!(xFirst, (0..uxCount).collect::<Vec<_>>());

        for _ in 0..uxWarmup {
            unsafe { listGET_OWNER_OF_NEXT_ENTRY(f.pxList) };
        }
        let mut xSweep: Vec<usize> = (0..uxCount)
            .map(|_| unsafe { listGET_OWNER_OF_NEXT_ENTRY(f.pxList).as_index() })
            .collect();
        xSweep.sort_unstable();
        prop_assert_eq!(xSweep, (0..uxCount).collect::<Vec<_>>());
    }

    #[test]
    fn removing_the_index_item_skips_nobody(uxCount in 2..POOL, uxAdvance in 1usize..30) {
        let f = Fixture::new();
        for i in 0..uxCount {
            unsafe { vListInsertEnd(f.pxList, f.item(i)) };
        }
        let mut xLast = 0;
        for _ in 0..uxAdvance {
            xLast = unsafe { listGET_OWNER_OF_NEXT_ENTRY(f.pxList).as_index() };
        }

        let xExpected = (xLast + 1) % uxCount;
        unsafe { uxListRemove(f.item(xLast)) };
        let xNext = unsafe { listGET_OWNER_OF_NEXT_ENTRY(f.pxList).as_index() };
        prop_assert_eq!(xNext, xExpected);
        prop_assert_eq!(unsafe { xListValidate(f.pxList, pdFALSE) }, Ok(()));
    }
}

#[test]
fn remove_then_reinsert_reproduces_order() {
    let f = Fixture::new();
    let xValues: [TickType_t; 6] = [9, 3, 3, 7, 1, 5];
    unsafe {
        for (i, &xValue) in xValues.iter().enumerate() {
            listSET_LIST_ITEM_VALUE(f.item(i), xValue);
            vListInsert(f.pxList, f.item(i));
        }
        let xBefore = f.values();

        for i in 0..xValues.len() {
            uxListRemove(f.item(i));
            vListInsert(f.pxList, f.item(i));
            assert_eq!(f.values(), xBefore);
            assert_eq!(xListValidate(f.pxList, pdTRUE), Ok(()));
        }
    }
}
