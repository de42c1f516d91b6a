/*
 * FreeRTOS Kernel <DEVELOPMENT BRANCH>
 * Copyright (C) 2021 Amazon.com, Inc. or its affiliates. All Rights Reserved.
 *
 * SPDX-License-Identifier: MIT
 *
 * [AMENDMENT] This module contains the kernel list, the data structure the
 * scheduler builds its ready, delayed, event and timer lists from.
 */

//! FreeRTOS Kernel Core
//!
//! - [`list`] - Linked list implementation used by the scheduler

pub mod list;
