// ABOUTME: Helper modules for mealplan-cli
// ABOUTME: Output formatting and physical-stats argument mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
pub mod stats;
