// ABOUTME: Helper modules for runcast-cli
// ABOUTME: Provides output formatting shared by the command handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod display;
