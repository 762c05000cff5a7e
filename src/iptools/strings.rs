// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

pub(crate) static COLON: &str = ":";
pub(crate) static DOUBLE_COLON: &str = "::";
pub(crate) static SLASH: &str = "/";

// mod.rs
pub(crate) static ERR_INVALID_ADDR: &str = "invalid IP address";
pub(crate) static ERR_INVALID_CIDR: &str = "invalid CIDR";

// structs.rs
pub(crate) static FAM_V4: &str = "IPv4";
pub(crate) static FAM_V6: &str = "IPv6";
