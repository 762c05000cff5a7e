// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reserved address ranges and cloud region catalogs.

mod data;
mod private;
mod regions;

pub use private::{find_reserved, find_reserved_ip, reserved_ranges, ReservedMatch, ReservedRange};
pub use regions::{find_region, region_location, regions, CloudProvider};
