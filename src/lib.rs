// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

/*!
IP address and CIDR display helpers.

- [iptools]: normalize addresses, CIDR boundaries, bit strings
- [tables]: well-known reserved ranges and cloud region catalogs
- [query]: classify free-form input and describe it
*/

pub mod iptools;
pub mod logging;
pub mod query;
pub mod tables;

pub use iptools::{
    address_to_bit_string, cidr_to_address_range, normalize_address, AddressError, AddressFamily,
};
pub use query::{describe, Query, Report};
pub use tables::CloudProvider;
