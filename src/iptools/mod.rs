// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! IP address and CIDR formatting for display.

mod addresses;
mod formatting;
mod strings;
mod structs;

use std::{error, fmt, net::AddrParseError};
use strings::*;

pub use addresses::*;
pub(crate) use addresses::{net_address_count, net_to_address_range};
pub use formatting::*;
pub use structs::{expand_address, parse_address, parse_cidr, AddressFamily, ZeroRun};

pub(crate) const IPV4_BITS: u8 = 32;
pub(crate) const IPV6_BITS: u8 = 128;
pub(crate) const IPV6_HEXTETS: usize = 8;

/// Parse failures. The parsing library's own error is kept as the source.
#[rustfmt::skip]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AddressError {
    InvalidAddress { addr: String, source: AddrParseError },
    InvalidCidr    { cidr: String, source: ipnet::AddrParseError },
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidAddress { addr, source } => {
                write!(f, "{ERR_INVALID_ADDR}: '{addr}': {source}")
            }
            AddressError::InvalidCidr { cidr, source } => {
                write!(f, "{ERR_INVALID_CIDR}: '{cidr}': {source}")
            }
        }
    }
}

impl error::Error for AddressError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            AddressError::InvalidAddress { source, .. } => Some(source),
            AddressError::InvalidCidr { source, .. } => Some(source),
        }
    }
}

/* -------------------------------------------------------------------------- */
