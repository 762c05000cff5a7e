// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{strings::*, AddressError, IPV4_BITS, IPV6_BITS};
use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use serde::Serialize;
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};
use tracing::debug;

/// IP address family
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /**
    Decide the family of an address or CIDR from its text form.

    Anything containing a colon is IPv6, everything else is IPv4. This is
    only a dispatch decision: the family-specific parser still has the
    final say on whether the text is valid.
    */
    pub fn detect(text: impl AsRef<str>) -> Self {
        match text.as_ref().contains(COLON) {
            true => AddressFamily::V6,
            false => AddressFamily::V4,
        }
    }

    /// Family of an already parsed address.
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }

    /// Address width in bits: **v4**: 32, **v6**: 128
    pub fn bits(&self) -> u8 {
        match self {
            AddressFamily::V4 => IPV4_BITS,
            AddressFamily::V6 => IPV6_BITS,
        }
    }

    pub fn is_v6(&self) -> bool {
        matches!(self, AddressFamily::V6)
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::V4 => f.write_str(FAM_V4),
            AddressFamily::V6 => f.write_str(FAM_V6),
        }
    }
}

/* ---------------------------------- */

/**
Which run of all-zero hextets gets replaced by `::` when an IPv6 address
is compressed.

- `First`: the first run of two or more zero hextets. This is what the
  display tables have always shown, and it is the default.
- `Longest`: the longest run of two or more zero hextets, leftmost on a
  tie (RFC 5952 section 4.2.3).

The two only disagree when a later zero run is longer than the first one,
f.ex. `1:0:0:2:0:0:0:3` is `1::2:0:0:0:3` with `First` but `1:0:0:2::3`
with `Longest`.
*/
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ZeroRun {
    #[default]
    First,
    Longest,
}

/* -------------------------------------------------------------------------- */

/// Parse a plain address (no prefix), picking the parser by [AddressFamily::detect].
pub fn parse_address(text: impl AsRef<str>) -> Result<IpAddr, AddressError> {
    let text: &str = text.as_ref().trim();
    let fam: AddressFamily = AddressFamily::detect(text);
    debug!(addr = text, %fam, "parsing address");

    let parsed = match fam {
        AddressFamily::V4 => text.parse::<Ipv4Addr>().map(IpAddr::V4),
        AddressFamily::V6 => text.parse::<Ipv6Addr>().map(IpAddr::V6),
    };
    parsed.map_err(|source| AddressError::InvalidAddress {
        addr: text.into(),
        source,
    })
}

/**
Parse a CIDR (`address/prefix`), picking the parser by [AddressFamily::detect].

A bare address without a prefix is taken as a single host (`/32` or `/128`).
*/
pub fn parse_cidr(text: impl AsRef<str>) -> Result<IpNet, AddressError> {
    let text: &str = text.as_ref().trim();
    if !text.contains(SLASH) {
        return parse_address(text).map(IpNet::from);
    }

    let fam: AddressFamily = AddressFamily::detect(text);
    debug!(cidr = text, %fam, "parsing CIDR");

    let parsed = match fam {
        AddressFamily::V4 => text.parse::<Ipv4Net>().map(IpNet::V4),
        AddressFamily::V6 => text.parse::<Ipv6Net>().map(IpNet::V6),
    };
    parsed.map_err(|source| AddressError::InvalidCidr {
        cidr: text.into(),
        source,
    })
}

/**
Fully expanded text form of an address.

IPv4 is plain dotted decimal, IPv6 is all 8 hextets with 4 hex digits each,
f.ex. `fe80:0000:0000:0000:0000:0000:0000:0001`.
*/
pub fn expand_address(addr: &IpAddr) -> String {
    match addr {
        IpAddr::V4(a) => a.to_string(),
        IpAddr::V6(a) => a
            .segments()
            .iter()
            .map(|h: &u16| format!("{h:04x}"))
            .collect::<Vec<String>>()
            .join(COLON),
    }
}

/// Zero-padded base-2 rendering: 32 chars for IPv4, 128 for IPv6.
pub(crate) fn to_bit_string(addr: &IpAddr) -> String {
    match addr {
        IpAddr::V4(a) => format!("{:032b}", u32::from(*a)),
        IpAddr::V6(a) => format!("{:0128b}", u128::from(*a)),
    }
}

/* -------------------------------------------------------------------------- */
