// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::data::{RESERVED_V4, RESERVED_V6};
use crate::iptools::{
    net_to_address_range, parse_address, parse_cidr, AddressError, AddressFamily,
};
use ipnet::IpNet;
use lazy_static::lazy_static;
use serde::Serialize;
use std::net::IpAddr;
use tracing::{debug, error};

/// A well-known private or otherwise reserved network.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ReservedRange {
    /// CIDR, f.ex. `10.0.0.0/8`
    pub prefix: &'static str,
    pub description: &'static str,
}

/// A [ReservedRange] that contains a looked up address.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ReservedMatch {
    pub prefix: &'static str,
    pub description: &'static str,
    /// first address of the range, normalized
    pub first: String,
    /// last address of the range, normalized
    pub last: String,
}

// Parsed once per program execution.
lazy_static! {
    static ref PARSED_V4: Vec<(IpNet, &'static ReservedRange)> = parse_table(RESERVED_V4);
    static ref PARSED_V6: Vec<(IpNet, &'static ReservedRange)> = parse_table(RESERVED_V6);
}

fn parse_table(table: &'static [ReservedRange]) -> Vec<(IpNet, &'static ReservedRange)> {
    table
        .iter()
        .filter_map(|r: &'static ReservedRange| match parse_cidr(r.prefix) {
            Ok(net) => Some((net, r)),
            Err(e) => {
                error!("skipping reserved range: {e}");
                None
            }
        })
        .collect()
}

/// The reserved ranges of one family, in table order.
pub fn reserved_ranges(fam: AddressFamily) -> &'static [ReservedRange] {
    match fam {
        AddressFamily::V4 => RESERVED_V4,
        AddressFamily::V6 => RESERVED_V6,
    }
}

/**
Find every reserved range that contains the given address.

Ranges are returned in table order. An address may match more than one
entry (f.ex. `100.64.0.0/10` is listed twice), and all of them are returned.
*/
pub fn find_reserved(addr: impl AsRef<str>) -> Result<Vec<ReservedMatch>, AddressError> {
    let ip: IpAddr = parse_address(addr)?;
    Ok(find_reserved_ip(&ip))
}

/// Same as [find_reserved], for an already parsed address.
pub fn find_reserved_ip(ip: &IpAddr) -> Vec<ReservedMatch> {
    let table: &Vec<(IpNet, &'static ReservedRange)> = match AddressFamily::of(ip) {
        AddressFamily::V4 => &PARSED_V4,
        AddressFamily::V6 => &PARSED_V6,
    };

    let found: Vec<ReservedMatch> = table
        .iter()
        .filter(|(net, _)| net.contains(ip))
        .map(|(net, r)| {
            let [first, last] = net_to_address_range(net);
            ReservedMatch {
                prefix: r.prefix,
                description: r.description,
                first,
                last,
            }
        })
        .collect();

    debug!(%ip, matches = found.len(), "reserved range lookup");
    found
}

/* -------------------------------------------------------------------------- */
