// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Classify free-form input and describe it for display.

use crate::{
    iptools::{
        address_to_bit_string, cidr_to_prefix_bits, net_address_count, net_to_address_range,
        normalize_address, parse_address, parse_cidr, AddressError, AddressFamily,
    },
    tables::{find_region, find_reserved_ip, CloudProvider, ReservedMatch},
};
use ipnet::IpNet;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::{fmt, net::IpAddr};
use tracing::debug;

static NOT_RECOGNIZED: &str = "not an address, CIDR, or known region code";

// Compiled once per program execution.
lazy_static! {
    static ref ADDRESS_RE: Regex =
        Regex::new(r"^(?:[0-9]{1,3}(?:\.[0-9]{1,3}){3}|[0-9A-Fa-f]*:[0-9A-Fa-f:.]*)$").unwrap();
    static ref CIDR_RE: Regex =
        Regex::new(r"^(?:[0-9]{1,3}(?:\.[0-9]{1,3}){3}|[0-9A-Fa-f]*:[0-9A-Fa-f:.]*)/[0-9]{1,3}$").unwrap();
    static ref REGION_RE: Regex = Regex::new(r"^[a-z][a-z0-9-]*[a-z0-9]$").unwrap();
}

/// What a piece of user input looks like. Nothing is validated yet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Query {
    Address(String),
    Cidr(String),
    Region(String),
    Unknown(String),
}

impl Query {
    pub fn classify(text: impl AsRef<str>) -> Self {
        let text: &str = text.as_ref().trim();
        let query: Query = if CIDR_RE.is_match(text) {
            Query::Cidr(text.into())
        } else if ADDRESS_RE.is_match(text) {
            Query::Address(text.into())
        } else if REGION_RE.is_match(&text.to_lowercase()) {
            Query::Region(text.to_lowercase())
        } else {
            Query::Unknown(text.into())
        };
        debug!(?query, "classified input");
        query
    }

    pub fn input(&self) -> &str {
        match self {
            Query::Address(s) | Query::Cidr(s) | Query::Region(s) | Query::Unknown(s) => s,
        }
    }
}

/* -------------------------------------------------------------------------- */

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RegionMatch {
    pub provider: CloudProvider,
    pub location: &'static str,
}

/// Everything known about one [Query], ready to be rendered.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Address {
        input: String,
        family: AddressFamily,
        normalized: String,
        bits: String,
        reserved: Vec<ReservedMatch>,
    },
    Cidr {
        input: String,
        family: AddressFamily,
        first: String,
        last: String,
        count: u128,
        prefix_bits: String,
        reserved: Vec<ReservedMatch>,
    },
    Region {
        input: String,
        matches: Vec<RegionMatch>,
    },
    Unknown {
        input: String,
        note: &'static str,
    },
}

/**
Build a [Report] for a classified query.

### Errors
- the query looked like an address or CIDR but did not parse

A region code that is in no catalog is not an error: it gives an empty
`matches` list.
*/
pub fn describe(query: &Query) -> Result<Report, AddressError> {
    match query {
        Query::Address(text) => {
            let ip: IpAddr = parse_address(text)?;
            Ok(Report::Address {
                input: text.clone(),
                family: AddressFamily::of(&ip),
                normalized: normalize_address(&ip),
                bits: address_to_bit_string(text)?,
                reserved: find_reserved_ip(&ip),
            })
        }
        Query::Cidr(text) => {
            let net: IpNet = parse_cidr(text)?;
            let [first, last] = net_to_address_range(&net);
            Ok(Report::Cidr {
                input: text.clone(),
                family: AddressFamily::of(&net.addr()),
                first,
                last,
                count: net_address_count(&net),
                prefix_bits: cidr_to_prefix_bits(text)?,
                reserved: find_reserved_ip(&net.network()),
            })
        }
        Query::Region(code) => Ok(Report::Region {
            input: code.clone(),
            matches: find_region(code)
                .into_iter()
                .map(|(provider, location)| RegionMatch { provider, location })
                .collect(),
        }),
        Query::Unknown(text) => Ok(Report::Unknown {
            input: text.clone(),
            note: NOT_RECOGNIZED,
        }),
    }
}

fn fmt_reserved(f: &mut fmt::Formatter<'_>, reserved: &[ReservedMatch]) -> fmt::Result {
    for r in reserved {
        writeln!(f, "  reserved: {} ({} - {}) {}", r.prefix, r.first, r.last, r.description)?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Address { input, family, normalized, bits, reserved } => {
                writeln!(f, "{input} ({family})")?;
                writeln!(f, "  address:  {normalized}")?;
                writeln!(f, "  bits:     {bits}")?;
                fmt_reserved(f, reserved)
            }
            Report::Cidr { input, family, first, last, count, prefix_bits, reserved } => {
                writeln!(f, "{input} ({family})")?;
                writeln!(f, "  first:    {first}")?;
                writeln!(f, "  last:     {last}")?;
                writeln!(f, "  count:    {count}")?;
                writeln!(f, "  prefix:   {prefix_bits}")?;
                fmt_reserved(f, reserved)
            }
            Report::Region { input, matches } => {
                writeln!(f, "{input} (region)")?;
                if matches.is_empty() {
                    writeln!(f, "  not found")?;
                }
                for m in matches {
                    writeln!(f, "  {}: {}", m.provider, m.location)?;
                }
                Ok(())
            }
            Report::Unknown { input, note } => writeln!(f, "{input}: {note}"),
        }
    }
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    #[test]
    fn test_classify() {
        let tests: Vec<(&str, Query)> = vec![
            ("10.0.0.1",            Query::Address("10.0.0.1".into())),
            ("fe80::1",             Query::Address("fe80::1".into())),
            ("::ffff:10.0.0.1",     Query::Address("::ffff:10.0.0.1".into())),
            ("10.0.0.0/8",          Query::Cidr("10.0.0.0/8".into())),
            (" 2001:db8::/32 ",     Query::Cidr("2001:db8::/32".into())),
            ("us-east-1",           Query::Region("us-east-1".into())),
            ("SwedenCentral",       Query::Region("swedencentral".into())),
            ("example.com",         Query::Unknown("example.com".into())),
            ("",                    Query::Unknown("".into())),
        ];
        for (input, expected) in tests {
            assert_eq!(Query::classify(input), expected, "Failed: '{input}'");
        }
    }

    #[test]
    fn test_describe_address() {
        let report: Report = describe(&Query::classify("192.168.10.20")).unwrap();
        match report {
            Report::Address { family, normalized, bits, reserved, .. } => {
                assert_eq!(family, AddressFamily::V4);
                assert_eq!(normalized, "192.168.10.20");
                assert_eq!(bits.len(), 32);
                assert_eq!(reserved.len(), 1);
                assert_eq!(reserved[0].prefix, "192.168.0.0/16");
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn test_describe_cidr() {
        let report: Report = describe(&Query::classify("fd00:0:0:1::/64")).unwrap();
        match report {
            Report::Cidr { family, first, last, count, prefix_bits, reserved, .. } => {
                assert_eq!(family, AddressFamily::V6);
                // the first zero run wins, even when a later one is longer
                assert_eq!(first, "fd00::1:0:0:0:0");
                assert_eq!(last, "fd00::1:ffff:ffff:ffff:ffff");
                assert_eq!(count, 1u128 << 64);
                assert_eq!(prefix_bits.len(), 64);
                assert_eq!(reserved[0].description, "RFC 4193 Unique local address");
            }
            other => panic!("unexpected report: {other:?}"),
        }
    }

    #[test]
    fn test_describe_region() {
        let report: Report = describe(&Query::classify("eu-north-1")).unwrap();
        assert_eq!(
            report,
            Report::Region {
                input: "eu-north-1".into(),
                matches: vec![RegionMatch {
                    provider: CloudProvider::Aws,
                    location: "Europe (Stockholm)",
                }],
            }
        );
        assert!(report.to_string().contains("AWS: Europe (Stockholm)"));
    }

    #[test]
    fn test_describe_errors() {
        assert!(describe(&Query::classify("300.1.1.1")).is_err());
        assert!(describe(&Query::classify("10.0.0.0/40")).is_err());
        assert!(describe(&Query::classify("1:2:3")).is_err());
    }

    #[test]
    fn test_describe_unknown() {
        let report: Report = describe(&Query::classify("example.com")).unwrap();
        assert_eq!(report.to_string(), format!("example.com: {NOT_RECOGNIZED}\n"));
    }

    #[test]
    fn test_report_json() {
        let report: Report = describe(&Query::classify("::1")).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "address");
        assert_eq!(json["family"], "v6");
        assert_eq!(json["normalized"], "::1");
        assert_eq!(json["reserved"][0]["prefix"], "::1/128");
    }
}
