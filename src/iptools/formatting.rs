// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    strings::*,
    structs::{expand_address, ZeroRun},
    IPV6_HEXTETS,
};
use std::net::IpAddr;
use tracing::trace;

/**
Normalize an address for display.

- IPv4: canonical dotted decimal, unchanged.
- IPv6: leading zeros stripped from every hextet (`0000` becomes `0`) and
  the first run of two or more all-zero hextets collapsed into `::`.

See [ZeroRun] for how this differs from RFC 5952 compression, and
[normalize_address_with] to pick the other behavior.
*/
pub fn normalize_address(addr: &IpAddr) -> String {
    normalize_address_with(addr, ZeroRun::First)
}

/// Like [normalize_address], with an explicit zero-run policy for IPv6.
pub fn normalize_address_with(addr: &IpAddr, run: ZeroRun) -> String {
    match addr {
        IpAddr::V4(a) => a.to_string(),
        IpAddr::V6(_) => {
            let expanded: String = expand_address(addr);
            let hextets: Vec<&str> = expanded
                .split(COLON)
                .map(strip_leading_zeros)
                .collect();
            debug_assert_eq!(hextets.len(), IPV6_HEXTETS);
            trace!(%expanded, stripped = %hextets.join(COLON), "normalizing IPv6");
            compress_hextets(&hextets, run)
        }
    }
}

/// `"0db8"` -> `"db8"`, `"0000"` -> `"0"`. Never returns an empty string.
#[inline]
fn strip_leading_zeros(hextet: &str) -> &str {
    let stripped: &str = hextet.trim_start_matches('0');
    match stripped.is_empty() {
        true => &hextet[hextet.len().saturating_sub(1)..],
        false => stripped,
    }
}

/**
Join stripped hextets with colons, replacing one run of >= 2 zero hextets
with `::`. With no such run, this is a plain join.
*/
fn compress_hextets(hextets: &[&str], run: ZeroRun) -> String {
    let (beg, len) = match find_zero_run(hextets, run) {
        Some(found) => found,
        None => return hextets.join(COLON),
    };

    let head: String = hextets[..beg].join(COLON);
    let tail: String = hextets[beg + len..].join(COLON);
    format!("{head}{DOUBLE_COLON}{tail}")
}

/**
Locate the zero run to collapse as `(start index, length)`.

Only runs of two or more hextets qualify; a lone `0` is left as is.
*/
fn find_zero_run(hextets: &[&str], run: ZeroRun) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut i: usize = 0;

    while i < hextets.len() {
        if hextets[i] != "0" {
            i += 1;
            continue;
        }

        let beg: usize = i;
        while i < hextets.len() && hextets[i] == "0" {
            i += 1;
        }
        let len: usize = i - beg;
        if len < 2 {
            continue;
        }

        match run {
            ZeroRun::First => return Some((beg, len)),
            ZeroRun::Longest => {
                // strictly longer, so ties keep the leftmost run
                if best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((beg, len));
                }
            }
        }
    }
    best
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    fn norm(s: &str) -> String {
        normalize_address(&s.parse::<IpAddr>().unwrap())
    }

    fn norm_longest(s: &str) -> String {
        normalize_address_with(&s.parse::<IpAddr>().unwrap(), ZeroRun::Longest)
    }

    #[test]
    fn test_v4_unchanged() {
        let tests: [&str; 6] = [
            "0.0.0.0",
            "10.0.0.1",
            "127.0.0.1",
            "192.168.1.255",
            "203.0.113.7",
            "255.255.255.255",
        ];
        for s in tests {
            assert_eq!(norm(s), s, "Failed: '{s}'");
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_v6_first_run() {
        let tests: Vec<&str> = vec![
            // input                                    // expected
            "0:0:0:0:0:0:0:0",                          "::",
            "0:0:0:0:0:0:0:1",                          "::1",
            "1:0:0:0:0:0:0:0",                          "1::",
            "fe80:0000:0000:0000:0000:0000:0000:0001",  "fe80::1",
            "2001:0db8:0000:0000:0001:0000:0000:0001",  "2001:db8::1:0:0:1",
            "2001:db8:0:1:0:0:0:1",                     "2001:db8:0:1::1",
            "1:0:0:2:0:0:0:3",                          "1::2:0:0:0:3",
            "2001:db8:0:0a0:0:0:0:1",                   "2001:db8:0:a0::1",
            "2001:db8:1:2:3:4:5:6",                     "2001:db8:1:2:3:4:5:6",
            "fd00:0:1:0:2:0:3:0",                       "fd00:0:1:0:2:0:3:0",
            "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",  "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
        ];

        for i in (0..tests.len()).step_by(2) {
            let input: &str = tests[i];
            let expected: &str = tests[i + 1];
            assert_eq!(norm(input), expected, "Failed: '{input}'");
        }
    }

    #[test]
    fn test_v6_no_redundant_zeros() {
        let out: String = norm("0001:0020:0300:4000:0000:0000:00ab:000c");
        assert_eq!(out, "1:20:300:4000::ab:c");
        for hextet in out.split(COLON).filter(|h| !h.is_empty()) {
            assert!(hextet == "0" || !hextet.starts_with('0'), "Failed: '{hextet}'");
        }
    }

    #[test]
    fn test_v6_longest_run() {
        assert_eq!(norm_longest("1:0:0:2:0:0:0:3"), "1:0:0:2::3");
        assert_eq!(norm_longest("1:0:0:2:3:0:0:4"), "1::2:3:0:0:4");
        assert_eq!(norm_longest("1:0:2:3:4:5:6:7"), "1:0:2:3:4:5:6:7");
        assert_eq!(norm_longest("::"), "::");
    }

    #[test]
    fn test_longest_matches_std_display() {
        let tests: [&str; 6] = [
            "1:0:0:2:0:0:0:3",
            "2001:db8::1:0:0:1",
            "fe80::1",
            "::1",
            "1::",
            "2001:db8:0:1:1:1:1:1",
        ];
        for s in tests {
            let std_form: String = s.parse::<Ipv6Addr>().unwrap().to_string();
            assert_eq!(norm_longest(s), std_form, "Failed: '{s}'");
        }
    }

    #[test]
    fn test_idempotent() {
        let tests: [&str; 5] = [
            "2001:0db8:0000:0000:0001:0000:0000:0001",
            "1:0:0:2:0:0:0:3",
            "0:0:0:0:0:0:0:0",
            "fe80::0000:1",
            "10.20.30.40",
        ];
        for s in tests {
            let once: String = norm(s);
            let twice: String = norm(&once);
            assert_eq!(once, twice, "Failed: '{s}'");
        }
    }

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(strip_leading_zeros("0000"), "0");
        assert_eq!(strip_leading_zeros("0db8"), "db8");
        assert_eq!(strip_leading_zeros("ffff"), "ffff");
        assert_eq!(strip_leading_zeros("0a00"), "a00");
    }
}
