// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{
    formatting::normalize_address,
    strings::SLASH,
    structs::{parse_address, parse_cidr, to_bit_string, AddressFamily},
    AddressError, IPV6_BITS,
};
use ipnet::IpNet;
use std::net::IpAddr;

/**
First and last address of a CIDR, normalized for display.

Supported formats:
- IPv4: 192.168.1.0/24
- IPv6: 2001:db8::/32

Host bits in the input are ignored, f.ex. `192.168.1.7/24` gives the
boundaries of `192.168.1.0/24`. A bare address counts as a single host,
so `10.0.0.1` gives `["10.0.0.1", "10.0.0.1"]`.

### Returns
- `[first, last]`, both formatted with [normalize_address].
*/
pub fn cidr_to_address_range(cidr: impl AsRef<str>) -> Result<[String; 2], AddressError> {
    let net: IpNet = parse_cidr(cidr)?;
    Ok(net_to_address_range(&net))
}

/// Display boundaries of an already parsed network.
pub(crate) fn net_to_address_range(net: &IpNet) -> [String; 2] {
    [
        normalize_address(&net.network()),
        normalize_address(&net.broadcast()),
    ]
}

/**
Render an address as a zero-padded base-2 string.

The result is always 32 characters for IPv4 and 128 for IPv6. A trailing
`/prefix` is validated and then ignored: `10.1.2.3/8` renders `10.1.2.3`,
not the network address.
*/
pub fn address_to_bit_string(addr: impl AsRef<str>) -> Result<String, AddressError> {
    let addr: &str = addr.as_ref();
    let ip: IpAddr = match addr.contains(SLASH) {
        true => parse_cidr(addr)?.addr(),
        false => parse_address(addr)?,
    };
    Ok(to_bit_string(&ip))
}

/**
The network bits of a CIDR: the bit string of its network address,
cut to the prefix length.

`10.0.0.0/8` gives `00001010`, and a `/0` gives an empty string.
*/
pub fn cidr_to_prefix_bits(cidr: impl AsRef<str>) -> Result<String, AddressError> {
    let net: IpNet = parse_cidr(cidr)?;
    let mut bits: String = to_bit_string(&net.network());
    bits.truncate(net.prefix_len() as usize);
    Ok(bits)
}

/// Number of addresses in a CIDR. Cannot be an [usize] due to IPv6. Saturating.
pub fn cidr_address_count(cidr: impl AsRef<str>) -> Result<u128, AddressError> {
    let net: IpNet = parse_cidr(cidr)?;
    Ok(net_address_count(&net))
}

pub(crate) fn net_address_count(net: &IpNet) -> u128 {
    let fam: AddressFamily = AddressFamily::of(&net.addr());
    let host_bits: u8 = fam.bits() - net.prefix_len();

    // 2^128 does not fit in u128
    if host_bits == IPV6_BITS {
        return u128::MAX;
    }
    1u128 << host_bits
}

/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    const CIDR_V4: &str = "192.168.1.0/24";
    const CIDR_V4_HOST: &str = "192.168.1.77/24";
    const CIDR_V4_SINGLE: &str = "10.0.0.1/32";
    const CIDR_V6_LOOP: &str = "::1/128";
    const CIDR_V6_LL: &str = "fe80::/10";
    const CIDR_V6_ULA: &str = "fd00::/8";

    #[test]
    fn test_range_v4() {
        let range: [String; 2] = cidr_to_address_range(CIDR_V4).unwrap();
        assert_eq!(range, ["192.168.1.0", "192.168.1.255"]);
    }

    #[test]
    fn test_range_v4_host_bits() {
        let range: [String; 2] = cidr_to_address_range(CIDR_V4_HOST).unwrap();
        assert_eq!(range, ["192.168.1.0", "192.168.1.255"]);
    }

    #[test]
    fn test_range_single() {
        let range: [String; 2] = cidr_to_address_range(CIDR_V4_SINGLE).unwrap();
        assert_eq!(range, ["10.0.0.1", "10.0.0.1"]);
        let range: [String; 2] = cidr_to_address_range(CIDR_V6_LOOP).unwrap();
        assert_eq!(range, ["::1", "::1"]);
    }

    #[test]
    fn test_range_v6() {
        let range: [String; 2] = cidr_to_address_range(CIDR_V6_LL).unwrap();
        assert_eq!(range, ["fe80::", "febf:ffff:ffff:ffff:ffff:ffff:ffff:ffff"]);
        let range: [String; 2] = cidr_to_address_range(CIDR_V6_ULA).unwrap();
        assert_eq!(range, ["fd00::", "fdff:ffff:ffff:ffff:ffff:ffff:ffff:ffff"]);
        let range: [String; 2] = cidr_to_address_range("2001:db8::/64").unwrap();
        assert_eq!(range, ["2001:db8::", "2001:db8::ffff:ffff:ffff:ffff"]);
    }

    #[test]
    fn test_range_bare_address() {
        let range: [String; 2] = cidr_to_address_range("192.168.1.0").unwrap();
        assert_eq!(range, ["192.168.1.0", "192.168.1.0"]);
        let range: [String; 2] = cidr_to_address_range("fe80::1").unwrap();
        assert_eq!(range, ["fe80::1", "fe80::1"]);
        assert_eq!(cidr_address_count("fe80::1").unwrap(), 1);
        assert!(cidr_to_address_range("192.168.1.256").is_err());
    }

    #[test]
    fn test_range_errors() {
        assert!(cidr_to_address_range("192.168.1.0/33").is_err());
        assert!(cidr_to_address_range("fe80::/abc").is_err());
        assert!(cidr_to_address_range("not a cidr").is_err());
    }

    #[test]
    fn test_bit_string_v4() {
        let bits: String = address_to_bit_string("255.255.255.0").unwrap();
        assert_eq!(bits, "11111111111111111111111100000000");
    }

    #[test]
    fn test_bit_string_v6() {
        let bits: String = address_to_bit_string("fe80::1").unwrap();
        assert_eq!(bits.len(), 128);
        assert!(bits.chars().all(|c| c == '0' || c == '1'));
        assert!(bits.starts_with("1111111010"));
        assert!(bits.ends_with("0001"));
        assert_eq!(bits.matches('1').count(), 9);
    }

    #[test]
    fn test_bit_string_errors() {
        assert!(address_to_bit_string("10.0.0.0/33").is_err());
        assert!(address_to_bit_string("fe80::1::2").is_err());
        assert!(address_to_bit_string("fe80::1/abc").is_err());
    }

    #[test]
    fn test_bit_string_ignores_prefix() {
        let with_prefix: String = address_to_bit_string("10.1.2.3/8").unwrap();
        assert_eq!(with_prefix, address_to_bit_string("10.1.2.3").unwrap());
        assert_eq!(with_prefix, "00001010000000010000001000000011");
        let v6: String = address_to_bit_string("fe80::1/64").unwrap();
        assert_eq!(v6, address_to_bit_string("fe80::1").unwrap());
    }

    #[test]
    fn test_prefix_bits() {
        assert_eq!(cidr_to_prefix_bits("10.0.0.0/8").unwrap(), "00001010");
        assert_eq!(cidr_to_prefix_bits("10.9.9.9/8").unwrap(), "00001010");
        assert_eq!(cidr_to_prefix_bits("fe80::/10").unwrap(), "1111111010");
        assert_eq!(cidr_to_prefix_bits("0.0.0.0/0").unwrap(), "");
    }

    #[test]
    fn test_address_count() {
        assert_eq!(cidr_address_count(CIDR_V4).unwrap(), 256);
        assert_eq!(cidr_address_count(CIDR_V4_SINGLE).unwrap(), 1);
        assert_eq!(cidr_address_count("0.0.0.0/0").unwrap(), 1u128 << 32);
        assert_eq!(cidr_address_count(CIDR_V6_LOOP).unwrap(), 1);
        assert_eq!(cidr_address_count("::/0").unwrap(), u128::MAX);
        assert_eq!(cidr_address_count("2001:db8::/64").unwrap(), 1u128 << 64);
    }
}
