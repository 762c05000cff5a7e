// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static reference data, transcribed verbatim. Region tables are sorted by code.

use super::private::ReservedRange;

#[rustfmt::skip]
pub(crate) static RESERVED_V4: &[ReservedRange] = &[
    ReservedRange { prefix: "0.0.0.0/8",        description: "RFC 1700 broadcast addresses" },
    ReservedRange { prefix: "10.0.0.0/8",       description: "RFC 1918 Private address space" },
    ReservedRange { prefix: "100.64.0.0/10",    description: "IANA Carrier Grade NAT" },
    ReservedRange { prefix: "100.64.0.0/10",    description: "RFC 6598 Carrier graded NAT" },
    ReservedRange { prefix: "127.0.0.0/8",      description: "Loopback addresses" },
    ReservedRange { prefix: "169.254.0.0/16",   description: "RFC 6890 Link Local address" },
    ReservedRange { prefix: "172.16.0.0/12",    description: "RFC 1918 Private address space" },
    ReservedRange { prefix: "192.0.0.0/24",     description: "RFC 5736 IANA IPv4 Special Purpose Address Registry" },
    ReservedRange { prefix: "192.0.2.0/24",     description: "RFC 5737 TEST-NET for internal use" },
    ReservedRange { prefix: "192.168.0.0/16",   description: "RFC 1918 Private address space" },
    ReservedRange { prefix: "192.88.99.0/24",   description: "RFC 3068 6to4 anycast relays" },
    ReservedRange { prefix: "198.18.0.0/15",    description: "RFC 2544 Testing of inter-network communications" },
    ReservedRange { prefix: "198.51.100.0/24",  description: "RFC 5737 TEST-NET-2 for internal use" },
    ReservedRange { prefix: "203.0.113.0/24",   description: "RFC 5737 TEST-NET-3 for internal use" },
    ReservedRange { prefix: "224.0.0.0/4",      description: "RFC 5771 Multicast Addresses" },
    ReservedRange { prefix: "240.0.0.0/4",      description: "RFC 6890 Reserved for future use" },
];

#[rustfmt::skip]
pub(crate) static RESERVED_V6: &[ReservedRange] = &[
    ReservedRange { prefix: "fd00::/8",   description: "RFC 4193 Unique local address" },
    ReservedRange { prefix: "fe80::/10",  description: "RFC 4291 Link Local address" },
    ReservedRange { prefix: "::1/128",    description: "Loopback addresses" },
];

/* ---------------------------------- */

pub(crate) static AWS_REGIONS: &[(&str, &str)] = &[
    ("af-south-1", "Africa (Cape Town)"),
    ("ap-east-1", "Asia Pacific (Hong Kong)"),
    ("ap-northeast-1", "Asia Pacific (Tokyo)"),
    ("ap-northeast-2", "Asia Pacific (Seoul)"),
    ("ap-northeast-3", "Asia Pacific (Osaka)"),
    ("ap-south-1", "Asia Pacific (Mumbai)"),
    ("ap-southeast-1", "Asia Pacific (Singapore)"),
    ("ap-southeast-2", "Asia Pacific (Sydney)"),
    ("ap-southeast-3", "Asia Pacific (Jakarta)"),
    ("ca-central-1", "Canada (Central)"),
    ("eu-central-1", "Europe (Frankfurt)"),
    ("eu-north-1", "Europe (Stockholm)"),
    ("eu-south-1", "Europe (Milan)"),
    ("eu-west-1", "Europe (Ireland)"),
    ("eu-west-2", "Europe (London)"),
    ("eu-west-3", "Europe (Paris)"),
    ("me-central-1", "Middle East (UAE)"),
    ("me-south-1", "Middle East (Bahrain)"),
    ("sa-east-1", "South America (S\u{00e3}o Paulo)"),
    ("us-east-1", "US East (N. Virginia)"),
    ("us-east-2", "US East (Ohio)"),
    ("us-west-1", "US West (N. California)"),
    ("us-west-2", "US West (Oregon)"),
];

pub(crate) static AZURE_REGIONS: &[(&str, &str)] = &[
    ("asiapacificeast", "Hong Kong"),
    ("asiapacificsoutheast", "Singapore"),
    ("australiacentral", "Canberra"),
    ("australiaeast", "New South Wales"),
    ("australiasoutheast", "Victoria"),
    ("brazilsouth", "S\u{00e3}o Paulo State"),
    ("canadacentral", "Toronto"),
    ("canadaeast", "Quebec City"),
    ("centralindia", "Pune"),
    ("chinaeast", "Shanghai"),
    ("chinaeast2", "Shanghai"),
    ("chinanorth", "Beijing"),
    ("chinanorth2", "Beijing"),
    ("chinanorth3", "Hebei"),
    ("europenorth", "Ireland"),
    ("europewest", "Netherlands"),
    ("francecentral", "Paris"),
    ("germanywestcentral", "Frankfurt"),
    ("japaneast", "Tokyo, Saitama"),
    ("japanwest", "Osaka"),
    ("koreacentral", "Seoul"),
    ("norwayeast", "Oslo"),
    ("qatarcentral", "Doha"),
    ("southafricanorth", "Johannesburg"),
    ("southcentralindia", "Hyderabad"),
    ("southindia", "Chennai"),
    ("swedencentral", "G\u{00e4}vle"),
    ("switzerlandnorth", "Z\u{00fc}rich"),
    ("uaenorth", "Dubai"),
    ("unitedkingdomsouth", "London"),
    ("unitedkingdomwest", "Cardiff"),
    ("uscentral", "Iowa"),
    ("usdodcentral", "Iowa"),
    ("usdodeast", "Virginia"),
    ("useast", "Virginia"),
    ("useast2", "Virginia"),
    ("usgovarizona", "Arizona"),
    ("usgovtexas", "Texas"),
    ("usgovvirginia", "Virginia"),
    ("usnorthcentral", "Illinois"),
    ("ussouthcentral", "Texas"),
    ("uswest", "California"),
    ("uswest2", "Washington"),
    ("uswest3", "Arizona"),
    ("uswestcentral", "Wyoming"),
];

pub(crate) static GOOGLE_REGIONS: &[(&str, &str)] = &[
    ("asia-east1", "Changhua County, Taiwan, APAC"),
    ("asia-east2", "Hong Kong, APAC"),
    ("asia-northeast1", "Tokyo, Japan, APAC"),
    ("asia-northeast2", "Osaka, Japan, APAC"),
    ("asia-northeast3", "Seoul, South Korea, APAC"),
    ("asia-south1", "Mumbai, India APAC"),
    ("asia-south2", "Delhi, India APAC"),
    ("asia-southeast1", "Jurong West, Singapore, APAC"),
    ("asia-southeast2", "Jakarta, Indonesia, APAC"),
    ("australia-southeast1", "Sydney, Australia, APAC"),
    ("australia-southeast2", "Melbourne, Australia, APAC"),
    ("europe-central2", "Warsaw, Poland, Europe"),
    ("europe-north1", "Hamina, Finland, Europe"),
    ("europe-southwest1", "Madrid, Spain, Europe"),
    ("europe-west1", "St. Ghislain, Belgium, Europe"),
    ("europe-west2", "London, England, Europe"),
    ("europe-west3", "Frankfurt, Germany Europe"),
    ("europe-west4", "Eemshaven, Netherlands, Europe"),
    ("europe-west6", "Zurich, Switzerland, Europe"),
    ("europe-west8", "Milan, Italy, Europe"),
    ("europe-west9", "Paris, France, Europe"),
    ("northamerica-northeast1", "Montr\u{00e9}al, Qu\u{00e9}bec, North America"),
    ("northamerica-northeast2", "Toronto, Ontario, North America"),
    ("southamerica-east1", "Osasco, S\u{00e3}o Paulo, Brazil, South America"),
    ("southamerica-west1", "Santiago, Chile, South America"),
    ("us-central1", "Council Bluffs, Iowa, North America"),
    ("us-east1", "Moncks Corner, South Carolina, North America"),
    ("us-east4", "Ashburn, Virginia, North America"),
    ("us-east5", "Columbus, Ohio, North America"),
    ("us-south1", "Dallas, Texas, North America"),
    ("us-west1", "The Dalles, Oregon, North America"),
    ("us-west2", "Los Angeles, California, North America"),
    ("us-west3", "Salt Lake City, Utah, North America"),
    ("us-west4", "Las Vegas, Nevada, North America"),
];
