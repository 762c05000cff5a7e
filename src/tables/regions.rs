// Copyright (c) 2026 Mikko Tanner. All rights reserved.
// Licensed under the MIT License or the Apache License, Version 2.0.
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::data::{AWS_REGIONS, AZURE_REGIONS, GOOGLE_REGIONS};
use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashMap, fmt, str::FromStr};

/// Cloud provider with a region catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CloudProvider {
    Aws,
    Azure,
    Google,
}

impl CloudProvider {
    pub const ALL: [CloudProvider; 3] = [CloudProvider::Aws, CloudProvider::Azure, CloudProvider::Google];

    /// Human-readable provider name.
    pub fn name(&self) -> &'static str {
        match self {
            CloudProvider::Aws => "AWS",
            CloudProvider::Azure => "Azure",
            CloudProvider::Google => "Google",
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            CloudProvider::Aws => AWS_REGIONS,
            CloudProvider::Azure => AZURE_REGIONS,
            CloudProvider::Google => GOOGLE_REGIONS,
        }
    }
}

impl fmt::Display for CloudProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CloudProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aws" | "amazon" => Ok(CloudProvider::Aws),
            "azure" | "microsoft" => Ok(CloudProvider::Azure),
            "google" | "gcp" => Ok(CloudProvider::Google),
            _ => Err(format!("unknown cloud provider: '{s}'")),
        }
    }
}

// Lazily evaluated lookup maps, generated only once per program execution.
lazy_static! {
    static ref CATALOGS: HashMap<CloudProvider, HashMap<&'static str, &'static str>> = {
        let mut m = HashMap::new();
        for p in CloudProvider::ALL {
            m.insert(p, p.table().iter().copied().collect());
        }
        m
    };
}

/* -------------------------------------------------------------------------- */

/// Location of a region, f.ex. `(Aws, "eu-west-1")` gives `"Europe (Ireland)"`.
pub fn region_location(provider: CloudProvider, code: impl AsRef<str>) -> Option<&'static str> {
    CATALOGS
        .get(&provider)
        .and_then(|regions| regions.get(code.as_ref().trim()))
        .copied()
}

/// All `(code, location)` pairs of one provider, sorted by code.
pub fn regions(provider: CloudProvider) -> Vec<(&'static str, &'static str)> {
    let mut out: Vec<(&'static str, &'static str)> = provider.table().to_vec();
    out.sort_unstable_by_key(|&(code, _)| code);
    out
}

/// Look a region code up in every catalog. Codes do not overlap today, but nothing guarantees that.
pub fn find_region(code: impl AsRef<str>) -> Vec<(CloudProvider, &'static str)> {
    CloudProvider::ALL
        .iter()
        .filter_map(|&p| region_location(p, code.as_ref()).map(|loc| (p, loc)))
        .collect()
}

/* -------------------------------------------------------------------------- */
