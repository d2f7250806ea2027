// Copyright 2025 the Donut Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mock dashboard data, as a data-fetching layer would hand it over.

use anyhow::{Context, anyhow, bail};
use donut_layout::CategoryWeight;
use peniko::color::{Srgb, parse_color};
use serde::Deserialize;

/// Embedded fallback data.
pub(crate) const DEFAULT_DASHBOARD: &str = include_str!("../data/dashboard.json");

/// One chart's worth of records.
#[derive(Debug, Deserialize)]
pub(crate) struct Dashboard {
    pub(crate) title: String,
    pub(crate) radius: f64,
    #[serde(default = "default_thickness")]
    pub(crate) thickness: f64,
    #[serde(default)]
    pub(crate) precision: Option<usize>,
    pub(crate) categories: Vec<CategoryRecord>,
}

/// A category as stored: either a raw `value` or a pre-aggregated `percentage`.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryRecord {
    name: String,
    #[serde(default)]
    value: Option<f64>,
    #[serde(default)]
    percentage: Option<f64>,
    color: String,
}

fn default_thickness() -> f64 {
    24.0
}

impl Dashboard {
    pub(crate) fn from_json(text: &str) -> anyhow::Result<Self> {
        serde_json::from_str(text).context("parsing dashboard json")
    }

    pub(crate) fn weights(&self) -> anyhow::Result<Vec<CategoryWeight>> {
        self.categories.iter().map(CategoryRecord::weight).collect()
    }
}

impl CategoryRecord {
    fn weight(&self) -> anyhow::Result<CategoryWeight> {
        let color = parse_color(&self.color)
            .map_err(|err| anyhow!("category {:?}: bad color {:?}: {err:?}", self.name, self.color))?
            .to_alpha_color::<Srgb>();
        match (self.value, self.percentage) {
            (Some(v), None) => Ok(CategoryWeight::value(self.name.clone(), v, color)),
            (None, Some(p)) => Ok(CategoryWeight::percentage(self.name.clone(), p, color)),
            _ => bail!(
                "category {:?}: expected exactly one of `value` or `percentage`",
                self.name
            ),
        }
    }
}
