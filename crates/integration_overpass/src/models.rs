//! Overpass response models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
    /// OSM element id
    pub id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Element {
    pub id: u64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub center: Option<Center>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Center {
    pub lat: f64,
    pub lon: f64,
}

impl Element {
    /// Own position for nodes, computed center for ways and relations
    fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => self.center.as_ref().map(|c| (c.lat, c.lon)),
        }
    }

    /// Convert to a [`Poi`], naming unnamed elements after `category`
    pub fn into_poi(self, category: &str) -> Option<Poi> {
        let (latitude, longitude) = self.position()?;
        let name = self
            .tags
            .get("name")
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| category.to_string());

        Some(Poi {
            id: self.id,
            name,
            latitude,
            longitude,
        })
    }
}

impl ApiResponse {
    pub fn into_pois(self, category: &str) -> Vec<Poi> {
        self.elements
            .into_iter()
            .filter_map(|element| element.into_poi(category))
            .collect()
    }
}
