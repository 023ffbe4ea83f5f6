use serde::{Deserialize, Serialize};

/// Place search hit as returned by `plan/search/place`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaceResponse {
    #[serde(rename = "title")]
    pub name: String,
    pub address: String,
    #[serde(rename = "roadAddress")]
    pub road_address: String,
    #[serde(rename = "mapy")]
    pub latitude: f64,
    #[serde(rename = "mapx")]
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub road_address: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Place {
    /// Address to show and submit: the road address when the provider has one.
    pub fn display_address(&self) -> &str {
        if self.road_address.is_empty() {
            &self.address
        } else {
            &self.road_address
        }
    }

    /// Address sent for the weather lookup: the lot address, falling back to
    /// the road address.
    pub fn weather_address(&self) -> &str {
        if self.address.is_empty() {
            &self.road_address
        } else {
            &self.address
        }
    }
}

impl From<PlaceResponse> for Place {
    fn from(response: PlaceResponse) -> Self {
        Self {
            name: response.name,
            address: response.address,
            road_address: response.road_address,
            latitude: response.latitude,
            longitude: response.longitude,
        }
    }
}
