//! Static marketing catalog for the retailer: services, products, brand
//! partners and testimonials. The seeder loads these into the content store
//! so the content-managed pages have data to render.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Icon shown next to a catalog entry. A closed enum instead of a
/// string-keyed lookup: every valid name is statically checkable and
/// an unknown name is a deserialization error, not a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogIcon {
    Desktop,
    Laptop,
    Server,
    Network,
    Printer,
    Headset,
    Contract,
    Camera,
    Shield,
    Database,
    Consultant,
    Monitor,
    Storage,
    Memory,
    Cable,
    Keyboard,
    Wifi,
}

impl std::fmt::Display for CatalogIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CatalogIcon::Desktop => "desktop",
            CatalogIcon::Laptop => "laptop",
            CatalogIcon::Server => "server",
            CatalogIcon::Network => "network",
            CatalogIcon::Printer => "printer",
            CatalogIcon::Headset => "headset",
            CatalogIcon::Contract => "contract",
            CatalogIcon::Camera => "camera",
            CatalogIcon::Shield => "shield",
            CatalogIcon::Database => "database",
            CatalogIcon::Consultant => "consultant",
            CatalogIcon::Monitor => "monitor",
            CatalogIcon::Storage => "storage",
            CatalogIcon::Memory => "memory",
            CatalogIcon::Cable => "cable",
            CatalogIcon::Keyboard => "keyboard",
            CatalogIcon::Wifi => "wifi",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CatalogIcon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(CatalogIcon::Desktop),
            "laptop" => Ok(CatalogIcon::Laptop),
            "server" => Ok(CatalogIcon::Server),
            "network" => Ok(CatalogIcon::Network),
            "printer" => Ok(CatalogIcon::Printer),
            "headset" => Ok(CatalogIcon::Headset),
            "contract" => Ok(CatalogIcon::Contract),
            "camera" => Ok(CatalogIcon::Camera),
            "shield" => Ok(CatalogIcon::Shield),
            "database" => Ok(CatalogIcon::Database),
            "consultant" => Ok(CatalogIcon::Consultant),
            "monitor" => Ok(CatalogIcon::Monitor),
            "storage" => Ok(CatalogIcon::Storage),
            "memory" => Ok(CatalogIcon::Memory),
            "cable" => Ok(CatalogIcon::Cable),
            "keyboard" => Ok(CatalogIcon::Keyboard),
            "wifi" => Ok(CatalogIcon::Wifi),
            other => Err(format!("unknown catalog icon: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePricing {
    pub amount: String,
    pub pricing_type: String,
}

/// A service offered by the shop (repair, networking, AMC, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogService {
    pub title: String,
    pub slug: String,
    pub short_description: String,
    pub icon: CatalogIcon,
    pub category: String,
    pub order: u32,
    pub highlights: Vec<String>,
    #[serde(default)]
    pub pricing: Option<ServicePricing>,
    #[serde(default)]
    pub delivery_time: Option<String>,
}

/// A product category the shop retails (laptops, monitors, CCTV, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    pub title: String,
    pub slug: String,
    pub description: String,
    pub icon: CatalogIcon,
    pub category: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub availability: Option<String>,
    #[serde(default)]
    pub warranty: Option<String>,
}

/// A brand the shop partners with or stocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogBrand {
    pub slug: String,
    pub name: String,
    pub category: String,
    pub website: String,
    pub featured: bool,
    pub order: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogTestimonial {
    pub name: String,
    pub role: String,
    pub company: String,
    pub testimonial: String,
    pub rating: u8,
    pub location: String,
    pub initials: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_display_fromstr_roundtrip() {
        let all = [
            CatalogIcon::Desktop,
            CatalogIcon::Laptop,
            CatalogIcon::Server,
            CatalogIcon::Network,
            CatalogIcon::Printer,
            CatalogIcon::Headset,
            CatalogIcon::Contract,
            CatalogIcon::Camera,
            CatalogIcon::Shield,
            CatalogIcon::Database,
            CatalogIcon::Consultant,
            CatalogIcon::Monitor,
            CatalogIcon::Storage,
            CatalogIcon::Memory,
            CatalogIcon::Cable,
            CatalogIcon::Keyboard,
            CatalogIcon::Wifi,
        ];
        for icon in all {
            let parsed: CatalogIcon = icon.to_string().parse().unwrap();
            assert_eq!(parsed, icon);
        }
    }

    #[test]
    fn test_unknown_icon_name_is_rejected() {
        assert!("FaDesktop".parse::<CatalogIcon>().is_err());
        assert!(serde_json::from_str::<CatalogIcon>("\"sparkles\"").is_err());
    }

    #[test]
    fn test_service_serializes_camel_case() {
        let service = CatalogService {
            title: "Data Backup".into(),
            slug: "data-backup-services".into(),
            short_description: "Backup and recovery for homes and SMEs".into(),
            icon: CatalogIcon::Database,
            category: "support".into(),
            order: 10,
            highlights: vec!["Scheduled backups".into()],
            pricing: None,
            delivery_time: Some("1-2 Days".into()),
        };
        let value = serde_json::to_value(service).unwrap();
        assert_eq!(value["shortDescription"], "Backup and recovery for homes and SMEs");
        assert_eq!(value["deliveryTime"], "1-2 Days");
        assert_eq!(value["icon"], "database");
    }
}
