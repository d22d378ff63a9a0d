use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SiteText {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub phone: String, // shown and dialled as-is, e.g. +966501234567
    pub whatsapp: String, // digits only, used in wa.me links
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub text: String,
    pub number: String,
    pub enabled: bool,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ContactButtons {
    pub phone: ContactChannel,
    pub whatsapp: ContactChannel,
}

fn default_true() -> bool {
    true
}

impl Default for SiteText {
    fn default() -> Self {
        Self {
            title: "Riyadh Tow Truck 24/7".to_string(),
            subtitle: "Fast, careful towing for every vehicle".to_string(),
            description: "Breakdown, accident or flat battery: a tow truck reaches you in 30 minutes anywhere in the city.".to_string(),
            phone: "+966501234567".to_string(),
            whatsapp: "966501234567".to_string(),
        }
    }
}

impl Default for ContactButtons {
    fn default() -> Self {
        let site = SiteText::default();
        Self {
            phone: ContactChannel {
                text: "Call now".to_string(),
                number: site.phone,
                enabled: true,
                color: "#e53935".to_string(),
                message: None,
            },
            whatsapp: ContactChannel {
                text: "WhatsApp".to_string(),
                number: site.whatsapp,
                enabled: true,
                color: "#25d366".to_string(),
                message: Some("Hello, I need a tow truck.".to_string()),
            },
        }
    }
}

pub fn default_services() -> Vec<Service> {
    [
        ("light-tow", "Car towing", "Flatbed transport for sedans and SUVs.", "🚗", 1),
        ("heavy-tow", "Heavy towing", "Trucks, buses and equipment up to 20 tons.", "🚛", 2),
        ("battery", "Battery boost", "Jump start or battery replacement on site.", "🔋", 3),
        ("tyre", "Tyre change", "Spare fitted or puncture repaired where you stopped.", "🛞", 4),
        ("lockout", "Lockout help", "Locked keys inside? We open it without damage.", "🔑", 5),
        ("fuel", "Fuel delivery", "Enough fuel to reach the nearest station.", "⛽", 6),
    ]
    .into_iter()
    .map(|(id, title, description, icon, sort_order)| Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        available: true,
        sort_order,
    })
    .collect()
}
