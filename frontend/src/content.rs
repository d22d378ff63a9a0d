use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ContactChannel {
    pub text: String,
    #[serde(rename = "number")]
    pub number_or_address: String,
    pub enabled: bool,
    pub color: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct ContactButtons {
    pub phone: ContactChannel,
    pub whatsapp: ContactChannel,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_available() -> bool {
    true
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SiteText {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub phone: String,
    pub whatsapp: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub city: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Everything the page needs from configuration.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct SiteBundle {
    pub site: SiteText,
    pub services: Vec<Service>,
    pub contact_buttons: ContactButtons,
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
                number_or_address: site.phone,
                enabled: true,
                color: "#e53935".to_string(),
                message: None,
            },
            whatsapp: ContactChannel {
                text: "WhatsApp".to_string(),
                number_or_address: site.whatsapp,
                enabled: true,
                color: "#25d366".to_string(),
                message: Some(DEFAULT_WHATSAPP_GREETING.to_string()),
            },
        }
    }
}

impl Default for SiteBundle {
    fn default() -> Self {
        Self {
            site: SiteText::default(),
            services: default_services(),
            contact_buttons: ContactButtons::default(),
        }
    }
}

pub const DEFAULT_WHATSAPP_GREETING: &str = "Hello, I need a tow truck.";

pub fn default_services() -> Vec<Service> {
    let entries = [
        ("light-tow", "Car towing", "Flatbed transport for sedans and SUVs.", "🚗", 1),
        ("heavy-tow", "Heavy towing", "Trucks, buses and equipment up to 20 tons.", "🚛", 2),
        ("battery", "Battery boost", "Jump start or battery replacement on site.", "🔋", 3),
        ("tyre", "Tyre change", "Spare fitted or puncture repaired where you stopped.", "🛞", 4),
        ("lockout", "Lockout help", "Locked keys inside? We open it without damage.", "🔑", 5),
        ("fuel", "Fuel delivery", "Enough fuel to reach the nearest station.", "⛽", 6),
    ];
    entries
        .iter()
        .map(|(id, title, description, icon, order)| Service {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            available: true,
            sort_order: *order,
        })
        .collect()
}

/// Display order: non-decreasing `sort_order`, ties keep catalog order.
pub fn ordered_services(services: &[Service]) -> Vec<Service> {
    let mut ordered = services.to_vec();
    ordered.sort_by_key(|s| s.sort_order);
    ordered
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Abdullah",
        city: "Riyadh",
        rating: 5,
        text: "Broke down on the ring road at 2am, the truck was there in twenty minutes.",
    },
    Testimonial {
        name: "Sara",
        city: "Riyadh",
        rating: 5,
        text: "They loaded my car without a single scratch. Price was what they quoted.",
    },
    Testimonial {
        name: "Faisal",
        city: "Al Kharj",
        rating: 4,
        text: "Heavy truck tow out of town, handled professionally.",
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "How fast can you reach me?",
        answer: "Inside the city usually within 30 minutes. Outside the city it depends on distance; we tell you the time on the phone.",
    },
    FaqEntry {
        question: "Do you work at night?",
        answer: "Yes, 24 hours a day, every day. Night requests have a small surcharge.",
    },
    FaqEntry {
        question: "How is the price calculated?",
        answer: "A base fee plus a per-kilometre rate, adjusted by service, vehicle type and time of day. Use the estimator above for a quick figure.",
    },
    FaqEntry {
        question: "Can you tow between cities?",
        answer: "Yes. Call or send a WhatsApp message with both locations and we confirm the price before dispatch.",
    },
];
