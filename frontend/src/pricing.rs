#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceTier {
    Standard,
    Express,
    Premium,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleTier {
    Sedan,
    Suv,
    Truck,
    Motorcycle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeOfDay {
    Day,
    Night,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 3] = [Self::Standard, Self::Express, Self::Premium];

    pub fn key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Premium => "premium",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Express => "Express (priority dispatch)",
            Self::Premium => "Premium (enclosed flatbed)",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl VehicleTier {
    pub const ALL: [VehicleTier; 4] = [Self::Sedan, Self::Suv, Self::Truck, Self::Motorcycle];

    pub fn key(self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Suv => "suv",
            Self::Truck => "truck",
            Self::Motorcycle => "motorcycle",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sedan => "Sedan",
            Self::Suv => "SUV",
            Self::Truck => "Truck",
            Self::Motorcycle => "Motorcycle",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.key() == key)
    }
}

impl TimeOfDay {
    pub fn key(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "day" => Some(Self::Day),
            "night" => Some(Self::Night),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceTable {
    pub base: f64,
    pub rate_per_km: f64,
}

pub const PRICE_TABLE: PriceTable = PriceTable {
    base: 150.0,
    rate_per_km: 5.0,
};

impl PriceTable {
    pub fn service_multiplier(&self, tier: ServiceTier) -> f64 {
        match tier {
            ServiceTier::Standard => 1.0,
            ServiceTier::Express => 1.5,
            ServiceTier::Premium => 2.0,
        }
    }

    pub fn vehicle_multiplier(&self, tier: VehicleTier) -> f64 {
        match tier {
            VehicleTier::Sedan => 1.0,
            VehicleTier::Suv => 1.2,
            VehicleTier::Truck => 1.5,
            VehicleTier::Motorcycle => 0.8,
        }
    }

    pub fn time_multiplier(&self, time: TimeOfDay) -> f64 {
        match time {
            TimeOfDay::Day => 1.0,
            TimeOfDay::Night => 1.3,
        }
    }

    /// Estimated price in whole currency units. Distance is billed in whole
    /// km; negative or NaN distances count as zero.
    pub fn estimate(&self, input: &PriceInput) -> i64 {
        let distance = if input.distance_km.is_finite() {
            input.distance_km.max(0.0).round()
        } else {
            0.0
        };
        let price = (self.base + distance * self.rate_per_km)
            * self.service_multiplier(input.service)
            * self.vehicle_multiplier(input.vehicle)
            * self.time_multiplier(input.time);
        price.round() as i64
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PriceInput {
    pub distance_km: f64,
    pub service: ServiceTier,
    pub vehicle: VehicleTier,
    pub time: TimeOfDay,
}

impl Default for PriceInput {
    fn default() -> Self {
        Self {
            distance_km: 10.0,
            service: ServiceTier::Standard,
            vehicle: VehicleTier::Sedan,
            time: TimeOfDay::Day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(distance_km: f64, time: TimeOfDay) -> PriceInput {
        PriceInput {
            distance_km,
            service: ServiceTier::Standard,
            vehicle: VehicleTier::Sedan,
            time,
        }
    }

    #[test]
    fn zero_distance_day_standard_sedan_is_base() {
        assert_eq!(PRICE_TABLE.estimate(&input(0.0, TimeOfDay::Day)), 150);
    }

    #[test]
    fn night_is_rounded_day_times_surcharge() {
        for distance in [0.0, 2.5, 7.0, 12.4, 33.3, 120.0, 250.75] {
            let day = PRICE_TABLE.estimate(&input(distance, TimeOfDay::Day));
            let night = PRICE_TABLE.estimate(&input(distance, TimeOfDay::Night));
            let expected = (day as f64 * 1.3).round() as i64;
            assert_eq!(night, expected, "distance {}", distance);
            assert!(night >= day);
        }
    }

    #[test]
    fn distance_is_billed_in_whole_km() {
        assert_eq!(PRICE_TABLE.estimate(&input(2.4, TimeOfDay::Day)), 160);
        assert_eq!(PRICE_TABLE.estimate(&input(2.5, TimeOfDay::Day)), 165);
        assert_eq!(PRICE_TABLE.estimate(&input(33.3, TimeOfDay::Day)), 315);
    }

    #[test]
    fn negative_distance_is_clamped() {
        assert_eq!(PRICE_TABLE.estimate(&input(-40.0, TimeOfDay::Day)), 150);
        assert_eq!(PRICE_TABLE.estimate(&input(f64::NAN, TimeOfDay::Day)), 150);
    }

    #[test]
    fn all_multipliers_apply() {
        let price = PRICE_TABLE.estimate(&PriceInput {
            distance_km: 10.0,
            service: ServiceTier::Premium,
            vehicle: VehicleTier::Truck,
            time: TimeOfDay::Night,
        });
        // (150 + 50) * 2.0 * 1.5 * 1.3
        assert_eq!(price, 780);
    }

    #[test]
    fn keys_round_trip_through_select_values() {
        for tier in ServiceTier::ALL {
            assert_eq!(ServiceTier::from_key(tier.key()), Some(tier));
        }
        for tier in VehicleTier::ALL {
            assert_eq!(VehicleTier::from_key(tier.key()), Some(tier));
        }
        assert_eq!(TimeOfDay::from_key("dusk"), None);
    }
}
