use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

macro_rules! select_options {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Options in display order; the first one is the widget default.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::ALL[0]
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.as_str() == s)
                    .ok_or_else(|| format!("unknown {} option: {}", stringify!($name), s))
            }
        }
    };
}

select_options!(EngineType {
    Ohv => "OHV",
    Ohc => "OHC",
    Dohc => "DOHC",
    Sohc => "SOHC",
});

select_options!(BodyStyle {
    Sedan => "sedan",
    Hatchback => "hatchback",
    Wagon => "wagon",
    Hardtop => "hardtop",
    Convertible => "convertible",
});

select_options!(FuelType {
    Gas => "gas",
    Diesel => "diesel",
});

/// Current state of the fourteen sidebar widgets for one render cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureInput {
    pub company_name: String,
    pub engine_type: EngineType,
    pub body_style: BodyStyle,
    pub fuel_type: FuelType,
    pub highway_mpg: i64,
    pub city_mpg: i64,
    pub peak_rpm: i64,
    pub horsepower: i64,
    pub curb_weight: i64,
    pub height: f64,
    pub width: f64,
    pub length: f64,
    pub wheelbase: f64,
    pub symboling: i64,
}

impl Default for FeatureInput {
    fn default() -> Self {
        Self {
            company_name: "Toyota".to_string(),
            engine_type: EngineType::default(),
            body_style: BodyStyle::default(),
            fuel_type: FuelType::default(),
            highway_mpg: 0,
            city_mpg: 0,
            peak_rpm: 0,
            horsepower: 0,
            curb_weight: 0,
            height: 0.0,
            width: 0.0,
            length: 0.0,
            wheelbase: 0.0,
            symboling: 0,
        }
    }
}
