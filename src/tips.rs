//! Rule-based travel tips
//!
//! Tips are collected in a fixed order (climate, season, crowds, budget,
//! region) and capped at [`MAX_TIPS`]. When the rules produce fewer than two
//! tips, two generic ones are added.

use chrono::Month;

use crate::models::DisplayScores;
use crate::scoring::TROPIC_LATITUDE;

/// Upper bound on the number of tips returned
pub const MAX_TIPS: usize = 5;

const MIN_TIPS: usize = 2;
const POLAR_LATITUDE: f64 = 60.0;
const SUBTROPIC_LATITUDE: f64 = 35.0;

/// Climate zone used for packing advice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateZone {
    Tropical,
    Polar,
    Subtropical,
    Temperate,
}

impl ClimateZone {
    #[must_use]
    pub fn from_latitude(latitude: f64) -> Self {
        let abs = latitude.abs();
        if abs < TROPIC_LATITUDE {
            Self::Tropical
        } else if abs > POLAR_LATITUDE {
            Self::Polar
        } else if abs < SUBTROPIC_LATITUDE {
            Self::Subtropical
        } else {
            Self::Temperate
        }
    }

    fn tips(self) -> &'static [&'static str] {
        match self {
            Self::Tropical => &[
                "Tropical climate: Expect humidity and sudden showers. Pack breathable fabrics.",
                "Mosquito repellent is a must for this region.",
            ],
            Self::Polar => &[
                "High latitude: Days can be very long or very short depending on season.",
                "Pack thermal layers, even if it looks sunny.",
            ],
            Self::Subtropical => {
                &["Subtropical/Desert zone: High UV index. Sunscreen and hat are essential."]
            }
            Self::Temperate => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Winter,
    Summer,
    Shoulder,
}

impl Season {
    /// Local season of a month; the equator counts as southern
    #[must_use]
    pub fn of(month: Month, latitude: f64) -> Self {
        let december_to_february = matches!(month, Month::December | Month::January | Month::February);
        let june_to_august = matches!(month, Month::June | Month::July | Month::August);
        let northern = latitude > 0.0;

        match (northern, december_to_february, june_to_august) {
            (true, true, _) | (false, _, true) => Self::Winter,
            (true, _, true) | (false, true, _) => Self::Summer,
            _ => Self::Shoulder,
        }
    }

    fn tip(self) -> Option<&'static str> {
        match self {
            Self::Winter => Some(
                "Winter season: Pack a warm coat and check if outdoor attractions close early.",
            ),
            Self::Summer => Some(
                "Summer season: Stay hydrated and plan indoor activities for the hottest part of the day.",
            ),
            Self::Shoulder => None,
        }
    }
}

/// Broad world region, approximated by bounding boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Europe,
    Asia,
    NorthAmerica,
    SouthAmerica,
    Africa,
    Oceania,
}

struct BoundingBox {
    region: Region,
    lat: (f64, f64),
    lon: (f64, f64),
}

impl BoundingBox {
    fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat.0..=self.lat.1).contains(&latitude) && (self.lon.0..=self.lon.1).contains(&longitude)
    }
}

// Boxes overlap; the first match wins, so order matters.
const REGION_BOXES: [BoundingBox; 6] = [
    BoundingBox {
        region: Region::Europe,
        lat: (35.0, 70.0),
        lon: (-10.0, 40.0),
    },
    BoundingBox {
        region: Region::Asia,
        lat: (10.0, 55.0),
        lon: (60.0, 150.0),
    },
    BoundingBox {
        region: Region::NorthAmerica,
        lat: (25.0, 70.0),
        lon: (-170.0, -50.0),
    },
    BoundingBox {
        region: Region::SouthAmerica,
        lat: (-55.0, 15.0),
        lon: (-85.0, -35.0),
    },
    BoundingBox {
        region: Region::Africa,
        lat: (-35.0, 37.0),
        lon: (-20.0, 55.0),
    },
    BoundingBox {
        region: Region::Oceania,
        lat: (-50.0, -10.0),
        lon: (110.0, 180.0),
    },
];

impl Region {
    /// First region whose box contains the point
    #[must_use]
    pub fn locate(latitude: f64, longitude: f64) -> Option<Self> {
        REGION_BOXES
            .iter()
            .find(|b| b.contains(latitude, longitude))
            .map(|b| b.region)
    }

    fn tips(self) -> &'static [&'static str] {
        match self {
            Self::Europe => &[
                "Europe tip: Many museums are closed on Mondays. Check schedules ahead.",
                "Europe tip: Public transport is excellent, download the local metro app.",
            ],
            Self::Asia => &[
                "Asia tip: Carry cash (local currency) for street food and small vendors.",
                "Asia tip: Apps like Grab or Gojek are essential for transport in SE Asia.",
            ],
            Self::NorthAmerica => &["North America tip: Tipping 15-20% is standard in restaurants."],
            Self::SouthAmerica => &[
                "South America tip: Learn a few basic Spanish/Portuguese phrases.",
                "South America tip: Uber works well in major cities, but verify license plates.",
            ],
            Self::Africa => &["Africa tip: Drinking bottled water is recommended in many regions."],
            Self::Oceania => &["Oceania tip: Sun is very strong; use SPF 50+ sunscreen."],
        }
    }
}

fn crowd_tips(crowd: u8) -> &'static [&'static str] {
    if crowd < 40 {
        &[
            "It will be busy! Book tickets for major attractions at least 2 weeks in advance.",
            "Visit popular spots early in the morning (before 9 AM) to avoid crowds.",
        ]
    } else if crowd > 80 {
        &["Great choice! It's quiet season, so you'll have the streets to yourself."]
    } else {
        &[]
    }
}

fn cost_tips(cost: u8) -> &'static [&'static str] {
    if cost < 40 {
        &["This is a pricier destination. Consider a city pass for transport and museums."]
    } else if cost > 80 {
        &["Destination offers great value right now. perfect time for fine dining."]
    } else {
        &[]
    }
}

const GENERIC_TIPS: [&str; 2] = [
    "Download offline maps and check visa requirements.",
    "Respect local customs and dress appropriately for religious sites.",
];

/// Advisory tips for a location, month and display scores
#[must_use]
pub fn generate_tips(
    latitude: f64,
    longitude: f64,
    month: Month,
    scores: &DisplayScores,
) -> Vec<String> {
    let mut tips: Vec<&'static str> = Vec::new();

    tips.extend(ClimateZone::from_latitude(latitude).tips());
    tips.extend(Season::of(month, latitude).tip());
    tips.extend(crowd_tips(scores.crowd));
    tips.extend(cost_tips(scores.cost));
    if let Some(region) = Region::locate(latitude, longitude) {
        tips.extend(region.tips());
    }

    if tips.len() < MIN_TIPS {
        tips.extend(GENERIC_TIPS);
    }

    tips.into_iter().take(MAX_TIPS).map(str::to_string).collect()
}
