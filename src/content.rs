//! Static presentation content for the home menu.
//!
//! Card lists and icon mappings are configuration, not behavior: restaurants,
//! tools, and movies are fixed tables, while the weather strip randomizes its
//! temperatures once at startup (the simulator has no real weather feed).

use rand::Rng;

use crate::config::CARD_PITCH;
use crate::num::rand_in_range;

// =============================================================================
// Weather
// =============================================================================

/// Forecast condition for a day card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WeatherKind {
    Cloudy,
    Rainy,
    Stormy,
    Sunny,
}

impl WeatherKind {
    /// Icon token for this condition. Pure lookup; the widgets draw the
    /// matching glyph.
    pub const fn icon_token(self) -> &'static str {
        match self {
            Self::Cloudy => "clouds",
            Self::Rainy => "drizzle",
            Self::Stormy => "bolt",
            Self::Sunny => "sun",
        }
    }
}

/// One day card on the weather strip.
pub struct DayForecast {
    pub name: &'static str,
    /// Fahrenheit, randomized in [60, 80] at startup.
    pub temperature: i32,
    pub kind: WeatherKind,
}

/// Day names and condition sequence for the forecast strip.
const FORECAST_PATTERN: [(&str, WeatherKind); 7] = [
    ("Mon", WeatherKind::Sunny),
    ("Tues", WeatherKind::Sunny),
    ("Wed", WeatherKind::Cloudy),
    ("Thurs", WeatherKind::Rainy),
    ("Fri", WeatherKind::Stormy),
    ("Sat", WeatherKind::Sunny),
    ("Sun", WeatherKind::Cloudy),
];

/// Build the seven-day forecast with randomized temperatures.
pub fn forecast<R: Rng>(rng: &mut R) -> [DayForecast; 7] {
    FORECAST_PATTERN.map(|(name, kind)| DayForecast {
        name,
        temperature: rand_in_range(rng, 60, 80),
        kind,
    })
}

/// Current outside temperature shown next to the clock, sampled once.
pub fn weather_snap<R: Rng>(rng: &mut R) -> i32 { rand_in_range(rng, 65, 85) }

// =============================================================================
// Restaurants / Tools / Movies
// =============================================================================

pub struct Restaurant {
    pub name: &'static str,
    pub tagline: &'static str,
}

pub const RESTAURANTS: [Restaurant; 5] = [
    Restaurant {
        name: "Brightside",
        tagline: "American - $$",
    },
    Restaurant {
        name: "Taqueria Sol",
        tagline: "Mexican - $",
    },
    Restaurant {
        name: "Golden Wok",
        tagline: "Chinese - $$",
    },
    Restaurant {
        name: "Trattoria 9",
        tagline: "Italian - $$$",
    },
    Restaurant {
        name: "Night Owl",
        tagline: "Diner - $",
    },
];

pub struct Tool {
    pub name: &'static str,
    /// Short status line under the name.
    pub status: &'static str,
}

pub const TOOLS: [Tool; 6] = [
    Tool {
        name: "Climate",
        status: "72F - Auto",
    },
    Tool {
        name: "Lights",
        status: "4 on",
    },
    Tool {
        name: "Security",
        status: "Armed",
    },
    Tool {
        name: "Music",
        status: "Paused",
    },
    Tool {
        name: "Cameras",
        status: "All clear",
    },
    Tool {
        name: "Power",
        status: "1.2 kW",
    },
];

pub struct Movie {
    pub title: &'static str,
    pub rating: &'static str,
}

pub const MOVIES: [Movie; 4] = [
    Movie {
        title: "Interstellar",
        rating: "PG-13",
    },
    Movie {
        title: "Up",
        rating: "PG",
    },
    Movie {
        title: "Heat",
        rating: "R",
    },
    Movie {
        title: "Spirited Away",
        rating: "PG",
    },
];

/// Total content width of a strip with `count` cards.
pub const fn strip_content_width(count: usize) -> i32 { count as i32 * CARD_PITCH }

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_forecast_has_seven_days() {
        let mut rng = StdRng::seed_from_u64(3);
        let days = forecast(&mut rng);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0].name, "Mon");
        assert_eq!(days[6].name, "Sun");
    }

    #[test]
    fn test_forecast_temperatures_in_range() {
        let mut rng = StdRng::seed_from_u64(4);
        for day in forecast(&mut rng) {
            assert!(
                (60..=80).contains(&day.temperature),
                "{} out of range: {}",
                day.name,
                day.temperature
            );
        }
    }

    #[test]
    fn test_weather_snap_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..100 {
            let t = weather_snap(&mut rng);
            assert!((65..=85).contains(&t));
        }
    }

    #[test]
    fn test_icon_tokens() {
        assert_eq!(WeatherKind::Cloudy.icon_token(), "clouds");
        assert_eq!(WeatherKind::Rainy.icon_token(), "drizzle");
        assert_eq!(WeatherKind::Stormy.icon_token(), "bolt");
        assert_eq!(WeatherKind::Sunny.icon_token(), "sun");
    }

    #[test]
    fn test_strip_content_width() {
        assert_eq!(strip_content_width(7), 7 * CARD_PITCH);
        assert_eq!(strip_content_width(0), 0);
    }
}
