use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::calendar::{MonthWeekGrid, lunation_position};
use crate::error::{CalendarError, CalendarResult};

/// What the camera centers on at a zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusTarget {
    None,
    Sun,
    Earth,
}

/// The ten nested resolutions, coarsest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum ZoomLevel {
    Overview = 0,
    Century = 1,
    Decade = 2,
    #[default]
    Year = 3,
    Quarter = 4,
    Month = 5,
    Lunar = 6,
    Week = 7,
    Day = 8,
    Clock = 9,
}

/// Smallest calendar unit a zoom level distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Granularity {
    Year,
    Month,
    /// Row of the Sunday-anchored month grid.
    MonthWeek,
    /// Week inside a 28-day lunation.
    LunarWeek,
    Day,
    Hour,
}

impl Granularity {
    /// Whether `a` and `b` fall in the same unit of this granularity.
    #[must_use]
    pub fn same_unit(self, a: NaiveDateTime, b: NaiveDateTime) -> bool {
        match self {
            Self::Year => a.year() == b.year(),
            Self::Month => (a.year(), a.month0()) == (b.year(), b.month0()),
            Self::MonthWeek => {
                (a.year(), a.month0()) == (b.year(), b.month0())
                    && MonthWeekGrid::containing(a.date()).row_of(a.date())
                        == MonthWeekGrid::containing(b.date()).row_of(b.date())
            }
            Self::LunarWeek => lunation_position(a.date()) == lunation_position(b.date()),
            Self::Day => a.date() == b.date(),
            Self::Hour => a.date() == b.date() && a.hour() == b.hour(),
        }
    }
}

/// Immutable catalog row for one zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoomLevelSpec {
    pub level: ZoomLevel,
    pub name: &'static str,
    pub display_span_years: f64,
    pub focus_target: FocusTarget,
    pub camera_distance: f64,
}

const DAY_YEARS: f64 = 1.0 / 365.25;

pub const ZOOM_LEVEL_CATALOG: [ZoomLevelSpec; 10] = [
    ZoomLevelSpec {
        level: ZoomLevel::Overview,
        name: "Solar System",
        display_span_years: 40.0,
        focus_target: FocusTarget::None,
        camera_distance: 9_000.0,
    },
    ZoomLevelSpec {
        level: ZoomLevel::Century,
        name: "Century",
        display_span_years: 100.0,
        focus_target: FocusTarget::Sun,
        camera_distance: 6_000.0,
    },
    ZoomLevelSpec {
        level: ZoomLevel::Decade,
        name: "Decade",
        display_span_years: 10.0,
        focus_target: FocusTarget::Sun,
        camera_distance: 1_800.0,
    },
    ZoomLevelSpec {
        level: ZoomLevel::Year,
        name: "Year",
        display_span_years: 1.0,
        focus_target: FocusTarget::Sun,
        camera_distance: 420.0,
    },
    ZoomLevelSpec {
        level: ZoomLevel::Quarter,
        name: "Quarter",
        display_span_years: 0.25,
        focus_target: FocusTarget::Sun,
        camera_distance: 260.0,
    },
    ZoomLevelSpec {
        level: ZoomLevel::Month,
        name: "Month",
        display_span_years: 1.0 / 12.0,
        focus_target: FocusTarget::Sun,
        camera_distance: 180.0,
    },
    ZoomLevelSpec {
        level: ZoomLevel::Lunar,
        name: "Lunar Cycle",
        display_span_years: 28.0 * DAY_YEARS,
        focus_target: FocusTarget::Earth,
        camera_distance: 120.0,
    },
    ZoomLevelSpec {
        level: ZoomLevel::Week,
        name: "Week",
        display_span_years: 7.0 * DAY_YEARS,
        focus_target: FocusTarget::Earth,
        camera_distance: 60.0,
    },
    ZoomLevelSpec {
        level: ZoomLevel::Day,
        name: "Day",
        display_span_years: 2.0 * DAY_YEARS,
        focus_target: FocusTarget::Earth,
        camera_distance: 30.0,
    },
    ZoomLevelSpec {
        level: ZoomLevel::Clock,
        name: "Clock",
        display_span_years: DAY_YEARS,
        focus_target: FocusTarget::Earth,
        camera_distance: 18.0,
    },
];

impl ZoomLevel {
    pub const ALL: [Self; 10] = [
        Self::Overview,
        Self::Century,
        Self::Decade,
        Self::Year,
        Self::Quarter,
        Self::Month,
        Self::Lunar,
        Self::Week,
        Self::Day,
        Self::Clock,
    ];

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> CalendarResult<Self> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidZoomLevel(index))
    }

    #[must_use]
    pub const fn spec(self) -> &'static ZoomLevelSpec {
        &ZOOM_LEVEL_CATALOG[self as usize]
    }

    /// One step finer, saturating at `Clock`.
    #[must_use]
    pub fn zoomed_in(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(Self::Clock)
    }

    /// One step coarser, saturating at `Overview`.
    #[must_use]
    pub fn zoomed_out(self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(|index| Self::from_index(index).ok())
            .unwrap_or(Self::Overview)
    }

    #[must_use]
    pub const fn granularity(self) -> Granularity {
        match self {
            Self::Overview | Self::Century | Self::Decade => Granularity::Year,
            Self::Year | Self::Quarter => Granularity::Month,
            Self::Month => Granularity::MonthWeek,
            Self::Lunar => Granularity::LunarWeek,
            Self::Week => Granularity::Day,
            Self::Day | Self::Clock => Granularity::Hour,
        }
    }

    /// Height span of the visible window.
    #[must_use]
    pub fn display_span_height(self) -> f64 {
        self.spec().display_span_years * crate::core::height::HEIGHT_PER_YEAR
    }
}

impl TryFrom<u8> for ZoomLevel {
    type Error = CalendarError;

    fn try_from(value: u8) -> CalendarResult<Self> {
        Self::from_index(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_rows_match_their_index() {
        for (index, spec) in ZOOM_LEVEL_CATALOG.iter().enumerate() {
            assert_eq!(usize::from(spec.level.index()), index);
        }
    }

    #[test]
    fn spans_shrink_from_century_to_clock() {
        for pair in ZoomLevel::ALL[1..].windows(2) {
            assert!(pair[0].spec().display_span_years > pair[1].spec().display_span_years);
        }
    }

    #[test]
    fn zoom_steps_saturate_at_both_ends() {
        assert_eq!(ZoomLevel::Clock.zoomed_in(), ZoomLevel::Clock);
        assert_eq!(ZoomLevel::Overview.zoomed_out(), ZoomLevel::Overview);
        assert_eq!(ZoomLevel::Year.zoomed_in(), ZoomLevel::Quarter);
        assert!(matches!(
            ZoomLevel::try_from(10),
            Err(CalendarError::InvalidZoomLevel(10))
        ));
    }
}
