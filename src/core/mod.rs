pub mod calendar;
pub mod clock;
pub mod height;
pub mod helix;
pub mod orbit;
pub mod types;
pub mod zoom;

pub use calendar::{
    DAYS_PER_WEEK, LUNATION_DAYS, MONTHS_PER_QUARTER, MONTHS_PER_YEAR, MonthWeekGrid,
    day_of_week_from_sunday, days_in_month, days_in_year, is_leap_year, lunation_epoch,
    lunation_position, lunation_start, shift_days, sunday_on_or_before,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use height::{
    HEIGHT_PER_MONTH, HEIGHT_PER_YEAR, datetime_for_height, height_for_date, height_for_datetime,
    height_for_day_start, height_for_year,
};
pub use helix::{HelicalCurveSpec, generate_helical_curve, segments_for_span};
pub use orbit::{Body, BodyCatalog, BodyTrack, PhaseReference, orbital_angle};
pub use types::Point3;
pub use zoom::{FocusTarget, Granularity, ZOOM_LEVEL_CATALOG, ZoomLevel, ZoomLevelSpec};
