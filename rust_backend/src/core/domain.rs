//! Domain models for timestamps, zodiac bands and lunar quantities.
//!
//! All types here are plain values: they carry no state beyond one
//! calculation and are `Copy` wherever the payload allows it.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Width of one zodiac band in degrees.
pub const BAND_WIDTH_DEG: f64 = 30.0;

/// Length of the synodic month used by the phase calculation, in days.
pub const SYNODIC_PERIOD_DAYS: f64 = 29.53;

/// Label returned when a longitude falls outside every band.
pub const UNRECOGNIZED_LABEL: &str = "Unknown";

/// A civil date-time, interpreted literally with no timezone attached.
///
/// Any timezone adjustment is the caller's business; the calculators treat
/// the wall-clock fields as the reference time.
///
/// # Examples
///
/// ```
/// use moon_rust::core::domain::Timestamp;
///
/// let ts = Timestamp::from_ymd_hms(2000, 1, 21, 6, 0, 0).unwrap();
/// assert_eq!(ts.year(), 2000);
/// assert_eq!(ts.month(), 1);
/// assert_eq!(ts.day(), 21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    /// Builds a timestamp from calendar fields, `None` if any field is out of range.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hour, minute, second)
            .map(Self)
    }

    /// Midnight at the start of `date`.
    pub fn at_midnight(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::default()))
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year, 1-12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month, 1-31.
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(datetime: NaiveDateTime) -> Self {
        Timestamp::new(datetime)
    }
}

impl From<NaiveDate> for Timestamp {
    fn from(date: NaiveDate) -> Self {
        Timestamp::at_midnight(date)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

/// How sign labels are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// English name followed by the Russian name in parentheses.
    #[default]
    Bilingual,
    /// English name only.
    English,
}

/// One of the twelve 30° bands of lunar ecliptic longitude.
///
/// Variants are declared in band order: `Leo` owns [0, 30), `Virgo` owns
/// [30, 60), and so on up to `Cancer` at [330, 360).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
    Aries,
    Taurus,
    Gemini,
    Cancer,
}

impl ZodiacSign {
    /// All signs in band order, starting at 0°.
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
    ];

    /// 0-based position of this sign in the band table.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Inclusive lower bound of the band, in degrees.
    pub fn lower_bound(&self) -> f64 {
        self.index() as f64 * BAND_WIDTH_DEG
    }

    /// Exclusive upper bound of the band, in degrees.
    pub fn upper_bound(&self) -> f64 {
        self.lower_bound() + BAND_WIDTH_DEG
    }

    /// Whether `longitude` lies in `[lower_bound, upper_bound)`.
    pub fn contains(&self, longitude: f64) -> bool {
        self.lower_bound() <= longitude && longitude < self.upper_bound()
    }

    /// Finds the band owning `longitude`.
    ///
    /// Returns `None` for values outside [0, 360), including NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// use moon_rust::core::domain::ZodiacSign;
    ///
    /// assert_eq!(ZodiacSign::from_longitude(0.0), Some(ZodiacSign::Leo));
    /// assert_eq!(ZodiacSign::from_longitude(30.0), Some(ZodiacSign::Virgo));
    /// assert_eq!(ZodiacSign::from_longitude(360.0), None);
    /// ```
    pub fn from_longitude(longitude: f64) -> Option<ZodiacSign> {
        ZodiacSign::ALL
            .iter()
            .copied()
            .find(|sign| sign.contains(longitude))
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
        }
    }

    pub fn russian_name(&self) -> &'static str {
        match self {
            ZodiacSign::Leo => "Лев",
            ZodiacSign::Virgo => "Дева",
            ZodiacSign::Libra => "Весы",
            ZodiacSign::Scorpio => "Скорпион",
            ZodiacSign::Sagittarius => "Стрелец",
            ZodiacSign::Capricorn => "Козерог",
            ZodiacSign::Aquarius => "Водолей",
            ZodiacSign::Pisces => "Рыбы",
            ZodiacSign::Aries => "Овен",
            ZodiacSign::Taurus => "Телец",
            ZodiacSign::Gemini => "Близнецы",
            ZodiacSign::Cancer => "Рак",
        }
    }

    /// The display label, e.g. `Leo (Лев)`.
    pub fn label(&self) -> &'static str {
        match self {
            ZodiacSign::Leo => "Leo (Лев)",
            ZodiacSign::Virgo => "Virgo (Дева)",
            ZodiacSign::Libra => "Libra (Весы)",
            ZodiacSign::Scorpio => "Scorpio (Скорпион)",
            ZodiacSign::Sagittarius => "Sagittarius (Стрелец)",
            ZodiacSign::Capricorn => "Capricorn (Козерог)",
            ZodiacSign::Aquarius => "Aquarius (Водолей)",
            ZodiacSign::Pisces => "Pisces (Рыбы)",
            ZodiacSign::Aries => "Aries (Овен)",
            ZodiacSign::Taurus => "Taurus (Телец)",
            ZodiacSign::Gemini => "Gemini (Близнецы)",
            ZodiacSign::Cancer => "Cancer (Рак)",
        }
    }

    pub fn label_with(&self, style: LabelStyle) -> &'static str {
        match style {
            LabelStyle::Bilingual => self.label(),
            LabelStyle::English => self.english_name(),
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of classifying a longitude into a zodiac band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignClassification {
    Recognized(ZodiacSign),
    /// The longitude fell outside every band.
    Unrecognized,
}

impl SignClassification {
    pub fn from_longitude(longitude: f64) -> Self {
        match ZodiacSign::from_longitude(longitude) {
            Some(sign) => SignClassification::Recognized(sign),
            None => SignClassification::Unrecognized,
        }
    }

    pub fn sign(&self) -> Option<ZodiacSign> {
        match self {
            SignClassification::Recognized(sign) => Some(*sign),
            SignClassification::Unrecognized => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, SignClassification::Recognized(_))
    }

    pub fn label(&self) -> &'static str {
        self.label_with(LabelStyle::Bilingual)
    }

    pub fn label_with(&self, style: LabelStyle) -> &'static str {
        match self {
            SignClassification::Recognized(sign) => sign.label_with(style),
            SignClassification::Unrecognized => UNRECOGNIZED_LABEL,
        }
    }
}

impl fmt::Display for SignClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Computed ecliptic longitude of the moon, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct LunarLongitude(qtty::Degrees);

impl LunarLongitude {
    pub fn new(degrees: f64) -> Self {
        Self(qtty::Degrees::new(degrees))
    }

    pub fn degrees(&self) -> f64 {
        self.0.value()
    }

    pub fn classify(&self) -> SignClassification {
        SignClassification::from_longitude(self.degrees())
    }
}

/// Days elapsed in the current synodic cycle, in [0, 29.53).
///
/// # Examples
///
/// ```
/// use moon_rust::core::domain::LunarCycleDay;
///
/// let day = LunarCycleDay::new(16.158899);
/// assert_eq!(day.formatted(), "16.16");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct LunarCycleDay(qtty::Days);

impl LunarCycleDay {
    /// Wraps a cycle position, folding the closed end of the cycle and
    /// negative zero back onto `0.0`.
    pub fn new(days: f64) -> Self {
        let days = if days <= 0.0 || days >= SYNODIC_PERIOD_DAYS {
            0.0
        } else {
            days
        };
        Self(qtty::Days::new(days))
    }

    pub fn days(&self) -> f64 {
        self.0.value()
    }

    /// Two-decimal rendering, rounding exact ties upward.
    pub fn formatted(&self) -> String {
        to_fixed_2(self.days())
    }
}

impl fmt::Display for LunarCycleDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Formats a non-negative value with exactly two decimals.
///
/// `{:.2}` rounds exact binary ties (x.125, x.375, ...) to even; those are
/// nudged upward so every tie resolves to the larger neighbour.
pub(crate) fn to_fixed_2(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.fract() == 0.0 && (eighths as i64) % 2 != 0;
    if is_tie {
        format!("{:.2}", value + 0.001)
    } else {
        format!("{:.2}", value)
    }
}
