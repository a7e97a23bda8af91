use std::fmt;
use std::str::FromStr;

use crate::constants::{DAY_PREFIX, MONTH_PREFIX};
use crate::errors::AssembleError;

/// Which one-hot group a categorical selection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryGroup {
    Month,
    Day,
}

impl fmt::Display for CategoryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Day => write!(f, "day"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Jan => "jan",
            Self::Feb => "feb",
            Self::Mar => "mar",
            Self::Apr => "apr",
            Self::May => "may",
            Self::Jun => "jun",
            Self::Jul => "jul",
            Self::Aug => "aug",
            Self::Sep => "sep",
            Self::Oct => "oct",
            Self::Nov => "nov",
            Self::Dec => "dec",
        }
    }

    /// Name of this month's one-hot flag, e.g. `month_aug`.
    pub fn flag_name(self) -> String {
        format!("{MONTH_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Month {
    type Err = AssembleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| AssembleError::UnknownCategory {
                group: CategoryGroup::Month,
                value: raw.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "mon",
            Self::Tue => "tue",
            Self::Wed => "wed",
            Self::Thu => "thu",
            Self::Fri => "fri",
            Self::Sat => "sat",
            Self::Sun => "sun",
        }
    }

    /// Name of this day's one-hot flag, e.g. `day_fri`.
    pub fn flag_name(self) -> String {
        format!("{DAY_PREFIX}{}", self.as_str())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = AssembleError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == needle)
            .ok_or_else(|| AssembleError::UnknownCategory {
                group: CategoryGroup::Day,
                value: raw.to_string(),
            })
    }
}

/// The ten numeric inputs the form collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    X,
    Y,
    Ffmc,
    Dmc,
    Dc,
    Isi,
    Temp,
    Rh,
    Wind,
    Rain,
}

impl NumericField {
    pub const ALL: [NumericField; 10] = [
        NumericField::X,
        NumericField::Y,
        NumericField::Ffmc,
        NumericField::Dmc,
        NumericField::Dc,
        NumericField::Isi,
        NumericField::Temp,
        NumericField::Rh,
        NumericField::Wind,
        NumericField::Rain,
    ];

    /// Column name the training pipeline used for this field.
    pub fn feature_name(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Ffmc => "FFMC",
            Self::Dmc => "DMC",
            Self::Dc => "DC",
            Self::Isi => "ISI",
            Self::Temp => "temp",
            Self::Rh => "RH",
            Self::Wind => "wind",
            Self::Rain => "rain",
        }
    }

    pub fn from_feature_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.feature_name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::X => "X spatial index",
            Self::Y => "Y spatial index",
            Self::Ffmc => "FFMC",
            Self::Dmc => "DMC",
            Self::Dc => "DC",
            Self::Isi => "ISI",
            Self::Temp => "Temperature (°C)",
            Self::Rh => "Relative Humidity (%)",
            Self::Wind => "Wind (km/h)",
            Self::Rain => "Rain (mm)",
        }
    }

    /// Inclusive `(min, max)` the presentation layer must enforce.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::X => (1.0, 9.0),
            Self::Y => (2.0, 9.0),
            Self::Ffmc => (18.0, 97.0),
            Self::Dmc => (1.0, 292.0),
            Self::Dc => (7.0, 861.0),
            Self::Isi => (0.0, 57.0),
            Self::Temp => (2.0, 34.0),
            Self::Rh => (15.0, 100.0),
            Self::Wind => (0.0, 10.0),
            Self::Rain => (0.0, 7.0),
        }
    }

    pub fn default_value(self) -> f64 {
        match self {
            Self::X => 5.0,
            Self::Y => 5.0,
            Self::Ffmc => 90.0,
            Self::Dmc => 110.0,
            Self::Dc => 500.0,
            Self::Isi => 9.0,
            Self::Temp => 18.0,
            Self::Rh => 45.0,
            Self::Wind => 4.0,
            Self::Rain => 0.0,
        }
    }

    /// X, Y and RH are collected as whole numbers.
    pub fn is_integer(self) -> bool {
        matches!(self, Self::X | Self::Y | Self::Rh)
    }

    pub fn contains(self, value: f64) -> bool {
        let (min, max) = self.range();
        value.is_finite() && value >= min && value <= max
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.feature_name())
    }
}

/// One interaction's worth of typed form input.
#[derive(Debug, Clone, PartialEq)]
pub struct FireObservation {
    pub month: Month,
    pub day: Weekday,
    pub x: u8,
    pub y: u8,
    pub ffmc: f64,
    pub dmc: f64,
    pub dc: f64,
    pub isi: f64,
    pub temp: f64,
    pub rh: u8,
    pub wind: f64,
    pub rain: f64,
}

impl FireObservation {
    pub fn value(&self, field: NumericField) -> f64 {
        match field {
            NumericField::X => f64::from(self.x),
            NumericField::Y => f64::from(self.y),
            NumericField::Ffmc => self.ffmc,
            NumericField::Dmc => self.dmc,
            NumericField::Dc => self.dc,
            NumericField::Isi => self.isi,
            NumericField::Temp => self.temp,
            NumericField::Rh => f64::from(self.rh),
            NumericField::Wind => self.wind,
            NumericField::Rain => self.rain,
        }
    }

    /// Store `value` into `field`. Integer fields are rounded and clamped
    /// to their range; NaN stores 0, which [`out_of_range`](Self::out_of_range)
    /// reports. Float fields are stored as given.
    pub fn set_value(&mut self, field: NumericField, value: f64) {
        let whole = || {
            let (min, max) = field.range();
            value.round().clamp(min, max) as u8
        };
        match field {
            NumericField::X => self.x = whole(),
            NumericField::Y => self.y = whole(),
            NumericField::Ffmc => self.ffmc = value,
            NumericField::Dmc => self.dmc = value,
            NumericField::Dc => self.dc = value,
            NumericField::Isi => self.isi = value,
            NumericField::Temp => self.temp = value,
            NumericField::Rh => self.rh = whole(),
            NumericField::Wind => self.wind = value,
            NumericField::Rain => self.rain = value,
        }
    }

    /// Fields whose current value lies outside the accepted range.
    pub fn out_of_range(&self) -> Vec<NumericField> {
        NumericField::ALL
            .into_iter()
            .filter(|f| !f.contains(self.value(*f)))
            .collect()
    }
}

impl Default for FireObservation {
    fn default() -> Self {
        Self {
            month: Month::Jan,
            day: Weekday::Mon,
            x: 5,
            y: 5,
            ffmc: NumericField::Ffmc.default_value(),
            dmc: NumericField::Dmc.default_value(),
            dc: NumericField::Dc.default_value(),
            isi: NumericField::Isi.default_value(),
            temp: NumericField::Temp.default_value(),
            rh: 45,
            wind: NumericField::Wind.default_value(),
            rain: NumericField::Rain.default_value(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireLabel {
    NoFire = 0,
    Fire = 1,
}

impl FireLabel {
    pub fn as_class(self) -> usize {
        self as usize
    }

    pub fn from_class(class: usize) -> Option<Self> {
        match class {
            0 => Some(Self::NoFire),
            1 => Some(Self::Fire),
            _ => None,
        }
    }
}

impl fmt::Display for FireLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFire => write!(f, "no fire"),
            Self::Fire => write!(f, "fire"),
        }
    }
}

/// Outcome of one inference call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: FireLabel,
    /// `[P(no fire), P(fire)]`.
    pub probabilities: [f64; 2],
}

impl Prediction {
    pub fn no_fire_probability(&self) -> f64 {
        self.probabilities[FireLabel::NoFire.as_class()]
    }

    pub fn fire_probability(&self) -> f64 {
        self.probabilities[FireLabel::Fire.as_class()]
    }

    /// Probability of the predicted class.
    pub fn label_probability(&self) -> f64 {
        self.probabilities[self.label.as_class()]
    }
}
