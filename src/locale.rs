//! Culture data consumed by the renderer.
//!
//! Only what the supported specifiers need is carried: calendar names,
//! AM/PM designators, the era name and the two separators.

/// Names and separators used when rendering a moment for one culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    name:               &'static str,
    month_names:        [&'static str; 12],
    month_names_short:  [&'static str; 12],
    /// Indexed from Sunday
    day_names:          [&'static str; 7],
    /// Indexed from Sunday
    day_names_short:    [&'static str; 7],
    am_designator:      &'static str,
    pm_designator:      &'static str,
    era_name:           &'static str,
    date_separator:     &'static str,
    time_separator:     &'static str,
}

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const ENGLISH_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ENGLISH_DAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl Locale {
    /// Culture-independent data (English names, `AM`/`PM`)
    pub const INVARIANT: Self = Self {
        name:              "",
        month_names:       ENGLISH_MONTHS,
        month_names_short: ENGLISH_MONTHS_SHORT,
        day_names:         ENGLISH_DAYS,
        day_names_short:   ENGLISH_DAYS_SHORT,
        am_designator:     "AM",
        pm_designator:     "PM",
        era_name:          "A.D.",
        date_separator:    "/",
        time_separator:    ":",
    };

    /// English (United Kingdom)
    pub const EN_GB: Self = Self {
        name:              "en-GB",
        month_names:       ENGLISH_MONTHS,
        month_names_short: ENGLISH_MONTHS_SHORT,
        day_names:         ENGLISH_DAYS,
        day_names_short:   ENGLISH_DAYS_SHORT,
        am_designator:     "am",
        pm_designator:     "pm",
        era_name:          "AD",
        date_separator:    "/",
        time_separator:    ":",
    };

    /// English (United States)
    pub const EN_US: Self = Self {
        name:              "en-US",
        month_names:       ENGLISH_MONTHS,
        month_names_short: ENGLISH_MONTHS_SHORT,
        day_names:         ENGLISH_DAYS,
        day_names_short:   ENGLISH_DAYS_SHORT,
        am_designator:     "AM",
        pm_designator:     "PM",
        era_name:          "AD",
        date_separator:    "/",
        time_separator:    ":",
    };

    /// French (France)
    pub const FR_FR: Self = Self {
        name:              "fr-FR",
        month_names:       [
            "janvier",
            "février",
            "mars",
            "avril",
            "mai",
            "juin",
            "juillet",
            "août",
            "septembre",
            "octobre",
            "novembre",
            "décembre",
        ],
        month_names_short: [
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
            "nov.", "déc.",
        ],
        day_names:         [
            "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
        ],
        day_names_short:   ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
        am_designator:     "AM",
        pm_designator:     "PM",
        era_name:          "ap. J.-C.",
        date_separator:    "/",
        time_separator:    ":",
    };

    const BUILT_IN: [Self; 4] = [Self::INVARIANT, Self::EN_GB, Self::EN_US, Self::FR_FR];

    /// Resolves a built-in locale by culture name.
    ///
    /// Matching is case-insensitive and accepts `_` in place of `-`. A bare
    /// language resolves to its primary region (`en` is `en-US`, `fr` is
    /// `fr-FR`) and the empty string is the invariant locale.
    pub fn by_name(name: &str) -> Option<Self> {
        let wanted = name.trim().replace('_', "-");
        let wanted = match wanted.to_ascii_lowercase().as_str() {
            "en" => "en-US".to_owned(),
            "fr" => "fr-FR".to_owned(),
            "invariant" => String::new(),
            _ => wanted,
        };
        Self::BUILT_IN
            .iter()
            .find(|locale| locale.name.eq_ignore_ascii_case(&wanted))
            .copied()
    }

    /// Culture name, empty for the invariant locale
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Full month name, `month` in `1..=12`
    pub fn month_name(&self, month: u32) -> &'static str {
        self.month_names[month_index(month)]
    }

    /// Abbreviated month name, `month` in `1..=12`
    pub fn month_name_short(&self, month: u32) -> &'static str {
        self.month_names_short[month_index(month)]
    }

    /// Full day name, `weekday` counted from Sunday = 0
    pub fn day_name(&self, weekday: u32) -> &'static str {
        self.day_names[weekday as usize % 7]
    }

    /// Abbreviated day name, `weekday` counted from Sunday = 0
    pub fn day_name_short(&self, weekday: u32) -> &'static str {
        self.day_names_short[weekday as usize % 7]
    }

    /// AM or PM designator for a 24-hour clock hour
    pub const fn designator(&self, hour: u32) -> &'static str {
        if hour < 12 {
            self.am_designator
        } else {
            self.pm_designator
        }
    }

    pub const fn era_name(&self) -> &'static str {
        self.era_name
    }

    pub const fn date_separator(&self) -> &'static str {
        self.date_separator
    }

    pub const fn time_separator(&self) -> &'static str {
        self.time_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

const fn month_index(month: u32) -> usize {
    (month as usize).saturating_sub(1) % 12
}
