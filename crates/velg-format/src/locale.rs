//! Supported display locales and their calendar vocabulary.

/// A display locale.
///
/// Unknown tags fall back to [`Locale::En`], mirroring how the platform
/// treats simulations whose content locale has no UI translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English (United States conventions).
    #[default]
    En,
    /// German.
    De,
}

const EN_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DE_MONTHS: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];

const DE_MONTHS_SHORT: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
    "Dez.",
];

const EN_WEEKDAYS: [&str; 7] = [
    "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
];

const DE_WEEKDAYS: [&str; 7] = [
    "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
];

impl Locale {
    /// Resolve a BCP 47 tag (`en`, `en-US`, `de-DE`, ...) to a supported locale.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "de" => Some(Self::De),
            _ => None,
        }
    }

    /// Canonical tag of the locale.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Full month name for a 1-based month number.
    pub fn month_name(self, month: u32) -> &'static str {
        let table = match self {
            Self::En => &EN_MONTHS,
            Self::De => &DE_MONTHS,
        };
        lookup(table, month.saturating_sub(1))
    }

    /// Abbreviated month name for a 1-based month number.
    pub fn month_short(self, month: u32) -> &'static str {
        let table = match self {
            Self::En => &EN_MONTHS_SHORT,
            Self::De => &DE_MONTHS_SHORT,
        };
        lookup(table, month.saturating_sub(1))
    }

    /// Weekday name, Monday = 0.
    pub fn weekday_name(self, days_from_monday: u32) -> &'static str {
        let table = match self {
            Self::En => &EN_WEEKDAYS,
            Self::De => &DE_WEEKDAYS,
        };
        lookup(table, days_from_monday)
    }

    /// Thousands separator.
    pub const fn group_separator(self) -> char {
        match self {
            Self::En => ',',
            Self::De => '.',
        }
    }

    /// Decimal separator.
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::En => '.',
            Self::De => ',',
        }
    }
}

fn lookup(table: &[&'static str], index: u32) -> &'static str {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or_default()
}
