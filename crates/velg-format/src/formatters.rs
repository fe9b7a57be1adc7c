//! Locale-aware date and number formatting.
//!
//! [`FormatterContext`] carries the active display locale. It is an
//! ordinary value: views hold one (or borrow the shell's), change it with
//! [`FormatterContext::set_locale`] and restore the default with
//! [`FormatterContext::reset`]. Nothing here reads ambient state except
//! [`FormatterContext::format_relative_time_now`], which reads the clock.
//!
//! Times are rendered in UTC.

use chrono::{DateTime, Datelike, Timelike, Utc};
use tracing::debug;

use crate::locale::Locale;

/// Relative phrases switch to an absolute date at this many days.
const RELATIVE_DAY_LIMIT: i64 = 30;

/// Fraction digits kept by [`FormatterContext::format_number`].
const NUMBER_MAX_FRACTION_DIGITS: usize = 3;

/// Errors produced when formatting string input.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The input was not an RFC 3339 timestamp.
    #[error("invalid timestamp {input:?}: {source}")]
    InvalidTimestamp {
        /// The rejected input.
        input: String,
        /// The underlying parse error.
        source: chrono::ParseError,
    },
}

/// Granularity of a formatted date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateStyle {
    /// Numeric: `2/16/2026`.
    Short,
    /// Abbreviated month: `Feb 16, 2026`.
    #[default]
    Medium,
    /// Weekday and full month: `Monday, February 16, 2026`.
    Long,
}

/// Formatting configuration with an explicit display locale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatterContext {
    locale: Locale,
}

impl FormatterContext {
    /// Create a context for the given locale.
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Create a context from a locale tag, falling back to English.
    pub fn from_tag(tag: &str) -> Self {
        let mut ctx = Self::default();
        ctx.set_locale(tag);
        ctx
    }

    /// The active locale.
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch the active locale. Unsupported tags select English.
    pub fn set_locale(&mut self, tag: &str) {
        self.locale = Locale::from_tag(tag).unwrap_or_else(|| {
            debug!(tag, "unsupported formatter locale, using en");
            Locale::En
        });
    }

    /// Restore the default locale.
    pub fn reset(&mut self) {
        self.locale = Locale::default();
    }

    // -----------------------------------------------------------------------
    // Dates
    // -----------------------------------------------------------------------

    /// Format a date at the given granularity.
    pub fn format_date(&self, date: DateTime<Utc>, style: DateStyle) -> String {
        let (day, month, year) = (date.day(), date.month(), date.year());
        match (self.locale, style) {
            (Locale::En, DateStyle::Short) => format!("{month}/{day}/{year}"),
            (Locale::De, DateStyle::Short) => format!("{day}.{month}.{year}"),
            (Locale::En, DateStyle::Medium) => {
                format!("{} {day}, {year}", self.locale.month_short(month))
            }
            (Locale::De, DateStyle::Medium) => {
                format!("{day}. {} {year}", self.locale.month_short(month))
            }
            (Locale::En, DateStyle::Long) => format!(
                "{}, {} {day}, {year}",
                self.locale
                    .weekday_name(date.weekday().num_days_from_monday()),
                self.locale.month_name(month)
            ),
            (Locale::De, DateStyle::Long) => format!(
                "{}, {day}. {} {year}",
                self.locale
                    .weekday_name(date.weekday().num_days_from_monday()),
                self.locale.month_name(month)
            ),
        }
    }

    /// Parse an RFC 3339 timestamp and format it.
    pub fn format_date_str(&self, input: &str, style: DateStyle) -> Result<String, FormatError> {
        Ok(self.format_date(parse_timestamp(input)?, style))
    }

    /// Medium date followed by a two-digit time.
    pub fn format_date_time(&self, date: DateTime<Utc>) -> String {
        let medium = self.format_date(date, DateStyle::Medium);
        match self.locale {
            Locale::En => {
                let (pm, hour) = date.hour12();
                let suffix = if pm { "PM" } else { "AM" };
                format!("{medium}, {hour:02}:{:02} {suffix}", date.minute())
            }
            Locale::De => format!("{medium}, {:02}:{:02}", date.hour(), date.minute()),
        }
    }

    /// Describe `date` relative to `now`.
    ///
    /// Seconds, minutes, hours and days are tried in turn; anything 30 days
    /// or more away is rendered as an absolute medium date instead.
    pub fn format_relative_time(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let diff_ms = now.signed_duration_since(date).num_milliseconds();
        let diff_sec = round_div(diff_ms, 1000);
        let diff_min = round_div(diff_sec, 60);
        let diff_hr = round_div(diff_min, 60);
        let diff_day = round_div(diff_hr, 24);

        if diff_sec.abs() < 60 {
            return self.relative_phrase(diff_sec.saturating_neg(), TimeUnit::Second);
        }
        if diff_min.abs() < 60 {
            return self.relative_phrase(diff_min.saturating_neg(), TimeUnit::Minute);
        }
        if diff_hr.abs() < 24 {
            return self.relative_phrase(diff_hr.saturating_neg(), TimeUnit::Hour);
        }
        if diff_day.abs() < RELATIVE_DAY_LIMIT {
            return self.relative_phrase(diff_day.saturating_neg(), TimeUnit::Day);
        }
        self.format_date(date, DateStyle::Medium)
    }

    /// [`Self::format_relative_time`] against the current clock.
    pub fn format_relative_time_now(&self, date: DateTime<Utc>) -> String {
        self.format_relative_time(date, Utc::now())
    }

    fn relative_phrase(self, value: i64, unit: TimeUnit) -> String {
        match (self.locale, unit, value) {
            (Locale::En, TimeUnit::Second, 0) => return String::from("now"),
            (Locale::En, TimeUnit::Day, -1) => return String::from("yesterday"),
            (Locale::En, TimeUnit::Day, 1) => return String::from("tomorrow"),
            (Locale::De, TimeUnit::Second, 0) => return String::from("jetzt"),
            (Locale::De, TimeUnit::Day, -1) => return String::from("gestern"),
            (Locale::De, TimeUnit::Day, 1) => return String::from("morgen"),
            _ => {}
        }

        let magnitude = value.unsigned_abs();
        let past = value < 0;
        match self.locale {
            Locale::En => {
                let word = unit.english(magnitude == 1);
                if past {
                    format!("{magnitude} {word} ago")
                } else {
                    format!("in {magnitude} {word}")
                }
            }
            Locale::De => {
                let word = unit.german(magnitude == 1);
                if past {
                    format!("vor {magnitude} {word}")
                } else {
                    format!("in {magnitude} {word}")
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Numbers
    // -----------------------------------------------------------------------

    /// Format a number with locale grouping and up to three fraction digits.
    pub fn format_number(&self, value: f64) -> String {
        self.format_decimal(value, NUMBER_MAX_FRACTION_DIGITS)
    }

    /// Format a ratio (`0.125`) as a percentage (`12.5%`) with at most one fraction digit.
    pub fn format_percent(&self, value: f64) -> String {
        let number = self.format_decimal(value * 100.0, 1);
        match self.locale {
            Locale::En => format!("{number}%"),
            Locale::De => format!("{number}\u{a0}%"),
        }
    }

    fn format_decimal(self, value: f64, max_fraction_digits: usize) -> String {
        if value.is_nan() {
            return String::from("NaN");
        }
        if value.is_infinite() {
            return String::from(if value > 0.0 { "∞" } else { "-∞" });
        }

        let rounded = round_half_away(value.abs(), max_fraction_digits);
        let fixed = format!("{rounded:.max_fraction_digits$}");
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut out = String::with_capacity(fixed.len().saturating_add(8));
        let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.locale.group_separator()));
        if !frac_part.is_empty() {
            out.push(self.locale.decimal_separator());
            out.push_str(frac_part);
        }
        out
    }
}

#[derive(Debug, Clone, Copy)]
enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    const fn english(self, singular: bool) -> &'static str {
        match (self, singular) {
            (Self::Second, true) => "second",
            (Self::Second, false) => "seconds",
            (Self::Minute, true) => "minute",
            (Self::Minute, false) => "minutes",
            (Self::Hour, true) => "hour",
            (Self::Hour, false) => "hours",
            (Self::Day, true) => "day",
            (Self::Day, false) => "days",
        }
    }

    /// German noun; both "vor" and "in" take the dative plural (`Tagen`).
    const fn german(self, singular: bool) -> &'static str {
        match (self, singular) {
            (Self::Second, true) => "Sekunde",
            (Self::Second, false) => "Sekunden",
            (Self::Minute, true) => "Minute",
            (Self::Minute, false) => "Minuten",
            (Self::Hour, true) => "Stunde",
            (Self::Hour, false) => "Stunden",
            (Self::Day, true) => "Tag",
            (Self::Day, false) => "Tagen",
        }
    }
}

/// Integer division rounding half towards positive infinity.
const fn round_div(numerator: i64, denominator: i64) -> i64 {
    numerator
        .saturating_mul(2)
        .saturating_add(denominator)
        .div_euclid(denominator.saturating_mul(2))
}

/// Round at `digits` fraction digits with ties away from zero, the way
/// `Intl.NumberFormat` does. `format!` alone rounds ties to even.
fn round_half_away(value: f64, digits: usize) -> f64 {
    let factor = i32::try_from(digits).map_or(1.0, |d| 10_f64.powi(d));
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len.saturating_add(len / 3));
    for (i, ch) in digits.chars().enumerate() {
        let remaining = len.saturating_sub(i);
        if i > 0 && remaining % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}

fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, FormatError> {
    DateTime::parse_from_rfc3339(input)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|source| FormatError::InvalidTimestamp {
            input: input.to_owned(),
            source,
        })
}
