//! Field checks shared by the section validators
//!
//! A [`Checker`] reads raw draft values, records an error under
//! `<prefix><key>` for anything it rejects, and hands back the normalized
//! value (or `None` when the field was rejected or absent).

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::FieldErrors;
use crate::models::FieldSpec;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

pub(crate) struct Checker<'e> {
    errors: &'e mut FieldErrors,
    fields: &'static [FieldSpec],
    prefix: String,
}

impl<'e> Checker<'e> {
    pub(crate) fn new(errors: &'e mut FieldErrors, fields: &'static [FieldSpec]) -> Self {
        Self {
            errors,
            fields,
            prefix: String::new(),
        }
    }

    /// Record errors under `prefix` (e.g. `transcript.` or `2.`)
    pub(crate) fn scoped(
        errors: &'e mut FieldErrors,
        fields: &'static [FieldSpec],
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            errors,
            fields,
            prefix: prefix.into(),
        }
    }

    fn label(&self, key: &str) -> &'static str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.label)
            .unwrap_or("Field")
    }

    pub(crate) fn fail(&mut self, key: &str, message: impl Into<String>) {
        let path = format!("{}{}", self.prefix, key);
        self.errors.insert(path, message);
    }

    /// Trimmed text, `None` when blank
    pub(crate) fn optional(&self, value: Option<&str>) -> Option<String> {
        value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
    }

    pub(crate) fn required(&mut self, key: &str, value: Option<&str>) -> Option<String> {
        let text = self.optional(value);
        if text.is_none() {
            let message = format!("{} is required", self.label(key));
            self.fail(key, message);
        }
        text
    }

    /// Required text, or `fallback` when blank
    pub(crate) fn or_default(&self, value: Option<&str>, fallback: impl Into<String>) -> String {
        self.optional(value).unwrap_or_else(|| fallback.into())
    }

    /// Optional text capped at `max` characters
    pub(crate) fn bounded(&mut self, key: &str, value: Option<&str>, max: usize) -> Option<String> {
        let text = self.optional(value)?;
        if text.chars().count() > max {
            let message = format!("{} must be at most {} characters", self.label(key), max);
            self.fail(key, message);
            return None;
        }
        Some(text)
    }

    /// Required value from a fixed literal set
    pub(crate) fn choice<T>(
        &mut self,
        key: &str,
        value: Option<&str>,
        allowed: &[&str],
        parse: fn(&str) -> Option<T>,
    ) -> Option<T> {
        let text = self.required(key, value)?;
        let parsed = parse(&text);
        if parsed.is_none() {
            let message = format!("{} must be one of: {}", self.label(key), allowed.join(", "));
            self.fail(key, message);
        }
        parsed
    }

    fn integer(&mut self, key: &str, text: &str, range: RangeInclusive<i64>) -> Option<i64> {
        let Ok(number) = text.parse::<i64>() else {
            let message = format!("{} must be a whole number", self.label(key));
            self.fail(key, message);
            return None;
        };
        if !range.contains(&number) {
            let message = format!(
                "{} must be between {} and {}",
                self.label(key),
                range.start(),
                range.end()
            );
            self.fail(key, message);
            return None;
        }
        Some(number)
    }

    /// Required whole number inside `range`
    pub(crate) fn required_number(
        &mut self,
        key: &str,
        value: Option<&str>,
        range: RangeInclusive<i64>,
    ) -> Option<i64> {
        let text = self.required(key, value)?;
        self.integer(key, &text, range)
    }

    /// Optional whole number inside `range`
    pub(crate) fn optional_number(
        &mut self,
        key: &str,
        value: Option<&str>,
        range: RangeInclusive<i64>,
    ) -> Option<i64> {
        let text = self.optional(value)?;
        self.integer(key, &text, range)
    }

    /// Optional database id; must be a positive whole number
    pub(crate) fn optional_id(&mut self, key: &str, value: Option<&str>) -> Option<u32> {
        let text = self.optional(value)?;
        match text.parse::<u32>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                let message = format!("{} must be a positive whole number", self.label(key));
                self.fail(key, message);
                None
            }
        }
    }

    /// Required `YYYY-MM-DD` date
    pub(crate) fn date(&mut self, key: &str, value: Option<&str>) -> Option<NaiveDate> {
        let text = self.required(key, value)?;
        match NaiveDate::parse_from_str(&text, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                let message = format!("{} must be a date in YYYY-MM-DD format", self.label(key));
                self.fail(key, message);
                None
            }
        }
    }

    /// Optional email address; blank is allowed
    pub(crate) fn email(&mut self, key: &str, value: Option<&str>) -> Option<String> {
        let text = self.optional(value)?;
        if !EMAIL.is_match(&text) {
            self.fail(key, "Invalid email format");
            return None;
        }
        Some(text)
    }
}

/// Turn the collected pieces into a result.
///
/// `record` is only `None` when some required field was rejected, in which
/// case `errors` is non-empty.
pub(crate) fn finish<T>(errors: FieldErrors, record: Option<T>) -> Result<T, FieldErrors> {
    match record {
        Some(record) if errors.is_empty() => Ok(record),
        _ => Err(errors),
    }
}
