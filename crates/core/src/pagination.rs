//! Start/count listing window rules.
//!
//! `start` is the number of rows skipped, `count` the number of rows
//! returned. Out-of-range values are reset rather than rejected.

/// Number of rows returned when `count` is absent or out of range.
pub const DEFAULT_COUNT: i64 = 10;

/// Largest accepted `count`.
pub const MAX_COUNT: i64 = 10;

/// Raw `?start=&count=` query values as sent by the client.
///
/// Kept as strings so that a non-integer value falls back to the defaults
/// instead of failing the whole request.
#[derive(Debug, Default)]
pub struct WindowParams {
    pub start: Option<String>,
    pub count: Option<String>,
}

/// A validated listing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: i64,
    pub count: i64,
}

impl WindowParams {
    /// Collect `start` and `count` from decoded query pairs.
    ///
    /// When a key repeats, its first value wins. Other keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "start" => &mut params.start,
                "count" => &mut params.count,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }

    /// Resolve the raw values into a clamped [`Window`].
    ///
    /// Missing or unparsable values are read as `0` before clamping.
    pub fn window(&self) -> Window {
        Window {
            start: clamp_start(parse_lenient(self.start.as_deref())),
            count: clamp_count(parse_lenient(self.count.as_deref())),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            start: 0,
            count: DEFAULT_COUNT,
        }
    }
}

/// Reset `count` to [`DEFAULT_COUNT`] when it falls outside `1..=MAX_COUNT`.
pub fn clamp_count(count: i64) -> i64 {
    if (1..=MAX_COUNT).contains(&count) {
        count
    } else {
        DEFAULT_COUNT
    }
}

/// Reset a negative `start` to zero. There is no upper bound.
pub fn clamp_start(start: i64) -> i64 {
    start.max(0)
}

fn parse_lenient(raw: Option<&str>) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
