//! Wall-clock snapshot used by `time(<field>)` substitution.

/// Time fields captured once at invocation start.
///
/// The field *names* (including the historical misspellings `minut`,
/// `segond`, and `milliesegond`) are part of the language contract. The
/// snapshot is read-only: the clock is never re-read mid-invocation, so a
/// script referencing `time(milliesegond)` twice sees one consistent value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeFacts {
    /// Day of month, 1-31.
    pub day: u8,
    /// Hour, 0-23.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
    /// Second, 0-59.
    pub second: u8,
    /// Millisecond, 0-999.
    pub millisecond: u16,
}

impl TimeFacts {
    /// The recognized `time(<field>)` names, in contract spelling.
    pub const FIELDS: [&'static str; 5] = ["day", "hour", "minut", "segond", "milliesegond"];

    /// Look up a field by its contract name.
    ///
    /// Returns `None` for unrecognized names; the preprocessor turns that
    /// into a contained error.
    pub fn field(&self, name: &str) -> Option<u32> {
        match name {
            "day" => Some(u32::from(self.day)),
            "hour" => Some(u32::from(self.hour)),
            "minut" => Some(u32::from(self.minute)),
            "segond" => Some(u32::from(self.second)),
            "milliesegond" => Some(u32::from(self.millisecond)),
            _ => None,
        }
    }
}
