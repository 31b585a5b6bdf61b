//! Wall-clock capture at invocation start.

use tally_ir::TimeFacts;
use time::OffsetDateTime;

/// Snapshot the clock once; `time(<field>)` substitution reads only this.
///
/// Local time when the platform can determine the UTC offset, UTC as the
/// fallback (matches how the local-offset lookup can fail in sandboxed
/// processes).
pub(crate) fn capture() -> TimeFacts {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    TimeFacts {
        day: now.day(),
        hour: now.hour(),
        minute: now.minute(),
        second: now.second(),
        millisecond: now.millisecond(),
    }
}

/// Seed material for the process-wide RNG.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn clock_seed() -> u64 {
    let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
    (nanos as u64) ^ ((nanos >> 64) as u64)
}
