// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! Bind a resolved wall-clock reading to an absolute instant.
//!
//! Evidence from the input wins in this order: an explicit numeric
//! offset, then a zone name, then the caller's default location, then
//! UTC. A zone name is resolved against the default location the way
//! the reference behaves: `MST` means -07:00 when the default location
//! observes that abbreviation, and an unadjusted wall clock otherwise.

use jiff::civil::{Date, DateTime};
use jiff::tz::TimeZone;
use jiff::Zoned;

use crate::resolve::{CalendarTuple, ZoneEvidence};
use crate::ParseError;

pub(crate) fn bind(
    tuple: &CalendarTuple,
    evidence: &ZoneEvidence<'_>,
    default: &TimeZone,
) -> Result<Zoned, ParseError> {
    let dt = DateTime::new(
        tuple.year,
        tuple.month,
        tuple.day,
        tuple.hour,
        tuple.minute,
        tuple.second,
        tuple.subsec_nanosecond,
    )?;

    match *evidence {
        ZoneEvidence::Offset(seconds) | ZoneEvidence::OffsetAndNamed(seconds, _) => {
            Ok(dt.to_zoned(fixed_zone(seconds)?)?)
        }
        ZoneEvidence::Named(name) => bind_named(dt, name, default),
        ZoneEvidence::None => Ok(dt.to_zoned(default.clone())?),
    }
}

fn fixed_zone(seconds: i32) -> Result<TimeZone, ParseError> {
    if seconds == 0 {
        return Ok(TimeZone::UTC);
    }
    let offset = jiff::tz::Offset::from_seconds(seconds)?;
    Ok(TimeZone::fixed(offset))
}

/// Resolve a zone abbreviation against the default location.
///
/// The abbreviation is probed at the parsed wall clock and at
/// mid-winter and mid-summer of the same year, so that a standard-time
/// abbreviation still resolves at a daylight-saving date and vice
/// versa. An abbreviation the location does not use leaves the wall
/// clock untouched, provided the name is at least a known one.
fn bind_named(dt: DateTime, name: &str, default: &TimeZone) -> Result<Zoned, ParseError> {
    if matches!(
        name.to_ascii_lowercase().as_str(),
        "utc" | "gmt" | "ut" | "z"
    ) {
        return Ok(dt.to_zoned(TimeZone::UTC)?);
    }

    let year = dt.date().year();
    let probes = [
        dt,
        Date::new(year, 1, 1)?.at(12, 0, 0, 0),
        Date::new(year, 7, 1)?.at(12, 0, 0, 0),
    ];
    for probe in probes {
        let Ok(zoned) = probe.to_zoned(default.clone()) else {
            continue;
        };
        let info = default.to_offset_info(zoned.timestamp());
        if info.abbreviation().eq_ignore_ascii_case(name) {
            let pinned = dt.to_zoned(TimeZone::fixed(info.offset()))?;
            return Ok(pinned.with_time_zone(default.clone()));
        }
    }

    if known_abbreviation(name) {
        return Ok(dt.to_zoned(TimeZone::UTC)?);
    }
    Err(ParseError::UnknownZone(name.to_string()))
}

/// Parse `±H`, `±HH`, `±HMM`, `±HHMM`, `±H:MM` or `±HH:MM` into seconds
/// east of UTC.
pub(crate) fn parse_offset(text: &str) -> Option<i32> {
    let (sign, rest) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => {
            if !(1..=2).contains(&h.len()) || m.len() != 2 {
                return None;
            }
            (number(h)?, number(m)?)
        }
        None => match rest.len() {
            1 | 2 => (number(rest)?, 0),
            3 => (number(&rest[..1])?, number(&rest[1..])?),
            4 => (number(&rest[..2])?, number(&rest[2..])?),
            _ => return None,
        },
    };
    if hours > 14 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 3600 + minutes * 60))
}

fn number(text: &str) -> Option<i32> {
    text.bytes().try_fold(0i32, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + (b - b'0') as i32)
    })
}

/// The abbreviations the parser is willing to treat as zone names, the
/// subset GNU date recognizes. Membership is all that matters here: the
/// abbreviation's meaning comes from the default location or, failing
/// that, the wall clock is taken as is.
fn known_abbreviation(name: &str) -> bool {
    const NAMES: [&str; 42] = [
        "adt", "akdt", "akst", "art", "ast", "brst", "brt", "bst", "cat", "cdt", "cest", "cet",
        "clst", "clt", "cst", "eat", "edt", "eest", "eet", "est", "gst", "hst", "ist", "jst",
        "mdt", "msd", "msk", "mst", "ndt", "nst", "nzdt", "nzst", "pdt", "pst", "sast", "sgt",
        "sst", "wat", "west", "wet", "wit", "wita",
    ];
    let lower = name.to_ascii_lowercase();
    NAMES.binary_search(&lower.as_str()).is_ok()
}
