// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

//! A Rust crate for parsing date/time strings whose layout is not known
//! in advance, in the spirit of JavaScript's `Date.parse`.
//!
//! A single pass over the input commits to one of a closed family of
//! layouts from the first separator it meets, then extracts year,
//! month, day, clock, fractional seconds and time-zone information and
//! binds them to an absolute [`jiff::Zoned`] instant. Supported shapes
//! include, among others:
//!
//! * ISO-ish forms: `2009-08-12T22:15:09.99Z`, `2014-05-11 08:20:13,787`
//! * US forms: `4/8/14 22:05`, `03/19/2012 10:11:59.3186369`, `3.31.2014`
//! * Month and weekday forms: `oct 7, '70`, `12 Feb 2006, 19:17`,
//!   `Mon Jan  2 15:04:05 MST 2006`,
//!   `Fri Jul 03 2015 18:04:07 GMT+0100 (GMT Daylight Time)`
//! * `2014年04月08日 19:17:22`
//! * Unix epoch digits: `1384216367111` (seconds, milliseconds,
//!   microseconds or nanoseconds by digit count)
//!
//! When the input carries no zone evidence the wall clock is read in a
//! *default location*: the host's time zone for [`parse_any`] and
//! [`parse_local`], or an explicit [`jiff::tz::TimeZone`] for
//! [`parse_in`]. An explicit offset in the input always wins over the
//! default, so callers that need reproducible results independent of
//! the machine they run on should prefer `parse_in`.
//!
//! ```
//! use jiff::tz::TimeZone;
//!
//! let ts = dateparse::parse_in("May 8, 2009 5:57:51 PM", &TimeZone::UTC)?;
//! assert_eq!(ts.to_string(), "2009-05-08T17:57:51+00:00[UTC]");
//!
//! // No zone in the input: the default location supplies one.
//! let denver = TimeZone::get("America/Denver")?;
//! let ts = dateparse::parse_in("2013-02-01 00:00:00", &denver)?;
//! assert_eq!(ts.timestamp().to_string(), "2013-02-01T07:00:00Z");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::error::Error;
use std::fmt::{self, Display};

use jiff::tz::TimeZone;
use jiff::Zoned;

mod classify;
mod epoch;
mod machine;
mod resolve;
mod timezone;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// No recognized layout matched the input.
    UnknownFormat,
    /// A field was recognized but its value is impossible, such as a
    /// thirteenth month or a tenth fraction digit.
    OutOfRange(&'static str),
    /// A zone abbreviation that is not in the known set, with no
    /// numeric offset to fall back on.
    UnknownZone(String),
    /// All-digit input whose length maps to no timestamp precision.
    EpochLength(usize),
    /// All-digit input with a leading minus.
    NegativeEpoch,
    /// Empty or whitespace-only input.
    Empty,
    /// The calendar library rejected the resolved components.
    Calendar(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownFormat => {
                write!(f, "unrecognized date/time layout")
            }
            Self::OutOfRange(field) => {
                write!(f, "{field} is out of range")
            }
            Self::UnknownZone(name) => {
                write!(f, "unknown time zone {name:?}")
            }
            Self::EpochLength(n) => {
                write!(
                    f,
                    "{n} digits match no timestamp precision (expected 10, 13, 16 or 19)"
                )
            }
            Self::NegativeEpoch => {
                write!(f, "negative numeric timestamps are not supported")
            }
            Self::Empty => {
                write!(f, "empty input")
            }
            Self::Calendar(reason) => {
                write!(f, "{reason}")
            }
        }
    }
}

impl Error for ParseError {}

impl From<jiff::Error> for ParseError {
    fn from(err: jiff::Error) -> Self {
        Self::Calendar(err.to_string())
    }
}

/// Parses a date/time string of unknown layout, reading any zoneless
/// wall clock in the host's time zone.
///
/// # Examples
///
/// ```
/// let ts = dateparse::parse_any("2009-08-12T22:15:09.99Z").unwrap();
/// assert_eq!(ts.timestamp().to_string(), "2009-08-12T22:15:09.99Z");
/// ```
pub fn parse_any(s: &str) -> Result<Zoned, ParseError> {
    parse_in(s, &TimeZone::system())
}

/// Parses a date/time string of unknown layout with an explicit default
/// location for inputs that carry no zone evidence.
///
/// Inputs with an explicit offset are unaffected by `default`:
///
/// ```
/// use jiff::tz::TimeZone;
///
/// let denver = TimeZone::get("America/Denver").unwrap();
/// let pinned = dateparse::parse_in("2013-02-01 00:00:00 -0700", &denver).unwrap();
/// let floating = dateparse::parse_in("2013-02-01 00:00:00", &TimeZone::UTC).unwrap();
/// assert_eq!(pinned.timestamp().as_second() - floating.timestamp().as_second(), 7 * 3600);
/// ```
pub fn parse_in(s: &str, default: &TimeZone) -> Result<Zoned, ParseError> {
    let input = s.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    if let Some(timestamp) = epoch::parse(input) {
        return Ok(timestamp?.to_zoned(default.clone()));
    }
    let recognized = machine::recognize(input)?;
    let (tuple, evidence) = resolve::resolve(&recognized)?;
    timezone::bind(&tuple, &evidence, default)
}

/// Parses a date/time string of unknown layout in the host's time zone.
///
/// This is [`parse_in`] with [`TimeZone::system`] as the default
/// location, and behaves exactly like [`parse_any`]; it exists so that
/// callers can say which of the two they mean.
pub fn parse_local(s: &str) -> Result<Zoned, ParseError> {
    parse_in(s, &TimeZone::system())
}

/// Like [`parse_any`], but panics when the input cannot be parsed.
///
/// ```should_panic
/// dateparse::must_parse("NOT GONNA HAPPEN");
/// ```
pub fn must_parse(s: &str) -> Zoned {
    match parse_any(s) {
        Ok(ts) => ts,
        Err(err) => panic!("could not parse {s:?} as a date/time: {err}"),
    }
}
