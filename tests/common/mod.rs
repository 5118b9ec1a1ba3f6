// For the full copyright and license information, please view the LICENSE
// file that was distributed with this source code.

use jiff::tz::TimeZone;
use jiff::Zoned;

/// Render an instant the way the reference fixtures are written: the
/// UTC wall clock, the offset, the zone name, and the fraction only
/// when it is non-zero (`2014-05-11 08:20:13.787 +0000 UTC`).
pub fn canonical(ts: &Zoned) -> String {
    ts.with_time_zone(TimeZone::UTC)
        .strftime("%Y-%m-%d %H:%M:%S%.f %z %Z")
        .to_string()
}

/// Parse with UTC as the default location and compare canonically.
pub fn check_utc(input: &str, expected: &str) {
    let parsed = match dateparse::parse_in(input, &TimeZone::UTC) {
        Ok(v) => v,
        Err(e) => panic!("failed to parse {input:?}: {e}"),
    };
    assert_eq!(canonical(&parsed), expected, "input value: {input}");
}

/// Parse with an explicit default location and compare canonically.
pub fn check_in(input: &str, tz: &TimeZone, expected: &str) {
    let parsed = match dateparse::parse_in(input, tz) {
        Ok(v) => v,
        Err(e) => panic!("failed to parse {input:?}: {e}"),
    };
    assert_eq!(canonical(&parsed), expected, "input value: {input}");
}
