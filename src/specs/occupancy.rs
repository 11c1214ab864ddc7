// src/specs/occupancy.rs
//! Scraping *spec* for the RockGymPro occupancy counter page.
//!
//! The portal embeds its counter state in an inline script:
//!
//! ```text
//! var data = {
//!   "AAA": { "capacity": "200", "count": "50", "subLabel": null,
//!            "lastUpdate": "Last updated: now (3:13 PM)" },
//! };
//! ```
//!
//! Responsibilities:
//! - Networking via `core::net::http_get`.
//! - Script-block scanning via `core::html`, literal extraction via `core::js`.
//! - Normalizing each entry into an [`OccupancySnapshot`].
//!
//! Non-Responsibilities: no metric formatting, no retries, no caching.

use chrono::{Local, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;

use crate::core::js::{self, Value};
use crate::core::{html, net};
use crate::error::ScrapeError;
use crate::params::{DATA_DECL, DATA_VAR, OCCUPANCY_PATH};

/// One location's state at scrape time. Rebuilt fresh on every fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct OccupancySnapshot {
    pub capacity: i64,
    pub occupancy: i64,
    pub updated_at: NaiveDateTime,
    pub label: Option<String>,
}

/// Location code → snapshot, in payload order.
pub type OccupancyTable = IndexMap<String, OccupancySnapshot>;

pub fn fetch() -> Result<OccupancyTable, ScrapeError> {
    logf!("GET {}", OCCUPANCY_PATH);
    let doc = net::http_get(OCCUPANCY_PATH)?;
    parse_doc(&doc)
}

/// Extract and normalize the occupancy table from a full HTML document.
///
/// A healthy page always carries the declaration, so a document where no
/// script block declares it is an error, not an empty result.
pub fn parse_doc(doc: &str) -> Result<OccupancyTable, ScrapeError> {
    for script in html::extract_script_blocks(doc) {
        // Saves tokenizing unrelated inline scripts
        if !script.contains(DATA_DECL) {
            continue;
        }
        if let Some(data) = js::extract_var_literal(&script, DATA_VAR)? {
            return normalize(&data);
        }
    }
    loge!("scanned every script block without finding `{DATA_DECL}…`");
    Err(ScrapeError::NoData(DATA_VAR))
}

fn normalize(data: &Value) -> Result<OccupancyTable, ScrapeError> {
    let entries = data.as_object().ok_or_else(|| {
        ScrapeError::MalformedLiteral(format!(
            "occupancy declaration must be an object, got {}",
            data.type_name()
        ))
    })?;

    let today = Local::now().date_naive();

    let mut table = OccupancyTable::new();
    for (name, counter) in entries {
        let counter = counter.as_object().ok_or_else(|| {
            ScrapeError::MalformedLiteral(format!(
                "counter `{name}` must be an object, got {}",
                counter.type_name()
            ))
        })?;

        let last_update = match field(counter, name, "lastUpdate")? {
            Value::Str(text) => text,
            other => {
                return Err(ScrapeError::MalformedLiteral(format!(
                    "`lastUpdate` of `{name}` must be a string, got {}",
                    other.type_name()
                )));
            }
        };
        let time = parse_last_update(last_update)?;

        let label = match field(counter, name, "subLabel")? {
            Value::Str(text) => Some(text.clone()),
            Value::Null => None,
            other => {
                return Err(ScrapeError::MalformedLiteral(format!(
                    "`subLabel` of `{name}` must be a string or null, got {}",
                    other.type_name()
                )));
            }
        };

        table.insert(
            name.clone(),
            OccupancySnapshot {
                capacity: int_field(counter, name, "capacity")?,
                occupancy: int_field(counter, name, "count")?,
                updated_at: today.and_time(time),
                label,
            },
        );
    }

    Ok(table)
}

fn field<'a>(
    counter: &'a IndexMap<String, Value>,
    name: &str,
    key: &str,
) -> Result<&'a Value, ScrapeError> {
    counter.get(key).ok_or_else(|| {
        ScrapeError::MalformedLiteral(format!("counter `{name}` is missing `{key}`"))
    })
}

/// The portal quotes its counts ("capacity": "200"), so integer-parsable
/// strings are accepted alongside integer literals.
fn int_field(counter: &IndexMap<String, Value>, name: &str, key: &str) -> Result<i64, ScrapeError> {
    match field(counter, name, key)? {
        Value::Int(v) => Ok(*v),
        Value::Str(text) => text.trim().parse::<i64>().map_err(|_| {
            ScrapeError::MalformedLiteral(format!("`{key}` of `{name}` is not an integer: {text:?}"))
        }),
        other => Err(ScrapeError::MalformedLiteral(format!(
            "`{key}` of `{name}` must be an integer, got {}",
            other.type_name()
        ))),
    }
}

/// Pull the trailing `(H:MM AM|PM)` clock time out of a lastUpdate string,
/// e.g. `"Last updated: now (3:13 PM)"`. The pattern is mandatory input; a
/// string without it fails rather than defaulting.
fn parse_last_update(text: &str) -> Result<NaiveTime, ScrapeError> {
    let bad = || ScrapeError::MalformedTimestamp(s!(text));

    let trimmed = text.trim_end();
    let stripped = trimmed.strip_suffix(')').ok_or_else(bad)?;
    let open = stripped.rfind('(').ok_or_else(bad)?;
    let clock = &stripped[open + 1..]; // "3:13 PM"

    let (hhmm, meridiem) = clock.rsplit_once(' ').ok_or_else(bad)?;
    let (hh, mm) = hhmm.split_once(':').ok_or_else(bad)?;

    if hh.is_empty() || !hh.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }
    // minutes are exactly two digits
    if mm.len() != 2 || !mm.bytes().all(|b| b.is_ascii_digit()) {
        return Err(bad());
    }

    let hours: u32 = hh.parse().map_err(|_| bad())?;
    let minutes: u32 = mm.parse().map_err(|_| bad())?;
    if !(1..=12).contains(&hours) {
        return Err(bad());
    }

    let hour24 = match meridiem {
        "AM" => hours % 12,
        "PM" => hours % 12 + 12,
        _ => return Err(bad()),
    };

    NaiveTime::from_hms_opt(hour24, minutes, 0).ok_or_else(bad)
}
