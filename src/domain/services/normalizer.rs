#[cfg(test)]
#[path = "normalizer_test.rs"]
mod tests;

use anyhow::bail;
use anyhow::Result;
use serde_json::Map;
use serde_json::Value;

use crate::domain::models::AssertEntry;
use crate::domain::models::AssertMessage;
use crate::domain::models::AssertionResult;
use crate::domain::models::KeyValueRow;
use crate::domain::models::RecordField;
use crate::domain::models::StatusPresentation;
use crate::domain::models::TestExecutionRecord;
use crate::domain::models::COLOR_ERROR;
use crate::domain::models::COLOR_SUCCESS;

/// Marker the backend stores for a sub document with no entries.
const EMPTY_OBJECT: &str = "{}";

/// Decodes a JSON encoded sub document into table rows, keeping the key
/// order the producer wrote. Absent documents render as empty tables. A non
/// empty document that fails to decode is a producer defect and surfaces as
/// an error rather than an empty table.
pub fn to_key_value_table(
    record: &TestExecutionRecord,
    field: RecordField,
) -> Result<Vec<KeyValueRow>> {
    let raw = match record.json_field(field) {
        Some(raw) if raw != EMPTY_OBJECT => raw,
        _ => return Ok(vec![]),
    };

    let parsed: Map<String, Value> = match serde_json::from_str(raw) {
        Ok(parsed) => parsed,
        Err(err) => bail!("The {field} document is malformed: {err}"),
    };

    return Ok(parsed
        .into_iter()
        .map(|(key, value)| return KeyValueRow { key, value })
        .collect());
}

/// Flattens the assertion document into display rows. An entry reporting
/// several messages becomes one row per message, each carrying the entry's
/// verdict, so no message hides another and no verdict is lost.
pub fn flatten_assertions(record: &TestExecutionRecord) -> Result<Vec<AssertionResult>> {
    let raw = match record.asserts.as_deref() {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(vec![]),
    };

    let entries: Map<String, Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => bail!("The assertion document is malformed: {err}"),
    };

    let mut results = vec![];
    for (name, value) in entries {
        let entry: AssertEntry = match serde_json::from_value(value) {
            Ok(entry) => entry,
            Err(err) => bail!("Assertion entry {name} is malformed: {err}"),
        };

        match entry.msg {
            AssertMessage::Single(msg) => results.push(AssertionResult {
                status: entry.status,
                msg,
            }),
            AssertMessage::Many(msgs) => {
                for msg in msgs {
                    results.push(AssertionResult {
                        status: entry.status,
                        msg,
                    });
                }
            }
        }
    }

    return Ok(results);
}

/// Badge styling for the HTTP status code of a run. Unknown codes fall back
/// to error styling with no text, never to no styling at all.
pub fn status_presentation(status_code: u16) -> StatusPresentation {
    return match status_code {
        200 => StatusPresentation {
            color: COLOR_SUCCESS,
            text: "OK",
        },
        400 => StatusPresentation {
            color: COLOR_ERROR,
            text: "Bad Request",
        },
        401 => StatusPresentation {
            color: COLOR_ERROR,
            text: "unauthorized",
        },
        _ => StatusPresentation {
            color: COLOR_ERROR,
            text: "",
        },
    };
}
