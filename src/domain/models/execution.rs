use serde::Deserialize;
use serde::Serialize;
use strum::EnumIter;

/// One persisted run of a single test case as the backend serves it. The
/// header, cookie and assertion sub documents arrive as JSON encoded
/// strings and stay encoded until the normalizer decodes them.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestExecutionRecord {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub request_method: String,
    #[serde(default)]
    pub url: String,
    pub request_data: Option<String>,
    pub request_headers: Option<String>,
    pub cookies: Option<String>,
    pub response_headers: Option<String>,
    pub response: Option<String>,
    #[serde(default)]
    pub logs: String,
    pub asserts: Option<String>,
    pub case_id: Option<String>,
    pub cost: Option<String>,
}

impl TestExecutionRecord {
    /// Captured response body, with the display fallback for runs that
    /// captured none.
    pub fn response_text(&self) -> &str {
        return self.response.as_deref().unwrap_or("");
    }

    pub fn json_field(&self, field: RecordField) -> Option<&str> {
        let value = match field {
            RecordField::RequestHeaders => &self.request_headers,
            RecordField::Cookies => &self.cookies,
            RecordField::ResponseHeaders => &self.response_headers,
        };
        return value.as_deref();
    }
}

/// The JSON encoded sub documents of a record that render as key/value
/// tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RecordField {
    RequestHeaders,
    Cookies,
    ResponseHeaders,
}
