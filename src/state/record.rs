use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    pub fn next(&self) -> HttpMethod {
        match self {
            HttpMethod::Get => HttpMethod::Post,
            HttpMethod::Post => HttpMethod::Put,
            HttpMethod::Put => HttpMethod::Delete,
            HttpMethod::Delete => HttpMethod::Get,
        }
    }

    pub fn prev(&self) -> HttpMethod {
        match self {
            HttpMethod::Get => HttpMethod::Delete,
            HttpMethod::Post => HttpMethod::Get,
            HttpMethod::Put => HttpMethod::Post,
            HttpMethod::Delete => HttpMethod::Put,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One tracked request/response pair. `url` holds the escaped pattern
/// produced by [`crate::pattern::to_pattern`], not the literal URL.
///
/// Payload and response are free text; they usually hold JSON but are never
/// parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Record {
    pub url: String,
    pub method: HttpMethod,
    pub payload: String,
    pub response: String,
}

impl Record {
    pub fn new(
        url: impl Into<String>,
        method: HttpMethod,
        payload: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            method,
            payload: payload.into(),
            response: response.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_cycle_visits_all_four() {
        let mut method = HttpMethod::default();
        let mut seen = vec![method];
        for _ in 0..3 {
            method = method.next();
            seen.push(method);
        }
        assert_eq!(
            seen,
            [HttpMethod::Get, HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete]
        );
        assert_eq!(method.next(), HttpMethod::Get);
        assert_eq!(HttpMethod::Get.prev(), HttpMethod::Delete);
    }

    #[test]
    fn method_serializes_as_uppercase_string() {
        let json = serde_json::to_string(&HttpMethod::Delete).unwrap();
        assert_eq!(json, "\"DELETE\"");
        let parsed: HttpMethod = serde_json::from_str("\"PUT\"").unwrap();
        assert_eq!(parsed, HttpMethod::Put);
        assert!(serde_json::from_str::<HttpMethod>("\"PATCH\"").is_err());
    }

    #[test]
    fn record_fields_serialize_in_declared_order() {
        let record = Record::new("/x", HttpMethod::Get, "{}", "{}");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"url":"/x","method":"GET","payload":"{}","response":"{}"}"#
        );
    }
}
