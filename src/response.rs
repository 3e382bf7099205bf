use crate::error::{PinboardError, Result};
use serde::Deserialize;

/// Result code the API reports for a successful mutation
pub const DONE: &str = "done";

/// The outcome the API reports in the body of a 2xx response.
///
/// The v1 API answers in XML by default (`<result code="done" />`) and
/// in JSON when `format=json` is requested (`{"result_code":"done"}`);
/// both carry a single result code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult {
    /// The vendor result code, `done` on success
    pub code: String,
}

/// XML form: `<result code="..." />`
#[derive(Debug, Deserialize)]
#[serde(rename = "result")]
struct XmlResult {
    #[serde(rename = "@code")]
    code: String,
}

/// JSON form: `{"result_code": "..."}`
#[derive(Debug, Deserialize)]
struct JsonResult {
    result_code: String,
}

impl ApiResult {
    /// Parse a response body in either of the API's two formats
    pub fn parse(body: &str) -> Result<Self> {
        let trimmed = body.trim_start();
        if trimmed.starts_with('<') {
            let parsed: XmlResult = quick_xml::de::from_str(body)?;
            Ok(ApiResult { code: parsed.code })
        } else if trimmed.starts_with('{') {
            let parsed: JsonResult = serde_json::from_str(body)?;
            Ok(ApiResult {
                code: parsed.result_code,
            })
        } else {
            Err(PinboardError::Other(format!(
                "unrecognized response body: {}",
                body.trim()
            )))
        }
    }

    /// Check whether the API reported success
    pub fn is_done(&self) -> bool {
        self.code == DONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xml_done() {
        let result = ApiResult::parse(r#"<result code="done" />"#).unwrap();
        assert!(result.is_done());
        assert_eq!(result.code, "done");
    }

    #[test]
    fn test_parse_xml_with_prolog() {
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n<result code=\"done\" />";
        let result = ApiResult::parse(body).unwrap();
        assert!(result.is_done());
    }

    #[test]
    fn test_parse_xml_error_code() {
        let result = ApiResult::parse(r#"<result code="must provide title" />"#).unwrap();
        assert!(!result.is_done());
        assert_eq!(result.code, "must provide title");
    }

    #[test]
    fn test_parse_json_done() {
        let result = ApiResult::parse(r#"{"result_code":"done"}"#).unwrap();
        assert!(result.is_done());
    }

    #[test]
    fn test_parse_json_error_code() {
        let result = ApiResult::parse(r#"{"result_code":"item not found"}"#).unwrap();
        assert!(!result.is_done());
        assert_eq!(result.code, "item not found");
    }

    #[test]
    fn test_parse_rejects_unknown_body() {
        let result = ApiResult::parse("500 Internal Server Error");
        assert!(matches!(result, Err(PinboardError::Other(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_xml() {
        let result = ApiResult::parse(r#"<result foo="bar" />"#);
        assert!(matches!(result, Err(PinboardError::Xml(_))));
    }
}
