//! Text rendering of recorded creation requests
//!
//! Each request becomes a header line followed by its payload:
//!
//! ```text
//! -- 1 WKT+ *APrjPC --
//! POINT(1 2)
//! -- 2 WKB+ *APrjPC [.base64] --
//! AQEAAAAAAAAAAADwPwAAAAAAAABA
//! ```

use crate::body::Body;
use crate::engine::Request;
use anyhow::{Context, Result};
use base64::Engine;

pub const MARKER_PREFIX: &str = "-- ";
pub const MARKER_SUFFIX: &str = " --";
pub const BASE64_TAG: &str = "[.base64]";

/// Encodes requests into transcript text
pub struct Transcript {
    // Currently stateless
}

impl Transcript {
    pub fn new() -> Self {
        Self {}
    }

    /// Encode requests to a string
    pub fn encode(&self, requests: &[Request]) -> Result<String> {
        let mut output = String::new();
        for (index, request) in requests.iter().enumerate() {
            self.encode_request(&mut output, index + 1, request)?;
        }
        Ok(output)
    }

    fn encode_request(&self, output: &mut String, number: usize, request: &Request) -> Result<()> {
        output.push_str(MARKER_PREFIX);
        output.push_str(&format!("{} {} {}", number, request.tag, request.projection));
        if request.body.is_binary() {
            output.push(' ');
            output.push_str(BASE64_TAG);
        }
        output.push_str(MARKER_SUFFIX);
        output.push('\n');

        let payload = match &request.body {
            Body::Bytes(bytes) => base64::engine::general_purpose::STANDARD.encode(bytes),
            Body::Text(text) => text.clone(),
            Body::Json(_) => String::from_utf8(request.body.encode())
                .with_context(|| format!("Request {} has a non UTF-8 JSON body", number))?,
        };
        output.push_str(&payload);
        if !payload.ends_with('\n') {
            output.push('\n');
        }

        Ok(())
    }

    /// Encode requests directly to a writer
    pub fn encode_to_writer<W: std::io::Write>(&self, requests: &[Request], mut writer: W) -> Result<()> {
        let encoded = self.encode(requests)?;
        writer.write_all(encoded.as_bytes())?;
        Ok(())
    }

    /// Encode requests to a file
    pub fn encode_to_file(&self, requests: &[Request], path: &std::path::Path) -> Result<()> {
        let encoded = self.encode(requests)?;
        std::fs::write(path, encoded).with_context(|| format!("Failed to write: {}", path.display()))?;
        Ok(())
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sniff::{Encoding, EncodingTag};

    fn request(tag: EncodingTag, body: impl Into<Body>) -> Request {
        Request {
            projection: "*APrjPC".to_string(),
            tag,
            body: body.into(),
        }
    }

    #[test]
    fn test_encode_text_request() {
        let requests = vec![request(EncodingTag::plus(Encoding::Wkt), "POINT(1 2)")];
        let result = Transcript::new().encode(&requests).unwrap();
        assert_eq!(result, "-- 1 WKT+ *APrjPC --\nPOINT(1 2)\n");
    }

    #[test]
    fn test_encode_binary_request() {
        let requests = vec![request(EncodingTag::plus(Encoding::Wkb), vec![0xFF, 0xD8, 0xFF])];
        let result = Transcript::new().encode(&requests).unwrap();
        assert!(result.contains("-- 1 WKB+ *APrjPC [.base64] --"));
        assert!(result.contains("/9j/"));
    }

    #[test]
    fn test_encode_json_body() {
        let value = serde_json::json!({"type": "Point", "coordinates": [1, 2]});
        let requests = vec![request(EncodingTag::plus(Encoding::GeoJson), value)];
        let result = Transcript::new().encode(&requests).unwrap();
        assert!(result.contains("-- 1 GEOJSON+ *APrjPC --"));
        assert!(result.contains("\"coordinates\":[1,2]"));
    }

    #[test]
    fn test_encode_numbers_in_order() {
        let requests = vec![
            request(EncodingTag::plus(Encoding::Wkt), "POINT(1 2)"),
            request(EncodingTag::plus(Encoding::HexWkb), "0xDEADBEEF"),
        ];
        let result = Transcript::new().encode(&requests).unwrap();
        let first = result.find("-- 1 WKT+").unwrap();
        let second = result.find("-- 2 HEXWKB+").unwrap();
        assert!(first < second);
        assert!(result.contains("0xDEADBEEF\n"));
    }

    #[test]
    fn test_encode_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let requests = vec![request(EncodingTag::plus(Encoding::Wkt), "POINT(1 2)")];
        Transcript::new().encode_to_file(&requests, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "-- 1 WKT+ *APrjPC --\nPOINT(1 2)\n");
    }
}
