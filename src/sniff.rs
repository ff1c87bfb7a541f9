//! Encoding detection for geometry representations

use std::fmt;

/// Geometry representation encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Well-known text
    Wkt,
    /// Well-known binary
    Wkb,
    /// Well-known binary rendered as hexadecimal text
    HexWkb,
    /// GeoJSON
    GeoJson,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Wkt => "WKT",
            Encoding::Wkb => "WKB",
            Encoding::HexWkb => "HEXWKB",
            Encoding::GeoJson => "GEOJSON",
        }
    }
}

/// Encoding together with its extended-variant flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodingTag {
    pub encoding: Encoding,
    pub plus: bool,
}

impl EncodingTag {
    /// Extended variant of `encoding`
    pub const fn plus(encoding: Encoding) -> Self {
        Self { encoding, plus: true }
    }

    /// Base variant of `encoding`
    pub const fn base(encoding: Encoding) -> Self {
        Self { encoding, plus: false }
    }
}

impl fmt::Display for EncodingTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.encoding.name())?;
        if self.plus {
            f.write_str("+")?;
        }
        Ok(())
    }
}

/// Classify already-trimmed text.
///
/// Rules, first match wins:
/// 1. starts with `0x` → HexWKB
/// 2. starts with `00` or `01` → WKB (byte order marker of a hex dump)
/// 3. starts with `{` or ends with `}` → GeoJSON
/// 4. anything else → WKT
///
/// Every result is the plus variant. The text is never decoded.
pub fn sniff(text: &str) -> EncodingTag {
    let encoding = if text.starts_with("0x") {
        Encoding::HexWkb
    } else if text.starts_with("00") || text.starts_with("01") {
        Encoding::Wkb
    } else if text.starts_with('{') || text.ends_with('}') {
        Encoding::GeoJson
    } else {
        Encoding::Wkt
    };
    EncodingTag::plus(encoding)
}
