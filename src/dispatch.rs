//! Routing of sniffed content to an engine entry point

use crate::engine::GeometryEngine;
use crate::error::CreationFailure;
use crate::sniff::{Encoding, EncodingTag};

/// Create one item from `content`.
///
/// WKB content (either variant) is hex-decoded and sent to the binary
/// entry point. Everything else, HexWKB and GeoJSON included, goes to
/// the text entry point as-is.
pub fn dispatch<E: GeometryEngine + ?Sized>(
    engine: &mut E,
    content: &str,
    tag: EncodingTag,
    projection: &str,
) -> Result<(), CreationFailure> {
    let routed = if tag == EncodingTag::base(Encoding::Wkb) || tag == EncodingTag::plus(Encoding::Wkb) {
        let bytes = hex::decode(content)?;
        tracing::debug!(%tag, len = bytes.len(), "binary create");
        engine.create_item_binary(&bytes, projection, tag)
    } else {
        tracing::debug!(%tag, len = content.len(), "text create");
        engine.create_item(content, projection, tag)
    };

    routed.map_err(|source| CreationFailure::Rejected { tag, source })
}
