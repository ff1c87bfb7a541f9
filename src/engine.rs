//! Geometry engine seam

use crate::body::Body;
use crate::sniff::EncodingTag;
use anyhow::{bail, Result};

/// Creation surface of a host geometry engine.
///
/// Each call creates at most one item and either succeeds completely or
/// fails with no item left behind. Opening and closing the engine's
/// current item is the implementation's business.
pub trait GeometryEngine {
    /// Create an item from binary content
    fn create_item_binary(&mut self, bytes: &[u8], projection: &str, tag: EncodingTag) -> Result<()>;

    /// Create an item from textual content
    fn create_item(&mut self, text: &str, projection: &str, tag: EncodingTag) -> Result<()>;

    /// Fit the view to everything created so far
    fn fit_viewport(&mut self) -> Result<()>;
}

/// A creation call accepted by [`Recorder`]
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub projection: String,
    pub tag: EncodingTag,
    pub body: Body,
}

type RejectFn = Box<dyn Fn(&Request) -> bool>;

/// Engine that keeps every request instead of creating geometry
#[derive(Default)]
pub struct Recorder {
    pub requests: Vec<Request>,
    /// Number of viewport fits requested
    pub fits: usize,
    reject: Option<RejectFn>,
    fail_fit: bool,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every request matching `predicate`
    pub fn rejecting(predicate: impl Fn(&Request) -> bool + 'static) -> Self {
        Self {
            reject: Some(Box::new(predicate)),
            ..Self::default()
        }
    }

    /// Make every viewport fit fail
    pub fn with_failing_fit(mut self) -> Self {
        self.fail_fit = true;
        self
    }

    fn record(&mut self, request: Request) -> Result<()> {
        if let Some(reject) = &self.reject {
            if reject(&request) {
                bail!("{} content rejected", request.tag);
            }
        }
        self.requests.push(request);
        Ok(())
    }
}

impl std::fmt::Debug for Recorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recorder")
            .field("requests", &self.requests)
            .field("fits", &self.fits)
            .field("rejecting", &self.reject.is_some())
            .finish()
    }
}

impl GeometryEngine for Recorder {
    fn create_item_binary(&mut self, bytes: &[u8], projection: &str, tag: EncodingTag) -> Result<()> {
        self.record(Request {
            projection: projection.to_string(),
            tag,
            body: Body::from(bytes),
        })
    }

    fn create_item(&mut self, text: &str, projection: &str, tag: EncodingTag) -> Result<()> {
        self.record(Request {
            projection: projection.to_string(),
            tag,
            body: Body::from(text),
        })
    }

    fn fit_viewport(&mut self) -> Result<()> {
        self.fits += 1;
        if self.fail_fit {
            bail!("no view to fit");
        }
        Ok(())
    }
}
