//! Line-level markdown segmentation.
//!
//! Only a handful of leading structural markers and fenced code regions are
//! recognized; everything else on a line is treated as translatable text.

mod segmenter;

pub use segmenter::{DEFAULT_FENCES, DEFAULT_PREFIX_PATTERN, SegmentedDocument, Segmenter};
