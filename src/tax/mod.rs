//! Tax module containing GST classification, line calculation, and aggregation

pub mod gst;

pub use gst::*;
