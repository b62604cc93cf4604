//! Message module - inbound payload carrier and byte views.
//!
//! - [`RawMessage`] - body bytes plus the metadata the transport delivered
//! - [`ByteView`] - a positioned, readable window over shared bytes

mod byte_view;
mod raw_message;

pub use byte_view::ByteView;
pub use raw_message::RawMessage;
