//! Signature Capture Surface
//!
//! Turns pointer and touch input into an anti-aliased ink bitmap and exports
//! it as a self-contained `data:image/png;base64,...` payload:
//! - `SignaturePad` owns the pixels and the stroke lifecycle
//! - `SurfaceHost` supplies the on-screen position and container width
//! - `SignatureFeed` is the single subscriber receiving payload updates
//!
//! The pad only ever reports a payload when a stroke ends. Clearing and
//! resizing both report `None`.
//!
//! # Example
//!
//! ```rust
//! use esign_signature::{FixedHost, PointerEvent, SignaturePad};
//!
//! let (mut pad, mut feed) = SignaturePad::new();
//! pad.mount(FixedHost::new(0.0, 0.0, 320));
//!
//! pad.begin(&mut PointerEvent::mouse(10.0, 20.0));
//! pad.extend(&mut PointerEvent::mouse(80.0, 60.0));
//! pad.end();
//!
//! let payload = feed.take_update().flatten().unwrap();
//! assert!(payload.data_url().starts_with("data:image/png;base64,"));
//! ```

#![warn(unreachable_pub)]

pub mod bitmap;
pub mod error;
pub mod event;
pub mod feed;
pub mod geometry;
pub mod pad;
pub mod payload;
pub mod png;

pub use bitmap::Bitmap;
pub use error::ExportError;
pub use event::{PointerEvent, PointerKind};
pub use feed::{signature_channel, SignatureEmitter, SignatureFeed};
pub use geometry::{Point, Rect};
pub use pad::{FixedHost, PadStyle, SignaturePad, Stroke, SurfaceHost, PLACEHOLDER_TEXT};
pub use payload::SignaturePayload;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
