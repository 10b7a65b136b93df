//! # codesticker core API
//!
//! Hides a short text message inside a generated sticker image. The message
//! is obfuscated with a reversible cipher, packed into a self-delimiting bit
//! frame (sync pattern + length field + payload) and rendered as a grid of
//! high/low contrast cells. Scanning samples the grid back into bits and
//! reverses the process.
//!
//! # Usage Examples
//!
//! ## Create a sticker and scan it back
//!
//! ```rust
//! use codesticker_core::CipherMethod;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let sticker = temp_dir.path().join("sticker.png");
//!
//! codesticker_core::api::create::prepare()
//!     .with_message("Hello, World!")
//!     .with_method(CipherMethod::CaesarShift(3))
//!     .with_output(&sticker)
//!     .execute()
//!     .expect("Failed to create sticker");
//!
//! let result = codesticker_core::api::scan::prepare()
//!     .with_image(&sticker)
//!     .with_method(CipherMethod::CaesarShift(3))
//!     .execute()
//!     .expect("Failed to scan sticker");
//!
//! assert_eq!(result.text, "Hello, World!");
//! ```
//!
//! ## Work on bit sequences directly
//!
//! ```rust
//! use codesticker_core::{codec, CipherMethod, Confidence};
//!
//! let bits = codec::encode("hi", CipherMethod::Base64Obfuscation)
//!     .expect("Failed to encode message");
//!
//! // the cipher method can be inferred when it is unknown
//! let result = codec::decode(&bits, None).expect("Failed to decode bits");
//! assert_eq!(result.text, "hi");
//! assert_eq!(result.confidence, Confidence::Low);
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bit_iterator;
pub mod cipher;
pub mod codec;
pub mod commands;
pub mod error;
pub mod frame;
pub mod grid;
pub mod media;
pub mod result;

pub use bit_iterator::BitIterator;
pub use cipher::{CipherMethod, Direction, SecurityLevel};
pub use codec::{Confidence, ScanResult};
pub use commands::StickerOptions;
pub use error::{CipherError, DecodeError, EncodeError, FrameError, StickerError};
pub use frame::{BitFrame, MAX_PAYLOAD_BITS, SYNC_PATTERN};
pub use grid::{BlockGrid, CellAddress, GridOptions};
pub use result::Result;
