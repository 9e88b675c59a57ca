//! JDWP wire framing.
//!
//! Every JDWP packet after the handshake shares the same 11 byte big-endian header:
//!
//! ```text
//! [4 bytes] length     (header included)
//! [4 bytes] id         (pairs a command with its single reply)
//! [1 byte]  flags      (0x80 marks a reply)
//! [2 bytes] command set + command, or the error code of a reply
//! [length - 11 bytes] body
//! ```
//!
//! Before framing starts both peers exchange the 14 byte ASCII string
//! `JDWP-Handshake`, which is relayed untouched.

/// Packet classification and codec errors.
pub mod enums;

/// Implementation blocks for frame decoding and encoding.
pub mod impls;

/// Frame data structure.
pub mod structs;

/// Protocol constants and async stream helpers.
#[allow(clippy::module_inception)]
pub mod jdwp;

/// Unit tests for the frame codec.
pub mod tests;
