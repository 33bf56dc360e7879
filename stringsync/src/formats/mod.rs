//! The three file formats the tool touches.
//!
//! The macOS `.strings` file is read-only input, the Windows `.rc` script is
//! updated in place, and the Linux header is regenerated from scratch.

pub mod linux_header;
pub mod rc;
pub mod strings;

// Reexporting the formats for easier access
pub use rc::Format as RcFormat;
pub use strings::Format as StringsFormat;
