//! Convert CSS color text (hex, `rgb()`, `rgba()`, `hsl()`, `hsla()`, named
//! colors, `transparent`) into four 8-bit channels.
//!
//! ```
//! use css_color_native::{Channels, Converter};
//!
//! let converter = Converter::new();
//! let c = converter.convert("hsl(220, 25%, 50%)").unwrap();
//! assert_eq!(c, Channels::new(96, 117, 159, 255));
//! assert_eq!(converter.convert("#ff0000").unwrap().r, 255);
//! ```

pub mod engine;
pub mod error;
pub mod math;
pub mod parser;
pub mod types;

#[cfg(feature = "node")]
pub mod bindings;

pub use engine::{convert_all, convert_all_tagged};
pub use error::{ChannelName, ConversionError, ErrorKind};
pub use parser::keywords::NameTable;
pub use parser::Converter;
pub use types::{Channels, Notation};
