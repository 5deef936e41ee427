//! feeder-codec: encode and decode `M620` feeder-settings lines.
//!
//! A controller reports a feeder's configuration as a single text line:
//!
//! ```text
//! M620 N1 A135 B107.5 C80 F2 U300 V490.2 W980.4 X0
//! ```
//!
//! [`decode`] turns such a line into a [`FeederIndex`] and [`FeederSettings`];
//! [`encode`] builds the command line that writes settings back.

pub mod decode;
pub mod encode;
pub mod error;
pub mod framed;
pub mod options;
pub mod settings;

pub use decode::decode;
pub use encode::{encode, encode_opt, encode_with};
pub use error::{DecodeError, FrameError};
pub use framed::FeederLineCodec;
pub use options::{EncodeOptions, ZeroValues};
pub use settings::{FeederConfig, FeederIndex, FeederSettings, MARKER, Tag};
