//! jscan-util - Foundation Types
//!
//! Shared building blocks for the jscan workspace:
//!
//! - [`span`] - byte spans into a source buffer, plus a [`SourceMap`] that
//!   turns byte offsets back into line/column positions
//! - [`diagnostic`] - error reporting (codes, a collecting [`Handler`] and
//!   rustc-style rendering)
//! - [`error`] - error types for the above
//!
//! Nothing in this crate knows about JavaScript. The lexer produces
//! [`Span`]s, and front ends use the source map and diagnostics to report
//! where things went wrong.
//!
//! ```
//! use jscan_util::{Span, SourceMap};
//!
//! let mut map = SourceMap::new();
//! let id = map.add("input.js", b"let a;\nlet b;".to_vec());
//! let file = map.get(id).unwrap();
//!
//! let span = Span::new(11, 1);
//! assert_eq!(span.slice(file.content()), b"b");
//! assert_eq!(file.line_col(span.offset).unwrap().line, 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{FileId, LineCol, SourceFile, SourceMap, Span};
