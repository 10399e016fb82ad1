//! ChatGPT conversation pages to Markdown
//!
//!     This crate turns a saved ChatGPT conversation page into a Markdown
//!     transcript: find the conversation turns, pull each message's inner
//!     markup, convert that markup to Markdown, and assemble role-labeled
//!     blocks into one document with an optional source header.
//!
//! Architecture
//!
//!     The interesting part is the conversion engine (./convert/mod.rs). It is
//!     an ordered pipeline of pattern rewrites over the fragment string, not a
//!     tree walk. The renderer emits a narrow, known subset of HTML, so direct
//!     substitution handles it, nested emphasis included, and every stage is
//!     total on malformed input. Two stages need more than substitution and
//!     get their own modules: code fencing is stateful and tables need a
//!     repair pass.
//!
//!     Around the engine sit the extractor (./extract/mod.rs), which is the
//!     one tree-backed component since role markers and content classes are
//!     attribute queries, the assembler (./assemble.rs), and the export
//!     orchestration (./export.rs).
//!
//!     This is a pure lib, that is, it powers the gpt2md CLI but is shell
//!     agnostic: no printing, no env vars, and no clock reads. Callers inject
//!     the timestamp used for filenames.
//!
//!     The file structure:
//!     .
//!     ├── error.rs          # ExportError
//!     ├── convert
//!     │   ├── mod.rs        # pipeline order and the plain rewrite stages
//!     │   ├── code.rs       # fences and inline spans, stateful scan
//!     │   ├── table.rs      # pipe rows, separator synthesis
//!     │   ├── entities.rs   # the five decoded entities
//!     │   └── whitespace.rs # blank line and bullet normalization
//!     ├── extract
//!     │   ├── mod.rs        # Page and Turn
//!     │   └── dom.rs        # tree queries, innerHTML serialization
//!     ├── assemble.rs       # role-labeled transcript
//!     ├── export.rs         # header, filename, summary
//!     └── page.rs           # URL checks
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs            # declares the submodules below
//!     ├── common/mod.rs     # page fixture builders
//!     ├── convert           # pipeline snapshots and properties
//!     ├── extract, assemble, export
//!
//!     Note that rust does not by default discover tests in subdirectories,
//!     so tests/lib.rs includes them as modules.
//!
//! Library Choices
//!
//!     html5ever and markup5ever_rcdom parse the page for the extractor. The
//!     conversion path deliberately avoids them: a rewrite pipeline is small,
//!     predictable, and tolerant of the partial markup that message fragments
//!     carry. regex with once_cell compiles each rewrite rule once. url
//!     handles hosts and path segments instead of hand-written string
//!     scanning. chrono stamps filenames, serde serializes the export
//!     summary.

pub mod assemble;
pub mod convert;
pub mod error;
pub mod export;
pub mod extract;
pub mod page;

pub use assemble::{assemble, RoleLabels, Transcript};
pub use convert::html_to_markdown;
pub use error::ExportError;
pub use export::{
    export_filename, export_page, metadata_header, Export, ExportOptions, FilenameStyle,
};
pub use extract::{Page, Turn};
