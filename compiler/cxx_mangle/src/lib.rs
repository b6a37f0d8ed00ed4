//! Itanium C++ ABI symbol mangling.
//!
//! Drives the lexer and parser over a declarator string and encodes the
//! resulting tree as an Itanium mangled name:
//!
//! ```text
//! _Z <source-name> <bare-function-type>
//! ```
//!
//! Only unqualified function names with an empty (`v`) or variadic-only (`z`)
//! parameter list are encoded.

mod itanium;

pub use itanium::{demangle, source_name, ItaniumMangler, MANGLE_PREFIX};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the front-end.
///
/// Set `RUST_LOG=cxx_parse=debug` (or `cxx_lexer=trace` for every token) to
/// see what the lexer and parser do. Does nothing when `RUST_LOG` is unset;
/// calling it more than once is harmless.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
