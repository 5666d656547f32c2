//! Command dispatch over named, typed command-line parameters.
//!
//! Given a process argument vector of the form
//! `command --name1 val1 --name2=val2 ...`, argot selects one of a fixed set
//! of registered commands by exact name, binds the supplied strings to the
//! command's declared `(name, type)` parameter list all-or-nothing, and
//! invokes the handler with the typed values in declaration order.
//!
//! ```
//! use argot::{Registry, TypeTag, Value};
//!
//! let registry = Registry::builder()
//!     .command(
//!         "sum",
//!         [("x", TypeTag::Int), ("y", TypeTag::Int)],
//!         |args| match args {
//!             [Value::Int(x), Value::Int(y)] => {
//!                 println!("{x}+{y}={}", x + y);
//!                 0
//!             }
//!             _ => 1,
//!         },
//!     )
//!     .build();
//!
//! assert_eq!(registry.run(["sum", "--x", "3", "--y", "4"]), 0);
//! assert_eq!(registry.run(["sum", "--x", "abc", "--y", "4"]), 1);
//! ```

pub mod bind;
pub mod convert;
pub mod error;
pub mod registry;
pub mod tokenize;

pub use bind::{ParamSpec, bind};
pub use convert::{TypeTag, Value};
pub use error::{ArgotError, BindIssue, Result};
pub use registry::{CommandSpec, Handler, Registry, RegistryBuilder};
pub use tokenize::{OPTION_MARKER, ParsedCommandLine, tokenize};
