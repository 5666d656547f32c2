//! Command registry and dispatcher.
//!
//! Registration is an explicit list-building step at startup: each command
//! supplies its exposed name, its ordered `(name, type)` parameter list, and
//! a handler. The built [`Registry`] is read-only for the rest of the
//! process lifetime.

use std::collections::HashMap;
use std::fmt;

use crate::bind::{self, ParamSpec};
use crate::convert::{TypeTag, Value};
use crate::error::{ArgotError, Result};
use crate::tokenize::{self, ParsedCommandLine};

/// The callable behind a command. Receives the bound values in declaration
/// order and returns the process exit code.
pub type Handler = Box<dyn Fn(&[Value]) -> i32 + Send + Sync>;

/// A registered command: exposed name, ordered parameter list, handler.
pub struct CommandSpec {
    name: String,
    params: Vec<ParamSpec>,
    handler: Handler,
}

impl CommandSpec {
    pub fn new<F>(name: impl Into<String>, params: Vec<ParamSpec>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> i32 + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params,
            handler: Box::new(handler),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }
}

impl fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Fixed set of commands, keyed by exact name. Build once with
/// [`Registry::builder`]; dispatch any number of times after that.
#[derive(Debug)]
pub struct Registry {
    commands: HashMap<String, CommandSpec>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Dispatch with typed errors.
    ///
    /// Looks the command up by exact, case-sensitive name, binds its
    /// parameters, and invokes the handler with the bound values in declared
    /// order. The `Ok` value is the handler's own return code.
    pub fn try_dispatch(&self, parsed: &ParsedCommandLine) -> Result<i32> {
        let Some(spec) = self.commands.get(&parsed.command) else {
            tracing::debug!(command = %parsed.command, "command not found");
            return Err(ArgotError::CommandNotFound(parsed.command.clone()));
        };

        match bind::bind(&spec.params, &parsed.parameters) {
            Ok(values) => {
                tracing::debug!(
                    command = %parsed.command,
                    params = values.len(),
                    "invoking handler"
                );
                Ok((spec.handler)(&values))
            }
            Err(issues) => {
                tracing::debug!(
                    command = %parsed.command,
                    issues = issues.len(),
                    "binding failed"
                );
                Err(ArgotError::BindingFailed {
                    command: parsed.command.clone(),
                    issues,
                })
            }
        }
    }

    /// Dispatch with the process exit-code surface: the handler's return code
    /// on success, `1` on command-not-found or binding failure.
    pub fn dispatch(&self, parsed: &ParsedCommandLine) -> i32 {
        match self.try_dispatch(parsed) {
            Ok(code) => code,
            Err(err) => {
                tracing::debug!(%err, "dispatch failed");
                err.exit_code()
            }
        }
    }

    /// Tokenize an argument vector (program name already stripped, so
    /// `std::env::args().skip(1)` drops straight in) and dispatch it.
    pub fn run<I, S>(&self, args: I) -> i32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.dispatch(&tokenize::tokenize(args))
    }
}

/// Builder for [`Registry`]. Registering the same name twice keeps the last
/// registration, mirroring the overwrite rule the parameter map uses.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    commands: Vec<CommandSpec>,
}

impl RegistryBuilder {
    /// Register a command from its name, `(name, type)` parameter pairs in
    /// handler order, and handler.
    pub fn command<N, P, F>(self, name: impl Into<String>, params: P, handler: F) -> Self
    where
        N: Into<String>,
        P: IntoIterator<Item = (N, TypeTag)>,
        F: Fn(&[Value]) -> i32 + Send + Sync + 'static,
    {
        let params = params
            .into_iter()
            .map(|(name, ty)| ParamSpec::new(name, ty))
            .collect();
        self.register(CommandSpec::new(name, params, handler))
    }

    /// Register a prebuilt [`CommandSpec`].
    pub fn register(mut self, spec: CommandSpec) -> Self {
        self.commands.push(spec);
        self
    }

    pub fn build(self) -> Registry {
        let mut commands = HashMap::with_capacity(self.commands.len());
        for spec in self.commands {
            commands.insert(spec.name.clone(), spec);
        }
        Registry { commands }
    }
}
