//! Demonstration binary: three sample commands over the argot dispatcher.
//!
//! ```text
//! argot-demo sum --x 3 --y 4
//! argot-demo sqr --v=5
//! argot-demo cat --prefix un --root believ --suffix able
//! ```

use std::process::ExitCode;

use argot::{Registry, TypeTag, Value};

fn sum(x: i64, y: i64) -> i32 {
    println!("{x}+{y}={}", x + y);
    0
}

fn sqr(v: i64) -> i32 {
    println!("{v}^2={}", v * v);
    0
}

fn cat(prefix: &str, root: &str, suffix: &str) -> i32 {
    println!("\"{prefix}\"+\"{root}\"+\"{suffix}\"=\"{prefix}{root}{suffix}\"");
    0
}

fn build_registry() -> Registry {
    Registry::builder()
        .command(
            "sum",
            [("x", TypeTag::Int), ("y", TypeTag::Int)],
            |args| match args {
                [Value::Int(x), Value::Int(y)] => sum(*x, *y),
                _ => 1,
            },
        )
        .command("sqr", [("v", TypeTag::Int)], |args| match args {
            [Value::Int(v)] => sqr(*v),
            _ => 1,
        })
        .command(
            "cat",
            [
                ("prefix", TypeTag::Text),
                ("root", TypeTag::Text),
                ("suffix", TypeTag::Text),
            ],
            |args| match args {
                [Value::Text(prefix), Value::Text(root), Value::Text(suffix)] => {
                    cat(prefix, root, suffix)
                }
                _ => 1,
            },
        )
        .build()
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let registry = build_registry();
    let code = registry.run(std::env::args().skip(1));
    if code != 0 {
        tracing::debug!(code, "dispatch returned non-zero");
    }
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
