//! Drive a step progress panel from the terminal.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{BufRead, Write};
use std::io::{stderr, stdin, stdout};
use stepgauge_lib::{Host, run};

/// Default host bound to the process's standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn input(&mut self) -> impl BufRead {
        stdin().lock()
    }

    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args())
}
