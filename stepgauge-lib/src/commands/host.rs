use std::io::{BufRead, Write};

/// Abstract the host environment to enable testing
pub trait Host {
    // where to read interactive input from (e.g., stdin)
    fn input(&mut self) -> impl BufRead;

    // where to send normal output (e.g., stdout)
    fn output(&mut self) -> impl Write;

    // where to send error output (e.g., stderr)
    fn error(&mut self) -> impl Write;

    /// Terminate the process (although in a test environment this might just set a flag and return).
    fn exit(&mut self, code: i32);
}

/// Test host that reads from a fixed script and captures output to in-memory buffers
#[cfg(test)]
pub struct TestHost {
    pub input: std::io::Cursor<Vec<u8>>,
    pub output_buf: Vec<u8>,
    pub error_buf: Vec<u8>,
    pub exit_code: Option<i32>,
}

#[cfg(test)]
impl TestHost {
    pub fn new() -> Self {
        Self::with_input("")
    }

    pub fn with_input(input: impl AsRef<[u8]>) -> Self {
        Self {
            input: std::io::Cursor::new(input.as_ref().to_vec()),
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    pub fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }

    pub fn error_str(&self) -> String {
        String::from_utf8_lossy(&self.error_buf).into_owned()
    }
}

#[cfg(test)]
impl Host for TestHost {
    fn input(&mut self) -> impl BufRead {
        &mut self.input
    }

    fn output(&mut self) -> impl Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        // In tests, don't actually exit
        self.exit_code = Some(code);
    }
}
