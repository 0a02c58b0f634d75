//! Input/output abstractions
//!
//! Reports are written through [`OutputWriter`] so they can be captured in
//! tests; galaxy, setup and template files go through [`persistence`].

pub mod persistence;

/// Trait for writing report output
pub trait OutputWriter {
    /// Write a message without a newline
    fn write(&mut self, message: &str);
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Writes reports to stdout
pub struct ConsoleOutput;

impl OutputWriter for ConsoleOutput {
    fn write(&mut self, message: &str) {
        print!("{}", message);
    }

    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
