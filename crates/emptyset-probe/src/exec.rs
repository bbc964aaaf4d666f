use std::process::Command;

use emptyset_core::{Error, Result};

/// Runs an external control-plane tool and captures its stdout.
///
/// Probes only ever talk to child processes through this seam, so they can
/// be driven with canned outputs in tests.
pub trait Invoker {
    fn invoke(&self, program: &str, args: &[&str]) -> Result<String>;
}

impl<I: Invoker + ?Sized> Invoker for &I {
    fn invoke(&self, program: &str, args: &[&str]) -> Result<String> {
        (**self).invoke(program, args)
    }
}

/// Invoker backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemInvoker;

impl Invoker for SystemInvoker {
    fn invoke(&self, program: &str, args: &[&str]) -> Result<String> {
        tracing::debug!(event = "running_command", program, args = ?args);

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|err| Error::Exec(format!("failed to run {program}: {err}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Exec(format!(
                "{program} exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|err| Error::Parse(format!("{program} produced non-utf8 output: {err}")))
    }
}
