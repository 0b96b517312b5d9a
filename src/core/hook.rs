//! Hook runner.
//!
//! Reads one PreToolUse payload, evaluates it and reports a deny decision
//! as JSON. Allow decisions produce no output at all.

use std::io::{Read, Write};
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::guard::{Decision, GuardService, HookInput};

/// Drives a single hook invocation.
#[derive(Debug, Clone)]
pub struct HookRunner {
    service: GuardService,
}

impl HookRunner {
    /// Create a runner from the loaded configuration.
    pub fn new(config: Config) -> Self {
        Self::with_service(GuardService::new(config.guard))
    }

    /// Create a runner around an existing guard service.
    pub fn with_service(service: GuardService) -> Self {
        Self { service }
    }

    /// Evaluate the payload read from `reader`, writing the deny payload (if
    /// any) to `writer`.
    ///
    /// Errors mean the payload could not be evaluated at all.
    #[instrument(skip_all)]
    pub fn run<R: Read, W: Write>(&self, reader: R, mut writer: W) -> Result<Decision> {
        let input: HookInput = serde_json::from_reader(reader)?;
        let decision = self.service.handle(&input)?;

        if let Some(output) = decision.to_output() {
            info!(tool = %input.tool_name(), "Denied");
            serde_json::to_writer(&mut writer, &output)?;
            writeln!(writer)?;
            writer.flush()?;
        }

        Ok(decision)
    }
}
