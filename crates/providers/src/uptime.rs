//! Uptime providers
//!
//! Both providers report under the predefined `uptime` measurement key, so a
//! service registering both gets a two-element `uptime` array: the host
//! first or the process first, depending on registration order.

use async_trait::async_trait;
use chrono::Utc;
use sysinfo::{Pid, ProcessRefreshKind, System};
use tracing::trace;
use vitals_core::key::{component_type, measurement};
use vitals_core::{DetailEntry, Details, Error, Result, Status};
use vitals_endpoint::DetailsProvider;

const SECONDS: &str = "s";
const PROCESS_COMPONENT: &str = "process";

fn uptime_details(component: &str, seconds: u64) -> Details {
    let entry = DetailEntry::new(Status::Pass)
        .with_component_type(component)
        .with_observed(seconds, SECONDS)
        .observed_at(Utc::now());

    let mut details = Details::new();
    details.insert(measurement::UPTIME.to_string(), vec![entry]);
    details
}

/// Uptime of the host operating system
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUptime;

impl SystemUptime {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DetailsProvider for SystemUptime {
    async fn health_details(&self) -> Result<Details> {
        let seconds = System::uptime();
        trace!(seconds, "read system uptime");
        Ok(uptime_details(component_type::SYSTEM, seconds))
    }
}

/// Uptime of the current process
#[derive(Debug, Clone, Copy)]
pub struct ProcessUptime {
    pid: Pid,
}

impl ProcessUptime {
    /// Provider for the process it runs in
    pub fn new() -> Result<Self> {
        let pid = sysinfo::get_current_pid()
            .map_err(|e| Error::provider(PROCESS_COMPONENT, format!("cannot read own pid: {e}")))?;
        Ok(Self { pid })
    }

    /// Provider for an arbitrary process
    pub fn for_pid(pid: u32) -> Self {
        Self {
            pid: Pid::from_u32(pid),
        }
    }

    fn run_time(&self) -> Result<u64> {
        let mut system = System::new();
        if !system.refresh_process_specifics(self.pid, ProcessRefreshKind::new()) {
            return Err(Error::provider(
                PROCESS_COMPONENT,
                format!("process {} not found", self.pid),
            ));
        }
        system
            .process(self.pid)
            .map(|process| process.run_time())
            .ok_or_else(|| {
                Error::provider(PROCESS_COMPONENT, format!("process {} not found", self.pid))
            })
    }
}

#[async_trait]
impl DetailsProvider for ProcessUptime {
    async fn health_details(&self) -> Result<Details> {
        let seconds = self.run_time()?;
        trace!(pid = %self.pid, seconds, "read process uptime");
        Ok(uptime_details(PROCESS_COMPONENT, seconds))
    }
}
