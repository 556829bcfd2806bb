use hud_core::{HudError, Result};
use sysinfo::{Pid, ProcessRefreshKind, ProcessesToUpdate, System};

const MIB: f64 = 1_048_576.0;

/// Supplies the current memory footprint of the observed program.
pub trait MemoryProbe: Send + Sync + std::fmt::Debug {
    /// Bytes in use right now.
    fn used_bytes(&mut self) -> u64;
}

/// Resident memory of the current process, read through `sysinfo`.
#[derive(Debug)]
pub struct ProcessMemory {
    sys: System,
    pid: Pid,
}

impl ProcessMemory {
    /// Resolve the current process once.  Fails if the platform can't
    /// report it, which is how the memory panel gets switched off.
    pub fn new() -> Result<Self> {
        let pid = sysinfo::get_current_pid().map_err(|e| HudError::System(e.to_string()))?;
        let mut probe = Self { sys: System::new(), pid };

        if probe.refresh().is_none() {
            return Err(HudError::System(format!("process {pid} not visible to sysinfo")));
        }
        Ok(probe)
    }

    fn refresh(&mut self) -> Option<u64> {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[self.pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );
        self.sys.process(self.pid).map(|p| p.memory())
    }
}

impl MemoryProbe for ProcessMemory {
    fn used_bytes(&mut self) -> u64 {
        self.refresh().unwrap_or(0)
    }
}

/// Probe reporting a settable constant, for replays and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMemory(pub u64);

impl MemoryProbe for FixedMemory {
    fn used_bytes(&mut self) -> u64 {
        self.0
    }
}

/// Convert a byte count to mebibytes (the unit shown on the MB panel).
#[inline]
pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / MIB
}
