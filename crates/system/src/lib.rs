pub mod memory;

pub use memory::{bytes_to_mib, FixedMemory, MemoryProbe, ProcessMemory};

/// Detect the memory telemetry collaborator for this process.
///
/// Returns `None` when telemetry is disabled or the platform cannot report
/// per-process memory; callers then omit the memory panel entirely.
pub fn detect_memory(enabled: bool) -> Option<Box<dyn MemoryProbe>> {
    if !enabled {
        tracing::debug!("memory telemetry disabled by config");
        return None;
    }

    match ProcessMemory::new() {
        Ok(probe) => Some(Box::new(probe)),
        Err(e) => {
            tracing::debug!("memory telemetry unavailable: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_telemetry_is_absent() {
        assert!(detect_memory(false).is_none());
    }
}
