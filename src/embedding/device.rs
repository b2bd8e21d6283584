use candle_core::Device;
use tracing::{debug, info, warn};

use super::error::EmbeddingError;

/// Selects the compute device from the enabled features, preferring Metal,
/// then CUDA, then CPU.
///
/// GPU initialization failures are logged and fall through to the next
/// backend; CPU is always available.
pub fn select_device() -> Result<Device, EmbeddingError> {
    let mut failures: Vec<String> = Vec::new();

    if cfg!(feature = "metal") {
        match Device::new_metal(0) {
            Ok(device) => {
                info!("Using Metal GPU acceleration");
                return Ok(device);
            }
            Err(e) => {
                warn!(error = %e, "Metal device unavailable");
                failures.push(format!("metal failed: {e}"));
            }
        }
    }

    if cfg!(feature = "cuda") {
        match Device::new_cuda(0) {
            Ok(device) => {
                info!("Using CUDA GPU acceleration");
                return Ok(device);
            }
            Err(e) => {
                warn!(error = %e, "CUDA device unavailable");
                failures.push(format!("cuda failed: {e}"));
            }
        }
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, using CPU");
    } else {
        warn!(reason = %failures.join("; "), "Falling back to CPU device");
    }

    Ok(Device::Cpu)
}

/// Short label for logs and readiness output.
pub fn device_label(device: &Device) -> &'static str {
    match device {
        Device::Cpu => "cpu",
        Device::Cuda(_) => "cuda",
        Device::Metal(_) => "metal",
    }
}
