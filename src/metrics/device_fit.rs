use super::round_score;
use serde::Serialize;

/// Per-device deployment fit for an artifact of a given size.
///
/// Each score follows `1 / (1 + (size / capacity)^a)`, so an artifact at exactly the
/// device's capacity scores one half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceFit {
    pub raspberry_pi: f64,
    pub jetson_nano: f64,
    pub desktop_pc: f64,
    pub aws_server: f64,
}

/// (capacity in bytes, steepness)
const RASPBERRY_PI: (f64, f64) = (180_000_000.0, 1.4);
const JETSON_NANO: (f64, f64) = (350_000_000.0, 1.4);
const DESKTOP_PC: (f64, f64) = (2_000_000_000.0, 1.8);
const AWS_SERVER: (f64, f64) = (4_000_000_000.0, 1.8);

impl DeviceFit {
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "sizes are far below the range where f64 loses whole bytes")]
    pub fn for_size(size_bytes: u64) -> Self {
        let size = size_bytes as f64;
        Self {
            raspberry_pi: curve(size, RASPBERRY_PI),
            jetson_nano: curve(size, JETSON_NANO),
            desktop_pc: curve(size, DESKTOP_PC),
            aws_server: curve(size, AWS_SERVER),
        }
    }

    /// The same fit with every score rounded to four decimal places.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            raspberry_pi: round_score(self.raspberry_pi),
            jetson_nano: round_score(self.jetson_nano),
            desktop_pc: round_score(self.desktop_pc),
            aws_server: round_score(self.aws_server),
        }
    }
}

fn curve(size: f64, (capacity, steepness): (f64, f64)) -> f64 {
    (1.0 / (1.0 + (size / capacity).powf(steepness))).clamp(0.0, 1.0)
}
