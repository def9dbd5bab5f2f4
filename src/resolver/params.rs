//! Parameters for the placement resolver.

use serde::Deserialize;

/// Half-width of the band around the reference height inside which an
/// unbounded horizontal plane is accepted (metres).
pub const DEFAULT_HEIGHT_TOLERANCE: f32 = 0.05;

/// Resolver tunables. Everything else is supplied per query.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResolverParams {
    /// Strict bound on `|world_height - reference_height|` for horizontal
    /// hits in the unbounded-plane stage.
    pub height_tolerance: f32,
}

impl Default for ResolverParams {
    fn default() -> Self {
        Self {
            height_tolerance: DEFAULT_HEIGHT_TOLERANCE,
        }
    }
}

impl ResolverParams {
    /// Returns params whose tolerance is usable, replacing a negative or
    /// non-finite value with the default band.
    pub fn sanitized(&self) -> Self {
        if self.height_tolerance.is_finite() && self.height_tolerance >= 0.0 {
            self.clone()
        } else {
            log::warn!(
                "ResolverParams: invalid height_tolerance={} -> using {}",
                self.height_tolerance,
                DEFAULT_HEIGHT_TOLERANCE
            );
            Self::default()
        }
    }
}
