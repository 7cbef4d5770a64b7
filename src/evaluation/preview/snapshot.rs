use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// One row of a learning curve. Non-finite metrics serialize as JSON `null`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub instances_seen: u64,
    pub mae: f64,
    pub rmse: f64,
    pub seconds: f64,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, mae={:.6}, rmse={:.6}, t={:.3}s",
            self.instances_seen, self.mae, self.rmse, self.seconds
        )
    }
}
