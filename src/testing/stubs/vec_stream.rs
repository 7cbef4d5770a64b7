use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use crate::streams::Stream;
use crate::testing::dummies::header_numeric;
use std::io::Error;
use std::sync::Arc;

/// Replays fixed rows; the last value of each row is the target.
pub struct VecStream {
    pub header: Arc<InstanceHeader>,
    pub rows: Vec<Vec<f64>>,
    idx: usize,
}

impl VecStream {
    pub fn new(num_features: usize, rows: Vec<Vec<f64>>) -> Self {
        Self {
            header: header_numeric(num_features),
            rows,
            idx: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.idx < self.rows.len()
    }

    fn next_instance(&mut self) -> Option<Box<dyn Instance>> {
        let row = self.rows.get(self.idx)?.clone();
        self.idx += 1;
        Some(Box::new(DenseInstance::new(Arc::clone(&self.header), row, 1.0)))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
