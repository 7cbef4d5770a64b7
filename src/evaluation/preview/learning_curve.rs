use crate::evaluation::Snapshot;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

pub enum CurveFormat {
    Csv,
    Tsv,
    Json,
}

#[derive(Default)]
pub struct LearningCurve {
    entries: Vec<Snapshot>,
}

impl LearningCurve {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<Snapshot> {
        self.entries.last().copied()
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        match fmt {
            CurveFormat::Csv => self.export_with_delimiter(path, ','),
            CurveFormat::Tsv => self.export_with_delimiter(path, '\t'),
            CurveFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = File::create(path)?;
        writeln!(w, "instances_seen{d}mae{d}rmse{d}seconds", d = delimiter)?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}{d}{:.6}",
                s.instances_seen,
                s.mae,
                s.rmse,
                s.seconds,
                d = delimiter
            )?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &self.entries)?;
        writeln!(w)?;
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::NamedTempFile;

    fn snap(seen: u64, mae: f64, rmse: f64, secs: f64) -> Snapshot {
        Snapshot {
            instances_seen: seen,
            mae,
            rmse,
            seconds: secs,
        }
    }

    #[test]
    fn default_is_empty_and_latest_none() {
        let lc = LearningCurve::default();
        assert!(lc.is_empty());
        assert!(lc.latest().is_none());
    }

    #[test]
    fn push_appends_and_latest_returns_last() {
        let mut lc = LearningCurve::default();
        lc.push(snap(10, 1.0, 1.5, 2.5));
        lc.push(snap(20, 0.25, 0.5, 3.0));
        assert_eq!(lc.len(), 2);
        assert_eq!(lc.latest(), Some(snap(20, 0.25, 0.5, 3.0)));
        assert_eq!(lc.entries()[0].instances_seen, 10);
    }

    #[test]
    fn export_csv_and_tsv_with_two_rows() {
        let mut lc = LearningCurve::default();
        lc.push(snap(10, 1.0, 1.5, 2.5));
        lc.push(snap(20, 0.25, 0.5, 3.0));

        let tf = NamedTempFile::new().unwrap();
        lc.export(tf.path(), CurveFormat::Csv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
instances_seen,mae,rmse,seconds
10,1.000000000000,1.500000000000,2.500000
20,0.250000000000,0.500000000000,3.000000
";
        assert_eq!(got, exp);

        let tf = NamedTempFile::new().unwrap();
        lc.export(tf.path(), CurveFormat::Tsv).unwrap();
        let got = fs::read_to_string(tf.path()).unwrap();
        assert_eq!(got, exp.replace(',', "\t"));
    }

    fn read_json(lc: &LearningCurve) -> Value {
        let tf = NamedTempFile::new().unwrap();
        lc.export(tf.path(), CurveFormat::Json).unwrap();
        serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap()
    }

    #[test]
    fn export_json_with_two_rows() {
        let mut lc = LearningCurve::default();
        lc.push(snap(10, 1.0, 1.5, 2.5));
        lc.push(snap(20, 0.25, 0.5, 3.0));

        assert_eq!(
            read_json(&lc),
            json!([
                {"instances_seen": 10, "mae": 1.0, "rmse": 1.5, "seconds": 2.5},
                {"instances_seen": 20, "mae": 0.25, "rmse": 0.5, "seconds": 3.0}
            ])
        );
    }

    #[test]
    fn export_json_writes_undefined_metrics_as_null() {
        let mut lc = LearningCurve::default();
        lc.push(snap(0, f64::NAN, f64::NAN, 0.5));

        let got = read_json(&lc);
        assert_eq!(got[0]["instances_seen"], json!(0));
        assert!(got[0]["mae"].is_null());
        assert!(got[0]["rmse"].is_null());
        assert_eq!(got[0]["seconds"], json!(0.5));
    }

    #[test]
    fn export_empty_curve() {
        assert_eq!(read_json(&LearningCurve::default()), json!([]));
    }
}
