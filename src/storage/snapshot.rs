use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Car, CarId, Employee, EmployeeId, Ledger, Sale};

/// Bumped whenever the snapshot shape changes incompatibly.
pub const FORMAT_VERSION: u32 = 1;

/// The whole-ledger blob written to disk: the three collections serialized
/// as one unit, tagged with a format version so an incompatible file is
/// rejected outright instead of half-populating the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub format_version: u32,
    pub saved_at: DateTime<Utc>,
    pub employees: HashMap<EmployeeId, Employee>,
    pub cars: HashMap<CarId, Car>,
    pub sales: Vec<Sale>,
}

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read snapshot {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Snapshot {path} is not a valid ledger file")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Incompatible snapshot {path}: format version {found}, expected {expected}")]
    Incompatible {
        path: PathBuf,
        found: u32,
        expected: u32,
    },
}

/// File-backed store for ledger snapshots.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Serialize the whole ledger to the snapshot file, replacing any
    /// previous content.
    pub fn save(&self, ledger: &Ledger) -> Result<()> {
        let snapshot = LedgerSnapshot {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now(),
            employees: ledger.employees().clone(),
            cars: ledger.cars().clone(),
            sales: ledger.sales().to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize ledger snapshot")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write snapshot {}", self.path.display()))?;
        Ok(())
    }

    /// Load a ledger from the snapshot file. Any failure leaves the caller's
    /// in-memory state untouched; nothing is partially applied.
    pub fn load(&self) -> Result<Ledger, SnapshotError> {
        let json = fs::read_to_string(&self.path).map_err(|source| SnapshotError::Read {
            path: self.path.clone(),
            source,
        })?;

        let snapshot: LedgerSnapshot =
            serde_json::from_str(&json).map_err(|source| SnapshotError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        if snapshot.format_version != FORMAT_VERSION {
            return Err(SnapshotError::Incompatible {
                path: self.path.clone(),
                found: snapshot.format_version,
                expected: FORMAT_VERSION,
            });
        }

        Ok(Ledger::from_parts(
            snapshot.employees,
            snapshot.cars,
            snapshot.sales,
        ))
    }
}
