//! The sentence bank: a JSON record store of practice sentences.
//!
//! Each record pairs a `source` sentence (shown to the learner) with the
//! `target` translation the learner's answer is checked against. Older banks
//! that use `chinese`/`english` keys load unchanged.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::BankError;

/// One practice sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Unique identifier within the bank.
    pub id: u32,
    /// Prompt sentence shown to the learner.
    #[serde(alias = "chinese")]
    pub source: String,
    /// Reference translation.
    #[serde(alias = "english")]
    pub target: String,
}

/// An ordered collection of sentence records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentenceBank {
    records: Vec<SentenceRecord>,
}

/// A warning from bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The record ID (if applicable).
    pub record_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

impl SentenceBank {
    pub fn new(records: Vec<SentenceRecord>) -> Self {
        Self { records }
    }

    /// Load a bank from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read sentence bank: {}", path.display()))?;
        let bank = Self::from_json_str(&content)
            .with_context(|| format!("failed to parse sentence bank: {}", path.display()))?;
        tracing::info!(path = %path.display(), records = bank.len(), "loaded sentence bank");
        Ok(bank)
    }

    /// Parse a bank from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let bank: SentenceBank = serde_json::from_str(content).context("invalid bank JSON")?;
        Ok(bank)
    }

    /// Write the bank as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize bank")?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write sentence bank to {}", path.display()))?;
        tracing::info!(path = %path.display(), records = self.len(), "saved sentence bank");
        Ok(())
    }

    pub fn records(&self) -> &[SentenceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&SentenceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a record and return its new id (one past the largest id in use).
    ///
    /// Fails with [`BankError::IdExhausted`] once `u32::MAX` is taken.
    pub fn add(&mut self, source: &str, target: &str) -> Result<u32, BankError> {
        let id = match self.records.iter().map(|r| r.id).max() {
            None => 1,
            Some(max) => max.checked_add(1).ok_or(BankError::IdExhausted)?,
        };
        let (source, target) = checked_text(id, source, target)?;
        self.records.push(SentenceRecord { id, source, target });
        Ok(id)
    }

    /// Replace the text of an existing record.
    pub fn update(&mut self, id: u32, source: &str, target: &str) -> Result<(), BankError> {
        let (source, target) = checked_text(id, source, target)?;
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(BankError::RecordNotFound(id))?;
        record.source = source;
        record.target = target;
        Ok(())
    }

    /// Remove a record, returning it.
    pub fn delete(&mut self, id: u32) -> Result<SentenceRecord, BankError> {
        let index = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(BankError::RecordNotFound(id))?;
        Ok(self.records.remove(index))
    }

    /// Pick a record uniformly at random.
    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&SentenceRecord> {
        self.records.choose(rng)
    }

    /// Check the bank for common issues.
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        let mut seen_ids = HashSet::new();
        for record in &self.records {
            if !seen_ids.insert(record.id) {
                warnings.push(ValidationWarning {
                    record_id: Some(record.id),
                    message: format!("duplicate sentence ID: {}", record.id),
                });
            }
        }

        for record in &self.records {
            if record.source.trim().is_empty() {
                warnings.push(ValidationWarning {
                    record_id: Some(record.id),
                    message: "source sentence is empty".into(),
                });
            }
            if record.target.trim().is_empty() {
                warnings.push(ValidationWarning {
                    record_id: Some(record.id),
                    message: "target sentence is empty".into(),
                });
            }
        }

        if self.records.is_empty() {
            warnings.push(ValidationWarning {
                record_id: None,
                message: "bank has no sentences".into(),
            });
        }

        warnings
    }
}

fn checked_text(id: u32, source: &str, target: &str) -> Result<(String, String), BankError> {
    let source = source.trim();
    let target = target.trim();
    if source.is_empty() {
        return Err(BankError::EmptyText { id, field: "source" });
    }
    if target.is_empty() {
        return Err(BankError::EmptyText { id, field: "target" });
    }
    Ok((source.to_string(), target.to_string()))
}
