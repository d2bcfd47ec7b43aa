//! finviz-store
//!
//! Filesystem-backed JSON document store for the dashboard's three record
//! kinds. One collection file per kind, atomic tmp+rename writes, and an
//! atomic upsert for spending limits keyed by (category, period).

use std::{
    cmp::Reverse,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use uuid::Uuid;

use finviz_domain::{
    Identifiable, LimitPeriod, SavingsPlan, SavingsPlanUpdate, SpendingLimit, SpendingLimitUpdate,
    Transaction, TransactionUpdate,
};

const TRANSACTIONS_FILE: &str = "transactions.json";
const SAVINGS_PLANS_FILE: &str = "savings_plans.json";
const SPENDING_LIMITS_FILE: &str = "spending_limits.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Transaction not found: {0}")]
    TransactionNotFound(Uuid),
    #[error("Savings plan not found: {0}")]
    SavingsPlanNotFound(Uuid),
    #[error("Spending limit not found: {0}")]
    SpendingLimitNotFound(Uuid),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// JSON collections rooted at a data directory. Every operation is a full
/// load-modify-store cycle; mutations are serialized by an internal lock so
/// concurrent handlers cannot interleave read-modify-write on one file.
pub struct JsonRecordStore {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonRecordStore {
    pub fn new(data_dir: PathBuf) -> StoreResult<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self {
            data_dir,
            write_lock: Mutex::new(()),
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    // ---- transactions ----

    /// All transactions, date descending (the wire contract for list-all).
    pub fn list_transactions(&self) -> StoreResult<Vec<Transaction>> {
        let mut records: Vec<Transaction> = self.load_collection(TRANSACTIONS_FILE)?;
        records.sort_by_key(|txn| Reverse(txn.date));
        Ok(records)
    }

    pub fn get_transaction(&self, id: Uuid) -> StoreResult<Transaction> {
        find_record(self.list_transactions()?, id).ok_or(StoreError::TransactionNotFound(id))
    }

    pub fn insert_transaction(&self, txn: Transaction) -> StoreResult<Transaction> {
        let _guard = self.lock();
        let mut records: Vec<Transaction> = self.load_collection(TRANSACTIONS_FILE)?;
        records.push(txn.clone());
        self.store_collection(TRANSACTIONS_FILE, &records)?;
        Ok(txn)
    }

    pub fn update_transaction(
        &self,
        id: Uuid,
        update: TransactionUpdate,
    ) -> StoreResult<Transaction> {
        let _guard = self.lock();
        let mut records: Vec<Transaction> = self.load_collection(TRANSACTIONS_FILE)?;
        let record = records
            .iter_mut()
            .find(|txn| txn.id == id)
            .ok_or(StoreError::TransactionNotFound(id))?;
        update.apply(record);
        let updated = record.clone();
        self.store_collection(TRANSACTIONS_FILE, &records)?;
        Ok(updated)
    }

    /// Idempotent delete; removing an absent transaction is not an error.
    pub fn delete_transaction(&self, id: Uuid) -> StoreResult<()> {
        let _guard = self.lock();
        let mut records: Vec<Transaction> = self.load_collection(TRANSACTIONS_FILE)?;
        records.retain(|txn| txn.id != id);
        self.store_collection(TRANSACTIONS_FILE, &records)
    }

    // ---- savings plans ----

    /// All plans, most recently created first.
    pub fn list_savings_plans(&self) -> StoreResult<Vec<SavingsPlan>> {
        let mut records: Vec<SavingsPlan> = self.load_collection(SAVINGS_PLANS_FILE)?;
        records.sort_by_key(|plan| Reverse(plan.created_at));
        Ok(records)
    }

    pub fn get_savings_plan(&self, id: Uuid) -> StoreResult<SavingsPlan> {
        find_record(self.list_savings_plans()?, id).ok_or(StoreError::SavingsPlanNotFound(id))
    }

    pub fn insert_savings_plan(&self, plan: SavingsPlan) -> StoreResult<SavingsPlan> {
        let _guard = self.lock();
        let mut records: Vec<SavingsPlan> = self.load_collection(SAVINGS_PLANS_FILE)?;
        records.push(plan.clone());
        self.store_collection(SAVINGS_PLANS_FILE, &records)?;
        Ok(plan)
    }

    pub fn update_savings_plan(
        &self,
        id: Uuid,
        update: SavingsPlanUpdate,
    ) -> StoreResult<SavingsPlan> {
        let _guard = self.lock();
        let mut records: Vec<SavingsPlan> = self.load_collection(SAVINGS_PLANS_FILE)?;
        let record = records
            .iter_mut()
            .find(|plan| plan.id == id)
            .ok_or(StoreError::SavingsPlanNotFound(id))?;
        update.apply(record);
        let updated = record.clone();
        self.store_collection(SAVINGS_PLANS_FILE, &records)?;
        Ok(updated)
    }

    /// Deleting a plan never cascades to its savings transactions; those
    /// stay behind with only the description text pointing back.
    pub fn delete_savings_plan(&self, id: Uuid) -> StoreResult<()> {
        let _guard = self.lock();
        let mut records: Vec<SavingsPlan> = self.load_collection(SAVINGS_PLANS_FILE)?;
        let before = records.len();
        records.retain(|plan| plan.id != id);
        if records.len() == before {
            return Err(StoreError::SavingsPlanNotFound(id));
        }
        self.store_collection(SAVINGS_PLANS_FILE, &records)
    }

    // ---- spending limits ----

    /// All limits, category ascending.
    pub fn list_spending_limits(&self) -> StoreResult<Vec<SpendingLimit>> {
        let mut records: Vec<SpendingLimit> = self.load_collection(SPENDING_LIMITS_FILE)?;
        records.sort_by(|a, b| a.category.cmp(&b.category));
        Ok(records)
    }

    pub fn find_spending_limit(
        &self,
        category: &str,
        period: LimitPeriod,
    ) -> StoreResult<Option<SpendingLimit>> {
        Ok(self
            .list_spending_limits()?
            .into_iter()
            .find(|limit| limit.category == category && limit.period == period))
    }

    /// Update-if-exists-else-insert keyed by (category, period), performed
    /// under one load-modify-store cycle so two upserts cannot leave
    /// duplicate records behind.
    pub fn upsert_spending_limit(
        &self,
        category: &str,
        amount: f64,
        period: LimitPeriod,
    ) -> StoreResult<SpendingLimit> {
        let _guard = self.lock();
        let mut records: Vec<SpendingLimit> = self.load_collection(SPENDING_LIMITS_FILE)?;
        let record = match records
            .iter_mut()
            .find(|limit| limit.category == category && limit.period == period)
        {
            Some(existing) => {
                existing.limit = amount;
                existing.clone()
            }
            None => {
                let created = SpendingLimit::new(category, amount, period);
                records.push(created.clone());
                created
            }
        };
        self.store_collection(SPENDING_LIMITS_FILE, &records)?;
        Ok(record)
    }

    pub fn update_spending_limit(
        &self,
        id: Uuid,
        update: SpendingLimitUpdate,
    ) -> StoreResult<SpendingLimit> {
        let _guard = self.lock();
        let mut records: Vec<SpendingLimit> = self.load_collection(SPENDING_LIMITS_FILE)?;
        let record = records
            .iter_mut()
            .find(|limit| limit.id == id)
            .ok_or(StoreError::SpendingLimitNotFound(id))?;
        update.apply(record);
        let updated = record.clone();
        self.store_collection(SPENDING_LIMITS_FILE, &records)?;
        Ok(updated)
    }

    pub fn delete_spending_limit(&self, id: Uuid) -> StoreResult<()> {
        let _guard = self.lock();
        let mut records: Vec<SpendingLimit> = self.load_collection(SPENDING_LIMITS_FILE)?;
        records.retain(|limit| limit.id != id);
        self.store_collection(SPENDING_LIMITS_FILE, &records)
    }

    // ---- persistence helpers ----

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn collection_path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    fn load_collection<T: DeserializeOwned>(&self, file: &str) -> StoreResult<Vec<T>> {
        let path = self.collection_path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|err| StoreError::Serde(err.to_string()))
    }

    fn store_collection<T: Serialize>(&self, file: &str, records: &[T]) -> StoreResult<()> {
        let path = self.collection_path(file);
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| StoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn find_record<T: Identifiable>(records: Vec<T>, id: Uuid) -> Option<T> {
    records.into_iter().find(|record| record.id() == id)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
