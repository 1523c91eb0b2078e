use crate::domain::{errors::DomainResult, ids::next_id};
use tokio::sync::Mutex;

pub(super) trait Keyed {
    fn key(&self) -> i64;
}

pub(super) enum Seed<T> {
    Loader(fn() -> DomainResult<Vec<T>>),
    Rows(Vec<T>),
}

/// One ordered collection, materialized from its seed on first access and
/// kept for the life of the owning store. Every operation runs under a
/// single lock acquisition.
pub(super) struct MemoryTable<T> {
    name: &'static str,
    seed: Seed<T>,
    rows: Mutex<Option<Vec<T>>>,
}

impl<T> MemoryTable<T>
where
    T: Keyed + Clone + Send + Sync,
{
    pub(super) fn new(name: &'static str, seed: Seed<T>) -> Self {
        Self {
            name,
            seed,
            rows: Mutex::new(None),
        }
    }

    async fn with_rows<F, R>(&self, f: F) -> DomainResult<R>
    where
        F: FnOnce(&mut Vec<T>) -> R + Send,
    {
        let mut guard = self.rows.lock().await;
        if guard.is_none() {
            let seeded = match &self.seed {
                Seed::Loader(load) => load()?,
                Seed::Rows(rows) => rows.clone(),
            };
            tracing::info!(table = self.name, rows = seeded.len(), "initializing in-memory store");
            *guard = Some(seeded);
        }
        let rows = guard.get_or_insert_with(Vec::new);
        Ok(f(rows))
    }

    pub(super) async fn list_all(&self) -> DomainResult<Vec<T>> {
        self.with_rows(|rows| rows.clone()).await
    }

    pub(super) async fn get(&self, key: i64) -> DomainResult<Option<T>> {
        self.with_rows(|rows| rows.iter().find(|row| row.key() == key).cloned())
            .await
    }

    pub(super) async fn insert_with<B>(&self, build: B) -> DomainResult<T>
    where
        B: FnOnce(i64) -> T + Send,
    {
        self.with_rows(|rows| {
            let row = build(next_id(rows.iter().map(Keyed::key)));
            rows.push(row.clone());
            row
        })
        .await
    }

    /// Overwrites in place when `key` exists; echoes `row` either way.
    pub(super) async fn replace(&self, key: i64, row: T) -> DomainResult<T> {
        let name = self.name;
        self.with_rows(|rows| {
            match rows.iter_mut().find(|existing| existing.key() == key) {
                Some(slot) => *slot = row.clone(),
                None => {
                    tracing::debug!(table = name, key, "replace matched no row; nothing stored");
                }
            }
            row
        })
        .await
    }

    /// Returns whether a row was removed.
    pub(super) async fn remove(&self, key: i64) -> DomainResult<bool> {
        self.with_rows(|rows| match rows.iter().position(|row| row.key() == key) {
            Some(index) => {
                rows.remove(index);
                true
            }
            None => false,
        })
        .await
    }

    #[cfg(test)]
    pub(super) async fn is_materialized(&self) -> bool {
        self.rows.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(i64, &'static str);

    impl Keyed for Row {
        fn key(&self) -> i64 {
            self.0
        }
    }

    fn table() -> MemoryTable<Row> {
        MemoryTable::new("rows", Seed::Rows(vec![Row(1, "a"), Row(5, "b"), Row(2, "c")]))
    }

    #[tokio::test]
    async fn seeds_lazily_on_first_access() {
        let table = table();
        assert!(!table.is_materialized().await);
        assert_eq!(table.list_all().await.unwrap().len(), 3);
        assert!(table.is_materialized().await);
    }

    #[tokio::test]
    async fn insert_takes_max_plus_one() {
        let table = table();
        let row = table.insert_with(|id| Row(id, "d")).await.unwrap();
        assert_eq!(row, Row(6, "d"));
        assert_eq!(table.list_all().await.unwrap().last(), Some(&Row(6, "d")));
    }

    #[tokio::test]
    async fn replace_keeps_position() {
        let table = table();
        table.replace(5, Row(5, "z")).await.unwrap();
        let rows = table.list_all().await.unwrap();
        assert_eq!(rows[1], Row(5, "z"));
    }

    #[tokio::test]
    async fn replace_of_unknown_key_echoes_without_storing() {
        let table = table();
        let echoed = table.replace(42, Row(42, "ghost")).await.unwrap();
        assert_eq!(echoed, Row(42, "ghost"));
        assert_eq!(table.get(42).await.unwrap(), None);
        assert_eq!(table.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn remove_reports_whether_anything_matched() {
        let table = table();
        assert!(table.remove(2).await.unwrap());
        assert!(!table.remove(2).await.unwrap());
        assert_eq!(table.list_all().await.unwrap().len(), 2);
    }
}
