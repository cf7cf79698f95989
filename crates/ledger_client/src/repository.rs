use std::sync::{
    Mutex, PoisonError,
    atomic::{AtomicBool, Ordering},
};

use api_types::record::RecordView;

use crate::{
    ApiClient, LedgerRecord, RecordDraft, RecordKind, Session,
    error::{Result, TransportError},
};

/// Synchronized record cache for one record kind.
///
/// The cache is authoritative as of the last successful round-trip and is
/// never speculatively mutated: `create` and `remove` follow a
/// mutate-then-resynchronize protocol where every successful mutation is
/// followed by a full re-list before the cache is considered current. The
/// visible delay between a mutation completing and the cache reflecting it
/// is an accepted trade-off of that protocol.
///
/// At most one mutation per kind may be in flight; an overlapping `create`
/// or `remove` is rejected with [`TransportError::MutationInFlight`] before
/// touching the network. Reads (`list`, `snapshot`) are not guarded.
/// Repositories of different kinds share nothing and operate independently.
///
/// On any failure the previous cache is left unchanged and the error is
/// propagated; the caller owns user notification.
#[derive(Debug)]
pub struct Repository {
    kind: RecordKind,
    api: ApiClient,
    session: Session,
    cache: Mutex<Vec<LedgerRecord>>,
    mutation_in_flight: AtomicBool,
}

impl Repository {
    pub fn new(kind: RecordKind, api: ApiClient, session: Session) -> Self {
        Self {
            kind,
            api,
            session,
            cache: Mutex::new(Vec::new()),
            mutation_in_flight: AtomicBool::new(false),
        }
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Fetches the full current set from the service, replaces the cache
    /// wholesale and returns the new contents.
    pub async fn list(&self) -> Result<Vec<LedgerRecord>> {
        let token = self.session.token();
        let path = format!("{}/", self.kind.path());

        let views: Vec<RecordView> = match self.api.get_json(token.as_deref(), &path).await {
            Ok(views) => views,
            Err(err) => {
                tracing::error!("{} list failed: {err}", self.kind);
                return Err(err);
            }
        };

        let records: Vec<LedgerRecord> = views
            .into_iter()
            .map(|view| LedgerRecord::from_view(self.kind, view))
            .collect();
        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = records.clone();
        Ok(records)
    }

    /// Submits a draft to the service, then resynchronizes via an implicit
    /// [`list`](Self::list). The cache is never populated from the draft
    /// itself; the server-assigned id only becomes visible through the
    /// re-list.
    pub async fn create(&self, draft: RecordDraft) -> Result<()> {
        let _guard = self.begin_mutation()?;
        let token = self.session.token();
        let path = format!("{}/", self.kind.path());
        let payload = draft.into_wire(self.kind);

        if let Err(err) = self
            .api
            .post_json_unit(token.as_deref(), &path, &payload)
            .await
        {
            tracing::error!("{} create failed: {err}", self.kind);
            return Err(err);
        }
        self.list().await?;
        Ok(())
    }

    /// Requests deletion of the record identified by `id`, then
    /// resynchronizes via an implicit [`list`](Self::list).
    pub async fn remove(&self, id: &str) -> Result<()> {
        let _guard = self.begin_mutation()?;
        let token = self.session.token();
        let path = format!("{}/{}", self.kind.path(), id);

        if let Err(err) = self.api.delete_unit(token.as_deref(), &path).await {
            tracing::error!("{} remove failed: {err}", self.kind);
            return Err(err);
        }
        self.list().await?;
        Ok(())
    }

    /// Current cache contents without a network round-trip.
    pub fn snapshot(&self) -> Vec<LedgerRecord> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Claims the per-kind mutation slot. The guard is held through the
    /// implicit re-list, so the cache swap is part of the critical section.
    fn begin_mutation(&self) -> Result<MutationGuard<'_>> {
        if self
            .mutation_in_flight
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(TransportError::MutationInFlight);
        }
        Ok(MutationGuard {
            flag: &self.mutation_in_flight,
        })
    }
}

struct MutationGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for MutationGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> Repository {
        Repository::new(
            RecordKind::Expense,
            ApiClient::new(reqwest::Client::new(), "http://localhost:0"),
            Session::new(),
        )
    }

    #[test]
    fn snapshot_starts_empty() {
        let repo = repository();
        assert!(repo.snapshot().is_empty());
    }

    #[test]
    fn mutation_slot_is_exclusive_until_dropped() {
        let repo = repository();
        let guard = repo.begin_mutation().unwrap();
        assert!(matches!(
            repo.begin_mutation(),
            Err(TransportError::MutationInFlight)
        ));
        drop(guard);
        assert!(repo.begin_mutation().is_ok());
    }
}
