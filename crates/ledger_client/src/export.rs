use crate::{ApiClient, RecordKind, Session, error::Result};

/// A spreadsheet export as produced by the service: raw bytes plus the
/// suggested filename. Writing the bytes somewhere is the host's concern.
#[derive(Clone, Debug)]
pub struct ExportFile {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// Requests pre-formatted spreadsheet exports from the remote service.
///
/// The service computes the file from its own authoritative record set, not
/// from any local cache, so the adapter is independent of the repositories
/// and never touches their state.
#[derive(Clone, Debug)]
pub struct Exporter {
    api: ApiClient,
    session: Session,
}

impl Exporter {
    pub fn new(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }

    /// Downloads the export for `kind`. On failure nothing is produced;
    /// there is no partial success.
    pub async fn export_file(&self, kind: RecordKind) -> Result<ExportFile> {
        let token = self.session.token();
        let path = format!("{}/download", kind.path());

        let bytes = match self.api.get_bytes(token.as_deref(), &path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!("{kind} export failed: {err}");
                return Err(err);
            }
        };

        Ok(ExportFile {
            filename: kind.export_filename(),
            bytes,
        })
    }
}
