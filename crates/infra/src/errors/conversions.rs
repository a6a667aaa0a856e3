//! Conversions from external infrastructure errors into domain errors.

use folio_common::storage::StorageError;
use folio_domain::FolioError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub FolioError);

impl From<InfraError> for FolioError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<FolioError> for InfraError {
    fn from(value: FolioError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoFolioError {
    fn into_folio(self) -> FolioError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → FolioError */
/* -------------------------------------------------------------------------- */

impl IntoFolioError for SqlError {
    fn into_folio(self) -> FolioError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => FolioError::Database("database is busy".into()),
                    (ErrorCode::DatabaseLocked, _) => {
                        FolioError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        FolioError::Database(format!("unique constraint violation: {message}"))
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        FolioError::Database("foreign key constraint violation".into())
                    }
                    _ => FolioError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => FolioError::Database("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                FolioError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                FolioError::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => FolioError::Database("invalid UTF-8 returned from sqlite".into()),
            RE::InvalidParameterName(parameter_name) => {
                FolioError::Database(format!("invalid parameter name: {parameter_name}"))
            }
            RE::InvalidPath(path) => {
                FolioError::Database(format!("invalid database path: {}", path.to_string_lossy()))
            }
            RE::InvalidQuery => FolioError::Database("invalid SQL query".into()),
            other => FolioError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        Self(value.into_folio())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → FolioError */
/* -------------------------------------------------------------------------- */

impl IntoFolioError for StorageError {
    fn into_folio(self) -> FolioError {
        match self {
            StorageError::Rusqlite(err) => err.into_folio(),
            StorageError::Timeout(secs) => {
                FolioError::Database(format!("timed out waiting {secs}s for a connection"))
            }
            StorageError::InvalidConfig(msg) => FolioError::Config(msg),
            other => FolioError::Database(other.to_string()),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        Self(value.into_folio())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → FolioError */
/* -------------------------------------------------------------------------- */

impl IntoFolioError for HttpError {
    fn into_folio(self) -> FolioError {
        if self.is_timeout() {
            return FolioError::Storage("object storage request timed out".into());
        }

        if self.is_connect() {
            return FolioError::Storage("object storage connection failure".into());
        }

        if let Some(status) = self.status() {
            return FolioError::Storage(format!(
                "object storage responded HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        FolioError::Storage(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_folio())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error / JoinError → FolioError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        Self(FolioError::Storage(format!("attachment I/O failure: {value}")))
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        Self(FolioError::Internal(format!("Task join error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
