//! Conversions from external infrastructure errors into domain errors.

use agenda_domain::AgendaError;
use reqwest::Error as HttpError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AgendaError);

impl From<InfraError> for AgendaError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AgendaError> for InfraError {
    fn from(value: AgendaError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoAgendaError {
    fn into_agenda(self) -> AgendaError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → AgendaError */
/* -------------------------------------------------------------------------- */

impl IntoAgendaError for SqlError {
    fn into_agenda(self) -> AgendaError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        AgendaError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        AgendaError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        AgendaError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        AgendaError::Database("foreign key constraint violation".into())
                    }
                    _ => AgendaError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => AgendaError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                AgendaError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                AgendaError::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => AgendaError::Database("invalid UTF-8 returned from sqlite".into()),
            RE::InvalidParameterName(parameter_name) => {
                AgendaError::Database(format!("invalid parameter name: {parameter_name}"))
            }
            RE::InvalidPath(path) => {
                AgendaError::Database(format!("invalid database path: {}", path.to_string_lossy()))
            }
            RE::InvalidQuery => AgendaError::Database("invalid SQL query".into()),
            other => AgendaError::Database(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_agenda())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → AgendaError */
/* -------------------------------------------------------------------------- */

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(AgendaError::Database(format!("connection pool error: {value}")))
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AgendaError */
/* -------------------------------------------------------------------------- */

impl IntoAgendaError for HttpError {
    fn into_agenda(self) -> AgendaError {
        if self.is_timeout() {
            return AgendaError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return AgendaError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => AgendaError::Auth(message),
                404 => AgendaError::NotFound(message),
                429 => AgendaError::Network(message),
                400..=499 => AgendaError::InvalidInput(message),
                _ => AgendaError::Network(message),
            };
        }

        AgendaError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_agenda())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
