//! Plain-text reports for errors and their source chains.

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt::Write;

/// Renders an error and every error in its `source()` chain.
///
/// The outermost error contributes an `Error Type:` line and an
/// `Error Message:` line; each source adds another `Error Message:` line.
///
/// # Examples
///
/// ```
/// use extkit::error::{CollectionError, Error};
/// use extkit::primitives::ErrorReport;
///
/// let err = Error::from(CollectionError::MissingCollection { name: "list" });
/// let report = err.report();
/// assert!(report.starts_with("Error Type: extkit::error::Error."));
/// assert!(report.contains("Error Message: missing collection: list."));
/// ```
pub trait ErrorReport {
    /// Builds the report.
    fn report(&self) -> String;
}

impl<E> ErrorReport for E
where
    E: StdError + ?Sized,
{
    fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Error Type: {}.", type_name::<E>());
        let _ = writeln!(out, "Error Message: {self}.");

        let mut source = self.source();
        while let Some(cause) = source {
            let _ = writeln!(out, "Error Message: {cause}.");
            source = cause.source();
        }
        out
    }
}

/// Renders several unrelated errors one after another, separated by a blank
/// line.
///
/// Entries are taken as `dyn ErrorReport` so each report names its concrete
/// error type.
///
/// # Examples
///
/// ```
/// use extkit::error::{CodecError, CollectionError};
/// use extkit::primitives::{ErrorReport, report_all};
///
/// let missing = CollectionError::MissingCollection { name: "list" };
/// let regex = CodecError::Regex("unclosed group".to_string());
/// let errors: [&dyn ErrorReport; 2] = [&missing, &regex];
/// let report = report_all(errors);
/// assert!(report.contains("Error Type: extkit::error::CollectionError."));
/// assert!(report.contains("Error Type: extkit::error::CodecError."));
/// ```
pub fn report_all<'a, I>(errors: I) -> String
where
    I: IntoIterator<Item = &'a (dyn ErrorReport + 'a)>,
{
    errors
        .into_iter()
        .map(ErrorReport::report)
        .collect::<Vec<_>>()
        .join("\n")
}
