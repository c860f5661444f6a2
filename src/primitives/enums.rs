//! Human-readable enum descriptions.
//!
//! Descriptions come from strum's compile-time tables: derive
//! `strum::EnumMessage` and `strum::AsRefStr`, then tag variants with
//! `#[strum(message = "...")]`. Parsing strings back into enums goes through
//! [`StrExt::to_enum`](crate::primitives::StrExt::to_enum) and
//! `strum::EnumString`.

use strum::EnumMessage;

/// Describes an enum value.
///
/// # Examples
///
/// ```
/// use extkit::primitives::EnumDescription;
///
/// #[derive(strum::EnumMessage, strum::AsRefStr)]
/// enum Status {
///     #[strum(message = "Waiting for approval")]
///     Pending,
///     Done,
/// }
///
/// assert_eq!(Status::Pending.description(), "Waiting for approval");
/// assert_eq!(Status::Done.description(), "Done");
/// ```
pub trait EnumDescription {
    /// The variant's message, or its name when it has none.
    fn description(&self) -> &str;
}

impl<E> EnumDescription for E
where
    E: EnumMessage + AsRef<str>,
{
    fn description(&self) -> &str {
        match self.get_message() {
            Some(message) => message,
            None => self.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::StrExt;

    #[derive(Debug, PartialEq, strum::EnumMessage, strum::AsRefStr, strum::EnumString)]
    #[strum(ascii_case_insensitive)]
    enum Weekday {
        #[strum(message = "First day of the working week")]
        Monday,
        Tuesday,
        #[strum(message = "Rest")]
        Sunday,
    }

    #[test]
    fn test_description_uses_message() {
        assert_eq!(Weekday::Monday.description(), "First day of the working week");
        assert_eq!(Weekday::Sunday.description(), "Rest");
    }

    #[test]
    fn test_description_falls_back_to_name() {
        assert_eq!(Weekday::Tuesday.description(), "Tuesday");
    }

    #[test]
    fn test_parse_description_source_enum() {
        assert_eq!("sunday".to_enum::<Weekday>().unwrap(), Weekday::Sunday);
        assert!("Someday".to_enum::<Weekday>().is_err());
    }
}
