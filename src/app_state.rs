//! Implements a struct that holds the state of the REST server.

use crate::{Error, timezone::get_local_offset};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Analytics windows (today, this week, this month) are computed in this timezone.
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns an [Error::InvalidTimezoneError] if the timezone is not known.
    pub fn new(local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{AppState, Error};

    #[test]
    fn new_accepts_canonical_timezone() {
        let state = AppState::new("Pacific/Auckland").unwrap();

        assert_eq!(state.local_timezone, "Pacific/Auckland");
    }

    #[test]
    fn new_rejects_unknown_timezone() {
        assert_eq!(
            AppState::new("Not/AZone").unwrap_err(),
            Error::InvalidTimezoneError("Not/AZone".to_owned())
        );
    }
}
