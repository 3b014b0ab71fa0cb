use std::fmt;
use std::str::FromStr;

/// Identifiers of the viewer's states.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum StateId {
    #[default]
    None,
    MainAppOpen,
    ExitApplicationState,
}

impl StateId {
    pub const ALL: [StateId; 3] = [StateId::None, StateId::MainAppOpen, StateId::ExitApplicationState];

    pub fn as_str(self) -> &'static str {
        match self {
            StateId::None => "None",
            StateId::MainAppOpen => "MainAppOpen",
            StateId::ExitApplicationState => "ExitApplicationState",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name that matches no [`StateId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStateId(pub String);

impl fmt::Display for UnknownStateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown state id '{}'", self.0)
    }
}

impl std::error::Error for UnknownStateId {}

impl FromStr for StateId {
    type Err = UnknownStateId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match StateId::ALL.into_iter().find(|id| id.as_str() == s) {
            Some(id) => Ok(id),
            None => {
                log::warn!("unable to convert '{s}' to a state id");
                Err(UnknownStateId(s.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for id in StateId::ALL {
            assert_eq!(id.to_string().parse::<StateId>(), Ok(id));
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "Paused".parse::<StateId>().unwrap_err();
        assert_eq!(err.to_string(), "unknown state id 'Paused'");
    }
}
