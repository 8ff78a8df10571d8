use internment::Intern;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A jurisdiction identified by a 3-ascii code.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub(crate) name: Intern<String>,
}

impl Jurisdiction {
    /// Constructs a new `Jurisdiction`.
    ///
    /// Use **only** 3-ascii names, e.g. *"lux"*, *"bel"*, *"usa"*. `name` is
    /// converted to lowercase to promote performant equality between "LUX"
    /// and "lux".
    pub fn try_new(name: &str) -> Result<Self, Error> {
        let code: String = name.to_string().to_lowercase();
        if code.len() != 3 {
            return Err(Error::BadCalendarName(format!(
                "`Jurisdiction` must be 3 ascii characters in length, e.g. 'lux', got '{}'.",
                name
            )));
        }
        Ok(Jurisdiction {
            name: Intern::new(code),
        })
    }

    /// Return the lowercase code.
    pub fn code(&self) -> &str {
        self.name.as_str()
    }

    /// Return the uppercase form used in display titles, e.g. "LUX".
    pub fn label(&self) -> String {
        self.name.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jurisdiction_creation() {
        let a = Jurisdiction::try_new("lux").unwrap();
        let b = Jurisdiction::try_new("LUX").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.label(), "LUX");
    }

    #[test]
    fn jurisdiction_creation_error() {
        match Jurisdiction::try_new("FOUR") {
            Ok(_) => assert!(false),
            Err(_) => assert!(true),
        }
    }
}
