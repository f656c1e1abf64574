use std::fmt;
use std::str::FromStr;

/// Deployment profile, chosen with `APP_ENVIRONMENT`. Each profile layers its
/// own `appsettings.<name>.toml` over the built-in defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Mock recognizer, local staging directory, verbose text logs.
    #[default]
    Local,
    /// Used by the test suite: mock recognizer with no artificial delay.
    Test,
    /// Google Speech with Cloud Storage staging and JSON logs.
    Prod,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown environment '{0}', expected local, test or prod")]
pub struct UnknownEnvironment(String);

impl Environment {
    /// Lowercase profile name, as used in settings file names and log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Test => "test",
            Self::Prod => "prod",
        }
    }

    /// Settings file stem for this profile, without the extension.
    pub fn settings_file(&self) -> String {
        format!("appsettings.{}", self.as_str())
    }
}

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
