//! CLI configuration.
//!
//! Settings live in `~/.config/holidays/config.toml` by default:
//!
//! ```toml
//! application_name = "my-calendar"
//!
//! [auth]
//! type = "bearer"
//! token = "env::SALLING_TOKEN"
//! ```
//!
//! Credential values support secret references (`pass::…`, `env::…`), see
//! [`crate::secret`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use holidays_api::{AuthCredentials, ClientConfig};

use crate::secret::{self, SecretRef};

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Name sent along in the User-Agent.
    pub application_name: Option<String>,

    /// Overrides the API address.
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,

    /// Credentials, possibly holding secret references.
    pub auth: Option<AuthCredentials>,

    /// File this configuration was read from.
    #[serde(skip)]
    source: Option<PathBuf>,
}

impl CliConfig {
    /// Loads configuration from the default path, or defaults if it does not exist.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        let mut config: Self = toml::from_str(&content)
            .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// The file this configuration came from, or the default location when
    /// nothing was loaded.
    pub fn path(&self) -> PathBuf {
        self.source.clone().unwrap_or_else(Self::default_path)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("holidays")
            .join("config.toml")
    }

    /// Returns the credentials with secret references expanded.
    pub fn resolve_credentials(&self) -> Result<AuthCredentials, String> {
        let auth = self.auth.as_ref().ok_or_else(|| {
            format!(
                "credentials not found. Add to {}:\n  \
                 [auth]\n  \
                 type = \"bearer\"\n  \
                 token = \"YOUR_TOKEN\"",
                self.path().display()
            )
        })?;

        let resolved = match auth {
            AuthCredentials::Bearer { token } => AuthCredentials::Bearer {
                token: secret::resolve("auth.token", token)?,
            },
            AuthCredentials::Jwt { issuer, secret } => AuthCredentials::Jwt {
                issuer: secret::resolve("auth.issuer", issuer)?,
                secret: secret::resolve("auth.secret", secret)?,
            },
        };
        resolved.validate().map_err(|e| e.to_string())?;
        Ok(resolved)
    }

    /// Returns a copy safe to print: plain-text credentials are masked, secret
    /// references are kept.
    pub fn redacted(&self) -> Self {
        let mask = |value: &String| {
            if SecretRef::parse(value).is_reference() {
                value.clone()
            } else {
                "<redacted>".to_string()
            }
        };
        let auth = self.auth.as_ref().map(|auth| match auth {
            AuthCredentials::Bearer { token } => AuthCredentials::Bearer { token: mask(token) },
            AuthCredentials::Jwt { issuer, secret } => AuthCredentials::Jwt {
                issuer: issuer.clone(),
                secret: mask(secret),
            },
        });
        Self {
            auth,
            ..self.clone()
        }
    }

    /// Builds the client configuration. `application_name` overrides the file.
    pub fn to_client_config(&self, application_name: Option<&str>) -> Result<ClientConfig, String> {
        let mut config = ClientConfig::new(self.resolve_credentials()?);

        if let Some(name) = application_name.or(self.application_name.as_deref()) {
            config = config.with_application_name(name);
        }
        if let Some(ref url) = self.base_url {
            config = config.with_base_url(url).map_err(|e| e.to_string())?;
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_bearer_config() {
        let config: CliConfig = toml::from_str(
            r#"
application_name = "bot"
timeout_secs = 10

[auth]
type = "bearer"
token = "abc"
"#,
        )
        .unwrap();

        let client = config.to_client_config(None).unwrap();
        assert_eq!(client.auth, AuthCredentials::bearer("abc"));
        assert_eq!(client.application_name.as_deref(), Some("bot"));
        assert_eq!(client.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn jwt_config_with_env_references() {
        unsafe {
            std::env::set_var("_HOLIDAYS_CFG_ISSUER", "issuer-from-env");
            std::env::set_var("_HOLIDAYS_CFG_SECRET", "secret-from-env");
        }

        let config: CliConfig = toml::from_str(
            r#"
[auth]
type = "jwt"
issuer = "env::_HOLIDAYS_CFG_ISSUER"
secret = "env::_HOLIDAYS_CFG_SECRET"
"#,
        )
        .unwrap();
        let creds = config.resolve_credentials().unwrap();
        assert_eq!(
            creds,
            AuthCredentials::jwt("issuer-from-env", "secret-from-env")
        );

        unsafe {
            std::env::remove_var("_HOLIDAYS_CFG_ISSUER");
            std::env::remove_var("_HOLIDAYS_CFG_SECRET");
        }
    }

    #[test]
    fn missing_auth_errors() {
        let err = CliConfig::default().resolve_credentials().unwrap_err();
        assert!(err.contains("credentials not found"));
    }

    #[test]
    fn unresolvable_reference_names_field() {
        let config = CliConfig {
            auth: Some(AuthCredentials::jwt("issuer", "env::_HOLIDAYS_CFG_UNSET_4242")),
            ..Default::default()
        };
        let err = config.resolve_credentials().unwrap_err();
        assert!(err.contains("auth.secret"), "{err}");
    }

    #[test]
    fn empty_token_errors() {
        let config = CliConfig {
            auth: Some(AuthCredentials::bearer("")),
            ..Default::default()
        };
        assert!(config.resolve_credentials().is_err());
    }

    #[test]
    fn application_name_override() {
        let config = CliConfig {
            application_name: Some("from-file".to_string()),
            auth: Some(AuthCredentials::bearer("t")),
            ..Default::default()
        };
        let client = config.to_client_config(Some("from-flag")).unwrap();
        assert_eq!(client.application_name.as_deref(), Some("from-flag"));
    }

    #[test]
    fn bad_base_url_errors() {
        let config = CliConfig {
            base_url: Some("::nope::".to_string()),
            auth: Some(AuthCredentials::bearer("t")),
            ..Default::default()
        };
        assert!(config.to_client_config(None).is_err());
    }

    #[test]
    fn redacted_masks_plain_secrets_only() {
        let config = CliConfig {
            auth: Some(AuthCredentials::jwt("issuer", "plain-secret")),
            ..Default::default()
        };
        let redacted = config.redacted();
        assert_eq!(
            redacted.auth,
            Some(AuthCredentials::jwt("issuer", "<redacted>"))
        );

        let config = CliConfig {
            auth: Some(AuthCredentials::bearer("env::TOKEN")),
            ..Default::default()
        };
        assert_eq!(
            config.redacted().auth,
            Some(AuthCredentials::bearer("env::TOKEN"))
        );
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url = \"http://localhost:9000\"\n[auth]\ntype = \"bearer\"\ntoken = \"t\""
        )
        .unwrap();

        let config = CliConfig::load_from(file.path()).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));

        let client = config.to_client_config(None).unwrap();
        assert_eq!(client.base_url.as_str(), "http://localhost:9000/");
    }

    #[test]
    fn missing_auth_names_loaded_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "application_name = \"bot\"").unwrap();

        let config = CliConfig::load_from(file.path()).unwrap();
        assert_eq!(config.path(), file.path());

        let err = config.resolve_credentials().unwrap_err();
        assert!(err.contains(&file.path().display().to_string()), "{err}");
        assert!(!err.contains(&CliConfig::default_path().display().to_string()));
    }

    #[test]
    fn unloaded_config_uses_default_path() {
        assert_eq!(CliConfig::default().path(), CliConfig::default_path());
    }

    #[test]
    fn load_from_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = CliConfig::load_from(&dir.path().join("absent.toml"));
        assert!(result.is_err());
    }
}
