//! Default detectors used by [`validate`](super::validate).

use super::Configuration;
use super::validator::{CredentialChecker, MissingParamsDetector};

/// Credential keys checked for every strategy, whether it uses them or not.
pub const CREDENTIAL_KEYS: [&str; 3] = ["username", "password", "apikey"];

const PLACEHOLDER_CHARS: [char; 3] = ['{', '}', '"'];

/// Reports required keys that are absent, null or blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredKeys;

impl MissingParamsDetector for RequiredKeys {
    fn missing_params(&self, config: &Configuration, required: &[&str]) -> Option<Vec<String>> {
        let missing: Vec<String> = required
            .iter()
            .filter(|key| !config.is_present(key))
            .map(|key| key.to_string())
            .collect();

        if missing.is_empty() {
            None
        } else {
            Some(missing)
        }
    }
}

/// Flags the usual ways credentials get mixed up or pasted in wrong.
///
/// - an `apikey` supplied alongside `username`/`password`
/// - a value still wrapped in `{...}` or quotes, typically a template
///   placeholder or a JSON fragment copied verbatim
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialRules;

impl CredentialRules {
    fn mixes_modes(config: &Configuration, keys: &[&str]) -> bool {
        let checked = |key: &str| keys.iter().any(|k| *k == key) && config.is_present(key);
        checked("apikey") && (checked("username") || checked("password"))
    }
}

impl CredentialChecker for CredentialRules {
    fn check_credentials(&self, config: &Configuration, keys: &[&str]) -> Option<String> {
        let mut problems = Vec::new();

        if Self::mixes_modes(config, keys) {
            problems.push(
                "The apikey cannot be combined with username/password credentials. \
                 Supply either an apikey or a username/password pair."
                    .to_string(),
            );
        }

        let wrapped: Vec<&str> = keys
            .iter()
            .copied()
            .filter(|key| config.get_str(key).is_some_and(has_placeholder_ends))
            .collect();

        if !wrapped.is_empty() {
            let mut message = String::new();
            for key in wrapped {
                message.push_str(&format!(
                    "The {} shouldn't start or end with curly brackets or quotes. ",
                    key
                ));
            }
            message.push_str("Please remove any surrounding {, }, or \" characters.");
            problems.push(message);
        }

        if problems.is_empty() {
            None
        } else {
            Some(problems.join(" "))
        }
    }
}

fn has_placeholder_ends(value: &str) -> bool {
    value.starts_with(PLACEHOLDER_CHARS) || value.ends_with(PLACEHOLDER_CHARS)
}
