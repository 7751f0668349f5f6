//! Admin login flag
//!
//! Credentials are compiled in from ADMIN_USER / ADMIN_PASSWORD (see build.rs).
//! This only hides the editor UI; anyone with the bundle can read them.

use crate::utils::log_trace::{log_info, log_warn};
use crate::utils::store::{read, remove, write};

const LOGGED_IN_KEY: &str = "admin_logged_in";

pub struct Credentials {
    pub user: &'static str,
    pub password: &'static str,
}

pub fn configured_credentials() -> Option<Credentials> {
    Some(Credentials {
        user: option_env!("PORTFOLIO_ADMIN_USER")?,
        password: option_env!("PORTFOLIO_ADMIN_PASSWORD")?,
    })
}

/// Without configured credentials every attempt is rejected.
pub fn credentials_match(expected: Option<&Credentials>, user: &str, password: &str) -> bool {
    match expected {
        Some(c) => !c.user.is_empty() && c.user == user.trim() && c.password == password,
        None => false,
    }
}

pub fn check_credentials(user: &str, password: &str) -> bool {
    let expected = configured_credentials();
    if expected.is_none() {
        log_warn("auth", "admin credentials were not configured at build time");
    }
    let ok = credentials_match(expected.as_ref(), user, password);
    if ok {
        log_info("auth", "admin signed in");
    } else {
        log_warn("auth", "rejected admin sign-in");
    }
    ok
}

pub fn is_logged_in() -> bool {
    match read::<bool>(LOGGED_IN_KEY) {
        Ok(flag) => flag.unwrap_or(false),
        Err(e) => {
            log_warn("auth", &format!("treating session as signed out: {}", e));
            false
        }
    }
}

pub fn set_logged_in(logged_in: bool) {
    let result = if logged_in {
        write(LOGGED_IN_KEY, &true)
    } else {
        remove(LOGGED_IN_KEY)
    };
    if let Err(e) = result {
        log_warn("auth", &format!("could not persist login state: {}", e));
    }
    if !logged_in {
        log_info("auth", "admin signed out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CREDS: Credentials = Credentials {
        user: "admin@example.com",
        password: "s3cret",
    };

    #[test]
    fn test_matching_credentials() {
        assert!(credentials_match(Some(&CREDS), "admin@example.com", "s3cret"));
        assert!(credentials_match(Some(&CREDS), " admin@example.com ", "s3cret"));
    }

    #[test]
    fn test_wrong_credentials() {
        assert!(!credentials_match(Some(&CREDS), "admin@example.com", "S3cret"));
        assert!(!credentials_match(Some(&CREDS), "other@example.com", "s3cret"));
        assert!(!credentials_match(Some(&CREDS), "", ""));
    }

    #[test]
    fn test_unconfigured_rejects_everything() {
        assert!(!credentials_match(None, "", ""));
        assert!(!credentials_match(None, "admin@example.com", "s3cret"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::utils::store::local_storage;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn login_flag_round_trip() {
        set_logged_in(true);
        assert!(is_logged_in());
        set_logged_in(false);
        assert!(!is_logged_in());
        assert!(local_storage().unwrap().get_item(LOGGED_IN_KEY).unwrap().is_none());
    }
}
