//! Name derivation for provisioned resources
//!
//! App Service names share a global DNS namespace, so the caller-supplied app
//! name gets a random 5-letter suffix to reduce collision risk. This is
//! best-effort only: no remote availability check is made, and a collision
//! still fails at creation time (see `ProvisionError::NameTaken`).

use rand::Rng;

/// Pricing tier for the app service plan
pub const SKU: &str = "B1";

/// Runtime stack name for created web apps
pub const RUNTIME_NAME: &str = "NODE";

/// Runtime stack version for created web apps
pub const RUNTIME_VERSION: &str = "20-lts";

const SUFFIX_LEN: usize = 5;

/// Runtime stack string in the form az expects, e.g. "NODE|20-lts"
pub fn runtime_stack() -> String {
    format!("{}|{}", RUNTIME_NAME, RUNTIME_VERSION)
}

/// Service plan name derived from the caller-supplied app name
pub fn plan_name(app_name: &str) -> String {
    format!("{}-plan", app_name)
}

/// Append a random 5-letter suffix and lower-case the whole name
pub fn randomize_app_name(app_name: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| rng.gen_range(b'a'..=b'z') as char)
        .collect();

    format!("{}-{}", app_name, suffix).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_name_derivation() {
        assert_eq!(plan_name("shop"), "shop-plan");
    }

    #[test]
    fn test_runtime_stack_format() {
        assert_eq!(runtime_stack(), "NODE|20-lts");
    }

    #[test]
    fn test_randomized_name_length() {
        // original + hyphen + 5 suffix chars
        for _ in 0..200 {
            let name = randomize_app_name("MyShop");
            assert_eq!(name.len(), "MyShop".len() + 6);
        }
    }

    #[test]
    fn test_randomized_name_is_lowercase() {
        for _ in 0..200 {
            let name = randomize_app_name("MyShop");
            assert_eq!(name, name.to_lowercase());
        }
    }

    #[test]
    fn test_randomized_suffix_is_alphabetic() {
        for _ in 0..200 {
            let name = randomize_app_name("shop");
            let suffix = name.rsplit('-').next().unwrap();
            assert_eq!(suffix.len(), 5);
            assert!(suffix.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_randomized_names_vary() {
        let a = randomize_app_name("shop");
        let b = randomize_app_name("shop");
        let c = randomize_app_name("shop");
        // 26^5 suffixes; three identical draws in a row means a broken RNG
        assert!(a != b || b != c);
    }
}
