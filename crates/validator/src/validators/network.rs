//! URL validator

use serde_json::Value;

fn is_absolute_url(value: &Value) -> bool {
    value
        .as_str()
        .and_then(|s| url::Url::parse(s).ok())
        .is_some_and(|url| url.has_host())
}

crate::validator! {
    /// Accepts absolute URLs with a scheme and a host. Non-strings fail.
    ///
    /// ```
    /// use fieldguard_validator::prelude::*;
    /// use serde_json::json;
    ///
    /// assert!(url().check(&json!("http://vk.com")).unwrap().is_pass());
    /// assert!(!url().check(&json!("/1https://vk.com")).unwrap().is_pass());
    /// ```
    pub Url;
    rule(value) { is_absolute_url(value) }
    messages("must be a valid URL", "must not be a valid URL");
    fn url();
}
