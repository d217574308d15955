use reqwest::Url;

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) url
pub fn check_api_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value.trim())
        .map_err(|e| format!("The api url '{value}' is not a valid url: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.trim().trim_end_matches('/').to_string()),
        other => Err(format!(
            "The api url '{value}' must use http or https, not '{other}'."
        )),
    }
}

/// # Errors
///
/// Will return `Err` if the value is not a whole number of seconds greater than zero
pub fn check_positive_secs(value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err("The timeout must be at least one second.".to_string()),
        Ok(secs) => Ok(secs),
        Err(e) => Err(format!("'{value}' is not a number of seconds: {e}")),
    }
}
