pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("Hosts source URL cannot be empty".to_string());
    }
    Ok(())
}

pub fn validate_host(host: &str) -> Result<(), String> {
    if host.is_empty() {
        return Err("Host cannot be empty".to_string());
    }
    Ok(())
}
