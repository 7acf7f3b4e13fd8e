use hostkeep_domain::{
    BackupDocument, BackupError, HostEntry, HostListItem, HostsSource, ListType, SourceEntry,
};

/// Builds the backup document of the given sources and items.
///
/// Items are split by list type into `blocked`, `allowed` and `redirected`,
/// each keeping the relative order the items had in `items`.
///
/// # Errors
///
/// * `BackupError::Encoding` - If a source or item has an invalid required
///   field; no document is produced in that case
pub fn build_backup(
    sources: &[HostsSource],
    items: &[HostListItem],
) -> Result<BackupDocument, BackupError> {
    let sources = sources
        .iter()
        .map(encode_source)
        .collect::<Result<Vec<_>, _>>()?;

    let mut document = BackupDocument {
        sources,
        ..Default::default()
    };

    for item in items {
        let entry = encode_host(item)?;
        match item.list_type {
            ListType::Block => document.blocked.push(entry),
            ListType::Allow => document.allowed.push(entry),
            ListType::Redirect => document.redirected.push(entry),
        }
    }

    Ok(document)
}

fn encode_source(source: &HostsSource) -> Result<SourceEntry, BackupError> {
    HostsSource::validate_url(&source.url).map_err(|reason| {
        BackupError::Encoding(format!("hosts source {:?}: {}", source.id, reason))
    })?;

    Ok(SourceEntry {
        url: source.url.to_string(),
        enabled: source.enabled,
    })
}

fn encode_host(item: &HostListItem) -> Result<HostEntry, BackupError> {
    HostListItem::validate_host(&item.host).map_err(|reason| {
        BackupError::Encoding(format!("{} item {:?}: {}", item.list_type, item.id, reason))
    })?;

    Ok(HostEntry {
        host: item.host.to_string(),
        redirect: item.redirect_target().map(str::to_string),
        enabled: item.enabled,
    })
}
