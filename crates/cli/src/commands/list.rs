use hostkeep_application::use_cases::GetHostListsUseCase;
use hostkeep_domain::{BackupSection, ListType};

pub async fn run_list(get_host_lists: &GetHostListsUseCase) -> anyhow::Result<()> {
    let lists = get_host_lists.execute().await?;

    println!("{} ({})", BackupSection::Sources, lists.sources.len());
    for source in &lists.sources {
        println!("  [{}] {}", enabled_mark(source.enabled), source.url);
    }

    for list_type in ListType::all() {
        let items: Vec<_> = lists.items_of(*list_type).collect();
        println!("{} ({})", BackupSection::for_list_type(*list_type), items.len());
        for item in items {
            match item.redirect_target() {
                Some(target) => println!(
                    "  [{}] {} -> {}",
                    enabled_mark(item.enabled),
                    item.host,
                    target
                ),
                None => println!("  [{}] {}", enabled_mark(item.enabled), item.host),
            }
        }
    }

    Ok(())
}

fn enabled_mark(enabled: bool) -> char {
    if enabled {
        'x'
    } else {
        ' '
    }
}
