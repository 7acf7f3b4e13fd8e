mod get_host_lists;

pub use get_host_lists::{GetHostListsUseCase, HostLists};
