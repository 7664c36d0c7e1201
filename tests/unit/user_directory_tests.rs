use mcp_workbench::models::user::{sample_directory, UserList};

#[test]
fn directory_has_five_users() {
    let users = sample_directory();
    assert_eq!(users.len(), 5);
    assert_eq!(users[0].name, "Alice Smith");
    assert_eq!(users[0].role, "admin");
}

#[test]
fn ids_are_sequential() {
    let ids: Vec<u32> = sample_directory().iter().map(|user| user.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn active_only_list_has_three_users() {
    let list = UserList::assemble(false);
    assert_eq!(list.total, 3);
    assert_eq!(list.users.len(), 3);
    assert!(list.users.iter().all(|user| user.active));
}

#[test]
fn full_list_includes_inactive_users() {
    let list = UserList::assemble(true);
    assert_eq!(list.total, 5);
    assert!(list.users.iter().any(|user| !user.active));
}

#[test]
fn total_matches_users_len() {
    for include_inactive in [false, true] {
        let list = UserList::assemble(include_inactive);
        assert_eq!(list.total, list.users.len());
    }
}

#[test]
fn serializes_with_expected_shape() {
    let value = serde_json::to_value(UserList::assemble(true)).expect("serializes");
    assert_eq!(value["total"], 5);
    assert_eq!(value["users"][3]["name"], "Diana Prince");
    assert_eq!(value["users"][3]["active"], false);
}
