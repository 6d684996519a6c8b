use super::*;
use crate::kernel::services::ports::{ApiError, KappaExport, NavigatorConfig};
use crate::kernel::{ContextAction, HierarchyEvent};
use crate::models::HierarchyTree;
use serde_json::{json, Value};

fn sample() -> Value {
    json!({
        "name": "root",
        "children": [
            {"name": "g1"},
            {"name": "g2", "children": [{"name": "g2a"}]}
        ]
    })
}

fn new_store() -> Store {
    Store::new(AppState::new(NavigatorConfig::default()))
}

fn fetch_generation(result: &DispatchResult) -> u64 {
    match result.effects.as_slice() {
        [Effect::FetchHierarchy { generation, .. }] => *generation,
        other => panic!("expected a single fetch, got {other:?}"),
    }
}

fn loaded_store() -> Store {
    let mut store = new_store();
    let generation = fetch_generation(&store.dispatch(Action::Load {
        root_path: "root".to_string(),
    }));
    store.dispatch(Action::HierarchyFetched {
        generation,
        result: Ok(sample()),
    });
    store
}

fn child(store: &Store, name: &str) -> NodeId {
    let state = store.state();
    let current = state.nav.current_node.unwrap();
    state.tree.child_by_name(current, name).unwrap()
}

fn current_name(store: &Store) -> String {
    let state = store.state();
    state
        .tree
        .name(state.nav.current_node.unwrap())
        .unwrap()
        .to_string()
}

fn published(result: &DispatchResult) -> Vec<HierarchyEvent> {
    result
        .effects
        .iter()
        .filter_map(|e| match e {
            Effect::Publish(event) => Some(event.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn load_requests_fetch_with_new_generation() {
    let mut store = new_store();
    let first = store.dispatch(Action::Load {
        root_path: "/".to_string(),
    });
    let second = store.dispatch(Action::Reload);

    assert_eq!(
        first.effects,
        vec![Effect::FetchHierarchy {
            generation: 1,
            root_path: "/".to_string(),
            include_graphs: false,
        }]
    );
    assert_eq!(fetch_generation(&second), 2);
    assert!(store.state().load.is_loading());
}

#[test]
fn reload_before_any_load_is_noop() {
    let mut store = new_store();
    let result = store.dispatch(Action::Reload);
    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn fetched_hierarchy_sets_root_as_current() {
    let store = loaded_store();
    let state = store.state();

    assert_eq!(state.nav.current_node, state.tree.root());
    assert_eq!(state.nav.selected_node, None);
    assert!(state.nav.selection_set.is_empty());
    assert_eq!(state.tree.names_of(state.current_children()), ["g1", "g2"]);
    assert!(!state.load.is_loading());
}

#[test]
fn scenario_descend_and_select() {
    let mut store = loaded_store();

    let g1 = child(&store, "g1");
    let result = store.dispatch(Action::Descend { node: g1 });
    assert!(!result.state_changed);
    assert_eq!(current_name(&store), "root");

    let g2 = child(&store, "g2");
    let result = store.dispatch(Action::Descend { node: g2 });
    assert!(result.state_changed);
    assert_eq!(result.effects, vec![Effect::RenderSelector, Effect::RenderTabs]);
    assert!(published(&result).is_empty());
    assert_eq!(current_name(&store), "g2");

    let g2a = child(&store, "g2a");
    let result = store.dispatch(Action::Select {
        node: g2a,
        additive: false,
    });
    assert_eq!(store.state().nav.selected_node, Some(g2a));
    assert_eq!(
        published(&result),
        vec![
            HierarchyEvent::GraphSelected {
                path: "root/g2/g2a".to_string()
            },
            HierarchyEvent::TabContext {
                path: "root/g2/g2a".to_string(),
                sibling_names: vec!["g2a".to_string()],
                parent_path: "root/g2".to_string(),
                source: "hierarchy".to_string(),
            },
        ]
    );
}

#[test]
fn reselecting_same_tab_is_idempotent() {
    let mut store = loaded_store();
    let g1 = child(&store, "g1");

    store.dispatch(Action::Select {
        node: g1,
        additive: false,
    });
    let again = store.dispatch(Action::Select {
        node: g1,
        additive: false,
    });

    assert!(again.effects.is_empty());
    assert!(!again.state_changed);
}

#[test]
fn additive_select_toggles_without_events() {
    let mut store = loaded_store();
    let g1 = child(&store, "g1");
    let g2 = child(&store, "g2");

    let result = store.dispatch(Action::Select {
        node: g1,
        additive: true,
    });
    store.dispatch(Action::Select {
        node: g2,
        additive: true,
    });
    assert_eq!(result.effects, vec![Effect::RenderTabs]);
    assert_eq!(store.state().nav.selected_node, None);
    assert_eq!(store.state().marked_names(), ["g1", "g2"]);

    store.dispatch(Action::Select {
        node: g1,
        additive: true,
    });
    assert_eq!(store.state().marked_names(), ["g2"]);
}

#[test]
fn select_outside_current_scope_is_ignored() {
    let mut store = loaded_store();
    let g2 = child(&store, "g2");
    store.dispatch(Action::Descend { node: g2 });
    let g2a = child(&store, "g2a");
    let root = store.state().tree.root().unwrap();
    store.dispatch(Action::Descend { node: root });

    let result = store.dispatch(Action::Select {
        node: g2a,
        additive: false,
    });
    assert!(result.effects.is_empty());
    assert_eq!(store.state().nav.selected_node, None);
}

#[test]
fn descend_clears_selection() {
    let mut store = loaded_store();
    let g2 = child(&store, "g2");
    store.dispatch(Action::Select {
        node: g2,
        additive: false,
    });
    store.dispatch(Action::Select {
        node: g2,
        additive: true,
    });

    store.dispatch(Action::Descend { node: g2 });

    let nav = &store.state().nav;
    assert_eq!(nav.selected_node, None);
    assert!(nav.selection_set.is_empty());
}

#[test]
fn selector_change_moves_to_ancestor() {
    let mut store = loaded_store();
    let g2 = child(&store, "g2");
    store.dispatch(Action::Descend { node: g2 });

    let out_of_range = store.dispatch(Action::SelectorChanged { index: 5 });
    assert!(!out_of_range.state_changed);

    let same = store.dispatch(Action::SelectorChanged { index: 1 });
    assert!(!same.state_changed);

    let result = store.dispatch(Action::SelectorChanged { index: 0 });
    assert!(result.state_changed);
    assert_eq!(current_name(&store), "root");
}

#[test]
fn stale_response_is_dropped() {
    let mut store = new_store();
    let a = fetch_generation(&store.dispatch(Action::Load {
        root_path: "/a".to_string(),
    }));
    let b = fetch_generation(&store.dispatch(Action::Load {
        root_path: "/b".to_string(),
    }));

    store.dispatch(Action::HierarchyFetched {
        generation: b,
        result: Ok(json!({"name": "b", "children": [{"name": "from_b"}]})),
    });
    let late = store.dispatch(Action::HierarchyFetched {
        generation: a,
        result: Ok(json!({"name": "a", "children": [{"name": "from_a"}]})),
    });

    assert!(!late.state_changed);
    assert_eq!(current_name(&store), "b");
    let state = store.state();
    assert_eq!(state.tree.names_of(state.current_children()), ["from_b"]);
}

#[test]
fn stale_failure_is_not_reported() {
    let mut store = new_store();
    let a = fetch_generation(&store.dispatch(Action::Load {
        root_path: "/a".to_string(),
    }));
    store.dispatch(Action::Load {
        root_path: "/b".to_string(),
    });

    let result = store.dispatch(Action::HierarchyFetched {
        generation: a,
        result: Err(ApiError::Transport {
            detail: "reset".to_string(),
        }),
    });

    assert!(result.effects.is_empty());
    assert!(store.state().error.is_none());
    assert!(store.state().load.is_loading());
}

#[test]
fn reload_resets_navigation_and_invalidates_nodes() {
    let mut store = loaded_store();
    let g2 = child(&store, "g2");
    store.dispatch(Action::Descend { node: g2 });

    let generation = fetch_generation(&store.dispatch(Action::Reload));
    store.dispatch(Action::HierarchyFetched {
        generation,
        result: Ok(sample()),
    });

    assert_eq!(current_name(&store), "root");
    let result = store.dispatch(Action::Descend { node: g2 });
    assert!(!result.state_changed);
    assert_eq!(current_name(&store), "root");
}

#[test]
fn fetch_error_is_surfaced_and_blocks_interaction() {
    let mut store = loaded_store();
    let generation = fetch_generation(&store.dispatch(Action::Reload));
    let result = store.dispatch(Action::HierarchyFetched {
        generation,
        result: Err(ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            body: "missing".to_string(),
        }),
    });

    assert_eq!(
        result.effects,
        vec![Effect::ReportError("404 : Not Found\nmissing".to_string())]
    );
    assert!(store.state().error.is_some());
    assert_eq!(current_name(&store), "root");

    let g2 = child(&store, "g2");
    assert!(!store.dispatch(Action::Descend { node: g2 }).state_changed);
    assert!(store
        .dispatch(Action::ContextAction {
            node: g2,
            action: ContextAction::Delete
        })
        .effects
        .is_empty());

    assert!(store.dispatch(Action::DismissError).state_changed);
    assert!(store.dispatch(Action::Descend { node: g2 }).state_changed);
}

#[test]
fn loads_are_allowed_while_error_is_shown() {
    let mut store = loaded_store();
    let generation = fetch_generation(&store.dispatch(Action::Reload));
    store.dispatch(Action::HierarchyFetched {
        generation,
        result: Err(ApiError::Transport {
            detail: "refused".to_string(),
        }),
    });

    let result = store.dispatch(Action::Reload);
    assert_eq!(fetch_generation(&result), generation + 1);
}

#[test]
fn transport_error_uses_generic_message() {
    let mut store = new_store();
    let generation = fetch_generation(&store.dispatch(Action::Load {
        root_path: "/".to_string(),
    }));
    let result = store.dispatch(Action::HierarchyFetched {
        generation,
        result: Err(ApiError::Transport {
            detail: "connection refused".to_string(),
        }),
    });

    assert_eq!(
        result.effects,
        vec![Effect::ReportError("Unexpected Server Error".to_string())]
    );
}

#[test]
fn malformed_hierarchy_is_a_parse_error() {
    let mut store = new_store();
    let generation = fetch_generation(&store.dispatch(Action::Load {
        root_path: "/".to_string(),
    }));
    store.dispatch(Action::HierarchyFetched {
        generation,
        result: Ok(json!({"children": []})),
    });

    assert!(matches!(store.state().error, Some(NavError::Parse(_))));
    assert_eq!(store.state().nav.current_node, None);
}

#[test]
fn interaction_before_load_is_ignored() {
    let mut store = new_store();
    let mut other = HierarchyTree::new();
    other
        .load(json!({"name": "x", "children": [{"name": "y"}]}))
        .unwrap();
    let foreign = other.root().unwrap();

    let result = store.dispatch(Action::Descend { node: foreign });
    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn delete_asks_for_confirmation_first() {
    let mut store = loaded_store();
    let g2 = child(&store, "g2");

    let result = store.dispatch(Action::ContextAction {
        node: g2,
        action: ContextAction::Delete,
    });
    assert_eq!(
        result.effects,
        vec![Effect::ConfirmDelete {
            path: "root/g2".to_string(),
            prompt: "Confirmation : remove root/g2 and all its children ?".to_string(),
        }]
    );

    let confirmed = store.dispatch(Action::DeleteConfirmed {
        path: "root/g2".to_string(),
    });
    assert_eq!(
        confirmed.effects,
        vec![Effect::DeleteHierarchy {
            path: "root/g2".to_string()
        }]
    );

    let done = store.dispatch(Action::HierarchyDeleted {
        path: "root/g2".to_string(),
        result: Ok(()),
    });
    assert_eq!(published(&done), vec![HierarchyEvent::HierarchyChanged]);
}

#[test]
fn failed_delete_is_surfaced() {
    let mut store = loaded_store();
    let result = store.dispatch(Action::HierarchyDeleted {
        path: "root/g2".to_string(),
        result: Err(ApiError::Status {
            status: 403,
            status_text: "Forbidden".to_string(),
            body: String::new(),
        }),
    });

    assert!(published(&result).is_empty());
    assert_eq!(
        result.effects,
        vec![Effect::ReportError("403 : Forbidden\n".to_string())]
    );
}

#[test]
fn export_sends_marked_names_under_current_path() {
    let mut store = loaded_store();
    let g1 = child(&store, "g1");
    let g2 = child(&store, "g2");
    store.dispatch(Action::Select {
        node: g2,
        additive: true,
    });
    store.dispatch(Action::Select {
        node: g1,
        additive: true,
    });

    let result = store.dispatch(Action::ContextAction {
        node: g1,
        action: ContextAction::Export,
    });
    assert_eq!(
        result.effects,
        vec![Effect::ExportKappa {
            path: "root/".to_string(),
            names: vec!["g1".to_string(), "g2".to_string()],
        }]
    );

    let done = store.dispatch(Action::KappaExported {
        path: "root/".to_string(),
        result: Ok(KappaExport {
            kappa_code: "%agent: A()".to_string(),
        }),
    });
    assert_eq!(
        done.effects,
        vec![Effect::Download {
            file_name: "model.ka".to_string(),
            content: "%agent: A()".to_string(),
        }]
    );
}

#[test]
fn export_path_at_slash_root_is_not_doubled() {
    let mut store = new_store();
    let generation = fetch_generation(&store.dispatch(Action::Load {
        root_path: "/".to_string(),
    }));
    store.dispatch(Action::HierarchyFetched {
        generation,
        result: Ok(json!({"name": "/", "children": [{"name": "a"}]})),
    });
    let a = child(&store, "a");

    let result = store.dispatch(Action::ContextAction {
        node: a,
        action: ContextAction::Export,
    });
    assert_eq!(
        result.effects,
        vec![Effect::ExportKappa {
            path: "/".to_string(),
            names: Vec::new(),
        }]
    );
}

#[test]
fn validation_failures_never_reach_the_user() {
    let mut store = loaded_store();
    let g1 = child(&store, "g1");

    let result = store.dispatch(Action::Descend { node: g1 });
    let stale = store.dispatch(Action::SelectorChanged { index: 9 });

    assert!(result.effects.is_empty());
    assert!(stale.effects.is_empty());
    assert!(store.state().error.is_none());
}
