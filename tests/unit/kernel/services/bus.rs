use super::*;

#[test]
fn every_subscriber_gets_each_event() {
    let hub = EventHub::new();
    let mut first = hub.subscribe();
    let mut second = hub.subscribe();

    hub.publish(HierarchyEvent::HierarchyChanged);
    hub.publish(HierarchyEvent::GraphSelected {
        path: "/a".to_string(),
    });

    let expected = vec![
        HierarchyEvent::HierarchyChanged,
        HierarchyEvent::GraphSelected {
            path: "/a".to_string(),
        },
    ];
    assert_eq!(first.drain(), expected);
    assert_eq!(second.drain(), expected);
}

#[test]
fn dropped_subscribers_are_pruned() {
    let hub = EventHub::new();
    let mut kept = hub.subscribe();
    drop(hub.subscribe());
    assert_eq!(hub.subscriber_count(), 2);

    hub.publish(HierarchyEvent::HierarchyChanged);

    assert_eq!(hub.subscriber_count(), 1);
    assert_eq!(kept.drain().len(), 1);
}

#[test]
fn publish_through_shared_handle() {
    let hub = EventHub::new();
    let mut rx = hub.subscribe();
    let bus: Box<dyn EventBus> = Box::new(hub.clone());

    bus.publish(HierarchyEvent::HierarchyChanged);

    assert!(matches!(rx.try_recv(), Ok(HierarchyEvent::HierarchyChanged)));
    assert!(rx.try_recv().is_err());
}

#[test]
fn event_names_match_wire_names() {
    assert_eq!(HierarchyEvent::HierarchyChanged.name(), "hierarchy-changed");
    let tab = HierarchyEvent::TabContext {
        path: "root/g".to_string(),
        sibling_names: vec!["g".to_string()],
        parent_path: "root".to_string(),
        source: "hierarchy".to_string(),
    };
    assert_eq!(tab.name(), "tab-context");

    let json = serde_json::to_value(&tab).unwrap();
    assert_eq!(json["event"], "tab-context");
    assert_eq!(json["parent_path"], "root");
}
