//! Drives a menu the way a presentation layer would: through handles, item
//! registrations and reported input.
use icy_menu::{
    Action, AutoFocus, Focus, Handle, Interaction, Item, Key, Root, Settings, Trigger, button,
    event, handle, item, panel,
};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Element {
    id: handle::Id,
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
    children: Vec<handle::Id>,
}

impl Handle for Element {
    fn id(&self) -> handle::Id {
        self.id
    }

    fn focus(&self) {
        self.log.borrow_mut().push(self.name);
    }

    fn contains(&self, target: handle::Id) -> bool {
        self.id == target || self.children.contains(&target)
    }
}

struct Host {
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Host {
    fn new() -> Self {
        Self {
            log: Rc::default(),
        }
    }

    fn element(&self, name: &'static str) -> Rc<Element> {
        self.element_with_children(name, 0)
    }

    fn element_with_children(&self, name: &'static str, children: usize) -> Rc<Element> {
        Rc::new(Element {
            id: handle::Id::unique(),
            name,
            log: Rc::clone(&self.log),
            children: (0..children).map(|_| handle::Id::unique()).collect(),
        })
    }

    fn focused(&self) -> Vec<&'static str> {
        self.log.borrow().clone()
    }
}

#[test]
fn open_navigate_and_dismiss() {
    let host = Host::new();
    let root = Root::new(Some("menu-button"));
    let (trigger, list) = (host.element("trigger"), host.element_with_children("list", 2));
    root.attach_trigger(&trigger);
    root.attach_list(&list);

    let a = Item::new().value("a").handle(host.element("a"));
    let b = Item::new().value("b").handle(host.element("b"));
    let _a = a.mount_with_id(&root.context(), item::Id::new("a"));
    let _b = b.mount_with_id(&root.context(), item::Id::new("b"));

    assert_eq!(root.state().active_item, None);

    root.dispatch(Action::OpenMenu);

    assert!(root.is_open());
    assert_eq!(root.active_item(), Some(item::Id::new("a")));
    assert_eq!(host.focused(), ["a"]);

    root.dispatch(Action::focus_with(Focus::Next, Trigger::Other));

    assert_eq!(root.active_item(), Some(item::Id::new("b")));
    assert_eq!(root.state().activation_trigger, Trigger::Other);
    assert_eq!(host.focused(), ["a", "b"]);

    assert_eq!(
        root.interaction(Interaction::Pointer(list.children[0])),
        event::Status::Ignored
    );
    assert!(root.is_open());

    assert_eq!(
        root.interaction(Interaction::Pointer(handle::Id::unique())),
        event::Status::Captured
    );
    assert!(!root.is_open());
    assert_eq!(root.state().active_item, None);
    assert!(!root.is_monitoring());
}

#[test]
fn pressing_the_trigger_reaches_the_monitor_and_the_button() {
    let host = Host::new();
    let root = Root::new(None);
    let trigger = host.element("trigger");
    root.attach_trigger(&trigger);

    let press = |root: &Root| {
        root.interaction(Interaction::Pointer(trigger.id()))
            .merge(button::click(&root.context()))
    };

    assert_eq!(press(&root), event::Status::Captured);
    assert!(root.is_open());

    assert_eq!(press(&root), event::Status::Captured);
    assert!(!root.is_open());

    let outside = root
        .interaction(Interaction::Pointer(handle::Id::unique()))
        .merge(event::Status::Ignored);

    assert_eq!(outside, event::Status::Ignored);
}

#[test]
fn registration_order_is_kept_regardless_of_state() {
    let root = Root::new(None);
    let (a, b, c) = (
        Item::new().value("a"),
        Item::new().value("b"),
        Item::new().value("c"),
    );

    let _b = b.mount_with_id(&root.context(), item::Id::new("b"));
    root.dispatch(Action::OpenMenu);
    let _a = a.mount_with_id(&root.context(), item::Id::new("a"));
    root.dispatch(Action::CloseMenu);
    let _c = c.mount_with_id(&root.context(), item::Id::new("c"));

    let ids: Vec<String> = root
        .state()
        .items
        .iter()
        .map(|item| item.id.to_string())
        .collect();

    assert_eq!(ids, ["b", "a", "c"]);
}

#[test]
fn keyboard_round_trip_restores_focus_to_the_trigger() {
    let host = Host::new();
    let root = Root::new(None);
    let trigger = host.element("trigger");
    root.attach_trigger(&trigger);

    let items: Vec<_> = ["new", "open", "save"]
        .into_iter()
        .map(|name| Item::new().value(name).handle(host.element(name)))
        .collect();
    let _registrations: Vec<_> = items.iter().map(|item| item.mount(&root.context())).collect();

    items[1].set_disabled(true);

    assert!(button::key_pressed(&root.context(), &Key::ArrowUp).is_captured());
    assert_eq!(root.active_value().as_deref(), Some("save"));

    assert!(panel::key_pressed(&root.context(), &Key::ArrowUp).status().is_captured());
    assert_eq!(root.active_value().as_deref(), Some("new"));

    assert!(panel::key_pressed(&root.context(), &Key::Escape).status().is_captured());
    assert!(!root.is_open());
    assert_eq!(host.focused().last(), Some(&"trigger"));
}

#[test]
fn selecting_with_the_keyboard_reports_the_value() {
    let root = Root::new(None);
    let (a, b) = (Item::new().value("a"), Item::new().value("b"));
    let _a = a.mount(&root.context());
    let rb = b.mount(&root.context());

    let _ = button::click(&root.context());
    let _ = panel::key_pressed(&root.context(), &Key::End);

    match panel::key_pressed(&root.context(), &Key::Enter) {
        panel::Response::Selected(selection) => {
            assert_eq!(&selection.id, rb.id());
            assert_eq!(selection.value.as_deref(), Some("b"));
        }
        response => panic!("unexpected response: {response:?}"),
    }

    assert!(!root.is_open());
}

#[test]
fn hover_moves_the_active_item() {
    let root = Root::new(None);
    let (a, b) = (Item::new().value("a"), Item::new().value("b"));
    let ra = a.mount(&root.context());
    let rb = b.mount(&root.context());

    root.dispatch(Action::OpenMenu);
    assert!(ra.is_active());

    rb.pointer_enter();
    assert!(rb.is_active());
    assert_eq!(root.state().activation_trigger, Trigger::Pointer);

    rb.pointer_leave();
    assert_eq!(root.state().active_item, None);
    assert!(root.is_open());
}

#[test]
fn unmounting_keeps_track_of_the_active_item() {
    let root = Root::with_settings(None, Settings::default().auto_focus(AutoFocus::OnOpen));
    let (a, b, c) = (Item::new(), Item::new(), Item::new());
    let ra = a.mount_with_id(&root.context(), item::Id::new("a"));
    let _b = b.mount_with_id(&root.context(), item::Id::new("b"));
    let rc = c.mount_with_id(&root.context(), item::Id::new("c"));

    root.dispatch(Action::OpenMenu);
    root.dispatch(Action::focus(Focus::Specific(item::Id::new("c"))));

    drop(ra);
    assert_eq!(root.active_item(), Some(item::Id::new("c")));
    assert_eq!(root.state().active_item, Some(1));

    drop(rc);
    assert_eq!(root.active_item(), None);
    assert_eq!(root.state().items.len(), 1);
}

#[test]
fn focus_callbacks_may_dispatch_again() {
    struct Reentrant {
        id: handle::Id,
        root: RefCell<Option<icy_menu::Context>>,
        calls: Cell<usize>,
    }

    impl Handle for Reentrant {
        fn id(&self) -> handle::Id {
            self.id
        }

        fn focus(&self) {
            self.calls.set(self.calls.get() + 1);

            if let Some(context) = self.root.borrow().as_ref() {
                context.dispatch(Action::CloseMenu);
            }
        }
    }

    let root = Root::with_settings(None, Settings::default());
    let element = Rc::new(Reentrant {
        id: handle::Id::unique(),
        root: RefCell::new(Some(root.context())),
        calls: Cell::new(0),
    });
    let a = Item::new().handle(element.clone());
    let _a = a.mount(&root.context());

    root.dispatch(Action::OpenMenu);

    assert_eq!(element.calls.get(), 1);
    assert!(!root.is_open());

    *element.root.borrow_mut() = None;
}
