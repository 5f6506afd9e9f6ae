//! The root of a menu.
use crate::children::{Children, RenderArgs};
use crate::context::Context;
use crate::core::item::{self, Descriptor};
use crate::core::{Action, Focus, Handle, MenuState, State, Store, handle};
use crate::event;
use crate::monitor::{Interaction, Monitor};
use crate::settings::{AutoFocus, Settings};

use std::rc::Rc;

/// The root of a menu.
///
/// A [`Root`] owns the [`State`] of a menu and performs its two effects:
///
/// - It closes the menu when the host reports an [`Interaction`] outside of
///   the trigger and the item list while the menu is open.
/// - It focuses the first item whenever the menu is open, has items and
///   either of those changed (see [`AutoFocus`]).
///
/// Dropping the [`Root`] tears the menu down.
#[derive(Debug)]
pub struct Root {
    context: Context,
}

impl Root {
    /// Creates a new closed [`Root`] without items.
    ///
    /// The `id` is a stable identifier of the trigger, if the host has one.
    pub fn new(id: Option<&str>) -> Self {
        Self::with_settings(id, Settings::default())
    }

    /// Creates a new [`Root`] with the given [`Settings`].
    pub fn with_settings(id: Option<&str>, settings: Settings) -> Self {
        let state = State::new(id);

        Self {
            context: Context::new(Controller::new(state, settings)),
        }
    }

    /// Returns the [`Context`] to hand down to the descendants of the menu.
    pub fn context(&self) -> Context {
        self.context.clone()
    }

    /// Returns a snapshot of the current [`State`].
    pub fn state(&self) -> State {
        self.context.state()
    }

    /// Dispatches an [`Action`] to the menu.
    pub fn dispatch(&self, action: Action) {
        self.context.dispatch(action);
    }

    /// Returns whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Returns the id of the active item, if any.
    pub fn active_item(&self) -> Option<item::Id> {
        self.state().active().map(|item| item.id.clone())
    }

    /// Returns the value of the active item, if any.
    pub fn active_value(&self) -> Option<String> {
        self.state().active().and_then(Descriptor::value)
    }

    /// Attaches the element that toggles the menu.
    pub fn attach_trigger<H>(&self, trigger: &Rc<H>)
    where
        H: Handle + 'static,
    {
        self.dispatch(Action::SetTrigger(Some(handle::downgrade(trigger))));
    }

    /// Attaches the element that contains the items.
    pub fn attach_list<H>(&self, list: &Rc<H>)
    where
        H: Handle + 'static,
    {
        self.dispatch(Action::SetList(Some(handle::downgrade(list))));
    }

    /// Processes an [`Interaction`] reported by the host.
    ///
    /// Closes the menu if it is open and the interaction happened outside of
    /// the trigger and the item list.
    pub fn interaction(&self, interaction: Interaction) -> event::Status {
        if !self.context.is_outside(interaction) {
            return event::Status::Ignored;
        }

        log::debug!("Menu closed by outside interaction on {}", interaction.target());

        self.dispatch(Action::CloseMenu);

        event::Status::Captured
    }

    /// Returns whether the outside interaction monitor is subscribed.
    pub fn is_monitoring(&self) -> bool {
        self.context.is_monitoring()
    }

    /// Produces the content of the menu for its current open state.
    pub fn view<T>(&self, children: &Children<'_, T>) -> T
    where
        T: Clone,
    {
        children.render(RenderArgs {
            open: self.is_open(),
        })
    }
}

impl Drop for Root {
    fn drop(&mut self) {
        self.context.teardown();
    }
}

/// What the auto-focus effect saw last time it ran.
struct Settled {
    items: Rc<[Descriptor]>,
    menu_state: MenuState,
}

impl Settled {
    fn of(state: &State) -> Self {
        Self {
            items: Rc::clone(&state.items),
            menu_state: state.menu_state,
        }
    }
}

pub(crate) struct Controller {
    store: Store,
    monitor: Monitor,
    settings: Settings,
    settled: Settled,
    torn_down: bool,
}

impl Controller {
    pub(crate) fn new(state: State, settings: Settings) -> Self {
        Self {
            settled: Settled::of(&state),
            store: Store::new(state),
            monitor: Monitor::default(),
            settings,
            torn_down: false,
        }
    }

    pub(crate) fn state(&self) -> &State {
        self.store.state()
    }

    pub(crate) fn settings(&self) -> Settings {
        self.settings
    }

    /// Applies the [`Action`], returning the item that must receive focus.
    pub(crate) fn apply(&mut self, action: Action) -> Option<Descriptor> {
        if self.torn_down {
            log::trace!("Menu is torn down, ignoring {action:?}");
            return None;
        }

        self.store.apply(action)
    }

    /// Brings the effects of the menu in line with its current state.
    ///
    /// Returns the follow-up action of the auto-focus effect, if it has to
    /// run.
    pub(crate) fn settle(&mut self) -> Option<Action> {
        if self.torn_down {
            return None;
        }

        let state = self.store.state();

        let excluded = [state.trigger.clone(), state.list.clone()]
            .into_iter()
            .flatten()
            .collect();

        self.monitor.sync(state.is_open(), excluded);

        let previous = std::mem::replace(&mut self.settled, Settled::of(state));

        let items_changed = !Rc::ptr_eq(&previous.items, &state.items);
        let opened = previous.menu_state != state.menu_state;

        if !items_changed && !opened {
            return None;
        }

        if !state.is_open() || state.items.is_empty() {
            return None;
        }

        let run = match self.settings.auto_focus {
            AutoFocus::EveryChange => true,
            AutoFocus::OnOpen => opened || previous.items.is_empty(),
            AutoFocus::Never => false,
        };

        run.then(|| Action::focus(Focus::First))
    }

    pub(crate) fn is_outside(&self, interaction: Interaction) -> bool {
        self.monitor.is_outside(interaction)
    }

    pub(crate) fn is_monitoring(&self) -> bool {
        self.monitor.is_active()
    }

    pub(crate) fn teardown(&mut self) {
        self.monitor.release();
        self.torn_down = true;
    }
}
