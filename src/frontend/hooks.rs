use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::cycle::{CycleAction, KeyedSelector, Selector};
use crate::overlay::{Toast, ToastKind};

pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CycleState(pub Selector);

impl Reducible for CycleState {
    type Action = CycleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut selector = self.0;
        selector.apply(action);
        if selector == self.0 {
            self
        } else {
            Rc::new(Self(selector))
        }
    }
}

pub enum SkillsAction {
    Tick,
    Hover(&'static str),
    Leave,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkillsState(pub KeyedSelector<&'static str>);

impl Reducible for SkillsState {
    type Action = SkillsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut grid = self.0.clone();
        match action {
            SkillsAction::Tick => {
                grid.tick();
            }
            SkillsAction::Hover(key) => grid.hover(key),
            SkillsAction::Leave => grid.leave(),
        }
        Rc::new(Self(grid))
    }
}

pub enum ToastAction {
    Show(String, ToastKind),
    Dismiss,
    Expire(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastState(pub Toast);

impl Reducible for ToastState {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toast = self.0.clone();
        match action {
            ToastAction::Show(text, kind) => {
                toast.show(&text, kind);
            }
            ToastAction::Dismiss => toast.dismiss(),
            ToastAction::Expire(generation) => {
                if !toast.expire(generation) {
                    return self;
                }
            }
        }
        Rc::new(Self(toast))
    }
}

/// Arms a one-shot timer for the next advance. Re-armed whenever the index
/// moves; dropped while paused or on unmount.
#[hook]
fn use_cycle_timer(paused: bool, index: usize, period_ms: Option<u32>, on_tick: Callback<()>) {
    use_effect_with((paused, index, period_ms), move |(paused, _, period_ms)| {
        let timeout = match (*paused, *period_ms) {
            (false, Some(period)) => Some(Timeout::new(period, move || on_tick.emit(()))),
            _ => None,
        };
        move || drop(timeout)
    });
}

#[hook]
pub fn use_cycle(len: usize, period_ms: Option<u32>) -> UseReducerHandle<CycleState> {
    let state = use_reducer(|| CycleState(Selector::new(len)));
    let on_tick = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(CycleAction::Tick))
    };
    use_cycle_timer(state.0.is_paused(), state.0.index(), period_ms, on_tick);
    state
}

#[hook]
pub fn use_skill_cycle(keys: Vec<&'static str>, period_ms: u32) -> UseReducerHandle<SkillsState> {
    let state = use_reducer(move || SkillsState(KeyedSelector::new(keys)));
    let on_tick = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(SkillsAction::Tick))
    };
    let selector = *state.0.selector();
    use_cycle_timer(selector.is_paused(), selector.index(), Some(period_ms), on_tick);
    state
}

/// Hides the toast once its window passes. The pending timer is cancelled when
/// the toast is dismissed, shown again, or the owner unmounts.
#[hook]
pub fn use_toast_timer(toast: &UseReducerHandle<ToastState>) {
    let generation = toast.0.generation();
    let visible = toast.0.is_visible();
    let window_ms = toast.0.window_ms();
    let dispatcher = toast.dispatcher();

    use_effect_with((generation, visible), move |(generation, visible)| {
        let generation = *generation;
        let timeout = visible.then(|| {
            Timeout::new(window_ms, move || dispatcher.dispatch(ToastAction::Expire(generation)))
        });
        move || drop(timeout)
    });
}

fn schedule_elapsed(
    slot: Rc<RefCell<Option<AnimationFrame>>>,
    elapsed: UseStateHandle<f64>,
    started: f64,
    duration_ms: f64,
) {
    let next = Rc::clone(&slot);
    let handle = request_animation_frame(move |_| {
        let value = (now_ms() - started).min(duration_ms);
        elapsed.set(value);
        if value < duration_ms {
            schedule_elapsed(next, elapsed, started, duration_ms);
        }
    });
    *slot.borrow_mut() = Some(handle);
}

#[hook]
pub fn use_elapsed<K>(key: K, duration_ms: f64) -> f64
where
    K: PartialEq + 'static,
{
    let elapsed = use_state(|| 0.0_f64);
    {
        let elapsed = elapsed.clone();
        use_effect_with(key, move |_| {
            elapsed.set(0.0);
            let slot: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
            schedule_elapsed(Rc::clone(&slot), elapsed, now_ms(), duration_ms);
            move || {
                slot.borrow_mut().take();
            }
        });
    }
    *elapsed
}
