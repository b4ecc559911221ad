use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::{use_scroll_frame, viewport_edges, viewport_height};
use crate::motion::reveal::{RevealIntent, RevealPhase, RevealState, Zone};

pub enum RevealAction {
    Observe(Zone),
    Settle(u32),
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        let changed = match action {
            RevealAction::Observe(zone) => next.observe(zone),
            RevealAction::Settle(generation) => next.settle(generation),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub intent: RevealIntent,
    #[prop_or_default]
    pub class: Classes,
    /// Class for the wrapper put around every child.
    #[prop_or_default]
    pub item_class: Classes,
    #[prop_or_default]
    pub on_phase: Callback<RevealPhase>,
    #[prop_or_default]
    pub children: Children,
}

/// Animates its children into place when the container scrolls into view.
/// Children are staggered in order and leave in reverse order.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reducer_eq(RevealState::default);

    {
        let node = node.clone();
        let dispatcher = state.dispatcher();
        let trigger = props.intent.trigger;
        use_scroll_frame(
            "reveal",
            Callback::from(move |_| {
                let (Some((top, bottom)), Some(height)) = (viewport_edges(&node), viewport_height())
                else {
                    return;
                };
                dispatcher.dispatch(RevealAction::Observe(trigger.zone(top, bottom, height)));
            }),
        );
    }

    // Settle once the group has finished moving. A newer direction change
    // drops this timeout, and the generation check covers any that slip through.
    {
        let dispatcher = state.dispatcher();
        let intent = props.intent.clone();
        let count = props.children.len().max(1);
        use_effect_with_deps(
            move |state: &RevealState| {
                let generation = state.generation();
                let timeout = state.is_animating().then(|| {
                    Timeout::new(intent.total_ms(count, state.is_shown()), move || {
                        dispatcher.dispatch(RevealAction::Settle(generation))
                    })
                });
                move || drop(timeout)
            },
            *state,
        );
    }

    {
        let on_phase = props.on_phase.clone();
        use_effect_with_deps(
            move |phase| {
                on_phase.emit(*phase);
                || ()
            },
            state.phase(),
        );
    }

    let count = props.children.len();
    html! {
        <div ref={node} class={props.class.clone()} data-phase={format!("{:?}", state.phase())}>
            { for props.children.iter().enumerate().map(|(index, child)| html! {
                <div class={props.item_class.clone()} style={props.intent.style(index, count, *state)}>
                    { child }
                </div>
            }) }
        </div>
    }
}
