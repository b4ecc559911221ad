//! Two-pane section that sticks to the viewport while its right-hand list
//! scrolls through.
//!
//! The outer wrapper is made taller than the viewport by exactly the scroll
//! the animation consumes; the stage inside it is `position: sticky`, so the
//! browser does the pinning and we only translate the list.

use web_sys::HtmlElement;
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::hooks::{use_scroll_frame, viewport_edges};
use crate::motion::pin::{LayoutCache, PinGeometry};

/// Handed to the list items so late-loading content (images) can ask for a
/// fresh measurement.
#[derive(Clone, PartialEq)]
pub struct Relayout(pub Callback<()>);

#[derive(Properties, PartialEq)]
pub struct PinnedPanelProps {
    pub id: AttrValue,
    /// Left pane content.
    pub aside: Html,
    /// Start with the left pane at full width and split to half while the
    /// section first scrolls in.
    #[prop_or_default]
    pub split: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn measure(stage: &NodeRef, list: &NodeRef, split: bool) -> Option<PinGeometry> {
    let stage = stage.cast::<HtmlElement>()?;
    let list = list.cast::<HtmlElement>()?;
    let container = f64::from(stage.client_height());
    let geometry = PinGeometry::new(container, f64::from(list.scroll_height()));
    Some(if split {
        geometry.with_split(container)
    } else {
        geometry
    })
}

#[function_component(PinnedPanel)]
pub fn pinned_panel(props: &PinnedPanelProps) -> Html {
    let section = use_node_ref();
    let stage = use_node_ref();
    let list = use_node_ref();
    let cache = use_mut_ref(LayoutCache::default);
    let geometry = use_state_eq(PinGeometry::default);
    let frame = use_state_eq(|| PinGeometry::default().frame(0.0));
    let window_size = use_window_size();
    let split = props.split;

    let update = {
        let (section, stage, list, cache) =
            (section.clone(), stage.clone(), list.clone(), cache.clone());
        let (geometry, frame) = (geometry.setter(), frame.setter());
        Callback::from(move |_| {
            let measured = cache
                .borrow_mut()
                .get_or_measure(|| measure(&stage, &list, split));
            let (Some(measured), Some((top, _))) = (measured, viewport_edges(&section)) else {
                return;
            };
            geometry.set(measured);
            frame.set(measured.frame(-top));
        })
    };

    let relayout = {
        let update = update.clone();
        Callback::from(move |_| {
            cache.borrow_mut().invalidate();
            update.emit(());
        })
    };

    use_scroll_frame("pinned panel", update);

    {
        let relayout = relayout.clone();
        use_effect_with_deps(
            move |_| {
                relayout.emit(());
                || ()
            },
            (window_size, props.children.len()),
        );
    }

    let outer_style = format!("height: calc(100vh + {:.0}px);", geometry.scroll_length());
    let (aside_style, track_style) = if split {
        (
            format!("width: {:.3}%;", frame.left_width),
            format!("width: {:.3}%;", 100.0 - frame.left_width),
        )
    } else {
        (String::new(), String::new())
    };
    let list_style = format!("transform: translate3d(0, {:.1}px, 0);", frame.list_offset);

    html! {
        <ContextProvider<Relayout> context={Relayout(relayout)}>
            <section
                id={props.id.clone()}
                ref={section}
                class={classes!(
                    "pin-section",
                    split.then(|| "pin-split"),
                    frame.pinned.then(|| "is-pinned"),
                    props.class.clone()
                )}
                style={outer_style}
            >
                <style>
                    {r#"
                        .pin-section { position: relative; }
                        .pin-stage {
                            position: sticky;
                            top: 0;
                            height: 100vh;
                            display: flex;
                            overflow: hidden;
                        }
                        .pin-aside, .pin-track { width: 50%; height: 100%; }
                        .pin-aside {
                            display: flex;
                            flex-direction: column;
                            justify-content: center;
                            padding: 0 4vw;
                            box-sizing: border-box;
                        }
                        .pin-track { overflow: hidden; }
                        .pin-list { padding: 10vh 4vw; box-sizing: border-box; will-change: transform; }
                        .pin-split .pin-list { width: 50vw; }
                        @media (max-width: 768px) {
                            .pin-aside { padding: 0 1.25rem; }
                            .pin-list { padding: 10vh 1.25rem; }
                        }
                    "#}
                </style>
                <div ref={stage} class="pin-stage">
                    <div class="pin-aside" style={aside_style}>{ props.aside.clone() }</div>
                    <div class="pin-track" style={track_style}>
                        <div ref={list} class="pin-list" style={list_style}>
                            { for props.children.iter() }
                        </div>
                    </div>
                </div>
            </section>
        </ContextProvider<Relayout>>
    }
}
