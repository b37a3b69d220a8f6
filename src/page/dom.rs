//! Browser wiring for the page chrome. Each behaviour is skipped when its elements are missing.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::config::PAGE;

use super::{NavMenu, RevealStyle, anchor_target, header_is_scrolled};

/// Attach every chrome behaviour to the current document. Listeners live for the page's lifetime.
pub fn install() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    install_nav(&document);
    install_header(&window, &document);
    install_anchors(&document);
    install_fade_in(&document);
}

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to attach {} listener: {:?}", event, e);
    }
    closure.forget();
}

fn elements(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

fn apply_reveal(element: &Element, style: RevealStyle) {
    set_style(element, "opacity", style.opacity);
    set_style(element, "transform", style.transform);
    if let Some(transition) = style.transition {
        set_style(element, "transition", transition);
    }
}

/// Paint the menu state onto the toggle, the drawer and the body.
fn apply_nav(menu: NavMenu, toggle: &Element, nav: &Element, document: &Document) {
    let open = menu.is_open();
    let _ = toggle
        .class_list()
        .toggle_with_force(PAGE.classes.nav_toggle_active, open);
    let _ = nav.class_list().toggle_with_force(PAGE.classes.nav_open, open);
    let _ = toggle.set_attribute("aria-expanded", menu.aria_expanded());
    if let Some(body) = document.body() {
        let _ = body.style().set_property("overflow", menu.body_overflow());
    }
}

fn install_nav(document: &Document) {
    let (Some(toggle), Some(nav)) = (
        document.get_element_by_id(PAGE.elements.nav_toggle_id),
        document.get_element_by_id(PAGE.elements.nav_id),
    ) else {
        return;
    };

    let menu = Rc::new(Cell::new(NavMenu::default()));

    {
        let (menu, t, n, d) = (menu.clone(), toggle.clone(), nav.clone(), document.clone());
        listen(&toggle, "click", move |_| {
            let mut m = menu.get();
            m.toggle();
            menu.set(m);
            apply_nav(m, &t, &n, &d);
        });
    }

    if let Ok(links) = nav.query_selector_all(PAGE.elements.nav_link_selector) {
        for link in (0..links.length()).filter_map(|i| links.get(i)) {
            let (menu, t, n, d) = (menu.clone(), toggle.clone(), nav.clone(), document.clone());
            listen(&link, "click", move |_| {
                let mut m = menu.get();
                m.close();
                menu.set(m);
                apply_nav(m, &t, &n, &d);
            });
        }
    }

    let (t, n, d) = (toggle, nav, document.clone());
    listen(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let mut m = menu.get();
        if m.handle_key(&key) {
            menu.set(m);
            apply_nav(m, &t, &n, &d);
        }
    });
}

fn install_header(window: &Window, document: &Document) {
    let Some(header) = document.get_element_by_id(PAGE.elements.header_id) else {
        return;
    };

    let update = {
        let window = window.clone();
        move || {
            let offset = window.page_y_offset().unwrap_or(0.0);
            let _ = header
                .class_list()
                .toggle_with_force(PAGE.classes.header_scrolled, header_is_scrolled(offset));
        }
    };
    update();

    let closure = Closure::<dyn FnMut(Event)>::new(move |_: Event| update());
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &options,
    ) {
        log::warn!("Failed to attach scroll listener: {:?}", e);
    }
    closure.forget();
}

fn install_anchors(document: &Document) {
    for anchor in elements(document, PAGE.elements.anchor_selector) {
        let href_source = anchor.clone();
        let document = document.clone();
        listen(&anchor, "click", move |event| {
            let Some(href) = href_source.get_attribute("href") else {
                return;
            };
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            if let Ok(Some(target)) = document.query_selector(selector) {
                event.prevent_default();
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

fn install_fade_in(document: &Document) {
    let targets = elements(document, PAGE.fade_in.targets);
    if targets.is_empty() {
        return;
    }

    let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    apply_reveal(&entry.target(), RevealStyle::shown());
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(PAGE.fade_in.threshold));
    init.set_root_margin(PAGE.fade_in.root_margin);

    let observer =
        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                log::warn!("IntersectionObserver unavailable, skipping fade-in: {:?}", e);
                return;
            }
        };
    on_intersect.forget();

    for element in targets {
        apply_reveal(&element, RevealStyle::hidden());
        observer.observe(&element);
    }
}
