//! Browser displays: the widgets write straight into the page.
//! Every element is looked up on each write; a missing element is a silent no-op.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::{Document, Element, HtmlImageElement};

use crate::ui::config::UI_CONFIG;
use crate::ui::{PanelDisplay, StatusLine, TofuDisplay};

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

fn by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

fn mascot_image() -> Option<HtmlImageElement> {
    query(UI_CONFIG.tofu.image_selector)?
        .dyn_into::<HtmlImageElement>()
        .ok()
}

fn restyle(element: &Element, base_class: &str, text: &str, line: &StatusLine) {
    element.set_class_name(base_class);
    element.set_text_content(Some(text));
    if let Some(class) = line.mood_class {
        let _ = element.class_list().add_1(class.css_class());
    }
}

/// Mascot display bound to `#window-tofu`, `#tofu-status` and `#tofu-mood`.
#[derive(Default)]
pub struct DomDisplay {
    // Kept alive until the next image replaces it
    on_error: Option<Closure<dyn FnMut()>>,
}

impl DomDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TofuDisplay for DomDisplay {
    fn show_image(&mut self, src: &str, fallback: &str) {
        let Some(img) = mascot_image() else {
            return;
        };

        let target = img.clone();
        let fallback = fallback.to_string();
        let on_error = Closure::<dyn FnMut()>::new(move || {
            // The fallback itself failing must not loop
            if !target.src().ends_with(&fallback) {
                target.set_src(&fallback);
            }
        });

        img.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        img.set_src(src);
        self.on_error = Some(on_error);
    }

    fn show_status(&mut self, line: &StatusLine) {
        if let Some(status) = by_id(UI_CONFIG.tofu.status_id) {
            restyle(&status, UI_CONFIG.tofu.status_base_class, &line.status, line);
        }
        if let Some(mood) = by_id(UI_CONFIG.tofu.mood_id) {
            restyle(&mood, UI_CONFIG.tofu.mood_base_class, &line.mood_text, line);
        }
    }

    fn show_fallback(&mut self, image: &str, status: &str) {
        if let Some(img) = mascot_image() {
            img.set_src(image);
        }
        if let Some(el) = by_id(UI_CONFIG.tofu.status_id) {
            el.set_text_content(Some(status));
        }
    }
}

/// Streak panel bound to `#window-track .window__content`.
#[derive(Default)]
pub struct DomPanel;

impl PanelDisplay for DomPanel {
    fn set_html(&mut self, html: &str) {
        if let Some(container) = query(UI_CONFIG.track.container_selector) {
            container.set_inner_html(html);
        }
    }
}
