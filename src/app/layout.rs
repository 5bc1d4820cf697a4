use leptos::prelude::document;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::sections::{SectionExtent, SectionId, SectionLayout};

/// Reads section placement from the live document, looking sections up by element id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLayout;

impl SectionLayout for DomLayout {
    fn extent(&self, section: SectionId) -> Option<SectionExtent> {
        let el = document()
            .get_element_by_id(section.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionExtent::new(
            f64::from(el.offset_top()),
            f64::from(el.offset_height()),
        ))
    }

    fn scroll_into_view(&self, section: SectionId) -> bool {
        let Some(el) = document().get_element_by_id(section.as_str()) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}
