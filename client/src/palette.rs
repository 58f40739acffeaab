use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlElement};

pub fn render_palette(
    document: &Document,
    palette_el: &HtmlElement,
    colors: &[&str],
    selected: Option<usize>,
) {
    palette_el.set_inner_html("");
    for (index, color) in colors.iter().enumerate() {
        let Ok(element) = document.create_element("button") else {
            continue;
        };
        let Ok(button) = element.dyn_into::<HtmlButtonElement>() else {
            continue;
        };
        let _ = button.set_attribute("type", "button");
        let _ = button.set_attribute("data-index", &index.to_string());
        let _ = button.set_attribute("aria-label", &format!("Use color {color}"));
        let class_name = if selected == Some(index) {
            "swatch active"
        } else {
            "swatch"
        };
        let _ = button.set_attribute("class", class_name);
        let _ = button.style().set_property("background", color);
        let _ = palette_el.append_child(&button);
    }
}

/// Marks the swatch at `selected` active without rebuilding the buttons.
pub fn mark_selected(palette_el: &HtmlElement, selected: Option<usize>) {
    let Ok(nodes) = palette_el.query_selector_all(".swatch") else {
        return;
    };
    for index in 0..nodes.length() {
        let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let is_selected = element
            .get_attribute("data-index")
            .and_then(|value| value.parse::<usize>().ok())
            == selected;
        let _ = element.class_list().toggle_with_force("active", is_selected);
    }
}

pub fn swatch_index_from_event(event: &Event) -> Option<usize> {
    let mut current = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok());
    while let Some(element) = current {
        if let Some(index) = element.get_attribute("data-index") {
            return index.parse::<usize>().ok();
        }
        current = element.parent_element();
    }
    None
}
