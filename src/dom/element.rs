// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

use crate::error::{AppError, AppResult};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Obtener elemento por ID ya casteado (input, button, form...)
pub fn get_typed_by_id<T: JsCast>(id: &str) -> Option<T> {
    get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> AppResult<()> {
    element.class_list().add_1(class).map_err(AppError::from)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> AppResult<()> {
    element.class_list().remove_1(class).map_err(AppError::from)
}

/// Alternar clase, devuelve si quedó puesta
pub fn toggle_class(element: &Element, class: &str) -> AppResult<bool> {
    element.class_list().toggle(class).map_err(AppError::from)
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> AppResult<()> {
    parent.append_child(child).map(|_| ()).map_err(AppError::from)
}

/// `style.display = value`
pub fn set_display(element: &Element, value: &str) -> AppResult<()> {
    element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| AppError::Dom("Element is not an HtmlElement".to_string()))?
        .style()
        .set_property("display", value)
        .map_err(AppError::from)
}

/// Valor de un `<input>` o `<textarea>` por ID ("" si no existe)
pub fn input_value(id: &str) -> String {
    let Some(element) = get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

/// Query selector all dentro de un elemento (o del document si `root` es None)
pub fn query_selector_all(root: Option<&Element>, selector: &str) -> AppResult<Vec<Element>> {
    let list = match root {
        Some(element) => element.query_selector_all(selector)?,
        None => document()
            .ok_or_else(|| AppError::Dom("No document".to_string()))?
            .query_selector_all(selector)?,
    };

    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Hash actual de la URL ("" si no hay)
pub fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Navegar cambiando el hash (dispara `hashchange`)
pub fn set_hash(hash: &str) {
    if let Some(win) = window() {
        if let Err(e) = win.location().set_hash(hash) {
            log::error!("❌ [DOM] No se pudo cambiar hash a {}: {:?}", hash, e);
        }
    }
}

pub fn set_document_title(title: &str) {
    if let Some(doc) = document() {
        doc.set_title(title);
    }
}

pub fn alert(message: &str) {
    if let Some(win) = window() {
        let _ = win.alert_with_message(message);
    }
}
