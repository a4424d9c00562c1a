// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// - Listeners en elementos del DOM: cuando el contenido se reemplaza (set_inner_html),
//   el navegador limpia los listeners junto con los nodos, así que closure.forget() es seguro.
// - Listeners globales (window): registrar UNA sola vez al iniciar la app.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent};

use crate::error::AppResult;

/// Listener genérico sobre cualquier EventTarget
pub fn on_event<F>(target: &EventTarget, event_type: &str, handler: F) -> AppResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Helper para crear click handler simple
pub fn on_click<F>(target: &EventTarget, handler: F) -> AppResult<()>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Submit de formulario con `preventDefault()` ya aplicado
pub fn on_submit<F>(target: &EventTarget, mut handler: F) -> AppResult<()>
where
    F: FnMut() + 'static,
{
    on_event(target, "submit", move |e: Event| {
        e.prevent_default();
        handler();
    })
}
