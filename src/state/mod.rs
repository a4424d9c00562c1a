// ============================================================================
// STATE MODULE - Estado compartido con Rc<RefCell> + localStorage
// ============================================================================

pub mod auth_state;
pub mod router_state;
pub mod app_state;

pub use auth_state::*;
pub use router_state::*;
pub use app_state::*;
