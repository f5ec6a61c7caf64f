// =============================================================================
// Interactive Studios Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Shell
// 2. Navigation
// 3. Landing Sections
// =============================================================================

pub mod hero;
pub mod nav;
pub mod scene;
pub mod shell;

pub use hero::Hero;
pub use nav::{NavButton, NavItem, Navbar};
pub use scene::SceneBackground;
pub use shell::Shell;
