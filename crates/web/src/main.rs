// =============================================================================
// Interactive Studios Web - WASM Entry Point
// =============================================================================
// Trunk compiles this binary and injects it into index.html.
// =============================================================================

fn main() {
    interactive_studios_web::start();
}
