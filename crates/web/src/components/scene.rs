// =============================================================================
// Interactive Studios Web - 3D Scene Background
// =============================================================================
// Full-bleed Spline scene pinned behind the UI. The `spline-viewer` web
// component is loaded by index.html and fetches the asset on its own; the
// shell never waits on it.
// =============================================================================

use leptos::prelude::*;

/// Fixed background layer hosting the remote scene.
#[component]
pub fn SceneBackground(#[prop(into)] url: String) -> impl IntoView {
    log::debug!("Embedding scene {}", url);

    view! {
        <div class="scene-background" aria-hidden="true">
            <spline-viewer url=url></spline-viewer>
        </div>
    }
}
