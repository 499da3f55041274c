/// DOM hooks and timings for the web front-end.
///
/// Element ids are the contract with the host page; everything here is
/// optional on the page side and a missing element simply disables its layer.
// Canvases
pub const FIELD_CANVAS_ID: &str = "field-canvas";
pub const SCENE_CANVAS_ID: &str = "scene-canvas";

// Cursor follower elements
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const CURSOR_TRAIL_ID: &str = "cursor-trail";
pub const CURSOR_BURST_ID: &str = "cursor-burst";

// Elements that put the cursor into its hover state
pub const HOVER_SELECTOR: &str = "a, button, [data-cursor-hover]";

// Loading splash
pub const SPLASH_ID: &str = "loading-screen";
pub const SPLASH_DELAY_MS: i32 = 2000;
pub const HIDDEN_CLASS: &str = "hidden";

// Data-attribute overrides read from the field canvas (`data-particles`, `data-seed`)
pub const DATA_PARTICLES: &str = "particles";
pub const DATA_SEED: &str = "seed";
pub const MAX_PARTICLES: usize = 400; // links are all-pairs

// Backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Scene clear colour; fully transparent so the page shows through
pub const SCENE_CLEAR: [f64; 4] = [0.0, 0.0, 0.0, 0.0];
