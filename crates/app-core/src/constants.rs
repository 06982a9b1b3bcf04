// Shared scene and interaction tuning constants used by the web frontend.

// Scene layout
pub const GARMENT_Y: f32 = -0.5; // vertical offset of both garments
pub const TEE_HOME_X: f32 = -8.0; // parked position when the hoodie is centered
pub const HOODIE_HOME_X: f32 = 8.0; // parked position when the tee is centered

// Visual sizing
pub const BASE_SCALE: f32 = 3.0; // idle garment size
pub const HOVER_SCALE: f32 = 3.2; // garment size while under the pointer

// Animation
pub const SPIN_RATE: f32 = 0.5; // auto-rotation, radians per second
pub const SMOOTHING: f32 = 0.1; // exponential approach factor, applied once per tick
pub const DRAG_ROTATION_PER_PX: f32 = 0.01; // radians per CSS pixel of horizontal drag
pub const SELECT_PULSE_SECS: f32 = 1.0; // highlight duration after a shop-link click

// Camera
pub const CAMERA_Z: f32 = 4.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;

// Interaction
pub const PICK_SPHERE_RADIUS: f32 = 1.8; // ray-sphere radius for garment picking

// Model assets, served next to the page
pub const TEE_MODEL_URL: &str = "/models/TSHIRT.glb";
pub const HOODIE_MODEL_URL: &str = "/models/HOODIE.glb";

// Product pages opened on click
pub const TEE_SHOP_URL: &str = "https://thenetwork1ng.github.io/TshirtPC/";
pub const HOODIE_SHOP_URL: &str = "https://thenetwork1ng.github.io/Hoodie/";
