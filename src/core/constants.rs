// Motion and scene tuning constants shared by the classifier, the
// interpolator and the renderer.

// Scroll mapping
pub const STAGE_SPACE_SCALE: f32 = 10.0; // progress 0..1 -> stage value 0..10
pub const STAGE_SPACE_MAX: f32 = STAGE_SPACE_SCALE;

// Per-frame smoothing (fixed blend, not dt-corrected)
pub const POSE_LERP_ALPHA: f32 = 0.05;

// Idle motion
pub const IDLE_SWAY_AMPLITUDE: f32 = 0.2; // hero yaw oscillation (rad)
pub const IDLE_SWAY_RATE: f32 = 0.5; // rad/s
pub const BREATH_AMPLITUDE: f32 = 0.02; // vertical bob (world units)
pub const BREATH_RATE: f32 = 1.0; // rad/s

// Pointer parallax
pub const PARALLAX_YAW: f32 = 0.3;
pub const PARALLAX_PITCH: f32 = 0.2;
pub const PARALLAX_BELOW: f32 = 1.0; // active while stage value < this
pub const PARALLAX_ABOVE: f32 = 9.0; // ...or > this

// Stage poses
pub const SIDE_OFFSET_FRACTION: f32 = 0.2; // of viewport width
pub const LIFT_FRACTION: f32 = 0.1; // of viewport height
pub const SIDE_YAW: f32 = 0.4;
pub const WIREFRAME_THRESHOLD: f32 = 4.5; // strict: value > threshold
pub const WIREFRAME_OPACITY: f32 = 0.4;
pub const FINALE_DEPTH: f32 = -2.0;
pub const FINALE_OPACITY: f32 = 0.3;

// Camera
pub const CAMERA_Z: f32 = 5.0;
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Head material
pub const HEAD_COLOR: [f32; 3] = [0.0, 0.949, 1.0]; // #00f2ff
pub const HEAD_EMISSIVE: [f32; 3] = [0.0, 0.4, 1.0]; // #0066ff
pub const HEAD_EMISSIVE_INTENSITY: f32 = 0.2;
pub const HEAD_METALNESS: f32 = 0.9;
pub const HEAD_ROUGHNESS: f32 = 0.1;
pub const HEAD_DISTORT: f32 = 0.3;
pub const HEAD_DISTORT_SPEED: f32 = 2.0;
pub const HEAD_SEGMENTS: u32 = 64;

// Decorative ring
pub const RING_RADIUS: f32 = 1.2;
pub const RING_TUBE: f32 = 0.01;
pub const RING_RADIAL_SEGMENTS: u32 = 16;
pub const RING_TUBULAR_SEGMENTS: u32 = 100;
pub const RING_SCALE: f32 = 1.1;
pub const RING_ROLL: f32 = std::f32::consts::FRAC_PI_4;
pub const RING_OPACITY: f32 = 0.3;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const KEY_LIGHT_POS: [f32; 3] = [10.0, 10.0, 10.0];
pub const KEY_LIGHT_COLOR: [f32; 3] = [0.0, 0.949, 1.0];
pub const KEY_LIGHT_INTENSITY: f32 = 2.0;
pub const FILL_LIGHT_POS: [f32; 3] = [-10.0, -10.0, -10.0];
pub const FILL_LIGHT_COLOR: [f32; 3] = [0.0, 0.4, 1.0];
pub const FILL_LIGHT_INTENSITY: f32 = 1.0;

// Page background (#050505)
pub const CLEAR_COLOR: [f64; 3] = [0.0196, 0.0196, 0.0196];
