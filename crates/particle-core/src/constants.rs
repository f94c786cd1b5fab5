// Default tuning for the particle field, matched to the site's look.

// Population and connections
pub const PARTICLE_COUNT: usize = 100;
pub const CONNECT_DISTANCE: f32 = 180.0;
pub const GRID_THRESHOLD: usize = 400; // above this many particles, connections use the spatial grid
pub const PARTICLE_COUNT_LIMIT: usize = 10_000;

// Pointer
pub const MAX_TRAIL: usize = 20;
pub const MAX_TRAIL_LIMIT: usize = 1_000;
pub const POINTER_RADIUS: f32 = 200.0; // particles farther than this ignore the pointer
pub const SPOTLIGHT_RADIUS: f32 = 200.0;
pub const REPEL_RADIUS: f32 = 50.0; // at or inside this, the pointer pushes instead of pulls
pub const ATTRACT_STRENGTH: f32 = 0.03;
pub const REPEL_STRENGTH: f32 = 0.1;
pub const POINTER_ALPHA_BOOST: f32 = 0.3;
pub const MAX_ALPHA: f32 = 0.9;

// Motion
pub const MAX_SPEED: f32 = 2.0;
pub const BOUNCE_DAMPING: f32 = 0.9;
pub const SPAWN_SPEED: f32 = 0.8; // full width of the symmetric spawn velocity range
pub const HUE_FLIP_CHANCE: f64 = 0.001; // per particle per frame

// Spawn ranges (min, span)
pub const BASE_RADIUS_MIN: f32 = 1.0;
pub const BASE_RADIUS_SPAN: f32 = 2.5;
pub const SPAWN_ALPHA_MIN: f32 = 0.3;
pub const SPAWN_ALPHA_SPAN: f32 = 0.5;
pub const PULSE_SPEED_MIN: f32 = 0.02;
pub const PULSE_SPEED_SPAN: f32 = 0.03;

// Pulse oscillation
pub const PULSE_RADIUS_AMPLITUDE: f32 = 0.5;
pub const PULSE_ALPHA_BASE: f32 = 0.4;
pub const PULSE_ALPHA_AMPLITUDE: f32 = 0.2;

// Centre glow
pub const GLOW_PHASE_RATE: f32 = 0.02; // radians per frame
pub const GLOW_BASE: f32 = 0.3;
pub const GLOW_SWING: f32 = 0.1;
pub const GLOW_RADIUS_FRACTION: f32 = 0.4; // of the shorter canvas side

// Trail and particle sprites
pub const TRAIL_DOT_RADIUS: f32 = 8.0;
pub const TRAIL_GLOW_SCALE: f32 = 3.0;
pub const PARTICLE_GLOW_SCALE: f32 = 4.0;
pub const PARTICLE_SATURATION: f32 = 100.0;
pub const PARTICLE_LIGHTNESS: f32 = 55.0;
pub const CORE_LIGHTNESS_BOOST: f32 = 20.0;
pub const CORE_ALPHA_BOOST: f32 = 0.3;

// Connection lines
pub const LINE_LIGHTNESS: f32 = 60.0;
pub const LINE_ALPHA_SCALE: f32 = 0.3;
pub const LINE_WIDTH_SCALE: f32 = 1.5;

// Wall-clock stepping: frames are measured against this refresh rate
pub const REFERENCE_FPS: f32 = 60.0;
pub const MAX_FRAME_STEP: f32 = 4.0; // cap after tab switches and long stalls
