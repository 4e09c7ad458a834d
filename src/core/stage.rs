use super::constants::*;
use super::pose::PointerState;
use super::scene::Viewport;
use glam::Vec3;

/// Narrative section the avatar is staged for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Hero,
    About,
    Experience,
    Projects,
    Finale,
}

impl Stage {
    pub fn for_value(stage_value: f32) -> Stage {
        row_for(stage_value).stage
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::Hero => "hero",
            Stage::About => "about",
            Stage::Experience => "experience",
            Stage::Projects => "projects",
            Stage::Finale => "finale",
        }
    }
}

/// Pose and material the avatar should settle toward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageTarget {
    pub position: Vec3,
    pub scale: f32,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub wireframe: bool,
    pub opacity: f32,
}

impl StageTarget {
    fn solid(position: Vec3, scale: f32, rotation_y: f32) -> Self {
        Self {
            position,
            scale,
            rotation_x: 0.0,
            rotation_y,
            wireframe: false,
            opacity: 1.0,
        }
    }
}

/// Everything besides the stage value that a target may depend on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifyInputs {
    pub viewport: Viewport,
    pub elapsed_sec: f32,
}

type TargetFn = fn(f32, &ClassifyInputs) -> StageTarget;

/// One row of the stage table: `[lower, upper)` in stage space.
#[derive(Clone, Copy)]
pub struct StageRow {
    pub stage: Stage,
    pub lower: f32,
    pub upper: f32,
    target: TargetFn,
}

impl StageRow {
    pub fn target(&self, stage_value: f32, inputs: &ClassifyInputs) -> StageTarget {
        (self.target)(stage_value, inputs)
    }
}

impl std::fmt::Debug for StageRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageRow")
            .field("stage", &self.stage)
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .finish()
    }
}

/// Ordered, contiguous rows covering [0, 10]. Each row is inclusive-lower and
/// exclusive-upper except the last, which is closed.
pub const STAGE_TABLE: &[StageRow] = &[
    StageRow {
        stage: Stage::Hero,
        lower: 0.0,
        upper: 1.0,
        target: hero_target,
    },
    StageRow {
        stage: Stage::About,
        lower: 1.0,
        upper: 2.0,
        target: about_target,
    },
    StageRow {
        stage: Stage::Experience,
        lower: 2.0,
        upper: 4.0,
        target: experience_target,
    },
    StageRow {
        stage: Stage::Projects,
        lower: 4.0,
        upper: 6.0,
        target: projects_target,
    },
    StageRow {
        stage: Stage::Finale,
        lower: 6.0,
        upper: STAGE_SPACE_MAX,
        target: finale_target,
    },
];

fn hero_target(_v: f32, inputs: &ClassifyInputs) -> StageTarget {
    let sway = (inputs.elapsed_sec * IDLE_SWAY_RATE).sin() * IDLE_SWAY_AMPLITUDE;
    StageTarget::solid(Vec3::ZERO, 1.5, sway)
}

fn about_target(_v: f32, inputs: &ClassifyInputs) -> StageTarget {
    let x = inputs.viewport.width * SIDE_OFFSET_FRACTION;
    StageTarget::solid(Vec3::new(x, 0.0, 0.0), 1.2, -SIDE_YAW)
}

fn experience_target(v: f32, inputs: &ClassifyInputs) -> StageTarget {
    // zigzag: even units sit left facing right, odd units the reverse
    let side = if v.floor() as i32 % 2 == 0 { -1.0 } else { 1.0 };
    let x = side * inputs.viewport.width * SIDE_OFFSET_FRACTION;
    StageTarget::solid(Vec3::new(x, 0.0, 0.0), 1.0, -side * SIDE_YAW)
}

fn projects_target(v: f32, inputs: &ClassifyInputs) -> StageTarget {
    let wireframe = v > WIREFRAME_THRESHOLD;
    StageTarget {
        position: Vec3::new(0.0, inputs.viewport.height * LIFT_FRACTION, 0.0),
        scale: 0.8,
        rotation_x: 0.0,
        rotation_y: 0.0,
        wireframe,
        opacity: if wireframe { WIREFRAME_OPACITY } else { 1.0 },
    }
}

fn finale_target(_v: f32, inputs: &ClassifyInputs) -> StageTarget {
    StageTarget {
        position: Vec3::new(0.0, -inputs.viewport.height * LIFT_FRACTION, FINALE_DEPTH),
        scale: 0.7,
        rotation_x: 0.0,
        rotation_y: 0.0,
        wireframe: false,
        opacity: FINALE_OPACITY,
    }
}

#[inline]
fn sanitize(stage_value: f32) -> f32 {
    if stage_value.is_finite() {
        stage_value.clamp(0.0, STAGE_SPACE_MAX)
    } else {
        0.0
    }
}

/// Row containing `stage_value`. Out-of-range values land in the first or
/// last row.
pub fn row_for(stage_value: f32) -> &'static StageRow {
    let v = sanitize(stage_value);
    STAGE_TABLE
        .iter()
        .find(|row| v >= row.lower && v < row.upper)
        .unwrap_or(&STAGE_TABLE[STAGE_TABLE.len() - 1])
}

/// Base target for a stage value, before pointer parallax.
pub fn classify(stage_value: f32, inputs: &ClassifyInputs) -> StageTarget {
    let v = sanitize(stage_value);
    row_for(v).target(v, inputs)
}

#[inline]
pub fn parallax_active(stage_value: f32) -> bool {
    stage_value < PARALLAX_BELOW || stage_value > PARALLAX_ABOVE
}

/// Add the pointer look-at offset during the hero and contact stretches.
pub fn apply_parallax(
    mut target: StageTarget,
    stage_value: f32,
    pointer: PointerState,
) -> StageTarget {
    if parallax_active(stage_value) {
        target.rotation_y += pointer.x * PARALLAX_YAW;
        target.rotation_x -= pointer.y * PARALLAX_PITCH;
    }
    target
}

/// Classification plus parallax: the target the frame loop blends toward.
pub fn target_for_frame(
    stage_value: f32,
    inputs: &ClassifyInputs,
    pointer: PointerState,
) -> StageTarget {
    apply_parallax(classify(stage_value, inputs), stage_value, pointer)
}
