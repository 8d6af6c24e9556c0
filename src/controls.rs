
//! Keyboard editing of the scene parameters.

use crate::{
    math::*,
    scene::Scene,
};

/// How far a held key drags a component each tick.
pub const DRAG_STEP: f32 = 0.01;
pub const FAST_FACTOR: f32 = 10.;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parameter {
    CameraTranslate,
    CameraRotate,
    SphereCenter,
    SphereRadius,
    PlanePoint,
    PlaneNormal,
}

impl Parameter {
    pub const ALL: [Parameter; 6] = [
        Parameter::CameraTranslate,
        Parameter::CameraRotate,
        Parameter::SphereCenter,
        Parameter::SphereRadius,
        Parameter::PlanePoint,
        Parameter::PlaneNormal,
    ];

    fn index(self) -> usize {
        Self::ALL.iter()
            .position(|p| *p == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Parameter {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn from_number(n: usize) -> Option<Parameter> {
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    pub fn label(self) -> &'static str {
        use Parameter::*;
        match self {
            CameraTranslate => "CameraTranslate",
            CameraRotate    => "CameraRotate",
            SphereCenter    => "Sphere Pos",
            SphereRadius    => "Sphere Radius",
            PlanePoint      => "Plane Point",
            PlaneNormal     => "Plane Normal",
        }
    }

    /// Formats this parameter's current value in `scene`.
    pub fn value(self, scene: &Scene) -> String {
        let v3 = |v: V3| format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z);
        use Parameter::*;
        match self {
            CameraTranslate => v3(scene.camera.translate),
            CameraRotate    => v3(scene.camera.rotate),
            SphereCenter    => v3(scene.sphere.center.coords),
            SphereRadius    => format!("{:.3}", scene.sphere.radius),
            PlanePoint      => v3(scene.plane.point.coords),
            PlaneNormal     => v3(scene.plane.normal),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Inputs {
    pub x_pos: bool,
    pub x_neg: bool,
    pub y_pos: bool,
    pub y_neg: bool,
    pub z_pos: bool,
    pub z_neg: bool,
    pub fast:  bool,

    pub cycle:  u32,
    pub select: Option<Parameter>,
}

impl Inputs {
    pub fn new() -> Inputs {
        Inputs {
            x_pos: false,
            x_neg: false,
            y_pos: false,
            y_neg: false,
            z_pos: false,
            z_neg: false,
            fast:  false,

            cycle:  0,
            select: None,
        }
    }

    /// Hands out this tick's inputs, clearing one-shot presses and keeping
    /// held keys.
    pub fn take(&mut self) -> Inputs {
        let out = *self;
        self.cycle = 0;
        self.select = None;
        out
    }

    /// Lets go of every held key, for when the window stops receiving key
    /// releases.
    pub fn release(&mut self) {
        *self = Inputs { cycle: self.cycle, select: self.select, ..Inputs::new() };
    }

    fn drag(&self) -> V3 {
        let axis = |pos: bool, neg: bool| (pos as i32 - neg as i32) as f32;
        let step = if self.fast { DRAG_STEP * FAST_FACTOR } else { DRAG_STEP };
        step * V3::new(
            axis(self.x_pos, self.x_neg),
            axis(self.y_pos, self.y_neg),
            axis(self.z_pos, self.z_neg),
        )
    }
}

pub struct Controls {
    selected: Parameter,
    dragging: bool,
}

impl Controls {
    pub fn new() -> Controls {
        Controls { selected: Parameter::CameraTranslate, dragging: false }
    }

    pub fn selected(&self) -> Parameter {
        self.selected
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Applies one tick of input to `scene`. Returns whether anything changed.
    pub fn apply(&mut self, inputs: &Inputs, scene: &mut Scene) -> bool {
        let before = self.selected;
        if self.dragging && (inputs.select.is_some() || inputs.cycle > 0) {
            self.finish_drag(scene);
        }
        if let Some(p) = inputs.select {
            self.selected = p;
        }
        for _ in 0 .. inputs.cycle {
            self.selected = self.selected.next();
        }
        if self.selected != before {
            log::info!("editing {}", self.selected.label());
        }

        let delta = inputs.drag();
        if delta == V3::zeros() {
            if self.dragging {
                self.finish_drag(scene);
            }
            return false;
        }
        self.dragging = true;

        use Parameter::*;
        match self.selected {
            CameraTranslate => scene.camera.translate += delta,
            CameraRotate    => scene.camera.rotate    += delta,
            SphereCenter    => scene.sphere.center    += delta,
            SphereRadius    => scene.sphere.radius    += delta.x + delta.y + delta.z,
            PlanePoint      => scene.plane.point      += delta,
            PlaneNormal     => scene.plane.normal     += delta,
        }

        log::debug!("{}: {:?}", self.selected.label(), scene);
        true
    }

    fn finish_drag(&mut self, scene: &Scene) {
        self.dragging = false;
        log::info!("{} = {}", self.selected.label(), self.selected.value(scene));
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        approx::assert_relative_eq,
    };

    #[test]
    fn cycling_visits_everything() {
        let mut p = Parameter::CameraTranslate;
        let mut seen = Vec::new();
        for _ in 0 .. Parameter::ALL.len() {
            seen.push(p);
            p = p.next();
        }
        assert_eq!(p, Parameter::CameraTranslate);
        assert_eq!(seen, Parameter::ALL.to_vec());
    }

    #[test]
    fn numbered_selection() {
        assert_eq!(Parameter::from_number(0), None);
        assert_eq!(Parameter::from_number(1), Some(Parameter::CameraTranslate));
        assert_eq!(Parameter::from_number(6), Some(Parameter::PlaneNormal));
        assert_eq!(Parameter::from_number(7), None);
    }

    #[test]
    fn drag_radius() {
        let mut scene = Scene::default();
        let mut controls = Controls::new();
        let mut inputs = Inputs::new();

        inputs.select = Some(Parameter::SphereRadius);
        inputs.y_pos = true;

        assert!(controls.apply(&inputs.take(), &mut scene));
        assert_eq!(controls.selected(), Parameter::SphereRadius);
        assert_relative_eq!(scene.sphere.radius, 1.01, epsilon = 1e-6);

        // the key is still held, the selection is not repeated
        assert!(inputs.select.is_none());
        inputs.fast = true;
        controls.apply(&inputs.take(), &mut scene);
        assert_relative_eq!(scene.sphere.radius, 1.11, epsilon = 1e-6);
    }

    #[test]
    fn drag_plane_normal() {
        let mut scene = Scene::default();
        let mut controls = Controls::new();
        let mut inputs = Inputs::new();

        inputs.cycle = 5;
        inputs.x_pos = true;
        inputs.z_neg = true;
        controls.apply(&inputs.take(), &mut scene);

        assert_eq!(controls.selected(), Parameter::PlaneNormal);
        assert_relative_eq!(scene.plane.normal, V3::new(0.01, 1., -0.01), epsilon = 1e-6);
        assert_eq!(scene.camera, Scene::default().camera);
    }

    #[test]
    fn idle_changes_nothing() {
        let mut scene = Scene::default();
        let mut controls = Controls::new();

        let mut inputs = Inputs::new();
        inputs.x_pos = true;
        inputs.x_neg = true;
        inputs.cycle = 1;

        assert!(!controls.apply(&inputs, &mut scene));
        assert_eq!(controls.selected(), Parameter::CameraRotate);
        assert_eq!(scene, Scene::default());
    }

    #[test]
    fn release_drops_held_keys() {
        let mut inputs = Inputs::new();
        inputs.x_pos = true;
        inputs.z_neg = true;
        inputs.fast = true;
        inputs.cycle = 2;
        inputs.release();

        assert_eq!(inputs.drag(), V3::zeros());
        assert!(!inputs.fast);
        assert_eq!(inputs.cycle, 2);
    }

    #[test]
    fn drag_ends_when_keys_lift() {
        let mut scene = Scene::default();
        let mut controls = Controls::new();
        let mut inputs = Inputs::new();

        inputs.select = Some(Parameter::SphereCenter);
        inputs.y_pos = true;
        controls.apply(&inputs.take(), &mut scene);
        assert!(controls.is_dragging());

        inputs.release();
        assert!(!controls.apply(&inputs.take(), &mut scene));
        assert!(!controls.is_dragging());
        assert_eq!(Parameter::SphereCenter.value(&scene), "(0.000, 1.010, 0.000)");
    }

    #[test]
    fn switching_parameter_ends_drag() {
        let mut scene = Scene::default();
        let mut controls = Controls::new();
        let mut inputs = Inputs::new();

        inputs.x_pos = true;
        controls.apply(&inputs.take(), &mut scene);
        assert!(controls.is_dragging());

        inputs.select = Some(Parameter::SphereRadius);
        inputs.x_pos = false;
        controls.apply(&inputs.take(), &mut scene);
        assert!(!controls.is_dragging());
        assert_eq!(Parameter::SphereRadius.value(&scene), "1.000");
    }
}
